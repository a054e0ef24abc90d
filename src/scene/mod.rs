//! The viewer's drawable scene: terrain plus static props

pub mod config;
pub mod object;
pub mod builder;

pub use builder::Scene;
pub use config::{CameraConfig, RockConfig, SceneConfig};
pub use object::{SceneObject, Shading};

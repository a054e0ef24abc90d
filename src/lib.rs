//! Glade - a procedural terrain fly-through viewer

pub mod core;
pub mod math;
pub mod mesh;
pub mod terrain;
pub mod scene;
pub mod render;

pub use crate::core::camera::{make_camera, update_camera, Camera, MoveKey};
pub use crate::mesh::{Mesh, Vertex};
pub use crate::terrain::{generate_terrain, terrain_height};

//! Core type aliases and re-exports

pub use glam::{Vec3, Vec4, Mat4};

/// Standard Result type for the viewer
pub type Result<T> = std::result::Result<T, crate::core::error::Error>;

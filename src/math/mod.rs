//! Mathematical utilities

pub mod aabb;
pub mod transform;

pub use aabb::Aabb;

//! Drawable scene objects

use glam::{Mat4, Vec3};

use crate::mesh::Mesh;

/// How an object's surface colour is chosen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shading {
    /// Colour ramp driven by world height (terrain)
    HeightRamp,
    /// Single flat colour
    Flat,
}

/// A mesh placed in the world with a colour
#[derive(Clone, Debug)]
pub struct SceneObject {
    pub name: String,
    pub mesh: Mesh,
    pub model: Mat4,
    pub color: Vec3,
    pub shading: Shading,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, mesh: Mesh, model: Mat4, color: Vec3, shading: Shading) -> Self {
        Self {
            name: name.into(),
            mesh,
            model,
            color,
            shading,
        }
    }
}

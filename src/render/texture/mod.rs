//! Render target textures

pub mod depth;

pub use depth::DepthTexture;

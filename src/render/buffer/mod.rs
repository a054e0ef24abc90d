//! GPU buffer management

pub mod mesh_buffer;
pub mod object_buffer;

pub use mesh_buffer::{GpuMesh, VERTEX_LAYOUT};
pub use object_buffer::{ObjectBuffer, ObjectUniform};

//! Per-object uniform buffer

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Per-draw uniform data for GPU (must match `ObjectUniforms` in mesh.wgsl)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ObjectUniform {
    /// Model matrix (64 bytes, offset 0)
    pub model: [[f32; 4]; 4],
    /// Inverse-transpose of the model matrix for normals (64 bytes, offset 64)
    pub normal_matrix: [[f32; 4]; 4],
    /// View matrix (64 bytes, offset 128)
    pub view: [[f32; 4]; 4],
    /// Projection matrix (64 bytes, offset 192)
    pub projection: [[f32; 4]; 4],
    /// Flat colour, alpha unused (16 bytes, offset 256)
    pub color: [f32; 4],
    /// Light travel direction in xyz, ambient level in w (16 bytes, offset 272)
    pub light: [f32; 4],
    /// x = terrain height range for the colour ramp (16 bytes, offset 288)
    pub terrain: [f32; 4],
}

impl ObjectUniform {
    pub fn new(
        model: Mat4,
        view: Mat4,
        projection: Mat4,
        color: Vec3,
        light_direction: Vec3,
        ambient: f32,
        height_range: f32,
    ) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            normal_matrix: model.inverse().transpose().to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            color: color.extend(1.0).to_array(),
            light: light_direction.extend(ambient).to_array(),
            terrain: [height_range, 0.0, 0.0, 0.0],
        }
    }
}

/// Uniform buffer plus its bind group for one drawable
pub struct ObjectBuffer {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl ObjectBuffer {
    /// Create a buffer bound through `layout` (see `MeshPipeline::bind_group_layout`)
    pub fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, label: &str) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("{}_uniform", label)),
            size: std::mem::size_of::<ObjectUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{}_bind_group", label)),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });

        Self { buffer, bind_group }
    }

    /// Update buffer with this frame's data
    pub fn update(&self, queue: &wgpu::Queue, uniform: &ObjectUniform) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(uniform));
    }

    /// Get bind group
    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

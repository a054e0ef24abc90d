//! Depth buffer attachment

use wgpu::{Device, Extent3d, TextureView};

/// Depth buffer sized to the surface. The view keeps its texture alive.
pub struct DepthTexture {
    view: TextureView,
    width: u32,
    height: u32,
}

impl DepthTexture {
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    /// Create new depth texture with specified dimensions
    pub fn new(device: &Device, width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth_texture"),
            size: Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            view,
            width,
            height,
        }
    }

    /// Recreate at a new size; no-op if unchanged
    pub fn resize(&mut self, device: &Device, width: u32, height: u32) {
        if width.max(1) != self.width || height.max(1) != self.height {
            *self = Self::new(device, width, height);
        }
    }

    pub fn view(&self) -> &TextureView {
        &self.view
    }
}

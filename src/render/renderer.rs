//! Frame rendering for a built [`Scene`]

use glam::{Mat4, Vec3};

use crate::core::camera::Camera;
use crate::core::Result;
use crate::render::buffer::{GpuMesh, ObjectBuffer, ObjectUniform};
use crate::render::context::GpuContext;
use crate::render::pipeline::MeshPipeline;
use crate::render::texture::DepthTexture;
use crate::scene::{Scene, SceneConfig, Shading};

/// One uploaded scene object
struct DrawItem {
    mesh: GpuMesh,
    uniforms: ObjectBuffer,
    model: Mat4,
    color: Vec3,
    shading: Shading,
}

/// Uploads a scene once and draws it every frame from a camera
pub struct SceneRenderer {
    pipeline: MeshPipeline,
    depth: DepthTexture,
    items: Vec<DrawItem>,
    light_direction: Vec3,
    ambient: f32,
    height_range: f32,
    clear_color: wgpu::Color,
}

impl SceneRenderer {
    pub fn new(gpu: &GpuContext, scene: &Scene, config: &SceneConfig) -> Self {
        let pipeline = MeshPipeline::new(&gpu.device, gpu.format());
        let (width, height) = gpu.size();
        let depth = DepthTexture::new(&gpu.device, width, height);

        let items: Vec<DrawItem> = scene.objects().iter().map(|object| DrawItem {
            mesh: GpuMesh::new(&gpu.device, &object.mesh, &object.name),
            uniforms: ObjectBuffer::new(&gpu.device, pipeline.bind_group_layout(), &object.name),
            model: object.model,
            color: object.color,
            shading: object.shading,
        }).collect();

        let triangles: u32 = items.iter().map(|item| item.mesh.index_count() / 3).sum();
        log::info!("Uploaded {} objects ({} triangles)", items.len(), triangles);

        let [r, g, b] = config.clear_color;
        Self {
            pipeline,
            depth,
            items,
            light_direction: config.light_direction(),
            ambient: config.ambient,
            height_range: scene.terrain().height_range(),
            clear_color: wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: 1.0,
            },
        }
    }

    /// Match the depth buffer to a resized surface
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth.resize(device, width, height);
    }

    /// Draw one frame and present it
    pub fn render(&self, gpu: &GpuContext, camera: &Camera) -> Result<()> {
        for item in &self.items {
            let uniform = ObjectUniform::new(
                item.model,
                camera.view,
                camera.projection,
                item.color,
                self.light_direction,
                self.ambient,
                self.height_range,
            );
            item.uniforms.update(&gpu.queue, &uniform);
        }

        let frame = gpu.get_current_texture()?;
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = gpu.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("frame_encoder"),
        });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: self.depth.view(),
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            for item in &self.items {
                pass.set_pipeline(self.pipeline.pipeline(item.shading));
                pass.set_bind_group(0, item.uniforms.bind_group(), &[]);
                item.mesh.draw(&mut pass);
            }
        }

        gpu.queue.submit([encoder.finish()]);
        frame.present();
        Ok(())
    }
}

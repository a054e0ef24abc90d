//! Heightfield mesh generation and height queries

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::noise::{fractal_amplitude, fractal_noise};
use crate::mesh::{Mesh, Vertex};

/// Parameters controlling terrain generation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainParams {
    pub width: u32,            // Grid vertices along X
    pub depth: u32,            // Grid vertices along Z
    pub horizontal_scale: f32, // Noise-space span of the whole grid
    pub height_scale: f32,     // Vertical exaggeration
    pub octaves: u32,
    pub persistence: f32,
    pub normal_slope: f32,     // Y component of the unnormalized normal
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            width: 50,
            depth: 50,
            horizontal_scale: 5.0,
            height_scale: 12.0,
            octaves: 5,
            persistence: 0.45,
            normal_slope: 2.0,
        }
    }
}

/// Builds heightfield meshes and answers height queries for one parameter set.
///
/// `height_at` maps world coordinates back into noise space through the same
/// grid size that `generate` uses, so a query at any vertex's (x, z) returns
/// that vertex's height.
#[derive(Clone, Debug, Default)]
pub struct TerrainGenerator {
    params: TerrainParams,
}

impl TerrainGenerator {
    /// Create a new terrain generator with the given parameters
    pub fn new(params: TerrainParams) -> Self {
        Self { params }
    }

    /// Get terrain parameters
    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    /// Height at normalized grid coordinates (0..1 across the grid)
    fn sample(&self, u: f32, v: f32) -> f32 {
        let p = &self.params;
        fractal_noise(u * p.horizontal_scale, v * p.horizontal_scale, p.octaves, p.persistence)
            * p.height_scale
    }

    /// Get terrain height at world position (x, z)
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        let width = self.params.width as f32;
        let depth = self.params.depth as f32;
        self.sample((x + width / 2.0) / width, (z + depth / 2.0) / depth)
    }

    /// Largest possible |height| for these parameters
    pub fn height_range(&self) -> f32 {
        fractal_amplitude(self.params.octaves, self.params.persistence) * self.params.height_scale
    }

    /// Build the grid mesh, centred on the origin.
    ///
    /// # Panics
    ///
    /// If the grid is narrower than 2 vertices along either axis.
    pub fn generate(&self) -> Mesh {
        let (width, depth) = (self.params.width, self.params.depth);
        assert!(
            width >= 2 && depth >= 2,
            "terrain grid must be at least 2x2, got {}x{}", width, depth
        );

        let w = width as usize;
        let d = depth as usize;

        let mut heights = Vec::with_capacity(w * d);
        for z in 0..d {
            for x in 0..w {
                heights.push(self.sample(x as f32 / width as f32, z as f32 / depth as f32));
            }
        }

        // Normals from central differences, one-sided at the border
        let height = |x: usize, z: usize| heights[z * w + x];
        let mut vertices = Vec::with_capacity(w * d);
        for z in 0..d {
            for x in 0..w {
                let left = height(x.saturating_sub(1), z);
                let right = height((x + 1).min(w - 1), z);
                let down = height(x, z.saturating_sub(1));
                let up = height(x, (z + 1).min(d - 1));
                let normal = Vec3::new(left - right, self.params.normal_slope, down - up).normalize();

                let position = Vec3::new(
                    x as f32 - width as f32 / 2.0,
                    height(x, z),
                    z as f32 - depth as f32 / 2.0,
                );
                vertices.push(Vertex::new(position, normal));
            }
        }

        let mut indices = Vec::with_capacity(6 * (w - 1) * (d - 1));
        for z in 0..depth - 1 {
            for x in 0..width - 1 {
                let i0 = z * width + x;
                let i1 = i0 + 1;
                let i2 = i0 + width;
                let i3 = i2 + 1;
                indices.extend_from_slice(&[i0, i2, i1, i1, i2, i3]);
            }
        }

        log::debug!(
            "Generated {}x{} terrain: {} vertices, {} triangles",
            width, depth, vertices.len(), indices.len() / 3
        );

        Mesh::new(vertices, indices)
    }
}

/// Generate a `width` x `depth` terrain mesh with the reference noise constants.
pub fn generate_terrain(width: u32, depth: u32) -> Mesh {
    TerrainGenerator::new(TerrainParams {
        width,
        depth,
        ..Default::default()
    })
    .generate()
}

/// Terrain height at world (x, z) for the reference 50x50 terrain.
pub fn terrain_height(x: f32, z: f32) -> f32 {
    TerrainGenerator::default().height_at(x, z)
}

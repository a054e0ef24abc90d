//! Scene assembly: terrain mesh plus props resting on its surface

use glam::{Mat4, Vec3};

use super::config::SceneConfig;
use super::object::{SceneObject, Shading};
use crate::math::transform::placement;
use crate::mesh::primitives;
use crate::terrain::TerrainGenerator;

const TERRAIN_COLOR: Vec3 = Vec3::new(0.3, 0.6, 0.2);
const TRUNK_COLOR: Vec3 = Vec3::new(0.45, 0.3, 0.15);
const CANOPY_COLOR: Vec3 = Vec3::new(0.15, 0.5, 0.2);
const ROCK_COLOR: Vec3 = Vec3::new(0.5, 0.5, 0.48);

/// Trunk box size; it is sunk below the surface so slopes leave no gap
const TRUNK_SIZE: Vec3 = Vec3::new(0.3, 1.6, 0.3);
const TRUNK_SINK: f32 = 0.3;
const CANOPY_SIZE: Vec3 = Vec3::new(1.3, 2.6, 1.3);
const CANOPY_BASE: f32 = 1.0;

const CONE_SEGMENTS: u32 = 12;
const ROCK_SEGMENTS: u32 = 12;
const ROCK_RINGS: u32 = 8;

/// Everything the renderer draws, built once at startup
pub struct Scene {
    terrain: TerrainGenerator,
    objects: Vec<SceneObject>,
}

impl Scene {
    /// Generate the terrain and place the configured props on it
    pub fn build(config: &SceneConfig) -> Self {
        let terrain = TerrainGenerator::new(config.terrain.clone());
        let mut objects = Vec::with_capacity(2 + config.trees.len() * 2);

        let terrain_mesh = terrain.generate();
        if let Some(bounds) = terrain_mesh.bounds() {
            log::info!(
                "Terrain {}x{}: heights {:.2}..{:.2}",
                terrain.params().width, terrain.params().depth, bounds.min.y, bounds.max.y
            );
        }
        objects.push(SceneObject::new(
            "terrain",
            terrain_mesh,
            Mat4::IDENTITY,
            TERRAIN_COLOR,
            Shading::HeightRamp,
        ));

        let cube = primitives::cube();
        let cone = primitives::cone(CONE_SEGMENTS);
        for (i, &[x, z]) in config.trees.iter().enumerate() {
            let ground = terrain.height_at(x, z);
            let trunk_center = ground - TRUNK_SINK + TRUNK_SIZE.y * 0.5;
            objects.push(SceneObject::new(
                format!("tree{}_trunk", i),
                cube.clone(),
                placement(Vec3::new(x, trunk_center, z), 0.0, TRUNK_SIZE),
                TRUNK_COLOR,
                Shading::Flat,
            ));
            objects.push(SceneObject::new(
                format!("tree{}_canopy", i),
                cone.clone(),
                placement(Vec3::new(x, ground + CANOPY_BASE, z), 0.0, CANOPY_SIZE),
                CANOPY_COLOR,
                Shading::Flat,
            ));
        }

        let [rock_x, rock_z] = config.rock.position;
        let rock_ground = terrain.height_at(rock_x, rock_z);
        objects.push(SceneObject::new(
            "rock",
            primitives::uv_sphere(ROCK_SEGMENTS, ROCK_RINGS),
            placement(
                Vec3::new(rock_x, rock_ground, rock_z),
                config.rock.yaw,
                Vec3::from_array(config.rock.size),
            ),
            ROCK_COLOR,
            Shading::Flat,
        ));

        let triangles: usize = objects.iter().map(|o| o.mesh.triangle_count()).sum();
        log::info!("Scene built with {} objects ({} triangles)", objects.len(), triangles);

        Self { terrain, objects }
    }

    /// Generator the terrain mesh came from, for ground queries
    pub fn terrain(&self) -> &TerrainGenerator {
        &self.terrain
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Terrain surface height at world (x, z)
    pub fn ground_height(&self, x: f32, z: f32) -> f32 {
        self.terrain.height_at(x, z)
    }
}

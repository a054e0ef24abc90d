//! Scene configuration

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::terrain::TerrainParams;

/// Camera tuning applied on top of the default fly camera
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub move_speed: f32,
    pub look_sensitivity: f32,
    /// Minimum eye height above the terrain surface
    pub eye_clearance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            move_speed: 8.0,
            look_sensitivity: 0.005,
            eye_clearance: 1.0,
        }
    }
}

/// Placement of the rock prop
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RockConfig {
    /// World (x, z); y follows the terrain
    pub position: [f32; 2],
    /// Rotation about Y in radians
    pub yaw: f32,
    /// Radii along the rock's local axes
    pub size: [f32; 3],
}

impl Default for RockConfig {
    fn default() -> Self {
        Self {
            position: [3.0, -6.0],
            yaw: 0.6,
            size: [1.4, 0.8, 1.0],
        }
    }
}

/// Configuration for the viewer scene
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Terrain generation parameters
    pub terrain: TerrainParams,
    /// Tree trunk positions as world (x, z)
    pub trees: Vec<[f32; 2]>,
    pub rock: RockConfig,
    /// Direction the light travels (towards the ground)
    pub light_direction: [f32; 3],
    /// Constant light floor for surfaces facing away from the light
    pub ambient: f32,
    pub clear_color: [f32; 3],
    pub camera: CameraConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            terrain: TerrainParams::default(),
            trees: vec![[5.0, -5.0], [-8.0, 3.0], [10.0, 8.0], [-4.0, -11.0]],
            rock: RockConfig::default(),
            light_direction: [-0.4, -1.0, -0.3],
            ambient: 0.2,
            clear_color: [0.53, 0.81, 0.92], // Sky blue
            camera: CameraConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Normalized light travel direction, straight down if degenerate
    pub fn light_direction(&self) -> Vec3 {
        Vec3::from_array(self.light_direction).try_normalize().unwrap_or(Vec3::NEG_Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_direction_normalized() {
        let config = SceneConfig::default();
        let dir = config.light_direction();
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!(dir.y < 0.0);

        let degenerate = SceneConfig {
            light_direction: [0.0; 3],
            ..Default::default()
        };
        assert_eq!(degenerate.light_direction(), Vec3::NEG_Y);
    }
}

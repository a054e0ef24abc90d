//! Procedural heightfield terrain

pub mod noise;
pub mod generator;

pub use generator::{TerrainGenerator, TerrainParams, generate_terrain, terrain_height};

//! Scene assembly: everything static in the world, spawned once at startup.
//!
//! Order matters only for the shared assets: textures are loaded first, then
//! the shared materials are created, then the spawners run against those
//! handles. Nothing spawned here is ever despawned.

mod materials;
mod systems;
mod tests;
pub mod types;

pub use materials::{create_scene_materials, load_scene_textures};
pub use systems::{
    log_scene_summary, spawn_cliff, spawn_ground, spawn_lights, spawn_particles, spawn_sea,
    spawn_sun, spawn_trees,
};
pub use types::{
    BaseLayer, Cliff, Particle, ParticleField, SceneMaterials, SceneTextures, Sea,
    SeasonalGround, SeasonalLight, Sun, TreeFoliage, TreeTrunk,
};

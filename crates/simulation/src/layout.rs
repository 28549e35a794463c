//! Random placement of trees and particles.
//!
//! Layouts are generated once at startup from [`SceneRng`]. The default RNG is
//! seeded from OS entropy, so every run scatters the scene differently; tests
//! and benchmarks seed it explicitly.

use bevy::prelude::*;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{PARTICLE_COUNT, PARTICLE_CUBE_SIZE, TREE_COUNT, TREE_HALF_EXTENT};

/// RNG resource used by the scene assembler.
#[derive(Resource)]
pub struct SceneRng(pub ChaCha8Rng);

impl Default for SceneRng {
    fn default() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }
}

impl SceneRng {
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

/// Ground-plane (x, z) positions for `count` trees, uniform in
/// `[-half_extent, half_extent)` on both axes.
pub fn tree_positions(rng: &mut impl Rng, count: usize, half_extent: f32) -> Vec<Vec2> {
    (0..count)
        .map(|_| {
            Vec2::new(
                rng.gen_range(-half_extent..half_extent),
                rng.gen_range(-half_extent..half_extent),
            )
        })
        .collect()
}

/// Positions for `count` particles, uniform inside a cube of edge `size`
/// centred at the origin.
pub fn particle_positions(rng: &mut impl Rng, count: usize, size: f32) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * size,
                (rng.gen::<f32>() - 0.5) * size,
                (rng.gen::<f32>() - 0.5) * size,
            )
        })
        .collect()
}

/// The full forest: `TREE_COUNT` trees over the standard extent.
pub fn forest_layout(rng: &mut impl Rng) -> Vec<Vec2> {
    tree_positions(rng, TREE_COUNT, TREE_HALF_EXTENT)
}

/// The full particle field: `PARTICLE_COUNT` points in the standard cube.
pub fn particle_field_layout(rng: &mut impl Rng) -> Vec<Vec3> {
    particle_positions(rng, PARTICLE_COUNT, PARTICLE_CUBE_SIZE)
}

use bevy::prelude::*;

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

/// The clickable sun. `radius` is the bounding sphere used for picking.
#[derive(Component, Debug, Clone, Copy)]
pub struct Sun {
    pub radius: f32,
}

/// The directional light whose color follows the season.
#[derive(Component)]
pub struct SeasonalLight;

/// Textured ground plane refreshed on every season change.
#[derive(Component)]
pub struct SeasonalGround;

/// Flat green plane under the ground. Never recolored.
#[derive(Component)]
pub struct BaseLayer;

#[derive(Component)]
pub struct Cliff;

#[derive(Component)]
pub struct TreeTrunk;

/// Cone on top of a tree. Every foliage entity shares `SceneMaterials::foliage`.
#[derive(Component)]
pub struct TreeFoliage;

#[derive(Component)]
pub struct Sea;

/// Parent of all particles; rotated as one rigid body.
#[derive(Component)]
pub struct ParticleField;

#[derive(Component)]
pub struct Particle;

// ---------------------------------------------------------------------------
// Shared assets
// ---------------------------------------------------------------------------

/// Textures loaded once at startup.
#[derive(Resource, Clone, Default)]
pub struct SceneTextures {
    pub particle_mask: Handle<Image>,
    pub grass_color: Handle<Image>,
}

/// Material handles created once and shared by every entity that uses them.
///
/// `foliage` is the single canonical foliage appearance: recoloring that asset
/// recolors all trees at once.
#[derive(Resource, Clone)]
pub struct SceneMaterials {
    pub ground: Handle<StandardMaterial>,
    pub base_layer: Handle<StandardMaterial>,
    pub cliff: Handle<StandardMaterial>,
    pub trunk: Handle<StandardMaterial>,
    pub foliage: Handle<StandardMaterial>,
    pub sun: Handle<StandardMaterial>,
    pub particle: Handle<StandardMaterial>,
}

use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;

use simulation::config::{
    BASE_LAYER_OFFSET_Y, FOLIAGE_CENTER_Y, PARTICLE_SIZE, PLANE_SIZE, SEA_SUBDIVISIONS,
    SUN_RADIUS, TRUNK_CENTER_Y,
};
use simulation::layout::{forest_layout, particle_field_layout, SceneRng};
use simulation::season::Season;

use super::types::{
    BaseLayer, Cliff, Particle, ParticleField, SceneMaterials, Sea, SeasonalGround,
    SeasonalLight, Sun, TreeFoliage, TreeTrunk,
};
use crate::sea_material::SeaMaterial;

const AMBIENT_COLOR: Color = Color::srgb(0.722, 0.769, 0.902);
const AMBIENT_BRIGHTNESS: f32 = 400.0;
const SUN_LIGHT_ILLUMINANCE: f32 = 4000.0;
const SUN_LIGHT_POSITION: Vec3 = Vec3::new(10.0, 20.0, -10.0);

const SUN_POSITION: Vec3 = Vec3::new(10.0, 20.0, -30.0);
const CLIFF_SIZE: Vec3 = Vec3::new(50.0, 20.0, 50.0);
const CLIFF_POSITION: Vec3 = Vec3::new(-30.0, 2.0, -50.0);
const SEA_POSITION: Vec3 = Vec3::new(0.0, 0.0, -60.0);

const TRUNK_RADIUS: f32 = 0.3;
const TRUNK_HEIGHT: f32 = 2.0;
const FOLIAGE_RADIUS: f32 = 1.5;
const FOLIAGE_HEIGHT: f32 = 3.0;
const TREE_SEGMENTS: u32 = 12;

/// System: ambient light plus the directional light that takes the season's
/// light color.
pub fn spawn_lights(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: AMBIENT_COLOR,
        brightness: AMBIENT_BRIGHTNESS,
    });

    commands.spawn((
        SeasonalLight,
        DirectionalLight {
            color: Season::default().palette().light,
            illuminance: SUN_LIGHT_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(SUN_LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// System: seasonal textured ground with the always-green layer just below it.
pub fn spawn_ground(
    mut commands: Commands,
    scene: Res<SceneMaterials>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let plane = meshes.add(Plane3d::default().mesh().size(PLANE_SIZE, PLANE_SIZE));

    commands.spawn((
        SeasonalGround,
        Mesh3d(plane.clone()),
        MeshMaterial3d(scene.ground.clone()),
        Transform::IDENTITY,
    ));
    commands.spawn((
        BaseLayer,
        Mesh3d(plane),
        MeshMaterial3d(scene.base_layer.clone()),
        Transform::from_xyz(0.0, BASE_LAYER_OFFSET_Y, 0.0),
    ));
}

pub fn spawn_cliff(
    mut commands: Commands,
    scene: Res<SceneMaterials>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    commands.spawn((
        Cliff,
        Mesh3d(meshes.add(Cuboid::from_size(CLIFF_SIZE))),
        MeshMaterial3d(scene.cliff.clone()),
        Transform::from_translation(CLIFF_POSITION),
    ));
}

/// System: scatter the forest. Each tree is a trunk and a foliage cone; all
/// trunks share one mesh and material, all cones share one mesh and the
/// canonical foliage material.
pub fn spawn_trees(
    mut commands: Commands,
    scene: Res<SceneMaterials>,
    mut rng: ResMut<SceneRng>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let trunk_mesh = meshes.add(
        Cylinder::new(TRUNK_RADIUS, TRUNK_HEIGHT)
            .mesh()
            .resolution(TREE_SEGMENTS),
    );
    let foliage_mesh = meshes.add(
        Cone {
            radius: FOLIAGE_RADIUS,
            height: FOLIAGE_HEIGHT,
        }
        .mesh()
        .resolution(TREE_SEGMENTS),
    );

    let positions = forest_layout(&mut rng.0);

    let trunks: Vec<_> = positions
        .iter()
        .map(|p| {
            (
                TreeTrunk,
                Mesh3d(trunk_mesh.clone()),
                MeshMaterial3d(scene.trunk.clone()),
                Transform::from_xyz(p.x, TRUNK_CENTER_Y, p.y),
            )
        })
        .collect();
    let foliage: Vec<_> = positions
        .iter()
        .map(|p| {
            (
                TreeFoliage,
                Mesh3d(foliage_mesh.clone()),
                MeshMaterial3d(scene.foliage.clone()),
                Transform::from_xyz(p.x, FOLIAGE_CENTER_Y, p.y),
            )
        })
        .collect();

    commands.spawn_batch(trunks);
    commands.spawn_batch(foliage);
}

/// System: the animated sea. Displacement happens in the vertex shader, which
/// the shadow pass does not run, so the sea casts no shadow.
pub fn spawn_sea(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut sea_materials: ResMut<Assets<SeaMaterial>>,
) {
    commands.spawn((
        Sea,
        Mesh3d(
            meshes.add(
                Plane3d::default()
                    .mesh()
                    .size(PLANE_SIZE, PLANE_SIZE)
                    .subdivisions(SEA_SUBDIVISIONS),
            ),
        ),
        MeshMaterial3d(sea_materials.add(SeaMaterial::default())),
        Transform::from_translation(SEA_POSITION),
        NotShadowCaster,
    ));
}

pub fn spawn_sun(
    mut commands: Commands,
    scene: Res<SceneMaterials>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    commands.spawn((
        Sun { radius: SUN_RADIUS },
        Mesh3d(meshes.add(Sphere::new(SUN_RADIUS).mesh().uv(32, 32))),
        MeshMaterial3d(scene.sun.clone()),
        Transform::from_translation(SUN_POSITION),
        NotShadowCaster,
    ));
}

/// System: the particle field, one parent entity with a camera-facing quad
/// per particle.
pub fn spawn_particles(
    mut commands: Commands,
    scene: Res<SceneMaterials>,
    mut rng: ResMut<SceneRng>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let quad = meshes.add(Rectangle::new(PARTICLE_SIZE, PARTICLE_SIZE));
    let positions = particle_field_layout(&mut rng.0);

    commands
        .spawn((ParticleField, Transform::IDENTITY, Visibility::default()))
        .with_children(|field| {
            for position in positions {
                field.spawn((
                    Particle,
                    Mesh3d(quad.clone()),
                    MeshMaterial3d(scene.particle.clone()),
                    Transform::from_translation(position),
                    NotShadowCaster,
                ));
            }
        });
}

/// System: report what the assembler produced.
pub fn log_scene_summary(
    trees: Query<(), With<TreeFoliage>>,
    particles: Query<(), With<Particle>>,
    suns: Query<(), With<Sun>>,
) {
    info!(
        "Scene assembled: {} trees, {} particles, {} sun",
        trees.iter().count(),
        particles.iter().count(),
        suns.iter().count()
    );
}

use bevy::image::{ImageAddressMode, ImageLoaderSettings, ImageSampler, ImageSamplerDescriptor};
use bevy::math::Affine2;
use bevy::prelude::*;

use simulation::config::GROUND_TEXTURE_REPEAT;
use simulation::season::{Season, FOREST_GREEN};

use super::types::{SceneMaterials, SceneTextures};

const PARTICLE_MASK_PATH: &str = "textures/particles/4.png";
const GRASS_COLOR_PATH: &str = "textures/grass/color.png";

const CLIFF_GREY: Color = Color::srgb(0.827, 0.827, 0.827);
const TRUNK_BROWN: Color = Color::srgb(0.545, 0.353, 0.169);
const SUN_GOLD: Color = Color::srgb(1.0, 0.843, 0.0);

/// System: load the particle mask and the tiling grass texture.
pub fn load_scene_textures(mut commands: Commands, asset_server: Res<AssetServer>) {
    let grass_color =
        asset_server.load_with_settings(GRASS_COLOR_PATH, |settings: &mut ImageLoaderSettings| {
            settings.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
                address_mode_u: ImageAddressMode::Repeat,
                address_mode_v: ImageAddressMode::Repeat,
                ..default()
            });
        });

    commands.insert_resource(SceneTextures {
        particle_mask: asset_server.load(PARTICLE_MASK_PATH),
        grass_color,
    });
}

/// System: create every shared material. Foliage starts on the palette of
/// the initial season.
pub fn create_scene_materials(
    mut commands: Commands,
    textures: Res<SceneTextures>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let initial = Season::default().palette();

    let scene = SceneMaterials {
        ground: materials.add(StandardMaterial {
            base_color_texture: Some(textures.grass_color.clone()),
            uv_transform: Affine2::from_scale(Vec2::splat(GROUND_TEXTURE_REPEAT)),
            perceptual_roughness: 1.0,
            ..default()
        }),
        base_layer: materials.add(StandardMaterial {
            base_color: FOREST_GREEN,
            perceptual_roughness: 1.0,
            ..default()
        }),
        cliff: materials.add(StandardMaterial {
            base_color: CLIFF_GREY,
            perceptual_roughness: 0.9,
            ..default()
        }),
        trunk: materials.add(StandardMaterial {
            base_color: TRUNK_BROWN,
            perceptual_roughness: 0.9,
            ..default()
        }),
        foliage: materials.add(StandardMaterial {
            base_color: initial.foliage,
            perceptual_roughness: 0.8,
            ..default()
        }),
        sun: materials.add(StandardMaterial {
            base_color: SUN_GOLD,
            unlit: true,
            ..default()
        }),
        // Additive blending renders in the transparent pass without writing
        // depth, so overlapping particles never cut holes in each other.
        particle: materials.add(StandardMaterial {
            base_color: Color::WHITE,
            base_color_texture: Some(textures.particle_mask.clone()),
            alpha_mode: AlphaMode::Add,
            unlit: true,
            double_sided: true,
            cull_mode: None,
            ..default()
        }),
    };

    commands.insert_resource(scene);
}

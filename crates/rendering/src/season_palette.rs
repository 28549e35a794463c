//! Applies the active season's palette to the scene.

use bevy::prelude::*;

use simulation::season::{SeasonChanged, SeasonPalette};

use crate::scene::{SceneMaterials, SeasonalLight};

/// Write `palette` into the shared foliage material and the seasonal light.
///
/// Touches the seasonal ground mutably so its render state is re-extracted.
/// No other material is accessed.
pub fn apply_palette(
    palette: SeasonPalette,
    scene: &SceneMaterials,
    materials: &mut Assets<StandardMaterial>,
    lights: &mut Query<&mut DirectionalLight, With<SeasonalLight>>,
) {
    match materials.get_mut(&scene.foliage) {
        Some(foliage) => foliage.base_color = palette.foliage,
        None => warn!("Foliage material missing; trees keep their color"),
    }

    for mut light in lights.iter_mut() {
        light.color = palette.light;
    }

    if materials.get_mut(&scene.ground).is_none() {
        warn!("Seasonal ground material missing");
    }
}

/// System: on each frame with season changes, apply the palette of the
/// season now active. Several changes in one frame collapse to the last.
pub fn apply_season_palette(
    mut changes: EventReader<SeasonChanged>,
    scene: Option<Res<SceneMaterials>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut lights: Query<&mut DirectionalLight, With<SeasonalLight>>,
) {
    let Some(SeasonChanged(season)) = changes.read().last().copied() else {
        return;
    };
    let Some(scene) = scene else {
        return;
    };
    apply_palette(season.palette(), &scene, &mut materials, &mut lights);
}

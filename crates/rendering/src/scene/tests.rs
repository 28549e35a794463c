#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use simulation::layout::SceneRng;
    use simulation::season::{
        advance_season, AdvanceSeason, Season, SeasonChanged, SeasonState, FOREST_GREEN,
    };

    use crate::scene::*;
    use crate::sea_material::SeaMaterial;
    use crate::season_palette::apply_season_palette;

    /// Headless app that runs the whole assembler plus the season systems.
    fn scene_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<Mesh>()
            .init_asset::<StandardMaterial>()
            .init_asset::<SeaMaterial>()
            .insert_resource(SceneTextures::default())
            .insert_resource(SceneRng::from_seed_u64(2024))
            .init_resource::<SeasonState>()
            .add_event::<AdvanceSeason>()
            .add_event::<SeasonChanged>()
            .add_systems(
                Startup,
                (
                    create_scene_materials,
                    (
                        spawn_lights,
                        spawn_ground,
                        spawn_cliff,
                        spawn_trees,
                        spawn_sea,
                        spawn_sun,
                        spawn_particles,
                    ),
                )
                    .chain(),
            )
            .add_systems(Update, (advance_season, apply_season_palette).chain());
        app.update();
        app
    }

    fn count<F: bevy::ecs::query::QueryFilter>(app: &mut App) -> usize {
        app.world_mut()
            .query_filtered::<(), F>()
            .iter(app.world())
            .count()
    }

    fn base_color(app: &App, handle: &Handle<StandardMaterial>) -> Color {
        app.world()
            .resource::<Assets<StandardMaterial>>()
            .get(handle)
            .expect("material exists")
            .base_color
    }

    fn light_color(app: &mut App) -> Color {
        app.world_mut()
            .query_filtered::<&DirectionalLight, With<SeasonalLight>>()
            .single(app.world())
            .color
    }

    fn advance(app: &mut App, steps: usize) {
        for _ in 0..steps {
            app.world_mut().send_event(AdvanceSeason);
        }
        app.update();
    }

    #[test]
    fn test_scene_object_counts() {
        let mut app = scene_app();
        assert_eq!(count::<With<TreeTrunk>>(&mut app), 200);
        assert_eq!(count::<With<TreeFoliage>>(&mut app), 200);
        assert_eq!(count::<With<Particle>>(&mut app), 100);
        assert_eq!(count::<With<ParticleField>>(&mut app), 1);
        assert_eq!(count::<With<Sun>>(&mut app), 1);
        assert_eq!(count::<With<Sea>>(&mut app), 1);
        assert_eq!(count::<With<Cliff>>(&mut app), 1);
        assert_eq!(count::<With<SeasonalGround>>(&mut app), 1);
        assert_eq!(count::<With<BaseLayer>>(&mut app), 1);
        assert_eq!(count::<With<SeasonalLight>>(&mut app), 1);
    }

    #[test]
    fn test_all_foliage_shares_one_material() {
        let mut app = scene_app();
        let foliage = app.world().resource::<SceneMaterials>().foliage.clone();
        let handles: Vec<Handle<StandardMaterial>> = app
            .world_mut()
            .query_filtered::<&MeshMaterial3d<StandardMaterial>, With<TreeFoliage>>()
            .iter(app.world())
            .map(|m| m.0.clone())
            .collect();
        assert_eq!(handles.len(), 200);
        assert!(handles.iter().all(|h| *h == foliage));
    }

    #[test]
    fn test_trees_stand_at_fixed_heights_in_bounds() {
        let mut app = scene_app();
        let trunks: Vec<Vec3> = app
            .world_mut()
            .query_filtered::<&Transform, With<TreeTrunk>>()
            .iter(app.world())
            .map(|t| t.translation)
            .collect();
        let foliage: Vec<Vec3> = app
            .world_mut()
            .query_filtered::<&Transform, With<TreeFoliage>>()
            .iter(app.world())
            .map(|t| t.translation)
            .collect();

        for p in &trunks {
            assert_eq!(p.y, 1.0);
            assert!(p.x.abs() <= 40.0 && p.z.abs() <= 40.0);
        }
        for p in &foliage {
            assert_eq!(p.y, 3.0);
            // Every cone sits on top of some trunk.
            assert!(trunks.iter().any(|t| t.x == p.x && t.z == p.z));
        }
    }

    #[test]
    fn test_base_layer_sits_just_below_ground() {
        let mut app = scene_app();
        let ground = app
            .world_mut()
            .query_filtered::<&Transform, With<SeasonalGround>>()
            .single(app.world())
            .translation;
        let base = app
            .world_mut()
            .query_filtered::<&Transform, With<BaseLayer>>()
            .single(app.world())
            .translation;
        assert_eq!(ground.y, 0.0);
        assert_eq!(base.y, -0.01);
    }

    #[test]
    fn test_initial_palette_is_summer() {
        let mut app = scene_app();
        let scene = app.world().resource::<SceneMaterials>().clone();
        assert_eq!(base_color(&app, &scene.foliage), FOREST_GREEN);
        assert_eq!(light_color(&mut app), Season::Summer.palette().light);
        assert_eq!(base_color(&app, &scene.base_layer), FOREST_GREEN);
    }

    #[test]
    fn test_each_step_applies_its_palette() {
        let mut app = scene_app();
        let scene = app.world().resource::<SceneMaterials>().clone();

        for expected in [Season::Fall, Season::Winter, Season::Spring, Season::Summer] {
            advance(&mut app, 1);
            assert_eq!(app.world().resource::<SeasonState>().current, expected);
            let palette = expected.palette();
            assert_eq!(base_color(&app, &scene.foliage), palette.foliage, "{:?}", expected);
            assert_eq!(light_color(&mut app), palette.light, "{:?}", expected);
        }
    }

    #[test]
    fn test_season_change_leaves_other_materials_alone() {
        let mut app = scene_app();
        let scene = app.world().resource::<SceneMaterials>().clone();
        let untouched = [
            scene.ground.clone(),
            scene.base_layer.clone(),
            scene.cliff.clone(),
            scene.trunk.clone(),
            scene.sun.clone(),
            scene.particle.clone(),
        ];
        let before: Vec<Color> = untouched.iter().map(|h| base_color(&app, h)).collect();
        let sea_before = app
            .world()
            .resource::<Assets<SeaMaterial>>()
            .iter()
            .map(|(_, m)| m.uniform.color)
            .collect::<Vec<_>>();

        // Fall then Winter: the foliage turns orange and then white.
        advance(&mut app, 2);

        let after: Vec<Color> = untouched.iter().map(|h| base_color(&app, h)).collect();
        assert_eq!(before, after);
        let sea_after = app
            .world()
            .resource::<Assets<SeaMaterial>>()
            .iter()
            .map(|(_, m)| m.uniform.color)
            .collect::<Vec<_>>();
        assert_eq!(sea_before, sea_after);
        assert_eq!(
            base_color(&app, &scene.foliage),
            Season::Winter.palette().foliage
        );
    }

    #[test]
    fn test_full_cycle_restores_summer_palette() {
        let mut app = scene_app();
        let scene = app.world().resource::<SceneMaterials>().clone();
        advance(&mut app, 4);
        assert_eq!(app.world().resource::<SeasonState>().current, Season::Summer);
        assert_eq!(base_color(&app, &scene.foliage), FOREST_GREEN);
        assert_eq!(light_color(&mut app), Season::Summer.palette().light);
    }

    #[test]
    fn test_different_seeds_scatter_trees_differently() {
        let first: Vec<Vec3> = {
            let mut app = scene_app();
            app.world_mut()
                .query_filtered::<&Transform, With<TreeTrunk>>()
                .iter(app.world())
                .map(|t| t.translation)
                .collect()
        };

        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<Mesh>()
            .init_asset::<StandardMaterial>()
            .insert_resource(SceneTextures::default())
            .insert_resource(SceneRng::from_seed_u64(7))
            .add_systems(Startup, (create_scene_materials, spawn_trees).chain());
        app.update();
        let mut second: Vec<Vec3> = app
            .world_mut()
            .query_filtered::<&Transform, With<TreeTrunk>>()
            .iter(app.world())
            .map(|t| t.translation)
            .collect();

        let mut first = first;
        let key = |v: &Vec3| (v.x.to_bits(), v.z.to_bits());
        first.sort_by_key(key);
        second.sort_by_key(key);
        assert_eq!(first.len(), second.len());
        assert_ne!(first, second);
    }
}

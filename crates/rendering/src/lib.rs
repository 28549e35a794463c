use bevy::prelude::*;

use simulation::FrameSet;

pub mod camera;
pub mod camera_smoothing;
pub mod egui_input_guard;
pub mod frame;
pub mod picking;
pub mod scene;
pub mod sea_material;
pub mod season_palette;
pub mod viewport;

use camera::{CameraDrag, LeftClickDrag};
use egui_input_guard::PointerOverUi;
use sea_material::SeaMaterial;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MaterialPlugin::<SeaMaterial>::default())
            .init_resource::<CameraDrag>()
            .init_resource::<LeftClickDrag>()
            .init_resource::<PointerOverUi>()
            .add_systems(
                Startup,
                (
                    scene::load_scene_textures,
                    scene::create_scene_materials,
                    (
                        camera::setup_camera,
                        scene::spawn_lights,
                        scene::spawn_ground,
                        scene::spawn_cliff,
                        scene::spawn_trees,
                        scene::spawn_sea,
                        scene::spawn_sun,
                        scene::spawn_particles,
                    ),
                    scene::log_scene_summary,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    (
                        egui_input_guard::track_egui_pointer,
                        picking::pick_sun_on_click,
                        camera::camera_left_drag,
                    )
                        .chain(),
                    camera::camera_pan_drag,
                    camera::camera_zoom,
                    camera::route_arrow_keys,
                    viewport::apply_resize_to_projection,
                    viewport::clamp_pixel_ratio,
                )
                    .in_set(FrameSet::Input),
            )
            .add_systems(
                Update,
                season_palette::apply_season_palette
                    .in_set(FrameSet::Season)
                    .after(simulation::season::advance_season),
            )
            .add_plugins(frame::FrameLoopPlugin);
    }
}

//! Click-to-cycle picking against the sun.
//!
//! A left click (press and release without crossing the drag threshold) is
//! turned into a world-space ray by the scene camera and cast against the
//! sun's bounding sphere. Only the sun is ever tested. Each hit queues one
//! `AdvanceSeason`.
//!
//! Clicks while egui owns the pointer (`PointerOverUi`) never reach the world.

use bevy::math::bounding::{BoundingSphere, RayCast3d};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use simulation::season::AdvanceSeason;

use crate::camera::{LeftClickDrag, SceneCamera};
use crate::egui_input_guard::PointerOverUi;
use crate::scene::Sun;

/// True if `ray` hits the bounding sphere of any sun.
pub fn ray_hits_sun<'a>(
    ray: Ray3d,
    suns: impl IntoIterator<Item = (&'a GlobalTransform, &'a Sun)>,
) -> bool {
    let cast = RayCast3d::from_ray(ray, f32::MAX);
    suns.into_iter().any(|(transform, sun)| {
        cast.sphere_intersection_at(&BoundingSphere::new(transform.translation(), sun.radius))
            .is_some()
    })
}

/// System: on a left click over the sun, request one season step.
///
/// Must run before `camera_left_drag` so the drag flag still describes the
/// gesture that just ended.
pub fn pick_sun_on_click(
    buttons: Res<ButtonInput<MouseButton>>,
    left_drag: Res<LeftClickDrag>,
    over_ui: Res<PointerOverUi>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<SceneCamera>>,
    suns: Query<(&GlobalTransform, &Sun)>,
    mut requests: EventWriter<AdvanceSeason>,
) {
    if !buttons.just_released(MouseButton::Left) || left_drag.is_dragging || over_ui.0 {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.get_single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor) else {
        return;
    };

    if ray_hits_sun(ray, suns.iter()) {
        debug!("Sun clicked at {:?}", cursor);
        requests.send(AdvanceSeason);
    }
}

//! Window resize handling: camera aspect ratio and pixel-ratio clamp.

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use simulation::config::MAX_PIXEL_RATIO;

use crate::camera::SceneCamera;

/// Aspect ratio for a surface of the given size. Degenerate sizes (a
/// minimised window reports 0×0) are treated as 1 pixel.
#[inline]
pub fn aspect_ratio(width: f32, height: f32) -> f32 {
    width.max(1.0) / height.max(1.0)
}

/// Device pixel ratio capped at `MAX_PIXEL_RATIO`.
#[inline]
pub fn clamped_pixel_ratio(device_ratio: f32) -> f32 {
    device_ratio.min(MAX_PIXEL_RATIO)
}

/// System: on resize, set the perspective aspect ratio from the new window
/// size. Field of view and clip planes are left alone.
pub fn apply_resize_to_projection(
    mut resized: EventReader<WindowResized>,
    mut cameras: Query<&mut Projection, With<SceneCamera>>,
) {
    let Some(last) = resized.read().last() else {
        return;
    };
    if last.width < 1.0 || last.height < 1.0 {
        debug!("Degenerate window size {}x{}, clamping", last.width, last.height);
    }
    let aspect = aspect_ratio(last.width, last.height);

    for mut projection in &mut cameras {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.aspect_ratio = aspect;
        }
    }
}

/// System: keep the primary window's scale factor at or below
/// `MAX_PIXEL_RATIO`, which caps the pixels rendered per logical pixel.
///
/// Bevy has no render density separate from the window's scale factor, so
/// this goes through the scale-factor override. On a native display denser
/// than the cap, winit then resizes the window to keep its logical size,
/// and the window covers fewer screen points than requested. In the browser
/// the canvas follows its parent, so only the backing resolution drops.
pub fn clamp_pixel_ratio(mut windows: Query<&mut Window, With<PrimaryWindow>>) {
    for mut window in &mut windows {
        let device = window.resolution.base_scale_factor();
        let clamped = clamped_pixel_ratio(device);
        let wanted = (clamped < device).then_some(clamped);
        if window.resolution.scale_factor_override() != wanted {
            info!("Pixel ratio {} -> override {:?}", device, wanted);
            window.resolution.set_scale_factor_override(wanted);
        }
    }
}

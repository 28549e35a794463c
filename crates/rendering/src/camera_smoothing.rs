//! Damped orbit controls via exponential interpolation (lerp).
//!
//! Mouse input systems write to `CameraTarget` (the desired camera state).
//! Each frame, `smooth_camera_to_target` eases `OrbitCamera` toward
//! `CameraTarget` using frame-rate independent exponential interpolation:
//!
//!   `value += (target - value) * (1 - exp(-speed * dt))`
//!
//! At the default speed of 3.0 this closes about 5% of the gap per frame at
//! 60 Hz, so the camera keeps drifting briefly after the mouse stops.
//!
//! Arrow key steps move both states at once and are therefore not eased.

use bevy::prelude::*;

use crate::camera::OrbitCamera;

/// Configurable smoothing parameters.
#[derive(Resource)]
pub struct CameraSmoothingConfig {
    /// Smoothing speed for focus panning (higher = snappier). Default: 3.0.
    pub position_speed: f32,
    /// Smoothing speed for zoom (distance). Default: 3.0.
    pub zoom_speed: f32,
    /// Smoothing speed for rotation (yaw/pitch). Default: 3.0.
    pub rotation_speed: f32,
    /// Convergence threshold: snap to the target when closer than this.
    pub epsilon: f32,
}

impl Default for CameraSmoothingConfig {
    fn default() -> Self {
        Self {
            position_speed: 3.0,
            zoom_speed: 3.0,
            rotation_speed: 3.0,
            epsilon: 0.001,
        }
    }
}

/// The desired camera state that input systems write to.
#[derive(Resource, Debug, Clone, Copy)]
pub struct CameraTarget {
    pub focus: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl From<OrbitCamera> for CameraTarget {
    fn from(orbit: OrbitCamera) -> Self {
        Self {
            focus: orbit.focus,
            yaw: orbit.yaw,
            pitch: orbit.pitch,
            distance: orbit.distance,
        }
    }
}

impl Default for CameraTarget {
    fn default() -> Self {
        OrbitCamera::default().into()
    }
}

/// Exponential interpolation factor for a given speed and delta time.
///
/// Returns a value in `[0, 1]` representing how much to move toward the target.
#[inline]
pub fn exp_lerp_factor(speed: f32, dt: f32) -> f32 {
    1.0 - (-speed * dt).exp()
}

fn ease_scalar(value: &mut f32, target: f32, factor: f32, eps: f32) -> bool {
    let delta = target - *value;
    if delta.abs() > eps {
        *value += delta * factor;
        true
    } else if delta != 0.0 {
        *value = target;
        true
    } else {
        false
    }
}

/// System: lerp `OrbitCamera` toward `CameraTarget` each frame.
///
/// When the camera is already at the target no write happens, so
/// `apply_orbit_camera` skips the transform update through change detection.
pub fn smooth_camera_to_target(
    target: Res<CameraTarget>,
    config: Res<CameraSmoothingConfig>,
    time: Res<Time>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    let pos_factor = exp_lerp_factor(config.position_speed, dt);
    let zoom_factor = exp_lerp_factor(config.zoom_speed, dt);
    let rot_factor = exp_lerp_factor(config.rotation_speed, dt);
    let eps = config.epsilon;

    // Work on a copy so an idle frame does not trip change detection.
    let mut next = *orbit;
    let mut moved = false;

    let focus_delta = target.focus - next.focus;
    if focus_delta.length_squared() > eps * eps {
        next.focus += focus_delta * pos_factor;
        moved = true;
    } else if focus_delta.length_squared() > 0.0 {
        next.focus = target.focus;
        moved = true;
    }

    moved |= ease_scalar(&mut next.distance, target.distance, zoom_factor, eps);
    moved |= ease_scalar(&mut next.yaw, target.yaw, rot_factor, eps);
    moved |= ease_scalar(&mut next.pitch, target.pitch, rot_factor, eps);

    if moved {
        *orbit = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exp_lerp_factor_bounds() {
        assert_eq!(exp_lerp_factor(3.0, 0.0), 0.0);
        let f = exp_lerp_factor(3.0, 1.0 / 60.0);
        assert!(f > 0.0 && f < 1.0);
        assert!(exp_lerp_factor(3.0, 100.0) > 0.999);
    }

    #[test]
    fn test_default_speed_is_about_five_percent_per_frame() {
        let f = exp_lerp_factor(CameraSmoothingConfig::default().rotation_speed, 1.0 / 60.0);
        assert!((f - 0.05).abs() < 0.005, "factor at 60Hz was {}", f);
    }

    #[test]
    fn test_ease_scalar_moves_toward_target() {
        let mut v = 0.0;
        assert!(ease_scalar(&mut v, 10.0, 0.5, 0.001));
        assert_eq!(v, 5.0);
    }

    #[test]
    fn test_ease_scalar_snaps_inside_epsilon() {
        let mut v = 9.9995;
        assert!(ease_scalar(&mut v, 10.0, 0.1, 0.001));
        assert_eq!(v, 10.0);
        assert!(!ease_scalar(&mut v, 10.0, 0.1, 0.001));
    }

    #[test]
    fn test_target_defaults_to_orbit_defaults() {
        let orbit = OrbitCamera::default();
        let target = CameraTarget::default();
        assert_eq!(target.focus, orbit.focus);
        assert_eq!(target.yaw, orbit.yaw);
        assert_eq!(target.pitch, orbit.pitch);
        assert_eq!(target.distance, orbit.distance);
    }
}

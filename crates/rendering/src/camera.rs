use bevy::input::keyboard::KeyboardInput;
use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::input::ButtonState;
use bevy::pbr::ShadowFilteringMethod;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use simulation::config::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, KEY_STEP};

use crate::camera_smoothing::CameraTarget;

const ZOOM_SPEED: f32 = 0.1;
const MIN_DISTANCE: f32 = 2.0;
const MAX_DISTANCE: f32 = 150.0;
const MIN_PITCH: f32 = -85.0 * std::f32::consts::PI / 180.0;
const MAX_PITCH: f32 = 85.0 * std::f32::consts::PI / 180.0;
const ORBIT_SENSITIVITY: f32 = 0.005;
/// Focus travel per pixel of pan drag, per unit of orbit distance.
const PAN_SENSITIVITY: f32 = 0.0015;
const LEFT_DRAG_THRESHOLD: f32 = 5.0;

/// Where the camera starts, looking at the origin.
pub const INITIAL_EYE: Vec3 = Vec3::new(10.0, 10.0, 20.0);

/// Marker for the single scene camera.
#[derive(Component)]
pub struct SceneCamera;

/// Orbital camera model: the camera orbits a focus point.
///
/// This is the camera state actually applied to the transform. Mouse input
/// writes `CameraTarget` and the smoothing system eases this toward it.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    /// Point the camera looks at
    pub focus: Vec3,
    /// Horizontal rotation in radians
    pub yaw: f32,
    /// Elevation angle in radians (clamped between MIN_PITCH and MAX_PITCH)
    pub pitch: f32,
    /// Distance from focus point
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_eye(INITIAL_EYE, Vec3::ZERO)
    }
}

impl OrbitCamera {
    /// Orbit parameters that put the camera at `eye` looking at `focus`.
    pub fn from_eye(eye: Vec3, focus: Vec3) -> Self {
        let offset = eye - focus;
        let distance = offset.length().max(MIN_DISTANCE);
        Self {
            focus,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / distance).clamp(-1.0, 1.0).asin(),
            distance,
        }
    }

    /// World-space camera position.
    pub fn eye(&self) -> Vec3 {
        // Spherical to cartesian offset from focus
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.focus + Vec3::new(x, y, z)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.focus, Vec3::Y)
    }
}

/// A discrete camera translation produced by one arrow key press.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct CameraStep(pub Vec3);

/// Right-mouse drag state for panning.
#[derive(Resource, Default)]
pub struct CameraDrag {
    pub dragging: bool,
    pub last_pos: Vec2,
}

/// Tracks left-click drag state: differentiates click from drag.
/// When the mouse moves beyond `LEFT_DRAG_THRESHOLD` pixels from the initial press,
/// it becomes a camera orbit and the release is not treated as a click.
#[derive(Resource, Default)]
pub struct LeftClickDrag {
    pub pressed: bool,
    pub start_pos: Vec2,
    pub last_pos: Vec2,
    /// True once mouse has moved beyond threshold.
    pub is_dragging: bool,
}

pub fn setup_camera(mut commands: Commands) {
    let orbit = OrbitCamera::default();

    commands.spawn((
        SceneCamera,
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        ShadowFilteringMethod::Gaussian,
        orbit.transform(),
    ));
    commands.insert_resource(orbit);
    commands.insert_resource(CameraTarget::from(orbit));
}

/// The translation an arrow key applies, if any.
pub fn arrow_step(key: KeyCode) -> Option<Vec3> {
    match key {
        KeyCode::ArrowUp => Some(Vec3::new(0.0, 0.0, -KEY_STEP)),
        KeyCode::ArrowDown => Some(Vec3::new(0.0, 0.0, KEY_STEP)),
        KeyCode::ArrowLeft => Some(Vec3::new(-KEY_STEP, 0.0, 0.0)),
        KeyCode::ArrowRight => Some(Vec3::new(KEY_STEP, 0.0, 0.0)),
        _ => None,
    }
}

/// Arrow keys: one `CameraStep` per key-down event. OS key repeats count as
/// separate presses; releases are ignored.
pub fn route_arrow_keys(
    mut keys: EventReader<KeyboardInput>,
    mut steps: EventWriter<CameraStep>,
) {
    for key in keys.read() {
        if key.state != ButtonState::Pressed {
            continue;
        }
        if let Some(step) = arrow_step(key.key_code) {
            steps.send(CameraStep(step));
        }
    }
}

/// System: translate the camera by each queued step.
///
/// The focus and the smoothing target move together, so the eye position
/// shifts by exactly the step with no easing.
pub fn apply_camera_steps(
    mut steps: EventReader<CameraStep>,
    mut orbit: ResMut<OrbitCamera>,
    mut target: ResMut<CameraTarget>,
) {
    for CameraStep(delta) in steps.read() {
        orbit.focus += *delta;
        target.focus += *delta;
    }
}

/// Left-mouse drag: orbit (horizontal = yaw, vertical = pitch).
pub fn camera_left_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut left_drag: ResMut<LeftClickDrag>,
    mut target: ResMut<CameraTarget>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Left) {
        if let Some(pos) = window.cursor_position() {
            left_drag.pressed = true;
            left_drag.start_pos = pos;
            left_drag.last_pos = pos;
            left_drag.is_dragging = false;
        }
    }

    if buttons.just_released(MouseButton::Left) {
        left_drag.pressed = false;
        left_drag.is_dragging = false;
    }

    if left_drag.pressed {
        if let Some(pos) = window.cursor_position() {
            if !left_drag.is_dragging {
                let dist = (pos - left_drag.start_pos).length();
                if dist > LEFT_DRAG_THRESHOLD {
                    left_drag.is_dragging = true;
                    left_drag.last_pos = pos;
                }
            }

            if left_drag.is_dragging {
                let delta = pos - left_drag.last_pos;
                target.yaw -= delta.x * ORBIT_SENSITIVITY;
                target.pitch =
                    (target.pitch + delta.y * ORBIT_SENSITIVITY).clamp(MIN_PITCH, MAX_PITCH);
                left_drag.last_pos = pos;
            }
        }
    }
}

/// Right-mouse drag: pan focus across the screen plane.
pub fn camera_pan_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut drag: ResMut<CameraDrag>,
    mut target: ResMut<CameraTarget>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Right) {
        if let Some(pos) = window.cursor_position() {
            drag.dragging = true;
            drag.last_pos = pos;
        }
    }

    if buttons.just_released(MouseButton::Right) {
        drag.dragging = false;
    }

    if drag.dragging {
        if let Some(pos) = window.cursor_position() {
            let delta = pos - drag.last_pos;
            let scale = target.distance * PAN_SENSITIVITY;
            let rotation = Quat::from_euler(EulerRot::YXZ, target.yaw, -target.pitch, 0.0);
            let right = rotation * Vec3::X;
            let up = rotation * Vec3::Y;
            target.focus += (-delta.x * right + delta.y * up) * scale;
            drag.last_pos = pos;
        }
    }
}

/// Scroll wheel: zoom (change distance).
pub fn camera_zoom(mut scroll_evts: EventReader<MouseWheel>, mut target: ResMut<CameraTarget>) {
    for evt in scroll_evts.read() {
        let dy = match evt.unit {
            MouseScrollUnit::Line => evt.y,
            MouseScrollUnit::Pixel => evt.y / 100.0,
        };
        let factor = 1.0 - dy * ZOOM_SPEED;
        target.distance = (target.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}

/// System: apply OrbitCamera state to the actual camera Transform each frame.
pub fn apply_orbit_camera(
    orbit: Res<OrbitCamera>,
    mut query: Query<&mut Transform, With<SceneCamera>>,
) {
    if !orbit.is_changed() {
        return;
    }
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    *transform = orbit.transform();
}

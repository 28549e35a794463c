//! Per-frame animation: particle drift, sea time uniform, particle billboards.
//!
//! Drift and the sea are a function of `Time::elapsed_secs()` assigned
//! absolutely each frame, so speed is independent of frame rate. Billboards
//! run at the very end of the camera update so quads face the camera as it
//! is drawn this frame.

use bevy::prelude::*;

use simulation::animation::particle_spin_angle;
use simulation::FrameSet;

use crate::camera::{self, CameraStep, SceneCamera};
use crate::camera_smoothing::{self, CameraSmoothingConfig};
use crate::scene::{Particle, ParticleField, Sea};
use crate::sea_material::SeaMaterial;

/// The `Animate` and `Camera` halves of the frame loop.
pub struct FrameLoopPlugin;

impl Plugin for FrameLoopPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraSmoothingConfig>()
            .add_event::<CameraStep>()
            .add_systems(
                Update,
                (spin_particle_field, advance_sea_time)
                    .chain()
                    .in_set(FrameSet::Animate),
            )
            .add_systems(
                Update,
                (
                    camera::apply_camera_steps,
                    camera_smoothing::smooth_camera_to_target,
                    camera::apply_orbit_camera,
                    billboard_particles,
                )
                    .chain()
                    .in_set(FrameSet::Camera),
            );
    }
}

/// System: set the particle field's rotation about Y from elapsed time.
pub fn spin_particle_field(
    time: Res<Time>,
    mut fields: Query<&mut Transform, With<ParticleField>>,
) {
    let rotation = Quat::from_rotation_y(particle_spin_angle(time.elapsed_secs()));
    for mut transform in &mut fields {
        transform.rotation = rotation;
    }
}

/// System: write elapsed time into the sea's time uniform.
pub fn advance_sea_time(
    time: Res<Time>,
    seas: Query<&MeshMaterial3d<SeaMaterial>, With<Sea>>,
    mut materials: ResMut<Assets<SeaMaterial>>,
) {
    let t = time.elapsed_secs();
    for handle in &seas {
        if let Some(material) = materials.get_mut(&handle.0) {
            material.uniform.time = t;
        }
    }
}

/// System: turn every particle quad to face the camera, compensating for the
/// field's own rotation.
pub fn billboard_particles(
    cameras: Query<&Transform, (With<SceneCamera>, Without<ParticleField>, Without<Particle>)>,
    fields: Query<&Transform, (With<ParticleField>, Without<Particle>)>,
    mut particles: Query<&mut Transform, (With<Particle>, Without<SceneCamera>, Without<ParticleField>)>,
) {
    let Ok(camera) = cameras.get_single() else {
        return;
    };
    let Ok(field) = fields.get_single() else {
        return;
    };
    let local = field.rotation.inverse() * camera.rotation;
    for mut transform in &mut particles {
        transform.rotation = local;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use bevy::time::TimeUpdateStrategy;

    use crate::camera::OrbitCamera;
    use crate::camera_smoothing::CameraTarget;

    fn frame_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<SeaMaterial>()
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(250)))
            .add_systems(
                Update,
                (spin_particle_field, advance_sea_time, billboard_particles).chain(),
            );
        app
    }

    #[test]
    fn test_particle_field_rotation_follows_elapsed_time() {
        let mut app = frame_app();
        let field = app
            .world_mut()
            .spawn((ParticleField, Transform::IDENTITY))
            .id();

        for _ in 0..5 {
            app.update();
        }

        let t = app.world().resource::<Time>().elapsed_secs();
        assert!(t > 0.0);
        let rotation = app.world().get::<Transform>(field).unwrap().rotation;
        let expected = Quat::from_rotation_y(0.02 * t);
        assert!(
            rotation.angle_between(expected) < 1e-5,
            "rotation {:?} != expected {:?} at t={}",
            rotation,
            expected,
            t
        );
    }

    #[test]
    fn test_rotation_is_assigned_not_accumulated() {
        let mut app = frame_app();
        let field = app
            .world_mut()
            .spawn((ParticleField, Transform::from_rotation(Quat::from_rotation_y(1.0))))
            .id();

        app.update();

        let t = app.world().resource::<Time>().elapsed_secs();
        let rotation = app.world().get::<Transform>(field).unwrap().rotation;
        assert!(rotation.angle_between(Quat::from_rotation_y(0.02 * t)) < 1e-5);
    }

    #[test]
    fn test_sea_time_uniform_tracks_elapsed_time() {
        let mut app = frame_app();
        let handle = app
            .world_mut()
            .resource_mut::<Assets<SeaMaterial>>()
            .add(SeaMaterial::default());
        app.world_mut()
            .spawn((Sea, MeshMaterial3d(handle.clone())));

        for _ in 0..3 {
            app.update();
        }

        let t = app.world().resource::<Time>().elapsed_secs();
        let material = app
            .world()
            .resource::<Assets<SeaMaterial>>()
            .get(&handle)
            .unwrap();
        assert_eq!(material.uniform.time, t);
    }

    #[test]
    fn test_billboards_follow_this_frames_camera() {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<SeaMaterial>()
            .add_plugins((simulation::SimulationPlugin, FrameLoopPlugin));

        let orbit = OrbitCamera::from_eye(Vec3::new(-15.0, 8.0, 12.0), Vec3::ZERO);
        app.insert_resource(orbit)
            .insert_resource(CameraTarget::from(orbit));
        // Stale transform: the camera system moves it this frame.
        let camera = app
            .world_mut()
            .spawn((SceneCamera, Transform::IDENTITY))
            .id();
        let field = app
            .world_mut()
            .spawn((ParticleField, Transform::IDENTITY))
            .id();
        let particle = app
            .world_mut()
            .spawn((Particle, Transform::from_xyz(1.0, 2.0, 3.0)))
            .id();
        app.world_mut().entity_mut(field).add_child(particle);

        app.update();

        let camera_rotation = app.world().get::<Transform>(camera).unwrap().rotation;
        assert!(camera_rotation.angle_between(orbit.transform().rotation) < 1e-4);
        let field_rotation = app.world().get::<Transform>(field).unwrap().rotation;
        let local = app.world().get::<Transform>(particle).unwrap().rotation;
        assert!(
            (field_rotation * local).angle_between(camera_rotation) < 1e-4,
            "particle faces a stale camera"
        );
    }

    #[test]
    fn test_particles_face_camera() {
        let mut app = frame_app();
        let camera_rotation = Transform::from_xyz(10.0, 10.0, 20.0)
            .looking_at(Vec3::ZERO, Vec3::Y)
            .rotation;
        app.world_mut()
            .spawn((SceneCamera, Transform::from_rotation(camera_rotation)));
        let field = app
            .world_mut()
            .spawn((ParticleField, Transform::IDENTITY))
            .id();
        let particle = app
            .world_mut()
            .spawn((Particle, Transform::from_xyz(1.0, 2.0, 3.0)))
            .id();
        app.world_mut().entity_mut(field).add_child(particle);

        app.update();

        let field_rotation = app.world().get::<Transform>(field).unwrap().rotation;
        let local = app.world().get::<Transform>(particle).unwrap().rotation;
        assert!((field_rotation * local).angle_between(camera_rotation) < 1e-4);
    }
}

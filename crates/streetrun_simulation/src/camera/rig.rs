//! Camera resolve + systems
//!
//! Без сглаживания: камера каждый тик пересчитывается с нуля и прыгает
//! вместе с поворотом машины.

use bevy::prelude::*;

use super::components::{CameraMode, CameraPose, CameraRig};
use crate::config::CameraConfig;
use crate::player::{LookOrientation, Player};
use crate::possession::Possession;
use crate::vehicle::Vehicle;

/// Поза камеры для текущего режима
///
/// - `vehicle_pose = None` → first-person в глазах игрока
/// - `vehicle_pose = Some` → chase: `vehicle + rotation * chase_offset`, смотрит на машину
pub fn resolve_camera(
    eye: Vec3,
    look: &LookOrientation,
    vehicle_pose: Option<&Transform>,
    config: &CameraConfig,
) -> CameraPose {
    let Some(vehicle) = vehicle_pose else {
        return CameraPose {
            position: eye,
            rotation: look.rotation(),
            look_target: None,
        };
    };

    let target = vehicle.translation;
    let position = target + vehicle.rotation * config.chase_offset();
    let rotation = Transform::from_translation(position)
        .looking_at(target, Vec3::Y)
        .rotation;

    CameraPose {
        position,
        rotation,
        look_target: Some(target),
    }
}

/// Startup system: гарантируем ровно один rig
pub fn spawn_camera_rig(mut commands: Commands, rigs: Query<(), With<CameraRig>>) {
    if rigs.is_empty() {
        commands.spawn((Name::new("CameraRig"), CameraRig::default()));
    }
}

/// System: пересчитать rig из игрока / машины
pub fn update_camera_rig(
    players: Query<(&Transform, &LookOrientation, &Possession), (With<Player>, Without<CameraRig>)>,
    vehicles: Query<&Transform, (With<Vehicle>, Without<CameraRig>)>,
    mut rigs: Query<(&mut CameraRig, &mut Transform)>,
    config: Res<CameraConfig>,
) {
    let Ok((player_transform, look, possession)) = players.single() else {
        return;
    };

    let vehicle_pose = match possession.vehicle() {
        Some(vehicle) => match vehicles.get(vehicle) {
            Ok(transform) => Some(transform),
            Err(_) => {
                crate::log_warning(&format!(
                    "Camera: possessed vehicle {:?} not found, staying first-person",
                    vehicle
                ));
                None
            }
        },
        None => None,
    };

    let pose = resolve_camera(player_transform.translation, look, vehicle_pose, &config);
    let mode = match vehicle_pose {
        Some(_) => CameraMode::Chase,
        None => CameraMode::FirstPerson,
    };

    for (mut rig, mut transform) in rigs.iter_mut() {
        if rig.mode != mode {
            crate::log(&format!("📷 Camera mode {:?} → {:?}", rig.mode, mode));
        }
        rig.mode = mode;
        rig.look_target = pose.look_target;
        transform.translation = pose.position;
        transform.rotation = pose.rotation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_first_person_uses_eye_and_look() {
        let look = LookOrientation::new(0.4, -0.1);
        let eye = Vec3::new(1.0, 2.0, 3.0);

        let pose = resolve_camera(eye, &look, None, &CameraConfig::default());

        assert_eq!(pose.position, eye);
        assert_eq!(pose.look_target, None);
        assert!(pose.forward().abs_diff_eq(look.forward(), 1e-5));
    }

    #[test]
    fn test_chase_offset_behind_and_above() {
        let vehicle = Transform::from_xyz(30.0, 0.0, 30.0);

        let pose = resolve_camera(Vec3::ZERO, &LookOrientation::default(), Some(&vehicle), &CameraConfig::default());

        assert!(pose.position.abs_diff_eq(Vec3::new(30.0, 5.0, 15.0), 1e-4));
        assert_eq!(pose.look_target, Some(vehicle.translation));

        // Смотрим на машину
        let to_target = (vehicle.translation - pose.position).normalize();
        assert!(pose.forward().abs_diff_eq(to_target, 1e-4));
    }

    #[test]
    fn test_chase_offset_rotates_with_heading() {
        let vehicle = Transform::from_xyz(0.0, 0.0, 0.0)
            .with_rotation(Vehicle::new(FRAC_PI_2).rotation());

        let pose = resolve_camera(Vec3::ZERO, &LookOrientation::default(), Some(&vehicle), &CameraConfig::default());

        // Нос в +X → камера позади, в -X
        assert!(pose.position.abs_diff_eq(Vec3::new(-15.0, 5.0, 0.0), 1e-4), "{:?}", pose.position);
    }
}

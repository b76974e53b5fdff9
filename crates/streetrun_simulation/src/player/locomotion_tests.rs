//! Tests for player locomotion.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use super::super::components::{LookOrientation, PlayerMotion};
    use super::super::locomotion::integrate_player;
    use crate::config::LocomotionConfig;
    use crate::input::InputState;

    const DT: f32 = 1.0 / 60.0;

    fn standing() -> (PlayerMotion, Transform) {
        (
            PlayerMotion { velocity: Vec3::ZERO, on_ground: true },
            Transform::from_xyz(0.0, 2.0, 0.0),
        )
    }

    fn horizontal_speed(motion: &PlayerMotion) -> f32 {
        Vec2::new(motion.velocity.x, motion.velocity.z).length()
    }

    #[test]
    fn test_damping_never_increases_speed() {
        let config = LocomotionConfig::default();
        let look = LookOrientation::default();
        let input = InputState::default();
        let (mut motion, mut transform) = standing();
        motion.velocity = Vec3::new(30.0, 0.0, -25.0);

        let mut previous = horizontal_speed(&motion);
        for dt in [DT, 0.0, 0.05, DT, 0.001, DT, DT, 0.02] {
            integrate_player(&mut motion, &mut transform, &look, &input, &config, dt);
            let speed = horizontal_speed(&motion);
            assert!(speed <= previous, "speed {} > previous {} (dt = {})", speed, previous, dt);
            previous = speed;
        }

        for _ in 0..600 {
            integrate_player(&mut motion, &mut transform, &look, &input, &config, DT);
        }
        assert!(horizontal_speed(&motion) < 1e-3);
    }

    #[test]
    fn test_forward_moves_along_look_direction() {
        let config = LocomotionConfig::default();
        let look = LookOrientation::default(); // -Z
        let input = InputState { forward: true, ..default() };
        let (mut motion, mut transform) = standing();

        integrate_player(&mut motion, &mut transform, &look, &input, &config, DT);

        // forward уменьшает velocity.z, позиция уходит в -Z
        assert!(motion.velocity.z < 0.0);
        assert!(transform.translation.z < 0.0);
        assert!(transform.translation.x.abs() < 1e-6);
    }

    #[test]
    fn test_thrust_survives_same_tick_damping() {
        let config = LocomotionConfig::default();
        let look = LookOrientation::default();
        let input = InputState { right: true, ..default() };
        let (mut motion, mut transform) = standing();

        integrate_player(&mut motion, &mut transform, &look, &input, &config, DT);

        // 400 * (1/60) ≈ 6.67, трение применено до thrust
        assert!((motion.velocity.x + 400.0 * DT).abs() < 1e-4, "v.x = {}", motion.velocity.x);
        assert!(transform.translation.x > 0.0);
    }

    #[test]
    fn test_diagonal_input_is_normalized() {
        let config = LocomotionConfig::default();
        let look = LookOrientation::default();
        let input = InputState { forward: true, right: true, ..default() };
        let (mut motion, mut transform) = standing();

        integrate_player(&mut motion, &mut transform, &look, &input, &config, DT);

        let expected = config.acceleration * DT;
        assert!((horizontal_speed(&motion) - expected).abs() < 1e-3);
    }

    #[test]
    fn test_opposite_keys_cancel_without_nan() {
        let config = LocomotionConfig::default();
        let look = LookOrientation::default();
        let input = InputState { left: true, right: true, forward: true, backward: true, ..default() };
        let (mut motion, mut transform) = standing();

        integrate_player(&mut motion, &mut transform, &look, &input, &config, DT);

        assert!(!motion.velocity.is_nan());
        assert_eq!(horizontal_speed(&motion), 0.0);
        assert_eq!(transform.translation, Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let config = LocomotionConfig::default();
        let look = LookOrientation::default();
        let jump = InputState { jump: true, ..default() };
        let (mut motion, mut transform) = standing();

        integrate_player(&mut motion, &mut transform, &look, &jump, &config, DT);
        assert!(!motion.on_ground);
        assert_eq!(motion.velocity.y, config.jump_impulse);
        assert!(transform.translation.y > config.stand_height);

        // Повторный прыжок в воздухе игнорируется: скорость только падает
        let vy_before = motion.velocity.y;
        integrate_player(&mut motion, &mut transform, &look, &jump, &config, DT);
        assert!(motion.velocity.y < vy_before);
    }

    #[test]
    fn test_jump_lands_back_on_floor() {
        let config = LocomotionConfig::default();
        let look = LookOrientation::default();
        let jump = InputState { jump: true, ..default() };
        let idle = InputState::default();
        let (mut motion, mut transform) = standing();

        integrate_player(&mut motion, &mut transform, &look, &jump, &config, DT);

        // 30 / 98 ≈ 0.3 сек вверх, столько же вниз
        for _ in 0..120 {
            integrate_player(&mut motion, &mut transform, &look, &idle, &config, DT);
        }

        assert!(motion.on_ground);
        assert_eq!(motion.velocity.y, 0.0);
        assert_eq!(transform.translation.y, config.stand_height);
    }

    #[test]
    fn test_floor_clamp_grounds_falling_player() {
        let config = LocomotionConfig::default();
        let look = LookOrientation::default();
        let input = InputState::default();
        let mut motion = PlayerMotion::default();
        let mut transform = Transform::from_xyz(0.0, 5.0, 0.0);

        for _ in 0..120 {
            integrate_player(&mut motion, &mut transform, &look, &input, &config, DT);
            assert!(transform.translation.y >= config.stand_height);
        }

        assert!(motion.on_ground);
        assert_eq!(transform.translation.y, config.stand_height);
    }

    #[test]
    fn test_invalid_dt_is_noop() {
        let config = LocomotionConfig::default();
        let look = LookOrientation::default();
        let input = InputState { forward: true, ..default() };
        let (mut motion, mut transform) = standing();

        integrate_player(&mut motion, &mut transform, &look, &input, &config, -1.0);
        integrate_player(&mut motion, &mut transform, &look, &input, &config, f32::NAN);

        assert_eq!(motion.velocity, Vec3::ZERO);
        assert_eq!(transform.translation, Vec3::new(0.0, 2.0, 0.0));
    }
}

//! Пешее передвижение игрока (first-person)
//!
//! Порядок внутри тика важен:
//! 1. трение (до thrust, чтобы не съедать ускорение этого тика)
//! 2. гравитация
//! 3. thrust от WASD
//! 4. прыжок
//! 5. интеграция позиции через LookOrientation (relative moves)
//! 6. floor clamp на `stand_height` (коллизий с геометрией нет)

use bevy::prelude::*;

use super::components::{LookOrientation, Player, PlayerMotion};
use crate::config::LocomotionConfig;
use crate::input::InputState;
use crate::possession::Possession;

/// Интегрирует один тик пешего движения
pub fn integrate_player(
    motion: &mut PlayerMotion,
    transform: &mut Transform,
    look: &LookOrientation,
    input: &InputState,
    config: &LocomotionConfig,
    dt: f32,
) {
    let dt = sanitize_dt(dt);

    // Экспоненциальное трение по горизонтали
    motion.velocity.x -= motion.velocity.x * config.damping * dt;
    motion.velocity.z -= motion.velocity.z * config.damping * dt;

    motion.velocity.y -= config.gravity * dt;

    let direction = input.move_axes();
    if direction != Vec2::ZERO {
        let direction = direction.normalize();
        // forward уменьшает z-компоненту (см. PlayerMotion)
        motion.velocity.x -= direction.x * config.acceleration * dt;
        motion.velocity.z -= direction.y * config.acceleration * dt;
    }

    if input.jump && motion.on_ground {
        motion.velocity.y = config.jump_impulse;
        motion.on_ground = false;
    }

    look.move_right(transform, -motion.velocity.x * dt);
    look.move_forward(transform, -motion.velocity.z * dt);
    transform.translation.y += motion.velocity.y * dt;

    if transform.translation.y < config.stand_height {
        motion.velocity.y = 0.0;
        transform.translation.y = config.stand_height;
        motion.on_ground = true;
    }
}

/// Отрицательный или NaN dt = пропуск тика
pub(crate) fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt
    } else {
        0.0
    }
}

/// System: пешее движение всех игроков не в машине
///
/// В машине velocity не трогаем (freeze), позиция тоже.
pub fn update_player_locomotion(
    mut players: Query<(&mut PlayerMotion, &mut Transform, &LookOrientation, &Possession), With<Player>>,
    input: Res<InputState>,
    config: Res<LocomotionConfig>,
    time: Res<Time<Fixed>>,
) {
    let dt = time.delta_secs();

    for (mut motion, mut transform, look, possession) in players.iter_mut() {
        if possession.is_driving() {
            continue;
        }

        integrate_player(&mut motion, &mut transform, look, &input, &config, dt);
    }
}

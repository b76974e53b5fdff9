//! Player компоненты: маркер, пешая кинематика, first-person взгляд

use bevy::prelude::*;

use crate::possession::Possession;

/// Marker component для player-controlled entity
///
/// `Transform` игрока = позиция глаз (first-person камера сидит здесь).
/// Required Components добавляют всё остальное для пешего режима.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(Transform, PlayerMotion, LookOrientation, Possession)]
pub struct Player;

/// Пешая кинематика игрока
///
/// # Оси velocity (в пространстве взгляда, не world)
/// - `x`: отрицательный = вправо (moveRight(-v.x * dt))
/// - `z`: отрицательный = вперёд (moveForward(-v.z * dt))
/// - `y`: world up
///
/// Пока игрок в машине velocity заморожена (не сбрасывается).
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct PlayerMotion {
    pub velocity: Vec3,
    /// Можно прыгать (стоим на полу)
    pub on_ground: bool,
}

/// First-person ориентация (pointer-lock yaw/pitch)
///
/// Yaw/pitch пишет внешний провайдер (мышь, autopilot).
/// Симуляция только просит relative moves: `move_forward` / `move_right`.
///
/// Конвенция Bevy: при yaw = 0 взгляд вдоль -Z, right = +X.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct LookOrientation {
    /// Поворот вокруг Y (радианы)
    pub yaw: f32,
    /// Наклон вверх/вниз (радианы)
    pub pitch: f32,
}

impl LookOrientation {
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Направление взгляда (с учётом pitch)
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    /// Forward спроецированный на XZ (pitch не влияет на ходьбу)
    pub fn flat_forward(&self) -> Vec3 {
        Quat::from_rotation_y(self.yaw) * Vec3::NEG_Z
    }

    pub fn flat_right(&self) -> Vec3 {
        Quat::from_rotation_y(self.yaw) * Vec3::X
    }

    pub fn move_forward(&self, transform: &mut Transform, distance: f32) {
        transform.translation += self.flat_forward() * distance;
    }

    pub fn move_right(&self, transform: &mut Transform, distance: f32) {
        transform.translation += self.flat_right() * distance;
    }

    /// Повернуться по yaw к точке (pitch не трогаем)
    pub fn face_towards(&mut self, from: Vec3, to: Vec3) {
        let delta = to - from;
        if delta.x == 0.0 && delta.z == 0.0 {
            return;
        }
        self.yaw = (-delta.x).atan2(-delta.z);
    }
}

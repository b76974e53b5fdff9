//! Vehicle компоненты: скалярная скорость + heading

use bevy::prelude::*;

use crate::config::VehicleConfig;
use crate::input::InputState;

/// Машина с упрощённой динамикой
///
/// Нет массы, подвески и коллизий: `speed` вдоль носа (local +Z),
/// `heading` — yaw вокруг Y. `Transform.rotation` всегда выводится из heading.
///
/// # Руль
/// - Работает только при `|speed| > min_turn_speed` (нельзя крутиться на месте)
/// - Только накопление, возврата в центр нет
/// - Задний ход НЕ инвертирует руль (упрощение, не баг)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(Transform)]
pub struct Vehicle {
    /// Скорость вдоль носа (units/s), отрицательная = задний ход
    pub speed: f32,
    /// Yaw (радианы)
    pub heading: f32,
}

impl Vehicle {
    pub fn new(heading: f32) -> Self {
        Self { speed: 0.0, heading }
    }

    /// Один тик газ/тормоз/drag/руль (без перемещения)
    pub fn drive(&mut self, input: &InputState, config: &VehicleConfig, dt: f32) {
        if input.forward {
            self.speed += config.acceleration * dt;
        }
        if input.backward {
            self.speed -= config.brake * dt;
        }

        self.speed *= config.drag;

        if self.speed.abs() > config.min_turn_speed {
            if input.left {
                self.heading += config.turn_rate * dt;
            }
            if input.right {
                self.heading -= config.turn_rate * dt;
            }
        }
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.heading)
    }

    /// Направление носа в world space
    pub fn nose(&self) -> Vec3 {
        self.rotation() * Vec3::Z
    }

    /// Применить heading к rotation и сдвинуть вдоль носа на `speed * dt`
    pub fn advance_pose(&self, transform: &mut Transform, dt: f32) {
        transform.rotation = self.rotation();
        transform.translation += self.nose() * self.speed * dt;
    }
}

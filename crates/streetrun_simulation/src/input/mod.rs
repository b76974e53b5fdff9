//! Player input — единственное место, откуда симуляция читает управление
//!
//! # Архитектура
//!
//! ```text
//! Хост (клавиатура / autopilot / тест)
//!     ↓ пишет
//! InputState (Resource, latest-value)
//!     ↓ читают
//! FixedUpdate системы (possession, locomotion, vehicle, hit-scan)
//!     ↓
//! clear_input_edges (конец тика)
//! ```
//!
//! Held кнопки (WASD) — просто текущее состояние.
//! Edge кнопки (interact, fire, jump) защёлкиваются до ближайшего fixed тика
//! и сбрасываются после него: нажатие не теряется, если между тиками прошло
//! несколько кадров, и не срабатывает дважды.

use bevy::input::ButtonInput;
use bevy::prelude::*;

/// Текущее состояние управления
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,

    /// Сесть / выйти из машины (F)
    pub interact: bool,
    /// Выстрел (LMB)
    pub fire: bool,
    /// Прыжок (Space)
    pub jump: bool,
}

impl InputState {
    /// Held направление: `x` = right - left, `y` = forward - backward
    ///
    /// Не нормализовано: диагональ даёт длину √2, ноль = нет движения.
    pub fn move_axes(&self) -> Vec2 {
        Vec2::new(
            axis(self.right, self.left),
            axis(self.forward, self.backward),
        )
    }

    /// Сбросить edge-triggered действия (held не трогаем)
    pub fn clear_edges(&mut self) {
        self.interact = false;
        self.fire = false;
        self.jump = false;
    }
}

fn axis(positive: bool, negative: bool) -> f32 {
    (positive as i32 - negative as i32) as f32
}

/// System: сброс edge действий в конце fixed тика
pub fn clear_input_edges(mut input: ResMut<InputState>) {
    input.clear_edges();
}

/// System: клавиатура/мышь Bevy → InputState
///
/// Без InputPlugin (headless) ресурсов `ButtonInput` нет — тогда ничего не делаем.
pub fn sample_keyboard_input(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mouse: Option<Res<ButtonInput<MouseButton>>>,
    mut input: ResMut<InputState>,
) {
    if let Some(keys) = keys {
        input.forward = keys.pressed(KeyCode::KeyW);
        input.backward = keys.pressed(KeyCode::KeyS);
        input.left = keys.pressed(KeyCode::KeyA);
        input.right = keys.pressed(KeyCode::KeyD);

        // |= : edge живёт до clear_input_edges
        input.interact |= keys.just_pressed(KeyCode::KeyF);
        input.jump |= keys.just_pressed(KeyCode::Space);
    }

    if let Some(mouse) = mouse {
        input.fire |= mouse.just_pressed(MouseButton::Left);
    }
}

/// Plugin: маппинг клавиатуры для интерактивного хоста
///
/// В `SimulationPlugin` не входит — headless сценарии пишут InputState сами.
pub struct KeyboardInputPlugin;

impl Plugin for KeyboardInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputState>()
            .add_systems(PreUpdate, sample_keyboard_input);
    }
}

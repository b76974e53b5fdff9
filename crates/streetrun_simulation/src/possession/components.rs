//! Possession state machine (игрок пешком / за рулём)

use bevy::prelude::*;

/// Кем сейчас управляет игрок
///
/// Инвариант: ровно одно из двух. Переход мгновенный, промежуточных состояний нет.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub enum Possession {
    /// Пешком: работает PlayerMotion, камера first-person
    #[default]
    OnFoot,

    /// За рулём: input уходит в машину, камера chase
    Driving { vehicle: Entity },
}

impl Possession {
    pub fn is_driving(&self) -> bool {
        matches!(self, Possession::Driving { .. })
    }

    pub fn vehicle(&self) -> Option<Entity> {
        match self {
            Possession::OnFoot => None,
            Possession::Driving { vehicle } => Some(*vehicle),
        }
    }
}

//! Possession events
//!
//! Possession не знает про миссии: пишет события, слушатели подписываются
//! при сборке App (MissionPlugin читает `PossessionEntered`).

use bevy::prelude::*;

/// Event: игрок сел в машину
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PossessionEntered {
    pub player: Entity,
    pub vehicle: Entity,
}

/// Event: игрок вышел из машины
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PossessionExited {
    pub player: Entity,
    pub vehicle: Entity,
}

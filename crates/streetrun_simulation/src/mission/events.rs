//! Mission events

use bevy::prelude::*;

/// Event: миссия перешла из стадии `from` в `to` (всегда `to = from + 1`)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissionStageAdvanced {
    pub from: usize,
    pub to: usize,
}

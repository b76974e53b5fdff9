//! Mission script (data) и прогресс (state machine)
//!
//! Линейная цепочка стадий 0..N-1. Из стадии `i` в `i + 1` ведёт ровно один
//! trigger (`advance_on`). Последняя стадия терминальная. Провала нет.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Условие перехода в следующую стадию
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StageTrigger {
    /// В этом тике игрок сел в машину
    PossessionEntered,

    /// Машина игрока ближе `radius` к DeliveryTarget (строго меньше)
    VehicleNearTarget { radius: f32 },
}

/// Одноразовый эффект при входе в стадию
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageEffect {
    #[default]
    None,
    /// Перекрасить машину игрока в COMPLETE_COLOR + Presenter::mark_complete
    MarkVehicleComplete,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueLine {
    pub speaker: String,
    pub text: String,
}

impl DialogueLine {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionStage {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub dialogue: Option<DialogueLine>,
    #[serde(default)]
    pub on_enter: StageEffect,
    /// None = терминальная стадия
    #[serde(default)]
    pub advance_on: Option<StageTrigger>,
}

impl MissionStage {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            dialogue: None,
            on_enter: StageEffect::None,
            advance_on: None,
        }
    }

    pub fn with_dialogue(mut self, speaker: impl Into<String>, text: impl Into<String>) -> Self {
        self.dialogue = Some(DialogueLine::new(speaker, text));
        self
    }

    pub fn with_effect(mut self, effect: StageEffect) -> Self {
        self.on_enter = effect;
        self
    }

    pub fn advance_on(mut self, trigger: StageTrigger) -> Self {
        self.advance_on = Some(trigger);
        self
    }
}

/// Сценарий миссии (Resource)
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionScript {
    pub stages: Vec<MissionStage>,
}

impl Default for MissionScript {
    fn default() -> Self {
        Self::stolen_car()
    }
}

impl MissionScript {
    /// Эталонная миссия: угнать машину и пригнать её к NPC
    pub fn stolen_car() -> Self {
        Self {
            stages: vec![
                MissionStage::new("Stolen Car", "Find the pink car and get in (F).")
                    .advance_on(StageTrigger::PossessionEntered),
                MissionStage::new("Delivery", "Drive the car to the contact (green marker).")
                    .with_dialogue("Lester", "Hey! Got the car? Bring it to the meeting point, now!")
                    .advance_on(StageTrigger::VehicleNearTarget { radius: 15.0 }),
                MissionStage::new("Mission Complete", "Respect +$100")
                    .with_dialogue("Lester", "Great job, buddy! Now go treat yourself.")
                    .with_effect(StageEffect::MarkVehicleComplete),
            ],
        }
    }

    pub fn stage(&self, index: usize) -> Option<&MissionStage> {
        self.stages.get(index)
    }
}

/// Снимок мира для проверки trigger'ов (собирается системой каждый тик)
///
/// Отсутствующие entity = None = условие не выполнено.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MissionObservation {
    pub possession_entered: bool,
    /// Машина, в которой сидит игрок
    pub vehicle: Option<(Entity, Vec3)>,
    /// Ближайшая к машине точка доставки
    pub target: Option<Vec3>,
}

impl StageTrigger {
    pub fn is_met(&self, observation: &MissionObservation) -> bool {
        match self {
            StageTrigger::PossessionEntered => observation.possession_entered,
            StageTrigger::VehicleNearTarget { radius } => {
                match (observation.vehicle, observation.target) {
                    (Some((_, vehicle)), Some(target)) => vehicle.distance(target) < *radius,
                    _ => false,
                }
            }
        }
    }
}

/// Переход между стадиями
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageAdvance {
    pub from: usize,
    pub to: usize,
}

/// Текущая стадия (монотонно растёт, никогда не откатывается)
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MissionProgress {
    pub current: usize,
    /// Стадия 0 уже показана
    pub started: bool,
}

impl MissionProgress {
    pub fn is_complete(&self, script: &MissionScript) -> bool {
        self.current + 1 >= script.stages.len()
    }

    /// Проверить trigger ТОЛЬКО текущей стадии, максимум +1 за вызов
    pub fn try_advance(
        &mut self,
        script: &MissionScript,
        observation: &MissionObservation,
    ) -> Option<StageAdvance> {
        if self.is_complete(script) {
            return None;
        }

        let trigger = script.stage(self.current)?.advance_on.as_ref()?;
        if !trigger.is_met(observation) {
            return None;
        }

        let from = self.current;
        self.current += 1;
        Some(StageAdvance { from, to: self.current })
    }
}

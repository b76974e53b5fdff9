//! Presenter — UI миссии снаружи симуляции
//!
//! Симуляция только зовёт методы (fire-and-forget), ничего не ждёт обратно.
//! Таймер скрытия диалога и вёрстка — забота реализации.

use bevy::prelude::*;

pub trait MissionPresenter: Send + Sync {
    fn set_mission_text(&self, title: &str, description: &str);

    fn show_dialogue(&self, _speaker: &str, _text: &str) {}

    /// Одноразовая отметка объекта при завершении миссии
    fn mark_complete(&self, entity: Entity);
}

/// Resource с текущим presenter'ом
#[derive(Resource)]
pub struct Presenter(Box<dyn MissionPresenter>);

impl Presenter {
    pub fn new(presenter: impl MissionPresenter + 'static) -> Self {
        Self(Box::new(presenter))
    }

    pub fn get(&self) -> &dyn MissionPresenter {
        self.0.as_ref()
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new(LogPresenter)
    }
}

/// Presenter по умолчанию: всё в logger
pub struct LogPresenter;

impl MissionPresenter for LogPresenter {
    fn set_mission_text(&self, title: &str, description: &str) {
        crate::log_info(&format!("📋 MISSION: {} — {}", title, description));
    }

    fn show_dialogue(&self, speaker: &str, text: &str) {
        crate::log_info(&format!("💬 {}: {}", speaker, text));
    }

    fn mark_complete(&self, entity: Entity) {
        crate::log_info(&format!("🏆 Mission complete, marked {:?}", entity));
    }
}

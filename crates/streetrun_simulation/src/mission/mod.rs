//! Mission domain — линейная state machine стадий
//!
//! Содержит:
//! - MissionScript / MissionStage / StageTrigger (data, RON-совместимо)
//! - MissionProgress (текущая стадия, только вперёд)
//! - MissionPresenter (trait) + Presenter (Resource) + LogPresenter
//! - start_mission / advance_mission (systems)

pub mod events;
pub mod presenter;
pub mod script;
pub mod systems;


pub use events::*;
pub use presenter::*;
pub use script::*;
pub use systems::*;

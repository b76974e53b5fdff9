//! Vehicle domain — машина с упрощённой динамикой
//!
//! Содержит:
//! - Vehicle (speed + heading, drive / advance_pose)
//! - drive_possessed_vehicles (system, только машина с водителем)

pub mod components;
pub mod systems;


pub use components::*;
pub use systems::*;

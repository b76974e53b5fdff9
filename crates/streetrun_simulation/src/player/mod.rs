//! Player domain — пешее передвижение
//!
//! Содержит:
//! - Player (маркер), PlayerMotion (velocity + on_ground)
//! - LookOrientation (first-person yaw/pitch, relative moves)
//! - integrate_player / update_player_locomotion

pub mod components;
pub mod locomotion;

#[cfg(test)]
mod locomotion_tests;

pub use components::*;
pub use locomotion::*;

//! Camera domain — first-person / chase rig
//!
//! Содержит:
//! - CameraMode, CameraRig, CameraPose
//! - resolve_camera (чистая функция), update_camera_rig (system)

pub mod components;
pub mod rig;

pub use components::*;
pub use rig::*;

//! World domain — registry твёрдых объектов и hit-scan
//!
//! Содержит:
//! - Solid, Appearance, DeliveryTarget (components)
//! - HIT_COLOR, COMPLETE_COLOR
//! - nearest_hit, resolve_hit_scan, HitScanResolved

pub mod components;
pub mod hitscan;

pub use components::*;
pub use hitscan::*;

//! Possession domain — игрок пешком или за рулём
//!
//! Содержит:
//! - Possession (OnFoot / Driving { vehicle })
//! - PossessionEntered / PossessionExited (events)
//! - toggle_possession (system), find_enterable_vehicle (proximity)

pub mod components;
pub mod events;
pub mod systems;

pub use components::*;
pub use events::*;
pub use systems::*;

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::prelude::*;

    fn entity(index: u32) -> Entity {
        Entity::from_raw(index)
    }

    #[test]
    fn test_possession_default_on_foot() {
        assert_eq!(Possession::default(), Possession::OnFoot);
        assert!(!Possession::OnFoot.is_driving());
        assert_eq!(Possession::OnFoot.vehicle(), None);

        let driving = Possession::Driving { vehicle: entity(7) };
        assert!(driving.is_driving());
        assert_eq!(driving.vehicle(), Some(entity(7)));
    }

    #[test]
    fn test_far_vehicle_not_enterable() {
        let found = find_enterable_vehicle(
            Vec3::ZERO,
            [(entity(1), Vec3::new(20.0, 0.0, 0.0))],
            15.0,
        );
        assert_eq!(found, None);
    }

    #[test]
    fn test_boundary_distance_not_enterable() {
        let found = find_enterable_vehicle(
            Vec3::ZERO,
            [(entity(1), Vec3::new(15.0, 0.0, 0.0))],
            15.0,
        );
        assert_eq!(found, None);
    }

    #[test]
    fn test_nearest_vehicle_wins() {
        let found = find_enterable_vehicle(
            Vec3::ZERO,
            [
                (entity(1), Vec3::new(12.0, 0.0, 0.0)),
                (entity(2), Vec3::new(0.0, 0.0, -5.0)),
                (entity(3), Vec3::new(40.0, 0.0, 0.0)),
            ],
            15.0,
        );
        assert_eq!(found, Some(entity(2)));
    }
}

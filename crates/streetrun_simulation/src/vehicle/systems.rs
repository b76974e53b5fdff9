//! Vehicle systems

use bevy::prelude::*;

use super::components::Vehicle;
use crate::config::VehicleConfig;
use crate::input::InputState;
use crate::player::locomotion::sanitize_dt;
use crate::player::Player;
use crate::possession::Possession;

/// System: ведём машину, в которой сидит игрок
///
/// Машины без водителя стоят (drag к ним не применяется — они и так стоят).
pub fn drive_possessed_vehicles(
    players: Query<(Entity, &Possession), With<Player>>,
    mut vehicles: Query<(&mut Vehicle, &mut Transform), Without<Player>>,
    input: Res<InputState>,
    config: Res<VehicleConfig>,
    time: Res<Time<Fixed>>,
) {
    let dt = sanitize_dt(time.delta_secs());

    for (player, possession) in players.iter() {
        let Some(vehicle_entity) = possession.vehicle() else {
            continue;
        };

        let Ok((mut vehicle, mut transform)) = vehicles.get_mut(vehicle_entity) else {
            crate::log_warning(&format!(
                "Player {:?} drives missing vehicle {:?}",
                player, vehicle_entity
            ));
            continue;
        };

        vehicle.drive(&input, &config, dt);
        vehicle.advance_pose(&mut transform, dt);
    }
}

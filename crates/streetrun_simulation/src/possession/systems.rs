//! Possession systems: посадка / высадка по interact

use bevy::prelude::*;

use super::components::Possession;
use super::events::{PossessionEntered, PossessionExited};
use crate::config::PossessionConfig;
use crate::input::InputState;
use crate::player::{Player, PlayerMotion};
use crate::vehicle::Vehicle;

/// Ближайшая машина строго внутри `radius`
///
/// Граница (distance == radius) не считается.
pub fn find_enterable_vehicle(
    player_position: Vec3,
    vehicles: impl IntoIterator<Item = (Entity, Vec3)>,
    radius: f32,
) -> Option<Entity> {
    vehicles
        .into_iter()
        .map(|(entity, position)| (entity, player_position.distance(position)))
        .filter(|(_, distance)| *distance < radius)
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(entity, _)| entity)
}

/// System: toggle possession по interact
///
/// # Переходы
/// - OnFoot → Driving: ближайшая машина в `entry_radius`, velocity замораживается
/// - Driving → OnFoot: безусловно, игрок появляется в `vehicle + exit_offset`,
///   velocity = 0, on_ground = true
///
/// Если машина исчезла из мира — высаживаем на месте, без паники.
pub fn toggle_possession(
    mut players: Query<
        (Entity, &mut Possession, &mut Transform, &mut PlayerMotion),
        (With<Player>, Without<Vehicle>),
    >,
    vehicles: Query<(Entity, &Transform), (With<Vehicle>, Without<Player>)>,
    input: Res<InputState>,
    config: Res<PossessionConfig>,
    mut entered_events: EventWriter<PossessionEntered>,
    mut exited_events: EventWriter<PossessionExited>,
) {
    if !input.interact {
        return;
    }

    for (player, mut possession, mut transform, mut motion) in players.iter_mut() {
        match *possession {
            Possession::OnFoot => {
                let candidates = vehicles.iter().map(|(e, t)| (e, t.translation));
                let Some(vehicle) =
                    find_enterable_vehicle(transform.translation, candidates, config.entry_radius)
                else {
                    crate::log(&format!(
                        "Player {:?}: no vehicle within {} units",
                        player, config.entry_radius
                    ));
                    continue;
                };

                *possession = Possession::Driving { vehicle };
                entered_events.write(PossessionEntered { player, vehicle });

                crate::log_info(&format!("🚗 Player {:?} entered vehicle {:?}", player, vehicle));
            }
            Possession::Driving { vehicle } => {
                match vehicles.get(vehicle) {
                    Ok((_, vehicle_transform)) => {
                        transform.translation = vehicle_transform.translation + config.exit_offset();
                    }
                    Err(_) => {
                        crate::log_warning(&format!(
                            "Player {:?}: possessed vehicle {:?} not found, releasing in place",
                            player, vehicle
                        ));
                    }
                }

                motion.velocity = Vec3::ZERO;
                motion.on_ground = true;
                *possession = Possession::OnFoot;
                exited_events.write(PossessionExited { player, vehicle });

                crate::log_info(&format!("🚶 Player {:?} left vehicle {:?}", player, vehicle));
            }
        }
    }
}

//! Эталонный сценарий: город, розовая машина, NPC для доставки
//!
//! + скриптовый autopilot для headless прогона (дойти до машины, сесть,
//! доехать до NPC). Autopilot пишет только InputState / LookOrientation,
//! то есть ведёт себя как внешний InputProvider.

use bevy::prelude::*;
use rand::Rng;

use crate::config::PossessionConfig;
use crate::input::InputState;
use crate::mission::{MissionProgress, MissionScript};
use crate::player::{LookOrientation, Player};
use crate::possession::Possession;
use crate::vehicle::Vehicle;
use crate::world::{Appearance, DeliveryTarget, Solid};
use crate::{DeterministicRng, SimulationSet};

pub const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, 2.0, 0.0);
pub const CAR_SPAWN: Vec3 = Vec3::new(30.0, 0.0, 30.0);
pub const NPC_POSITION: Vec3 = Vec3::new(-50.0, 0.0, -50.0);

pub const CAR_COLOR: u32 = 0xff00ff;
pub const NPC_COLOR: u32 = 0x00ff00;

const BUILDING_COUNT: usize = 60;
/// Здания в квадрате ±half_extent вокруг центра
const CITY_HALF_EXTENT: f32 = 250.0;
const BUILDING_FOOTPRINT: f32 = 15.0;

/// Entity эталонного сценария
#[derive(Debug, Clone, Copy)]
pub struct ReferenceScenario {
    pub player: Entity,
    pub vehicle: Entity,
    pub target: Entity,
}

/// Заспавнить игрока, машину, NPC и здания
///
/// Здания берут размеры и цвета из DeterministicRng (seed из world, иначе 42).
pub fn spawn_reference_scenario(world: &mut World) -> ReferenceScenario {
    let player = world
        .spawn((Name::new("Player"), Player, Transform::from_translation(PLAYER_SPAWN)))
        .id();

    let vehicle = world
        .spawn((
            Name::new("StolenCar"),
            Vehicle::default(),
            Transform::from_translation(CAR_SPAWN),
            Solid::cuboid(5.0, 2.0, 10.0),
            Appearance::new(CAR_COLOR),
        ))
        .id();

    let target = world
        .spawn((
            Name::new("Contact"),
            DeliveryTarget,
            Transform::from_translation(NPC_POSITION),
            Appearance::new(NPC_COLOR),
        ))
        .id();

    if !world.contains_resource::<DeterministicRng>() {
        world.insert_resource(DeterministicRng::new(42));
    }

    let buildings: Vec<_> = {
        let mut rng = world.resource_mut::<DeterministicRng>();
        (0..BUILDING_COUNT)
            .map(|_| {
                let height = rng.rng.gen_range(10.0..70.0);
                let x = rng.rng.gen_range(-CITY_HALF_EXTENT..CITY_HALF_EXTENT);
                let z = rng.rng.gen_range(-CITY_HALF_EXTENT..CITY_HALF_EXTENT);
                let color: u32 = rng.rng.gen_range(0..=0xffffff);
                (height, Vec3::new(x, height * 0.5, z), color)
            })
            .collect()
    };

    for (index, (height, position, color)) in buildings.into_iter().enumerate() {
        world.spawn((
            Name::new(format!("Building{}", index)),
            Transform::from_translation(position),
            Solid::cuboid(BUILDING_FOOTPRINT, height, BUILDING_FOOTPRINT),
            Appearance::new(color),
        ));
    }

    crate::log_info(&format!(
        "🏙️ Reference scenario: player {:?}, car {:?}, contact {:?}, {} buildings",
        player, vehicle, target, BUILDING_COUNT
    ));

    ReferenceScenario {
        player,
        vehicle,
        target,
    }
}

/// Руль: ближе этого (рад) к нужному курсу не подруливаем
const STEER_DEADZONE: f32 = 0.05;

/// Привести угол к (-π, π]
fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(std::f32::consts::TAU);
    if wrapped > std::f32::consts::PI {
        wrapped - std::f32::consts::TAU
    } else {
        wrapped
    }
}

/// Курс (heading), при котором нос машины смотрит из `from` в `to`
pub fn heading_towards(from: Vec3, to: Vec3) -> f32 {
    let delta = to - from;
    delta.x.atan2(delta.z)
}

/// Решение руля для машины: (left, right)
pub fn steer_towards(vehicle: &Vehicle, from: Vec3, to: Vec3) -> (bool, bool) {
    let diff = wrap_angle(heading_towards(from, to) - vehicle.heading);
    (diff > STEER_DEADZONE, diff < -STEER_DEADZONE)
}

/// System: скриптовый водитель для headless прогона
///
/// Пешком — идёт к ближайшей машине и жмёт interact, когда она в радиусе.
/// За рулём — газ в пол и руль на DeliveryTarget.
/// После финальной стадии отпускает всё.
pub fn drive_autopilot(
    mut players: Query<(&Transform, &mut LookOrientation, &Possession), With<Player>>,
    vehicles: Query<(Entity, &Transform, &Vehicle), Without<Player>>,
    targets: Query<&Transform, (With<DeliveryTarget>, Without<Player>, Without<Vehicle>)>,
    mut input: ResMut<InputState>,
    config: Res<PossessionConfig>,
    script: Res<MissionScript>,
    progress: Res<MissionProgress>,
) {
    input.forward = false;
    input.backward = false;
    input.left = false;
    input.right = false;

    if progress.is_complete(&script) {
        return;
    }

    let Ok((transform, mut look, possession)) = players.single_mut() else {
        return;
    };

    match possession.vehicle() {
        None => {
            let nearest = vehicles
                .iter()
                .map(|(_, t, _)| t.translation)
                .min_by(|a, b| {
                    a.distance_squared(transform.translation)
                        .total_cmp(&b.distance_squared(transform.translation))
                });
            let Some(car) = nearest else {
                return;
            };

            look.face_towards(transform.translation, car);

            // Запас 20%: к моменту toggle_possession игрок уже внутри радиуса
            if transform.translation.distance(car) < config.entry_radius * 0.8 {
                input.interact = true;
            } else {
                input.forward = true;
            }
        }
        Some(vehicle) => {
            let Ok((_, vehicle_transform, vehicle_state)) = vehicles.get(vehicle) else {
                crate::log_warning(&format!("Autopilot: possessed vehicle {:?} not found", vehicle));
                return;
            };
            let Some(target) = targets.iter().next() else {
                return;
            };

            let (left, right) =
                steer_towards(vehicle_state, vehicle_transform.translation, target.translation);
            input.forward = true;
            input.left = left;
            input.right = right;
        }
    }
}

/// Plugin: autopilot перед Possession фазой
pub struct AutopilotPlugin;

impl Plugin for AutopilotPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, drive_autopilot.before(SimulationSet::Possession));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_wrap_angle_range() {
        assert!((wrap_angle(3.0 * PI / 2.0) + FRAC_PI_2).abs() < 1e-5);
        assert!((wrap_angle(-3.0 * PI / 2.0) - FRAC_PI_2).abs() < 1e-5);
        assert!((wrap_angle(0.3) - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_heading_towards_matches_vehicle_nose() {
        let from = Vec3::new(30.0, 0.0, 30.0);
        let to = Vec3::new(-50.0, 0.0, -50.0);

        let vehicle = Vehicle::new(heading_towards(from, to));
        let expected = (to - from).normalize();

        assert!(vehicle.nose().abs_diff_eq(expected, 1e-4));
    }

    #[test]
    fn test_steer_towards_picks_side() {
        let vehicle = Vehicle::new(0.0); // нос в +Z

        // Цель в +X: heading должен расти (left)
        assert_eq!(steer_towards(&vehicle, Vec3::ZERO, Vec3::new(10.0, 0.0, 1.0)), (true, false));
        // Цель в -X: right
        assert_eq!(steer_towards(&vehicle, Vec3::ZERO, Vec3::new(-10.0, 0.0, 1.0)), (false, true));
        // Прямо по курсу: руль не трогаем
        assert_eq!(steer_towards(&vehicle, Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0)), (false, false));
    }

    #[test]
    fn test_reference_scenario_is_seeded() {
        let mut first = World::new();
        first.insert_resource(DeterministicRng::new(7));
        spawn_reference_scenario(&mut first);

        let mut second = World::new();
        second.insert_resource(DeterministicRng::new(7));
        spawn_reference_scenario(&mut second);

        let solids = |world: &mut World| {
            let mut query = world.query::<(&Transform, &Solid)>();
            query
                .iter(world)
                .map(|(t, s)| (t.translation, s.half_extents))
                .collect::<Vec<_>>()
        };

        let a = solids(&mut first);
        let b = solids(&mut second);
        assert_eq!(a.len(), BUILDING_COUNT + 1); // + машина
        assert_eq!(a, b);
    }
}

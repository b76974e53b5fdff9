//! STREETRUN Simulation Core
//!
//! ECS-симуляция open-world передвижения на Bevy 0.16 (headless)
//!
//! Домены:
//! - player: пешее передвижение (velocity, gravity, jump)
//! - vehicle: машина (speed + heading, drag)
//! - possession: пешком ↔ за рулём
//! - camera: first-person / chase rig
//! - world: registry твёрдых объектов + hit-scan
//! - mission: линейная state machine стадий + Presenter
//!
//! Рендер, звук и UI — снаружи (Presenter, Appearance, CameraRig).

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

// Публичные модули
pub mod camera;
pub mod config;
pub mod input;
pub mod logger;
pub mod mission;
pub mod player;
pub mod possession;
pub mod scenario;
pub mod vehicle;
pub mod world;

// Re-export для удобства
pub use camera::{resolve_camera, CameraMode, CameraPose, CameraRig};
pub use config::{
    CameraConfig, HitScanConfig, LocomotionConfig, PossessionConfig, SimulationConfig, VehicleConfig,
};
pub use input::{InputState, KeyboardInputPlugin};
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, log_with_level, set_log_level, set_logger,
    set_logger_if_needed, ConsoleLogger, LogLevel, LogPrinter,
};
pub use mission::{
    LogPresenter, MissionPresenter, MissionProgress, MissionScript, MissionStage, MissionStageAdvanced,
    Presenter, StageEffect, StageTrigger,
};
pub use player::{LookOrientation, Player, PlayerMotion};
pub use possession::{Possession, PossessionEntered, PossessionExited};
pub use vehicle::Vehicle;
pub use world::{Appearance, DeliveryTarget, Hit, HitScanResolved, Solid, COMPLETE_COLOR, HIT_COLOR};

/// Фазы одного fixed тика (строго по порядку)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Вход / выход из машины
    Possession,
    /// Пешая локомоция или динамика машины
    Integrate,
    Camera,
    /// Hit-scan по fire
    Interaction,
    Mission,
    /// Сброс edge-triggered input
    Cleanup,
}

/// Главный plugin симуляции
///
/// Конфиги вставляются только если их ещё нет: хост может заранее
/// положить свои (`SimulationConfig::insert_into`) или свой Presenter.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            .init_resource::<LocomotionConfig>()
            .init_resource::<VehicleConfig>()
            .init_resource::<PossessionConfig>()
            .init_resource::<CameraConfig>()
            .init_resource::<HitScanConfig>()
            .init_resource::<InputState>()
            .init_resource::<MissionScript>()
            .init_resource::<MissionProgress>()
            .init_resource::<Presenter>();

        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        app.register_type::<Player>()
            .register_type::<PlayerMotion>()
            .register_type::<LookOrientation>()
            .register_type::<Vehicle>()
            .register_type::<Possession>()
            .register_type::<CameraRig>()
            .register_type::<Solid>()
            .register_type::<Appearance>()
            .register_type::<DeliveryTarget>();

        // Регистрация событий
        app.add_event::<PossessionEntered>()
            .add_event::<PossessionExited>()
            .add_event::<HitScanResolved>()
            .add_event::<MissionStageAdvanced>();

        app.configure_sets(
            FixedUpdate,
            (
                SimulationSet::Possession,
                SimulationSet::Integrate,
                SimulationSet::Camera,
                SimulationSet::Interaction,
                SimulationSet::Mission,
                SimulationSet::Cleanup,
            )
                .chain(),
        );

        app.add_systems(Startup, (camera::spawn_camera_rig, mission::start_mission));

        app.add_systems(
            FixedUpdate,
            (
                possession::toggle_possession.in_set(SimulationSet::Possession),
                (player::update_player_locomotion, vehicle::drive_possessed_vehicles)
                    .chain()
                    .in_set(SimulationSet::Integrate),
                camera::update_camera_rig.in_set(SimulationSet::Camera),
                world::resolve_hit_scan.in_set(SimulationSet::Interaction),
                mission::advance_mission.in_set(SimulationSet::Mission),
                input::clear_input_edges.in_set(SimulationSet::Cleanup),
            ),
        );
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Длительность одного fixed тика
pub fn tick_duration() -> Duration {
    Duration::from_secs_f64(1.0 / 60.0)
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время ручное: каждый `app.update()` = ровно один FixedUpdate тик.
/// Исключение — самый первый update: Time<Real> только стартует (delta = 0),
/// выполняется Startup, fixed тиков нет.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(60.0))
        .insert_resource(TimeUpdateStrategy::ManualDuration(tick_duration()));

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}

//! Тесты детерминизма
//!
//! Один и тот же seed → те же здания, тот же путь autopilot'а, те же байты snapshot'а

use bevy::prelude::*;
use streetrun_simulation::scenario::{spawn_reference_scenario, AutopilotPlugin};
use streetrun_simulation::{
    create_headless_app, world_snapshot, Appearance, SimulationPlugin, Solid, Vehicle,
};

/// Прогоняет эталонный сценарий и возвращает snapshot мира
fn run_simulation(seed: u64, tick_count: usize) -> Vec<u8> {
    let mut app = create_headless_app(seed);
    app.add_plugins((SimulationPlugin, AutopilotPlugin));
    spawn_reference_scenario(app.world_mut());

    for _ in 0..tick_count {
        app.update();
    }

    let world = app.world_mut();
    let mut snapshot = world_snapshot::<Transform>(world);
    snapshot.extend(world_snapshot::<Vehicle>(world));
    snapshot.extend(world_snapshot::<Appearance>(world));
    snapshot
}

#[test]
fn test_determinism_same_seed() {
    const SEED: u64 = 12345;
    const TICK_COUNT: usize = 400;

    let snapshot1 = run_simulation(SEED, TICK_COUNT);
    let snapshot2 = run_simulation(SEED, TICK_COUNT);

    assert_eq!(
        snapshot1, snapshot2,
        "Симуляция с одинаковым seed ({}) дала разные результаты!",
        SEED
    );
}

#[test]
fn test_determinism_multiple_runs() {
    const SEED: u64 = 42;
    const TICK_COUNT: usize = 200;

    let snapshots: Vec<_> = (0..3).map(|_| run_simulation(SEED, TICK_COUNT)).collect();

    for (i, snapshot) in snapshots.iter().enumerate().skip(1) {
        assert_eq!(
            snapshots[0], *snapshot,
            "Прогон {} дал результат отличный от прогона 0",
            i
        );
    }
}

#[test]
fn test_different_seed_changes_city() {
    let city = |seed: u64| {
        let mut app = create_headless_app(seed);
        spawn_reference_scenario(app.world_mut());
        world_snapshot::<Solid>(app.world_mut())
    };

    assert_ne!(city(1), city(2));
}

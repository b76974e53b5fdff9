//! Headless симуляция STREETRUN
//!
//! Проигрывает эталонную миссию autopilot'ом без рендера.
//! Usage: streetrun_simulation [config.ron]

use streetrun_simulation::scenario::{spawn_reference_scenario, AutopilotPlugin};
use streetrun_simulation::{
    create_headless_app, log_error, log_info, log_warning, MissionProgress, MissionScript, SimulationConfig,
    SimulationPlugin, Vehicle,
};

const MAX_TICKS: usize = 3600;

fn load_config(path: &str) -> SimulationConfig {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            log_warning(&format!("Config {}: {}, using defaults", path, error));
            return SimulationConfig::default();
        }
    };

    match SimulationConfig::from_ron_str(&source) {
        Ok(config) => config,
        Err(error) => {
            log_warning(&format!("Config {}: {}, using defaults", path, error));
            SimulationConfig::default()
        }
    }
}

fn main() {
    let seed = 42;
    let mut app = create_headless_app(seed);
    log_info(&format!("Starting STREETRUN headless simulation (seed: {})", seed));

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(&path),
        None => SimulationConfig::default(),
    };
    config.insert_into(&mut app);

    app.add_plugins((SimulationPlugin, AutopilotPlugin));
    let scenario = spawn_reference_scenario(app.world_mut());

    for tick in 0..MAX_TICKS {
        app.update();

        let world = app.world();
        let complete = world
            .resource::<MissionProgress>()
            .is_complete(world.resource::<MissionScript>());

        if tick % 100 == 0 || complete {
            let stage = world.resource::<MissionProgress>().current;
            let speed = world.get::<Vehicle>(scenario.vehicle).map_or(0.0, |v| v.speed);
            let position = world
                .get::<bevy::prelude::Transform>(scenario.vehicle)
                .map(|t| t.translation)
                .unwrap_or_default();
            log_info(&format!(
                "Tick {}: stage {}, car at ({:.1}, {:.1}), speed {:.1}",
                tick, stage, position.x, position.z, speed
            ));
        }

        if complete {
            log_info(&format!("Simulation complete after {} ticks!", tick));
            return;
        }
    }

    log_error(&format!("Mission not complete after {} ticks", MAX_TICKS));
}

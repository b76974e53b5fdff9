//! Mission systems
//!
//! start_mission (Startup) показывает стадию 0.
//! advance_mission (FixedUpdate, после hit-scan) собирает MissionObservation,
//! делает максимум один переход за тик и применяет эффекты новой стадии.

use bevy::prelude::*;

use super::events::MissionStageAdvanced;
use super::presenter::{MissionPresenter, Presenter};
use super::script::{MissionObservation, MissionProgress, MissionScript, MissionStage, StageEffect};
use crate::player::Player;
use crate::possession::{Possession, PossessionEntered};
use crate::vehicle::Vehicle;
use crate::world::{Appearance, DeliveryTarget, COMPLETE_COLOR};

fn present_stage(stage: &MissionStage, presenter: &dyn MissionPresenter) {
    presenter.set_mission_text(&stage.title, &stage.description);
    if let Some(dialogue) = &stage.dialogue {
        presenter.show_dialogue(&dialogue.speaker, &dialogue.text);
    }
}

/// Startup system: показать стадию 0 (один раз)
pub fn start_mission(
    script: Res<MissionScript>,
    mut progress: ResMut<MissionProgress>,
    presenter: Res<Presenter>,
) {
    if progress.started {
        return;
    }

    let Some(stage) = script.stage(progress.current) else {
        crate::log_warning("Mission script has no stages, nothing to start");
        return;
    };

    crate::log_info(&format!("🎬 Mission started: stage {} '{}'", progress.current, stage.title));
    present_stage(stage, presenter.get());
    progress.started = true;
}

/// Собрать наблюдение из ECS
///
/// Машина = та, в которой сидит игрок (и она ещё существует).
/// Target = ближайший к машине DeliveryTarget.
fn observe(
    possession_entered: bool,
    players: &Query<&Possession, With<Player>>,
    vehicles: &Query<&Transform, With<Vehicle>>,
    targets: &Query<&Transform, (With<DeliveryTarget>, Without<Vehicle>)>,
) -> MissionObservation {
    let vehicle = players
        .iter()
        .find_map(|possession| possession.vehicle())
        .and_then(|entity| vehicles.get(entity).ok().map(|t| (entity, t.translation)));

    let target = vehicle.and_then(|(_, vehicle_position)| {
        targets
            .iter()
            .map(|t| t.translation)
            .min_by(|a, b| {
                a.distance_squared(vehicle_position)
                    .total_cmp(&b.distance_squared(vehicle_position))
            })
    });

    MissionObservation {
        possession_entered,
        vehicle,
        target,
    }
}

/// System: проверить trigger текущей стадии и продвинуть миссию
pub fn advance_mission(
    mut entered_events: EventReader<PossessionEntered>,
    players: Query<&Possession, With<Player>>,
    vehicles: Query<&Transform, With<Vehicle>>,
    targets: Query<&Transform, (With<DeliveryTarget>, Without<Vehicle>)>,
    mut appearances: Query<&mut Appearance>,
    script: Res<MissionScript>,
    mut progress: ResMut<MissionProgress>,
    presenter: Res<Presenter>,
    mut advanced_events: EventWriter<MissionStageAdvanced>,
) {
    // Читаем всегда, чтобы события не копились после завершения
    let possession_entered = entered_events.read().count() > 0;

    if !progress.started || progress.is_complete(&script) {
        return;
    }

    let observation = observe(possession_entered, &players, &vehicles, &targets);
    let Some(advance) = progress.try_advance(&script, &observation) else {
        return;
    };

    let Some(stage) = script.stage(advance.to) else {
        return;
    };

    crate::log_info(&format!(
        "📋 Mission stage {} → {} '{}'",
        advance.from, advance.to, stage.title
    ));
    present_stage(stage, presenter.get());

    match stage.on_enter {
        StageEffect::None => {}
        StageEffect::MarkVehicleComplete => match observation.vehicle {
            Some((vehicle, _)) => {
                if let Ok(mut appearance) = appearances.get_mut(vehicle) {
                    appearance.color = COMPLETE_COLOR;
                }
                presenter.get().mark_complete(vehicle);
            }
            None => {
                crate::log_warning("Mission complete without a possessed vehicle, nothing to mark");
            }
        },
    }

    advanced_events.write(MissionStageAdvanced {
        from: advance.from,
        to: advance.to,
    });
}

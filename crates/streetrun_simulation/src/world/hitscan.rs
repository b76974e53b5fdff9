//! Hit-scan выстрел (мгновенный луч из камеры)
//!
//! Linear scan по всем `Solid`: объектов десятки, spatial index не нужен.
//! Каждый Solid — oriented box: луч переводим в local space и режем об AABB.
//! Box, внутри которого стоит стрелок, пропускается.

use bevy::math::bounding::{Aabb3d, RayCast3d};
use bevy::prelude::*;

use super::components::{Appearance, Solid, HIT_COLOR};
use crate::config::HitScanConfig;
use crate::input::InputState;
use crate::player::{LookOrientation, Player};
use crate::possession::Possession;

/// Попадание луча
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub entity: Entity,
    /// Расстояние от origin вдоль луча
    pub distance: f32,
    pub point: Vec3,
}

/// Event: выстрел обработан (hit = None → промах)
#[derive(Event, Debug, Clone, Copy)]
pub struct HitScanResolved {
    pub shooter: Entity,
    pub hit: Option<Hit>,
}

/// Ближайшее пересечение луча с registry
///
/// Нулевое направление = нет луча = нет попадания.
/// При равных расстояниях остаётся первый найденный.
pub fn nearest_hit<'a>(
    origin: Vec3,
    direction: Vec3,
    max_range: f32,
    solids: impl IntoIterator<Item = (Entity, &'a Transform, &'a Solid)>,
) -> Option<Hit> {
    let Ok(direction) = Dir3::new(direction) else {
        return None;
    };

    let mut nearest: Option<Hit> = None;

    for (entity, transform, solid) in solids {
        let inverse = transform.rotation.inverse();
        let local_origin = inverse * (origin - transform.translation);
        let Ok(local_direction) = Dir3::new(inverse * *direction) else {
            continue;
        };

        // Выстрел изнутри объекта его не задевает (попадаем только во внешние грани)
        if local_origin.abs().cmple(solid.half_extents).all() {
            continue;
        }

        let ray = RayCast3d::new(local_origin, local_direction, max_range);
        let aabb = Aabb3d::new(Vec3::ZERO, solid.half_extents);

        let Some(distance) = ray.aabb_intersection_at(&aabb) else {
            continue;
        };

        if nearest.is_none_or(|best| distance < best.distance) {
            nearest = Some(Hit {
                entity,
                distance,
                point: origin + *direction * distance,
            });
        }
    }

    nearest
}

/// System: выстрел по fire (только пешком)
///
/// Пешком камера = глаза игрока, луч вдоль LookOrientation.
/// Попадание перекрашивает Appearance цели (если он есть).
pub fn resolve_hit_scan(
    players: Query<(Entity, &Transform, &LookOrientation, &Possession), With<Player>>,
    solids: Query<(Entity, &Transform, &Solid)>,
    mut appearances: Query<&mut Appearance>,
    input: Res<InputState>,
    config: Res<HitScanConfig>,
    mut resolved_events: EventWriter<HitScanResolved>,
) {
    if !input.fire {
        return;
    }

    for (shooter, transform, look, possession) in players.iter() {
        if possession.is_driving() {
            crate::log(&format!("Player {:?}: fire ignored while driving", shooter));
            continue;
        }

        let hit = nearest_hit(transform.translation, look.forward(), config.max_range, solids.iter());

        if let Some(hit) = hit {
            if let Ok(mut appearance) = appearances.get_mut(hit.entity) {
                appearance.color = HIT_COLOR;
            }
            crate::log(&format!(
                "🎯 Hit-scan: {:?} hit {:?} at {:.1} units",
                shooter, hit.entity, hit.distance
            ));
        }

        resolved_events.write(HitScanResolved { shooter, hit });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_at(position: Vec3) -> (Transform, Solid) {
        (Transform::from_translation(position), Solid::cuboid(2.0, 2.0, 2.0))
    }

    #[test]
    fn test_nearest_of_two_along_ray() {
        let near = Entity::from_raw(1);
        let far = Entity::from_raw(2);
        let (near_t, near_s) = solid_at(Vec3::new(0.0, 0.0, -6.0)); // front face at 5
        let (far_t, far_s) = solid_at(Vec3::new(0.0, 0.0, -13.0)); // front face at 12

        // Порядок registry не важен
        let registry = [(far, &far_t, &far_s), (near, &near_t, &near_s)];
        let hit = nearest_hit(Vec3::ZERO, Vec3::NEG_Z, 100.0, registry).unwrap();

        assert_eq!(hit.entity, near);
        assert!((hit.distance - 5.0).abs() < 1e-4, "distance = {}", hit.distance);
        assert!(hit.point.abs_diff_eq(Vec3::new(0.0, 0.0, -5.0), 1e-4));
    }

    #[test]
    fn test_miss_and_out_of_range() {
        let entity = Entity::from_raw(1);
        let (t, s) = solid_at(Vec3::new(10.0, 0.0, -20.0));

        assert!(nearest_hit(Vec3::ZERO, Vec3::NEG_Z, 100.0, [(entity, &t, &s)]).is_none());

        let (t, s) = solid_at(Vec3::new(0.0, 0.0, -50.0));
        assert!(nearest_hit(Vec3::ZERO, Vec3::NEG_Z, 20.0, [(entity, &t, &s)]).is_none());
    }

    #[test]
    fn test_shot_from_inside_solid_passes_through() {
        let enclosing = Entity::from_raw(1);
        let far = Entity::from_raw(2);
        let enclosing_t = Transform::IDENTITY;
        let enclosing_s = Solid::cuboid(4.0, 4.0, 4.0);
        let (far_t, far_s) = solid_at(Vec3::new(0.0, 0.0, -10.0)); // front face at 9

        let registry = [(far, &far_t, &far_s), (enclosing, &enclosing_t, &enclosing_s)];
        let hit = nearest_hit(Vec3::ZERO, Vec3::NEG_Z, 100.0, registry).unwrap();

        assert_eq!(hit.entity, far);
        assert!((hit.distance - 9.0).abs() < 1e-4, "distance = {}", hit.distance);

        // Только enclosing box → промах
        assert!(nearest_hit(Vec3::ZERO, Vec3::NEG_Z, 100.0, [(enclosing, &enclosing_t, &enclosing_s)]).is_none());
    }

    #[test]
    fn test_zero_direction_is_no_hit() {
        let entity = Entity::from_raw(1);
        let (t, s) = solid_at(Vec3::ZERO);

        assert!(nearest_hit(Vec3::ZERO, Vec3::ZERO, 100.0, [(entity, &t, &s)]).is_none());
    }

    #[test]
    fn test_rotated_solid_uses_local_box() {
        let entity = Entity::from_raw(1);
        // Длинный box (40 по local Z), повёрнут на 90° → вытянут вдоль world X
        let transform = Transform::from_xyz(0.0, 0.0, -10.0)
            .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));
        let solid = Solid::cuboid(2.0, 2.0, 40.0);

        // Луч вдоль -Z со смещением x = 15: без поворота промах, с поворотом попадание
        let hit = nearest_hit(Vec3::new(15.0, 0.0, 0.0), Vec3::NEG_Z, 100.0, [(entity, &transform, &solid)]);

        let hit = hit.expect("rotated box should be hit");
        assert!((hit.distance - 9.0).abs() < 1e-3, "distance = {}", hit.distance);
    }
}

//! World компоненты: registry твёрдых объектов, внешний вид, цель доставки

use bevy::prelude::*;

/// Цвет попадания hit-scan
pub const HIT_COLOR: u32 = 0xff0000;
/// Цвет машины после выполнения миссии (золото)
pub const COMPLETE_COLOR: u32 = 0xffd700;

/// Твёрдый объект мира (здание, машина, NPC)
///
/// Всё с этим компонентом участвует в hit-scan (flat registry, без spatial index).
/// Форма — box в local space entity: `Transform.rotation` учитывается,
/// `Transform.scale` нет (размер задаём через half_extents).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
#[require(Transform)]
pub struct Solid {
    pub half_extents: Vec3,
}

impl Default for Solid {
    fn default() -> Self {
        Self::cuboid(1.0, 1.0, 1.0)
    }
}

impl Solid {
    /// Box по полным размерам (как BoxGeometry(w, h, d))
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        Self {
            half_extents: Vec3::new(width, height, depth) * 0.5,
        }
    }
}

/// Видимый маркер объекта (цвет 0xRRGGBB)
///
/// Симуляция меняет только цвет; материалы и меши — забота рендера.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Appearance {
    pub color: u32,
}

impl Default for Appearance {
    fn default() -> Self {
        Self { color: 0xffffff }
    }
}

impl Appearance {
    pub fn new(color: u32) -> Self {
        Self { color }
    }
}

/// Маркер: точка доставки для миссии (NPC)
///
/// Статичная SpatialTarget, никакого AI.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(Transform)]
pub struct DeliveryTarget;

//! Параметры симуляции (единый набор констант)
//!
//! Каждый блок — отдельный Bevy `Resource`, системы читают только свой.
//! `SimulationConfig` собирает их вместе для загрузки из RON файла.
//!
//! Векторы хранятся как `[f32; 3]`: bevy_math собран без feature `serialize`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Пешее передвижение игрока (first-person)
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Экспоненциальное трение по горизонтали (1/сек)
    pub damping: f32,
    /// Ускорение от WASD (units/s²)
    pub acceleration: f32,
    /// Гравитация вниз (units/s²)
    pub gravity: f32,
    /// Вертикальная скорость прыжка (units/s)
    pub jump_impulse: f32,
    /// Высота глаз над полом (y = 0)
    pub stand_height: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            damping: 10.0,
            acceleration: 400.0,
            gravity: 98.0,
            jump_impulse: 30.0,
            stand_height: 2.0,
        }
    }
}

/// Упрощённая динамика машины (скаляр speed + heading)
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleConfig {
    /// Газ (units/s²)
    pub acceleration: f32,
    /// Тормоз/задний ход (units/s²), меньше acceleration
    pub brake: f32,
    /// Множитель скорости за тик (rolling resistance), < 1
    pub drag: f32,
    /// Скорость поворота (рад/сек)
    pub turn_rate: f32,
    /// Ниже этой |speed| руль не работает
    pub min_turn_speed: f32,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            acceleration: 60.0,
            brake: 40.0,
            drag: 0.97,
            turn_rate: 2.0,
            min_turn_speed: 1.0,
        }
    }
}

impl VehicleConfig {
    /// Установившаяся скорость при зажатом газе и фиксированном dt
    ///
    /// Неподвижная точка `s = (s + a*dt) * drag`.
    pub fn terminal_speed(&self, dt: f32) -> f32 {
        self.acceleration * dt * self.drag / (1.0 - self.drag)
    }
}

/// Посадка/высадка
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PossessionConfig {
    /// Радиус посадки (строго меньше)
    pub entry_radius: f32,
    /// Куда ставим игрока относительно машины при высадке
    pub exit_offset: [f32; 3],
}

impl Default for PossessionConfig {
    fn default() -> Self {
        Self {
            entry_radius: 15.0,
            exit_offset: [3.0, 3.0, 0.0],
        }
    }
}

impl PossessionConfig {
    pub fn exit_offset(&self) -> Vec3 {
        Vec3::from_array(self.exit_offset)
    }
}

/// Chase camera за машиной
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Offset в local space машины (сзади и сверху)
    pub chase_offset: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            chase_offset: [0.0, 5.0, -15.0],
        }
    }
}

impl CameraConfig {
    pub fn chase_offset(&self) -> Vec3 {
        Vec3::from_array(self.chase_offset)
    }
}

/// Hit-scan выстрел
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitScanConfig {
    /// Дальность луча (far plane камеры)
    pub max_range: f32,
}

impl Default for HitScanConfig {
    fn default() -> Self {
        Self { max_range: 2000.0 }
    }
}

/// Все параметры разом (для RON файла)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub locomotion: LocomotionConfig,
    pub vehicle: VehicleConfig,
    pub possession: PossessionConfig,
    pub camera: CameraConfig,
    pub hit_scan: HitScanConfig,
}

impl SimulationConfig {
    pub fn from_ron_str(source: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(source)
    }

    pub fn to_ron_string(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }

    /// Вставить каждый блок как отдельный Resource (перезаписывает существующие)
    pub fn insert_into(self, app: &mut App) {
        app.insert_resource(self.locomotion)
            .insert_resource(self.vehicle)
            .insert_resource(self.possession)
            .insert_resource(self.camera)
            .insert_resource(self.hit_scan);
    }
}

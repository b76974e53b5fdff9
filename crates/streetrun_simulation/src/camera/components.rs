//! Camera rig component
//!
//! Один entity на сцену. Рендер-слой копирует его Transform в настоящую камеру.

use bevy::prelude::*;

/// Camera mode (first-person пешком / chase за машиной)
///
/// Выводится из `Possession` каждый тик, отдельно не переключается.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub enum CameraMode {
    /// Камера в глазах игрока, ориентация от LookOrientation
    #[default]
    FirstPerson,

    /// Камера сзади-сверху машины, смотрит на машину
    Chase,
}

/// Результат resolve: куда ставить камеру
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub rotation: Quat,
    /// Только в Chase (first-person без look target)
    pub look_target: Option<Vec3>,
}

impl CameraPose {
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }
}

/// Camera rig (entity с Transform = поза камеры)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(Transform)]
pub struct CameraRig {
    pub mode: CameraMode,
    pub look_target: Option<Vec3>,
}

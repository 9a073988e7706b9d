//! Sports walking workout.

use super::{Training, TrainingData, positive};
use crate::constants::{CM_IN_M, KMH_TO_MS, MIN_IN_H};
use crate::errors::WorkoutError;
use crate::models::WorkoutKind;

/// Sports walking, measured in steps. Calories depend on the walker's height.
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    data: TrainingData,
    height_cm: f64,
}

impl SportsWalking {
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self, WorkoutError> {
        Ok(Self {
            data: TrainingData::new(action, duration_h, weight_kg)?,
            height_cm: positive("height", height_cm)?,
        })
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn spent_calories(&self) -> f64 {
        let speed_ms = self.mean_speed_kmh() * KMH_TO_MS;
        let height_m = self.height_cm / CM_IN_M;
        let weight = self.data.weight_kg();

        (Self::CALORIES_WEIGHT_MULTIPLIER * weight
            + speed_ms.powi(2) / height_m * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * (self.data.duration_h() * MIN_IN_H)
    }
}

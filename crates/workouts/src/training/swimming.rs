//! Swimming workout.

use super::{Training, TrainingData, positive};
use crate::constants::M_IN_KM;
use crate::errors::WorkoutError;
use crate::models::WorkoutKind;

/// Pool swimming. Actions are strokes; speed comes from pool laps instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    data: TrainingData,
    pool_length_m: f64,
    pool_lap_count: u32,
}

impl Swimming {
    /// Distance covered by one stroke, in meters.
    pub const LEN_STEP_M: f64 = 1.38;
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_lap_count: u32,
    ) -> Result<Self, WorkoutError> {
        Ok(Self {
            data: TrainingData::new(action, duration_h, weight_kg)?,
            pool_length_m: positive("pool length", pool_length_m)?,
            pool_lap_count,
        })
    }

    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    pub fn pool_lap_count(&self) -> u32 {
        self.pool_lap_count
    }
}

impl Training for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn step_length_m(&self) -> f64 {
        Self::LEN_STEP_M
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_lap_count) / M_IN_KM / self.data.duration_h()
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.data.weight_kg()
            * self.data.duration_h()
    }
}

//! Running workout.

use super::{Training, TrainingData};
use crate::constants::{M_IN_KM, MIN_IN_H};
use crate::errors::WorkoutError;
use crate::models::WorkoutKind;

/// Running, measured in steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    data: TrainingData,
}

impl Running {
    pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        Ok(Self {
            data: TrainingData::new(action, duration_h, weight_kg)?,
        })
    }
}

impl Training for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn spent_calories(&self) -> f64 {
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh()
            + Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.data.weight_kg()
            / M_IN_KM
            * (self.data.duration_h() * MIN_IN_H)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_run() {
        let run = Running::new(15000, 1.0, 75.0).unwrap();
        assert!((run.distance_km() - 9.75).abs() < 1e-9);
        assert!((run.mean_speed_kmh() - 9.75).abs() < 1e-9);
        // (18 * 9.75 + 1.79) * 75 / 1000 * 60
        assert!((run.spent_calories() - 797.805).abs() < 1e-6);
    }

    #[test]
    fn test_speed_scales_with_duration() {
        let run = Running::new(15000, 2.0, 75.0).unwrap();
        assert!((run.distance_km() - 9.75).abs() < 1e-9);
        assert!((run.mean_speed_kmh() - 4.875).abs() < 1e-9);
    }

    #[test]
    fn test_no_steps_still_burns_base_calories() {
        let run = Running::new(0, 1.0, 100.0).unwrap();
        assert_eq!(run.distance_km(), 0.0);
        assert!((run.spent_calories() - 1.79 * 100.0 / 1000.0 * 60.0).abs() < 1e-9);
    }
}

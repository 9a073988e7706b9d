//! Workout types and their distance, speed and calorie formulas.
//!
//! Every workout shares [`TrainingData`] (actions, duration, body weight) and
//! implements [`Training`]. Distance and speed have default formulas that a
//! workout may override; calories have no default and must be supplied by each
//! workout type.

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use crate::constants::M_IN_KM;
use crate::errors::WorkoutError;
use crate::models::WorkoutKind;
use crate::report::TrainingReport;

/// Distance covered by one step, in meters.
pub const LEN_STEP_M: f64 = 0.65;

/// Readings common to every workout.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingData {
    action: u32,
    duration_h: f64,
    weight_kg: f64,
}

impl TrainingData {
    /// Validates and stores the common readings.
    ///
    /// Duration and weight must be finite and strictly positive. Rejecting a
    /// zero duration here keeps every speed computation a real division.
    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        Ok(Self {
            action,
            duration_h: positive("duration", duration_h)?,
            weight_kg: positive("weight", weight_kg)?,
        })
    }

    /// Number of steps or strokes.
    pub fn action(&self) -> u32 {
        self.action
    }

    pub fn duration_h(&self) -> f64 {
        self.duration_h
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

pub(crate) fn positive(name: &str, value: f64) -> Result<f64, WorkoutError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::invalid(format!(
            "{name} must be a positive number, got {value}"
        )))
    }
}

/// Behaviour shared by all workouts.
pub trait Training: Send + Sync + std::fmt::Debug {
    fn kind(&self) -> WorkoutKind;

    fn data(&self) -> &TrainingData;

    /// Distance covered by one action, in meters.
    fn step_length_m(&self) -> f64 {
        LEN_STEP_M
    }

    /// Distance in kilometers.
    fn distance_km(&self) -> f64 {
        f64::from(self.data().action) * self.step_length_m() / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.data().duration_h
    }

    /// Energy spent, in kilocalories.
    fn spent_calories(&self) -> f64;

    fn show_training_info(&self) -> TrainingReport {
        TrainingReport {
            workout_type: self.kind().display_name(),
            duration_h: self.data().duration_h,
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_duration() {
        for duration in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = TrainingData::new(1000, duration, 70.0).unwrap_err();
            assert!(matches!(err, WorkoutError::InvalidArgument(msg) if msg.contains("duration")));
        }
    }

    #[test]
    fn test_rejects_non_positive_weight() {
        let err = TrainingData::new(1000, 1.0, 0.0).unwrap_err();
        assert!(matches!(err, WorkoutError::InvalidArgument(msg) if msg.contains("weight")));
    }

    #[test]
    fn test_zero_actions_allowed() {
        let data = TrainingData::new(0, 0.5, 70.0).unwrap();
        assert_eq!(data.action(), 0);
        assert_eq!(data.duration_h(), 0.5);
        assert_eq!(data.weight_kg(), 70.0);
    }

    #[test]
    fn test_trait_objects_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn Training>();
    }
}

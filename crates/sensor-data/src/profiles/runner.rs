//! Runner athlete profile.

use workouts::WorkoutKind;

use super::AthleteProfile;

/// Athlete profile for running.
///
/// Based on typical recreational to competitive runners:
/// - Cadence: ~170 steps/min
/// - Weight: ~72 kg
#[derive(Debug, Clone)]
pub struct RunnerProfile {
    /// Steps per minute.
    cadence: f64,
    weight_kg: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
}

impl Default for RunnerProfile {
    fn default() -> Self {
        Self {
            cadence: 170.0,
            weight_kg: 72.0,
            variance: 0.08,
        }
    }
}

impl AthleteProfile for RunnerProfile {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn cadence_per_min(&self) -> f64 {
        self.cadence
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn variance(&self) -> f64 {
        self.variance
    }
}

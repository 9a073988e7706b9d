//! Training reports and their text rendering.

use std::fmt;

use serde::Serialize;

/// Summary of a finished workout.
///
/// Values are captured once when the report is produced; the report does not
/// hold on to the workout it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingReport {
    pub workout_type: &'static str,
    /// Duration in hours.
    pub duration_h: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    /// Energy spent, in kilocalories.
    pub calories: f64,
}

impl TrainingReport {
    /// Renders the fixed one-line summary.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

// Rust float formatting ignores locale, so the separator is always '.'
impl fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Mean speed: {:.3} km/h; Calories burned: {:.3}.",
            self.workout_type, self.duration_h, self.distance_km, self.mean_speed_kmh, self.calories
        )
    }
}

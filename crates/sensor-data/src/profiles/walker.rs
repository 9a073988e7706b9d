//! Walker athlete profile.

use workouts::WorkoutKind;

use super::AthleteProfile;

/// Athlete profile for sports walking.
///
/// - Cadence: ~120 steps/min (about 5 km/h with a 0.65 m step)
/// - Height is reported with every package
#[derive(Debug, Clone)]
pub struct WalkerProfile {
    cadence: f64,
    weight_kg: f64,
    height_cm: f64,
    variance: f64,
}

impl Default for WalkerProfile {
    fn default() -> Self {
        Self {
            cadence: 120.0,
            weight_kg: 75.0,
            height_cm: 175.0,
            variance: 0.12,
        }
    }
}

impl WalkerProfile {
    pub fn with_height(height_cm: f64) -> Self {
        Self {
            height_cm,
            ..Default::default()
        }
    }
}

impl AthleteProfile for WalkerProfile {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
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

    fn extra_readings(&self, _duration_h: f64, _variance_factor: f64) -> Vec<f64> {
        vec![self.height_cm]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_height() {
        let profile = WalkerProfile::with_height(182.0);
        assert_eq!(profile.extra_readings(1.0, 1.0), vec![182.0]);
    }
}

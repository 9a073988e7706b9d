//! Swimmer athlete profile.

use workouts::WorkoutKind;
use workouts::constants::M_IN_KM;

use super::AthleteProfile;

/// Athlete profile for pool swimming.
///
/// Based on a recreational pool swimmer:
/// - Stroke rate: ~12 strokes/min
/// - Speed: ~1.5 km/h including wall turns
/// - 25 m pool
#[derive(Debug, Clone)]
pub struct SwimmerProfile {
    stroke_rate: f64,
    weight_kg: f64,
    speed_kmh: f64,
    pool_length_m: f64,
    variance: f64,
}

impl Default for SwimmerProfile {
    fn default() -> Self {
        Self {
            stroke_rate: 12.0,
            weight_kg: 70.0,
            speed_kmh: 1.5,
            pool_length_m: 25.0,
            variance: 0.1,
        }
    }
}

impl SwimmerProfile {
    /// Number of completed laps, never less than one.
    pub fn laps_for(&self, duration_h: f64, variance_factor: f64) -> f64 {
        let distance_m = self.speed_kmh * variance_factor * duration_h * M_IN_KM;
        (distance_m / self.pool_length_m).floor().max(1.0)
    }
}

impl AthleteProfile for SwimmerProfile {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn cadence_per_min(&self) -> f64 {
        self.stroke_rate
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn extra_readings(&self, duration_h: f64, variance_factor: f64) -> Vec<f64> {
        vec![self.pool_length_m, self.laps_for(duration_h, variance_factor)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_laps() {
        let profile = SwimmerProfile::default();
        // 1.5 km in a 25 m pool
        assert_eq!(profile.laps_for(1.0, 1.0), 60.0);
        assert_eq!(profile.laps_for(0.001, 1.0), 1.0);
    }

    #[test]
    fn test_olympic_pool_halves_laps() {
        let short = SwimmerProfile::default();
        let long = SwimmerProfile {
            pool_length_m: 50.0,
            ..Default::default()
        };
        assert_eq!(long.laps_for(1.0, 1.0) * 2.0, short.laps_for(1.0, 1.0));
        assert_eq!(long.extra_readings(1.0, 1.0), vec![50.0, 30.0]);
    }
}

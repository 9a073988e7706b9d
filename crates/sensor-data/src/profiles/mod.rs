//! Athlete profiles.
//!
//! Profiles define a typical cadence, body measurements and day-to-day variance
//! for each workout type. Generators use them to produce plausible readings.

mod runner;
mod swimmer;
mod walker;

pub use runner::RunnerProfile;
pub use swimmer::SwimmerProfile;
pub use walker::WalkerProfile;

use workouts::WorkoutKind;
use workouts::constants::MIN_IN_H;

/// Trait for athlete profiles.
///
/// Implementations should provide:
/// - Actions (steps or strokes) per minute on an average day
/// - Body weight
/// - Day-to-day variance
/// - Any readings beyond action, duration and weight that their workout type needs
pub trait AthleteProfile: Send + Sync {
    fn kind(&self) -> WorkoutKind;

    /// Steps or strokes per minute.
    fn cadence_per_min(&self) -> f64;

    /// Body weight in kilograms.
    fn weight_kg(&self) -> f64;

    /// Day-to-day performance variance as a coefficient of variation (0.0 - 1.0).
    fn variance(&self) -> f64;

    /// Readings appended after action, duration and weight.
    fn extra_readings(&self, _duration_h: f64, _variance_factor: f64) -> Vec<f64> {
        Vec::new()
    }
}

/// Number of actions for a workout of the given length.
pub fn actions_for(profile: &dyn AthleteProfile, duration_h: f64, variance_factor: f64) -> f64 {
    (profile.cadence_per_min() * duration_h * MIN_IN_H * variance_factor).round()
}

/// Samples a variance factor from normal distribution.
/// Returns a multiplier around 1.0.
pub fn sample_variance(profile: &dyn AthleteProfile, rng: &mut impl rand::Rng) -> f64 {
    use rand_distr::{Distribution, Normal};

    let std_dev = profile.variance();
    match Normal::new(1.0, std_dev) {
        Ok(normal) if std_dev > 0.0 => {
            let sample: f64 = normal.sample(rng);
            sample.clamp(0.7, 1.4)
        }
        _ => 1.0,
    }
}

//! Configuration types for sensor package generation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use workouts::WorkoutKind;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Duration range must be positive and ordered, got {0}..={1}")]
    InvalidDuration(f64, f64),

    #[error("Workout mix must name at least one workout type")]
    EmptyMix,
}

/// Configuration for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Number of packages to generate.
    pub package_count: usize,

    /// Workout duration in hours (inclusive range).
    pub duration_h: (f64, f64),

    /// Workout types to draw from, uniformly.
    pub mix: Vec<WorkoutKind>,

    /// Seed for reproducible output. `None` uses thread-local randomness.
    pub seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            package_count: 10,
            duration_h: (0.25, 2.0),
            mix: WorkoutKind::ALL.to_vec(),
            seed: None,
        }
    }
}

impl GenerationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = self.duration_h;
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(ConfigError::InvalidDuration(min, max));
        }
        if self.mix.is_empty() {
            return Err(ConfigError::EmptyMix);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(GenerationConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_zero_duration() {
        let config = GenerationConfig {
            duration_h: (0.0, 1.0),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidDuration(0.0, 1.0)));
    }

    #[test]
    fn test_rejects_reversed_range() {
        let config = GenerationConfig {
            duration_h: (2.0, 1.0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_mix() {
        let config = GenerationConfig {
            mix: vec![],
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyMix));
    }

    #[test]
    fn test_deserialize_with_codes() {
        let json = r#"{"package_count": 3, "duration_h": [0.5, 1.0], "mix": ["RUN", "SWM"], "seed": 42}"#;
        let config: GenerationConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.mix, vec![WorkoutKind::Running, WorkoutKind::Swimming]);
        assert_eq!(config.seed, Some(42));
    }
}

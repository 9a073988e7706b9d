//! Synthetic sensor packages for the workout calculator.
//!
//! This crate generates plausible tracker readings for running, walking and
//! swimming so the `workouts` binary can be exercised against more than the
//! built-in samples.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use sensor_data::prelude::*;
//!
//! let config = GenerationConfig {
//!     package_count: 20,
//!     seed: Some(7),
//!     ..Default::default()
//! };
//! let packages = PackageGenerator::new().generate(&config)?;
//! let lines = summarize(&packages)?;
//! ```

pub mod config;
pub mod generators;
pub mod profiles;

// Re-export core types from workouts crate
pub use workouts::{SensorPackage, WorkoutKind};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{ConfigError, GenerationConfig};
    pub use crate::generators::PackageGenerator;
    pub use crate::profiles::{
        AthleteProfile, RunnerProfile, SwimmerProfile, WalkerProfile, sample_variance,
    };
    pub use crate::{SensorPackage, WorkoutKind};
    pub use workouts::summarize;
}

//! Sensor package generators.
//!
//! - [`PackageGenerator`]: draw workouts from a configured mix and turn athlete
//!   profiles into raw sensor packages

pub mod package;

pub use package::PackageGenerator;

//! Distance, speed and calorie calculations for tracked workouts.
//!
//! A tracker sends a [`SensorPackage`]: a workout code (`RUN`, `WLK`, `SWM`) and
//! positional readings. [`read_package`] turns it into a [`Training`], whose
//! [`Training::show_training_info`] yields a [`TrainingReport`] ready to print.

pub mod constants;
pub mod errors;
pub mod factory;
pub mod models;
pub mod report;
pub mod training;

use tracing::info;

pub use errors::WorkoutError;
pub use factory::{read_package, read_sensor_package};
pub use models::{SensorPackage, WorkoutKind, sample_packages};
pub use report::TrainingReport;
pub use training::{Running, SportsWalking, Swimming, Training, TrainingData};

/// Builds the report line for every package, in input order.
///
/// The first invalid package aborts the whole batch.
pub fn summarize(packages: &[SensorPackage]) -> Result<Vec<String>, WorkoutError> {
    let messages = packages
        .iter()
        .map(|package| read_sensor_package(package).map(|t| t.show_training_info().message()))
        .collect::<Result<Vec<_>, _>>()?;

    info!("Summarized {} sensor packages", messages.len());

    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_keeps_order() {
        let messages = summarize(&sample_packages()).unwrap();
        assert_eq!(messages.len(), 3);
        assert!(messages[0].starts_with("Training type: Swimming;"));
        assert!(messages[1].starts_with("Training type: Running;"));
        assert!(messages[2].starts_with("Training type: SportsWalking;"));
    }

    #[test]
    fn test_summarize_fails_atomically() {
        let packages = vec![
            SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
            SensorPackage::new("XYZ", vec![1.0]),
        ];
        assert_eq!(
            summarize(&packages),
            Err(WorkoutError::UnknownWorkoutType("XYZ".into()))
        );
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize(&[]), Ok(vec![]));
    }
}

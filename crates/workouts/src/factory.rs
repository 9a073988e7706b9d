//! Construction of workouts from raw sensor packages.

use tracing::{debug, warn};

use crate::errors::WorkoutError;
use crate::models::{SensorPackage, WorkoutKind};
use crate::training::{Running, SportsWalking, Swimming, Training};

/// Builds the workout described by a sensor code and its positional values.
///
/// # Errors
/// - [`WorkoutError::UnknownWorkoutType`] if the code is not `RUN`, `WLK` or `SWM`
/// - [`WorkoutError::InvalidArgument`] if the number of values does not match the
///   workout type, or a value is out of range
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Box<dyn Training>, WorkoutError> {
    let kind = workout_type.parse::<WorkoutKind>().inspect_err(|e| {
        warn!("Rejected sensor package: {e}");
    })?;

    build(kind, data).inspect_err(|e| {
        warn!(workout = %kind, "Rejected sensor package: {e}");
    })
}

/// Same as [`read_package`], taking a whole [`SensorPackage`].
pub fn read_sensor_package(package: &SensorPackage) -> Result<Box<dyn Training>, WorkoutError> {
    read_package(&package.workout_type, &package.data)
}

/// Builds a workout of a known type from its positional values.
pub fn build(kind: WorkoutKind, data: &[f64]) -> Result<Box<dyn Training>, WorkoutError> {
    if data.len() != kind.arity() {
        return Err(WorkoutError::invalid(format!(
            "{} expects {} values, got {}",
            kind.code(),
            kind.arity(),
            data.len()
        )));
    }

    let action = count("action", data[0])?;
    let (duration_h, weight_kg) = (data[1], data[2]);

    let training: Box<dyn Training> = match kind {
        WorkoutKind::Running => Box::new(Running::new(action, duration_h, weight_kg)?),
        WorkoutKind::SportsWalking => Box::new(SportsWalking::new(
            action, duration_h, weight_kg, data[3],
        )?),
        WorkoutKind::Swimming => Box::new(Swimming::new(
            action,
            duration_h,
            weight_kg,
            data[3],
            count("pool lap count", data[4])?,
        )?),
    };

    debug!(workout = %kind, action, duration_h, weight_kg, "Built workout from sensor package");

    Ok(training)
}

/// Converts a reading that must be a whole, non-negative count.
fn count(name: &str, value: f64) -> Result<u32, WorkoutError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(WorkoutError::invalid(format!(
            "{name} must be a non-negative whole number, got {value}"
        )))
    }
}

use thiserror::Error;

/// Errors raised while turning a sensor package into a workout.
///
/// Calorie computation is a required method of [`crate::training::Training`],
/// so there is no error for calling it on an incomplete workout type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkoutError {
    #[error("Unknown workout type: {0}")]
    UnknownWorkoutType(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl WorkoutError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        WorkoutError::InvalidArgument(msg.into())
    }
}

//! Error types for the workout tracker

use thiserror::Error;

/// Errors that can occur while reading packages or computing workout statistics
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Unknown workout type: {0}")]
    UnknownWorkout(String),

    #[error("Calorie formula not implemented for {0}")]
    NotImplemented(String),

    #[error("Workout {code} expects {expected} values, got {got}")]
    WrongArity {
        code: String,
        expected: usize,
        got: usize,
    },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f64 },

    #[error("Failed to parse sensor package: {0}")]
    ParseError(String),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

//! Core types for the workout tracker
//!
//! This module defines the workout kinds recognised in sensor packages and the
//! summary record produced for every processed workout.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;

/// Workout kind as reported by the fitness sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutKind {
    Swimming,
    Running,
    Walking,
}

impl WorkoutKind {
    /// All supported kinds, in the order the sensor documents them
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::Walking,
    ];

    /// Three-letter package code
    pub fn as_code(&self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "SWM",
            WorkoutKind::Running => "RUN",
            WorkoutKind::Walking => "WLK",
        }
    }

    /// Name shown as the training type in summaries
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "Swimming",
            WorkoutKind::Running => "Running",
            WorkoutKind::Walking => "SportsWalking",
        }
    }

    /// Positional layout of the numeric tuple carried by a package
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            WorkoutKind::Swimming => &["action", "duration", "weight", "length_pool", "count_pool"],
            WorkoutKind::Running => &["action", "duration", "weight"],
            WorkoutKind::Walking => &["action", "duration", "weight", "height"],
        }
    }

    /// Number of values a package of this kind must carry
    pub fn arity(&self) -> usize {
        self.fields().len()
    }
}

impl FromStr for WorkoutKind {
    type Err = TrackerError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "SWM" => Ok(WorkoutKind::Swimming),
            "RUN" => Ok(WorkoutKind::Running),
            "WLK" => Ok(WorkoutKind::Walking),
            other => Err(TrackerError::UnknownWorkout(other.to_string())),
        }
    }
}

/// Summary of a completed workout
///
/// Built only by [`crate::training::Training::show_training_info`]; values are
/// rendered as given, without any validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    /// Workout name (e.g. "Running")
    pub training_type: String,
    /// Duration (hours)
    pub duration: f64,
    /// Distance covered (km)
    pub distance: f64,
    /// Mean speed (km/h)
    pub speed: f64,
    /// Energy spent (kcal)
    pub calories: f64,
}

impl InfoMessage {
    /// Render the summary line shown to the user
    pub fn get_message(&self) -> String {
        format!(
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_message())
    }
}

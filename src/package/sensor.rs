//! Package definition and the workout factory

use serde::{Deserialize, Serialize};

use crate::error::TrackerError;
use crate::training::{Running, SportsWalking, Swimming, Workout};
use crate::types::WorkoutKind;

/// Build the workout calculator described by a sensor package.
///
/// # Arguments
/// * `workout_type` - Package code: "SWM", "RUN" or "WLK"
/// * `data` - Positional readings for that code:
///   - SWM: `[action, duration, weight, length_pool, count_pool]`
///   - RUN: `[action, duration, weight]`
///   - WLK: `[action, duration, weight, height]`
///
/// Unknown codes are an error; no default workout is ever substituted.
///
/// # Example
/// ```
/// use workout_tracker::{read_package, Training};
///
/// let workout = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
/// assert_eq!(workout.name(), "Running");
/// ```
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout, TrackerError> {
    let kind: WorkoutKind = workout_type.parse()?;
    check_arity(kind, data)?;

    let action = count("action", data[0])?;
    let (duration, weight) = (data[1], data[2]);

    let workout = match kind {
        WorkoutKind::Swimming => Workout::Swimming(Swimming::new(
            action,
            duration,
            weight,
            data[3],
            count("count_pool", data[4])?,
        )),
        WorkoutKind::Running => Workout::Running(Running::new(action, duration, weight)),
        WorkoutKind::Walking => {
            Workout::Walking(SportsWalking::new(action, duration, weight, data[3]))
        }
    };

    Ok(workout)
}

fn check_arity(kind: WorkoutKind, data: &[f64]) -> Result<(), TrackerError> {
    if data.len() != kind.arity() {
        return Err(TrackerError::WrongArity {
            code: kind.as_code().to_string(),
            expected: kind.arity(),
            got: data.len(),
        });
    }
    Ok(())
}

/// Convert a counter reading (steps, strokes, pool lengths) to an integer
fn count(field: &'static str, value: f64) -> Result<u64, TrackerError> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value >= u64::MAX as f64 {
        return Err(TrackerError::InvalidValue { field, value });
    }
    Ok(value as u64)
}

/// One reading package from the fitness sensor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    /// Workout code ("SWM", "RUN", "WLK")
    pub workout_type: String,
    /// Positional readings, layout depends on the workout code
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }

    /// Workout kind named by this package
    pub fn kind(&self) -> Result<WorkoutKind, TrackerError> {
        self.workout_type.parse()
    }

    /// Build the workout calculator for this package
    pub fn to_workout(&self) -> Result<Workout, TrackerError> {
        read_package(&self.workout_type, &self.data)
    }

    /// Check the package without building a calculator.
    ///
    /// Beyond what the factory requires, this rejects readings the formulas
    /// cannot handle: non-finite values and non-positive duration, weight,
    /// height or pool length.
    pub fn validate(&self) -> Result<(), TrackerError> {
        let kind = self.kind()?;
        check_arity(kind, &self.data)?;

        for (&field, &value) in kind.fields().iter().zip(&self.data) {
            match field {
                "action" | "count_pool" => {
                    count(field, value)?;
                }
                _ => {
                    if !value.is_finite() || value <= 0.0 {
                        return Err(TrackerError::InvalidValue { field, value });
                    }
                }
            }
        }

        Ok(())
    }
}

/// Demo packages: one swim, one run and one walk
pub fn sample_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

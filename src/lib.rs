//! Workout Tracker - workout statistics from fitness sensor packages
//!
//! The tracker turns raw sensor packages into workout summaries through a short
//! deterministic pipeline: package validation → workout factory → distance,
//! mean speed and calorie calculation → summary rendering.
//!
//! ## Workouts
//!
//! - **Swimming** (`SWM`): speed from pool geometry, calories from speed and weight
//! - **Running** (`RUN`): calories from speed, weight and duration
//! - **Sports walking** (`WLK`): calories from weight, speed and height

pub mod error;
pub mod package;
pub mod tracker;
pub mod training;
pub mod types;

pub use error::TrackerError;
pub use package::{read_package, sample_packages, PackageReader, SensorPackage};
pub use tracker::{summarize, BatchReport, WorkoutTracker};
pub use training::{Running, SportsWalking, Swimming, Training, TrainingBase, Workout};
pub use types::{InfoMessage, WorkoutKind};

/// Tracker version reported by the CLI
pub const TRACKER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name reported by the CLI
pub const PRODUCER_NAME: &str = "workout-tracker";

//! Sensor packages
//!
//! A package is one `(workout_type, data)` record sent by the fitness sensor:
//! a three-letter workout code and a flat, positional tuple of readings.
//! This module turns packages into workout calculators and reads batches of
//! them from NDJSON or JSON arrays.

mod reader;
mod sensor;

pub use reader::*;
pub use sensor::*;

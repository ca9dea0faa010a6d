//! Batch readers for sensor packages

use crate::error::TrackerError;
use crate::package::sensor::SensorPackage;

/// Reader for batches of sensor packages
pub struct PackageReader;

impl PackageReader {
    /// Parse a JSON string containing an array of packages
    pub fn parse_array(json: &str) -> Result<Vec<SensorPackage>, TrackerError> {
        let packages: Vec<SensorPackage> = serde_json::from_str(json)?;
        Ok(packages)
    }

    /// Parse newline-delimited JSON (one package per line)
    pub fn parse_ndjson(ndjson: &str) -> Result<Vec<SensorPackage>, TrackerError> {
        let mut packages = Vec::new();
        for (line_num, line) in ndjson.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match serde_json::from_str::<SensorPackage>(trimmed) {
                Ok(package) => packages.push(package),
                Err(e) => {
                    return Err(TrackerError::ParseError(format!(
                        "Failed to parse line {}: {}",
                        line_num + 1,
                        e
                    )));
                }
            }
        }
        Ok(packages)
    }

    /// Validate a batch of packages, returning only the failures
    pub fn validate_packages(packages: &[SensorPackage]) -> Vec<PackageValidation> {
        packages
            .iter()
            .enumerate()
            .filter_map(|(index, package)| {
                package.validate().err().map(|error| PackageValidation {
                    index,
                    workout_type: package.workout_type.clone(),
                    error,
                })
            })
            .collect()
    }
}

/// A package that failed validation
#[derive(Debug)]
pub struct PackageValidation {
    pub index: usize,
    pub workout_type: String,
    pub error: TrackerError,
}

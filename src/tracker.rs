//! Package processing
//!
//! This module provides the public entry points that take sensor packages all
//! the way to workout summaries: validation → factory → calculation.

use log::{debug, warn};

use crate::error::TrackerError;
use crate::package::SensorPackage;
use crate::training::Training;
use crate::types::InfoMessage;

/// Summarize a single sensor package.
///
/// # Example
/// ```
/// use workout_tracker::summarize;
///
/// let info = summarize("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
/// assert_eq!(info.training_type, "Swimming");
/// ```
pub fn summarize(workout_type: &str, data: &[f64]) -> Result<InfoMessage, TrackerError> {
    WorkoutTracker::new().process(&SensorPackage::new(workout_type, data.to_vec()))
}

/// Outcome of processing a batch of packages
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Summaries of the packages that were processed, in input order
    pub summaries: Vec<InfoMessage>,
    /// Index and error of every package that failed
    pub failures: Vec<(usize, TrackerError)>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Rendered summary lines, one per processed package
    pub fn messages(&self) -> Vec<String> {
        self.summaries.iter().map(InfoMessage::get_message).collect()
    }
}

/// Processor turning sensor packages into workout summaries
#[derive(Debug, Default)]
pub struct WorkoutTracker {
    processed: usize,
    failed: usize,
}

impl WorkoutTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of packages summarized so far
    pub fn processed(&self) -> usize {
        self.processed
    }

    /// Number of packages rejected so far
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Validate a package, build its workout and summarize it
    pub fn process(&mut self, package: &SensorPackage) -> Result<InfoMessage, TrackerError> {
        match Self::summarize_package(package) {
            Ok(info) => {
                self.processed += 1;
                debug!(
                    "{} package summarized: {:.3} km, {:.3} kcal",
                    package.workout_type, info.distance, info.calories
                );
                Ok(info)
            }
            Err(e) => {
                self.failed += 1;
                warn!("{} package rejected: {}", package.workout_type, e);
                Err(e)
            }
        }
    }

    /// Process every package; a failing package does not stop the batch
    pub fn process_batch(&mut self, packages: &[SensorPackage]) -> BatchReport {
        let mut report = BatchReport::default();

        for (index, package) in packages.iter().enumerate() {
            match self.process(package) {
                Ok(info) => report.summaries.push(info),
                Err(e) => report.failures.push((index, e)),
            }
        }

        debug!(
            "batch done: {} summarized, {} failed",
            report.summaries.len(),
            report.failures.len()
        );

        report
    }

    fn summarize_package(package: &SensorPackage) -> Result<InfoMessage, TrackerError> {
        package.validate()?;
        let workout = package.to_workout()?;
        workout.show_training_info()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::sample_packages;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sample_batch_messages() {
        let mut tracker = WorkoutTracker::new();
        let report = tracker.process_batch(&sample_packages());

        assert!(report.is_clean());
        assert_eq!(
            report.messages(),
            vec![
                "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
                 Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
                    .to_string(),
                "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
                 Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
                    .to_string(),
                "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
                 Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500."
                    .to_string(),
            ]
        );
        assert_eq!(tracker.processed(), 3);
        assert_eq!(tracker.failed(), 0);
    }

    #[test]
    fn test_batch_continues_after_failure() {
        let packages = vec![
            SensorPackage::new("XYZ", vec![1.0, 2.0, 3.0]),
            SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
            SensorPackage::new("WLK", vec![9000.0, 0.0, 75.0, 180.0]),
        ];

        let mut tracker = WorkoutTracker::new();
        let report = tracker.process_batch(&packages);

        assert_eq!(report.summaries.len(), 1);
        assert_eq!(report.summaries[0].training_type, "Running");
        assert_eq!(report.failures.len(), 2);
        assert_eq!(report.failures[0].0, 0);
        assert!(matches!(report.failures[0].1, TrackerError::UnknownWorkout(_)));
        assert_eq!(report.failures[1].0, 2);
        assert!(matches!(
            report.failures[1].1,
            TrackerError::InvalidValue { field: "duration", .. }
        ));
        assert_eq!(tracker.failed(), 2);
    }

    #[test]
    fn test_summarize_unknown_code() {
        let result = summarize("XYZ", &[1.0, 2.0, 3.0]);
        assert!(matches!(result, Err(TrackerError::UnknownWorkout(_))));
    }

    #[test]
    fn test_summarize_walking() {
        let info = summarize("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();

        assert_eq!(info.training_type, "SportsWalking");
        assert!((info.calories - 157.5).abs() < 1e-6);
    }
}

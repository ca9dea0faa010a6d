//! Workout calculators
//!
//! Every workout shares the same raw inputs (movement count, duration, weight)
//! and the same derived quantities:
//! - Distance: movements × step length
//! - Mean speed: distance / duration
//!
//! Each workout supplies its own calorie formula. Swimming also derives its mean
//! speed from pool geometry instead of the distance covered.

use crate::error::TrackerError;
use crate::types::{InfoMessage, WorkoutKind};

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;

/// Default distance covered by one step (meters)
pub const LEN_STEP: f64 = 0.65;

/// Floor division on floats, computed from the remainder.
///
/// Differs from `(a / b).floor()` when the rounded quotient lands on an integer
/// the exact quotient does not reach, e.g. `1.0 / 0.1` rounds to 10 while the
/// floored quotient is 9.
pub fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut quotient = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        quotient -= 1.0;
    }
    if quotient == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let floored = quotient.floor();
    if quotient - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

/// Shared contract for all workout calculators
pub trait Training {
    /// Raw inputs common to every workout
    fn base(&self) -> &TrainingBase;

    /// Training type shown in the summary
    fn name(&self) -> &'static str;

    /// Distance covered by a single movement (meters)
    fn len_step(&self) -> f64 {
        LEN_STEP
    }

    /// Distance covered (km)
    fn get_distance(&self) -> f64 {
        self.base().action as f64 * self.len_step() / M_IN_KM
    }

    /// Mean speed over the whole workout (km/h)
    fn get_mean_speed(&self) -> f64 {
        self.get_distance() / self.base().duration
    }

    /// Energy spent (kcal)
    ///
    /// Workouts must provide their own formula; calling this on a calculator
    /// that does not is an error rather than a silent zero.
    fn get_spent_calories(&self) -> Result<f64, TrackerError> {
        Err(TrackerError::NotImplemented(self.name().to_string()))
    }

    /// Build the summary for this workout
    fn show_training_info(&self) -> Result<InfoMessage, TrackerError> {
        Ok(InfoMessage {
            training_type: self.name().to_string(),
            duration: self.base().duration,
            distance: self.get_distance(),
            speed: self.get_mean_speed(),
            calories: self.get_spent_calories()?,
        })
    }
}

/// Raw sensor inputs shared by every workout
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingBase {
    /// Movement count (steps or strokes)
    pub action: u64,
    /// Duration (hours)
    pub duration: f64,
    /// Athlete weight (kg)
    pub weight: f64,
}

impl TrainingBase {
    pub fn new(action: u64, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

impl Training for TrainingBase {
    fn base(&self) -> &TrainingBase {
        self
    }

    fn name(&self) -> &'static str {
        "Training"
    }
}

/// Running workout
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    base: TrainingBase,
}

impl Running {
    const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_SPEED_SHIFT: f64 = 20.0;

    pub fn new(action: u64, duration: f64, weight: f64) -> Self {
        Self {
            base: TrainingBase::new(action, duration, weight),
        }
    }
}

impl Training for Running {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn name(&self) -> &'static str {
        WorkoutKind::Running.display_name()
    }

    fn get_spent_calories(&self) -> Result<f64, TrackerError> {
        let base = &self.base;
        Ok((Self::CALORIES_SPEED_MULTIPLIER * self.get_mean_speed()
            - Self::CALORIES_SPEED_SHIFT)
            * base.weight
            / M_IN_KM
            * (base.duration * MIN_IN_H))
    }
}

/// Sports walking workout
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    base: TrainingBase,
    /// Athlete height (cm)
    pub height: f64,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(action: u64, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            base: TrainingBase::new(action, duration, weight),
            height,
        }
    }
}

impl Training for SportsWalking {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn name(&self) -> &'static str {
        WorkoutKind::Walking.display_name()
    }

    fn get_spent_calories(&self) -> Result<f64, TrackerError> {
        let base = &self.base;
        // The speed/height term only counts whole units
        let speed_height_ratio = floor_div(self.get_mean_speed().powi(2), self.height);
        Ok((Self::CALORIES_WEIGHT_MULTIPLIER * base.weight
            + speed_height_ratio * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * base.weight)
            * (base.duration * MIN_IN_H))
    }
}

/// Pool swimming workout
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    base: TrainingBase,
    /// Pool length (meters)
    pub length_pool: f64,
    /// Number of pool lengths swum
    pub count_pool: u64,
}

impl Swimming {
    /// Distance covered by a single stroke (meters)
    pub const LEN_STEP: f64 = 1.38;

    const CALORIES_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action: u64,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: u64,
    ) -> Self {
        Self {
            base: TrainingBase::new(action, duration, weight),
            length_pool,
            count_pool,
        }
    }
}

impl Training for Swimming {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn name(&self) -> &'static str {
        WorkoutKind::Swimming.display_name()
    }

    fn len_step(&self) -> f64 {
        Self::LEN_STEP
    }

    // Displayed distance still comes from strokes; only speed uses the pool.
    fn get_mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool as f64 / M_IN_KM / self.base.duration
    }

    fn get_spent_calories(&self) -> Result<f64, TrackerError> {
        Ok((self.get_mean_speed() + Self::CALORIES_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.base.weight)
    }
}

/// A workout built from a sensor package
///
/// The set of workouts is closed, so the factory hands out this sum type rather
/// than a boxed trait object.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Swimming(Swimming),
    Running(Running),
    Walking(SportsWalking),
}

impl Workout {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Swimming(_) => WorkoutKind::Swimming,
            Workout::Running(_) => WorkoutKind::Running,
            Workout::Walking(_) => WorkoutKind::Walking,
        }
    }
}

/// Forward a call to the workout held by a [`Workout`]
macro_rules! dispatch {
    ($workout:expr, $inner:ident => $call:expr) => {
        match $workout {
            Workout::Swimming($inner) => $call,
            Workout::Running($inner) => $call,
            Workout::Walking($inner) => $call,
        }
    };
}

impl Training for Workout {
    fn base(&self) -> &TrainingBase {
        dispatch!(self, workout => workout.base())
    }

    fn name(&self) -> &'static str {
        dispatch!(self, workout => workout.name())
    }

    fn len_step(&self) -> f64 {
        dispatch!(self, workout => workout.len_step())
    }

    fn get_distance(&self) -> f64 {
        dispatch!(self, workout => workout.get_distance())
    }

    fn get_mean_speed(&self) -> f64 {
        dispatch!(self, workout => workout.get_mean_speed())
    }

    fn get_spent_calories(&self) -> Result<f64, TrackerError> {
        dispatch!(self, workout => workout.get_spent_calories())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_running_distance_uses_default_step() {
        let running = Running::new(15000, 1.0, 75.0);
        assert!((running.get_distance() - 15000.0 * 0.00065).abs() < EPS);
        assert!((running.get_distance() - 9.75).abs() < EPS);
    }

    #[test]
    fn test_running_scenario() {
        let running = Running::new(15000, 1.0, 75.0);
        assert!((running.get_mean_speed() - 9.75).abs() < EPS);

        // (18 * 9.75 - 20) * 75 / 1000 * 60
        let calories = running.get_spent_calories().unwrap();
        assert!((calories - 699.75).abs() < 1e-6);
    }

    #[test]
    fn test_running_speed_scales_with_duration() {
        let running = Running::new(15000, 2.0, 75.0);
        assert!((running.get_mean_speed() - 4.875).abs() < EPS);
    }

    #[test]
    fn test_walking_scenario() {
        let walking = SportsWalking::new(9000, 1.0, 75.0, 180.0);
        assert!((walking.get_distance() - 5.85).abs() < EPS);
        assert!((walking.get_mean_speed() - 5.85).abs() < EPS);

        // 5.85^2 / 180 floors to 0, leaving only the weight term
        let calories = walking.get_spent_calories().unwrap();
        assert!((calories - 157.5).abs() < 1e-6);
    }

    #[test]
    fn test_walking_uses_floor_division() {
        // speed = 13 km/h, 13^2 / 100 = 1.69 -> 1
        let walking = SportsWalking::new(20000, 1.0, 70.0, 100.0);
        assert!((walking.get_mean_speed() - 13.0).abs() < EPS);

        let expected = (0.035 * 70.0 + 1.0 * 0.029 * 70.0) * 60.0;
        let calories = walking.get_spent_calories().unwrap();
        assert!((calories - expected).abs() < 1e-6);
    }

    #[test]
    fn test_floor_div_uses_remainder() {
        // 1.0 / 0.1 rounds to exactly 10.0, but 0.1 is slightly above a tenth
        assert_eq!(floor_div(1.0, 0.1), 9.0);
        assert_eq!(floor_div(7.0, 2.0), 3.0);
        assert_eq!(floor_div(-7.0, 2.0), -4.0);
        assert_eq!(floor_div(34.2225, 180.0), 0.0);
    }

    #[test]
    fn test_walking_ratio_matches_remainder_floor() {
        // speed ~ 39 km/h, 39^2 / 0.1 rounds up to 15210 while the floor is 15209
        let walking = SportsWalking::new(18000, 0.3, 70.0, 0.1);
        let ratio = floor_div(walking.get_mean_speed().powi(2), walking.height);
        assert_eq!(ratio, 15209.0);

        let expected = (0.035 * 70.0 + 15209.0 * 0.029 * 70.0) * (0.3 * 60.0);
        let calories = walking.get_spent_calories().unwrap();
        assert!((calories - expected).abs() < 1e-6);
    }

    #[test]
    fn test_swimming_scenario() {
        let swimming = Swimming::new(720, 1.0, 80.0, 25.0, 40);
        assert!((swimming.get_mean_speed() - 1.0).abs() < EPS);

        let calories = swimming.get_spent_calories().unwrap();
        assert!((calories - 336.0).abs() < 1e-6);
    }

    #[test]
    fn test_swimming_distance_uses_stroke_length() {
        let swimming = Swimming::new(720, 1.0, 80.0, 25.0, 40);
        assert!((swimming.get_distance() - 720.0 * 1.38 / 1000.0).abs() < EPS);
    }

    #[test]
    fn test_swimming_speed_ignores_action_count() {
        let few_strokes = Swimming::new(10, 2.0, 80.0, 50.0, 30);
        let many_strokes = Swimming::new(5000, 2.0, 80.0, 50.0, 30);

        assert_eq!(few_strokes.get_mean_speed(), many_strokes.get_mean_speed());
        assert!((few_strokes.get_mean_speed() - 0.75).abs() < EPS);
    }

    #[test]
    fn test_base_calories_not_implemented() {
        let base = TrainingBase::new(1000, 1.0, 70.0);

        assert!((base.get_distance() - 0.65).abs() < EPS);
        assert!(matches!(
            base.get_spent_calories(),
            Err(TrackerError::NotImplemented(name)) if name == "Training"
        ));
        assert!(base.show_training_info().is_err());
    }

    #[test]
    fn test_workout_delegates_to_variant() {
        let workout = Workout::Swimming(Swimming::new(720, 1.0, 80.0, 25.0, 40));

        assert_eq!(workout.kind(), WorkoutKind::Swimming);
        assert_eq!(workout.name(), "Swimming");
        assert_eq!(workout.len_step(), Swimming::LEN_STEP);
        assert!((workout.get_mean_speed() - 1.0).abs() < EPS);

        let info = workout.show_training_info().unwrap();
        assert_eq!(info.training_type, "Swimming");
        assert!((info.distance - 0.9936).abs() < EPS);
        assert!((info.calories - 336.0).abs() < 1e-6);
    }

    #[test]
    fn test_walking_summary_name() {
        let workout = Workout::Walking(SportsWalking::new(9000, 1.0, 75.0, 180.0));
        let info = workout.show_training_info().unwrap();

        assert_eq!(info.training_type, "SportsWalking");
        assert_eq!(info.duration, 1.0);
    }
}

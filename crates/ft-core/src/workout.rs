//! Workout formulas: distance, mean speed, and calorie computation per activity.
//!
//! Each workout type implements the [`Workout`] capability trait. The formulas
//! are empirical and keep the operation order of the reference readings, so
//! formatted output is reproducible bit for bit. The walking calorie formula
//! floors the squared-speed term; that is part of the contract, not rounding.

use thiserror::Error;

use crate::summary::WorkoutSummary;

/// Meters per kilometer.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes per hour.
pub const MIN_IN_H: f64 = 60.0;

/// Validation errors for workout constructors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Duration is divided by in every variant, so it must be positive.
    #[error("duration must be a positive number of hours, got {value}")]
    NonPositiveDuration { value: f64 },

    /// Height is divided by in the walking calorie formula.
    #[error("height must be a positive number of centimeters, got {value}")]
    NonPositiveHeight { value: f64 },

    /// The field left the domain (negative, NaN, or infinite).
    #[error("{field} must be a non-negative finite number, got {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

fn check_duration(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NonPositiveDuration { value })
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange { field, value })
    }
}

/// Distance covered by `action` discrete movements of `step_len_m` meters, in km.
fn step_distance_km(action: u32, step_len_m: f64) -> f64 {
    f64::from(action) * step_len_m / M_IN_KM
}

/// Capability set shared by every workout type.
///
/// Implementations are immutable after construction; all methods are pure, so
/// repeated calls yield identical values.
pub trait Workout: std::fmt::Debug {
    /// Display name used in the summary line.
    fn name(&self) -> &'static str;

    /// Workout duration in hours.
    fn duration_h(&self) -> f64;

    /// Covered distance in kilometers.
    fn distance_km(&self) -> f64;

    /// Mean speed over the full duration, km/h.
    fn mean_speed_kmh(&self) -> f64;

    /// Estimated energy expenditure in kilocalories.
    fn spent_calories(&self) -> f64;

    /// Packages the computed values for rendering.
    fn summary(&self) -> WorkoutSummary {
        WorkoutSummary {
            workout: self.name(),
            duration_h: self.duration_h(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.spent_calories(),
        }
    }
}

/// Workout: running.
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    action: u32,
    duration_h: f64,
    weight_kg: f64,
}

impl Running {
    /// Display name used in the summary line.
    pub const NAME: &'static str = "Running";

    /// Distance covered per step, meters.
    pub const STEP_LEN_M: f64 = 0.65;

    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Result<Self, ValidationError> {
        check_duration(duration_h)?;
        check_non_negative("weight", weight_kg)?;
        Ok(Self {
            action,
            duration_h,
            weight_kg,
        })
    }
}

impl Workout for Running {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn distance_km(&self) -> f64 {
        step_distance_km(self.action, Self::STEP_LEN_M)
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_h
    }

    fn spent_calories(&self) -> f64 {
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh()
            - Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.weight_kg
            / M_IN_KM
            * self.duration_h
            * MIN_IN_H
    }
}

/// Workout: sports walking.
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    action: u32,
    duration_h: f64,
    weight_kg: f64,
    height_cm: f64,
}

impl SportsWalking {
    /// Display name used in the summary line.
    pub const NAME: &'static str = "SportsWalking";

    /// Distance covered per step, meters.
    pub const STEP_LEN_M: f64 = 0.65;

    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self, ValidationError> {
        check_duration(duration_h)?;
        check_non_negative("weight", weight_kg)?;
        if !height_cm.is_finite() || height_cm <= 0.0 {
            return Err(ValidationError::NonPositiveHeight { value: height_cm });
        }
        Ok(Self {
            action,
            duration_h,
            weight_kg,
            height_cm,
        })
    }
}

impl Workout for SportsWalking {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn distance_km(&self) -> f64 {
        step_distance_km(self.action, Self::STEP_LEN_M)
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_h
    }

    fn spent_calories(&self) -> f64 {
        // The squared-speed term is floor-divided by height.
        (Self::CALORIES_WEIGHT_MULTIPLIER * self.weight_kg
            + (self.mean_speed_kmh().powi(2) / self.height_cm).floor()
                * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
                * self.weight_kg)
            * self.duration_h
            * MIN_IN_H
    }
}

/// Workout: swimming.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    action: u32,
    duration_h: f64,
    weight_kg: f64,
    length_pool_m: f64,
    count_pool: u32,
}

impl Swimming {
    /// Display name used in the summary line.
    pub const NAME: &'static str = "Swimming";

    /// Distance covered per stroke, meters.
    pub const STEP_LEN_M: f64 = 1.38;

    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        length_pool_m: f64,
        count_pool: u32,
    ) -> Result<Self, ValidationError> {
        check_duration(duration_h)?;
        check_non_negative("weight", weight_kg)?;
        check_non_negative("pool length", length_pool_m)?;
        Ok(Self {
            action,
            duration_h,
            weight_kg,
            length_pool_m,
            count_pool,
        })
    }
}

impl Workout for Swimming {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn distance_km(&self) -> f64 {
        step_distance_km(self.action, Self::STEP_LEN_M)
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.length_pool_m * f64::from(self.count_pool) / M_IN_KM / self.duration_h
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.weight_kg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt3(value: f64) -> String {
        format!("{value:.3}")
    }

    // ========== Reference Scenarios ==========

    #[test]
    fn swimming_reference_reading() {
        let workout = Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap();
        assert_eq!(fmt3(workout.distance_km()), "0.994");
        assert_eq!(fmt3(workout.mean_speed_kmh()), "1.000");
        assert_eq!(fmt3(workout.spent_calories()), "336.000");
    }

    #[test]
    fn running_reference_reading() {
        let workout = Running::new(15_000, 1.0, 75.0).unwrap();
        assert_eq!(fmt3(workout.distance_km()), "9.750");
        assert_eq!(fmt3(workout.mean_speed_kmh()), "9.750");
        assert_eq!(fmt3(workout.spent_calories()), "699.750");
    }

    #[test]
    fn walking_reference_reading() {
        let workout = SportsWalking::new(9_000, 1.0, 75.0, 180.0).unwrap();
        assert_eq!(fmt3(workout.distance_km()), "5.850");
        assert_eq!(fmt3(workout.mean_speed_kmh()), "5.850");
        assert_eq!(fmt3(workout.spent_calories()), "157.500");
    }

    #[test]
    fn walking_calories_floor_the_squared_speed_term() {
        // speed 11.7 km/h, speed^2 / height = 1.14..., floored to 1.
        // True division would give 306.368 kcal instead.
        let workout = SportsWalking::new(18_000, 1.0, 75.0, 120.0).unwrap();
        assert_eq!(fmt3(workout.spent_calories()), "288.000");
    }

    #[test]
    fn running_half_hour_reading() {
        let workout = Running::new(7_000, 0.5, 60.0).unwrap();
        assert_eq!(fmt3(workout.distance_km()), "4.550");
        assert_eq!(fmt3(workout.mean_speed_kmh()), "9.100");
        assert_eq!(fmt3(workout.spent_calories()), "258.840");
    }

    #[test]
    fn swimming_partial_hour_reading() {
        let workout = Swimming::new(420, 0.75, 68.0, 50.0, 12).unwrap();
        assert_eq!(fmt3(workout.distance_km()), "0.580");
        assert_eq!(fmt3(workout.mean_speed_kmh()), "0.800");
        assert_eq!(fmt3(workout.spent_calories()), "258.400");
    }

    // ========== Properties ==========

    #[test]
    fn distance_is_non_negative() {
        let zero = Running::new(0, 1.0, 75.0).unwrap();
        assert!(zero.distance_km() >= 0.0);

        let walking = SportsWalking::new(1, 0.1, 50.0, 160.0).unwrap();
        assert!(walking.distance_km() >= 0.0);

        let swimming = Swimming::new(0, 1.0, 80.0, 25.0, 0).unwrap();
        assert!(swimming.distance_km() >= 0.0);
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "identical computation must match exactly")]
    fn mean_speed_is_distance_over_duration_for_land_workouts() {
        let running = Running::new(12_345, 1.75, 70.0).unwrap();
        assert_eq!(
            running.mean_speed_kmh(),
            running.distance_km() / running.duration_h()
        );

        let walking = SportsWalking::new(8_000, 0.9, 80.0, 175.0).unwrap();
        assert_eq!(
            walking.mean_speed_kmh(),
            walking.distance_km() / walking.duration_h()
        );
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "identical computation must match exactly")]
    fn swimming_mean_speed_uses_pool_laps() {
        let workout = Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap();
        assert_eq!(workout.mean_speed_kmh(), 25.0 * 40.0 / 1000.0 / 1.0);
    }

    #[test]
    fn summary_is_idempotent() {
        let workout = Running::new(15_000, 1.0, 75.0).unwrap();
        let first = workout.summary();
        let second = workout.summary();
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn summary_carries_the_workout_name() {
        let workout: Box<dyn Workout> = Box::new(Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap());
        assert_eq!(workout.summary().workout, "Swimming");
    }

    // ========== Validation ==========

    #[test]
    fn zero_duration_is_rejected() {
        assert_eq!(
            Running::new(15_000, 0.0, 75.0),
            Err(ValidationError::NonPositiveDuration { value: 0.0 })
        );
        assert!(Swimming::new(720, 0.0, 80.0, 25.0, 40).is_err());
        assert!(SportsWalking::new(9_000, 0.0, 75.0, 180.0).is_err());
    }

    #[test]
    fn negative_duration_is_rejected() {
        assert!(Running::new(15_000, -1.0, 75.0).is_err());
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        assert!(Running::new(15_000, f64::NAN, 75.0).is_err());
        assert!(Running::new(15_000, 1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn walking_requires_positive_height() {
        assert_eq!(
            SportsWalking::new(9_000, 1.0, 75.0, 0.0),
            Err(ValidationError::NonPositiveHeight { value: 0.0 })
        );
        assert!(SportsWalking::new(9_000, 1.0, 75.0, -180.0).is_err());
    }

    #[test]
    fn negative_weight_is_rejected() {
        let err = Running::new(15_000, 1.0, -75.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "weight must be a non-negative finite number, got -75"
        );
    }
}

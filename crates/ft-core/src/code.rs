//! Workout code registry: mapping sensor packet codes to workout constructors.
//!
//! A packet is a three-letter activity code plus a flat list of numeric
//! values. [`REGISTRY`] is the single source of truth for the recognized
//! codes; adding a workout type means adding a row there.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::workout::{Running, SportsWalking, Swimming, ValidationError, Workout};

/// Three-letter activity codes used by sensor packets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutCode {
    Swm,
    Run,
    Wlk,
}

impl WorkoutCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Swm => "SWM",
            Self::Run => "RUN",
            Self::Wlk => "WLK",
        }
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutCode {
    type Err = UnknownWorkoutCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SWM" => Ok(Self::Swm),
            "RUN" => Ok(Self::Run),
            "WLK" => Ok(Self::Wlk),
            _ => Err(UnknownWorkoutCode(s.to_string())),
        }
    }
}

impl Serialize for WorkoutCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for WorkoutCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error for activity codes missing from the registry.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("workout type not found: {0}")]
pub struct UnknownWorkoutCode(String);

/// Errors from decoding a sensor packet into a workout.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error(transparent)]
    UnknownCode(#[from] UnknownWorkoutCode),

    /// The packet carried the wrong number of values for its code.
    #[error("{code} packet expects {expected} values, got {got}")]
    WrongArity {
        code: WorkoutCode,
        expected: usize,
        got: usize,
    },

    /// A count field (steps, strokes, laps) was negative or fractional.
    #[error("{field} must be a non-negative whole number, got {value}")]
    InvalidCount { field: &'static str, value: f64 },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// One row of the code registry.
pub struct CodeEntry {
    pub code: WorkoutCode,

    /// Display name of the workout type this code decodes to.
    pub workout: &'static str,

    /// Number of values a packet with this code must carry.
    pub arity: usize,

    /// Builds the workout from the packet values.
    pub build: fn(&[f64]) -> Result<Box<dyn Workout>, BuildError>,
}

/// Static mapping from packet code to workout constructor.
pub const REGISTRY: &[CodeEntry] = &[
    CodeEntry {
        code: WorkoutCode::Swm,
        workout: Swimming::NAME,
        arity: 5,
        build: build_swimming,
    },
    CodeEntry {
        code: WorkoutCode::Run,
        workout: Running::NAME,
        arity: 3,
        build: build_running,
    },
    CodeEntry {
        code: WorkoutCode::Wlk,
        workout: SportsWalking::NAME,
        arity: 4,
        build: build_walking,
    },
];

/// Decode one sensor packet into the workout it describes.
///
/// Looks the code up in [`REGISTRY`], checks the value count against the
/// entry's arity, and delegates to the variant constructor. All failures
/// propagate as [`BuildError`].
pub fn build_workout(code: &str, values: &[f64]) -> Result<Box<dyn Workout>, BuildError> {
    let code: WorkoutCode = code.parse()?;
    let entry = REGISTRY
        .iter()
        .find(|entry| entry.code == code)
        .ok_or_else(|| UnknownWorkoutCode(code.to_string()))?;
    tracing::debug!(code = %code, values = values.len(), "decoding sensor packet");
    (entry.build)(values)
}

/// Converts a count field from the flat numeric packet, rejecting values that
/// are not whole non-negative numbers rather than truncating them.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "range and fraction are checked before the cast"
)]
fn count_value(field: &'static str, value: f64) -> Result<u32, BuildError> {
    if value.is_finite() && value >= 0.0 && value <= f64::from(u32::MAX) && value.fract() == 0.0 {
        Ok(value as u32)
    } else {
        Err(BuildError::InvalidCount { field, value })
    }
}

fn build_running(values: &[f64]) -> Result<Box<dyn Workout>, BuildError> {
    let [action, duration_h, weight_kg] = values else {
        return Err(BuildError::WrongArity {
            code: WorkoutCode::Run,
            expected: 3,
            got: values.len(),
        });
    };
    let action = count_value("action", *action)?;
    Ok(Box::new(Running::new(action, *duration_h, *weight_kg)?))
}

fn build_walking(values: &[f64]) -> Result<Box<dyn Workout>, BuildError> {
    let [action, duration_h, weight_kg, height_cm] = values else {
        return Err(BuildError::WrongArity {
            code: WorkoutCode::Wlk,
            expected: 4,
            got: values.len(),
        });
    };
    let action = count_value("action", *action)?;
    Ok(Box::new(SportsWalking::new(
        action,
        *duration_h,
        *weight_kg,
        *height_cm,
    )?))
}

fn build_swimming(values: &[f64]) -> Result<Box<dyn Workout>, BuildError> {
    let [action, duration_h, weight_kg, length_pool_m, count_pool] = values else {
        return Err(BuildError::WrongArity {
            code: WorkoutCode::Swm,
            expected: 5,
            got: values.len(),
        });
    };
    let action = count_value("action", *action)?;
    let count_pool = count_value("count_pool", *count_pool)?;
    Ok(Box::new(Swimming::new(
        action,
        *duration_h,
        *weight_kg,
        *length_pool_m,
        count_pool,
    )?))
}

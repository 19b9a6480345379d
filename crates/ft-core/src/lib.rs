//! Core domain logic for the fitness tracker.
//!
//! This crate contains the fundamental types and logic for:
//! - Workout formulas: distance, mean speed, and calorie computation per activity
//! - Summary rendering: the fixed one-line report for a processed reading
//! - Code registry: mapping three-letter sensor codes to workout constructors

pub mod code;
pub mod summary;
pub mod workout;

pub use code::{BuildError, CodeEntry, REGISTRY, UnknownWorkoutCode, WorkoutCode, build_workout};
pub use summary::WorkoutSummary;
pub use workout::{Running, SportsWalking, Swimming, ValidationError, Workout};

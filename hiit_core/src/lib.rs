#![forbid(unsafe_code)]

//! Core domain model and business logic for the HIIT workout companion.
//!
//! This crate provides:
//! - Domain types (exercises, workout configs, intervals, sessions)
//! - Exercise catalog management
//! - Workout generator
//! - Countdown playback and the completion summary
//! - Persistence (session log, progress, saved workouts)

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod generator;
pub mod playback;
pub mod summary;
pub mod session_log;
mod store;
pub mod progress;
pub mod library;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog, infer_categories};
pub use config::Config;
pub use generator::{
    generate_workout, generate_workout_random, generate_workout_seeded, is_other_side, Pacing,
};
pub use playback::{Countdown, Phase, TickEvent, WorkoutPlayer};
pub use summary::{WorkoutSummary, DEFAULT_CALORIES_PER_SECOND};
pub use session_log::{read_sessions, JsonlSink, SessionSink};

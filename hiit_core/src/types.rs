//! Core domain types for the HIIT workout companion.
//!
//! This module defines the fundamental types used throughout the system:
//! - Exercises and their classification
//! - Workout configuration and generated intervals
//! - Completed sessions, user progress and saved workouts

use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// Exercise Types
// ============================================================================

/// Body region a workout (or an exercise) emphasizes
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TargetArea {
    FullBody,
    Legs,
    Abs,
    UpperBody,
}

impl TargetArea {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetArea::FullBody => "full-body",
            TargetArea::Legs => "legs",
            TargetArea::Abs => "abs",
            TargetArea::UpperBody => "upper-body",
        }
    }

    /// All target areas for iteration
    pub fn all() -> &'static [TargetArea] {
        &[
            TargetArea::FullBody,
            TargetArea::Legs,
            TargetArea::Abs,
            TargetArea::UpperBody,
        ]
    }
}

impl fmt::Display for TargetArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetArea {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        TargetArea::all()
            .iter()
            .copied()
            .find(|area| area.as_str() == wanted)
            .ok_or_else(|| {
                Error::InvalidInput(format!(
                    "unknown target area '{}' (expected full-body, legs, abs or upper-body)",
                    s
                ))
            })
    }
}

/// Training objective selected by the user
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    FatLoss,
    Endurance,
    Strength,
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::FatLoss => "fat-loss",
            Goal::Endurance => "endurance",
            Goal::Strength => "strength",
        }
    }

    pub fn all() -> &'static [Goal] {
        &[Goal::FatLoss, Goal::Endurance, Goal::Strength]
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Goal::all()
            .iter()
            .copied()
            .find(|goal| goal.as_str() == wanted)
            .ok_or_else(|| {
                Error::InvalidInput(format!(
                    "unknown goal '{}' (expected fat-loss, endurance or strength)",
                    s
                ))
            })
    }
}

/// Training classification used when ranking candidates for a goal
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum MovementCategory {
    /// Short explosive or cardio movements (burpees, jumps)
    CardioExplosive,
    /// Multi-joint strength movements (push-ups, squats, lunges)
    Compound,
    /// Isometric holds and steady endurance work (planks, wall sits)
    StaticHold,
}

/// An exercise from the catalog
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ExerciseRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub target_areas: Vec<TargetArea>,
    /// 1 (easiest) to 5 (hardest)
    pub difficulty: u8,
    pub instructions: Vec<String>,
    #[serde(default)]
    pub categories: Vec<MovementCategory>,
    /// Performed once per side, so it expands into two intervals
    #[serde(default)]
    pub bilateral: bool,
    #[serde(default = "default_equipment")]
    pub equipment: String,
    #[serde(default)]
    pub animation_steps: Vec<String>,
}

fn default_equipment() -> String {
    "none".into()
}

impl ExerciseRecord {
    pub fn targets(&self, area: TargetArea) -> bool {
        self.target_areas.contains(&area)
    }

    pub fn has_category(&self, category: MovementCategory) -> bool {
        self.categories.contains(&category)
    }
}

/// The complete catalog of exercises, in catalog order
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub exercises: Vec<ExerciseRecord>,
}

// ============================================================================
// Workout Configuration and Output
// ============================================================================

/// What the user picked on the setup screen
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutConfig {
    pub duration_minutes: u32,
    pub target_area: TargetArea,
    pub goal: Goal,
    #[serde(default = "default_exercise_duration")]
    pub exercise_duration_seconds: u32,
}

fn default_exercise_duration() -> u32 {
    WorkoutConfig::DEFAULT_EXERCISE_DURATION_SECONDS
}

impl WorkoutConfig {
    pub const DURATION_OPTIONS_MINUTES: [u32; 4] = [3, 5, 10, 15];
    pub const EXERCISE_DURATION_OPTIONS_SECONDS: [u32; 3] = [45, 60, 75];
    pub const DEFAULT_EXERCISE_DURATION_SECONDS: u32 = 60;

    /// Check the config against the options offered to the user
    pub fn validate(&self) -> Result<()> {
        if !Self::DURATION_OPTIONS_MINUTES.contains(&self.duration_minutes) {
            return Err(Error::InvalidInput(format!(
                "duration must be one of {:?} minutes, got {}",
                Self::DURATION_OPTIONS_MINUTES,
                self.duration_minutes
            )));
        }
        if !Self::EXERCISE_DURATION_OPTIONS_SECONDS.contains(&self.exercise_duration_seconds) {
            return Err(Error::InvalidInput(format!(
                "exercise duration must be one of {:?} seconds, got {}",
                Self::EXERCISE_DURATION_OPTIONS_SECONDS,
                self.exercise_duration_seconds
            )));
        }
        Ok(())
    }
}

impl Default for WorkoutConfig {
    fn default() -> Self {
        Self {
            duration_minutes: 10,
            target_area: TargetArea::Abs,
            goal: Goal::Endurance,
            exercise_duration_seconds: Self::DEFAULT_EXERCISE_DURATION_SECONDS,
        }
    }
}

/// One timed work period followed by its rest period
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutInterval {
    pub exercise_id: String,
    pub name: String,
    pub description: String,
    pub work_duration_seconds: u32,
    pub rest_duration_seconds: u32,
    pub instructions: Vec<String>,
}

// ============================================================================
// Session, Progress and Library Types
// ============================================================================

/// A completed workout, as recorded in the session log
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkoutSession {
    pub id: Uuid,
    pub workout_id: Option<Uuid>,
    /// Planned session length in seconds
    pub duration_seconds: u32,
    pub exercises_completed: u32,
    pub calories_burned: Option<u32>,
    pub completed_at: DateTime<Utc>,
}

/// Running totals shown on the setup screen
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct UserProgress {
    pub workouts_completed: u32,
    pub total_minutes: u32,
    pub current_streak: u32,
    pub last_workout_at: Option<DateTime<Utc>>,
}

/// A generated workout kept for later
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SavedWorkout {
    pub id: Uuid,
    pub config: WorkoutConfig,
    pub intervals: Vec<WorkoutInterval>,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// All saved workouts, persisted as one JSON document
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct WorkoutLibrary {
    pub workouts: Vec<SavedWorkout>,
}

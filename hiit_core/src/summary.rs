//! End-of-workout summary and the session record built from it.

use crate::{Goal, TargetArea, WorkoutConfig, WorkoutInterval, WorkoutSession};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Calorie estimate per second of planned session time
pub const DEFAULT_CALORIES_PER_SECOND: f64 = 0.15;

/// Stats shown on the completion screen
#[derive(Clone, Debug, PartialEq)]
pub struct WorkoutSummary {
    pub duration_minutes: u32,
    pub target_area: TargetArea,
    pub goal: Goal,
    /// Planned session length; not the wall-clock time actually spent
    pub total_seconds: u32,
    pub exercises: u32,
    pub estimated_calories: u32,
}

impl WorkoutSummary {
    pub fn new(
        config: &WorkoutConfig,
        intervals: &[WorkoutInterval],
        calories_per_second: f64,
    ) -> Self {
        let total_seconds = config.duration_minutes * 60;
        Self {
            duration_minutes: config.duration_minutes,
            target_area: config.target_area,
            goal: config.goal,
            total_seconds,
            exercises: intervals.len() as u32,
            estimated_calories: (f64::from(total_seconds) * calories_per_second).round() as u32,
        }
    }

    /// "MM:SS" for the planned duration
    pub fn clock(&self) -> String {
        format!("{}:{:02}", self.total_seconds / 60, self.total_seconds % 60)
    }

    pub fn share_text(&self) -> String {
        format!(
            "Just completed a {}-minute {} workout focused on {}!",
            self.duration_minutes, self.target_area, self.goal
        )
    }

    /// The session record for the log
    pub fn to_session(&self, workout_id: Option<Uuid>, completed_at: DateTime<Utc>) -> WorkoutSession {
        WorkoutSession {
            id: Uuid::new_v4(),
            workout_id,
            duration_seconds: self.total_seconds,
            exercises_completed: self.exercises,
            calories_burned: Some(self.estimated_calories),
            completed_at,
        }
    }
}

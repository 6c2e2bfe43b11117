//! User progress: completed workouts, minutes trained and the current streak.
//!
//! Stored as a small JSON document that is rewritten after every workout.

use crate::store;
use crate::{Result, UserProgress, WorkoutSession};
use std::path::Path;

impl UserProgress {
    /// Load progress from a file
    ///
    /// Missing or corrupted files yield fresh (default) progress.
    pub fn load(path: &Path) -> Result<Self> {
        store::load_or_default(path, "progress")
    }

    /// Save progress atomically
    pub fn save(&self, path: &Path) -> Result<()> {
        store::save_atomic(self, path)
    }

    /// Load progress, modify it, and save it back
    pub fn update<F>(path: &Path, f: F) -> Result<Self>
    where
        F: FnOnce(&mut UserProgress) -> Result<()>,
    {
        let mut progress = Self::load(path)?;
        f(&mut progress)?;
        progress.save(path)?;
        Ok(progress)
    }

    /// Fold a completed session into the running totals
    ///
    /// Minutes are whole minutes of the session's planned length; every
    /// completed workout extends the streak.
    pub fn record_session(&mut self, session: &WorkoutSession) {
        self.workouts_completed += 1;
        self.total_minutes += session.duration_seconds / 60;
        self.current_streak += 1;
        self.last_workout_at = Some(session.completed_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn session(duration_seconds: u32) -> WorkoutSession {
        WorkoutSession {
            id: Uuid::new_v4(),
            workout_id: None,
            duration_seconds,
            exercises_completed: 5,
            calories_burned: None,
            completed_at: Utc::now(),
        }
    }

    #[test]
    fn test_record_session() {
        let mut progress = UserProgress::default();
        progress.record_session(&session(600));
        progress.record_session(&session(330));

        assert_eq!(progress.workouts_completed, 2);
        assert_eq!(progress.total_minutes, 15);
        assert_eq!(progress.current_streak, 2);
        assert!(progress.last_workout_at.is_some());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("progress.json");

        let mut progress = UserProgress::default();
        progress.record_session(&session(300));
        progress.save(&path).unwrap();

        let loaded = UserProgress::load(&path).unwrap();
        assert_eq!(loaded, progress);
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let progress = UserProgress::load(&path).unwrap();
        assert_eq!(progress, UserProgress::default());
    }

    #[test]
    fn test_update_pattern() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("progress.json");

        UserProgress::update(&path, |p| {
            p.record_session(&session(900));
            Ok(())
        })
        .unwrap();

        let loaded = UserProgress::load(&path).unwrap();
        assert_eq!(loaded.workouts_completed, 1);
        assert_eq!(loaded.total_minutes, 15);
    }

    #[test]
    fn test_corrupted_progress_returns_default() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("corrupted.json");
        std::fs::write(&path, "{ invalid json }").unwrap();

        let progress = UserProgress::load(&path).unwrap();
        assert_eq!(progress, UserProgress::default());
    }
}

//! Saved workouts and favorites.

use crate::store;
use crate::{Error, Result, SavedWorkout, WorkoutConfig, WorkoutInterval, WorkoutLibrary};
use chrono::{DateTime, Utc};
use std::path::Path;
use uuid::Uuid;

impl WorkoutLibrary {
    /// Load the library; missing or corrupted files yield an empty library
    pub fn load(path: &Path) -> Result<Self> {
        store::load_or_default(path, "workout library")
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        store::save_atomic(self, path)
    }

    /// Load the library, modify it, and save it back
    pub fn update<F, T>(path: &Path, f: F) -> Result<T>
    where
        F: FnOnce(&mut WorkoutLibrary) -> Result<T>,
    {
        let mut library = Self::load(path)?;
        let out = f(&mut library)?;
        library.save(path)?;
        Ok(out)
    }

    /// Keep a generated workout
    pub fn add(
        &mut self,
        config: WorkoutConfig,
        intervals: Vec<WorkoutInterval>,
        is_favorite: bool,
        completed_at: Option<DateTime<Utc>>,
    ) -> &SavedWorkout {
        let workout = SavedWorkout {
            id: Uuid::new_v4(),
            config,
            intervals,
            is_favorite,
            created_at: Utc::now(),
            completed_at,
        };
        tracing::debug!("Saved workout {} (favorite: {})", workout.id, is_favorite);
        self.workouts.push(workout);
        &self.workouts[self.workouts.len() - 1]
    }

    pub fn get(&self, id: Uuid) -> Option<&SavedWorkout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    /// Mark or unmark a saved workout as favorite
    pub fn set_favorite(&mut self, id: Uuid, is_favorite: bool) -> Result<&SavedWorkout> {
        let workout = self
            .workouts
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| Error::Library(format!("Workout {} not found", id)))?;
        workout.is_favorite = is_favorite;
        Ok(workout)
    }

    pub fn mark_completed(&mut self, id: Uuid, completed_at: DateTime<Utc>) -> Result<()> {
        let workout = self
            .workouts
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| Error::Library(format!("Workout {} not found", id)))?;
        workout.completed_at = Some(completed_at);
        Ok(())
    }

    /// Favorite workouts, newest first
    pub fn favorites(&self) -> Vec<&SavedWorkout> {
        let mut favorites: Vec<_> = self.workouts.iter().filter(|w| w.is_favorite).collect();
        favorites.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        favorites
    }
}

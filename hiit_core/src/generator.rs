//! Workout generator: turns a [`WorkoutConfig`] and a catalog into timed intervals.
//!
//! Stages, in order:
//! 1. Filter the catalog by target area (falling back to full-body)
//! 2. Derive pacing (work/rest seconds) and the slot budget from the goal
//! 3. Shuffle, then rank candidates by the goal's training priority
//! 4. Fill the slots with repetition and spacing limits
//! 5. Expand bilateral exercises, adjust rest per goal, zero the final rest
//!
//! The generator is total: degenerate inputs produce an empty workout.

use crate::{ExerciseRecord, Goal, MovementCategory, TargetArea, WorkoutConfig, WorkoutInterval};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

/// Minimum slot distance between two picks of the same exercise
const MIN_REPEAT_SPACING: usize = 3;

/// Maximum picks of one exercise outside the fallback path
const MAX_USES_PER_EXERCISE: u32 = 2;

pub(crate) const OTHER_SIDE_ID_SUFFIX: &str = "_other_side";

/// Work and base rest durations for one interval
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pacing {
    pub work_seconds: u32,
    pub base_rest_seconds: u32,
}

impl Pacing {
    /// Pacing for a goal; the work period is always the user's choice
    pub fn for_goal(goal: Goal, work_seconds: u32) -> Self {
        let base_rest_seconds = match goal {
            Goal::FatLoss => 10,
            Goal::Endurance => 15,
            Goal::Strength => 20,
        };

        Self {
            work_seconds,
            base_rest_seconds,
        }
    }

    /// Number of selection slots that fit in the session
    pub fn max_exercises(&self, duration_minutes: u32) -> usize {
        let interval_seconds = u64::from(self.work_seconds) + u64::from(self.base_rest_seconds);
        if interval_seconds == 0 {
            return 0;
        }
        let slots = u64::from(duration_minutes) * 60 / interval_seconds;
        usize::try_from(slots).unwrap_or(usize::MAX)
    }
}

/// Generate a workout using the thread-local RNG
pub fn generate_workout_random(
    config: &WorkoutConfig,
    catalog: &[ExerciseRecord],
) -> Vec<WorkoutInterval> {
    generate_workout(config, catalog, &mut rand::thread_rng())
}

/// Generate a reproducible workout from a seed
pub fn generate_workout_seeded(
    config: &WorkoutConfig,
    catalog: &[ExerciseRecord],
    seed: u64,
) -> Vec<WorkoutInterval> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_workout(config, catalog, &mut rng)
}

/// Generate the ordered interval list for a workout
///
/// The RNG is only used to shuffle the candidate pool. Whatever it yields,
/// the output keeps these guarantees:
/// - the last interval has zero rest
/// - outside the fallback path no exercise is picked more than twice, and
///   repeats are at least 3 slots apart
/// - a bilateral exercise is immediately followed by its other side
pub fn generate_workout<R: Rng + ?Sized>(
    config: &WorkoutConfig,
    catalog: &[ExerciseRecord],
    rng: &mut R,
) -> Vec<WorkoutInterval> {
    if config.exercise_duration_seconds == 0 {
        tracing::warn!("Exercise duration is zero, nothing to generate");
        return Vec::new();
    }

    let mut pool = filter_candidates(catalog, config.target_area);
    if pool.is_empty() {
        tracing::warn!(
            "No exercises available for {} (or full-body), returning empty workout",
            config.target_area
        );
        return Vec::new();
    }

    let pacing = Pacing::for_goal(config.goal, config.exercise_duration_seconds);
    let slots = pacing.max_exercises(config.duration_minutes);
    if slots == 0 {
        tracing::warn!(
            "{} minutes cannot fit a {}s + {}s interval",
            config.duration_minutes,
            pacing.work_seconds,
            pacing.base_rest_seconds
        );
        return Vec::new();
    }

    rank_candidates(&mut pool, config.goal, rng);
    let picks = select_exercises(&pool, slots);
    let intervals = build_intervals(&picks, config.goal, pacing);

    tracing::info!(
        "Generated {} intervals ({} slots from {} candidates) for {} min {} / {}",
        intervals.len(),
        slots,
        pool.len(),
        config.duration_minutes,
        config.target_area,
        config.goal
    );

    intervals
}

/// Exercises tagged with the area, or full-body exercises if there are none
fn filter_candidates(catalog: &[ExerciseRecord], area: TargetArea) -> Vec<&ExerciseRecord> {
    let matching: Vec<_> = catalog.iter().filter(|e| e.targets(area)).collect();
    if !matching.is_empty() {
        return matching;
    }

    tracing::info!("No exercises tagged {}, falling back to full-body", area);
    catalog
        .iter()
        .filter(|e| e.targets(TargetArea::FullBody))
        .collect()
}

/// Priority of an exercise for a goal (1 is picked first)
fn goal_rank(goal: Goal, exercise: &ExerciseRecord) -> u8 {
    match goal {
        Goal::FatLoss => {
            if exercise.has_category(MovementCategory::CardioExplosive) {
                1
            } else if exercise.difficulty >= 3 {
                2
            } else {
                3
            }
        }
        Goal::Strength => {
            if exercise.difficulty >= 4 {
                1
            } else if exercise.has_category(MovementCategory::Compound) {
                2
            } else {
                3
            }
        }
        Goal::Endurance => {
            if (2..=3).contains(&exercise.difficulty) {
                1
            } else if exercise.has_category(MovementCategory::StaticHold) {
                2
            } else {
                3
            }
        }
    }
}

/// Shuffle for variety, then stable-sort by goal priority
fn rank_candidates<R: Rng + ?Sized>(pool: &mut [&ExerciseRecord], goal: Goal, rng: &mut R) {
    pool.shuffle(rng);
    pool.sort_by_key(|e| goal_rank(goal, e));
}

/// Fill `slots` picks from the ranked pool
///
/// Per slot, the first rule that yields a candidate wins:
/// 1. an exercise not yet picked
/// 2. an exercise picked once, at least 3 slots ago
/// 3. an exercise picked fewer than twice, at least 3 slots ago
/// 4. `pool[slot % pool.len()]`, ignoring both limits
fn select_exercises<'a>(pool: &[&'a ExerciseRecord], slots: usize) -> Vec<&'a ExerciseRecord> {
    let mut picks = Vec::with_capacity(slots);
    if pool.is_empty() {
        return picks;
    }

    let mut use_counts: HashMap<&'a str, u32> = HashMap::new();
    let mut last_used: HashMap<&'a str, usize> = HashMap::new();

    for slot in 0..slots {
        let uses = |id: &str| use_counts.get(id).copied().unwrap_or(0);
        let spaced = |id: &str| {
            last_used
                .get(id)
                .map_or(true, |&last| slot - last >= MIN_REPEAT_SPACING)
        };

        let chosen = pool
            .iter()
            .position(|e| uses(&e.id) == 0)
            .or_else(|| {
                pool.iter()
                    .position(|e| uses(&e.id) == 1 && spaced(&e.id))
            })
            .or_else(|| {
                pool.iter()
                    .position(|e| uses(&e.id) < MAX_USES_PER_EXERCISE && spaced(&e.id))
            });

        let index = match chosen {
            Some(index) => index,
            None => {
                tracing::debug!("Slot {}: no spaced candidate left, cycling the pool", slot);
                slot % pool.len()
            }
        };

        let exercise: &'a ExerciseRecord = pool[index];
        *use_counts.entry(exercise.id.as_str()).or_insert(0) += 1;
        last_used.insert(exercise.id.as_str(), slot);
        tracing::debug!("Slot {}: {}", slot, exercise.id);
        picks.push(exercise);
    }

    picks
}

/// Rest after a picked exercise, adjusted for the goal
fn adjusted_rest(goal: Goal, exercise: &ExerciseRecord, slot: usize, base: u32) -> u32 {
    match goal {
        Goal::FatLoss if exercise.difficulty >= 4 => base.saturating_sub(5).max(5),
        Goal::Strength
            if exercise.difficulty >= 4 || exercise.has_category(MovementCategory::Compound) =>
        {
            base + 10
        }
        Goal::Endurance if slot % 2 == 1 => base + 5,
        _ => base,
    }
}

/// The synthesized second-side interval for a bilateral exercise
fn other_side_interval(exercise: &ExerciseRecord, pacing: Pacing) -> WorkoutInterval {
    let mut instructions = Vec::with_capacity(exercise.instructions.len() + 1);
    instructions.push("Switch to the other side".to_string());
    instructions.extend(exercise.instructions.iter().cloned());

    WorkoutInterval {
        exercise_id: format!("{}{}", exercise.id, OTHER_SIDE_ID_SUFFIX),
        name: format!("{} (Other Side)", exercise.name),
        description: format!("Now the other side. {}", exercise.description),
        work_duration_seconds: pacing.work_seconds,
        rest_duration_seconds: pacing.base_rest_seconds,
        instructions,
    }
}

/// Turn picks into intervals: expand bilateral, adjust rest, zero the last rest
fn build_intervals(
    picks: &[&ExerciseRecord],
    goal: Goal,
    pacing: Pacing,
) -> Vec<WorkoutInterval> {
    let bilateral_count = picks.iter().filter(|e| e.bilateral).count();
    let mut intervals = Vec::with_capacity(picks.len() + bilateral_count);

    for (slot, exercise) in picks.iter().enumerate() {
        intervals.push(WorkoutInterval {
            exercise_id: exercise.id.clone(),
            name: exercise.name.clone(),
            description: exercise.description.clone(),
            work_duration_seconds: pacing.work_seconds,
            rest_duration_seconds: adjusted_rest(goal, exercise, slot, pacing.base_rest_seconds),
            instructions: exercise.instructions.clone(),
        });

        if exercise.bilateral {
            intervals.push(other_side_interval(exercise, pacing));
        }
    }

    if let Some(last) = intervals.last_mut() {
        last.rest_duration_seconds = 0;
    }

    intervals
}

/// Whether an interval is the synthesized second side of a bilateral exercise
pub fn is_other_side(interval: &WorkoutInterval) -> bool {
    interval.exercise_id.ends_with(OTHER_SIDE_ID_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_default_catalog;

    fn exercise(id: &str, areas: &[TargetArea], difficulty: u8) -> ExerciseRecord {
        ExerciseRecord {
            id: id.into(),
            name: id.into(),
            description: format!("{} description", id),
            target_areas: areas.to_vec(),
            difficulty,
            instructions: vec![format!("Do {}", id)],
            categories: vec![],
            bilateral: false,
            equipment: "none".into(),
            animation_steps: vec![],
        }
    }

    fn pool_of(n: usize) -> Vec<ExerciseRecord> {
        (0..n)
            .map(|i| exercise(&format!("ex{}", i), &[TargetArea::Abs], 3))
            .collect()
    }

    fn config(minutes: u32, area: TargetArea, goal: Goal, work: u32) -> WorkoutConfig {
        WorkoutConfig {
            duration_minutes: minutes,
            target_area: area,
            goal,
            exercise_duration_seconds: work,
        }
    }

    /// Selection ids, with synthesized second sides removed
    fn selection_ids(intervals: &[WorkoutInterval]) -> Vec<&str> {
        intervals
            .iter()
            .filter(|i| !is_other_side(i))
            .map(|i| i.exercise_id.as_str())
            .collect()
    }

    fn assert_repeat_limits(ids: &[&str]) {
        let mut seen: HashMap<&str, Vec<usize>> = HashMap::new();
        for (slot, id) in ids.iter().enumerate() {
            seen.entry(id).or_default().push(slot);
        }
        for (id, slots) in seen {
            assert!(slots.len() <= 2, "{} picked {} times", id, slots.len());
            for pair in slots.windows(2) {
                assert!(
                    pair[1] - pair[0] >= MIN_REPEAT_SPACING,
                    "{} repeated after {} slots",
                    id,
                    pair[1] - pair[0]
                );
            }
        }
    }

    #[test]
    fn test_pacing_table() {
        assert_eq!(Pacing::for_goal(Goal::FatLoss, 60).base_rest_seconds, 10);
        assert_eq!(Pacing::for_goal(Goal::Endurance, 60).base_rest_seconds, 15);
        assert_eq!(Pacing::for_goal(Goal::Strength, 45).base_rest_seconds, 20);
        assert_eq!(Pacing::for_goal(Goal::Strength, 45).work_seconds, 45);
    }

    #[test]
    fn test_max_exercises() {
        let pacing = Pacing::for_goal(Goal::FatLoss, 60);
        assert_eq!(pacing.max_exercises(10), 8);
        assert_eq!(pacing.max_exercises(1), 0);
        assert_eq!(Pacing::for_goal(Goal::Strength, 75).max_exercises(3), 1);
    }

    #[test]
    fn test_max_exercises_huge_values() {
        let pacing = Pacing::for_goal(Goal::FatLoss, 60);
        assert_eq!(pacing.max_exercises(80_000_000), 68_571_428);

        let pacing = Pacing {
            work_seconds: u32::MAX,
            base_rest_seconds: u32::MAX,
        };
        assert_eq!(pacing.max_exercises(u32::MAX), 30);
    }

    #[test]
    fn test_fat_loss_ten_minutes_abs() {
        let catalog = build_default_catalog();
        let cfg = config(10, TargetArea::Abs, Goal::FatLoss, 60);

        let intervals = generate_workout_seeded(&cfg, &catalog.exercises, 7);

        assert_eq!(selection_ids(&intervals).len(), 8);
        assert!(intervals.iter().all(|i| i.work_duration_seconds == 60));
        assert_eq!(intervals.last().unwrap().rest_duration_seconds, 0);
        // No abs exercise is difficulty 4+, so every other rest is the base
        for interval in &intervals[..intervals.len() - 1] {
            assert_eq!(interval.rest_duration_seconds, 10);
        }
    }

    #[test]
    fn test_terminal_rest_is_zero_for_every_option() {
        let catalog = build_default_catalog();
        for seed in 0..10 {
            for area in TargetArea::all() {
                for goal in Goal::all() {
                    for minutes in WorkoutConfig::DURATION_OPTIONS_MINUTES {
                        let cfg = config(minutes, *area, *goal, 45);
                        let intervals = generate_workout_seeded(&cfg, &catalog.exercises, seed);
                        assert!(!intervals.is_empty());
                        assert_eq!(intervals.last().unwrap().rest_duration_seconds, 0);
                        assert!(intervals.iter().all(|i| i.work_duration_seconds == 45));
                    }
                }
            }
        }
    }

    #[test]
    fn test_repeat_limits_hold_across_seeds() {
        let catalog = build_default_catalog();
        // 10 minutes at 60s leaves at most 8 slots, which every area's pool covers
        for seed in 0..50 {
            for area in TargetArea::all() {
                for goal in Goal::all() {
                    let cfg = config(10, *area, *goal, 60);
                    let intervals = generate_workout_seeded(&cfg, &catalog.exercises, seed);
                    assert_repeat_limits(&selection_ids(&intervals));
                }
            }
        }
    }

    #[test]
    fn test_large_pool_never_repeats() {
        let catalog = pool_of(20);
        let cfg = config(15, TargetArea::Abs, Goal::FatLoss, 45);

        let intervals = generate_workout_seeded(&cfg, &catalog, 3);
        let ids = selection_ids(&intervals);

        // 900 / (45 + 10) = 16 slots, all distinct
        assert_eq!(ids.len(), 16);
        let unique: std::collections::HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), 16);
    }

    #[test]
    fn test_small_pool_falls_back_to_cycling() {
        let catalog = pool_of(2);
        let cfg = config(10, TargetArea::Abs, Goal::FatLoss, 60);

        let intervals = generate_workout_seeded(&cfg, &catalog, 11);

        assert_eq!(intervals.len(), 8);
        assert_eq!(intervals.last().unwrap().rest_duration_seconds, 0);
    }

    #[test]
    fn test_select_exercises_spacing_with_four_candidates() {
        let records = pool_of(4);
        let pool: Vec<&ExerciseRecord> = records.iter().collect();

        let picks = select_exercises(&pool, 8);
        let ids: Vec<&str> = picks.iter().map(|e| e.id.as_str()).collect();

        assert_eq!(ids, vec!["ex0", "ex1", "ex2", "ex3", "ex0", "ex1", "ex2", "ex3"]);
    }

    #[test]
    fn test_select_exercises_fallback_uses_slot_modulo() {
        let records = pool_of(2);
        let pool: Vec<&ExerciseRecord> = records.iter().collect();

        let picks = select_exercises(&pool, 5);
        let ids: Vec<&str> = picks.iter().map(|e| e.id.as_str()).collect();

        // Slots 2, 3 and 4 have no spaced candidate left
        assert_eq!(ids, vec!["ex0", "ex1", "ex0", "ex1", "ex0"]);
    }

    #[test]
    fn test_select_exercises_empty_pool() {
        assert!(select_exercises(&[], 5).is_empty());
    }

    #[test]
    fn test_bilateral_followed_by_other_side() {
        let mut catalog = vec![
            exercise("squat", &[TargetArea::Legs], 3),
            exercise("lunge", &[TargetArea::Legs], 3),
            exercise("calf", &[TargetArea::Legs], 2),
        ];
        let mut bridge = exercise("bridge", &[TargetArea::Legs], 3);
        bridge.bilateral = true;
        catalog.push(bridge);

        for seed in 0..20 {
            let cfg = config(5, TargetArea::Legs, Goal::Endurance, 45);
            let intervals = generate_workout_seeded(&cfg, &catalog, seed);

            let bridges: Vec<usize> = intervals
                .iter()
                .enumerate()
                .filter(|(_, i)| i.exercise_id == "bridge")
                .map(|(idx, _)| idx)
                .collect();
            assert!(!bridges.is_empty(), "pool of 4 fills 5 slots, bridge must appear");

            for idx in bridges {
                let sibling = &intervals[idx + 1];
                assert_eq!(sibling.exercise_id, "bridge_other_side");
                assert!(sibling.name.contains("Other Side"));
                assert_ne!(sibling.description, intervals[idx].description);
                assert_eq!(sibling.work_duration_seconds, 45);
            }
            assert_repeat_limits(&selection_ids(&intervals));
        }
    }

    #[test]
    fn test_empty_when_no_area_or_full_body_match() {
        let catalog = vec![
            exercise("crunch", &[TargetArea::Abs], 2),
            exercise("squat", &[TargetArea::Legs], 3),
        ];
        let cfg = config(10, TargetArea::UpperBody, Goal::Strength, 60);

        assert!(generate_workout_seeded(&cfg, &catalog, 1).is_empty());
        assert!(generate_workout_seeded(&cfg, &[], 1).is_empty());
    }

    #[test]
    fn test_falls_back_to_full_body() {
        let catalog = vec![
            exercise("crunch", &[TargetArea::Abs], 2),
            exercise("burpee", &[TargetArea::FullBody], 4),
        ];
        let cfg = config(3, TargetArea::UpperBody, Goal::FatLoss, 60);

        let intervals = generate_workout_seeded(&cfg, &catalog, 1);
        assert!(!intervals.is_empty());
        assert!(intervals.iter().all(|i| i.exercise_id == "burpee"));
    }

    #[test]
    fn test_zero_budget_is_empty() {
        let catalog = pool_of(5);
        let cfg = config(1, TargetArea::Abs, Goal::Strength, 75);
        assert!(generate_workout_seeded(&cfg, &catalog, 1).is_empty());

        let cfg = config(10, TargetArea::Abs, Goal::Strength, 0);
        assert!(generate_workout_seeded(&cfg, &catalog, 1).is_empty());
    }

    #[test]
    fn test_same_seed_same_workout() {
        let catalog = build_default_catalog();
        let cfg = config(15, TargetArea::FullBody, Goal::Strength, 60);
        assert_eq!(
            generate_workout_seeded(&cfg, &catalog.exercises, 42),
            generate_workout_seeded(&cfg, &catalog.exercises, 42)
        );
    }

    #[test]
    fn test_random_generation_keeps_invariants() {
        crate::logging::init_test();
        let catalog = build_default_catalog();
        let cfg = config(15, TargetArea::Legs, Goal::Endurance, 45);
        for _ in 0..20 {
            let intervals = generate_workout_random(&cfg, &catalog.exercises);
            assert_eq!(intervals.last().unwrap().rest_duration_seconds, 0);
            assert_repeat_limits(&selection_ids(&intervals));
        }
    }

    #[test]
    fn test_fat_loss_ranks_cardio_first() {
        let mut burpee = exercise("burpee", &[TargetArea::Abs], 4);
        burpee.categories = vec![MovementCategory::CardioExplosive];
        let records = vec![
            exercise("easy", &[TargetArea::Abs], 1),
            exercise("hard", &[TargetArea::Abs], 3),
            burpee,
        ];

        for seed in 0..10 {
            let mut pool: Vec<&ExerciseRecord> = records.iter().collect();
            rank_candidates(&mut pool, Goal::FatLoss, &mut StdRng::seed_from_u64(seed));
            let ids: Vec<&str> = pool.iter().map(|e| e.id.as_str()).collect();
            assert_eq!(ids, vec!["burpee", "hard", "easy"]);
        }
    }

    #[test]
    fn test_strength_and_endurance_ranks() {
        let mut pushup = exercise("pushup", &[TargetArea::UpperBody], 3);
        pushup.categories = vec![MovementCategory::Compound];
        let mut plank = exercise("plank", &[TargetArea::Abs], 1);
        plank.categories = vec![MovementCategory::StaticHold];
        let diamond = exercise("diamond", &[TargetArea::UpperBody], 4);
        let circles = exercise("circles", &[TargetArea::UpperBody], 1);

        assert_eq!(goal_rank(Goal::Strength, &diamond), 1);
        assert_eq!(goal_rank(Goal::Strength, &pushup), 2);
        assert_eq!(goal_rank(Goal::Strength, &circles), 3);

        assert_eq!(goal_rank(Goal::Endurance, &pushup), 1);
        assert_eq!(goal_rank(Goal::Endurance, &plank), 2);
        assert_eq!(goal_rank(Goal::Endurance, &diamond), 3);
    }

    #[test]
    fn test_rest_adjustments() {
        let hard = exercise("hard", &[TargetArea::Abs], 4);
        let mut compound = exercise("compound", &[TargetArea::Abs], 2);
        compound.categories = vec![MovementCategory::Compound];
        let easy = exercise("easy", &[TargetArea::Abs], 2);

        assert_eq!(adjusted_rest(Goal::FatLoss, &hard, 0, 10), 5);
        assert_eq!(adjusted_rest(Goal::FatLoss, &hard, 0, 8), 5);
        assert_eq!(adjusted_rest(Goal::FatLoss, &easy, 0, 10), 10);

        assert_eq!(adjusted_rest(Goal::Strength, &hard, 0, 20), 30);
        assert_eq!(adjusted_rest(Goal::Strength, &compound, 0, 20), 30);
        assert_eq!(adjusted_rest(Goal::Strength, &easy, 0, 20), 20);

        assert_eq!(adjusted_rest(Goal::Endurance, &hard, 0, 15), 15);
        assert_eq!(adjusted_rest(Goal::Endurance, &hard, 1, 15), 20);
        assert_eq!(adjusted_rest(Goal::Endurance, &easy, 2, 15), 15);
    }

    #[test]
    fn test_other_side_keeps_base_rest() {
        let mut bridge = exercise("bridge", &[TargetArea::Legs], 4);
        bridge.bilateral = true;
        bridge.categories = vec![MovementCategory::Compound];
        let squat = exercise("squat", &[TargetArea::Legs], 2);
        let pacing = Pacing::for_goal(Goal::Strength, 60);

        let intervals = build_intervals(&[&bridge, &squat], Goal::Strength, pacing);

        assert_eq!(intervals.len(), 3);
        assert_eq!(intervals[0].rest_duration_seconds, 30);
        assert_eq!(intervals[1].exercise_id, "bridge_other_side");
        assert_eq!(intervals[1].rest_duration_seconds, 20);
        assert_eq!(intervals[1].instructions[0], "Switch to the other side");
        assert_eq!(intervals[2].rest_duration_seconds, 0);
    }

    #[test]
    fn test_trailing_other_side_gets_zero_rest() {
        let mut bridge = exercise("bridge", &[TargetArea::Legs], 3);
        bridge.bilateral = true;
        let pacing = Pacing::for_goal(Goal::Endurance, 45);

        let intervals = build_intervals(&[&bridge], Goal::Endurance, pacing);

        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals[0].rest_duration_seconds, 15);
        assert_eq!(intervals[1].rest_duration_seconds, 0);
        assert!(is_other_side(&intervals[1]));
    }
}

//! Default exercise catalog and catalog loading.
//!
//! The built-in catalog holds the bodyweight exercises offered on the setup
//! screen. Each record is pre-tagged with its [`MovementCategory`] set and
//! bilateral flag so the generator never has to look at display names.

use crate::types::*;
use crate::generator::OTHER_SIDE_ID_SUFFIX;
use crate::{Error, Result};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::Path;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Builds the default catalog from the seed table
pub fn build_default_catalog() -> Catalog {
    Catalog {
        exercises: SEED_EXERCISES.iter().map(ExerciseRecord::from).collect(),
    }
}

// ============================================================================
// Name classification
// ============================================================================

/// Name fragments that mark a movement as cardio/explosive
const CARDIO_EXPLOSIVE_KEYWORDS: &[&str] = &["Burpees", "Mountain Climbers", "Jump", "High Knees"];

/// Name fragments that mark a compound strength movement
const COMPOUND_KEYWORDS: &[&str] = &["Push-ups", "Squats", "Lunges", "Pike"];

/// Name fragments that mark a static hold or endurance movement
const STATIC_HOLD_KEYWORDS: &[&str] = &["Plank", "Wall Sit", "Calf Raises"];

/// Exercises performed one side at a time
const BILATERAL_NAMES: &[&str] = &["Single Leg Glute Bridges"];

/// Derive category tags from an exercise name
///
/// Only used for catalogs that arrive without explicit tags.
pub fn infer_categories(name: &str) -> Vec<MovementCategory> {
    let table = [
        (MovementCategory::CardioExplosive, CARDIO_EXPLOSIVE_KEYWORDS),
        (MovementCategory::Compound, COMPOUND_KEYWORDS),
        (MovementCategory::StaticHold, STATIC_HOLD_KEYWORDS),
    ];

    table
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| name.contains(k)))
        .map(|(category, _)| *category)
        .collect()
}

impl ExerciseRecord {
    /// Fill in categories and the bilateral flag from the name table
    ///
    /// Explicit tags win: categories are only inferred when none are set.
    pub fn with_inferred_tags(mut self) -> Self {
        if self.categories.is_empty() {
            self.categories = infer_categories(&self.name);
        }
        if !self.bilateral {
            self.bilateral = BILATERAL_NAMES.contains(&self.name.as_str());
        }
        self
    }
}

// ============================================================================
// Catalog operations
// ============================================================================

impl Catalog {
    pub fn from_records(exercises: Vec<ExerciseRecord>) -> Self {
        Self { exercises }
    }

    /// Load a catalog from a JSON array of exercise records
    ///
    /// Records without tags get them inferred from their names. The loaded
    /// catalog must pass [`Catalog::validate`].
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let records: Vec<ExerciseRecord> = serde_json::from_str(&contents)?;
        let catalog = Self::from_records(
            records
                .into_iter()
                .map(ExerciseRecord::with_inferred_tags)
                .collect(),
        );

        let errors = catalog.validate();
        if !errors.is_empty() {
            return Err(Error::CatalogValidation(errors.join("; ")));
        }

        tracing::info!(
            "Loaded {} exercises from {:?}",
            catalog.exercises.len(),
            path
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ExerciseRecord> {
        self.exercises.iter().find(|e| e.id == id)
    }

    /// Exercises tagged with the given target area, in catalog order
    pub fn by_target_area(&self, area: TargetArea) -> Vec<&ExerciseRecord> {
        self.exercises.iter().filter(|e| e.targets(area)).collect()
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut seen_ids = HashSet::new();

        for exercise in &self.exercises {
            let id = &exercise.id;
            if id.is_empty() {
                errors.push(format!("Exercise '{}' has empty ID", exercise.name));
            } else if !seen_ids.insert(id.as_str()) {
                errors.push(format!("Duplicate exercise ID '{}'", id));
            }
            if id.ends_with(OTHER_SIDE_ID_SUFFIX) {
                errors.push(format!(
                    "Exercise ID '{}' uses the reserved suffix '{}'",
                    id, OTHER_SIDE_ID_SUFFIX
                ));
            }
            if exercise.name.is_empty() {
                errors.push(format!("Exercise '{}' has empty name", id));
            }
            if !(1..=5).contains(&exercise.difficulty) {
                errors.push(format!(
                    "Exercise '{}': difficulty {} outside 1-5",
                    id, exercise.difficulty
                ));
            }
            if exercise.target_areas.is_empty() {
                errors.push(format!("Exercise '{}' has no target areas", id));
            }
            if exercise.instructions.is_empty() {
                errors.push(format!("Exercise '{}' has no instructions", id));
            }
        }

        errors
    }
}

// ============================================================================
// Seed data
// ============================================================================

struct SeedExercise {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    target_areas: &'static [TargetArea],
    difficulty: u8,
    equipment: &'static str,
    categories: &'static [MovementCategory],
    bilateral: bool,
    instructions: &'static [&'static str],
    animation_steps: &'static [&'static str],
}

impl From<&SeedExercise> for ExerciseRecord {
    fn from(seed: &SeedExercise) -> Self {
        ExerciseRecord {
            id: seed.id.into(),
            name: seed.name.into(),
            description: seed.description.into(),
            target_areas: seed.target_areas.to_vec(),
            difficulty: seed.difficulty,
            instructions: seed.instructions.iter().map(|s| s.to_string()).collect(),
            categories: seed.categories.to_vec(),
            bilateral: seed.bilateral,
            equipment: seed.equipment.into(),
            animation_steps: seed.animation_steps.iter().map(|s| s.to_string()).collect(),
        }
    }
}

const SEED_EXERCISES: &[SeedExercise] = &[
    SeedExercise {
        id: "burpees",
        name: "Burpees",
        description: "Start standing, squat down, kick back to plank, push-up, jump feet back, jump up with arms overhead.",
        target_areas: &[TargetArea::FullBody],
        difficulty: 4,
        equipment: "none",
        categories: &[MovementCategory::CardioExplosive],
        bilateral: false,
        instructions: &[
            "Start in standing position",
            "Squat down and place hands on floor",
            "Jump feet back to plank",
            "Do a push-up",
            "Jump feet back to squat",
            "Jump up with arms overhead",
        ],
        animation_steps: &[
            "Standing",
            "Squat down",
            "Plank position",
            "Push-up",
            "Return to squat",
            "Jump up",
        ],
    },
    SeedExercise {
        id: "mountain_climbers",
        name: "Mountain Climbers",
        description: "Start in plank position. Bring your right knee to your chest, then quickly switch legs. Keep your core tight.",
        target_areas: &[TargetArea::FullBody, TargetArea::Abs],
        difficulty: 3,
        equipment: "none",
        categories: &[MovementCategory::CardioExplosive],
        bilateral: false,
        instructions: &[
            "Start in plank position",
            "Bring right knee to chest",
            "Quickly switch to left knee",
            "Maintain plank position",
            "Keep core engaged",
            "Maintain steady rhythm",
        ],
        animation_steps: &[
            "Plank position",
            "Right knee to chest",
            "Return to plank",
            "Left knee to chest",
            "Return to plank",
            "Continue alternating",
        ],
    },
    SeedExercise {
        id: "jumping_jacks",
        name: "Jumping Jacks",
        description: "Stand with feet together, jump while spreading legs and raising arms overhead, then jump back to start.",
        target_areas: &[TargetArea::FullBody],
        difficulty: 2,
        equipment: "none",
        categories: &[MovementCategory::CardioExplosive],
        bilateral: false,
        instructions: &[
            "Start with feet together",
            "Jump while spreading legs",
            "Raise arms overhead",
            "Jump back to starting position",
            "Keep knees soft",
            "Maintain steady rhythm",
        ],
        animation_steps: &[
            "Feet together, arms down",
            "Jump legs apart, arms up",
            "Return to start",
            "Repeat motion",
            "Keep rhythm",
            "Stay light on feet",
        ],
    },
    SeedExercise {
        id: "plank_hold",
        name: "Plank Hold",
        description: "Hold a straight plank position, keeping your core tight and back straight. Avoid letting hips sag.",
        target_areas: &[TargetArea::Abs, TargetArea::FullBody],
        difficulty: 3,
        equipment: "none",
        categories: &[MovementCategory::StaticHold],
        bilateral: false,
        instructions: &[
            "Start in push-up position",
            "Keep body straight",
            "Engage core muscles",
            "Don't let hips sag",
            "Breathe normally",
            "Hold position",
        ],
        animation_steps: &[
            "Push-up position",
            "Lower to forearms",
            "Keep body straight",
            "Engage core",
            "Hold steady",
            "Breathe normally",
        ],
    },
    SeedExercise {
        id: "bicycle_crunches",
        name: "Bicycle Crunches",
        description: "Lie on your back, bring opposite elbow to knee in a cycling motion while keeping other leg straight.",
        target_areas: &[TargetArea::Abs, TargetArea::FullBody],
        difficulty: 3,
        equipment: "none",
        categories: &[],
        bilateral: false,
        instructions: &[
            "Lie on back with hands behind head",
            "Lift shoulders off ground",
            "Bring right elbow to left knee",
            "Switch to left elbow to right knee",
            "Keep alternating",
            "Don't pull on neck",
        ],
        animation_steps: &[
            "Lie on back",
            "Hands behind head",
            "Right elbow to left knee",
            "Switch sides",
            "Left elbow to right knee",
            "Continue cycling motion",
        ],
    },
    SeedExercise {
        id: "vertical_leg_crunch",
        name: "Vertical Leg Crunch",
        description: "Legs extended vertically, crunch upper body toward legs for intense ab workout.",
        target_areas: &[TargetArea::Abs, TargetArea::FullBody],
        difficulty: 3,
        equipment: "none",
        categories: &[],
        bilateral: false,
        instructions: &[
            "Lie on back",
            "Extend legs straight up",
            "Hands behind head",
            "Crunch upper body toward legs",
            "Keep legs vertical",
            "Focus on upper abs",
        ],
        animation_steps: &[
            "Lie flat on back",
            "Legs straight up",
            "Hands behind head",
            "Crunch up toward legs",
            "Hold briefly",
            "Lower with control",
        ],
    },
    SeedExercise {
        id: "russian_twists",
        name: "Russian Twists",
        description: "Sit with knees bent, lean back slightly and rotate your torso from side to side.",
        target_areas: &[TargetArea::Abs, TargetArea::FullBody],
        difficulty: 3,
        equipment: "none",
        categories: &[],
        bilateral: false,
        instructions: &[
            "Sit with knees bent",
            "Lean back slightly",
            "Lift feet off ground",
            "Rotate torso left and right",
            "Keep chest up",
            "Control the movement",
        ],
        animation_steps: &[
            "Sit with knees bent",
            "Lean back",
            "Lift feet up",
            "Twist to right",
            "Twist to left",
            "Keep alternating",
        ],
    },
    SeedExercise {
        id: "dead_bug",
        name: "Dead Bug",
        description: "Lie on back with arms up and knees bent. Lower opposite arm and leg while keeping back flat.",
        target_areas: &[TargetArea::Abs, TargetArea::FullBody],
        difficulty: 2,
        equipment: "none",
        categories: &[],
        bilateral: false,
        instructions: &[
            "Lie on back",
            "Arms up, knees bent at 90 degrees",
            "Lower right arm and left leg",
            "Return to start",
            "Switch sides",
            "Keep back pressed to floor",
        ],
        animation_steps: &[
            "Lie on back",
            "Arms up, knees bent",
            "Lower right arm, left leg",
            "Return to start",
            "Lower left arm, right leg",
            "Keep back flat",
        ],
    },
    SeedExercise {
        id: "jump_squats",
        name: "Jump Squats",
        description: "Perform a squat then explode up into a jump, landing softly back into squat position.",
        target_areas: &[TargetArea::Legs, TargetArea::FullBody],
        difficulty: 4,
        equipment: "none",
        categories: &[MovementCategory::CardioExplosive, MovementCategory::Compound],
        bilateral: false,
        instructions: &[
            "Start in squat position",
            "Lower into deep squat",
            "Explode up into jump",
            "Land softly",
            "Immediately go into next squat",
            "Keep chest up",
        ],
        animation_steps: &[
            "Squat position",
            "Lower deep squat",
            "Explode up jumping",
            "Land softly",
            "Return to squat",
            "Repeat motion",
        ],
    },
    SeedExercise {
        id: "lunges",
        name: "Lunges",
        description: "Step forward into a lunge position, lower back knee toward ground, then push back to start.",
        target_areas: &[TargetArea::Legs, TargetArea::FullBody],
        difficulty: 3,
        equipment: "none",
        categories: &[MovementCategory::Compound],
        bilateral: false,
        instructions: &[
            "Stand with feet hip-width apart",
            "Step forward with right foot",
            "Lower back knee toward ground",
            "Push through front heel to return",
            "Alternate legs",
            "Keep torso upright",
        ],
        animation_steps: &[
            "Stand hip-width apart",
            "Step forward",
            "Lower back knee",
            "Push back to start",
            "Switch legs",
            "Keep torso upright",
        ],
    },
    SeedExercise {
        id: "wall_sit",
        name: "Wall Sit",
        description: "Lean against wall with thighs parallel to ground, hold position with back flat against wall.",
        target_areas: &[TargetArea::Legs, TargetArea::FullBody],
        difficulty: 3,
        equipment: "wall",
        categories: &[MovementCategory::StaticHold],
        bilateral: false,
        instructions: &[
            "Stand with back against wall",
            "Slide down until thighs parallel",
            "Keep back flat against wall",
            "Don't let knees go past toes",
            "Hold position",
            "Breathe normally",
        ],
        animation_steps: &[
            "Stand against wall",
            "Slide down slowly",
            "Thighs parallel",
            "Hold position",
            "Keep back flat",
            "Breathe steadily",
        ],
    },
    SeedExercise {
        id: "single_leg_glute_bridges",
        name: "Single Leg Glute Bridges",
        description: "Lie on back, lift one leg, push through heel of planted foot to lift hips up.",
        target_areas: &[TargetArea::Legs, TargetArea::FullBody],
        difficulty: 3,
        equipment: "none",
        categories: &[],
        bilateral: true,
        instructions: &[
            "Lie on back with knees bent",
            "Lift one leg up",
            "Push through planted heel",
            "Lift hips up",
            "Squeeze glutes at top",
            "Lower slowly",
        ],
        animation_steps: &[
            "Lie on back",
            "Lift one leg",
            "Push through heel",
            "Lift hips up",
            "Squeeze glutes",
            "Lower slowly",
        ],
    },
    SeedExercise {
        id: "jump_lunges",
        name: "Jump Lunges",
        description: "Alternate lunges with explosive jumps between each leg switch for high-intensity cardio.",
        target_areas: &[TargetArea::Legs, TargetArea::FullBody],
        difficulty: 4,
        equipment: "none",
        categories: &[MovementCategory::CardioExplosive, MovementCategory::Compound],
        bilateral: false,
        instructions: &[
            "Start in lunge position",
            "Jump explosively up",
            "Switch legs in mid-air",
            "Land in opposite lunge",
            "Repeat alternating",
            "Keep chest up",
        ],
        animation_steps: &[
            "Lunge position",
            "Jump explosively",
            "Switch legs mid-air",
            "Land opposite lunge",
            "Continue alternating",
            "Control landings",
        ],
    },
    SeedExercise {
        id: "side_lunges",
        name: "Side Lunges",
        description: "Step to one side into a deep lunge, then return to center. Great for inner thighs and lateral movement.",
        target_areas: &[TargetArea::Legs, TargetArea::FullBody],
        difficulty: 3,
        equipment: "none",
        categories: &[MovementCategory::Compound],
        bilateral: false,
        instructions: &[
            "Stand with feet hip-width apart",
            "Step wide to right side",
            "Lower into side lunge",
            "Push through right heel to return",
            "Alternate sides",
            "Keep chest up",
        ],
        animation_steps: &[
            "Stand hip-width apart",
            "Step wide to side",
            "Lower into side lunge",
            "Push back to center",
            "Switch sides",
            "Control movement",
        ],
    },
    SeedExercise {
        id: "calf_raises",
        name: "Calf Raises",
        description: "Rise up on toes to work calf muscles. For more challenge, try doing it on one leg and alternating.",
        target_areas: &[TargetArea::Legs, TargetArea::FullBody],
        difficulty: 1,
        equipment: "none",
        categories: &[MovementCategory::StaticHold],
        bilateral: false,
        instructions: &[
            "Stand with feet hip-width apart",
            "Rise up on your toes",
            "Hold briefly at the top",
            "Lower slowly back down",
            "Keep core engaged",
            "For challenge: alternate single leg",
        ],
        animation_steps: &[
            "Stand tall",
            "Rise up on toes",
            "Hold at the top",
            "Lower with control",
            "Repeat motion",
            "Keep balance",
        ],
    },
    SeedExercise {
        id: "kickbacks",
        name: "Kickbacks",
        description: "Standing glute exercise that targets the posterior chain. Kick one leg back while maintaining balance and core stability.",
        target_areas: &[TargetArea::Legs, TargetArea::FullBody],
        difficulty: 3,
        equipment: "none",
        categories: &[],
        bilateral: false,
        instructions: &[
            "Stand tall with feet hip-width apart",
            "Shift weight to one leg",
            "Kick the other leg straight back",
            "Squeeze glutes at the top",
            "Return to starting position",
            "Alternate legs",
        ],
        animation_steps: &[
            "Stand with balance",
            "Kick leg straight back",
            "Squeeze glutes",
            "Return controlled",
            "Switch legs",
            "Maintain posture",
        ],
    },
    SeedExercise {
        id: "push_ups",
        name: "Push-ups",
        description: "Start in plank position, lower chest to ground, push back up to start. Modify on knees if needed.",
        target_areas: &[TargetArea::UpperBody, TargetArea::FullBody],
        difficulty: 3,
        equipment: "none",
        categories: &[MovementCategory::Compound],
        bilateral: false,
        instructions: &[
            "Start in plank position",
            "Lower chest toward ground",
            "Keep body straight",
            "Push back up",
            "Don't let hips sag",
            "Modify on knees if needed",
        ],
        animation_steps: &[
            "Plank position",
            "Lower chest down",
            "Keep body straight",
            "Push back up",
            "Control movement",
            "Repeat motion",
        ],
    },
    SeedExercise {
        id: "plank_with_arm_lifts",
        name: "Plank with Arm Lifts",
        description: "Hold plank position and alternate lifting each arm forward while keeping body stable and core engaged.",
        target_areas: &[TargetArea::UpperBody],
        difficulty: 3,
        equipment: "none",
        categories: &[MovementCategory::StaticHold],
        bilateral: false,
        instructions: &[
            "Start in plank position",
            "Keep core tight",
            "Lift right arm forward",
            "Hold briefly",
            "Return to plank",
            "Alternate with left arm",
        ],
        animation_steps: &[
            "Plank position",
            "Lift right arm",
            "Hold steady",
            "Return to plank",
            "Lift left arm",
            "Keep alternating",
        ],
    },
    SeedExercise {
        id: "diamond_push_ups",
        name: "Diamond Push-ups",
        description: "Push-ups with hands forming diamond shape, targets triceps. Modify on knees if needed.",
        target_areas: &[TargetArea::UpperBody],
        difficulty: 4,
        equipment: "none",
        categories: &[MovementCategory::Compound],
        bilateral: false,
        instructions: &[
            "Form diamond with hands",
            "Start in plank position",
            "Lower chest to diamond",
            "Keep elbows close to body",
            "Push back up",
            "Modify on knees if needed",
        ],
        animation_steps: &[
            "Diamond hand position",
            "Plank stance",
            "Lower to diamond",
            "Keep elbows in",
            "Push back up",
            "Control movement",
        ],
    },
    SeedExercise {
        id: "pike_push_ups",
        name: "Pike Push-ups",
        description: "In downward dog position, lower head toward ground and push back up. Great for shoulders.",
        target_areas: &[TargetArea::UpperBody, TargetArea::FullBody],
        difficulty: 4,
        equipment: "none",
        categories: &[MovementCategory::Compound],
        bilateral: false,
        instructions: &[
            "Start in downward dog position",
            "Lower head toward ground",
            "Keep hips high",
            "Push back up",
            "Don't let hips sag",
            "Focus on shoulders",
        ],
        animation_steps: &[
            "Downward dog position",
            "Lower head down",
            "Keep hips high",
            "Push back up",
            "Control movement",
            "Repeat motion",
        ],
    },
    SeedExercise {
        id: "bodyweight_tricep_extensions",
        name: "Bodyweight Tricep Extensions",
        description: "Plank position against wall, lean forward and push back using triceps. Great equipment-free tricep exercise.",
        target_areas: &[TargetArea::UpperBody, TargetArea::FullBody],
        difficulty: 3,
        equipment: "none",
        categories: &[],
        bilateral: false,
        instructions: &[
            "Start in plank position against wall",
            "Place hands on ground",
            "Lean forward lowering body",
            "Keep elbows close to body",
            "Push back to starting position",
            "Focus on tricep engagement",
        ],
        animation_steps: &[
            "Plank against wall",
            "Lean forward",
            "Lower with control",
            "Keep elbows in",
            "Push back up",
            "Engage triceps",
        ],
    },
    SeedExercise {
        id: "arm_circles",
        name: "Arm Circles",
        description: "Extend arms to sides and make small to large circles forward and backward.",
        target_areas: &[TargetArea::UpperBody, TargetArea::FullBody],
        difficulty: 1,
        equipment: "none",
        categories: &[],
        bilateral: false,
        instructions: &[
            "Extend arms to sides",
            "Make small circles forward",
            "Gradually make circles larger",
            "Reverse direction",
            "Keep arms straight",
            "Control the movement",
        ],
        animation_steps: &[
            "Extend arms out",
            "Small circles forward",
            "Larger circles",
            "Reverse direction",
            "Keep arms straight",
            "Control the motion",
        ],
    },
];

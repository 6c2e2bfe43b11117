use clap::{Args, Parser, Subcommand};
use hiit_core::*;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "hiit")]
#[command(about = "HIIT workout generator and timer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a workout and print it (default)
    Generate {
        #[command(flatten)]
        workout: WorkoutArgs,

        /// Print the intervals as JSON
        #[arg(long)]
        json: bool,

        /// Save the generated workout to favorites
        #[arg(long)]
        favorite: bool,
    },

    /// Generate (or load) a workout and run the timer
    Start {
        #[command(flatten)]
        workout: WorkoutArgs,

        /// Run a saved workout instead of generating one
        #[arg(long, conflicts_with = "seed")]
        workout_id: Option<Uuid>,

        /// Dry run - show the workout without running or logging it
        #[arg(long)]
        dry_run: bool,

        /// Auto-complete (for testing) - run every countdown instantly
        #[arg(long)]
        auto_complete: bool,

        /// Save the workout to favorites once completed
        #[arg(long)]
        favorite: bool,
    },

    /// Show workouts completed, minutes trained and the current streak
    Progress,

    /// List favorite workouts
    Favorites,

    /// Mark or unmark a saved workout as favorite
    Favorite {
        id: Uuid,

        /// Remove from favorites instead
        #[arg(long)]
        remove: bool,
    },

    /// List the exercise catalog
    Catalog {
        /// Only exercises for this target area
        #[arg(long)]
        target: Option<TargetArea>,
    },
}

/// Setup-screen choices; anything left out comes from the config file
#[derive(Args)]
struct WorkoutArgs {
    /// Session length in minutes (3, 5, 10 or 15)
    #[arg(long)]
    duration: Option<u32>,

    /// Target area (full-body, legs, abs, upper-body)
    #[arg(long)]
    target: Option<TargetArea>,

    /// Goal (fat-loss, endurance, strength)
    #[arg(long)]
    goal: Option<Goal>,

    /// Work period per exercise in seconds (45, 60 or 75)
    #[arg(long)]
    exercise_duration: Option<u32>,

    /// Seed for a reproducible workout
    #[arg(long)]
    seed: Option<u64>,
}

impl WorkoutArgs {
    fn resolve(&self, config: &Config) -> Result<WorkoutConfig> {
        let defaults = config.workout.to_workout_config();
        let workout = WorkoutConfig {
            duration_minutes: self.duration.unwrap_or(defaults.duration_minutes),
            target_area: self.target.unwrap_or(defaults.target_area),
            goal: self.goal.unwrap_or(defaults.goal),
            exercise_duration_seconds: self
                .exercise_duration
                .unwrap_or(defaults.exercise_duration_seconds),
        };
        workout.validate()?;
        tracing::info!(
            "Workout options: {} min {} / {} ({}s work)",
            workout.duration_minutes,
            workout.target_area,
            workout.goal,
            workout.exercise_duration_seconds
        );
        Ok(workout)
    }
}

/// Files under the data directory
struct DataPaths {
    sessions: PathBuf,
    progress: PathBuf,
    workouts: PathBuf,
}

impl DataPaths {
    fn new(data_dir: &Path) -> Self {
        Self {
            sessions: data_dir.join("sessions.jsonl"),
            progress: data_dir.join("progress.json"),
            workouts: data_dir.join("workouts.json"),
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    hiit_core::logging::init();

    let cli = Cli::parse();

    // Determine data directory
    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    tracing::debug!("Using data directory {:?}", data_dir);
    let paths = DataPaths::new(&data_dir);

    match cli.command {
        Some(Commands::Generate {
            workout,
            json,
            favorite,
        }) => cmd_generate(&paths, &workout, json, favorite, &config),
        Some(Commands::Start {
            workout,
            workout_id,
            dry_run,
            auto_complete,
            favorite,
        }) => cmd_start(
            &paths,
            &workout,
            workout_id,
            dry_run,
            auto_complete,
            favorite,
            &config,
        ),
        Some(Commands::Progress) => cmd_progress(&paths),
        Some(Commands::Favorites) => cmd_favorites(&paths),
        Some(Commands::Favorite { id, remove }) => cmd_favorite(&paths, id, remove),
        Some(Commands::Catalog { target }) => cmd_catalog(target, &config),
        None => {
            // Default to "generate" with configured defaults
            let workout = WorkoutArgs {
                duration: None,
                target: None,
                goal: None,
                exercise_duration: None,
                seed: None,
            };
            cmd_generate(&paths, &workout, false, false, &config)
        }
    }
}

/// Load the configured catalog and refuse to run on an invalid one
fn load_catalog(config: &Config) -> Result<Catalog> {
    let catalog = config.load_catalog()?;
    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }
    Ok(catalog)
}

fn generate(workout: &WorkoutConfig, seed: Option<u64>, catalog: &Catalog) -> Vec<WorkoutInterval> {
    match seed {
        Some(seed) => generate_workout_seeded(workout, &catalog.exercises, seed),
        None => generate_workout_random(workout, &catalog.exercises),
    }
}

fn cmd_generate(
    paths: &DataPaths,
    args: &WorkoutArgs,
    json: bool,
    favorite: bool,
    config: &Config,
) -> Result<()> {
    let workout = args.resolve(config)?;
    let catalog = load_catalog(config)?;
    let intervals = generate(&workout, args.seed, &catalog);

    if json {
        println!("{}", serde_json::to_string_pretty(&intervals)?);
    } else {
        display_workout(&workout, &intervals);
    }

    if favorite && !intervals.is_empty() {
        let id = WorkoutLibrary::update(&paths.workouts, |library| {
            Ok(library.add(workout, intervals, true, None).id)
        })?;
        if !json {
            println!("✓ Saved to favorites ({})", id);
        }
    }

    Ok(())
}

fn cmd_start(
    paths: &DataPaths,
    args: &WorkoutArgs,
    workout_id: Option<Uuid>,
    dry_run: bool,
    auto_complete: bool,
    favorite: bool,
    config: &Config,
) -> Result<()> {
    let (workout, intervals) = match workout_id {
        Some(id) => {
            let library = WorkoutLibrary::load(&paths.workouts)?;
            let saved = library
                .get(id)
                .ok_or_else(|| Error::Library(format!("Workout {} not found", id)))?;
            tracing::info!("Replaying saved workout {}", id);
            (saved.config.clone(), saved.intervals.clone())
        }
        None => {
            let workout = args.resolve(config)?;
            let catalog = load_catalog(config)?;
            let intervals = generate(&workout, args.seed, &catalog);
            (workout, intervals)
        }
    };

    display_workout(&workout, &intervals);
    if intervals.is_empty() {
        return Ok(());
    }

    if dry_run {
        println!("\n[Dry run - not logging session]");
        return Ok(());
    }

    run_workout(&intervals, config.playback.countdown_beeps, auto_complete)?;

    let summary = WorkoutSummary::new(&workout, &intervals, config.playback.calories_per_second);
    display_summary(&summary);

    let completed_at = chrono::Utc::now();
    let saved_id = match workout_id {
        // Replays update the saved entry in place
        Some(id) => {
            WorkoutLibrary::update(&paths.workouts, |library| {
                if favorite {
                    library.set_favorite(id, true)?;
                }
                library.mark_completed(id, completed_at)
            })?;
            if favorite {
                println!("✓ Saved to favorites ({})", id);
            }
            Some(id)
        }
        None if favorite || (!auto_complete && confirm("Save to favorites?")?) => {
            let id = WorkoutLibrary::update(&paths.workouts, |library| {
                Ok(library
                    .add(workout.clone(), intervals.clone(), true, Some(completed_at))
                    .id)
            })?;
            println!("✓ Saved to favorites ({})", id);
            Some(id)
        }
        None => None,
    };

    let session = summary.to_session(saved_id, completed_at);
    let mut sink = JsonlSink::new(&paths.sessions);
    sink.append(&session)?;

    let progress = UserProgress::update(&paths.progress, |progress| {
        progress.record_session(&session);
        Ok(())
    })?;

    println!("✓ Session logged!");
    println!(
        "  Streak: {} · Workouts: {} · Minutes: {}",
        progress.current_streak, progress.workouts_completed, progress.total_minutes
    );

    Ok(())
}

/// Drive the player to completion, one tick per second unless auto-completing
fn run_workout(intervals: &[WorkoutInterval], beeps: u32, auto_complete: bool) -> Result<()> {
    let mut player = WorkoutPlayer::new(intervals, beeps);
    let mut phase = player.phase();
    announce(&player);

    while !player.is_complete() {
        let event = player.tick();

        if !auto_complete {
            match event {
                TickEvent::Running { remaining } => {
                    print!("\r  {:>3}s ", remaining);
                }
                TickEvent::Beep { remaining } => {
                    print!("\r  {:>3}s \x07", remaining);
                }
                TickEvent::Complete | TickEvent::Idle => {}
            }
            io::stdout().flush()?;
            std::thread::sleep(Duration::from_secs(1));
        }

        if player.phase() != phase {
            phase = player.phase();
            if !auto_complete {
                println!();
            }
            announce(&player);
        }
    }

    Ok(())
}

fn announce(player: &WorkoutPlayer<'_>) {
    match player.phase() {
        Phase::Work(i) => {
            println!("\n▶ [{}] {}", i + 1, player.announcement());
            if let Some(interval) = player.current() {
                for step in &interval.instructions {
                    println!("    • {}", step);
                }
            }
        }
        Phase::Rest(_) => println!("  ⏸ {}", player.announcement()),
        Phase::Complete => println!("\n✓ {}", player.announcement()),
    }
}

fn cmd_progress(paths: &DataPaths) -> Result<()> {
    let progress = UserProgress::load(&paths.progress)?;

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  PROGRESS");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Workouts completed: {}", progress.workouts_completed);
    println!("  Total minutes:      {}", progress.total_minutes);
    println!("  Current streak:     {}", progress.current_streak);
    match progress.last_workout_at {
        Some(at) => println!("  Last workout:       {}", at.format("%Y-%m-%d %H:%M")),
        None => println!("  Last workout:       never"),
    }
    println!();

    let sessions = read_sessions(&paths.sessions)?;
    if !sessions.is_empty() {
        println!("  Recent sessions:");
        for session in sessions.iter().rev().take(5) {
            println!(
                "    {}  {} min · {} exercises · ~{} cal",
                session.completed_at.format("%Y-%m-%d %H:%M"),
                session.duration_seconds / 60,
                session.exercises_completed,
                session.calories_burned.unwrap_or(0)
            );
        }
        println!();
    }

    Ok(())
}

fn cmd_favorites(paths: &DataPaths) -> Result<()> {
    let library = WorkoutLibrary::load(&paths.workouts)?;
    let favorites = library.favorites();

    if favorites.is_empty() {
        println!("No favorite workouts yet.");
        return Ok(());
    }

    for saved in favorites {
        println!(
            "{}  {} min {} / {}  ({} intervals, saved {})",
            saved.id,
            saved.config.duration_minutes,
            saved.config.target_area,
            saved.config.goal,
            saved.intervals.len(),
            saved.created_at.format("%Y-%m-%d")
        );
    }

    Ok(())
}

fn cmd_favorite(paths: &DataPaths, id: Uuid, remove: bool) -> Result<()> {
    WorkoutLibrary::update(&paths.workouts, |library| {
        library.set_favorite(id, !remove).map(|_| ())
    })?;

    if remove {
        println!("✓ Removed {} from favorites", id);
    } else {
        println!("✓ Added {} to favorites", id);
    }
    Ok(())
}

fn cmd_catalog(target: Option<TargetArea>, config: &Config) -> Result<()> {
    let catalog = load_catalog(config)?;
    let exercises: Vec<&ExerciseRecord> = match target {
        Some(area) => catalog.by_target_area(area),
        None => catalog.exercises.iter().collect(),
    };

    for exercise in exercises {
        let areas: Vec<&str> = exercise.target_areas.iter().map(|a| a.as_str()).collect();
        println!(
            "{:<28} {:<30} difficulty {}  [{}]",
            exercise.id,
            exercise.name,
            exercise.difficulty,
            areas.join(", ")
        );
    }

    Ok(())
}

fn display_workout(workout: &WorkoutConfig, intervals: &[WorkoutInterval]) {
    println!("\n╭─────────────────────────────────────────╮");
    println!(
        "│  {} MIN {} · {}",
        workout.duration_minutes,
        workout.target_area.as_str().to_uppercase(),
        workout.goal.as_str().to_uppercase()
    );
    println!("╰─────────────────────────────────────────╯");
    println!();

    if intervals.is_empty() {
        println!("  No exercises match your selection.");
        println!();
        return;
    }

    for (i, interval) in intervals.iter().enumerate() {
        println!(
            "  {:>2}. {:<32} {}s work / {}s rest",
            i + 1,
            interval.name,
            interval.work_duration_seconds,
            interval.rest_duration_seconds
        );
    }

    let total: u32 = intervals
        .iter()
        .map(|i| i.work_duration_seconds + i.rest_duration_seconds)
        .sum();
    println!();
    println!("  {} intervals · {}:{:02} total", intervals.len(), total / 60, total % 60);
    println!();
}

fn display_summary(summary: &WorkoutSummary) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  WORKOUT COMPLETE");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Time:      {}", summary.clock());
    println!("  Exercises: {}", summary.exercises);
    println!("  Calories:  ~{}", summary.estimated_calories);
    println!();
    println!("  {}", summary.share_text());
    println!();
}

fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
}

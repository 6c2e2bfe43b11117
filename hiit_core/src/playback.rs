//! Playback of a generated workout: per-second countdowns and the
//! work → rest → work … → complete walk over the interval list.
//!
//! Nothing here sleeps. The caller drives time by calling `tick()` once per
//! second (or as fast as it likes, for tests and `--auto-complete`).

use crate::WorkoutInterval;

/// Result of advancing a countdown by one second
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickEvent {
    /// Countdown is paused or already finished
    Idle,
    Running { remaining: u32 },
    /// One of the final seconds; the UI plays a short beep
    Beep { remaining: u32 },
    /// Reached zero on this tick (or was skipped)
    Complete,
}

/// A single pausable countdown in whole seconds
#[derive(Clone, Debug)]
pub struct Countdown {
    duration: u32,
    remaining: u32,
    active: bool,
    beeps: u32,
}

impl Countdown {
    pub const DEFAULT_BEEPS: u32 = 3;

    pub fn new(duration_seconds: u32) -> Self {
        Self {
            duration: duration_seconds,
            remaining: duration_seconds,
            active: false,
            beeps: Self::DEFAULT_BEEPS,
        }
    }

    /// Beep on each of the last `beeps` seconds
    pub fn with_beeps(mut self, beeps: u32) -> Self {
        self.beeps = beeps;
        self
    }

    pub fn start(&mut self) {
        self.active = true;
    }

    pub fn pause(&mut self) {
        self.active = false;
    }

    /// Resume a paused countdown; a finished one stays finished
    pub fn resume(&mut self) {
        if self.remaining > 0 {
            self.active = true;
        }
    }

    pub fn reset(&mut self) {
        self.active = false;
        self.remaining = self.duration;
    }

    pub fn skip(&mut self) -> TickEvent {
        self.active = false;
        self.remaining = 0;
        TickEvent::Complete
    }

    pub fn tick(&mut self) -> TickEvent {
        if !self.active {
            return TickEvent::Idle;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.active = false;
            TickEvent::Complete
        } else if self.remaining <= self.beeps {
            TickEvent::Beep {
                remaining: self.remaining,
            }
        } else {
            TickEvent::Running {
                remaining: self.remaining,
            }
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    pub fn progress_percent(&self) -> f64 {
        if self.duration == 0 {
            return 100.0;
        }
        f64::from(self.duration - self.remaining) / f64::from(self.duration) * 100.0
    }
}

/// Which screen the workout is on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Working on interval `i`
    Work(usize),
    /// Resting after interval `i`
    Rest(usize),
    Complete,
}

/// Walks a workout interval by interval
pub struct WorkoutPlayer<'a> {
    intervals: &'a [WorkoutInterval],
    phase: Phase,
    countdown: Countdown,
    beeps: u32,
}

impl<'a> WorkoutPlayer<'a> {
    /// Start at the first work interval (or complete, for an empty workout)
    pub fn new(intervals: &'a [WorkoutInterval], beeps: u32) -> Self {
        let mut player = Self {
            intervals,
            phase: Phase::Complete,
            countdown: Countdown::new(0).with_beeps(beeps),
            beeps,
        };
        if !intervals.is_empty() {
            player.enter(Phase::Work(0));
        }
        player
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// The interval being worked, or rested after
    pub fn current(&self) -> Option<&'a WorkoutInterval> {
        match self.phase {
            Phase::Work(i) | Phase::Rest(i) => self.intervals.get(i),
            Phase::Complete => None,
        }
    }

    pub fn next_interval(&self) -> Option<&'a WorkoutInterval> {
        match self.phase {
            Phase::Work(i) | Phase::Rest(i) => self.intervals.get(i + 1),
            Phase::Complete => None,
        }
    }

    pub fn pause(&mut self) {
        self.countdown.pause();
    }

    pub fn resume(&mut self) {
        self.countdown.resume();
    }

    /// Advance the current countdown one second, moving on when it ends
    pub fn tick(&mut self) -> TickEvent {
        let event = self.countdown.tick();
        if event == TickEvent::Complete {
            self.advance();
        }
        event
    }

    /// End the current phase early
    pub fn skip(&mut self) {
        if self.is_complete() {
            return;
        }
        self.countdown.skip();
        self.advance();
    }

    /// Move to the phase after the current one
    pub fn advance(&mut self) {
        let next = match self.phase {
            Phase::Work(i) if i + 1 < self.intervals.len() => {
                if self.intervals[i].rest_duration_seconds > 0 {
                    Phase::Rest(i)
                } else {
                    Phase::Work(i + 1)
                }
            }
            Phase::Work(_) => Phase::Complete,
            Phase::Rest(i) => Phase::Work(i + 1),
            Phase::Complete => Phase::Complete,
        };
        self.enter(next);
    }

    fn enter(&mut self, phase: Phase) {
        let seconds = match phase {
            Phase::Work(i) => self.intervals[i].work_duration_seconds,
            Phase::Rest(i) => self.intervals[i].rest_duration_seconds,
            Phase::Complete => 0,
        };
        tracing::debug!("Entering {:?} ({}s)", phase, seconds);

        self.phase = phase;
        self.countdown = Countdown::new(seconds).with_beeps(self.beeps);
        if phase != Phase::Complete {
            self.countdown.start();
        }
    }

    /// Share of intervals already finished
    pub fn overall_progress_percent(&self) -> f64 {
        if self.intervals.is_empty() {
            return 100.0;
        }
        let done = match self.phase {
            Phase::Work(i) => i,
            Phase::Rest(i) => i + 1,
            Phase::Complete => self.intervals.len(),
        };
        done as f64 / self.intervals.len() as f64 * 100.0
    }

    /// What the narrator says on entering the current phase
    pub fn announcement(&self) -> String {
        match self.phase {
            Phase::Work(_) => match self.current() {
                Some(interval) => format!(
                    "{}. {} seconds. Go!",
                    interval.name, interval.work_duration_seconds
                ),
                None => String::new(),
            },
            Phase::Rest(_) => {
                let rest = self.countdown.duration();
                match self.next_interval() {
                    Some(next) => format!("Rest for {} seconds. Next up: {}", rest, next.name),
                    None => format!("Rest for {} seconds", rest),
                }
            }
            Phase::Complete => "Workout complete! Great job!".to_string(),
        }
    }
}

//! The timed object writing exercise: a countdown state machine plus a periodic tick source
//! which drives it.
//!
//! The state machine itself never looks at a clock. Ticks are external events, fed in by a
//! [`Ticker`] in real time or directly by tests.

use std::{
    thread::{self, JoinHandle},
    time::Duration,
};

use crossbeam_channel::{bounded, never, unbounded, Receiver, RecvError, RecvTimeoutError, Sender};

use crate::{
    platform::Chime,
    prompt::{PromptPicker, PromptSource},
    Error,
};

// -------------------------------------------------------------------------------------------------

/// Default exercise length in ticks (seconds): 10 minutes.
pub const EXERCISE_DURATION: u32 = 600;

/// State of an [`Exercise`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExerciseState {
    /// No exercise started yet, or reset.
    Idle,
    /// Counting down.
    Running,
    /// Time is up.
    Complete,
}

/// Result of feeding a tick into an [`Exercise`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still running, with the given remaining ticks. Keep ticking.
    Running(u32),
    /// The exercise just completed. Stop ticking.
    Completed,
    /// The exercise is not running, the tick was ignored. Stop ticking.
    Ignored,
}

// -------------------------------------------------------------------------------------------------

/// Timed free writing exercise with a random prompt.
///
/// ```rust
/// use songsmith::{exercise::TickOutcome, platform::SilentChime, Exercise, PromptSource};
///
/// let prompts = PromptSource::new(vec!["frost on glass".to_string()]).unwrap();
/// let mut exercise = Exercise::new(prompts, Box::new(SilentChime)).with_duration(2);
/// exercise.start();
/// assert_eq!(exercise.prompt(), Some("frost on glass"));
/// assert_eq!(exercise.tick(), TickOutcome::Running(1));
/// assert_eq!(exercise.tick(), TickOutcome::Completed);
/// ```
#[derive(Debug)]
pub struct Exercise {
    source: PromptSource,
    picker: PromptPicker,
    chime: Box<dyn Chime>,
    duration: u32,
    remaining: u32,
    prompt: Option<String>,
    state: ExerciseState,
}

impl Exercise {
    /// Create a new idle exercise, picking prompts from the given source with an unseeded
    /// picker and ringing the given chime on completion.
    pub fn new(source: PromptSource, chime: Box<dyn Chime>) -> Self {
        Self {
            source,
            picker: PromptPicker::new(None),
            chime,
            duration: EXERCISE_DURATION,
            remaining: EXERCISE_DURATION,
            prompt: None,
            state: ExerciseState::Idle,
        }
    }

    /// Builder function to set a custom exercise length in ticks.
    #[must_use]
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration.max(1);
        self.remaining = self.duration;
        self
    }

    /// Builder function to set a custom, e.g. seeded, prompt picker.
    #[must_use]
    pub fn with_picker(mut self, picker: PromptPicker) -> Self {
        self.picker = picker;
        self
    }

    pub fn state(&self) -> ExerciseState {
        self.state
    }

    /// Current prompt. `None` when idle.
    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    /// Remaining ticks.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Exercise length in ticks.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Remaining time as `MM:SS`.
    pub fn formatted_time(&self) -> String {
        format_time(self.remaining)
    }

    /// Returns true while a tick source should be active for this exercise.
    pub fn is_ticking(&self) -> bool {
        self.state == ExerciseState::Running
    }

    /// Start a new exercise with a fresh prompt and the full duration.
    pub fn start(&mut self) {
        self.prompt = self.picker.pick(&self.source);
        self.remaining = self.duration;
        self.state = ExerciseState::Running;
        log::debug!(
            "Exercise started with prompt '{}'",
            self.prompt.as_deref().unwrap_or_default()
        );
    }

    /// Advance the countdown by one tick.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state != ExerciseState::Running {
            return TickOutcome::Ignored;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining > 0 {
            return TickOutcome::Running(self.remaining);
        }
        self.state = ExerciseState::Complete;
        log::debug!("Exercise complete");
        if let Err(err) = self.chime.play() {
            log::warn!("Failed to play completion chime: {}", err);
        }
        TickOutcome::Completed
    }

    /// Restart the countdown, keeping the current prompt. Does nothing when idle.
    pub fn restart(&mut self) {
        if self.state == ExerciseState::Idle {
            return;
        }
        self.remaining = self.duration;
        self.state = ExerciseState::Running;
        log::debug!("Exercise timer restarted");
    }

    /// Pick a new prompt without touching the countdown. Does nothing when idle.
    pub fn new_prompt(&mut self) {
        if self.state == ExerciseState::Idle {
            return;
        }
        self.prompt = self.picker.pick(&self.source);
        log::debug!(
            "New prompt '{}'",
            self.prompt.as_deref().unwrap_or_default()
        );
    }

    /// Back to idle: clears the prompt and resets the countdown. A seeded picker restarts its
    /// prompt sequence.
    pub fn reset(&mut self) {
        self.picker.reset();
        self.prompt = None;
        self.remaining = self.duration;
        self.state = ExerciseState::Idle;
        log::debug!("Exercise reset");
    }
}

/// Format the given number of seconds as zero padded `MM:SS`.
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

// -------------------------------------------------------------------------------------------------

/// A periodic tick source, running on its own thread and delivering ticks over a channel.
///
/// Dropping the ticker or calling `cancel` stops the thread. See [`ExerciseDriver`], which holds
/// at most one ticker per exercise.
#[derive(Debug)]
pub struct Ticker {
    ticks: Receiver<()>,
    stop: Option<Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Start ticking with the given period. The first tick arrives after one period.
    pub fn start(period: Duration) -> Result<Self, Error> {
        let (tick_sender, ticks) = unbounded::<()>();
        let (stop, stop_receiver) = bounded::<()>(1);
        let thread = thread::Builder::new()
            .name("exercise-ticker".to_string())
            .spawn(move || loop {
                match stop_receiver.recv_timeout(period) {
                    Err(RecvTimeoutError::Timeout) => {
                        if tick_sender.send(()).is_err() {
                            break;
                        }
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            })
            .map_err(|err| Error::platform("ticker", err))?;
        Ok(Self {
            ticks,
            stop: Some(stop),
            thread: Some(thread),
        })
    }

    /// Start a ticker with a period of one second.
    pub fn every_second() -> Result<Self, Error> {
        Self::start(Duration::from_secs(1))
    }

    /// Channel which receives the ticks.
    pub fn ticks(&self) -> &Receiver<()> {
        &self.ticks
    }

    /// Stop ticking and wait for the ticker thread to finish.
    pub fn cancel(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(stop) = self.stop.take() {
            // ignore errors: the thread may be gone already
            let _ = stop.try_send(());
        }
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                log::error!("Ticker thread panicked");
            }
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

// -------------------------------------------------------------------------------------------------

/// User commands for an [`ExerciseDriver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseCommand {
    Start,
    Restart,
    NewPrompt,
    Reset,
}

/// Drives an [`Exercise`] in real time: feeds it ticks and commands and owns its tick source.
///
/// The driver holds at most one [`Ticker`]. It arms one when the exercise starts running and
/// drops it as soon as the exercise stops running.
#[derive(Debug)]
pub struct ExerciseDriver {
    exercise: Exercise,
    ticker: Option<Ticker>,
    period: Duration,
    armed_count: usize,
}

impl ExerciseDriver {
    /// Create a new driver, ticking once per second.
    pub fn new(exercise: Exercise) -> Self {
        Self {
            exercise,
            ticker: None,
            period: Duration::from_secs(1),
            armed_count: 0,
        }
    }

    /// Builder function to set a custom tick period.
    #[must_use]
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub fn exercise(&self) -> &Exercise {
        &self.exercise
    }

    /// Returns true while a tick source is active.
    pub fn is_armed(&self) -> bool {
        self.ticker.is_some()
    }

    /// Number of tick sources started so far.
    pub fn armed_count(&self) -> usize {
        self.armed_count
    }

    /// Channel of the active tick source, or a channel which never receives when disarmed.
    pub fn ticks(&self) -> Receiver<()> {
        self.ticker
            .as_ref()
            .map(|ticker| ticker.ticks().clone())
            .unwrap_or_else(never)
    }

    /// Apply a user command, then arm or disarm the tick source.
    pub fn handle_command(&mut self, command: ExerciseCommand) -> Result<(), Error> {
        match command {
            ExerciseCommand::Start => self.exercise.start(),
            ExerciseCommand::Restart => self.exercise.restart(),
            ExerciseCommand::NewPrompt => self.exercise.new_prompt(),
            ExerciseCommand::Reset => self.exercise.reset(),
        }
        self.sync_ticker()
    }

    /// Feed a tick, as received from the tick channel, into the exercise.
    ///
    /// A disconnected tick channel is not a tick: the tick source gets dropped and a platform
    /// error is returned.
    pub fn handle_tick(&mut self, tick: Result<(), RecvError>) -> Result<TickOutcome, Error> {
        if tick.is_err() {
            self.ticker = None;
            return Err(Error::platform("ticker", "tick source disconnected"));
        }
        let outcome = self.exercise.tick();
        self.sync_ticker()?;
        Ok(outcome)
    }

    /// Stop ticking and return the exercise to idle.
    pub fn reset(&mut self) {
        self.ticker = None;
        self.exercise.reset();
    }

    fn sync_ticker(&mut self) -> Result<(), Error> {
        if !self.exercise.is_ticking() {
            if self.ticker.take().is_some() {
                log::debug!("Tick source disarmed");
            }
        } else if self.ticker.is_none() {
            self.ticker = Some(Ticker::start(self.period)?);
            self.armed_count += 1;
            log::debug!("Tick source armed");
        }
        Ok(())
    }
}

// --------------------------------------------------------------------------------------------------

//! Step driver: the scheduler between a step machine and its consumer
//!
//! The driver owns the current machine, the play/pause state and the cadence.
//! Every frame (and the final terminal signal) is pushed to a single consumer
//! callback registered with [`StepDriver::set_consumer`]; that callback is the
//! only channel out of the engine.
//!
//! # Cadence
//!
//! Nothing here sleeps or spawns. The host loop calls [`StepDriver::tick`]
//! with the current time and the driver steps when the scheduled deadline has
//! passed. The first tick after `play()` fires immediately; each later one is
//! scheduled `speed` after the previous tick, using the speed in effect when
//! it was scheduled. `pause()` drops the pending deadline, so no tick fires
//! after it.
//!
//! # Failure
//!
//! A frame that fails [`Frame::validate`] halts the driver. Steps then return
//! [`DriverError::Halted`] until `start()` or `reset()`.

pub mod config;

pub use config::{DriverConfig, MAX_SPEED, MIN_SPEED};

use crate::errors::DriverError;
use crate::frame::{Frame, FrameHistory};
use crate::machines::{self, Algorithm, StepMachine};
use crate::problem::Problem;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// What the consumer receives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepEvent {
    Frame(Frame),
    /// The machine is exhausted; no more frames will follow
    Finished { algorithm: Algorithm, frames: usize },
}

/// Where the driver is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverPhase {
    /// No machine loaded
    Idle,
    /// Machine loaded, not playing
    Ready,
    Running,
    Paused,
    Finished,
    /// Stopped on a malformed frame
    Halted,
}

/// Observable driver state for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverState {
    pub is_running: bool,
    pub is_paused: bool,
    pub speed: Duration,
}

/// Result of a single `step()`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// A frame was forwarded and more may follow
    Advanced,
    /// The terminal signal was forwarded this step (possibly after a frame)
    Finished,
    /// Nothing to do: no machine, or already finished
    Ignored,
}

type Consumer = Box<dyn FnMut(&StepEvent)>;

/// Drives one step machine at a time
pub struct StepDriver {
    config: DriverConfig,
    speed: Duration,
    machine: Option<Box<dyn StepMachine>>,
    phase: DriverPhase,
    next_tick: Option<Instant>,
    consumer: Option<Consumer>,
    history: FrameHistory,
    recording: bool,
    frames_emitted: usize,
}

impl StepDriver {
    pub fn new(config: DriverConfig) -> Self {
        StepDriver {
            speed: config.speed,
            history: FrameHistory::new(config.history_limit),
            config,
            machine: None,
            phase: DriverPhase::Idle,
            next_tick: None,
            consumer: None,
            recording: true,
            frames_emitted: 0,
        }
    }

    /// Register the callback that receives every frame and the terminal signal
    pub fn set_consumer(&mut self, consumer: impl FnMut(&StepEvent) + 'static) {
        self.consumer = Some(Box::new(consumer));
    }

    /// Load a fresh machine for `problem`, discarding any run in progress
    pub fn start(&mut self, problem: &Problem) {
        self.load(machines::build(problem));
    }

    fn load(&mut self, machine: Box<dyn StepMachine>) {
        if self.machine.is_some() {
            debug!(phase = ?self.phase, "discarding previous machine");
        }
        info!(algorithm = %machine.algorithm(), "starting");

        self.machine = Some(machine);
        self.phase = DriverPhase::Ready;
        self.next_tick = None;
        self.history.clear();
        self.recording = true;
        self.frames_emitted = 0;
    }

    /// Advance the machine once and forward the result.
    ///
    /// A no-op once the machine has finished. Does not change play state.
    pub fn step(&mut self) -> Result<StepStatus, DriverError> {
        match self.phase {
            DriverPhase::Idle => {
                warn!("step requested with no problem loaded");
                return Ok(StepStatus::Ignored);
            }
            DriverPhase::Finished => return Ok(StepStatus::Ignored),
            DriverPhase::Halted => return Err(DriverError::Halted),
            DriverPhase::Ready | DriverPhase::Running | DriverPhase::Paused => {}
        }

        let Some(machine) = self.machine.as_mut() else {
            return Ok(StepStatus::Ignored);
        };
        let algorithm = machine.algorithm();
        let frame = machine.advance();
        let terminal = machine.is_terminal();

        let Some(frame) = frame else {
            self.finish(algorithm);
            return Ok(StepStatus::Finished);
        };

        if let Err(reason) = frame.validate() {
            error!(%algorithm, %reason, "malformed frame, halting");
            self.phase = DriverPhase::Halted;
            self.next_tick = None;
            return Err(DriverError::MalformedFrame { algorithm, reason });
        }

        self.record(&frame);
        self.frames_emitted += 1;
        debug!(%algorithm, frame = self.frames_emitted, "step");
        self.emit(&StepEvent::Frame(frame));

        if terminal {
            self.finish(algorithm);
            Ok(StepStatus::Finished)
        } else {
            Ok(StepStatus::Advanced)
        }
    }

    /// Begin stepping on the cadence; the first tick is due at `now`
    pub fn play(&mut self, now: Instant) {
        match self.phase {
            DriverPhase::Ready | DriverPhase::Paused => {
                self.phase = DriverPhase::Running;
                self.next_tick = Some(now);
            }
            DriverPhase::Running => {}
            DriverPhase::Idle | DriverPhase::Finished | DriverPhase::Halted => {
                warn!(phase = ?self.phase, "play ignored");
            }
        }
    }

    /// Stop the cadence, keeping the machine exactly where it is
    pub fn pause(&mut self) {
        if self.phase == DriverPhase::Running {
            self.phase = DriverPhase::Paused;
            self.next_tick = None;
        }
    }

    /// Change the cadence. An already scheduled tick keeps its deadline.
    pub fn set_speed(&mut self, speed: Duration) {
        self.speed = config::clamp_speed(speed);
        debug!(speed_ms = self.speed.as_millis() as u64, "speed changed");
    }

    /// Drop the machine and return to the pre-`start` state
    pub fn reset(&mut self) {
        if self.machine.take().is_some() {
            info!("reset");
        }
        self.phase = DriverPhase::Idle;
        self.next_tick = None;
        self.history.clear();
        self.recording = true;
        self.frames_emitted = 0;
    }

    /// Fire a step if playing and the scheduled deadline has passed.
    ///
    /// Returns `Ok(None)` when no step was due.
    pub fn tick(&mut self, now: Instant) -> Result<Option<StepStatus>, DriverError> {
        if self.phase != DriverPhase::Running {
            return Ok(None);
        }
        match self.next_tick {
            Some(due) if now >= due => {}
            _ => return Ok(None),
        }

        let status = self.step()?;
        if self.phase == DriverPhase::Running {
            self.next_tick = Some(now + self.speed);
        }
        Ok(Some(status))
    }

    /// How long the host may wait before the next tick is due
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.next_tick.map(|due| due.saturating_duration_since(now))
    }

    /// Step until the machine finishes, ignoring the cadence. Returns the
    /// number of frames forwarded by this call.
    pub fn run_to_end(&mut self) -> Result<usize, DriverError> {
        let before = self.frames_emitted;
        while self.step()? == StepStatus::Advanced {}
        Ok(self.frames_emitted - before)
    }

    pub fn state(&self) -> DriverState {
        DriverState {
            is_running: self.phase == DriverPhase::Running,
            is_paused: self.phase == DriverPhase::Paused,
            speed: self.speed,
        }
    }

    pub fn phase(&self) -> DriverPhase {
        self.phase
    }

    pub fn speed(&self) -> Duration {
        self.speed
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn algorithm(&self) -> Option<Algorithm> {
        self.machine.as_ref().map(|m| m.algorithm())
    }

    pub fn is_finished(&self) -> bool {
        self.phase == DriverPhase::Finished
    }

    /// Frames forwarded since the last `start()`
    pub fn frames_emitted(&self) -> usize {
        self.frames_emitted
    }

    /// Frames recorded for replay since the last `start()`
    pub fn history(&self) -> &FrameHistory {
        &self.history
    }

    fn record(&mut self, frame: &Frame) {
        if !self.recording {
            return;
        }
        if let Err(e) = self.history.push(frame.clone()) {
            warn!(error = %e, "frame history full, replay stops here");
            self.recording = false;
        }
    }

    fn finish(&mut self, algorithm: Algorithm) {
        self.phase = DriverPhase::Finished;
        self.next_tick = None;
        info!(%algorithm, frames = self.frames_emitted, "finished");
        self.emit(&StepEvent::Finished {
            algorithm,
            frames: self.frames_emitted,
        });
    }

    fn emit(&mut self, event: &StepEvent) {
        if let Some(consumer) = self.consumer.as_mut() {
            consumer(event);
        }
    }
}

impl Default for StepDriver {
    fn default() -> Self {
        Self::new(DriverConfig::default())
    }
}

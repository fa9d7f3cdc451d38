//! # Introduction
//!
//! algoscope turns classic algorithms into resumable step machines that emit
//! one inspectable [`frame::Frame`] per step instead of running to completion.
//! A [`driver::StepDriver`] pulls frames on a cadence or on demand and pushes
//! them to a single consumer callback, which is all a presentation layer needs.
//!
//! ## Pipeline
//!
//! ```text
//! Input → Problem → StepMachine → Frames → StepDriver → consumer (TUI)
//! ```
//!
//! 1. [`problem`]: validated problem instances. Invalid input is rejected here,
//!    before any machine exists.
//! 2. [`machines`]: one explicit state object per algorithm; `advance()` is a
//!    single indivisible transition.
//! 3. [`frame`]: the frame record per algorithm family, plus a bounded
//!    [`frame::FrameHistory`] for replay.
//! 4. [`driver`]: play/pause/step/speed/reset over the current machine.
//! 5. [`ui`]: ratatui-based front end; not part of the stable library API.
//!
//! ## Supported algorithms
//!
//! Sorting: bubble, insertion. Searching: linear, binary.
//! Grid paths: Dijkstra, A* (plus recursive-division mazes).
//! Table fill: longest common subsequence, subset-sum reachability,
//! combination counting.

pub mod driver;
pub mod errors;
pub mod frame;
pub mod machines;
pub mod problem;
pub mod ui;

//! Error types for the step engine
//!
//! Three kinds of failure exist, and none of them outlives a single machine:
//!
//! - [`ProblemError`]: the input was rejected while building a problem. No
//!   machine is ever created from invalid input.
//! - [`DriverError`]: a machine produced a frame whose shape does not match
//!   its own data. This is fatal for the current run; the driver halts and a
//!   fresh `start()` clears it.
//! - [`HistoryError`]: the replay log ran out of budget. The driver treats
//!   this as a warning and keeps stepping.
//!
//! Running out of candidates (no path, unreachable sum, absent target) is not
//! an error at all and is reported through the frames themselves.

use crate::machines::Algorithm;
use crate::problem::Coord;
use thiserror::Error;

/// A problem instance was rejected at construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProblemError {
    /// A required sequence (array, string, item list) was empty
    #[error("{what} must not be empty")]
    EmptyInput { what: &'static str },

    /// A token in a comma-separated number list did not parse
    #[error("'{token}' is not a number")]
    UnparsableNumber { token: String },

    /// Target sums cannot be negative
    #[error("target must be non-negative, got {target}")]
    NegativeTarget { target: i64 },

    /// Subset-sum items cannot be negative
    #[error("items must be non-negative, got {item}")]
    NegativeItem { item: i64 },

    /// Combination items must be strictly positive
    #[error("items must be positive, got {item}")]
    NonPositiveItem { item: i64 },

    /// Target sums are capped so table machines stay a sane size
    #[error("target {target} exceeds the limit of {limit}")]
    TargetTooLarge { target: i64, limit: usize },

    /// A grid or table would need more cells than allowed
    #[error("{what} of {rows}x{cols} exceeds the limit of {limit} cells")]
    TooManyCells {
        what: &'static str,
        rows: usize,
        cols: usize,
        limit: usize,
    },

    /// A grid needs at least one row and one column
    #[error("grid must have at least one row and one column")]
    EmptyGrid,

    /// A coordinate fell outside the grid
    #[error("cell {coord} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        coord: Coord,
        rows: usize,
        cols: usize,
    },

    /// Start and end must never sit on a wall
    #[error("cell {coord} is a wall and cannot be an endpoint")]
    EndpointOnWall { coord: Coord },

    /// Start and end must be distinct cells
    #[error("start and end both sit on {coord}")]
    EndpointsOverlap { coord: Coord },
}

/// Fatal conditions raised by the step driver
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    /// A machine emitted a frame that failed its shape check
    #[error("{algorithm} produced a malformed frame: {reason}")]
    MalformedFrame {
        algorithm: Algorithm,
        reason: String,
    },

    /// The driver stopped after a malformed frame and needs a new `start()`
    #[error("driver halted; start a new problem to continue")]
    Halted,
}

/// Replay log failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("frame history limit exceeded: {current} + {additional} > {limit} bytes")]
    LimitExceeded {
        current: usize,
        additional: usize,
        limit: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_input() {
        let err = ProblemError::UnparsableNumber {
            token: "x1".to_string(),
        };
        assert_eq!(err.to_string(), "'x1' is not a number");

        let err = ProblemError::OutOfBounds {
            coord: Coord::new(4, 9),
            rows: 3,
            cols: 3,
        };
        assert_eq!(err.to_string(), "cell (4, 9) is outside the 3x3 grid");
    }

    #[test]
    fn test_malformed_frame_mentions_algorithm() {
        let err = DriverError::MalformedFrame {
            algorithm: Algorithm::BubbleSort,
            reason: "index 7 out of range".to_string(),
        };
        assert!(err.to_string().starts_with("bubble sort"));
    }
}

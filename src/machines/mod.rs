//! Step machines: algorithms as resumable state objects
//!
//! Each machine owns a private cursor plus whatever auxiliary state its
//! algorithm needs (a working array, a priority queue, a DP table). Calling
//! [`StepMachine::advance`] performs exactly one indivisible transition and
//! returns the resulting [`Frame`]; `None` means the machine is exhausted.
//!
//! - [`sort`]: bubble sort, insertion sort
//! - [`search`]: linear search, binary search
//! - [`path`]: Dijkstra, A* over a 4-connected grid
//! - [`maze`]: recursive-division wall generation (not a machine)
//! - [`table`]: LCS, subset-sum reachability, combination counting
//!
//! # Lifecycle
//!
//! A machine is built from a [`Problem`], advanced until terminal, then
//! dropped. There is no way to patch the problem of a running machine; edit
//! the problem and build a new one instead.

pub mod maze;
pub mod path;
pub mod search;
pub mod sort;
pub mod table;

use crate::frame::Frame;
use crate::problem::Problem;
use std::fmt;

/// The fixed set of algorithms the engine can step through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BubbleSort,
    InsertionSort,
    LinearSearch,
    BinarySearch,
    Dijkstra,
    AStar,
    Lcs,
    SubsetSum,
    Combinations,
}

impl Algorithm {
    pub const ALL: [Algorithm; 9] = [
        Algorithm::BubbleSort,
        Algorithm::InsertionSort,
        Algorithm::LinearSearch,
        Algorithm::BinarySearch,
        Algorithm::Dijkstra,
        Algorithm::AStar,
        Algorithm::Lcs,
        Algorithm::SubsetSum,
        Algorithm::Combinations,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "bubble sort",
            Algorithm::InsertionSort => "insertion sort",
            Algorithm::LinearSearch => "linear search",
            Algorithm::BinarySearch => "binary search",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "a*",
            Algorithm::Lcs => "longest common subsequence",
            Algorithm::SubsetSum => "subset sum",
            Algorithm::Combinations => "combination count",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A suspendable algorithm run
pub trait StepMachine {
    fn algorithm(&self) -> Algorithm;

    /// Perform one transition. Returns `None` once the machine is exhausted;
    /// after that every call returns `None`.
    fn advance(&mut self) -> Option<Frame>;

    /// True when the next `advance()` is guaranteed to return `None`
    fn is_terminal(&self) -> bool;
}

/// Build the machine for a problem. Problems are validated on construction,
/// so this cannot fail.
pub fn build(problem: &Problem) -> Box<dyn StepMachine> {
    match problem {
        Problem::BubbleSort(p) => Box::new(sort::BubbleSort::new(p)),
        Problem::InsertionSort(p) => Box::new(sort::InsertionSort::new(p)),
        Problem::LinearSearch(p) => Box::new(search::LinearSearch::new(p)),
        Problem::BinarySearch(p) => Box::new(search::BinarySearch::new(p)),
        Problem::Dijkstra(p) => Box::new(path::Dijkstra::new(p)),
        Problem::AStar(p) => Box::new(path::AStar::new(p)),
        Problem::Lcs(p) => Box::new(table::Lcs::new(p)),
        Problem::SubsetSum(p) => Box::new(table::SubsetSum::new(p)),
        Problem::Combinations(p) => Box::new(table::CombinationCount::new(p)),
    }
}

/// Drain a machine, collecting every frame it emits
pub fn run_to_end(machine: &mut dyn StepMachine) -> Vec<Frame> {
    std::iter::from_fn(|| machine.advance()).collect()
}

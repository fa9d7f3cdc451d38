//! Validated problem instances
//!
//! Every type in this module can only be built through a constructor that
//! returns `Result<_, ProblemError>`, so once a [`Problem`] exists it is valid
//! and building a machine from it cannot fail.
//!
//! - [`ArrayProblem`]: numbers to sort
//! - [`SearchProblem`]: numbers plus a target to look for
//! - [`grid::GridProblem`]: walls, start and end for the path finders
//! - [`LcsProblem`], [`SubsetSumProblem`], [`CombinationProblem`]: inputs for
//!   the table-filling machines
//!
//! Problems are plain data. Editing one never affects a machine that was
//! already built from it; machines copy what they need.

pub mod grid;

pub use grid::{CellState, Coord, GridProblem};

use crate::errors::ProblemError;
use crate::machines::Algorithm;

/// Largest target accepted by the table-filling problems
pub const MAX_TARGET: usize = 100_000;

/// Largest `(items + 1) x (target + 1)` subset-sum table
pub const MAX_TABLE_CELLS: usize = 2_000_000;

/// Parse a comma (or whitespace) separated list of integers.
///
/// Empty tokens are skipped so `"1, 2,,3,"` is `[1, 2, 3]`; anything else that
/// fails to parse rejects the whole list.
pub fn parse_number_list(input: &str) -> Result<Vec<i64>, ProblemError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| ProblemError::UnparsableNumber {
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Numbers to be sorted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayProblem {
    values: Vec<i64>,
}

impl ArrayProblem {
    pub fn new(values: Vec<i64>) -> Result<Self, ProblemError> {
        if values.is_empty() {
            return Err(ProblemError::EmptyInput { what: "array" });
        }
        Ok(ArrayProblem { values })
    }

    pub fn parse(input: &str) -> Result<Self, ProblemError> {
        Self::new(parse_number_list(input)?)
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }
}

/// Numbers to search through and the value to find.
///
/// Binary search additionally expects `values` to be sorted ascending; that
/// precondition is the caller's and is not checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchProblem {
    values: Vec<i64>,
    target: i64,
}

impl SearchProblem {
    pub fn new(values: Vec<i64>, target: i64) -> Result<Self, ProblemError> {
        if values.is_empty() {
            return Err(ProblemError::EmptyInput { what: "array" });
        }
        Ok(SearchProblem { values, target })
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn target(&self) -> i64 {
        self.target
    }
}

/// Two symbol sequences for longest-common-subsequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsProblem {
    first: Vec<char>,
    second: Vec<char>,
}

impl LcsProblem {
    pub fn new(first: &str, second: &str) -> Result<Self, ProblemError> {
        if first.is_empty() {
            return Err(ProblemError::EmptyInput {
                what: "first string",
            });
        }
        if second.is_empty() {
            return Err(ProblemError::EmptyInput {
                what: "second string",
            });
        }
        Ok(LcsProblem {
            first: first.chars().collect(),
            second: second.chars().collect(),
        })
    }

    pub fn first(&self) -> &[char] {
        &self.first
    }

    pub fn second(&self) -> &[char] {
        &self.second
    }
}

/// Items and a target for subset-sum reachability. Items may be zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetSumProblem {
    items: Vec<usize>,
    target: usize,
}

impl SubsetSumProblem {
    pub fn new(items: Vec<i64>, target: i64) -> Result<Self, ProblemError> {
        if items.is_empty() {
            return Err(ProblemError::EmptyInput { what: "items" });
        }
        let target = bounded_target(target)?;
        let items = items
            .into_iter()
            .map(|item| usize::try_from(item).map_err(|_| ProblemError::NegativeItem { item }))
            .collect::<Result<Vec<_>, _>>()?;
        let (rows, cols) = (items.len() + 1, target + 1);
        match rows.checked_mul(cols) {
            Some(cells) if cells <= MAX_TABLE_CELLS => Ok(SubsetSumProblem { items, target }),
            _ => Err(ProblemError::TooManyCells {
                what: "subset-sum table",
                rows,
                cols,
                limit: MAX_TABLE_CELLS,
            }),
        }
    }

    pub fn items(&self) -> &[usize] {
        &self.items
    }

    pub fn target(&self) -> usize {
        self.target
    }
}

/// Positive items and a target for combination counting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationProblem {
    items: Vec<usize>,
    target: usize,
}

impl CombinationProblem {
    pub fn new(items: Vec<i64>, target: i64) -> Result<Self, ProblemError> {
        if items.is_empty() {
            return Err(ProblemError::EmptyInput { what: "items" });
        }
        let target = bounded_target(target)?;
        let items = items
            .into_iter()
            .map(|item| match usize::try_from(item) {
                Ok(value) if value > 0 => Ok(value),
                _ => Err(ProblemError::NonPositiveItem { item }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CombinationProblem { items, target })
    }

    pub fn items(&self) -> &[usize] {
        &self.items
    }

    pub fn target(&self) -> usize {
        self.target
    }
}

fn bounded_target(target: i64) -> Result<usize, ProblemError> {
    let value = usize::try_from(target).map_err(|_| ProblemError::NegativeTarget { target })?;
    if value > MAX_TARGET {
        return Err(ProblemError::TargetTooLarge {
            target,
            limit: MAX_TARGET,
        });
    }
    Ok(value)
}

/// A validated problem paired with the algorithm that will step through it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    BubbleSort(ArrayProblem),
    InsertionSort(ArrayProblem),
    LinearSearch(SearchProblem),
    BinarySearch(SearchProblem),
    Dijkstra(GridProblem),
    AStar(GridProblem),
    Lcs(LcsProblem),
    SubsetSum(SubsetSumProblem),
    Combinations(CombinationProblem),
}

impl Problem {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Problem::BubbleSort(_) => Algorithm::BubbleSort,
            Problem::InsertionSort(_) => Algorithm::InsertionSort,
            Problem::LinearSearch(_) => Algorithm::LinearSearch,
            Problem::BinarySearch(_) => Algorithm::BinarySearch,
            Problem::Dijkstra(_) => Algorithm::Dijkstra,
            Problem::AStar(_) => Algorithm::AStar,
            Problem::Lcs(_) => Algorithm::Lcs,
            Problem::SubsetSum(_) => Algorithm::SubsetSum,
            Problem::Combinations(_) => Algorithm::Combinations,
        }
    }
}

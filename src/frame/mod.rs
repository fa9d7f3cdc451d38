//! Frames: the observable output of a step machine
//!
//! A [`Frame`] is one snapshot of an algorithm's progress, emitted per
//! `advance()`. Each variant owns independent copies of everything a consumer
//! needs to draw it (array contents, grid dimensions, DP tables), so holding on
//! to a frame never exposes later mutations of the machine that produced it.
//!
//! - [`SortFrame`]: array + indices under comparison/swap + finalized indices
//! - [`SearchFrame`]: array + probed index + verdict
//! - [`PathFrame`]: cells touched this tick + open set + path (terminal only)
//! - [`LcsFrame`], [`SubsetSumFrame`], [`CombinationFrame`]: one table cell
//!   update, the cursor, and whatever answer is known so far
//!
//! [`history`] keeps emitted frames for replay.

pub mod history;

pub use history::FrameHistory;

use crate::problem::Coord;
use std::mem::size_of;

/// One snapshot emitted by a step machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Sort(SortFrame),
    Search(SearchFrame),
    Path(PathFrame),
    Lcs(LcsFrame),
    SubsetSum(SubsetSumFrame),
    Combination(CombinationFrame),
}

impl Frame {
    /// Check that every index the frame carries points into the data it
    /// carries. A failure means the machine that built it is broken.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Frame::Sort(f) => f.validate(),
            Frame::Search(f) => f.validate(),
            Frame::Path(f) => f.validate(),
            Frame::Lcs(f) => f.validate(),
            Frame::SubsetSum(f) => f.validate(),
            Frame::Combination(f) => f.validate(),
        }
    }

    /// Estimate the memory held by this frame in bytes
    pub fn estimated_size(&self) -> usize {
        // Rough: payload only, ignoring allocator overhead
        let payload = match self {
            Frame::Sort(f) => (f.array.len() + f.done.len()) * size_of::<i64>(),
            Frame::Search(f) => f.array.len() * size_of::<i64>(),
            Frame::Path(f) => {
                (f.searching.len() + f.frontier.len() + f.path.len()) * size_of::<Coord>()
            }
            Frame::Lcs(f) => {
                f.table.iter().map(Vec::len).sum::<usize>() * size_of::<usize>()
                    + (f.first.len() + f.second.len() + f.subsequence.len()) * size_of::<char>()
            }
            Frame::SubsetSum(f) => {
                f.table.iter().map(Vec::len).sum::<usize>()
                    + f.items.len() * size_of::<usize>()
            }
            Frame::Combination(f) => {
                f.table.len() * size_of::<u64>()
                    + f.examples.iter().map(Vec::len).sum::<usize>() * size_of::<usize>()
            }
        };
        size_of::<Frame>() + payload
    }
}

/// Comparison-array frame (bubble sort, insertion sort)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortFrame {
    pub array: Vec<i64>,
    /// Pair being compared this step
    pub comparing: Option<(usize, usize)>,
    /// Pair that was just swapped (or shifted / placed for insertion sort)
    pub swapping: Option<(usize, usize)>,
    /// Insertion sort only: where the current key came to rest
    pub settled: Option<usize>,
    /// Indices proven final, in the order they were proven
    pub done: Vec<usize>,
}

impl SortFrame {
    fn validate(&self) -> Result<(), String> {
        let len = self.array.len();
        let pairs = self.comparing.iter().chain(self.swapping.iter());
        for &(a, b) in pairs {
            check_index("pair index", a.max(b), len)?;
        }
        if let Some(settled) = self.settled {
            check_index("settled index", settled, len)?;
        }
        for &index in &self.done {
            check_index("done index", index, len)?;
        }
        let mut seen = vec![false; len];
        for &index in &self.done {
            if std::mem::replace(&mut seen[index], true) {
                return Err(format!("done index {} listed twice", index));
            }
        }
        Ok(())
    }
}

/// Verdict of a search frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The probed index did not match; the search continues
    Probing,
    /// The target sits at this index; the search is over
    Found(usize),
    /// Every candidate was ruled out
    NotFound,
}

impl SearchOutcome {
    /// Numeric encoding: matching index, `-1` when absent, `None` while
    /// still probing
    pub fn as_index(self) -> Option<isize> {
        match self {
            SearchOutcome::Probing => None,
            SearchOutcome::Found(index) => Some(index as isize),
            SearchOutcome::NotFound => Some(-1),
        }
    }
}

/// Search frame (linear search, binary search)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFrame {
    pub array: Vec<i64>,
    pub target: i64,
    /// Index probed this step; `None` on the final not-found frame
    pub probing: Option<usize>,
    /// Binary search only: inclusive `(left, right)` window around the probe
    pub bounds: Option<(usize, usize)>,
    pub outcome: SearchOutcome,
}

impl SearchFrame {
    fn validate(&self) -> Result<(), String> {
        let len = self.array.len();
        if let Some(probe) = self.probing {
            check_index("probe", probe, len)?;
        }
        if let Some((left, right)) = self.bounds {
            check_index("right bound", right, len)?;
            if left > right {
                return Err(format!("empty window ({}, {}) was probed", left, right));
            }
        }
        match self.outcome {
            SearchOutcome::Found(index) if Some(index) != self.probing => {
                Err(format!("found index {} was not the probed index", index))
            }
            SearchOutcome::NotFound if self.probing.is_some() => {
                Err("not-found frame still carries a probe".to_string())
            }
            _ => Ok(()),
        }
    }
}

/// Grid search frame (Dijkstra, A*)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathFrame {
    pub rows: usize,
    pub cols: usize,
    /// Cell expanded this tick; `None` on the terminal frame
    pub current: Option<Coord>,
    /// Dijkstra: neighbours improved this tick. A*: the whole closed set.
    pub searching: Vec<Coord>,
    /// A* only: the open set after this tick
    pub frontier: Vec<Coord>,
    /// Start-to-end path, non-empty only on the terminal frame
    pub path: Vec<Coord>,
}

impl PathFrame {
    /// Edge count of the reconstructed path, if this frame carries one
    pub fn path_length(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }

    fn validate(&self) -> Result<(), String> {
        let cells = self
            .current
            .iter()
            .chain(&self.searching)
            .chain(&self.frontier)
            .chain(&self.path);
        for coord in cells {
            if coord.row >= self.rows || coord.col >= self.cols {
                return Err(format!(
                    "cell {} outside {}x{} grid",
                    coord, self.rows, self.cols
                ));
            }
        }
        for pair in self.path.windows(2) {
            if pair[0].manhattan(pair[1]) != 1 {
                return Err(format!("path jumps from {} to {}", pair[0], pair[1]));
            }
        }
        Ok(())
    }
}

/// LCS table-fill frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsFrame {
    pub first: Vec<char>,
    pub second: Vec<char>,
    /// `(len1 + 1) x (len2 + 1)` table as filled so far
    pub table: Vec<Vec<usize>>,
    /// Cell `(i, j)` written this step
    pub cursor: (usize, usize),
    /// Whether `first[i - 1] == second[j - 1]`
    pub matched: bool,
    /// Symbols appended on every match so far
    pub subsequence: String,
    /// Indices into `first` / `second` picked out by backtracking from the
    /// cursor, most recent first
    pub highlight_first: Vec<usize>,
    pub highlight_second: Vec<usize>,
    /// The longest common subsequence, set on the last cell only
    pub answer: Option<String>,
}

impl LcsFrame {
    fn validate(&self) -> Result<(), String> {
        check_table_shape(&self.table, self.first.len() + 1, self.second.len() + 1)?;
        let (i, j) = self.cursor;
        if i == 0 || i > self.first.len() || j == 0 || j > self.second.len() {
            return Err(format!("cursor ({}, {}) outside the table body", i, j));
        }
        for &index in &self.highlight_first {
            check_index("highlight", index, self.first.len())?;
        }
        for &index in &self.highlight_second {
            check_index("highlight", index, self.second.len())?;
        }
        Ok(())
    }
}

/// Subset-sum reachability frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetSumFrame {
    pub items: Vec<usize>,
    pub target: usize,
    /// `(n + 1) x (target + 1)` reachability table as filled so far
    pub table: Vec<Vec<bool>>,
    /// Cell `(i, s)` written this step
    pub cursor: (usize, usize),
    /// Items summing to `target`, once some prefix reaches it
    pub witness: Option<Vec<usize>>,
}

impl SubsetSumFrame {
    pub fn reachable(&self) -> bool {
        let (i, s) = self.cursor;
        self.table[i][s]
    }

    fn validate(&self) -> Result<(), String> {
        check_table_shape(&self.table, self.items.len() + 1, self.target + 1)?;
        let (i, s) = self.cursor;
        if i > self.items.len() || s > self.target {
            return Err(format!("cursor ({}, {}) outside the table", i, s));
        }
        if let Some(witness) = &self.witness {
            let sum: usize = witness.iter().sum();
            if sum != self.target {
                return Err(format!("witness sums to {}, not {}", sum, self.target));
            }
        }
        Ok(())
    }
}

/// Combination-count frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationFrame {
    pub items: Vec<usize>,
    pub target: usize,
    /// `target + 1` way counts as accumulated so far
    pub table: Vec<u64>,
    /// `(item index, sum)` updated this step
    pub cursor: (usize, usize),
    /// A few illustrative ways to reach `target`, filled on the last cell
    pub examples: Vec<Vec<usize>>,
}

impl CombinationFrame {
    fn validate(&self) -> Result<(), String> {
        if self.table.len() != self.target + 1 {
            return Err(format!(
                "table has {} cells, expected {}",
                self.table.len(),
                self.target + 1
            ));
        }
        let (item, sum) = self.cursor;
        check_index("item cursor", item, self.items.len())?;
        check_index("sum cursor", sum, self.table.len())?;
        Ok(())
    }
}

fn check_index(what: &str, index: usize, len: usize) -> Result<(), String> {
    if index < len {
        Ok(())
    } else {
        Err(format!("{} {} out of range for length {}", what, index, len))
    }
}

fn check_table_shape<T>(table: &[Vec<T>], rows: usize, cols: usize) -> Result<(), String> {
    if table.len() != rows {
        return Err(format!("table has {} rows, expected {}", table.len(), rows));
    }
    if let Some(row) = table.iter().position(|row| row.len() != cols) {
        return Err(format!("table row {} is ragged", row));
    }
    Ok(())
}

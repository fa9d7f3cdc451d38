//! Table-fill machines (dynamic programming)
//!
//! All three walk a two-axis cursor in row-major order: the inner axis counts
//! up to its bound, then resets to 1 while the outer axis moves on. Each
//! advance writes exactly one cell and emits a frame holding a copy of the
//! whole table. The machine is terminal once the outer axis passes its bound.
//!
//! - [`Lcs`]: `(len1 + 1) x (len2 + 1)` lengths, cursor `(i, j)`
//! - [`SubsetSum`]: `(n + 1) x (target + 1)` reachability, cursor `(i, s)`
//! - [`CombinationCount`]: `target + 1` way counts, cursor `(item, s)`; the
//!   item loop is outermost so the count is of multisets (each item usable any
//!   number of times), not of orderings

use super::{Algorithm, StepMachine};
use crate::frame::{CombinationFrame, Frame, LcsFrame, SubsetSumFrame};
use crate::problem::{CombinationProblem, LcsProblem, SubsetSumProblem};

/// How many example combinations the last combination frame lists
pub const MAX_EXAMPLES: usize = 3;

/// Row-major two-axis cursor over `1..=outer_bound` x `1..=inner_bound`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    outer: usize,
    inner: usize,
    outer_bound: usize,
    inner_bound: usize,
}

impl Cursor {
    fn new(outer_bound: usize, inner_bound: usize) -> Self {
        Cursor {
            outer: 1,
            inner: 1,
            outer_bound,
            inner_bound,
        }
    }

    fn is_done(&self) -> bool {
        self.outer > self.outer_bound || self.inner > self.inner_bound
    }

    fn position(&self) -> (usize, usize) {
        (self.outer, self.inner)
    }

    fn step(&mut self) {
        if self.inner < self.inner_bound {
            self.inner += 1;
        } else {
            self.inner = 1;
            self.outer += 1;
        }
    }
}

/// Longest common subsequence
#[derive(Debug, Clone)]
pub struct Lcs {
    first: Vec<char>,
    second: Vec<char>,
    table: Vec<Vec<usize>>,
    cursor: Cursor,
    /// Every matched symbol, in the order the cursor met it
    subsequence: String,
}

impl Lcs {
    pub fn new(problem: &LcsProblem) -> Self {
        let first = problem.first().to_vec();
        let second = problem.second().to_vec();
        let table = vec![vec![0; second.len() + 1]; first.len() + 1];
        let cursor = Cursor::new(first.len(), second.len());
        Lcs {
            first,
            second,
            table,
            cursor,
            subsequence: String::new(),
        }
    }

    /// Backtrack from `(i, j)` against the running subsequence, returning the
    /// matched indices into each sequence (latest first).
    ///
    /// A diagonal step is taken only on a symbol match that also equals the
    /// subsequence's current tail; otherwise the walk moves toward the larger
    /// neighbour, preferring to move left on ties.
    pub fn highlight(&self, i: usize, j: usize) -> (Vec<usize>, Vec<usize>) {
        let (mut i, mut j) = (i, j);
        let mut tail: Vec<char> = self.subsequence.chars().collect();
        let mut in_first = Vec::new();
        let mut in_second = Vec::new();

        while i > 0 && j > 0 {
            let Some(&last) = tail.last() else { break };
            let symbol = self.first[i - 1];
            if symbol == self.second[j - 1] && symbol == last {
                in_first.push(i - 1);
                in_second.push(j - 1);
                tail.pop();
                i -= 1;
                j -= 1;
            } else if self.table[i - 1][j] > self.table[i][j - 1] {
                i -= 1;
            } else {
                j -= 1;
            }
        }
        (in_first, in_second)
    }

    /// Standard backtrack from the bottom-right cell of a filled table
    fn answer(&self) -> String {
        let (mut i, mut j) = (self.first.len(), self.second.len());
        let mut symbols = Vec::new();
        while i > 0 && j > 0 {
            if self.first[i - 1] == self.second[j - 1] {
                symbols.push(self.first[i - 1]);
                i -= 1;
                j -= 1;
            } else if self.table[i - 1][j] > self.table[i][j - 1] {
                i -= 1;
            } else {
                j -= 1;
            }
        }
        symbols.iter().rev().collect()
    }
}

impl StepMachine for Lcs {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Lcs
    }

    fn advance(&mut self) -> Option<Frame> {
        if self.cursor.is_done() {
            return None;
        }

        let (i, j) = self.cursor.position();
        let matched = self.first[i - 1] == self.second[j - 1];
        self.table[i][j] = if matched {
            self.subsequence.push(self.first[i - 1]);
            self.table[i - 1][j - 1] + 1
        } else {
            self.table[i - 1][j].max(self.table[i][j - 1])
        };
        self.cursor.step();

        let (highlight_first, highlight_second) = self.highlight(i, j);
        let answer = self.cursor.is_done().then(|| self.answer());

        Some(Frame::Lcs(LcsFrame {
            first: self.first.clone(),
            second: self.second.clone(),
            table: self.table.clone(),
            cursor: (i, j),
            matched,
            subsequence: self.subsequence.clone(),
            highlight_first,
            highlight_second,
            answer,
        }))
    }

    fn is_terminal(&self) -> bool {
        self.cursor.is_done()
    }
}

/// Subset-sum reachability: can some subset of the first `i` items sum to `s`?
#[derive(Debug, Clone)]
pub struct SubsetSum {
    items: Vec<usize>,
    target: usize,
    table: Vec<Vec<bool>>,
    cursor: Cursor,
    witness: Option<Vec<usize>>,
    /// A zero target has no cells to fill; one boundary frame is still emitted
    boundary_pending: bool,
}

impl SubsetSum {
    pub fn new(problem: &SubsetSumProblem) -> Self {
        let items = problem.items().to_vec();
        let target = problem.target();
        let mut table = vec![vec![false; target + 1]; items.len() + 1];
        for row in &mut table {
            row[0] = true;
        }
        let cursor = Cursor::new(items.len(), target);
        SubsetSum {
            boundary_pending: target == 0,
            items,
            target,
            table,
            cursor,
            witness: None,
        }
    }

    /// Walk the table back from `(i, s)` to recover one subset summing to `s`.
    /// Only meaningful when `table[i][s]` is true.
    fn reconstruct(&self, i: usize, s: usize) -> Vec<usize> {
        let (mut i, mut s) = (i, s);
        let mut chosen = Vec::new();
        while i > 0 && s > 0 {
            if !self.table[i - 1][s] {
                let item = self.items[i - 1];
                chosen.push(item);
                s -= item;
            }
            i -= 1;
        }
        chosen.reverse();
        chosen
    }

    fn frame(&self, cursor: (usize, usize)) -> Frame {
        Frame::SubsetSum(SubsetSumFrame {
            items: self.items.clone(),
            target: self.target,
            table: self.table.clone(),
            cursor,
            witness: self.witness.clone(),
        })
    }
}

impl StepMachine for SubsetSum {
    fn algorithm(&self) -> Algorithm {
        Algorithm::SubsetSum
    }

    fn advance(&mut self) -> Option<Frame> {
        if self.boundary_pending {
            self.boundary_pending = false;
            self.witness = Some(Vec::new());
            return Some(self.frame((self.items.len(), 0)));
        }
        if self.cursor.is_done() {
            return None;
        }

        let (i, s) = self.cursor.position();
        let item = self.items[i - 1];
        let without = self.table[i - 1][s];
        let with = item <= s && self.table[i - 1][s - item];
        self.table[i][s] = without || with;

        if s == self.target && self.table[i][s] {
            self.witness = Some(self.reconstruct(i, s));
        }
        self.cursor.step();

        Some(self.frame((i, s)))
    }

    fn is_terminal(&self) -> bool {
        !self.boundary_pending && self.cursor.is_done()
    }
}

/// Number of multisets of items (each usable repeatedly) summing to a target
#[derive(Debug, Clone)]
pub struct CombinationCount {
    items: Vec<usize>,
    target: usize,
    table: Vec<u64>,
    /// Outer axis is 1-based over items; frames report it 0-based
    cursor: Cursor,
    examples: Vec<Vec<usize>>,
    boundary_pending: bool,
}

impl CombinationCount {
    pub fn new(problem: &CombinationProblem) -> Self {
        let items = problem.items().to_vec();
        let target = problem.target();
        let mut table = vec![0; target + 1];
        table[0] = 1;
        let cursor = Cursor::new(items.len(), target);
        CombinationCount {
            boundary_pending: target == 0,
            items,
            target,
            table,
            cursor,
            examples: Vec::new(),
        }
    }

    fn frame(&self, cursor: (usize, usize)) -> Frame {
        Frame::Combination(CombinationFrame {
            items: self.items.clone(),
            target: self.target,
            table: self.table.clone(),
            cursor,
            examples: self.examples.clone(),
        })
    }
}

/// Illustrative ways to write `target` as a sequence of items.
///
/// Depth-first over every item at every position, so the results are ordered
/// sequences and may repeat a multiset in a different order. Stops after
/// `limit`.
pub fn example_combinations(items: &[usize], target: usize, limit: usize) -> Vec<Vec<usize>> {
    if items.contains(&0) {
        return Vec::new();
    }
    let mut reachable = vec![false; target + 1];
    reachable[0] = true;
    for sum in 1..=target {
        reachable[sum] = items
            .iter()
            .any(|&item| item <= sum && reachable[sum - item]);
    }
    search_examples(items, target, limit, |sum| reachable[sum])
}

/// Iterative depth-first search for up to `limit` item sequences summing to
/// `target`. Branches into a remainder `reachable` rejects are skipped, so
/// every branch taken ends in a result.
fn search_examples(
    items: &[usize],
    target: usize,
    limit: usize,
    reachable: impl Fn(usize) -> bool,
) -> Vec<Vec<usize>> {
    let mut found = Vec::new();
    if limit == 0 || !reachable(target) {
        return found;
    }

    let mut used = Vec::new();
    // (remaining sum, next item index to try)
    let mut stack = vec![(target, 0)];
    while let Some(top) = stack.last_mut() {
        let (remaining, next) = *top;
        if remaining == 0 {
            found.push(used.clone());
            if found.len() >= limit {
                break;
            }
            stack.pop();
            used.pop();
            continue;
        }

        let branch = (next..items.len())
            .find(|&j| items[j] <= remaining && reachable(remaining - items[j]));
        match branch {
            Some(j) => {
                top.1 = j + 1;
                used.push(items[j]);
                stack.push((remaining - items[j], 0));
            }
            None => {
                stack.pop();
                used.pop();
            }
        }
    }
    found
}

impl StepMachine for CombinationCount {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Combinations
    }

    fn advance(&mut self) -> Option<Frame> {
        if self.boundary_pending {
            self.boundary_pending = false;
            self.examples = vec![Vec::new()];
            return Some(self.frame((self.items.len() - 1, 0)));
        }
        if self.cursor.is_done() {
            return None;
        }

        let (outer, s) = self.cursor.position();
        let index = outer - 1;
        let item = self.items[index];
        if item <= s {
            self.table[s] = self.table[s].saturating_add(self.table[s - item]);
        }
        self.cursor.step();

        if self.cursor.is_done() {
            let table = &self.table;
            self.examples =
                search_examples(&self.items, self.target, MAX_EXAMPLES, |sum| table[sum] > 0);
        }

        Some(self.frame((index, s)))
    }

    fn is_terminal(&self) -> bool {
        !self.boundary_pending && self.cursor.is_done()
    }
}

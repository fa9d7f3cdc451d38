//! Search machines over a fixed array
//!
//! Linear search probes left to right and stops on the first match. Binary
//! search probes `floor((left + right) / 2)` over an inclusive window and
//! assumes the array is sorted ascending; on unsorted input it still
//! terminates, but which index (if any) it reports is unspecified.
//!
//! Both emit one frame per probe. A match ends the machine on that frame; an
//! exhausted search emits one extra frame with [`SearchOutcome::NotFound`].

use super::{Algorithm, StepMachine};
use crate::frame::{Frame, SearchFrame, SearchOutcome};
use crate::problem::SearchProblem;

/// Left-to-right scan
#[derive(Debug, Clone)]
pub struct LinearSearch {
    array: Vec<i64>,
    target: i64,
    next: usize,
    finished: bool,
}

impl LinearSearch {
    pub fn new(problem: &SearchProblem) -> Self {
        LinearSearch {
            array: problem.values().to_vec(),
            target: problem.target(),
            next: 0,
            finished: false,
        }
    }
}

impl StepMachine for LinearSearch {
    fn algorithm(&self) -> Algorithm {
        Algorithm::LinearSearch
    }

    fn advance(&mut self) -> Option<Frame> {
        if self.finished {
            return None;
        }

        let index = self.next;
        let (probing, outcome) = if index < self.array.len() {
            self.next += 1;
            if self.array[index] == self.target {
                self.finished = true;
                (Some(index), SearchOutcome::Found(index))
            } else {
                (Some(index), SearchOutcome::Probing)
            }
        } else {
            self.finished = true;
            (None, SearchOutcome::NotFound)
        };

        Some(Frame::Search(SearchFrame {
            array: self.array.clone(),
            target: self.target,
            probing,
            bounds: None,
            outcome,
        }))
    }

    fn is_terminal(&self) -> bool {
        self.finished
    }
}

/// Halving search over an inclusive `[left, right]` window
#[derive(Debug, Clone)]
pub struct BinarySearch {
    array: Vec<i64>,
    target: i64,
    // Signed: `right` drops to -1 when the target is below every element
    left: isize,
    right: isize,
    finished: bool,
}

impl BinarySearch {
    pub fn new(problem: &SearchProblem) -> Self {
        BinarySearch {
            array: problem.values().to_vec(),
            target: problem.target(),
            left: 0,
            right: problem.values().len() as isize - 1,
            finished: false,
        }
    }

    fn frame(&self, probing: Option<usize>, bounds: Option<(usize, usize)>, outcome: SearchOutcome) -> Frame {
        Frame::Search(SearchFrame {
            array: self.array.clone(),
            target: self.target,
            probing,
            bounds,
            outcome,
        })
    }
}

impl StepMachine for BinarySearch {
    fn algorithm(&self) -> Algorithm {
        Algorithm::BinarySearch
    }

    fn advance(&mut self) -> Option<Frame> {
        if self.finished {
            return None;
        }

        if self.left > self.right {
            self.finished = true;
            return Some(self.frame(None, None, SearchOutcome::NotFound));
        }

        // left <= right keeps both non-negative here
        let (left, right) = (self.left as usize, self.right as usize);
        let mid = (left + right) / 2;
        let value = self.array[mid];

        let outcome = if value == self.target {
            self.finished = true;
            SearchOutcome::Found(mid)
        } else {
            if value < self.target {
                self.left = mid as isize + 1;
            } else {
                self.right = mid as isize - 1;
            }
            SearchOutcome::Probing
        };

        Some(self.frame(Some(mid), Some((left, right)), outcome))
    }

    fn is_terminal(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machines::run_to_end;

    fn outcomes(frames: &[Frame]) -> Vec<(Option<usize>, SearchOutcome)> {
        frames
            .iter()
            .map(|f| match f {
                Frame::Search(s) => (s.probing, s.outcome),
                other => panic!("unexpected frame {:?}", other),
            })
            .collect()
    }

    #[test]
    fn test_linear_stops_on_match() {
        let problem = SearchProblem::new(vec![4, 8, 15, 16], 8).unwrap();
        let mut machine = LinearSearch::new(&problem);
        let frames = run_to_end(&mut machine);
        assert_eq!(
            outcomes(&frames),
            vec![
                (Some(0), SearchOutcome::Probing),
                (Some(1), SearchOutcome::Found(1))
            ]
        );
        assert!(machine.is_terminal());
    }

    #[test]
    fn test_linear_exhausts_with_not_found_frame() {
        let problem = SearchProblem::new(vec![1, 2], 5).unwrap();
        let frames = run_to_end(&mut LinearSearch::new(&problem));
        assert_eq!(frames.len(), 3);
        assert_eq!(outcomes(&frames)[2], (None, SearchOutcome::NotFound));
    }

    #[test]
    fn test_binary_probes_midpoints() {
        let problem = SearchProblem::new(vec![1, 3, 5, 7, 9, 11, 13], 11).unwrap();
        let frames = run_to_end(&mut BinarySearch::new(&problem));
        assert_eq!(
            outcomes(&frames),
            vec![
                (Some(3), SearchOutcome::Probing),
                (Some(5), SearchOutcome::Found(5))
            ]
        );
    }

    #[test]
    fn test_binary_below_every_element() {
        let problem = SearchProblem::new(vec![10, 20, 30], 1).unwrap();
        let frames = run_to_end(&mut BinarySearch::new(&problem));
        let outcomes = outcomes(&frames);
        assert_eq!(outcomes[0], (Some(1), SearchOutcome::Probing));
        assert_eq!(outcomes[1], (Some(0), SearchOutcome::Probing));
        assert_eq!(outcomes[2], (None, SearchOutcome::NotFound));
    }
}

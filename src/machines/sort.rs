//! Comparison-array machines
//!
//! Both sorts compare with a strict `>`, so equal elements never trade places
//! and the sorts are stable.
//!
//! # Bubble sort
//!
//! One frame per comparison of `(j, j + 1)`, plus one frame right after each
//! swap. After outer pass `i` the index `n - i - 1` is final and is appended
//! to `done`; index 0 is only appended once the outer loop has finished. The
//! last frame carries the sorted array with every index done.
//!
//! # Insertion sort
//!
//! For each key: one frame per comparison against its left neighbour, one per
//! shift, a placement frame when the key moved, and a settled frame marking
//! where it landed. `done` stays empty until the final frame, which marks every
//! index.

use super::{Algorithm, StepMachine};
use crate::frame::{Frame, SortFrame};
use crate::problem::ArrayProblem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BubblePhase {
    /// About to compare `(j, j + 1)` or close the pass
    Scan,
    /// Compared `(j, j + 1)`; swap if out of order
    Decide,
    Final,
    Exhausted,
}

/// Bubble sort as an explicit state machine
#[derive(Debug, Clone)]
pub struct BubbleSort {
    array: Vec<i64>,
    done: Vec<usize>,
    /// Outer pass
    i: usize,
    /// Inner comparison index
    j: usize,
    phase: BubblePhase,
}

impl BubbleSort {
    pub fn new(problem: &ArrayProblem) -> Self {
        BubbleSort {
            array: problem.values().to_vec(),
            done: Vec::new(),
            i: 0,
            j: 0,
            phase: BubblePhase::Scan,
        }
    }

    fn frame(&self, comparing: Option<(usize, usize)>, swapping: Option<(usize, usize)>) -> Frame {
        Frame::Sort(SortFrame {
            array: self.array.clone(),
            comparing,
            swapping,
            settled: None,
            done: self.done.clone(),
        })
    }
}

impl StepMachine for BubbleSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::BubbleSort
    }

    fn advance(&mut self) -> Option<Frame> {
        let n = self.array.len();
        loop {
            match self.phase {
                BubblePhase::Scan => {
                    if self.i + 1 >= n {
                        self.phase = BubblePhase::Final;
                    } else if self.j + self.i + 1 >= n {
                        // Largest remaining element has bubbled into place
                        self.done.push(n - self.i - 1);
                        self.i += 1;
                        self.j = 0;
                    } else {
                        self.phase = BubblePhase::Decide;
                        return Some(self.frame(Some((self.j, self.j + 1)), None));
                    }
                }
                BubblePhase::Decide => {
                    let j = self.j;
                    self.j += 1;
                    self.phase = BubblePhase::Scan;
                    if self.array[j] > self.array[j + 1] {
                        self.array.swap(j, j + 1);
                        return Some(self.frame(None, Some((j, j + 1))));
                    }
                }
                BubblePhase::Final => {
                    self.done.push(0);
                    self.phase = BubblePhase::Exhausted;
                    return Some(self.frame(None, None));
                }
                BubblePhase::Exhausted => return None,
            }
        }
    }

    fn is_terminal(&self) -> bool {
        self.phase == BubblePhase::Exhausted
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InsertionPhase {
    /// Pick up `array[i]` as the key
    Outer,
    /// Compare the key's slot with its left neighbour
    Test,
    /// Shift the left neighbour into the key's slot
    Shift,
    /// Drop the key into its slot
    Place,
    /// Report where the key landed
    Settle,
    Final,
    Exhausted,
}

/// Insertion sort as an explicit state machine
#[derive(Debug, Clone)]
pub struct InsertionSort {
    array: Vec<i64>,
    i: usize,
    j: usize,
    key: i64,
    phase: InsertionPhase,
}

impl InsertionSort {
    pub fn new(problem: &ArrayProblem) -> Self {
        InsertionSort {
            array: problem.values().to_vec(),
            i: 1,
            j: 1,
            key: 0,
            phase: InsertionPhase::Outer,
        }
    }

    fn frame(
        &self,
        comparing: Option<(usize, usize)>,
        swapping: Option<(usize, usize)>,
        settled: Option<usize>,
        done: Vec<usize>,
    ) -> Frame {
        Frame::Sort(SortFrame {
            array: self.array.clone(),
            comparing,
            swapping,
            settled,
            done,
        })
    }
}

impl StepMachine for InsertionSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::InsertionSort
    }

    fn advance(&mut self) -> Option<Frame> {
        loop {
            match self.phase {
                InsertionPhase::Outer => {
                    if self.i >= self.array.len() {
                        self.phase = InsertionPhase::Final;
                    } else {
                        self.key = self.array[self.i];
                        self.j = self.i;
                        self.phase = InsertionPhase::Test;
                    }
                }
                InsertionPhase::Test => {
                    if self.j > 0 && self.array[self.j - 1] > self.key {
                        self.phase = InsertionPhase::Shift;
                        return Some(self.frame(Some((self.j - 1, self.j)), None, None, Vec::new()));
                    }
                    self.phase = InsertionPhase::Place;
                }
                InsertionPhase::Shift => {
                    let j = self.j;
                    self.array[j] = self.array[j - 1];
                    self.j -= 1;
                    self.phase = InsertionPhase::Test;
                    return Some(self.frame(None, Some((j - 1, j)), None, Vec::new()));
                }
                InsertionPhase::Place => {
                    self.array[self.j] = self.key;
                    self.phase = InsertionPhase::Settle;
                    if self.j != self.i {
                        return Some(self.frame(None, Some((self.j, self.i)), None, Vec::new()));
                    }
                }
                InsertionPhase::Settle => {
                    let settled = self.j;
                    self.i += 1;
                    self.phase = InsertionPhase::Outer;
                    return Some(self.frame(None, None, Some(settled), Vec::new()));
                }
                InsertionPhase::Final => {
                    self.phase = InsertionPhase::Exhausted;
                    let done = (0..self.array.len()).collect();
                    return Some(self.frame(None, None, None, done));
                }
                InsertionPhase::Exhausted => return None,
            }
        }
    }

    fn is_terminal(&self) -> bool {
        self.phase == InsertionPhase::Exhausted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machines::run_to_end;

    fn sort_frames(frames: &[Frame]) -> Vec<&SortFrame> {
        frames
            .iter()
            .map(|f| match f {
                Frame::Sort(s) => s,
                other => panic!("unexpected frame {:?}", other),
            })
            .collect()
    }

    #[test]
    fn test_bubble_pass_marks_tail_before_head() {
        let problem = ArrayProblem::new(vec![2, 1, 3]).unwrap();
        let mut machine = BubbleSort::new(&problem);
        let frames = run_to_end(&mut machine);
        let frames = sort_frames(&frames);

        // pass 0: cmp(0,1) swap(0,1) cmp(1,2); pass 1: cmp(0,1); final
        assert_eq!(frames.len(), 5);
        assert_eq!(frames[0].comparing, Some((0, 1)));
        assert_eq!(frames[1].swapping, Some((0, 1)));
        assert_eq!(frames[1].array, vec![1, 2, 3]);
        assert_eq!(frames[3].done, vec![2]);
        assert_eq!(frames[4].done, vec![2, 1, 0]);
        assert!(machine.is_terminal());
        assert!(machine.advance().is_none());
    }

    #[test]
    fn test_single_element_emits_only_final_frame() {
        let problem = ArrayProblem::new(vec![9]).unwrap();
        let frames = run_to_end(&mut BubbleSort::new(&problem));
        assert_eq!(frames.len(), 1);
        let frames = run_to_end(&mut InsertionSort::new(&problem));
        assert_eq!(frames.len(), 1);
    }

    #[test]
    fn test_insertion_sort_frame_sequence() {
        let problem = ArrayProblem::new(vec![3, 1]).unwrap();
        let frames = run_to_end(&mut InsertionSort::new(&problem));
        let frames = sort_frames(&frames);

        assert_eq!(frames[0].comparing, Some((0, 1)));
        assert_eq!(frames[1].swapping, Some((0, 1)));
        assert_eq!(frames[1].array, vec![3, 3]);
        assert_eq!(frames[2].swapping, Some((0, 1)));
        assert_eq!(frames[2].array, vec![1, 3]);
        assert_eq!(frames[3].settled, Some(0));
        assert_eq!(frames[4].done, vec![0, 1]);
        assert_eq!(frames.len(), 5);
    }

    #[test]
    fn test_equal_elements_never_swap() {
        let problem = ArrayProblem::new(vec![4, 4, 4]).unwrap();
        let frames = run_to_end(&mut BubbleSort::new(&problem));
        assert!(sort_frames(&frames).iter().all(|f| f.swapping.is_none()));
    }
}

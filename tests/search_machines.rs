// Integration tests for the search machines

use algoscope::frame::{Frame, SearchFrame, SearchOutcome};
use algoscope::machines::{build, run_to_end};
use algoscope::problem::{Problem, SearchProblem};

fn search_frames(problem: &Problem) -> Vec<SearchFrame> {
    let mut machine = build(problem);
    run_to_end(machine.as_mut())
        .into_iter()
        .map(|frame| match frame {
            Frame::Search(search) => search,
            other => panic!("expected a search frame, got {:?}", other),
        })
        .collect()
}

fn linear(values: &[i64], target: i64) -> Problem {
    Problem::LinearSearch(SearchProblem::new(values.to_vec(), target).expect("valid search"))
}

fn binary(values: &[i64], target: i64) -> Problem {
    Problem::BinarySearch(SearchProblem::new(values.to_vec(), target).expect("valid search"))
}

#[test]
fn test_linear_probes_in_order_until_match() {
    let frames = search_frames(&linear(&[7, 2, 9, 2], 2));
    let probes: Vec<Option<usize>> = frames.iter().map(|f| f.probing).collect();
    assert_eq!(probes, vec![Some(0), Some(1)]);
    assert_eq!(frames[1].outcome, SearchOutcome::Found(1));
    assert_eq!(frames[1].outcome.as_index(), Some(1));
}

#[test]
fn test_linear_not_found_reports_minus_one() {
    let frames = search_frames(&linear(&[7, 2, 9], 4));
    assert_eq!(frames.len(), 4);
    let last = frames.last().expect("frames");
    assert_eq!(last.outcome, SearchOutcome::NotFound);
    assert_eq!(last.outcome.as_index(), Some(-1));
    assert!(frames[..3].iter().all(|f| f.outcome.as_index().is_none()));
}

#[test]
fn test_binary_narrows_window() {
    let frames = search_frames(&binary(&[1, 3, 5, 7, 9, 11, 13, 15], 13));
    let windows: Vec<Option<(usize, usize)>> = frames.iter().map(|f| f.bounds).collect();
    assert_eq!(windows, vec![Some((0, 7)), Some((4, 7)), Some((6, 7))]);
    assert_eq!(frames.last().map(|f| f.outcome), Some(SearchOutcome::Found(6)));
}

#[test]
fn test_binary_absent_target_above_every_element() {
    let frames = search_frames(&binary(&[1, 3, 5], 8));
    let last = frames.last().expect("frames");
    assert_eq!(last.outcome, SearchOutcome::NotFound);
    assert_eq!(last.probing, None);
    // probes 1, 2, then the verdict
    assert_eq!(frames.len(), 3);
}

#[test]
fn test_binary_single_element() {
    let found = search_frames(&binary(&[4], 4));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].outcome, SearchOutcome::Found(0));

    let missing = search_frames(&binary(&[4], 5));
    assert_eq!(missing.last().map(|f| f.outcome), Some(SearchOutcome::NotFound));
}

#[test]
fn test_binary_on_unsorted_input_still_terminates() {
    let frames = search_frames(&binary(&[9, 1, 8, 2, 7], 2));
    assert!(!frames.is_empty());
    let last = frames.last().expect("frames");
    assert_ne!(last.outcome, SearchOutcome::Probing);
}

#[test]
fn test_frames_validate() {
    for problem in [linear(&[3, 1, 2], 2), binary(&[1, 2, 3], 0)] {
        let mut machine = build(&problem);
        for frame in run_to_end(machine.as_mut()) {
            assert_eq!(frame.validate(), Ok(()));
        }
    }
}

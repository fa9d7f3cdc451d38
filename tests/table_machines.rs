// Integration tests for the table-fill machines

use algoscope::frame::{CombinationFrame, Frame, LcsFrame, SubsetSumFrame};
use algoscope::machines::table::{example_combinations, MAX_EXAMPLES};
use algoscope::machines::{build, run_to_end};
use algoscope::problem::{CombinationProblem, LcsProblem, Problem, SubsetSumProblem};

fn frames(problem: &Problem) -> Vec<Frame> {
    let mut machine = build(problem);
    run_to_end(machine.as_mut())
}

fn lcs_frames(first: &str, second: &str) -> Vec<LcsFrame> {
    let problem = Problem::Lcs(LcsProblem::new(first, second).expect("valid strings"));
    frames(&problem)
        .into_iter()
        .map(|frame| match frame {
            Frame::Lcs(lcs) => lcs,
            other => panic!("expected an lcs frame, got {:?}", other),
        })
        .collect()
}

fn subset_frames(items: &[i64], target: i64) -> Vec<SubsetSumFrame> {
    let problem =
        Problem::SubsetSum(SubsetSumProblem::new(items.to_vec(), target).expect("valid items"));
    frames(&problem)
        .into_iter()
        .map(|frame| match frame {
            Frame::SubsetSum(subset) => subset,
            other => panic!("expected a subset-sum frame, got {:?}", other),
        })
        .collect()
}

fn combination_frames(items: &[i64], target: i64) -> Vec<CombinationFrame> {
    let problem = Problem::Combinations(
        CombinationProblem::new(items.to_vec(), target).expect("valid items"),
    );
    frames(&problem)
        .into_iter()
        .map(|frame| match frame {
            Frame::Combination(combos) => combos,
            other => panic!("expected a combination frame, got {:?}", other),
        })
        .collect()
}

#[test]
fn test_lcs_fills_every_cell_in_row_major_order() {
    let frames = lcs_frames("ABC", "AC");
    let cursors: Vec<(usize, usize)> = frames.iter().map(|f| f.cursor).collect();
    assert_eq!(cursors, vec![(1, 1), (1, 2), (2, 1), (2, 2), (3, 1), (3, 2)]);
    assert_eq!(frames.last().and_then(|f| f.answer.clone()), Some("AC".to_string()));
}

#[test]
fn test_lcs_aggtab_gxtxayb() {
    let frames = lcs_frames("AGGTAB", "GXTXAYB");
    assert_eq!(frames.len(), 42);
    let last = frames.last().expect("frames");
    assert_eq!(last.table[6][7], 4);
    assert_eq!(last.answer.as_deref(), Some("GTAB"));
}

#[test]
fn test_lcs_match_flag_follows_symbols() {
    for frame in lcs_frames("ABAB", "BA") {
        let (i, j) = frame.cursor;
        assert_eq!(frame.matched, frame.first[i - 1] == frame.second[j - 1]);
    }
}

#[test]
fn test_lcs_disjoint_strings() {
    let last = lcs_frames("AAA", "BB").pop().expect("frames");
    assert_eq!(last.table[3][2], 0);
    assert_eq!(last.answer.as_deref(), Some(""));
    assert!(last.subsequence.is_empty());
    assert!(last.highlight_first.is_empty());
}

#[test]
fn test_subset_sum_one_three_five_seven() {
    let frames = subset_frames(&[1, 3, 5, 7], 10);
    assert_eq!(frames.len(), 40);
    let last = frames.last().expect("frames");
    assert!(last.reachable());
    assert_eq!(last.witness.as_ref().map(|w| w.iter().sum::<usize>()), Some(10));
}

#[test]
fn test_subset_sum_witness_persists_once_found() {
    let frames = subset_frames(&[2, 3, 9], 5);
    let first_found = frames
        .iter()
        .position(|f| f.witness.is_some())
        .expect("5 = 2 + 3");
    assert!(frames[first_found..].iter().all(|f| f.witness.is_some()));
    assert_eq!(frames[first_found].cursor, (2, 5));
    assert_eq!(frames[first_found].witness, Some(vec![2, 3]));
}

#[test]
fn test_subset_sum_unreachable_target() {
    let frames = subset_frames(&[4, 6], 5);
    let last = frames.last().expect("frames");
    assert!(!last.reachable());
    assert_eq!(last.witness, None);
}

#[test]
fn test_subset_sum_zero_target() {
    let frames = subset_frames(&[3], 0);
    assert_eq!(frames.len(), 1);
    assert!(frames[0].reachable());
    assert_eq!(frames[0].witness, Some(Vec::new()));
}

#[test]
fn test_combination_count_one_two_three() {
    let frames = combination_frames(&[1, 2, 3], 4);
    assert_eq!(frames.len(), 12);
    let last = frames.last().expect("frames");
    assert_eq!(last.table, vec![1, 1, 2, 3, 4]);
    assert_eq!(last.examples.len(), MAX_EXAMPLES);
    assert!(last.examples.iter().all(|e| e.iter().sum::<usize>() == 4));
    // examples only appear on the last frame
    assert!(frames[..11].iter().all(|f| f.examples.is_empty()));
}

#[test]
fn test_combination_count_item_larger_than_target() {
    let last = combination_frames(&[5], 3).pop().expect("frames");
    assert_eq!(last.table[3], 0);
    assert!(last.examples.is_empty());
}

#[test]
fn test_combination_count_zero_target() {
    let frames = combination_frames(&[2, 5], 0);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].table, vec![1]);
    assert_eq!(frames[0].examples, vec![Vec::<usize>::new()]);
}

#[test]
fn test_combination_count_large_target() {
    let last = combination_frames(&[1, 2, 3, 4, 5, 6, 7, 8], 400)
        .pop()
        .expect("frames");
    assert!(last.table[400] > 0);
}

#[test]
fn test_example_combinations_are_ordered_sequences() {
    let examples = example_combinations(&[1, 2], 3, 10);
    assert_eq!(examples, vec![vec![1, 1, 1], vec![1, 2], vec![2, 1]]);
}

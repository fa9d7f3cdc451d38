// Property tests: every machine cross-checked against a brute-force answer

use algoscope::frame::{Frame, SearchOutcome};
use algoscope::machines::{build, run_to_end};
use algoscope::problem::{
    ArrayProblem, CombinationProblem, Coord, GridProblem, LcsProblem, Problem, SearchProblem,
    SubsetSumProblem,
};
use proptest::prelude::*;
use std::collections::VecDeque;

fn frames(problem: &Problem) -> Vec<Frame> {
    let mut machine = build(problem);
    run_to_end(machine.as_mut())
}

fn last_frame(problem: &Problem) -> Frame {
    frames(problem).pop().expect("every machine emits at least one frame")
}

fn bfs_distance(grid: &GridProblem) -> Option<usize> {
    let mut distance = vec![None; grid.rows() * grid.cols()];
    let mut queue = VecDeque::from([grid.start()]);
    distance[grid.index(grid.start())] = Some(0);
    while let Some(cell) = queue.pop_front() {
        let d = distance[grid.index(cell)]?;
        if cell == grid.end() {
            return Some(d);
        }
        for next in cell.neighbors(grid.rows(), grid.cols()) {
            let index = grid.index(next);
            if !grid.is_wall(next) && distance[index].is_none() {
                distance[index] = Some(d + 1);
                queue.push_back(next);
            }
        }
    }
    None
}

fn brute_force_lcs(first: &[char], second: &[char]) -> usize {
    fn is_subsequence(needle: &[char], haystack: &[char]) -> bool {
        let mut rest = haystack.iter();
        needle.iter().all(|c| rest.any(|h| h == c))
    }
    (0u32..1 << first.len())
        .map(|mask| {
            first
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, &c)| c)
                .collect::<Vec<_>>()
        })
        .filter(|candidate| is_subsequence(candidate, second))
        .map(|candidate| candidate.len())
        .max()
        .unwrap_or(0)
}

fn brute_force_subset(items: &[i64], target: i64) -> bool {
    (0u32..1 << items.len()).any(|mask| {
        let sum: i64 = items
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, &v)| v)
            .sum();
        sum == target
    })
}

/// Multisets drawn from `items` (by position, each usable repeatedly)
fn brute_force_combinations(items: &[i64], from: usize, remaining: i64) -> u64 {
    if remaining == 0 {
        return 1;
    }
    (from..items.len())
        .filter(|&j| items[j] <= remaining)
        .map(|j| brute_force_combinations(items, j, remaining - items[j]))
        .sum()
}

fn ceil_log2(n: usize) -> usize {
    (usize::BITS - (n - 1).leading_zeros()) as usize
}

fn grid_strategy() -> impl Strategy<Value = GridProblem> {
    (2usize..7, 2usize..7)
        .prop_flat_map(|(rows, cols)| {
            let cells = rows * cols;
            (
                Just(rows),
                Just(cols),
                proptest::collection::vec(proptest::bool::weighted(0.3), cells),
                0..cells,
                0..cells,
            )
        })
        .prop_filter("start and end must differ", |(_, _, _, start, end)| start != end)
        .prop_map(|(rows, cols, walls, start, end)| {
            let at = |index: usize| Coord::new(index / cols, index % cols);
            let mut grid = GridProblem::new(rows, cols, at(start), at(end)).expect("valid grid");
            let walls: Vec<Coord> = walls
                .iter()
                .enumerate()
                .filter(|(_, &wall)| wall)
                .map(|(index, _)| at(index))
                .collect();
            grid.apply_walls(&walls);
            grid
        })
}

proptest! {
    #[test]
    fn sorts_match_std_sort(values in proptest::collection::vec(-50i64..50, 1..12)) {
        let mut expected = values.clone();
        expected.sort();
        let array = ArrayProblem::new(values).unwrap();

        for problem in [Problem::BubbleSort(array.clone()), Problem::InsertionSort(array)] {
            match last_frame(&problem) {
                Frame::Sort(sort) => {
                    prop_assert_eq!(&sort.array, &expected);
                    let mut done = sort.done.clone();
                    done.sort();
                    prop_assert_eq!(done, (0..expected.len()).collect::<Vec<_>>());
                }
                other => prop_assert!(false, "unexpected frame {:?}", other),
            }
        }
    }

    #[test]
    fn sorts_keep_equal_elements_in_order(values in proptest::collection::vec(0i64..4, 1..12)) {
        let array = ArrayProblem::new(values.clone()).unwrap();

        for problem in [Problem::BubbleSort(array.clone()), Problem::InsertionSort(array)] {
            // original index now sitting at each position; an insertion shift
            // moves the lifted key one slot left, same as a neighbour swap
            let mut order: Vec<usize> = (0..values.len()).collect();
            let mut after_comparison = false;
            let mut last_array = Vec::new();

            for frame in frames(&problem) {
                let sort = match frame {
                    Frame::Sort(sort) => sort,
                    other => panic!("unexpected frame {:?}", other),
                };
                if let (true, Some((left, right))) = (after_comparison, sort.swapping) {
                    prop_assert!(
                        values[order[left]] > values[order[right]],
                        "{} exchanged {} and {}",
                        problem.algorithm(),
                        values[order[left]],
                        values[order[right]]
                    );
                    order.swap(left, right);
                }
                after_comparison = sort.comparing.is_some();
                last_array = sort.array;
            }

            let tracked: Vec<i64> = order.iter().map(|&i| values[i]).collect();
            prop_assert_eq!(&tracked, &last_array);
            let placed: Vec<(i64, usize)> = order.iter().map(|&i| (values[i], i)).collect();
            let mut stable = placed.clone();
            stable.sort();
            prop_assert_eq!(placed, stable);
        }
    }

    #[test]
    fn binary_search_finds_present_targets(
        values in proptest::collection::vec(-100i64..100, 1..40),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut values = values;
        values.sort();
        let target = values[pick.index(values.len())];
        let problem = Problem::BinarySearch(SearchProblem::new(values.clone(), target).unwrap());

        match last_frame(&problem) {
            Frame::Search(search) => match search.outcome {
                SearchOutcome::Found(index) => prop_assert_eq!(values[index], target),
                other => prop_assert!(false, "expected a match, got {:?}", other),
            },
            other => prop_assert!(false, "unexpected frame {:?}", other),
        }
    }

    // The log bound covers probe frames; the closing not-found frame comes on top
    #[test]
    fn binary_search_absent_targets_probe_within_log_bound(
        values in proptest::collection::btree_set(-100i64..100, 1..40),
        target in -120i64..120,
    ) {
        prop_assume!(!values.contains(&target));
        let values: Vec<i64> = values.into_iter().collect();
        let n = values.len();
        let frames = frames(&Problem::BinarySearch(SearchProblem::new(values, target).unwrap()));

        let probes = frames
            .iter()
            .filter(|frame| matches!(frame, Frame::Search(search) if search.probing.is_some()))
            .count();
        prop_assert!(probes <= ceil_log2(n) + 1, "{} probes for {} values", probes, n);
        match frames.last() {
            Some(Frame::Search(search)) => prop_assert_eq!(search.outcome.as_index(), Some(-1)),
            other => prop_assert!(false, "unexpected frame {:?}", other),
        }
    }

    #[test]
    fn grid_paths_are_shortest(grid in grid_strategy()) {
        let expected = bfs_distance(&grid);
        for problem in [Problem::Dijkstra(grid.clone()), Problem::AStar(grid.clone())] {
            let found = match last_frame(&problem) {
                Frame::Path(path) => path.path_length(),
                _ => None,
            };
            prop_assert_eq!(found, expected, "{}", problem.algorithm());
        }
    }

    #[test]
    fn lcs_length_matches_brute_force(first in "[ABC]{1,8}", second in "[ABC]{1,8}") {
        let problem = LcsProblem::new(&first, &second).unwrap();
        let expected = brute_force_lcs(problem.first(), problem.second());
        match last_frame(&Problem::Lcs(problem)) {
            Frame::Lcs(lcs) => {
                prop_assert_eq!(lcs.table[lcs.first.len()][lcs.second.len()], expected);
                prop_assert_eq!(lcs.answer.map(|a| a.chars().count()), Some(expected));
            }
            other => prop_assert!(false, "unexpected frame {:?}", other),
        }
    }

    #[test]
    fn subset_sum_matches_enumeration(
        items in proptest::collection::vec(0i64..20, 1..=12),
        target in 0i64..60,
    ) {
        let expected = brute_force_subset(&items, target);
        let problem = Problem::SubsetSum(SubsetSumProblem::new(items, target).unwrap());
        match last_frame(&problem) {
            Frame::SubsetSum(subset) => {
                prop_assert_eq!(subset.reachable(), expected);
                prop_assert_eq!(subset.witness.is_some(), expected);
                if let Some(witness) = subset.witness {
                    prop_assert_eq!(witness.iter().sum::<usize>(), subset.target);
                }
            }
            other => prop_assert!(false, "unexpected frame {:?}", other),
        }
    }

    #[test]
    fn combination_count_matches_brute_force(
        items in proptest::collection::vec(1i64..6, 1..=4),
        target in 0i64..15,
    ) {
        let expected = brute_force_combinations(&items, 0, target);
        let problem = Problem::Combinations(CombinationProblem::new(items, target).unwrap());
        match last_frame(&problem) {
            Frame::Combination(combos) => {
                prop_assert_eq!(combos.table[combos.target], expected);
                prop_assert!(combos.examples.len() <= 3);
            }
            other => prop_assert!(false, "unexpected frame {:?}", other),
        }
    }
}


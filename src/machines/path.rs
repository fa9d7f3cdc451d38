//! Grid path-finding machines
//!
//! Both machines search a 4-connected grid with unit edge weights, treat walls
//! as impassable, and rebuild the path by walking predecessor links back from
//! `end`. Reaching `end` yields one terminal frame with an empty `searching`
//! set and the full path. If the search runs dry first the machine simply
//! stops: exhaustion without a path frame means "no path".
//!
//! Ties are broken by discovery order in both machines; the neighbour order
//! (up, down, left, right) comes from [`Coord::neighbors`].

use super::{Algorithm, StepMachine};
use crate::frame::{Frame, PathFrame};
use crate::problem::{Coord, GridProblem};
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Dijkstra's algorithm with a discovery-ordered priority queue.
///
/// Each advance settles the closest unvisited cell and reports the neighbours
/// whose distance it improved.
#[derive(Debug, Clone)]
pub struct Dijkstra {
    grid: GridProblem,
    distances: Vec<usize>,
    previous: Vec<Option<usize>>,
    visited: Vec<bool>,
    /// `(distance, discovery sequence, cell index)`, min-first
    queue: BinaryHeap<Reverse<(usize, u64, usize)>>,
    sequence: u64,
    finished: bool,
}

impl Dijkstra {
    pub fn new(problem: &GridProblem) -> Self {
        let grid = problem.clone();
        let cells = grid.rows() * grid.cols();
        let start = grid.index(grid.start());

        let mut distances = vec![usize::MAX; cells];
        distances[start] = 0;
        let mut queue = BinaryHeap::new();
        queue.push(Reverse((0, 0, start)));

        Dijkstra {
            grid,
            distances,
            previous: vec![None; cells],
            visited: vec![false; cells],
            queue,
            sequence: 1,
            finished: false,
        }
    }

    /// Settled distance of a cell, if it has been reached
    pub fn distance(&self, coord: Coord) -> Option<usize> {
        self.distances
            .get(self.grid.index(coord))
            .copied()
            .filter(|&d| d != usize::MAX)
    }

    fn reconstruct_path(&self) -> Vec<Coord> {
        let mut path = Vec::new();
        let mut cursor = Some(self.grid.index(self.grid.end()));
        while let Some(index) = cursor {
            path.push(self.grid.coord_at(index));
            cursor = self.previous[index];
        }
        path.reverse();
        path
    }

    fn frame(&self, current: Option<Coord>, searching: Vec<Coord>, path: Vec<Coord>) -> Frame {
        Frame::Path(PathFrame {
            rows: self.grid.rows(),
            cols: self.grid.cols(),
            current,
            searching,
            frontier: Vec::new(),
            path,
        })
    }
}

impl StepMachine for Dijkstra {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dijkstra
    }

    fn advance(&mut self) -> Option<Frame> {
        if self.finished {
            return None;
        }

        loop {
            let Some(Reverse((distance, _, index))) = self.queue.pop() else {
                self.finished = true;
                return None;
            };
            // Stale entry for a cell that was settled or improved since
            if self.visited[index] || distance > self.distances[index] {
                continue;
            }
            self.visited[index] = true;

            let current = self.grid.coord_at(index);
            if current == self.grid.end() {
                self.finished = true;
                return Some(self.frame(None, Vec::new(), self.reconstruct_path()));
            }

            let mut searching = Vec::new();
            for neighbor in current.neighbors(self.grid.rows(), self.grid.cols()) {
                if self.grid.is_wall(neighbor) {
                    continue;
                }
                let next = self.grid.index(neighbor);
                if self.visited[next] {
                    continue;
                }
                let candidate = distance + 1;
                if candidate < self.distances[next] {
                    self.distances[next] = candidate;
                    self.previous[next] = Some(index);
                    searching.push(neighbor);
                    self.queue.push(Reverse((candidate, self.sequence, next)));
                    self.sequence += 1;
                }
            }

            return Some(self.frame(Some(current), searching, Vec::new()));
        }
    }

    fn is_terminal(&self) -> bool {
        self.finished || self.queue.is_empty()
    }
}

#[derive(Debug, Clone)]
struct OpenNode {
    coord: Coord,
    g: usize,
    f: usize,
    discovered: u64,
}

/// A* with the Manhattan heuristic.
///
/// Each advance closes the open node with the lowest `f = g + h`. Frames
/// report the whole closed set as `searching` and the open set as `frontier`.
#[derive(Debug, Clone)]
pub struct AStar {
    grid: GridProblem,
    /// Kept in discovery order; selection scans for the minimum
    open: Vec<OpenNode>,
    closed: FxHashSet<Coord>,
    closed_order: Vec<Coord>,
    came_from: FxHashMap<Coord, Coord>,
    sequence: u64,
    finished: bool,
}

impl AStar {
    pub fn new(problem: &GridProblem) -> Self {
        let grid = problem.clone();
        let start = grid.start();
        let open = vec![OpenNode {
            coord: start,
            g: 0,
            f: start.manhattan(grid.end()),
            discovered: 0,
        }];

        AStar {
            grid,
            open,
            closed: FxHashSet::default(),
            closed_order: Vec::new(),
            came_from: FxHashMap::default(),
            sequence: 1,
            finished: false,
        }
    }

    fn reconstruct_path(&self) -> Vec<Coord> {
        let mut path = vec![self.grid.end()];
        let mut cursor = self.grid.end();
        while let Some(&previous) = self.came_from.get(&cursor) {
            path.push(previous);
            cursor = previous;
        }
        path.reverse();
        path
    }

    fn relax(&mut self, from: &OpenNode, neighbor: Coord) {
        let g = from.g + 1;
        let f = g + neighbor.manhattan(self.grid.end());

        match self.open.iter_mut().find(|node| node.coord == neighbor) {
            Some(existing) => {
                if g < existing.g {
                    existing.g = g;
                    existing.f = f;
                    self.came_from.insert(neighbor, from.coord);
                }
            }
            None => {
                self.open.push(OpenNode {
                    coord: neighbor,
                    g,
                    f,
                    discovered: self.sequence,
                });
                self.sequence += 1;
                self.came_from.insert(neighbor, from.coord);
            }
        }
    }
}

impl StepMachine for AStar {
    fn algorithm(&self) -> Algorithm {
        Algorithm::AStar
    }

    fn advance(&mut self) -> Option<Frame> {
        if self.finished {
            return None;
        }

        let best = self
            .open
            .iter()
            .enumerate()
            .min_by_key(|(_, node)| (node.f, node.discovered))
            .map(|(position, _)| position);
        let Some(position) = best else {
            self.finished = true;
            return None;
        };
        let current = self.open.remove(position);

        let (rows, cols) = (self.grid.rows(), self.grid.cols());
        if current.coord == self.grid.end() {
            self.finished = true;
            return Some(Frame::Path(PathFrame {
                rows,
                cols,
                current: None,
                searching: Vec::new(),
                frontier: Vec::new(),
                path: self.reconstruct_path(),
            }));
        }

        self.closed.insert(current.coord);
        self.closed_order.push(current.coord);

        for neighbor in current.coord.neighbors(rows, cols) {
            if self.closed.contains(&neighbor) || self.grid.is_wall(neighbor) {
                continue;
            }
            self.relax(&current, neighbor);
        }

        Some(Frame::Path(PathFrame {
            rows,
            cols,
            current: Some(current.coord),
            searching: self.closed_order.clone(),
            frontier: self.open.iter().map(|node| node.coord).collect(),
            path: Vec::new(),
        }))
    }

    fn is_terminal(&self) -> bool {
        self.finished || self.open.is_empty()
    }
}

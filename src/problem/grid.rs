//! Grid problems for the path-finding machines
//!
//! A grid is a `rows x cols` matrix where every cell is empty or a wall, plus
//! two distinguished coordinates, `start` and `end`. The constructor and every
//! edit helper keep the invariant that both endpoints are in bounds, distinct,
//! and never walls.

use crate::errors::ProblemError;
use std::fmt;
use std::str::FromStr;

/// Largest grid the path finders accept
pub const MAX_GRID_CELLS: usize = 1_000_000;

/// A cell position, row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// Manhattan distance, the A* heuristic
    pub fn manhattan(self, other: Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// 4-connected neighbours inside a `rows x cols` grid.
    ///
    /// Order is fixed: up, down, left, right. Both searches rely on it for
    /// their discovery-order tie-breaks.
    pub fn neighbors(self, rows: usize, cols: usize) -> impl Iterator<Item = Coord> {
        let Coord { row, col } = self;
        [
            row.checked_sub(1).map(|r| Coord::new(r, col)),
            (row + 1 < rows).then(|| Coord::new(row + 1, col)),
            col.checked_sub(1).map(|c| Coord::new(row, c)),
            (col + 1 < cols).then(|| Coord::new(row, col + 1)),
        ]
        .into_iter()
        .flatten()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Coord {
    type Err = ProblemError;

    /// Parses `"row,col"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |token: &str| {
            token
                .trim()
                .parse::<usize>()
                .map_err(|_| ProblemError::UnparsableNumber {
                    token: token.trim().to_string(),
                })
        };

        match s.split_once(',') {
            Some((row, col)) => Ok(Coord::new(parse(row)?, parse(col)?)),
            None => Err(ProblemError::UnparsableNumber {
                token: s.to_string(),
            }),
        }
    }
}

/// What a single grid cell holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Wall,
    Start,
    End,
}

/// A validated grid with one start and one end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridProblem {
    rows: usize,
    cols: usize,
    walls: Vec<bool>,
    start: Coord,
    end: Coord,
}

impl GridProblem {
    /// Create an empty (wall-free) grid
    pub fn new(rows: usize, cols: usize, start: Coord, end: Coord) -> Result<Self, ProblemError> {
        if rows == 0 || cols == 0 {
            return Err(ProblemError::EmptyGrid);
        }
        let cells = match rows.checked_mul(cols) {
            Some(cells) if cells <= MAX_GRID_CELLS => cells,
            _ => {
                return Err(ProblemError::TooManyCells {
                    what: "grid",
                    rows,
                    cols,
                    limit: MAX_GRID_CELLS,
                })
            }
        };

        let grid = GridProblem {
            rows,
            cols,
            walls: vec![false; cells],
            start,
            end,
        };
        grid.check_in_bounds(start)?;
        grid.check_in_bounds(end)?;
        if start == end {
            return Err(ProblemError::EndpointsOverlap { coord: start });
        }
        Ok(grid)
    }

    /// Create a grid with the given walls already placed.
    ///
    /// Unlike [`GridProblem::apply_walls`], a wall on an endpoint is an error
    /// here: the caller asked for an impossible grid.
    pub fn with_walls(
        rows: usize,
        cols: usize,
        start: Coord,
        end: Coord,
        walls: impl IntoIterator<Item = Coord>,
    ) -> Result<Self, ProblemError> {
        let mut grid = Self::new(rows, cols, start, end)?;
        for coord in walls {
            grid.set_wall(coord, true)?;
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn end(&self) -> Coord {
        self.end
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Flat row-major index of an in-bounds cell
    pub fn index(&self, coord: Coord) -> usize {
        coord.row * self.cols + coord.col
    }

    pub fn coord_at(&self, index: usize) -> Coord {
        Coord::new(index / self.cols, index % self.cols)
    }

    /// Out-of-bounds cells read as walls
    pub fn is_wall(&self, coord: Coord) -> bool {
        !self.in_bounds(coord) || self.walls[self.index(coord)]
    }

    pub fn cell(&self, coord: Coord) -> CellState {
        if coord == self.start {
            CellState::Start
        } else if coord == self.end {
            CellState::End
        } else if self.is_wall(coord) {
            CellState::Wall
        } else {
            CellState::Empty
        }
    }

    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&w| w).count()
    }

    /// Place or remove a wall
    pub fn set_wall(&mut self, coord: Coord, wall: bool) -> Result<(), ProblemError> {
        self.check_in_bounds(coord)?;
        if wall && (coord == self.start || coord == self.end) {
            return Err(ProblemError::EndpointOnWall { coord });
        }
        let index = self.index(coord);
        self.walls[index] = wall;
        Ok(())
    }

    /// Flip a cell between empty and wall, returning the new wall state
    pub fn toggle_wall(&mut self, coord: Coord) -> Result<bool, ProblemError> {
        let wall = !self.is_wall(coord);
        self.set_wall(coord, wall)?;
        Ok(wall)
    }

    pub fn clear_walls(&mut self) {
        self.walls.fill(false);
    }

    /// Place a batch of walls (e.g. a generated maze), silently skipping the
    /// endpoints and anything out of bounds. Returns how many were placed.
    pub fn apply_walls(&mut self, walls: &[Coord]) -> usize {
        let mut placed = 0;
        for &coord in walls {
            if self.in_bounds(coord) && coord != self.start && coord != self.end {
                let index = self.index(coord);
                self.walls[index] = true;
                placed += 1;
            }
        }
        placed
    }

    /// Move the start marker. The target must be an open cell.
    pub fn move_start(&mut self, coord: Coord) -> Result<(), ProblemError> {
        self.check_endpoint_target(coord, self.end)?;
        self.start = coord;
        Ok(())
    }

    /// Move the end marker. The target must be an open cell.
    pub fn move_end(&mut self, coord: Coord) -> Result<(), ProblemError> {
        self.check_endpoint_target(coord, self.start)?;
        self.end = coord;
        Ok(())
    }

    fn check_endpoint_target(&self, coord: Coord, other: Coord) -> Result<(), ProblemError> {
        self.check_in_bounds(coord)?;
        if self.is_wall(coord) {
            return Err(ProblemError::EndpointOnWall { coord });
        }
        if coord == other {
            return Err(ProblemError::EndpointsOverlap { coord });
        }
        Ok(())
    }

    fn check_in_bounds(&self, coord: Coord) -> Result<(), ProblemError> {
        if self.in_bounds(coord) {
            Ok(())
        } else {
            Err(ProblemError::OutOfBounds {
                coord,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_are_clipped_and_ordered() {
        let corner: Vec<Coord> = Coord::new(0, 0).neighbors(3, 3).collect();
        assert_eq!(corner, vec![Coord::new(1, 0), Coord::new(0, 1)]);

        let middle: Vec<Coord> = Coord::new(1, 1).neighbors(3, 3).collect();
        assert_eq!(
            middle,
            vec![
                Coord::new(0, 1),
                Coord::new(2, 1),
                Coord::new(1, 0),
                Coord::new(1, 2)
            ]
        );
    }

    #[test]
    fn test_endpoints_are_never_walls() {
        let mut grid = GridProblem::new(3, 3, Coord::new(0, 0), Coord::new(2, 2)).unwrap();
        assert_eq!(
            grid.set_wall(Coord::new(0, 0), true),
            Err(ProblemError::EndpointOnWall {
                coord: Coord::new(0, 0)
            })
        );

        let placed = grid.apply_walls(&[Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)]);
        assert_eq!(placed, 1);
        assert_eq!(grid.cell(Coord::new(1, 1)), CellState::Wall);
        assert_eq!(grid.cell(Coord::new(0, 0)), CellState::Start);
        assert!(grid.move_end(Coord::new(1, 1)).is_err());
    }

    #[test]
    fn test_rejects_overlapping_and_out_of_bounds_endpoints() {
        assert!(matches!(
            GridProblem::new(2, 2, Coord::new(1, 1), Coord::new(1, 1)),
            Err(ProblemError::EndpointsOverlap { .. })
        ));
        assert!(matches!(
            GridProblem::new(2, 2, Coord::new(0, 0), Coord::new(2, 0)),
            Err(ProblemError::OutOfBounds { .. })
        ));
        assert_eq!(
            GridProblem::new(0, 5, Coord::new(0, 0), Coord::new(0, 1)),
            Err(ProblemError::EmptyGrid)
        );
    }

    #[test]
    fn test_rejects_oversized_grids() {
        assert!(matches!(
            GridProblem::new(usize::MAX, 2, Coord::new(0, 0), Coord::new(0, 1)),
            Err(ProblemError::TooManyCells { what: "grid", .. })
        ));
        assert!(matches!(
            GridProblem::new(1001, 1000, Coord::new(0, 0), Coord::new(0, 1)),
            Err(ProblemError::TooManyCells { .. })
        ));
        assert!(GridProblem::new(1000, 1000, Coord::new(0, 0), Coord::new(0, 1)).is_ok());
    }

    #[test]
    fn test_toggle_clear_and_move_endpoints() {
        let mut grid = GridProblem::new(3, 3, Coord::new(0, 0), Coord::new(2, 2)).unwrap();
        assert_eq!(grid.toggle_wall(Coord::new(1, 1)), Ok(true));
        assert_eq!(grid.toggle_wall(Coord::new(1, 1)), Ok(false));
        assert!(grid.toggle_wall(Coord::new(2, 2)).is_err());

        grid.set_wall(Coord::new(0, 1), true).unwrap();
        assert!(grid.move_start(Coord::new(0, 1)).is_err());
        assert!(grid.move_start(Coord::new(2, 2)).is_err());
        grid.move_start(Coord::new(1, 0)).unwrap();
        assert_eq!(grid.start(), Coord::new(1, 0));
        assert_eq!(grid.cell(Coord::new(0, 0)), CellState::Empty);

        grid.clear_walls();
        assert_eq!(grid.wall_count(), 0);
    }

    #[test]
    fn test_parse_coord() {
        assert_eq!("5, 25".parse::<Coord>(), Ok(Coord::new(5, 25)));
        assert!("5".parse::<Coord>().is_err());
        assert!("a,1".parse::<Coord>().is_err());
    }
}

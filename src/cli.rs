//! Command-line arguments and problem construction

use algoscope::errors::ProblemError;
use algoscope::frame::{Frame, SearchOutcome};
use algoscope::machines::maze::{recursive_division, MazeSkew};
use algoscope::problem::{
    ArrayProblem, CombinationProblem, Coord, GridProblem, LcsProblem, Problem, SearchProblem,
    SubsetSumProblem, parse_number_list,
};
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "algoscope",
    version,
    about = "Step through classic algorithms one frame at a time"
)]
pub struct Cli {
    /// Delay between automatic steps, in milliseconds
    #[arg(long, global = true, default_value_t = 500)]
    pub speed: u64,

    /// Print every frame to stdout instead of opening the TUI
    #[arg(long, global = true)]
    pub headless: bool,

    /// Write logs here instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sort a list of integers
    Sort {
        #[arg(long, value_enum, default_value_t = SortKind::Bubble)]
        algorithm: SortKind,
        /// Comma- or space-separated integers
        #[arg(default_value = "5,3,1,4,2", allow_hyphen_values = true)]
        values: String,
    },
    /// Search a list of integers for a target
    Search {
        #[arg(long, value_enum, default_value_t = SearchKind::Binary)]
        algorithm: SearchKind,
        #[arg(long, default_value = "1,3,5,7,9,11,13,15", allow_hyphen_values = true)]
        values: String,
        #[arg(long, default_value_t = 5, allow_hyphen_values = true)]
        target: i64,
    },
    /// Find a shortest path across a wall grid
    Path {
        #[arg(long, value_enum, default_value_t = PathKind::Dijkstra)]
        algorithm: PathKind,
        #[arg(long, default_value_t = 20)]
        rows: usize,
        #[arg(long, default_value_t = 30)]
        cols: usize,
        /// Start cell as `row,col`
        #[arg(long, default_value = "5,5")]
        start: Coord,
        /// End cell as `row,col`
        #[arg(long, default_value = "15,25")]
        end: Coord,
        /// Generate walls by recursive division
        #[arg(long, value_enum)]
        maze: Option<MazeKind>,
        /// Seed for the maze generator
        #[arg(long)]
        seed: Option<u64>,
        /// Extra wall cell as `row,col` (repeatable)
        #[arg(long = "wall")]
        walls: Vec<Coord>,
    },
    /// Longest common subsequence of two strings
    Lcs {
        #[arg(default_value = "AGGTAB")]
        first: String,
        #[arg(default_value = "GXTXAYB")]
        second: String,
    },
    /// Can some subset of the items sum to the target?
    Subset {
        #[arg(long, default_value = "1,3,5,7")]
        items: String,
        #[arg(long, default_value_t = 10, allow_hyphen_values = true)]
        target: i64,
    },
    /// Count the ways to reach the target, each item usable any number of times
    Combinations {
        #[arg(long, default_value = "1,2,3")]
        items: String,
        #[arg(long, default_value_t = 4, allow_hyphen_values = true)]
        target: i64,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKind {
    Bubble,
    Insertion,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchKind {
    Linear,
    Binary,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathKind {
    Dijkstra,
    Astar,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MazeKind {
    Balanced,
    Vertical,
    Horizontal,
}

impl From<MazeKind> for MazeSkew {
    fn from(kind: MazeKind) -> Self {
        match kind {
            MazeKind::Balanced => MazeSkew::Balanced,
            MazeKind::Vertical => MazeSkew::Vertical,
            MazeKind::Horizontal => MazeSkew::Horizontal,
        }
    }
}

impl Command {
    /// Validate the arguments into a problem ready for the driver
    pub fn build_problem(&self) -> Result<Problem, ProblemError> {
        match self {
            Command::Sort { algorithm, values } => {
                let array = ArrayProblem::parse(values)?;
                Ok(match algorithm {
                    SortKind::Bubble => Problem::BubbleSort(array),
                    SortKind::Insertion => Problem::InsertionSort(array),
                })
            }
            Command::Search {
                algorithm,
                values,
                target,
            } => {
                let search = SearchProblem::new(parse_number_list(values)?, *target)?;
                Ok(match algorithm {
                    SearchKind::Linear => Problem::LinearSearch(search),
                    SearchKind::Binary => Problem::BinarySearch(search),
                })
            }
            Command::Path {
                algorithm,
                rows,
                cols,
                start,
                end,
                maze,
                seed,
                walls,
            } => {
                let mut grid = GridProblem::new(*rows, *cols, *start, *end)?;
                for &wall in walls {
                    grid.set_wall(wall, true)?;
                }
                if let Some(kind) = maze {
                    let mut rng = match seed {
                        Some(seed) => StdRng::seed_from_u64(*seed),
                        None => StdRng::from_entropy(),
                    };
                    let maze_walls = recursive_division(&grid, (*kind).into(), &mut rng);
                    let placed = grid.apply_walls(&maze_walls);
                    info!(placed, ?kind, "maze generated");
                }
                Ok(match algorithm {
                    PathKind::Dijkstra => Problem::Dijkstra(grid),
                    PathKind::Astar => Problem::AStar(grid),
                })
            }
            Command::Lcs { first, second } => Ok(Problem::Lcs(LcsProblem::new(first, second)?)),
            Command::Subset { items, target } => Ok(Problem::SubsetSum(SubsetSumProblem::new(
                parse_number_list(items)?,
                *target,
            )?)),
            Command::Combinations { items, target } => Ok(Problem::Combinations(
                CombinationProblem::new(parse_number_list(items)?, *target)?,
            )),
        }
    }
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn pair(pair: Option<(usize, usize)>) -> String {
    pair.map_or_else(|| "-".to_string(), |(a, b)| format!("{}/{}", a, b))
}

/// One line per frame for headless output
pub fn describe_frame(frame: &Frame) -> String {
    match frame {
        Frame::Sort(sort) => format!(
            "[{}] compare={} swap={} done={}",
            join(&sort.array),
            pair(sort.comparing),
            pair(sort.swapping),
            join(&sort.done)
        ),
        Frame::Search(search) => format!(
            "probe={} window={} outcome={}",
            search
                .probing
                .map_or_else(|| "-".to_string(), |i| i.to_string()),
            pair(search.bounds),
            search
                .outcome
                .as_index()
                .map_or_else(|| "-".to_string(), |i| i.to_string())
        ),
        Frame::Path(path) => match path.current {
            Some(current) => format!(
                "expand {} searching={} frontier={}",
                current,
                path.searching.len(),
                path.frontier.len()
            ),
            None => format!("path of {} cells", path.path.len()),
        },
        Frame::Lcs(lcs) => format!(
            "cell ({}, {}) = {} matched={} so far \"{}\"",
            lcs.cursor.0,
            lcs.cursor.1,
            lcs.table[lcs.cursor.0][lcs.cursor.1],
            lcs.matched,
            lcs.subsequence
        ),
        Frame::SubsetSum(subset) => format!(
            "cell ({}, {}) = {}",
            subset.cursor.0,
            subset.cursor.1,
            subset.table[subset.cursor.0][subset.cursor.1]
        ),
        Frame::Combination(combos) => format!(
            "item {} sum {} -> [{}]",
            combos.items[combos.cursor.0],
            combos.cursor.1,
            join(&combos.table)
        ),
    }
}

/// The answer carried by a machine's last frame
pub fn verdict(frame: &Frame) -> String {
    match frame {
        Frame::Sort(sort) => format!("sorted: [{}]", join(&sort.array)),
        Frame::Search(search) => match search.outcome {
            SearchOutcome::Found(index) => format!("found {} at index {}", search.target, index),
            SearchOutcome::NotFound | SearchOutcome::Probing => {
                format!("{} not found (-1)", search.target)
            }
        },
        Frame::Path(path) => match path.path_length() {
            Some(length) => format!("shortest path length {}", length),
            None => "no path".to_string(),
        },
        Frame::Lcs(lcs) => match &lcs.answer {
            Some(answer) => format!("lcs \"{}\" (length {})", answer, answer.chars().count()),
            None => format!("lcs so far \"{}\"", lcs.subsequence),
        },
        Frame::SubsetSum(subset) => match &subset.witness {
            Some(witness) => format!("reachable: {{{}}}", join(witness)),
            None => format!("{} is not reachable", subset.target),
        },
        Frame::Combination(combos) => {
            let examples = combos
                .examples
                .iter()
                .map(|example| format!("[{}]", join(example)))
                .collect::<Vec<_>>()
                .join(" ");
            format!(
                "{} way(s) to make {}; e.g. {}",
                combos.table[combos.target], combos.target, examples
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_build_every_problem() {
        for name in ["sort", "search", "path", "lcs", "subset", "combinations"] {
            let cli = Cli::try_parse_from(["algoscope", name]).unwrap();
            assert!(cli.command.build_problem().is_ok(), "{} defaults", name);
        }
    }

    #[test]
    fn test_seeded_maze_is_reproducible() {
        let args = ["algoscope", "path", "--maze", "balanced", "--seed", "7"];
        let first = Cli::try_parse_from(args).unwrap().command.build_problem().unwrap();
        let second = Cli::try_parse_from(args).unwrap().command.build_problem().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_wall_on_endpoint_is_rejected() {
        let cli = Cli::try_parse_from(["algoscope", "path", "--wall", "5,5"]).unwrap();
        assert!(matches!(
            cli.command.build_problem(),
            Err(ProblemError::EndpointOnWall { .. })
        ));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["algoscope", "lcs", "--headless", "--speed", "20"]).unwrap();
        assert!(cli.headless);
        assert_eq!(cli.speed, 20);
    }
}

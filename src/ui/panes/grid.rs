//! Grid pane rendering for path-finding frames
//!
//! Cells are two columns wide. Searched cells accumulate across frames (the
//! app folds them from the replay history), the open set and path come from
//! the displayed frame.

use crate::problem::{CellState, Coord, GridProblem};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rustc_hash::FxHashSet;

/// Everything the grid pane paints on top of the bare grid
pub struct GridOverlay<'a> {
    pub visited: &'a FxHashSet<Coord>,
    pub frontier: &'a [Coord],
    pub path: &'a [Coord],
    pub current: Option<Coord>,
}

/// Render the grid pane
pub fn render_grid_pane(
    frame: &mut Frame,
    area: Rect,
    grid: &GridProblem,
    overlay: &GridOverlay,
    title: &str,
) {
    let path: FxHashSet<Coord> = overlay.path.iter().copied().collect();
    let frontier: FxHashSet<Coord> = overlay.frontier.iter().copied().collect();

    let lines: Vec<Line> = (0..grid.rows())
        .map(|row| {
            let spans: Vec<Span> = (0..grid.cols())
                .map(|col| {
                    let coord = Coord::new(row, col);
                    let (text, bg) = match grid.cell(coord) {
                        CellState::Start => ("S ", DEFAULT_THEME.primary),
                        CellState::End => ("E ", DEFAULT_THEME.error),
                        CellState::Wall => ("  ", DEFAULT_THEME.wall),
                        CellState::Empty if path.contains(&coord) => ("  ", DEFAULT_THEME.done),
                        CellState::Empty if overlay.current == Some(coord) => {
                            ("  ", DEFAULT_THEME.comparing)
                        }
                        CellState::Empty if frontier.contains(&coord) => {
                            ("  ", DEFAULT_THEME.frontier)
                        }
                        CellState::Empty if overlay.visited.contains(&coord) => {
                            ("· ", DEFAULT_THEME.visited)
                        }
                        CellState::Empty => ("· ", Color::Reset),
                    };
                    Span::styled(
                        text,
                        Style::default()
                            .bg(bg)
                            .fg(Color::Black)
                            .add_modifier(Modifier::BOLD),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_focused));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

//! DP table pane rendering
//!
//! One function per table-fill family. The cell written this step is
//! highlighted, cells already written are shaded, and the answer known so far
//! is shown under the table.

use crate::frame::{CombinationFrame, LcsFrame, SubsetSumFrame};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

const CELL_WIDTH: u16 = 4;

fn pane_block(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_focused))
}

/// Has the cursor already written cell `(i, j)` of a row-major fill?
fn is_filled(cell: (usize, usize), cursor: (usize, usize)) -> bool {
    cell.0 < cursor.0 || (cell.0 == cursor.0 && cell.1 <= cursor.1)
}

fn cell_style(cell: (usize, usize), cursor: (usize, usize)) -> Style {
    if cell == cursor {
        Style::default()
            .bg(DEFAULT_THEME.cursor)
            .fg(ratatui::style::Color::Black)
            .add_modifier(Modifier::BOLD)
    } else if cell.0 == 0 || cell.1 == 0 || is_filled(cell, cursor) {
        Style::default().fg(DEFAULT_THEME.fg).bg(DEFAULT_THEME.filled)
    } else {
        Style::default().fg(DEFAULT_THEME.comment)
    }
}

fn split_table_and_summary(area: Rect, summary_lines: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(summary_lines + 2)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Render the LCS table with both strings as headers
pub fn render_lcs_pane(frame: &mut Frame, area: Rect, lcs: &LcsFrame, title: &str) {
    let (table_area, summary_area) = split_table_and_summary(area, 3);

    let header_style = Style::default().fg(DEFAULT_THEME.primary);
    let header = Row::new(
        ["", "∅"]
            .into_iter()
            .map(|label| Cell::from(label).style(header_style))
            .chain(lcs.second.iter().enumerate().map(|(j, c)| {
                let style = if lcs.highlight_second.contains(&j) {
                    Style::default().fg(DEFAULT_THEME.success)
                } else {
                    header_style
                };
                Cell::from(c.to_string()).style(style)
            })),
    );

    let rows = lcs.table.iter().enumerate().map(|(i, row)| {
        let label = if i == 0 {
            "∅".to_string()
        } else {
            lcs.first[i - 1].to_string()
        };
        let label_style = if i > 0 && lcs.highlight_first.contains(&(i - 1)) {
            Style::default().fg(DEFAULT_THEME.success)
        } else {
            Style::default().fg(DEFAULT_THEME.primary)
        };
        Row::new(
            std::iter::once(Cell::from(label).style(label_style)).chain(
                row.iter()
                    .enumerate()
                    .map(|(j, value)| Cell::from(value.to_string()).style(cell_style((i, j), lcs.cursor))),
            ),
        )
    });

    let widths = vec![Constraint::Length(CELL_WIDTH); lcs.second.len() + 2];
    let table = Table::new(rows, widths)
        .header(header)
        .block(pane_block(title));
    frame.render_widget(table, table_area);

    let (i, j) = lcs.cursor;
    let comparison = format!(
        "comparing '{}' (pos {}) with '{}' (pos {}){}",
        lcs.first[i - 1],
        i,
        lcs.second[j - 1],
        j,
        if lcs.matched { ": match" } else { "" }
    );
    let mut summary = vec![
        Line::from(comparison),
        Line::from(vec![
            Span::raw("matched so far: "),
            Span::styled(lcs.subsequence.clone(), Style::default().fg(DEFAULT_THEME.secondary)),
        ]),
    ];
    if let Some(answer) = &lcs.answer {
        summary.push(Line::from(vec![
            Span::raw("LCS: "),
            Span::styled(
                format!("{} (length {})", answer, answer.chars().count()),
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    frame.render_widget(
        Paragraph::new(summary).block(Block::default().borders(Borders::ALL)),
        summary_area,
    );
}

/// Render the subset-sum reachability table
pub fn render_subset_pane(frame: &mut Frame, area: Rect, subset: &SubsetSumFrame, title: &str) {
    let (table_area, summary_area) = split_table_and_summary(area, 2);

    let header = Row::new(
        std::iter::once(String::new())
            .chain((0..=subset.target).map(|s| s.to_string()))
            .map(|label| Cell::from(label).style(Style::default().fg(DEFAULT_THEME.primary))),
    );

    let rows = subset.table.iter().enumerate().map(|(i, row)| {
        let label = if i == 0 {
            "∅".to_string()
        } else {
            subset.items[i - 1].to_string()
        };
        Row::new(
            std::iter::once(Cell::from(label).style(Style::default().fg(DEFAULT_THEME.primary))).chain(
                row.iter().enumerate().map(|(s, &reachable)| {
                    let style = cell_style((i, s), subset.cursor);
                    let style = if reachable && (i, s) != subset.cursor {
                        style.fg(DEFAULT_THEME.success)
                    } else {
                        style
                    };
                    Cell::from(if reachable { "T" } else { "F" }).style(style)
                }),
            ),
        )
    });

    let widths = vec![Constraint::Length(CELL_WIDTH); subset.target + 2];
    let table = Table::new(rows, widths)
        .header(header)
        .block(pane_block(title));
    frame.render_widget(table, table_area);

    let (i, s) = subset.cursor;
    let item = if i == 0 {
        "-".to_string()
    } else {
        subset.items[i - 1].to_string()
    };
    let witness = match &subset.witness {
        Some(items) if items.is_empty() => "{} (empty subset)".to_string(),
        Some(items) => format!(
            "{{{}}}",
            items.iter().map(usize::to_string).collect::<Vec<_>>().join(", ")
        ),
        None => "none yet".to_string(),
    };
    let summary = vec![
        Line::from(format!("item {} (pos {}), sum {}", item, i, s)),
        Line::from(vec![
            Span::raw(format!("subset reaching {}: ", subset.target)),
            Span::styled(witness, Style::default().fg(DEFAULT_THEME.success)),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(summary).block(Block::default().borders(Borders::ALL)),
        summary_area,
    );
}

/// Render the one-row combination count table
pub fn render_combination_pane(
    frame: &mut Frame,
    area: Rect,
    combos: &CombinationFrame,
    title: &str,
) {
    let (table_area, summary_area) = split_table_and_summary(area, 2 + combos.examples.len() as u16);

    let header = Row::new(
        (0..=combos.target)
            .map(|s| Cell::from(s.to_string()).style(Style::default().fg(DEFAULT_THEME.primary))),
    );
    let (item, sum) = combos.cursor;
    let counts = Row::new(combos.table.iter().enumerate().map(|(s, ways)| {
        let style = if s == sum {
            Style::default()
                .bg(DEFAULT_THEME.cursor)
                .fg(ratatui::style::Color::Black)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        Cell::from(ways.to_string()).style(style)
    }));

    let widths = vec![Constraint::Length(CELL_WIDTH + 2); combos.target + 1];
    let table = Table::new(vec![counts], widths)
        .header(header)
        .block(pane_block(title));
    frame.render_widget(table, table_area);

    let mut summary = vec![
        Line::from(format!(
            "adding item {} at sum {}; ways to make {}: {}",
            combos.items[item], sum, combos.target, combos.table[combos.target]
        )),
        Line::from(Span::styled(
            "examples (illustrative):",
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    ];
    summary.extend(combos.examples.iter().map(|example| {
        Line::from(Span::styled(
            format!(
                "  [{}]",
                example.iter().map(usize::to_string).collect::<Vec<_>>().join(", ")
            ),
            Style::default().fg(DEFAULT_THEME.success),
        ))
    }));
    frame.render_widget(
        Paragraph::new(summary).block(Block::default().borders(Borders::ALL)),
        summary_area,
    );
}

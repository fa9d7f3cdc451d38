//! Array pane rendering for sort and search frames
//!
//! Each element is drawn as one row: index, value, and a horizontal bar
//! scaled to the largest magnitude in the array. Colours mark the pair under
//! comparison, the pair just swapped, finalized indices, the current probe and
//! the found index.

use crate::frame::{SearchFrame, SearchOutcome, SortFrame};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn pair_contains(pair: Option<(usize, usize)>, index: usize) -> bool {
    pair.is_some_and(|(a, b)| a == index || b == index)
}

fn bar_line(index: usize, value: i64, scale: u64, width: usize, style: Style) -> Line<'static> {
    let bar_len = if scale == 0 {
        0
    } else {
        ((value.unsigned_abs() * width as u64) / scale) as usize
    };
    Line::from(vec![
        Span::styled(format!("{:>3} ", index), Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(format!("{:>6} ", value), style),
        Span::styled("█".repeat(bar_len.max(1)), style),
    ])
}

fn layout_metrics(array: &[i64], area: Rect) -> (u64, usize) {
    let scale = array.iter().map(|v| v.unsigned_abs()).max().unwrap_or(0);
    // borders + index column + value column
    let width = (area.width as usize).saturating_sub(2 + 4 + 7).max(1);
    (scale, width)
}

/// Render the array pane for a sorting frame
pub fn render_sort_pane(frame: &mut Frame, area: Rect, sort: &SortFrame, title: &str) {
    let (scale, width) = layout_metrics(&sort.array, area);

    let lines: Vec<Line> = sort
        .array
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let style = if pair_contains(sort.swapping, index) {
                Style::default()
                    .fg(DEFAULT_THEME.swapping)
                    .add_modifier(Modifier::BOLD)
            } else if pair_contains(sort.comparing, index) {
                Style::default().fg(DEFAULT_THEME.comparing)
            } else if sort.settled == Some(index) || sort.done.contains(&index) {
                Style::default().fg(DEFAULT_THEME.done)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            bar_line(index, value, scale, width, style)
        })
        .collect();

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_focused));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the array pane for a search frame
pub fn render_search_pane(frame: &mut Frame, area: Rect, search: &SearchFrame, title: &str) {
    let (scale, width) = layout_metrics(&search.array, area);
    let found = match search.outcome {
        SearchOutcome::Found(index) => Some(index),
        _ => None,
    };

    let mut lines: Vec<Line> = search
        .array
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let outside_window = search
                .bounds
                .is_some_and(|(left, right)| index < left || index > right);
            let style = if found == Some(index) {
                Style::default()
                    .fg(DEFAULT_THEME.done)
                    .add_modifier(Modifier::BOLD)
            } else if search.probing == Some(index) {
                Style::default().fg(DEFAULT_THEME.comparing)
            } else if outside_window {
                Style::default().fg(DEFAULT_THEME.comment)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            bar_line(index, value, scale, width, style)
        })
        .collect();

    let verdict = match search.outcome {
        SearchOutcome::Probing => Span::styled(
            format!("looking for {}", search.target),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
        SearchOutcome::Found(index) => Span::styled(
            format!("found {} at index {}", search.target, index),
            Style::default().fg(DEFAULT_THEME.success),
        ),
        SearchOutcome::NotFound => Span::styled(
            format!("{} not found (-1)", search.target),
            Style::default().fg(DEFAULT_THEME.error),
        ),
    };
    lines.push(Line::default());
    lines.push(Line::from(verdict));

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_focused));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub comparing: Color, // Pair under comparison / probe
    pub swapping: Color,  // Pair just swapped
    pub done: Color,      // Finalized index / found / path
    pub wall: Color,
    pub visited: Color,  // Cells searched so far
    pub frontier: Color, // A* open set
    pub cursor: Color,   // DP cell written this step
    pub filled: Color,   // DP cells already written
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    status_bg: Color::Rgb(50, 50, 70),
    comparing: Color::Rgb(249, 226, 175), // Yellow
    swapping: Color::Rgb(250, 179, 135),  // Orange
    done: Color::Rgb(166, 227, 161),      // Green
    wall: Color::Rgb(69, 71, 90),
    visited: Color::Rgb(137, 120, 200), // Violet
    frontier: Color::Rgb(148, 226, 213), // Teal
    cursor: Color::Rgb(249, 226, 175),
    filled: Color::Rgb(88, 91, 112),
};

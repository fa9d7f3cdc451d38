//! TUI pane rendering modules
//!
//! Stateless render functions, one module per frame family:
//!
//! - [`array`]: sorting and searching frames as horizontal bars
//! - [`grid`]: path-finding frames over the wall grid
//! - [`table`]: LCS, subset-sum and combination-count tables
//! - [`status`]: status bar with keybindings and playback state
//!
//! Each module exports a `render_*_pane()` function (or `render_status_bar`)
//! taking the ratatui frame, its area and the data to draw.

pub mod array;
pub mod grid;
pub mod status;
pub mod table;

pub use array::{render_search_pane, render_sort_pane};
pub use grid::{render_grid_pane, GridOverlay};
pub use status::{render_status_bar, StatusRenderData};
pub use table::{render_combination_pane, render_lcs_pane, render_subset_pane};

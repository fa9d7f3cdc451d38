//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, history browsing
//! - **[`panes`]**: stateless render functions per frame family plus the status bar
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`Problem`](crate::problem::Problem) and a driver config, then call
//! [`App::run`] to start the event loop. The app is the driver's single
//! consumer; it never reaches into a machine.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;

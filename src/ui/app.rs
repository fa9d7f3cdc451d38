//! Main TUI application state and logic

use crate::driver::{DriverConfig, DriverPhase, StepDriver, StepEvent, StepStatus};
use crate::frame::Frame as StepFrame;
use crate::problem::{Coord, GridProblem, Problem};
use crate::ui::panes::{self, GridOverlay, StatusRenderData};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use rustc_hash::FxHashSet;
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Upper bound on how long the loop blocks waiting for a key
const POLL_INTERVAL: Duration = Duration::from_millis(50);
/// Speed change per `+`/`-` press
const SPEED_STEP: Duration = Duration::from_millis(50);

/// What the driver's consumer callback has delivered so far
#[derive(Debug, Default)]
struct FrameSink {
    latest: Option<StepFrame>,
    finished: bool,
}

/// The main application state
pub struct App {
    driver: StepDriver,
    problem: Problem,

    /// Shared with the consumer callback registered on the driver
    sink: Rc<RefCell<FrameSink>>,

    /// History index being browsed; `None` follows the live frame
    view: Option<usize>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    last_space_press: Instant,
}

impl App {
    /// Create a new app and load `problem` into a fresh driver
    pub fn new(problem: Problem, config: DriverConfig) -> Self {
        let sink = Rc::new(RefCell::new(FrameSink::default()));
        let mut driver = StepDriver::new(config);

        let consumer_sink = Rc::clone(&sink);
        driver.set_consumer(move |event| {
            let mut sink = consumer_sink.borrow_mut();
            match event {
                StepEvent::Frame(frame) => sink.latest = Some(frame.clone()),
                StepEvent::Finished { .. } => sink.finished = true,
            }
        });
        driver.start(&problem);

        App {
            driver,
            problem,
            sink,
            view: None,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            match self.driver.tick(Instant::now()) {
                Ok(Some(StepStatus::Finished)) => {
                    self.status_message = "Playback complete".to_string();
                }
                Ok(_) => {}
                Err(e) => self.status_message = e.to_string(),
            }

            let timeout = self
                .driver
                .time_until_tick(Instant::now())
                .map_or(POLL_INTERVAL, |due| due.min(POLL_INTERVAL));
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// The driver behind the UI
    pub fn driver(&self) -> &StepDriver {
        &self.driver
    }

    /// Index of the frame on screen, if any frame has arrived
    fn displayed_index(&self) -> Option<usize> {
        self.view
            .or_else(|| self.driver.frames_emitted().checked_sub(1))
    }

    fn displayed_frame(&self) -> Option<StepFrame> {
        match self.view {
            Some(index) => self.driver.history().get(index).cloned(),
            None => self.sink.borrow().latest.clone(),
        }
    }

    fn grid(&self) -> Option<&GridProblem> {
        match &self.problem {
            Problem::Dijkstra(grid) | Problem::AStar(grid) => Some(grid),
            _ => None,
        }
    }

    /// Cells expanded or improved up to and including history index `upto`
    fn visited_until(&self, upto: usize, shown: &StepFrame) -> FxHashSet<Coord> {
        let mut visited = FxHashSet::default();
        let recorded = self.driver.history().iter().take(upto + 1);
        for frame in recorded.chain(std::iter::once(shown)) {
            if let StepFrame::Path(path) = frame {
                visited.extend(path.current);
                visited.extend(path.searching.iter().copied());
            }
        }
        visited
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        let title = self.problem.algorithm().to_string();
        let shown = self.displayed_frame();
        match &shown {
            None => render_placeholder(frame, main_chunks[0], &title),
            Some(StepFrame::Sort(sort)) => {
                panes::render_sort_pane(frame, main_chunks[0], sort, &title)
            }
            Some(StepFrame::Search(search)) => {
                panes::render_search_pane(frame, main_chunks[0], search, &title)
            }
            Some(step @ StepFrame::Path(path)) => {
                let upto = self.displayed_index().unwrap_or(0);
                let visited = self.visited_until(upto, step);
                let overlay = GridOverlay {
                    visited: &visited,
                    frontier: &path.frontier,
                    path: &path.path,
                    current: path.current,
                };
                if let Some(grid) = self.grid() {
                    panes::render_grid_pane(frame, main_chunks[0], grid, &overlay, &title);
                }
            }
            Some(StepFrame::Lcs(lcs)) => panes::render_lcs_pane(frame, main_chunks[0], lcs, &title),
            Some(StepFrame::SubsetSum(subset)) => {
                panes::render_subset_pane(frame, main_chunks[0], subset, &title)
            }
            Some(StepFrame::Combination(combos)) => {
                panes::render_combination_pane(frame, main_chunks[0], combos, &title)
            }
        }

        let status = StatusRenderData {
            message: &self.status_message,
            current_step: self.displayed_index(),
            total_steps: self.driver.frames_emitted(),
            is_playing: self.driver.state().is_running,
            is_finished: self.sink.borrow().finished,
            is_halted: self.driver.phase() == DriverPhase::Halted,
            speed: self.driver.speed(),
        };
        panes::render_status_bar(frame, main_chunks[1], &status);
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.driver.pause();
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if !self.step_forward() {
                        break;
                    }
                    stepped += 1;
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Right | KeyCode::Char('n') => {
                self.driver.pause();
                if self.step_forward() {
                    self.status_message = "Stepped forward".to_string();
                }
            }
            KeyCode::Left => {
                self.driver.pause();
                self.step_backward();
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let faster = self.driver.speed().saturating_sub(SPEED_STEP);
                self.driver.set_speed(faster);
                self.status_message = format!("Speed {}ms", self.driver.speed().as_millis());
            }
            KeyCode::Char('-') => {
                let slower = self.driver.speed().saturating_add(SPEED_STEP);
                self.driver.set_speed(slower);
                self.status_message = format!("Speed {}ms", self.driver.speed().as_millis());
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            KeyCode::Enter => {
                // Jump to end of execution
                self.driver.pause();
                self.view = None;
                match self.driver.run_to_end() {
                    Ok(_) => self.status_message = "Jumped to end".to_string(),
                    Err(e) => self.status_message = e.to_string(),
                }
            }
            KeyCode::Backspace => {
                // Jump to the first recorded frame
                self.driver.pause();
                if !self.driver.history().is_empty() {
                    self.view = Some(0);
                    self.status_message = "Jumped to start".to_string();
                }
            }
            _ => {}
        }
    }

    fn toggle_play(&mut self) {
        if self.driver.state().is_running {
            self.driver.pause();
            self.status_message = "Paused".to_string();
        } else if self.driver.is_finished() {
            self.status_message = "Finished, press r to restart".to_string();
        } else {
            self.view = None;
            self.driver.play(Instant::now());
            self.status_message = "Playing...".to_string();
        }
    }

    /// Move one frame forward: through the history when browsing, else ask
    /// the driver for a new frame. Returns false when nothing moved.
    fn step_forward(&mut self) -> bool {
        if let Some(index) = self.view {
            let next = index + 1;
            if next + 1 < self.driver.history().len() {
                self.view = Some(next);
            } else if next < self.driver.frames_emitted() {
                self.view = None;
            } else {
                return false;
            }
            return true;
        }

        match self.driver.step() {
            Ok(StepStatus::Advanced) => true,
            Ok(StepStatus::Finished) => {
                self.status_message = "Playback complete".to_string();
                true
            }
            Ok(StepStatus::Ignored) => {
                self.status_message = "Cannot step forward: already finished".to_string();
                false
            }
            Err(e) => {
                self.status_message = e.to_string();
                false
            }
        }
    }

    fn step_backward(&mut self) {
        let Some(current) = self.displayed_index() else {
            self.status_message = "Cannot step backward: no frames yet".to_string();
            return;
        };
        if current == 0 || current > self.driver.history().len() {
            self.status_message = "Cannot step backward: start of history".to_string();
            return;
        }
        self.view = Some(current - 1);
        self.status_message = "Stepped backward".to_string();
    }

    fn restart(&mut self) {
        self.driver.start(&self.problem);
        *self.sink.borrow_mut() = FrameSink::default();
        self.view = None;
        self.status_message = "Restarted".to_string();
    }
}

fn render_placeholder(frame: &mut Frame, area: Rect, title: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let text = vec![
        Line::from("No frames yet."),
        Line::from("Press space to play or → to take a single step."),
    ];
    frame.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(DEFAULT_THEME.comment))
            .block(block),
        area,
    );
}

// algoscope: classic algorithms as resumable step machines, in the terminal

mod cli;

use std::fs::File;
use std::io;
use std::path::Path;
use std::process;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use algoscope::driver::{DriverConfig, StepDriver, StepEvent};
use algoscope::frame::Frame;
use algoscope::problem::Problem;
use algoscope::ui::App;
use cli::Cli;

/// Install the tracing subscriber. Reads `RUST_LOG`, defaults to `warn`.
///
/// With a log file the TUI screen stays clean; otherwise logs go to stderr.
fn init_tracing(log_file: Option<&Path>) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(io::stderr).compact())
                .init();
        }
    }
    Ok(())
}

/// Step the problem to completion, printing one line per frame
fn run_headless(problem: &Problem, config: DriverConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut driver = StepDriver::new(config);
    let mut last: Option<Frame> = None;
    let mut index = 0usize;
    driver.set_consumer(move |event| match event {
        StepEvent::Frame(frame) => {
            index += 1;
            println!("{:>5}  {}", index, cli::describe_frame(frame));
            last = Some(frame.clone());
        }
        StepEvent::Finished { algorithm, frames } => {
            println!("{} finished after {} frame(s)", algorithm, frames);
            if let Some(frame) = &last {
                println!("{}", cli::verdict(frame));
            }
        }
    });

    driver.start(problem);
    driver.run_to_end()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();
    init_tracing(args.log_file.as_deref())?;

    let problem = match args.command.build_problem() {
        Ok(problem) => problem,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    let config = DriverConfig::default().with_speed(Duration::from_millis(args.speed));

    if args.headless {
        return run_headless(&problem, config);
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(problem, config);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

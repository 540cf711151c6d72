use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use grid_snake::app::{App, AppOptions};
use grid_snake::config::{Difficulty, GRID_HEIGHT, GRID_WIDTH};
use grid_snake::error::AppError;
use grid_snake::grid::GridSpace;
use grid_snake::input::InputHandler;
use grid_snake::logging;
use grid_snake::terminal_runtime::TerminalSession;
use log::{LevelFilter, info};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Start every run at this difficulty instead of showing the menu.
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Seed for reproducible food and obstacle placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Log file location (defaults to the local data directory).
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Minimum log level written to the log file.
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("grid-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let log_path = cli.log_file.unwrap_or_else(logging::default_log_path);
    logging::init(&log_path, cli.log_level)?;

    let grid = GridSpace::new(GRID_WIDTH, GRID_HEIGHT)?;
    info!("grid {}x{}", grid.width(), grid.height());

    let mut session = TerminalSession::enter()?;
    let mut app = App::new(AppOptions {
        grid,
        difficulty: cli.difficulty,
        seed: cli.seed,
    });

    app.run(session.terminal_mut(), &mut InputHandler::new())
}

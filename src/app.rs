use std::mem;
use std::time::{Duration, Instant};

use log::{error, info, warn};
use serde::Serialize;

use crate::config::{Difficulty, FRAME_POLL_INTERVAL};
use crate::error::{AppError, GameError};
use crate::game::{GameState, Snapshot, TickOutcome};
use crate::grid::GridSpace;
use crate::input::{Command, Direction, InputHandler};
use crate::renderer;
use crate::terminal_runtime::AppTerminal;

/// Settings fixed for the whole program run.
#[derive(Debug, Clone, Copy)]
pub struct AppOptions {
    pub grid: GridSpace,
    /// Skips the start menu, also on retry.
    pub difficulty: Option<Difficulty>,
    /// Base seed; run `n` uses `seed + n - 1`.
    pub seed: Option<u64>,
}

/// Screen the driver is currently showing.
#[derive(Debug)]
pub enum Phase {
    Start,
    Playing(GameState),
    GameOver(GameState),
    Fault(GameError),
}

/// Outer driver: turns commands into phase changes and ticks the engine.
#[derive(Debug)]
pub struct App {
    options: AppOptions,
    phase: Phase,
    runs: u64,
    difficulty: Option<Difficulty>,
    pending_direction: Option<Direction>,
    board_visible: bool,
    should_quit: bool,
}

#[derive(Serialize)]
struct RunSummary<'a> {
    run: u64,
    difficulty: Option<Difficulty>,
    seed: Option<u64>,
    #[serde(flatten)]
    snapshot: Snapshot<'a>,
}

impl App {
    #[must_use]
    pub fn new(options: AppOptions) -> Self {
        let mut app = Self {
            options,
            phase: Phase::Start,
            runs: 0,
            difficulty: None,
            pending_direction: None,
            board_visible: true,
            should_quit: false,
        };

        if let Some(difficulty) = options.difficulty {
            app.start_run(difficulty);
        }

        app
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[must_use]
    pub fn runs(&self) -> u64 {
        self.runs
    }

    /// Tick interval while a run is active and its board is on screen.
    #[must_use]
    pub fn tick_interval(&self) -> Option<Duration> {
        match &self.phase {
            Phase::Playing(state) if self.board_visible => Some(state.tick_interval()),
            _ => None,
        }
    }

    /// Records the terminal size; the engine is paused while the board does not fit.
    pub fn resize(&mut self, width: u16, height: u16) {
        let visible = renderer::board_fits(self.options.grid, width, height);
        if visible != self.board_visible {
            let shown = if visible { "visible" } else { "hidden" };
            info!("board {shown} at {width}x{height}");
        }
        self.board_visible = visible;
    }

    /// Applies one front-end command.
    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::Quit => {
                info!("quit requested after {} run(s)", self.runs);
                self.should_quit = true;
            }
            Command::SelectDifficulty(difficulty) if matches!(self.phase, Phase::Start) => {
                self.start_run(difficulty);
            }
            Command::Direction(direction) if matches!(self.phase, Phase::Playing(_)) => {
                self.pending_direction = Some(direction);
            }
            Command::Retry if matches!(self.phase, Phase::GameOver(_) | Phase::Fault(_)) => {
                info!("retry requested");
                match self.options.difficulty {
                    Some(difficulty) => self.start_run(difficulty),
                    None => self.phase = Phase::Start,
                }
            }
            _ => {}
        }
    }

    /// Runs one engine tick with the direction collected since the last one.
    ///
    /// Does nothing while the board is hidden by a too-small terminal.
    pub fn advance(&mut self) {
        if !self.board_visible {
            return;
        }
        let Phase::Playing(state) = &mut self.phase else {
            return;
        };

        match state.tick(self.pending_direction.take()) {
            Ok(TickOutcome::GameOver(_)) => {
                self.log_summary();
                if let Phase::Playing(state) = mem::replace(&mut self.phase, Phase::Start) {
                    self.phase = Phase::GameOver(state);
                }
            }
            Ok(_) => {}
            Err(error) => {
                error!("run {} aborted: {error}", self.runs);
                self.phase = Phase::Fault(error);
            }
        }
    }

    /// Drives the frame loop until the player quits.
    pub fn run(
        &mut self,
        terminal: &mut AppTerminal,
        input: &mut InputHandler,
    ) -> Result<(), AppError> {
        let mut last_tick = Instant::now();

        while !self.should_quit {
            let size = terminal.size()?;
            self.resize(size.width, size.height);
            terminal.draw(|frame| renderer::render(frame, &self.phase))?;

            let timeout = match self.tick_interval() {
                Some(interval) => interval.saturating_sub(last_tick.elapsed()),
                None => FRAME_POLL_INTERVAL,
            };
            if let Some(command) = input.poll_input(timeout.min(FRAME_POLL_INTERVAL))? {
                self.handle_command(command);
            }

            match self.tick_interval() {
                Some(interval) if last_tick.elapsed() >= interval => {
                    self.advance();
                    last_tick = Instant::now();
                }
                Some(_) => {}
                None => last_tick = Instant::now(),
            }
        }

        Ok(())
    }

    fn start_run(&mut self, difficulty: Difficulty) {
        self.runs += 1;
        self.difficulty = Some(difficulty);
        self.pending_direction = None;

        let seed = self.run_seed();
        info!(
            "run {} starting: difficulty {} seed {seed:?}",
            self.runs,
            difficulty.label()
        );

        let base_speed = difficulty.base_speed();
        let created = match seed {
            Some(seed) => GameState::new_with_seed(self.options.grid, base_speed, seed),
            None => GameState::new(self.options.grid, base_speed),
        };

        self.phase = match created {
            Ok(state) => Phase::Playing(state),
            Err(error) => {
                error!("run {} could not start: {error}", self.runs);
                Phase::Fault(error)
            }
        };
    }

    fn run_seed(&self) -> Option<u64> {
        let offset = self.runs.saturating_sub(1);
        self.options.seed.map(|seed| seed.wrapping_add(offset))
    }

    fn log_summary(&self) {
        let Phase::Playing(state) = &self.phase else {
            return;
        };

        let summary = RunSummary {
            run: self.runs,
            difficulty: self.difficulty,
            seed: self.run_seed(),
            snapshot: state.snapshot(),
        };
        match serde_json::to_string(&summary) {
            Ok(json) => info!("run summary: {json}"),
            Err(error) => warn!("failed to serialize run summary: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{App, AppOptions, Phase};
    use crate::config::Difficulty;
    use crate::error::GameError;
    use crate::game::GameStatus;
    use crate::grid::{Cell, GridSpace};
    use crate::input::{Command, Direction};

    fn options(difficulty: Option<Difficulty>) -> AppOptions {
        AppOptions {
            grid: GridSpace::new(10, 10).expect("grid should be valid"),
            difficulty,
            seed: Some(42),
        }
    }

    fn play_until_game_over(app: &mut App) {
        app.handle_command(Command::Direction(Direction::Up));
        for _ in 0..20 {
            app.advance();
        }
    }

    #[test]
    fn starts_on_menu_without_preset_difficulty() {
        let app = App::new(options(None));

        assert!(matches!(app.phase(), Phase::Start));
        assert_eq!(app.tick_interval(), None);
    }

    #[test]
    fn preset_difficulty_starts_playing_immediately() {
        let app = App::new(options(Some(Difficulty::Hard)));

        let Phase::Playing(state) = app.phase() else {
            panic!("expected a running game");
        };
        assert_eq!(state.speed(), 20);
        assert_eq!(app.runs(), 1);
    }

    #[test]
    fn menu_selection_starts_a_run_with_that_speed() {
        let mut app = App::new(options(None));

        app.handle_command(Command::Direction(Direction::Left));
        assert!(matches!(app.phase(), Phase::Start));

        app.handle_command(Command::SelectDifficulty(Difficulty::Medium));
        let Phase::Playing(state) = app.phase() else {
            panic!("expected a running game");
        };
        assert_eq!(state.speed(), 15);
    }

    #[test]
    fn direction_is_applied_on_the_next_tick() {
        let mut app = App::new(options(Some(Difficulty::Easy)));

        app.handle_command(Command::Direction(Direction::Up));
        app.advance();

        let Phase::Playing(state) = app.phase() else {
            panic!("expected a running game");
        };
        assert_eq!(state.direction(), Some(Direction::Up));
        assert_eq!(state.snake().head().row, 4);
    }

    #[test]
    fn wall_collision_moves_to_game_over() {
        let mut app = App::new(options(Some(Difficulty::Easy)));

        play_until_game_over(&mut app);

        let Phase::GameOver(state) = app.phase() else {
            panic!("expected the game over screen");
        };
        assert_eq!(state.status(), GameStatus::GameOver);
        assert_eq!(app.tick_interval(), None);
    }

    #[test]
    fn retry_returns_to_menu_without_preset() {
        let mut app = App::new(options(None));
        app.handle_command(Command::SelectDifficulty(Difficulty::Easy));
        play_until_game_over(&mut app);

        app.handle_command(Command::Retry);

        assert!(matches!(app.phase(), Phase::Start));
    }

    #[test]
    fn retry_with_preset_builds_a_fresh_run() {
        let mut app = App::new(options(Some(Difficulty::Easy)));
        play_until_game_over(&mut app);

        app.handle_command(Command::Retry);

        let Phase::Playing(state) = app.phase() else {
            panic!("expected a running game");
        };
        assert_eq!(state.score(), 0);
        assert_eq!(state.direction(), None);
        assert_eq!(app.runs(), 2);
    }

    #[test]
    fn retry_is_ignored_while_playing() {
        let mut app = App::new(options(Some(Difficulty::Easy)));

        app.handle_command(Command::Retry);

        assert_eq!(app.runs(), 1);
    }

    #[test]
    fn quit_is_accepted_from_any_phase() {
        let mut app = App::new(options(None));
        app.handle_command(Command::Quit);
        assert!(app.should_quit());

        let mut app = App::new(options(Some(Difficulty::Easy)));
        app.handle_command(Command::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn hidden_board_freezes_the_run() {
        let mut app = App::new(AppOptions {
            grid: GridSpace::new(50, 30).expect("grid should be valid"),
            difficulty: Some(Difficulty::Easy),
            seed: Some(7),
        });
        app.resize(80, 24);
        app.handle_command(Command::Direction(Direction::Up));

        for _ in 0..40 {
            app.advance();
        }

        assert_eq!(app.tick_interval(), None);
        let Phase::Playing(state) = app.phase() else {
            panic!("run should still be playing");
        };
        assert_eq!(state.snake().head(), Cell::new(25, 15));
        assert_eq!(state.direction(), None);

        app.resize(52, 33);
        app.advance();

        let Phase::Playing(state) = app.phase() else {
            panic!("run should still be playing");
        };
        assert_eq!(state.direction(), Some(Direction::Up));
        assert_eq!(state.snake().head().row, 14);
    }

    #[test]
    fn board_without_room_for_food_is_a_fault() {
        let mut app = App::new(AppOptions {
            grid: GridSpace::new(1, 1).expect("grid should be valid"),
            difficulty: None,
            seed: None,
        });

        app.handle_command(Command::SelectDifficulty(Difficulty::Easy));

        assert!(matches!(
            app.phase(),
            Phase::Fault(GameError::NoFreeCellAvailable {
                width: 1,
                height: 1
            })
        ));
    }
}

use std::time::Duration;

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::error::GameError;
use crate::grid::{Cell, GridSpace};
use crate::input::{Direction, direction_change_is_valid};
use crate::level::{self, POINTS_PER_FOOD};
use crate::placer::{place_food, place_obstacles};
use crate::snake::SnakeBody;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// What the head ran into, in the order collisions are checked.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum DeathReason {
    Wall,
    SelfCollision,
    Obstacle,
}

/// What a single [`GameState::tick`] did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// No direction has been chosen yet; nothing moved.
    Idle,
    Moved,
    Ate,
    /// Food was eaten and it completed a level.
    LeveledUp { level: u32 },
    GameOver(DeathReason),
}

/// Read-only view of a game, sufficient for drawing a frame.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub grid: GridSpace,
    pub snake: &'a SnakeBody,
    pub direction: Option<Direction>,
    pub food: Cell,
    pub obstacles: &'a [Cell],
    pub score: u32,
    pub level: u32,
    pub foods_eaten_this_level: u32,
    pub speed: u32,
    pub ticks: u64,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
}

/// Complete state for one run.
///
/// Only [`GameState::tick`] changes it once play has started; a finished run
/// stays finished and a retry builds a fresh instance.
#[derive(Debug, Clone)]
pub struct GameState {
    grid: GridSpace,
    snake: SnakeBody,
    direction: Option<Direction>,
    food: Cell,
    obstacles: Vec<Cell>,
    score: u32,
    level: u32,
    foods_eaten_this_level: u32,
    speed: u32,
    ticks: u64,
    status: GameStatus,
    death_reason: Option<DeathReason>,
    rng: StdRng,
}

impl GameState {
    /// Creates a run seeded from system entropy.
    pub fn new(grid: GridSpace, base_speed: u32) -> Result<Self, GameError> {
        Self::with_rng(grid, base_speed, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    pub fn new_with_seed(grid: GridSpace, base_speed: u32, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(grid, base_speed, StdRng::seed_from_u64(seed))
    }

    fn with_rng(grid: GridSpace, base_speed: u32, mut rng: StdRng) -> Result<Self, GameError> {
        let snake = SnakeBody::new(grid.center());
        let food = place_food(grid, &mut rng, &snake, &[])?;

        Ok(Self {
            grid,
            snake,
            direction: None,
            food,
            obstacles: Vec::new(),
            score: 0,
            level: 1,
            foods_eaten_this_level: 0,
            speed: base_speed.max(1),
            ticks: 0,
            status: GameStatus::Playing,
            death_reason: None,
            rng,
        })
    }

    /// Replaces the snake; for scenario setup before the first tick.
    #[must_use]
    pub fn with_snake(mut self, snake: SnakeBody) -> Self {
        self.snake = snake;
        self
    }

    /// Replaces the food cell; for scenario setup.
    #[must_use]
    pub fn with_food(mut self, food: Cell) -> Self {
        self.food = food;
        self
    }

    /// Replaces the obstacle set; for scenario setup.
    #[must_use]
    pub fn with_obstacles(mut self, obstacles: Vec<Cell>) -> Self {
        self.obstacles = obstacles;
        self
    }

    /// Advances the run by one tick.
    ///
    /// `intent` is the direction requested this frame, if any. Reversals of
    /// the committed direction are ignored. Every placement is computed before
    /// anything is committed, so an `Err` leaves the state untouched.
    pub fn tick(&mut self, intent: Option<Direction>) -> Result<TickOutcome, GameError> {
        if let Some(reason) = self.death_reason {
            return Ok(TickOutcome::GameOver(reason));
        }

        let direction = match (self.direction, intent) {
            (Some(current), Some(next)) if !direction_change_is_valid(current, next) => {
                Some(current)
            }
            (current, next) => next.or(current),
        };
        let Some(step) = direction else {
            return Ok(TickOutcome::Idle);
        };

        let new_head = self.snake.head().offset(step.offset());
        if let Some(reason) = self.collision_at(new_head) {
            self.direction = direction;
            self.status = GameStatus::GameOver;
            self.death_reason = Some(reason);
            info!(
                "game over: {reason:?} at ({}, {}) with score {}",
                new_head.col, new_head.row, self.score
            );
            return Ok(TickOutcome::GameOver(reason));
        }

        let ate = new_head == self.food;
        let mut snake = self.snake.clone();
        snake.advance(new_head, ate);

        let food = if ate {
            place_food(self.grid, &mut self.rng, &snake, &self.obstacles)?
        } else {
            self.food
        };

        let foods_eaten = self.foods_eaten_this_level + u32::from(ate);
        let level_up = if level::is_level_up_due(foods_eaten) {
            Some(level::on_level_up(self.level))
        } else {
            None
        };
        let new_obstacles = match level_up {
            Some(up) => place_obstacles(
                self.grid,
                &mut self.rng,
                up.obstacles_added,
                &snake,
                &self.obstacles,
                food,
            )?,
            None => Vec::new(),
        };

        self.direction = direction;
        self.snake = snake;
        self.food = food;
        self.foods_eaten_this_level = foods_eaten;
        self.ticks += 1;
        if ate {
            self.score += POINTS_PER_FOOD;
            debug!("ate: score {} length {}", self.score, self.snake.len());
        }

        let Some(up) = level_up else {
            return Ok(if ate {
                TickOutcome::Ate
            } else {
                TickOutcome::Moved
            });
        };

        self.level = up.next_level;
        self.foods_eaten_this_level = 0;
        self.speed += up.speed_delta;
        self.obstacles.extend(new_obstacles);
        info!(
            "level {} reached: speed {} obstacles {}",
            self.level,
            self.speed,
            self.obstacles.len()
        );

        Ok(TickOutcome::LeveledUp { level: self.level })
    }

    /// Walls, then the pre-move body (tail included), then obstacles.
    fn collision_at(&self, cell: Cell) -> Option<DeathReason> {
        if !self.grid.contains(cell) {
            Some(DeathReason::Wall)
        } else if self.snake.occupies(cell) {
            Some(DeathReason::SelfCollision)
        } else if self.obstacles.contains(&cell) {
            Some(DeathReason::Obstacle)
        } else {
            None
        }
    }

    /// Returns a read-only view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: self.grid,
            snake: &self.snake,
            direction: self.direction,
            food: self.food,
            obstacles: &self.obstacles,
            score: self.score,
            level: self.level,
            foods_eaten_this_level: self.foods_eaten_this_level,
            speed: self.speed,
            ticks: self.ticks,
            status: self.status,
            death_reason: self.death_reason,
        }
    }

    /// Time between ticks at the current speed.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.speed
    }

    #[must_use]
    pub fn grid(&self) -> GridSpace {
        self.grid
    }

    #[must_use]
    pub fn snake(&self) -> &SnakeBody {
        &self.snake
    }

    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    #[must_use]
    pub fn food(&self) -> Cell {
        self.food
    }

    #[must_use]
    pub fn obstacles(&self) -> &[Cell] {
        &self.obstacles
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn speed(&self) -> u32 {
        self.speed
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }
}

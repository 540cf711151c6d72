use std::collections::HashSet;

use rand::Rng;

use crate::error::GameError;
use crate::grid::{Cell, GridSpace};
use crate::snake::SnakeBody;

/// Places a food cell away from the snake and every obstacle.
pub fn place_food<R: Rng + ?Sized>(
    grid: GridSpace,
    rng: &mut R,
    snake: &SnakeBody,
    obstacles: &[Cell],
) -> Result<Cell, GameError> {
    let excluded: HashSet<Cell> = snake.segments().chain(obstacles.iter()).copied().collect();

    grid.random_free_cell(rng, &excluded)
}

/// Places `count` new obstacles one after another, in placement order.
///
/// Each placement avoids the snake, the food, the existing obstacles and the
/// obstacles placed earlier in the same call.
pub fn place_obstacles<R: Rng + ?Sized>(
    grid: GridSpace,
    rng: &mut R,
    count: usize,
    snake: &SnakeBody,
    obstacles: &[Cell],
    food: Cell,
) -> Result<Vec<Cell>, GameError> {
    let mut excluded: HashSet<Cell> = snake.segments().chain(obstacles.iter()).copied().collect();
    excluded.insert(food);

    let mut placed = Vec::with_capacity(count);
    for _ in 0..count {
        let cell = grid.random_free_cell(rng, &excluded)?;
        excluded.insert(cell);
        placed.push(cell);
    }

    Ok(placed)
}

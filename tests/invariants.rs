use std::collections::HashSet;

use grid_snake::game::{GameState, GameStatus, Snapshot, TickOutcome};
use grid_snake::grid::{Cell, GridSpace};
use grid_snake::input::Direction;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

/// Steers towards the food, avoiding cells that are fatal right now.
fn choose_direction(snapshot: &Snapshot<'_>, rng: &mut StdRng) -> Direction {
    let head = snapshot.snake.head();
    let distance = |cell: Cell| {
        (cell.col - snapshot.food.col).abs() + (cell.row - snapshot.food.row).abs()
    };
    let is_safe = |cell: Cell| {
        snapshot.grid.contains(cell)
            && !snapshot.snake.occupies(cell)
            && !snapshot.obstacles.contains(&cell)
    };

    let mut candidates: Vec<Direction> = DIRECTIONS
        .into_iter()
        .filter(|direction| snapshot.direction != Some(direction.opposite()))
        .filter(|direction| is_safe(head.offset(direction.offset())))
        .collect();

    if candidates.is_empty() {
        return DIRECTIONS[rng.gen_range(0..DIRECTIONS.len())];
    }

    candidates.sort_by_key(|direction| distance(head.offset(direction.offset())));
    // Occasionally wander so runs do not all look alike.
    if rng.gen_bool(0.1) {
        candidates[rng.gen_range(0..candidates.len())]
    } else {
        candidates[0]
    }
}

fn assert_consistent(snapshot: &Snapshot<'_>) {
    let grid = snapshot.grid;
    let body: Vec<Cell> = snapshot.snake.segments().copied().collect();
    let body_set: HashSet<Cell> = body.iter().copied().collect();
    let obstacle_set: HashSet<Cell> = snapshot.obstacles.iter().copied().collect();

    assert!(body.iter().all(|cell| grid.contains(*cell)));
    assert!(grid.contains(snapshot.food));
    assert!(snapshot.obstacles.iter().all(|cell| grid.contains(*cell)));

    assert_eq!(body_set.len(), body.len(), "snake overlaps itself");
    assert_eq!(
        obstacle_set.len(),
        snapshot.obstacles.len(),
        "duplicate obstacle"
    );
    assert!(!body_set.contains(&snapshot.food), "food under the snake");
    assert!(
        !obstacle_set.contains(&snapshot.food),
        "food under an obstacle"
    );
    assert!(
        body_set.is_disjoint(&obstacle_set),
        "snake inside an obstacle"
    );
}

#[test]
fn seeded_runs_keep_every_invariant() {
    let grid = GridSpace::new(16, 16).expect("grid should be valid");
    let mut total_level_ups = 0;

    for seed in 0..8 {
        let mut rng = StdRng::seed_from_u64(1_000 + seed);
        let mut state = GameState::new_with_seed(grid, 10, seed).expect("grid has room");
        assert_consistent(&state.snapshot());

        for _ in 0..3_000 {
            let before = state.snapshot();
            let (score, length, level, speed, obstacles) = (
                before.score,
                before.snake.len(),
                before.level,
                before.speed,
                before.obstacles.len(),
            );
            let direction = choose_direction(&before, &mut rng);

            let outcome = state.tick(Some(direction)).expect("grid has room");
            let after = state.snapshot();
            assert_consistent(&after);

            match outcome {
                TickOutcome::Moved => {
                    assert_eq!(after.score, score);
                    assert_eq!(after.snake.len(), length);
                }
                TickOutcome::Ate => {
                    assert_eq!(after.score, score + 10);
                    assert_eq!(after.snake.len(), length + 1);
                    assert_eq!(after.obstacles.len(), obstacles);
                }
                TickOutcome::LeveledUp { level: reached } => {
                    total_level_ups += 1;
                    assert_eq!(reached, level + 1);
                    assert_eq!(after.score, score + 10);
                    assert_eq!(after.snake.len(), length + 1);
                    assert_eq!(after.speed, speed + 2);
                    assert_eq!(after.obstacles.len(), obstacles + 3);
                    assert_eq!(after.foods_eaten_this_level, 0);
                    assert_eq!(after.score, 50 * (after.level - 1));
                }
                TickOutcome::GameOver(_) => {
                    assert_eq!(after.status, GameStatus::GameOver);
                    assert_eq!(after.score, score);
                    assert_eq!(after.snake.len(), length);
                    break;
                }
                TickOutcome::Idle => panic!("a direction was always supplied"),
            }
        }
    }

    assert!(total_level_ups > 0, "no run reached a second level");
}

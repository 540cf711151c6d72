//! Difficulty progression table.

/// Foods that must be eaten within a level before the next one starts.
pub const FOODS_PER_LEVEL: u32 = 5;

/// Ticks-per-second added on every level-up.
pub const SPEED_INCREMENT: u32 = 2;

/// Obstacles added on every level-up.
pub const OBSTACLES_PER_LEVEL: usize = 3;

/// Score granted per food.
pub const POINTS_PER_FOOD: u32 = 10;

/// Effects of reaching a new level.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct LevelUp {
    pub next_level: u32,
    pub speed_delta: u32,
    pub obstacles_added: usize,
}

/// Returns true once enough food has been eaten in the current level.
#[must_use]
pub fn is_level_up_due(foods_eaten_this_level: u32) -> bool {
    foods_eaten_this_level >= FOODS_PER_LEVEL
}

/// Returns what leaving `current_level` grants.
#[must_use]
pub fn on_level_up(current_level: u32) -> LevelUp {
    LevelUp {
        next_level: current_level + 1,
        speed_delta: SPEED_INCREMENT,
        obstacles_added: OBSTACLES_PER_LEVEL,
    }
}

#[cfg(test)]
mod tests {
    use super::{LevelUp, is_level_up_due, on_level_up};

    #[test]
    fn level_up_is_due_on_fifth_food() {
        assert!(!is_level_up_due(0));
        assert!(!is_level_up_due(4));
        assert!(is_level_up_due(5));
    }

    #[test]
    fn every_level_up_grants_the_same_increments() {
        assert_eq!(
            on_level_up(1),
            LevelUp {
                next_level: 2,
                speed_delta: 2,
                obstacles_added: 3,
            }
        );
        assert_eq!(on_level_up(7).next_level, 8);
        assert_eq!(on_level_up(7).obstacles_added, 3);
    }
}

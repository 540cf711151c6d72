use std::collections::VecDeque;

use serde::Serialize;

use crate::grid::Cell;

/// Ordered body cells of the snake, head first.
///
/// `target_length` is the length the body is allowed to reach; it is bumped
/// on growth ticks so the tail stays in place for that tick.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct SnakeBody {
    body: VecDeque<Cell>,
    target_length: usize,
}

impl SnakeBody {
    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Cell) -> Self {
        Self {
            body: VecDeque::from([start]),
            target_length: 1,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// Returns `None` when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }

        let target_length = segments.len();
        Some(Self {
            body: VecDeque::from(segments),
            target_length,
        })
    }

    /// Returns the current head cell.
    #[must_use]
    pub fn head(&self) -> Cell {
        // Constructors reject empty bodies and `advance` never shrinks below one.
        self.body[0]
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Moves the head onto `new_head`.
    ///
    /// Collision checks must run against the body before calling this.
    pub fn advance(&mut self, new_head: Cell, grow: bool) {
        if grow {
            self.target_length += 1;
        }

        self.body.push_front(new_head);
        while self.body.len() > self.target_length {
            let _ = self.body.pop_back();
        }
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake has at least its head.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    #[must_use]
    pub fn target_length(&self) -> usize {
        self.target_length
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::SnakeBody;
    use crate::grid::Cell;

    #[test]
    fn empty_segments_are_rejected() {
        assert!(SnakeBody::from_segments(Vec::new()).is_none());
    }

    #[test]
    fn advance_without_growth_keeps_length() {
        let segments = vec![Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)];
        let mut snake = SnakeBody::from_segments(segments).expect("segments are non-empty");

        snake.advance(Cell::new(6, 5), false);

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(6, 5));
        assert!(!snake.occupies(Cell::new(3, 5)));
        let cells: Vec<Cell> = snake.segments().copied().collect();
        assert_eq!(
            cells,
            vec![Cell::new(6, 5), Cell::new(5, 5), Cell::new(4, 5)]
        );
    }

    #[test]
    fn growth_keeps_previous_tail() {
        let mut snake = SnakeBody::new(Cell::new(5, 5));

        snake.advance(Cell::new(6, 5), true);

        assert_eq!(snake.len(), 2);
        assert_eq!(snake.target_length(), 2);
        assert!(snake.occupies(Cell::new(5, 5)));
        assert!(snake.occupies(Cell::new(6, 5)));
    }

    #[test]
    fn growth_persists_across_later_moves() {
        let mut snake = SnakeBody::new(Cell::new(1, 1));

        snake.advance(Cell::new(2, 1), true);
        snake.advance(Cell::new(3, 1), false);
        snake.advance(Cell::new(4, 1), false);

        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Cell::new(4, 1));
        assert!(snake.occupies(Cell::new(3, 1)));
    }
}

use std::io;

use thiserror::Error;

/// Failures raised by the game engine.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum GameError {
    /// Every cell of the grid is excluded, so nothing can be placed.
    #[error("no free cell available on the {width}x{height} grid")]
    NoFreeCellAvailable { width: u16, height: u16 },

    /// A grid needs at least one row and one column.
    #[error("grid dimensions must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: u16, height: u16 },
}

/// Failures surfaced by the terminal front-end.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error("failed to initialise logging: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error(transparent)]
    Game(#[from] GameError),
}

use std::time::Duration;

use clap::ValueEnum;
use ratatui::style::Color;
use serde::Serialize;

/// Logical display width in pixels the board is derived from.
pub const DISPLAY_WIDTH: u16 = 1000;

/// Logical display height in pixels the board is derived from.
pub const DISPLAY_HEIGHT: u16 = 600;

/// Edge length of one grid cell in pixels.
pub const CELL_SIZE: u16 = 20;

/// Number of grid columns.
pub const GRID_WIDTH: u16 = DISPLAY_WIDTH / CELL_SIZE;

/// Number of grid rows.
pub const GRID_HEIGHT: u16 = DISPLAY_HEIGHT / CELL_SIZE;

/// Upper bound on a single input poll so menus stay responsive.
pub const FRAME_POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Starting difficulty, chosen once per run.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties in menu order.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Starting speed in ticks per second.
    #[must_use]
    pub fn base_speed(self) -> u32 {
        match self {
            Self::Easy => 10,
            Self::Medium => 15,
            Self::Hard => 20,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Menu hotkey for this difficulty.
    #[must_use]
    pub fn key(self) -> char {
        match self {
            Self::Easy => '1',
            Self::Medium => '2',
            Self::Hard => '3',
        }
    }
}

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub obstacle: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_text: Color,
    pub hud_value: Color,
    pub menu_title: Color,
    pub menu_hint: Color,
    pub game_over: Color,
}

/// Green snake, red food and purple obstacles on black.
pub const THEME_CLASSIC: Theme = Theme {
    snake_head: Color::LightGreen,
    snake_body: Color::Green,
    food: Color::Red,
    obstacle: Color::Rgb(160, 32, 240),
    play_bg: Color::Black,
    border_fg: Color::White,
    hud_text: Color::White,
    hud_value: Color::Yellow,
    menu_title: Color::Green,
    menu_hint: Color::Yellow,
    game_over: Color::Red,
};

/// Glyph drawn for the snake head.
pub const GLYPH_SNAKE_HEAD: &str = "█";

/// Glyph drawn for body segments.
pub const GLYPH_SNAKE_BODY: &str = "▓";

/// Glyph drawn for food.
pub const GLYPH_FOOD: &str = "●";

/// Glyph drawn for obstacles.
pub const GLYPH_OBSTACLE: &str = "▒";

/// HUD column separator.
pub const GLYPH_SEPARATOR: &str = "│";

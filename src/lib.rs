pub mod app;
pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod input;
pub mod level;
pub mod logging;
pub mod placer;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;

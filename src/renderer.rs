use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::app::Phase;
use crate::config::{
    GLYPH_FOOD, GLYPH_OBSTACLE, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD, THEME_CLASSIC, Theme,
};
use crate::game::Snapshot;
use crate::grid::{Cell, GridSpace};
use crate::ui::hud::{HUD_HEIGHT, render_hud};
use crate::ui::menu::{
    render_fault_menu, render_game_over_menu, render_start_menu, render_too_small,
};

/// Renders the full frame for the current driver phase.
pub fn render(frame: &mut Frame<'_>, phase: &Phase) {
    let area = frame.area();
    let theme = &THEME_CLASSIC;

    match phase {
        Phase::Start => render_start_menu(frame, area, theme),
        Phase::Playing(state) => {
            let _ = render_board(frame, area, &state.snapshot(), theme);
        }
        Phase::GameOver(state) => {
            let snapshot = state.snapshot();
            if let Some(board) = render_board(frame, area, &snapshot, theme) {
                render_game_over_menu(frame, board, &snapshot, theme);
            }
        }
        Phase::Fault(error) => render_fault_menu(frame, area, error, theme),
    }
}

/// Terminal size needed for the bordered board plus the HUD.
#[must_use]
pub fn required_size(grid: GridSpace) -> (u16, u16) {
    (
        grid.width().saturating_add(2),
        grid.height().saturating_add(2 + HUD_HEIGHT),
    )
}

/// Returns true when a `width` x `height` terminal has room for the board.
#[must_use]
pub fn board_fits(grid: GridSpace, width: u16, height: u16) -> bool {
    let (required_width, required_height) = required_size(grid);
    width >= required_width && height >= required_height
}

/// Draws board and HUD; returns the board rect, or `None` if it does not fit.
fn render_board(
    frame: &mut Frame<'_>,
    area: Rect,
    snapshot: &Snapshot<'_>,
    theme: &Theme,
) -> Option<Rect> {
    let (required_width, required_height) = required_size(snapshot.grid);
    if !board_fits(snapshot.grid, area.width, area.height) {
        render_too_small(frame, area, (required_width, required_height), theme);
        return None;
    }

    let play_area = render_hud(frame, area, snapshot, theme);
    let board = centered_rect(play_area, required_width, required_height - HUD_HEIGHT);

    let block = Block::bordered()
        .border_style(Style::new().fg(theme.border_fg))
        .style(Style::new().bg(theme.play_bg));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_obstacles(frame, inner, snapshot, theme);
    render_food(frame, inner, snapshot, theme);
    render_snake(frame, inner, snapshot, theme);

    Some(board)
}

fn render_obstacles(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot<'_>, theme: &Theme) {
    let buffer = frame.buffer_mut();
    let style = Style::new().fg(theme.obstacle);

    for obstacle in snapshot.obstacles {
        if let Some((x, y)) = logical_to_terminal(inner, snapshot.grid, *obstacle) {
            buffer.set_string(x, y, GLYPH_OBSTACLE, style);
        }
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot<'_>, theme: &Theme) {
    let Some((x, y)) = logical_to_terminal(inner, snapshot.grid, snapshot.food) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot<'_>, theme: &Theme) {
    let buffer = frame.buffer_mut();

    // Tail first so the head wins if anything overlaps.
    let segments: Vec<&Cell> = snapshot.snake.segments().collect();
    for (index, segment) in segments.iter().enumerate().rev() {
        let Some((x, y)) = logical_to_terminal(inner, snapshot.grid, **segment) else {
            continue;
        };

        if index == 0 {
            buffer.set_string(
                x,
                y,
                GLYPH_SNAKE_HEAD,
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
        }
    }
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn logical_to_terminal(inner: Rect, grid: GridSpace, cell: Cell) -> Option<(u16, u16)> {
    if !grid.contains(cell) {
        return None;
    }

    let x_offset = u16::try_from(cell.col).ok()?;
    let y_offset = u16::try_from(cell.row).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

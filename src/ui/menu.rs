use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use crate::config::{Difficulty, Theme};
use crate::error::GameError;
use crate::game::{DeathReason, Snapshot};

/// Draws the difficulty selection screen.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let popup = centered_popup(area, 70, 60);
    frame.render_widget(Clear, popup);

    let [title_row, body_row, footer_row] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(2),
    ])
    .areas(popup);

    frame.render_widget(
        Paragraph::new(Line::from("SNAKE"))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme.menu_title)
                    .add_modifier(Modifier::BOLD),
            ),
        title_row,
    );

    let mut body = vec![Line::from("Select difficulty:"), Line::from("")];
    body.extend(Difficulty::ALL.iter().map(|difficulty| {
        Line::from(format!(
            "[{}] {:<6} {} ticks/s",
            difficulty.key(),
            difficulty.label(),
            difficulty.base_speed()
        ))
    }));
    body.push(Line::from(""));
    body.push(Line::from("[Q]/[Esc] Quit"));
    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" start ")),
        body_row,
    );

    frame.render_widget(
        Paragraph::new(Line::from("Use arrows/WASD to move"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.menu_hint)),
        footer_row,
    );
}

/// Draws the game-over popup over the board.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    snapshot: &Snapshot<'_>,
    theme: &Theme,
) {
    let popup = centered_popup(area, 70, 60);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("GAME OVER").style(
            Style::default()
                .fg(theme.game_over)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("Score: {}", snapshot.score)),
        Line::from(format!("Level: {}", snapshot.level)),
        Line::from(death_reason_text(snapshot.death_reason)),
        Line::from(""),
        Line::from("[R] Retry  [Q] Quit").style(Style::default().fg(theme.menu_hint)),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

/// Draws an engine failure as a diagnostic with the same retry/quit choice.
pub fn render_fault_menu(frame: &mut Frame<'_>, area: Rect, error: &GameError, theme: &Theme) {
    let popup = centered_popup(area, 70, 50);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("CONFIGURATION ERROR").style(
            Style::default()
                .fg(theme.game_over)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(error.to_string()),
        Line::from(""),
        Line::from("[R] Retry  [Q] Quit").style(Style::default().fg(theme.menu_hint)),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::bordered().title(" error ")),
        popup,
    );
}

/// Asks for a larger terminal when the board cannot fit.
pub fn render_too_small(frame: &mut Frame<'_>, area: Rect, required: (u16, u16), theme: &Theme) {
    let lines = vec![
        Line::from("Terminal too small"),
        Line::from(format!(
            "need {}x{}, have {}x{}",
            required.0, required.1, area.width, area.height
        )),
    ];

    let [_, middle, _] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.menu_hint)),
        middle,
    );
}

fn death_reason_text(reason: Option<DeathReason>) -> &'static str {
    match reason {
        Some(DeathReason::Wall) => "Cause: hit the wall",
        Some(DeathReason::SelfCollision) => "Cause: hit yourself",
        Some(DeathReason::Obstacle) => "Cause: hit an obstacle",
        None => "",
    }
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}

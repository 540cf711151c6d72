use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::{GLYPH_SEPARATOR, Theme};
use crate::game::Snapshot;

/// Rows reserved below the board for the status line.
pub const HUD_HEIGHT: u16 = 1;

/// Renders the status line and returns the remaining area above it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    snapshot: &Snapshot<'_>,
    theme: &Theme,
) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(HUD_HEIGHT)])
            .areas(area);

    frame.render_widget(
        Paragraph::new(info_line(snapshot, usize::from(hud_area.width), theme))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.hud_text)),
        hud_area,
    );

    play_area
}

fn info_line(snapshot: &Snapshot<'_>, available_width: usize, theme: &Theme) -> Line<'static> {
    let compact = info_width(snapshot, false) > available_width;
    let sep = format!(" {GLYPH_SEPARATOR} ");
    let value_style = Style::default().fg(theme.hud_value);

    let mut spans = Vec::new();
    for (index, (label, value)) in fields(snapshot, compact).into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw(sep.clone()));
        }
        spans.push(Span::raw(format!("{label}: ")));
        spans.push(Span::styled(value, value_style));
    }

    Line::from(spans)
}

fn fields(snapshot: &Snapshot<'_>, compact: bool) -> [(&'static str, String); 5] {
    let label = |full: &'static str, short: &'static str| {
        if compact { short } else { full }
    };

    [
        (label("Score", "S"), snapshot.score.to_string()),
        (label("Level", "L"), snapshot.level.to_string()),
        (label("Speed", "V"), snapshot.speed.to_string()),
        (label("Length", "N"), snapshot.snake.len().to_string()),
        (label("Obstacles", "X"), snapshot.obstacles.len().to_string()),
    ]
}

fn info_width(snapshot: &Snapshot<'_>, compact: bool) -> usize {
    let sep_width = format!(" {GLYPH_SEPARATOR} ").width();
    let fields = fields(snapshot, compact);
    let field_width: usize = fields
        .iter()
        .map(|(label, value)| label.width() + 2 + value.width())
        .sum();

    field_width + sep_width * (fields.len() - 1)
}

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::ui::hud::{HudInfo, reset_label};

/// Draws the waiting-for-direction prompt as a centered popup.
pub fn render_ready_menu(frame: &mut Frame<'_>, area: Rect, info: &HudInfo<'_>) {
    let popup = centered_popup(area, 80, 60);
    frame.render_widget(Clear, popup);

    let palette = info.palette;
    let mut lines = vec![
        Line::styled(
            "SNAKE",
            Style::new()
                .fg(palette.snake_body)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];

    if let Some(cause) = info.last_reset {
        lines.push(Line::from(format!("Last run: {}", reset_label(cause))));
    }
    lines.push(Line::from(format!("Best: {}", info.best_score)));
    lines.push(Line::from(""));
    lines.push(Line::from("Arrows/WASD to start"));
    lines.push(Line::styled(
        "[R] Restart  [Q] Quit",
        Style::new().fg(palette.hud_muted),
    ));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" ready ")),
        popup,
    );
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

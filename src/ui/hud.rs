use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::Palette;
use crate::game::{GameState, ResetCause};

const SEPARATOR: &str = " │ ";

/// Supplemental values displayed next to the live game state.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    /// Best score of this program run; never persisted.
    pub best_score: u32,
    pub last_reset: Option<ResetCause>,
    pub palette: &'a Palette,
}

/// Renders the one-line HUD and returns the play area above it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &GameState,
    info: &HudInfo<'_>,
) -> Rect {
    let [play_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let compact = status_width(state, info, false) > usize::from(status_area.width);
    frame.render_widget(
        Paragraph::new(status_line(state, info, compact)).alignment(Alignment::Center),
        status_area,
    );

    play_area
}

/// Short description of a reset cause for the HUD and overlays.
#[must_use]
pub fn reset_label(cause: ResetCause) -> &'static str {
    match cause {
        ResetCause::WallCollision => "hit wall",
        ResetCause::SelfCollision => "hit yourself",
        ResetCause::BoardFilled => "board filled",
        ResetCause::Requested => "restarted",
    }
}

fn status_fields(
    state: &GameState,
    info: &HudInfo<'_>,
    compact: bool,
) -> Vec<(&'static str, String)> {
    let labels: [&str; 4] = if compact {
        ["S", "L", "T", "B"]
    } else {
        ["Score", "Length", "Tick", "Best"]
    };

    let mut fields = vec![
        (labels[0], state.score.to_string()),
        (labels[1], state.snake.len().to_string()),
        (labels[2], format!("{}ms", state.speed_ms)),
        (labels[3], info.best_score.max(state.score).to_string()),
    ];

    if let (false, Some(cause)) = (compact, info.last_reset) {
        fields.push(("Last", reset_label(cause).to_owned()));
    }

    fields
}

fn status_line(state: &GameState, info: &HudInfo<'_>, compact: bool) -> Line<'static> {
    let label_style = Style::new().fg(info.palette.hud_muted);
    let value_style = Style::new()
        .fg(info.palette.hud)
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::new();
    let fields = status_fields(state, info, compact);
    for (index, (label, value)) in fields.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(SEPARATOR, label_style));
        }
        spans.push(Span::styled(format!("{label}: "), label_style));
        spans.push(Span::styled(value, value_style));
    }

    Line::from(spans)
}

fn status_width(state: &GameState, info: &HudInfo<'_>, compact: bool) -> usize {
    let fields = status_fields(state, info, compact);
    let separators = fields.len().saturating_sub(1) * SEPARATOR.width();

    fields
        .iter()
        .map(|(label, value)| label.width() + 2 + value.width())
        .sum::<usize>()
        + separators
}

#[cfg(test)]
mod tests {
    use super::{HudInfo, reset_label, status_fields, status_width};
    use crate::config::PALETTE_CLASSIC;
    use crate::game::{GameState, ResetCause};
    use crate::input::Direction;
    use crate::snake::{Cell, Snake};

    fn sample_state(score: u32) -> GameState {
        GameState {
            snake: Snake::from_segments(vec![Cell::new(3, 3), Cell::new(2, 3)])
                .expect("test snake is well formed"),
            food: Cell::new(0, 0),
            direction: Direction::Right,
            score,
            speed_ms: 180,
            tile_count: 20,
        }
    }

    #[test]
    fn status_lists_score_length_tick_and_best() {
        let info = HudInfo {
            best_score: 40,
            last_reset: Some(ResetCause::WallCollision),
            palette: &PALETTE_CLASSIC,
        };

        let fields = status_fields(&sample_state(50), &info, false);

        assert_eq!(
            fields,
            vec![
                ("Score", "50".to_owned()),
                ("Length", "2".to_owned()),
                ("Tick", "180ms".to_owned()),
                ("Best", "50".to_owned()),
                ("Last", "hit wall".to_owned()),
            ]
        );
    }

    #[test]
    fn compact_status_is_narrower() {
        let info = HudInfo {
            best_score: 0,
            last_reset: Some(ResetCause::SelfCollision),
            palette: &PALETTE_CLASSIC,
        };
        let state = sample_state(10);

        assert!(status_width(&state, &info, true) < status_width(&state, &info, false));
        // "Score: 10 │ Length: 2 │ Tick: 180ms │ Best: 10 │ Last: hit yourself"
        assert_eq!(status_width(&state, &info, false), 67);
    }

    #[test]
    fn reset_labels_are_distinct() {
        let labels = [
            reset_label(ResetCause::WallCollision),
            reset_label(ResetCause::SelfCollision),
            reset_label(ResetCause::BoardFilled),
            reset_label(ResetCause::Requested),
        ];

        for (index, label) in labels.iter().enumerate() {
            assert!(!labels[index + 1..].contains(label));
        }
    }
}

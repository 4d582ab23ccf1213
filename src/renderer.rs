use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{CELL_WIDTH, GLYPH_CELL, Palette};
use crate::game::GameState;
use crate::snake::Cell;
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::menu::render_ready_menu;

/// Renders the full game frame from immutable state.
///
/// Drawing order is background, snake (head first), food, then overlays.
pub fn render(frame: &mut Frame<'_>, state: &GameState, hud_info: &HudInfo<'_>) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, hud_info);
    let palette = hud_info.palette;

    let board = board_area(play_area, state.tile_count);
    let block = Block::bordered().border_style(Style::new().fg(palette.border));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_background(frame, inner, palette);
    render_snake(frame, inner, state, palette);
    render_food(frame, inner, state, palette);

    if !state.direction.is_moving() {
        render_ready_menu(frame, board, hud_info);
    }
}

/// Centers the bordered board for a `tile_count` grid inside `area`.
#[must_use]
pub fn board_area(area: Rect, tile_count: u16) -> Rect {
    let width = tile_count.saturating_mul(CELL_WIDTH).saturating_add(2);
    let height = tile_count.saturating_add(2);

    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [board] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    board
}

fn render_background(frame: &mut Frame<'_>, inner: Rect, palette: &Palette) {
    let style = Style::new().bg(palette.background);
    let buffer = frame.buffer_mut();
    for y in inner.top()..inner.bottom() {
        for x in inner.left()..inner.right() {
            buffer.set_string(x, y, " ", style);
        }
    }
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, palette: &Palette) {
    let buffer = frame.buffer_mut();
    for (index, segment) in state.snake.segments().enumerate() {
        let Some((x, y)) = logical_to_terminal(inner, state.tile_count, *segment) else {
            continue;
        };

        let style = if index == 0 {
            Style::new()
                .fg(palette.snake_head)
                .bg(palette.background)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(palette.snake_body).bg(palette.background)
        };
        buffer.set_string(x, y, GLYPH_CELL, style);
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, palette: &Palette) {
    let Some((x, y)) = logical_to_terminal(inner, state.tile_count, state.food) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(
        x,
        y,
        GLYPH_CELL,
        Style::new().fg(palette.food).bg(palette.background),
    );
}

/// Maps a grid cell to the terminal column/row of its left half.
#[must_use]
pub fn logical_to_terminal(inner: Rect, tile_count: u16, cell: Cell) -> Option<(u16, u16)> {
    if !cell.is_within_grid(tile_count) {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(cell.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

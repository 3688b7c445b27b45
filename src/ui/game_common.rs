//! Shared layout pieces for the game screen.

use crate::config::GameConfig;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 2.0;

/// Areas returned by [`create_game_layout`].
pub struct GameLayout {
    /// Play area, sized to the field's aspect ratio and centred.
    pub field: Rect,
    /// Two-line status bar under the play area.
    pub status_bar: Rect,
    /// Info panel on the right, with its own border.
    pub info_panel: Rect,
}

/// Split `area` into a bordered game panel and an info panel.
///
/// ```text
/// ┌─ Title ─────────────────────────┬─ Info ──────┐
/// │        [field]                  │  [info]     │
/// │ [status bar - 2 lines]          │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    info_panel_width: u16,
    config: &GameConfig,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(info_panel_width)])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(2)])
        .split(h_chunks[0]);

    GameLayout {
        field: fit_field(v_chunks[0], config),
        status_bar: v_chunks[1],
        info_panel: h_chunks[1],
    }
}

/// Largest rect inside `area` with the field's on-screen aspect ratio, centred.
pub fn fit_field(area: Rect, config: &GameConfig) -> Rect {
    // Columns per row that keep the field's proportions
    let cols_per_row = config.field_width / config.field_height * CELL_ASPECT;

    let mut height = f64::from(area.height);
    let mut width = (height * cols_per_row).round();
    if width > f64::from(area.width) {
        width = f64::from(area.width);
        height = (width / cols_per_row).round().min(f64::from(area.height));
    }

    let width = (width as u16).max(1).min(area.width);
    let height = (height as u16).max(1).min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Render a status bar: a centred message and a line of key hints.
///
/// `controls` is a slice of (key, action) pairs, e.g. `[("[Space]", "Flap")]`.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }
        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Render an info panel frame and return its inner area.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

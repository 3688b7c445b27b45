//! The game screen: play field, status bar and info panel.

use super::game_common::{create_game_layout, render_info_panel_frame, render_status_bar};
use super::terminal_canvas::TerminalCanvas;
use crate::game::{Game, Phase};
use crate::render::render_frame;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const INFO_PANEL_WIDTH: u16 = 22;

/// Render the whole game screen into `area`.
pub fn render_flappy(frame: &mut Frame, area: Rect, game: &Game) {
    let border = match game.phase {
        Phase::Playing => Color::Cyan,
        Phase::GameOver => Color::Red,
    };
    let layout = create_game_layout(
        frame,
        area,
        " Flappy Bird ",
        border,
        INFO_PANEL_WIDTH,
        &game.config,
    );

    let mut canvas = TerminalCanvas::new(frame.buffer_mut(), layout.field, &game.config);
    render_frame(game, &mut canvas);

    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &Game) {
    match (game.phase, game.session.crash) {
        (Phase::GameOver, Some(crash)) => render_status_bar(
            frame,
            area,
            &format!("{}!", crash.describe()),
            Color::Red,
            &[("[R]", "Restart"), ("[Q/Esc]", "Quit")],
        ),
        _ => render_status_bar(
            frame,
            area,
            &format!("Score: {}", game.session.score),
            Color::Green,
            &[("[Space/Up]", "Flap"), ("[Q/Esc]", "Quit")],
        ),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &Game) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(game.session.score.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled(" Best:  ", label),
            Span::styled(
                game.best_score.to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Run:   ", label),
            Span::styled(game.sessions_played.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled(" Time:  ", label),
            Span::styled(
                format!(
                    "{:.1}s",
                    game.session.tick_count as f64 / f64::from(game.config.ticks_per_second)
                ),
                value,
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf.get(x, y).symbol());
            }
            out.push('\n');
        }
        out
    }

    fn draw(game: &Game) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.size();
                render_flappy(frame, area, game);
            })
            .unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_playing_screen() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let game = Game::new(GameConfig::default(), &mut rng).unwrap();
        let text = draw(&game);
        assert!(text.contains("Flappy Bird"));
        assert!(text.contains("Score: 0"));
        assert!(text.contains("Flap"));
        assert!(!text.contains("Game Over!"));
    }

    #[test]
    fn test_game_over_screen() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut game = Game::new(GameConfig::default(), &mut rng).unwrap();
        game.session.bird.y = 2000.0;
        game.step(&[], &mut rng);

        let text = draw(&game);
        assert!(text.contains("Game Over!"));
        assert!(text.contains("Hit the ground!"));
        assert!(text.contains("Restart"));
    }
}

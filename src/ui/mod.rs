//! Terminal presentation.

pub mod flappy_scene;
pub mod game_common;
pub mod terminal_canvas;

use crate::game::Game;
use ratatui::Frame;

pub use terminal_canvas::TerminalCanvas;

/// Draw the current frame of the game.
pub fn draw_ui(frame: &mut Frame, game: &Game) {
    let area = frame.size();
    flappy_scene::render_flappy(frame, area, game);
}

//! Frame composition.
//!
//! [`render_frame`] walks the game state and issues draw calls to a
//! [`Canvas`] in a fixed order. The canvas decides what a sprite looks like.

use crate::config::GameConfig;
use crate::game::{Game, Phase, Point};

/// Images the game draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    /// Far background layer, one field in size.
    Sky,
    /// Near background layer along the bottom of the field.
    Ground,
    Bird,
    /// Pipe hanging from the top (the pipe image flipped vertically).
    PipeTop,
    /// Pipe standing on the floor.
    PipeBottom,
}

impl Sprite {
    /// Width and height in field pixels.
    pub fn size(self, config: &GameConfig) -> (f64, f64) {
        match self {
            Sprite::Sky => (config.field_width, config.field_height),
            Sprite::Ground => (config.field_width, config.near_layer_height),
            Sprite::Bird => (config.bird_width, config.bird_height),
            Sprite::PipeTop | Sprite::PipeBottom => (config.pipe_width, config.pipe_sprite_height),
        }
    }
}

/// Drawing surface the game renders onto.
pub trait Canvas {
    /// Draw `sprite` with its top-left corner at `pos`, rotated by
    /// `rotation` degrees (positive = clockwise, nose down).
    fn draw_sprite(&mut self, sprite: Sprite, pos: Point, rotation: f64);

    /// Draw `text` starting at `pos`.
    fn draw_text(&mut self, text: &str, pos: Point);
}

/// Draw one complete frame.
///
/// Order: sky ×2, ground ×2, bird, each pipe (top then bottom), score HUD,
/// and the end-of-session overlay when the game is over.
pub fn render_frame<C: Canvas>(game: &Game, canvas: &mut C) {
    let config = &game.config;
    let session = &game.session;
    let background = &session.background;

    canvas.draw_sprite(Sprite::Sky, Point::new(background.far_x, 0.0), 0.0);
    canvas.draw_sprite(
        Sprite::Sky,
        Point::new(background.far_x + config.field_width, 0.0),
        0.0,
    );
    let ground_y = config.field_height - config.near_layer_height;
    canvas.draw_sprite(Sprite::Ground, Point::new(background.near_x, ground_y), 0.0);
    canvas.draw_sprite(
        Sprite::Ground,
        Point::new(background.near_x + config.field_width, ground_y),
        0.0,
    );

    let bird = &session.bird;
    canvas.draw_sprite(
        Sprite::Bird,
        Point::new(bird.x - bird.width / 2.0, bird.y - bird.height / 2.0),
        bird.angle,
    );

    for pipe in &session.pipes {
        canvas.draw_sprite(
            Sprite::PipeTop,
            Point::new(pipe.x, pipe.gap_top - config.pipe_sprite_height),
            0.0,
        );
        canvas.draw_sprite(
            Sprite::PipeBottom,
            Point::new(pipe.x, pipe.gap_top + config.pipe_gap),
            0.0,
        );
    }

    canvas.draw_text(&format!("Score: {}", session.score), Point::new(10.0, 10.0));

    if game.phase == Phase::GameOver {
        for (text, pos) in game_over_lines(game) {
            canvas.draw_text(&text, pos);
        }
    }
}

/// The four overlay lines shown once a session has ended.
pub fn game_over_lines(game: &Game) -> [(String, Point); 4] {
    let cx = game.config.field_width / 2.0;
    let cy = game.config.field_height / 2.0;
    [
        ("Game Over!".to_string(), Point::new(cx - 100.0, cy - 60.0)),
        (
            format!("Score: {}", game.session.score),
            Point::new(cx - 100.0, cy - 20.0),
        ),
        (
            format!("Best Score: {}", game.best_score),
            Point::new(cx - 100.0, cy + 20.0),
        ),
        (
            "Press R to Restart".to_string(),
            Point::new(cx - 150.0, cy + 60.0),
        ),
    ]
}

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Sprite {
        sprite: Sprite,
        pos: Point,
        rotation: f64,
    },
    Text {
        text: String,
        pos: Point,
    },
}

/// Canvas that records calls instead of drawing them.
#[derive(Debug, Default)]
pub struct DrawList {
    pub calls: Vec<DrawCall>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of every `draw_text` call, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                DrawCall::Sprite { .. } => None,
            })
            .collect()
    }
}

impl Canvas for DrawList {
    fn draw_sprite(&mut self, sprite: Sprite, pos: Point, rotation: f64) {
        self.calls.push(DrawCall::Sprite {
            sprite,
            pos,
            rotation,
        });
    }

    fn draw_text(&mut self, text: &str, pos: Point) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            pos,
        });
    }
}

//! Integration test: frame composition
//!
//! Records draw calls with `DrawList` and checks the order and placement of
//! everything the game draws.

use flappy::game::Point;
use flappy::render::{render_frame, DrawCall, DrawList, Sprite};
use flappy::{Game, GameConfig, GameInput, Phase};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn new_game() -> (Game, ChaCha8Rng) {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let game = Game::new(GameConfig::default(), &mut rng).unwrap();
    (game, rng)
}

fn sprites(list: &DrawList) -> Vec<Sprite> {
    list.calls
        .iter()
        .filter_map(|call| match call {
            DrawCall::Sprite { sprite, .. } => Some(*sprite),
            DrawCall::Text { .. } => None,
        })
        .collect()
}

#[test]
fn test_playing_frame_order() {
    let (game, _) = new_game();
    let mut list = DrawList::new();
    render_frame(&game, &mut list);

    assert_eq!(
        sprites(&list),
        vec![
            Sprite::Sky,
            Sprite::Sky,
            Sprite::Ground,
            Sprite::Ground,
            Sprite::Bird,
            Sprite::PipeTop,
            Sprite::PipeBottom,
            Sprite::PipeTop,
            Sprite::PipeBottom,
            Sprite::PipeTop,
            Sprite::PipeBottom,
        ]
    );
    // HUD is the last call while playing
    assert_eq!(
        list.calls.last(),
        Some(&DrawCall::Text {
            text: "Score: 0".to_string(),
            pos: Point::new(10.0, 10.0),
        })
    );
    assert_eq!(list.texts(), vec!["Score: 0"]);
}

#[test]
fn test_background_tiles_follow_offsets() {
    let (mut game, mut rng) = new_game();
    for _ in 0..10 {
        game.step(&[GameInput::Flap], &mut rng);
    }
    let mut list = DrawList::new();
    render_frame(&game, &mut list);

    let positions: Vec<Point> = list.calls[..4]
        .iter()
        .map(|call| match call {
            DrawCall::Sprite { pos, .. } => *pos,
            DrawCall::Text { .. } => panic!("expected a sprite"),
        })
        .collect();
    assert_eq!(
        positions,
        vec![
            Point::new(-20.0, 0.0),
            Point::new(380.0, 0.0),
            Point::new(-40.0, 500.0),
            Point::new(360.0, 500.0),
        ]
    );
}

#[test]
fn test_bird_and_pipe_placement() {
    let (mut game, _) = new_game();
    game.session.bird.y = 250.0;
    game.session.bird.angle = -30.0;
    game.session.pipes[0].gap_top = 120.0;

    let mut list = DrawList::new();
    render_frame(&game, &mut list);

    assert_eq!(
        list.calls[4],
        DrawCall::Sprite {
            sprite: Sprite::Bird,
            pos: Point::new(30.0, 235.0),
            rotation: -30.0,
        }
    );
    assert_eq!(
        list.calls[5],
        DrawCall::Sprite {
            sprite: Sprite::PipeTop,
            pos: Point::new(400.0, 120.0 - 320.0),
            rotation: 0.0,
        }
    );
    assert_eq!(
        list.calls[6],
        DrawCall::Sprite {
            sprite: Sprite::PipeBottom,
            pos: Point::new(400.0, 320.0),
            rotation: 0.0,
        }
    );
}

#[test]
fn test_game_over_overlay() {
    let (mut game, mut rng) = new_game();
    game.session.score = 4;
    game.best_score = 9;
    game.session.bird.y = 1000.0;
    game.step(&[], &mut rng);
    assert_eq!(game.phase, Phase::GameOver);

    let mut list = DrawList::new();
    render_frame(&game, &mut list);

    assert_eq!(
        list.texts(),
        vec![
            "Score: 4",
            "Game Over!",
            "Score: 4",
            "Best Score: 9",
            "Press R to Restart"
        ]
    );
    let overlay: Vec<&DrawCall> = list.calls.iter().rev().take(4).collect();
    assert_eq!(
        overlay[3],
        &DrawCall::Text {
            text: "Game Over!".to_string(),
            pos: Point::new(100.0, 240.0),
        }
    );
    assert_eq!(
        overlay[0],
        &DrawCall::Text {
            text: "Press R to Restart".to_string(),
            pos: Point::new(50.0, 360.0),
        }
    );
}

#[test]
fn test_frozen_frames_repeat_while_game_over() {
    let (mut game, mut rng) = new_game();
    game.session.bird.y = 1000.0;
    game.step(&[], &mut rng);

    let mut first = DrawList::new();
    render_frame(&game, &mut first);
    game.step(&[GameInput::Flap], &mut rng);
    let mut second = DrawList::new();
    render_frame(&game, &mut second);

    assert_eq!(first.calls, second.calls);
}

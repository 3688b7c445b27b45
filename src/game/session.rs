//! A single play session: one bird, a fixed number of pipes, one score.
//!
//! A session is never reset in place. When it ends the owner discards it
//! and builds a new one (see [`super::state::Game`]).

use super::entities::{Background, Bird, Pipe};
use crate::config::{ConfigError, GameConfig};
use rand::Rng;
use std::ops::RangeInclusive;

/// What ended a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crash {
    /// Hit a pipe's solid region.
    Pipe,
    /// Flew above the top of the field.
    Ceiling,
    /// Fell below the bottom of the field.
    Ground,
}

impl Crash {
    pub fn describe(self) -> &'static str {
        match self {
            Crash::Pipe => "Hit a pipe",
            Crash::Ceiling => "Flew too high",
            Crash::Ground => "Hit the ground",
        }
    }
}

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Pipes that scrolled off and were replaced this tick.
    pub recycled: u32,
    /// Set on the tick the session ended.
    pub crash: Option<Crash>,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub config: GameConfig,
    pub bird: Bird,
    /// Live pipes in spawn order.
    pub pipes: Vec<Pipe>,
    pub background: Background,
    /// Pipes passed so far.
    pub score: u32,
    /// Why the session ended. `Some` means the session is over.
    pub crash: Option<Crash>,
    /// Total ticks simulated.
    pub tick_count: u64,
    gap_range: RangeInclusive<i64>,
}

impl Session {
    /// Start a session with a fresh bird and `pipe_count` pipes spaced
    /// `pipe_spacing` apart, starting at the right edge of the field.
    ///
    /// Fails if the config does not validate.
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;
        let gap_range = config.gap_top_range()?;
        let pipes = (0..config.pipe_count)
            .map(|i| {
                let x = config.field_width + i as f64 * config.pipe_spacing;
                Pipe::new(x, &gap_range, rng)
            })
            .collect();

        Ok(Self {
            config: config.clone(),
            bird: Bird::new(config),
            pipes,
            background: Background::new(),
            score: 0,
            crash: None,
            tick_count: 0,
            gap_range,
        })
    }

    pub fn is_over(&self) -> bool {
        self.crash.is_some()
    }

    /// Where replacement pipes spawn.
    ///
    /// Measured from the right edge of the field, not from the last live
    /// pipe, so spacing between a replacement and its neighbour can drift.
    pub fn respawn_x(&self) -> f64 {
        self.config.field_width + self.config.pipe_spacing
    }

    /// Advance the session by one tick.
    ///
    /// `flap` is applied before physics so the impulse takes effect this
    /// tick. Does nothing once the session is over.
    pub fn tick<R: Rng>(&mut self, flap: bool, rng: &mut R) -> TickReport {
        let mut report = TickReport::default();
        if self.is_over() {
            return report;
        }
        self.tick_count += 1;

        self.background
            .update(self.config.background_speed, self.config.field_width);

        if flap {
            self.bird.flap(self.config.flap_velocity);
        }
        self.bird.update(self.config.gravity);
        let bird_box = self.bird.bounds();

        let mut crash = None;

        // Walk the pipes from the start-of-tick snapshot. Replacements are
        // collected separately so none is advanced or skipped this tick.
        let snapshot = std::mem::take(&mut self.pipes);
        let mut kept = Vec::with_capacity(snapshot.len());
        let mut spawned = Vec::new();
        for mut pipe in snapshot {
            pipe.update(self.config.pipe_speed);

            if pipe.collides_with(&bird_box, &self.config) {
                crash.get_or_insert(Crash::Pipe);
            }

            if pipe.is_off_screen(self.config.pipe_width) {
                spawned.push(Pipe::new(self.respawn_x(), &self.gap_range, rng));
                self.score += 1;
                report.recycled += 1;
                log::debug!("Pipe recycled, score {}", self.score);
            } else {
                kept.push(pipe);
            }
        }
        kept.extend(spawned);
        self.pipes = kept;

        if bird_box.top < 0.0 {
            crash.get_or_insert(Crash::Ceiling);
        } else if bird_box.bottom > self.config.field_height {
            crash.get_or_insert(Crash::Ground);
        }

        self.crash = crash;
        report.crash = crash;
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    /// Pipes with a gap wide open around the bird's starting height.
    fn open_session(rng: &mut ChaCha8Rng) -> Session {
        let mut session = Session::new(&GameConfig::default(), rng).unwrap();
        for pipe in &mut session.pipes {
            pipe.gap_top = 200.0;
        }
        session
    }

    #[test]
    fn test_new_session_layout() {
        let mut rng = create_test_rng();
        let session = Session::new(&GameConfig::default(), &mut rng).unwrap();
        let xs: Vec<f64> = session.pipes.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![400.0, 600.0, 800.0]);
        assert_eq!(session.score, 0);
        assert!(!session.is_over());
        assert_eq!(session.background, Background::new());
    }

    #[test]
    fn test_new_session_rejects_empty_gap_range() {
        let mut rng = create_test_rng();
        let config = GameConfig {
            pipe_gap: 500.0,
            ..Default::default()
        };
        assert!(matches!(
            Session::new(&config, &mut rng),
            Err(ConfigError::EmptyGapRange { .. })
        ));
    }

    #[test]
    fn test_new_session_rejects_unrunnable_config() {
        let mut rng = create_test_rng();
        let infinite = GameConfig {
            field_height: f64::INFINITY,
            ..Default::default()
        };
        assert!(Session::new(&infinite, &mut rng).is_err());

        let negative_min = GameConfig {
            pipe_min_height: -150.0,
            ..Default::default()
        };
        assert!(matches!(
            Session::new(&negative_min, &mut rng),
            Err(ConfigError::InvalidValue {
                name: "pipe_min_height",
                ..
            })
        ));
    }

    #[test]
    fn test_new_session_gaps_are_whole_pixels() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let session = Session::new(&GameConfig::default(), &mut rng).unwrap();
        for pipe in &session.pipes {
            assert_eq!(pipe.gap_top.fract(), 0.0);
            assert!((50.0..=350.0).contains(&pipe.gap_top));
        }
    }

    #[test]
    fn test_tick_order_background_bird_pipes() {
        let mut rng = create_test_rng();
        let mut session = open_session(&mut rng);
        let report = session.tick(false, &mut rng);
        assert_eq!(report, TickReport::default());
        assert_eq!(session.background.far_x, -2.0);
        assert_eq!(session.bird.y, 300.5);
        assert_eq!(session.pipes[0].x, 395.0);
        assert_eq!(session.tick_count, 1);
    }

    #[test]
    fn test_flap_applies_before_physics() {
        let mut rng = create_test_rng();
        let mut session = open_session(&mut rng);
        session.tick(true, &mut rng);
        assert_eq!(session.bird.velocity, -9.5);
        assert_eq!(session.bird.y, 290.5);
    }

    #[test]
    fn test_ceiling_ends_session() {
        let mut rng = create_test_rng();
        let mut session = open_session(&mut rng);
        // After gravity the box top is at y - 15 + 0.5; start high enough
        session.bird.y = 14.0;
        let report = session.tick(false, &mut rng);
        assert_eq!(report.crash, Some(Crash::Ceiling));
        assert!(session.is_over());
    }

    #[test]
    fn test_bird_above_field_over_pipe_is_a_ceiling_crash() {
        let mut rng = create_test_rng();
        let mut session = open_session(&mut rng);
        session.pipes[0].x = 40.0;
        session.bird.y = -20.0;
        let report = session.tick(false, &mut rng);
        // Ends on the same tick; only the reported cause differs from a pipe hit
        assert_eq!(report.crash, Some(Crash::Ceiling));
        assert!(session.is_over());
    }

    #[test]
    fn test_ground_ends_session() {
        let mut rng = create_test_rng();
        let mut session = open_session(&mut rng);
        session.bird.y = 590.0;
        let report = session.tick(false, &mut rng);
        assert_eq!(report.crash, Some(Crash::Ground));
    }

    #[test]
    fn test_pipe_collision_ends_session() {
        let mut rng = create_test_rng();
        let mut session = open_session(&mut rng);
        session.pipes[0].x = 45.0;
        session.pipes[0].gap_top = 450.0;
        let report = session.tick(false, &mut rng);
        assert_eq!(report.crash, Some(Crash::Pipe));
    }

    #[test]
    fn test_no_ticks_after_crash() {
        let mut rng = create_test_rng();
        let mut session = open_session(&mut rng);
        session.bird.y = 590.0;
        session.tick(false, &mut rng);
        let frozen = session.bird.clone();
        let report = session.tick(true, &mut rng);
        assert_eq!(report, TickReport::default());
        assert_eq!(session.bird, frozen);
        assert_eq!(session.tick_count, 1);
    }

    #[test]
    fn test_recycle_spawns_at_field_edge() {
        let mut rng = create_test_rng();
        let mut session = open_session(&mut rng);
        session.pipes[0].x = -50.0;
        session.pipes[1].x = 150.0;
        session.pipes[2].x = 350.0;

        let report = session.tick(false, &mut rng);
        assert_eq!(report.recycled, 1);
        assert_eq!(session.score, 1);
        assert_eq!(session.pipes.len(), 3);
        let xs: Vec<f64> = session.pipes.iter().map(|p| p.x).collect();
        // Survivors moved once, the replacement was not advanced
        assert_eq!(xs, vec![145.0, 345.0, 600.0]);
    }

    #[test]
    fn test_two_recycles_in_one_tick() {
        let mut rng = create_test_rng();
        let mut session = open_session(&mut rng);
        session.pipes[0].x = -50.0;
        session.pipes[1].x = -49.0;
        session.pipes[2].x = 300.0;

        let report = session.tick(false, &mut rng);
        assert_eq!(report.recycled, 2);
        assert_eq!(session.score, 2);
        let xs: Vec<f64> = session.pipes.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![295.0, 600.0, 600.0]);
    }
}

//! Session lifecycle: playing, game over, restart.

use super::session::{Session, TickReport};
use crate::config::{ConfigError, GameConfig};
use rand::Rng;

/// Logical input events, already edge-triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    Flap,
    Restart,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

/// Whether the frame loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Owns the current session and the best score for this process.
#[derive(Debug, Clone)]
pub struct Game {
    pub config: GameConfig,
    pub session: Session,
    pub phase: Phase,
    /// Highest score of any finished session. Only changes when a session ends.
    pub best_score: u32,
    /// Sessions started so far, including the current one.
    pub sessions_played: u32,
}

impl Game {
    /// Validate the config and start the first session.
    pub fn new<R: Rng>(config: GameConfig, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;
        let session = Session::new(&config, rng)?;
        log::info!("Session 1 started");
        Ok(Self {
            config,
            session,
            phase: Phase::Playing,
            best_score: 0,
            sessions_played: 1,
        })
    }

    /// Process one frame: consume the inputs gathered since the last frame,
    /// then advance the simulation if a session is in progress.
    pub fn step<R: Rng>(&mut self, inputs: &[GameInput], rng: &mut R) -> Control {
        let mut flap = false;
        let mut restart = false;
        for input in inputs {
            match input {
                GameInput::Quit => {
                    log::info!(
                        "Quit after {} session(s), best score {}",
                        self.sessions_played,
                        self.best_score
                    );
                    return Control::Quit;
                }
                GameInput::Flap => flap = true,
                GameInput::Restart => restart = true,
            }
        }

        match self.phase {
            Phase::Playing => {
                let report = self.session.tick(flap, rng);
                self.finish_if_crashed(report);
            }
            Phase::GameOver => {
                if restart {
                    self.restart(rng);
                }
            }
        }
        Control::Continue
    }

    /// Throw the finished session away and start a new one.
    pub fn restart<R: Rng>(&mut self, rng: &mut R) {
        match Session::new(&self.config, rng) {
            Ok(session) => {
                self.session = session;
                self.phase = Phase::Playing;
                self.sessions_played += 1;
                log::info!("Session {} started", self.sessions_played);
            }
            // Unreachable with a config that passed `Game::new`
            Err(e) => log::error!("Could not start a new session: {e}"),
        }
    }

    fn finish_if_crashed(&mut self, report: TickReport) {
        let Some(crash) = report.crash else {
            return;
        };
        self.best_score = self.best_score.max(self.session.score);
        self.phase = Phase::GameOver;
        log::info!(
            "Session {} over: {} (score {}, best {})",
            self.sessions_played,
            crash.describe(),
            self.session.score,
            self.best_score
        );
    }
}

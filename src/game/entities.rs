//! The bird, the pipes and the scrolling background.
//!
//! Entities are plain data with per-tick update rules. They know nothing
//! about drawing; see [`crate::render`] for that.

use super::geometry::{Aabb, Point};
use crate::config::GameConfig;
use crate::constants::{TILT_DOWN_STEP, TILT_MAX, TILT_MIN, TILT_UP_STEP};
use rand::Rng;
use std::ops::RangeInclusive;

/// The player-controlled bird.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    /// Horizontal centre. Fixed for the whole session.
    pub x: f64,
    /// Vertical centre.
    pub y: f64,
    /// Vertical velocity in pixels/tick (positive = downward).
    pub velocity: f64,
    /// Tilt in degrees, negative = nose up. Always within [TILT_MIN, TILT_MAX].
    pub angle: f64,
    pub width: f64,
    pub height: f64,
}

impl Bird {
    /// A resting bird at the configured column, halfway down the field.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.bird_x,
            y: (config.field_height / 2.0).floor(),
            velocity: 0.0,
            angle: 0.0,
            width: config.bird_width,
            height: config.bird_height,
        }
    }

    /// Set the velocity to the flap impulse. Repeated flaps do not stack.
    pub fn flap(&mut self, flap_velocity: f64) {
        self.velocity = flap_velocity;
    }

    /// Apply gravity, move, then tilt toward the direction of travel.
    pub fn update(&mut self, gravity: f64) {
        self.velocity += gravity;
        self.y += self.velocity;

        if self.velocity < 0.0 {
            self.angle = (self.angle - TILT_UP_STEP).max(TILT_MIN);
        } else {
            self.angle = (self.angle + TILT_DOWN_STEP).min(TILT_MAX);
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::centered(self.center(), self.width, self.height)
    }
}

/// A pipe pair with a gap the bird must fly through.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Left edge.
    pub x: f64,
    /// Bottom of the top pipe, i.e. where the gap starts.
    pub gap_top: f64,
}

impl Pipe {
    /// Spawn a pipe at `x` with its gap top a whole pixel drawn uniformly
    /// from `gap_range`.
    pub fn new<R: Rng>(x: f64, gap_range: &RangeInclusive<i64>, rng: &mut R) -> Self {
        Self {
            x,
            gap_top: rng.gen_range(gap_range.clone()) as f64,
        }
    }

    /// Scroll left by one tick.
    pub fn update(&mut self, speed: f64) {
        self.x -= speed;
    }

    /// True once the right edge has passed the left side of the field.
    pub fn is_off_screen(&self, width: f64) -> bool {
        self.x + width < 0.0
    }

    /// Solid region from the top of the field down to the gap.
    pub fn top_region(&self, config: &GameConfig) -> Aabb {
        Aabb::new(self.x, 0.0, self.x + config.pipe_width, self.gap_top)
    }

    /// Solid region from the bottom of the gap down to the floor.
    pub fn bottom_region(&self, config: &GameConfig) -> Aabb {
        Aabb::new(
            self.x,
            self.gap_top + config.pipe_gap,
            self.x + config.pipe_width,
            config.field_height,
        )
    }

    /// Whether `other` touches either solid region.
    ///
    /// The regions stop at the field edges, so a box entirely above or
    /// below the field never hits a pipe; the session reports that as a
    /// ceiling or ground crash on the same tick instead.
    pub fn collides_with(&self, other: &Aabb, config: &GameConfig) -> bool {
        other.overlaps(&self.top_region(config)) || other.overlaps(&self.bottom_region(config))
    }
}

/// Two-layer parallax background.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Background {
    /// Offset of the far (sky) layer.
    pub far_x: f64,
    /// Offset of the near (ground) layer.
    pub near_x: f64,
}

impl Background {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll both layers. The near layer moves at twice the far speed and
    /// each wraps back to 0 once it has moved a full field width.
    pub fn update(&mut self, speed: f64, field_width: f64) {
        self.far_x -= speed;
        self.near_x -= speed * 2.0;

        if self.far_x <= -field_width {
            self.far_x = 0.0;
        }
        if self.near_x <= -field_width {
            self.near_x = 0.0;
        }
    }
}

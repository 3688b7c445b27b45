// Timing constants
pub const TICKS_PER_SECOND: u32 = 60;
pub const MAX_TICKS_PER_SECOND: u32 = 240;

// Playfield constants (pixels)
pub const FIELD_WIDTH: f64 = 400.0;
pub const FIELD_HEIGHT: f64 = 600.0;

// Bird constants
pub const BIRD_X: f64 = 50.0;
pub const BIRD_WIDTH: f64 = 40.0;
pub const BIRD_HEIGHT: f64 = 30.0;
pub const GRAVITY: f64 = 0.5;
pub const FLAP_VELOCITY: f64 = -10.0;

// Bird tilt (degrees). Nose-up limit is negative.
pub const TILT_MIN: f64 = -30.0;
pub const TILT_MAX: f64 = 56.0;
pub const TILT_UP_STEP: f64 = 5.0;
pub const TILT_DOWN_STEP: f64 = 4.0;

// Pipe constants
pub const PIPE_COUNT: usize = 3;
pub const PIPE_WIDTH: f64 = 52.0;
pub const PIPE_SPRITE_HEIGHT: f64 = 320.0;
pub const PIPE_GAP: f64 = 200.0;
pub const PIPE_MIN_HEIGHT: f64 = 50.0;
pub const PIPE_SPACING: f64 = 200.0;
pub const PIPE_SPEED: f64 = 5.0;

// Background constants
pub const BACKGROUND_SPEED: f64 = 2.0;
pub const NEAR_LAYER_HEIGHT: f64 = 100.0;

// Config file name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "config.json";

//! Color Breaker - a color-matching brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, power-ups, round state)
//! - `view`: Read-only snapshots and status text for a presentation layer
//! - `settings`: Data-driven runner configuration

pub mod settings;
pub mod sim;
pub mod view;

pub use settings::Settings;

/// Game configuration constants
///
/// Field coordinates have their origin at the bottom-left corner with y
/// increasing upward. Velocities are in field units per tick.
pub mod consts {
    /// Nominal tick length handed to `tick` by a presentation loop (~60 Hz)
    pub const TICK_MS: f64 = 16.0;

    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Brick grid layout
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLS: usize = 10;
    pub const BRICK_WIDTH: f32 = 70.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_SPACING: f32 = 15.0;
    pub const BRICK_MARGIN_X: f32 = 35.0;
    /// Each color must cover at least this share of a row
    pub const MIN_COLOR_SHARE: f32 = 0.4;
    pub const BRICK_SCORE: u64 = 10;

    /// Paddle defaults
    pub const PADDLE_Y: f32 = 50.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_WIDTH_NORMAL: f32 = 100.0;
    pub const PADDLE_WIDTH_MAX: f32 = 200.0;
    pub const PADDLE_WIDEN_STEP: f32 = 50.0;
    /// Paddle travel per drift step
    pub const PADDLE_SPEED_NORMAL: f32 = 0.2;
    pub const PADDLE_SPEED_FAST: f32 = 0.5;
    /// Horizontal damping applied on a paddle bounce
    pub const PADDLE_DAMPING: f32 = 0.8;
    /// Full deflection span across the paddle width (-2..+2)
    pub const PADDLE_DEFLECTION: f32 = 4.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_VEL: (f32, f32) = (4.0, 4.0);
    pub const MAX_BALLS: usize = 8;

    /// Power-ups
    pub const POWER_UP_CHANCE: f64 = 0.4;
    pub const POWER_UP_FALL_SPEED: f32 = 3.0;
    pub const POWER_UP_SIZE: f32 = 20.0;
    pub const SPEED_BOOST_FACTOR: f32 = 1.3;
    pub const WIDE_PADDLE_DURATION_MS: f64 = 20_000.0;

    /// Per-channel tolerance for color matching (0-1 scale)
    pub const COLOR_EPSILON: f32 = 0.01;
}

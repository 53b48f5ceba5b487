//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick velocities, elapsed time only drives timed effects
//! - Seeded RNG only, owned by `GameState`
//! - Stable iteration order (storage order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod color;
pub mod grid;
pub mod input;
pub mod powerup;
pub mod state;
pub mod tick;

pub use collision::{Rect, circle_rect_overlap};
pub use color::{BallColor, Rgb, colors_approx_equal};
pub use grid::generate_bricks;
pub use input::{InputState, Key, drift_paddle};
pub use state::{ActiveEffects, Ball, Brick, GameState, Paddle, PowerUp, PowerUpKind};
pub use tick::tick;

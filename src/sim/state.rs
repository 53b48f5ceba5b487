//! Game state and core simulation types
//!
//! Everything a round owns lives in `GameState`; the presentation layer only
//! ever reads it between ticks.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::color::BallColor;
use super::grid::generate_bricks;
use super::input::{InputState, Key, drift_paddle};
use crate::consts::*;

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub radius: f32,
    pub color: BallColor,
    /// False once the ball has left through the exit edge
    pub active: bool,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, color: BallColor) -> Self {
        Self {
            pos,
            vel,
            radius: BALL_RADIUS,
            color,
            active: true,
        }
    }

    /// Clone travelling the mirrored trajectory (horizontal velocity negated)
    pub fn mirrored(&self) -> Self {
        Self {
            vel: Vec2::new(-self.vel.x, self.vel.y),
            ..self.clone()
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Bottom edge (fixed)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: (FIELD_WIDTH - PADDLE_WIDTH_NORMAL) / 2.0,
            y: PADDLE_Y,
            width: PADDLE_WIDTH_NORMAL,
            height: PADDLE_HEIGHT,
        }
    }
}

impl Paddle {
    pub fn rect(&self) -> Rect {
        Rect::new(Vec2::new(self.x, self.y), Vec2::new(self.width, self.height))
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn is_widened(&self) -> bool {
        self.width > PADDLE_WIDTH_NORMAL
    }
}

/// A brick entity; bricks are never moved or removed during a round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    /// Bottom-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub color: BallColor,
    pub visible: bool,
    /// Destroying this brick may drop a power-up
    pub drops_power_up: bool,
}

impl Brick {
    pub fn new(pos: Vec2, color: BallColor) -> Self {
        Self {
            pos,
            size: Vec2::new(BRICK_WIDTH, BRICK_HEIGHT),
            color,
            visible: true,
            drops_power_up: true,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    SpeedBoost,
    MultiBall,
    WidePaddle,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [
        PowerUpKind::SpeedBoost,
        PowerUpKind::MultiBall,
        PowerUpKind::WidePaddle,
    ];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// A falling power-up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    /// Center
    pub pos: Vec2,
    pub kind: PowerUpKind,
    /// Distance fallen per tick
    pub fall_speed: f32,
    pub size: f32,
    pub active: bool,
}

impl PowerUp {
    pub fn new(pos: Vec2, kind: PowerUpKind) -> Self {
        Self {
            pos,
            kind,
            fall_speed: POWER_UP_FALL_SPEED,
            size: POWER_UP_SIZE,
            active: true,
        }
    }
}

/// Timed power-up effects
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActiveEffects {
    /// Clock reading when the paddle was last widened
    pub widen_started_ms: Option<f64>,
}

/// Complete round state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub(crate) rng: Pcg32,
    /// Elapsed time fed in through `tick`
    pub clock_ms: f64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub score: u64,
    pub game_over: bool,
    /// Implies `game_over`
    pub game_won: bool,
    pub paddle: Paddle,
    /// Bounded by `MAX_BALLS`; inactive balls keep their slot
    pub balls: Vec<Ball>,
    /// Row-major grid, first row nearest the far wall
    pub bricks: Vec<Brick>,
    pub power_ups: Vec<PowerUp>,
    pub effects: ActiveEffects,
    /// Held movement keys
    pub input: InputState,
}

impl GameState {
    /// Create a new game state with the given seed and start a round
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            clock_ms: 0.0,
            time_ticks: 0,
            score: 0,
            game_over: false,
            game_won: false,
            paddle: Paddle::default(),
            balls: Vec::with_capacity(MAX_BALLS),
            bricks: Vec::new(),
            power_ups: Vec::new(),
            effects: ActiveEffects::default(),
            input: InputState::default(),
        };
        state.reset();
        state
    }

    /// Start a fresh round: one ball, full grid, default paddle, zero score.
    ///
    /// The clock and held keys carry over.
    pub fn reset(&mut self) {
        self.balls.clear();
        self.power_ups.clear();

        let color = BallColor::random(&mut self.rng);
        self.balls.push(Ball::new(
            Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0),
            Vec2::new(BALL_START_VEL.0, BALL_START_VEL.1),
            color,
        ));

        self.bricks = generate_bricks(&mut self.rng);
        self.paddle = Paddle::default();
        self.effects = ActiveEffects::default();
        self.score = 0;
        self.game_over = false;
        self.game_won = false;

        log::info!(
            "Round started: {} bricks, ball color {:?}",
            self.bricks.len(),
            color
        );
    }

    /// Feed a key edge from the presentation layer.
    ///
    /// Returns true when the key restarted the round, which only happens on
    /// a restart press while the round is over.
    pub fn handle_key(&mut self, key: Key, pressed: bool) -> bool {
        if key == Key::Restart {
            if pressed && self.game_over {
                self.reset();
                return true;
            }
            return false;
        }
        self.input.set(key, pressed);
        false
    }

    /// One idle-cycle paddle adjustment from the held keys
    pub fn drift_paddle(&mut self) {
        drift_paddle(&mut self.paddle, &self.input, FIELD_WIDTH);
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    pub fn is_won(&self) -> bool {
        self.game_won
    }

    pub fn active_balls(&self) -> impl Iterator<Item = &Ball> {
        self.balls.iter().filter(|b| b.active)
    }

    pub fn visible_bricks(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| b.visible)
    }

    pub fn active_power_ups(&self) -> impl Iterator<Item = &PowerUp> {
        self.power_ups.iter().filter(|p| p.active)
    }

    pub fn active_ball_count(&self) -> usize {
        self.active_balls().count()
    }

    pub fn visible_brick_count(&self) -> usize {
        self.visible_bricks().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_round_layout() {
        let state = GameState::new(12345);

        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.active_ball_count(), 1);
        assert_eq!(state.balls[0].pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.balls[0].vel, Vec2::new(4.0, 4.0));
        assert_eq!(state.bricks.len(), BRICK_ROWS * BRICK_COLS);
        assert_eq!(state.visible_brick_count(), BRICK_ROWS * BRICK_COLS);
        assert!(state.bricks.iter().all(|b| b.drops_power_up));
        assert!(state.power_ups.is_empty());
        assert_eq!(state.score(), 0);
        assert!(!state.is_over());
        assert!(!state.is_won());
        assert_eq!(state.paddle.width, PADDLE_WIDTH_NORMAL);
        assert_eq!(state.paddle.center_x(), FIELD_WIDTH / 2.0);
    }

    #[test]
    fn test_reset_restores_round() {
        let mut state = GameState::new(4);
        state.score = 230;
        state.game_over = true;
        state.game_won = true;
        state.paddle.width = PADDLE_WIDTH_MAX;
        state.paddle.x = 0.0;
        state.effects.widen_started_ms = Some(10.0);
        state.bricks[3].visible = false;
        state.balls.push(state.balls[0].mirrored());
        state.power_ups.push(PowerUp::new(Vec2::new(10.0, 10.0), PowerUpKind::MultiBall));

        state.reset();

        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.visible_brick_count(), BRICK_ROWS * BRICK_COLS);
        assert!(state.power_ups.is_empty());
        assert_eq!(state.score, 0);
        assert!(!state.game_over && !state.game_won);
        assert_eq!(state.paddle.width, PADDLE_WIDTH_NORMAL);
        assert_eq!(state.paddle.center_x(), FIELD_WIDTH / 2.0);
        assert!(state.effects.widen_started_ms.is_none());
    }

    #[test]
    fn test_restart_only_when_over() {
        let mut state = GameState::new(9);
        state.score = 50;
        assert!(!state.handle_key(Key::Restart, true));
        assert_eq!(state.score, 50);

        state.game_over = true;
        assert!(!state.handle_key(Key::Restart, false));
        assert!(state.handle_key(Key::Restart, true));
        assert_eq!(state.score, 0);
        assert!(!state.game_over);
    }

    #[test]
    fn test_mirrored_ball() {
        let ball = Ball::new(Vec2::new(1.0, 2.0), Vec2::new(3.0, -4.0), BallColor::Green);
        let clone = ball.mirrored();
        assert_eq!(clone.vel, Vec2::new(-3.0, -4.0));
        assert_eq!(clone.pos, ball.pos);
        assert_eq!(clone.color, BallColor::Green);
        assert!(clone.active);
    }

    #[test]
    fn test_same_seed_same_grid() {
        let a = GameState::new(77);
        let b = GameState::new(77);
        let colors_a: Vec<_> = a.bricks.iter().map(|b| b.color).collect();
        let colors_b: Vec<_> = b.bricks.iter().map(|b| b.color).collect();
        assert_eq!(colors_a, colors_b);
        assert_eq!(a.balls[0].color, b.balls[0].color);
    }
}

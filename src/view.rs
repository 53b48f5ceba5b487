//! Read-only render snapshot and status readout
//!
//! A presentation layer draws from a `Frame` captured between ticks and maps
//! power-up kinds to its own colors; nothing here touches the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{GameState, PowerUpKind, Rgb};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaddleView {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickView {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Rgb,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BallView {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Rgb,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUpView {
    pub pos: Vec2,
    pub size: f32,
    pub kind: PowerUpKind,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    pub paddle: PaddleView,
    pub bricks: Vec<BrickView>,
    pub balls: Vec<BallView>,
    pub power_ups: Vec<PowerUpView>,
    pub score: u64,
    pub game_over: bool,
    pub game_won: bool,
}

impl Frame {
    pub fn capture(state: &GameState) -> Self {
        Self {
            paddle: PaddleView {
                pos: Vec2::new(state.paddle.x, state.paddle.y),
                width: state.paddle.width,
                height: state.paddle.height,
            },
            bricks: state
                .visible_bricks()
                .map(|b| BrickView {
                    pos: b.pos,
                    size: b.size,
                    color: b.color.rgb(),
                })
                .collect(),
            balls: state
                .active_balls()
                .map(|b| BallView {
                    pos: b.pos,
                    radius: b.radius,
                    color: b.color.rgb(),
                })
                .collect(),
            power_ups: state
                .active_power_ups()
                .map(|p| PowerUpView {
                    pos: p.pos,
                    size: p.size,
                    kind: p.kind,
                })
                .collect(),
            score: state.score(),
            game_over: state.is_over(),
            game_won: state.is_won(),
        }
    }
}

/// Display color for a falling power-up
pub fn power_up_color(kind: PowerUpKind) -> Rgb {
    match kind {
        PowerUpKind::SpeedBoost => Rgb::new(1.0, 0.0, 0.0),
        PowerUpKind::MultiBall => Rgb::new(0.0, 1.0, 0.0),
        PowerUpKind::WidePaddle => Rgb::new(0.0, 0.0, 1.0),
    }
}

/// Score line plus any end-of-round messages
pub fn status_lines(state: &GameState) -> Vec<String> {
    let mut lines = vec![format!("Score: {}", state.score())];
    if state.is_over() {
        lines.push("Game Over! Press R to restart.".to_string());
    }
    if state.is_won() {
        lines.push("Congratulations! You Win!".to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_capture_fresh_round() {
        let state = GameState::new(12345);
        let frame = Frame::capture(&state);

        assert_eq!(frame.bricks.len(), BRICK_ROWS * BRICK_COLS);
        assert_eq!(frame.balls.len(), 1);
        assert_eq!(frame.balls[0].radius, BALL_RADIUS);
        assert!(frame.power_ups.is_empty());
        assert_eq!(frame.paddle.width, PADDLE_WIDTH_NORMAL);
        assert_eq!(frame.paddle.pos, Vec2::new(350.0, PADDLE_Y));
        assert_eq!(frame.score, 0);
        assert!(!frame.game_over && !frame.game_won);
    }

    #[test]
    fn test_capture_skips_hidden_and_inactive() {
        let mut state = GameState::new(1);
        state.bricks[0].visible = false;
        state.bricks[7].visible = false;
        let mut gone = state.balls[0].mirrored();
        gone.active = false;
        state.balls.push(gone);

        let frame = Frame::capture(&state);
        assert_eq!(frame.bricks.len(), BRICK_ROWS * BRICK_COLS - 2);
        assert_eq!(frame.balls.len(), 1);
    }

    #[test]
    fn test_frame_serializes() {
        let state = GameState::new(8);
        let json = serde_json::to_string(&Frame::capture(&state)).unwrap();
        assert!(json.contains("\"score\":0"));
        let back: Frame = serde_json::from_str(&json).unwrap();
        assert_eq!(back.bricks.len(), BRICK_ROWS * BRICK_COLS);
    }

    #[test]
    fn test_power_up_colors_are_distinct() {
        let colors: Vec<_> = PowerUpKind::ALL.iter().map(|k| power_up_color(*k)).collect();
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }

    #[test]
    fn test_status_lines() {
        let mut state = GameState::new(8);
        state.score = 40;
        assert_eq!(status_lines(&state), vec!["Score: 40".to_string()]);

        state.game_over = true;
        state.game_won = true;
        let lines = status_lines(&state);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "Game Over! Press R to restart.");
        assert_eq!(lines[2], "Congratulations! You Win!");
    }
}

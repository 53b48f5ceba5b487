//! Input intents and the continuous paddle drift step
//!
//! Key edges only flip flags here; the paddle moves when the presentation
//! layer calls `drift_paddle` on its idle cycle.

use serde::{Deserialize, Serialize};

use super::state::Paddle;
use crate::consts::{PADDLE_SPEED_FAST, PADDLE_SPEED_NORMAL};

/// Keys the core understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// `a`
    FastLeft,
    /// `d`
    FastRight,
    /// `r`, honored only while the round is over
    Restart,
}

impl Key {
    /// Map a character key; arrows come through the adapter's own key codes
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a' => Some(Key::FastLeft),
            'd' => Some(Key::FastRight),
            'r' => Some(Key::Restart),
            _ => None,
        }
    }
}

/// Held movement keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub move_left: bool,
    pub move_right: bool,
    pub fast_left: bool,
    pub fast_right: bool,
}

impl InputState {
    /// Apply a key edge. `Restart` is not a held key and is ignored here.
    pub fn set(&mut self, key: Key, pressed: bool) {
        match key {
            Key::Left => self.move_left = pressed,
            Key::Right => self.move_right = pressed,
            Key::FastLeft => self.fast_left = pressed,
            Key::FastRight => self.fast_right = pressed,
            Key::Restart => {}
        }
    }

    pub fn release_all(&mut self) {
        *self = Self::default();
    }
}

/// Move the paddle one drift step and keep it inside the field.
///
/// A held fast key overrides the normal key on the same side; opposite
/// sides cancel out.
pub fn drift_paddle(paddle: &mut Paddle, input: &InputState, field_width: f32) {
    if input.fast_left {
        paddle.x -= PADDLE_SPEED_FAST;
    }
    if input.fast_right {
        paddle.x += PADDLE_SPEED_FAST;
    }
    if input.move_left && !input.fast_left {
        paddle.x -= PADDLE_SPEED_NORMAL;
    }
    if input.move_right && !input.fast_right {
        paddle.x += PADDLE_SPEED_NORMAL;
    }

    if paddle.x < 0.0 {
        paddle.x = 0.0;
    }
    if paddle.x + paddle.width > field_width {
        paddle.x = field_width - paddle.width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FIELD_WIDTH;

    #[test]
    fn test_key_edges() {
        let mut input = InputState::default();
        input.set(Key::Left, true);
        input.set(Key::FastRight, true);
        assert!(input.move_left && input.fast_right);
        input.set(Key::Left, false);
        input.set(Key::Restart, true);
        assert_eq!(
            input,
            InputState {
                fast_right: true,
                ..Default::default()
            }
        );
        input.release_all();
        assert_eq!(input, InputState::default());
    }

    #[test]
    fn test_char_mapping() {
        assert_eq!(Key::from_char('a'), Some(Key::FastLeft));
        assert_eq!(Key::from_char('d'), Some(Key::FastRight));
        assert_eq!(Key::from_char('r'), Some(Key::Restart));
        assert_eq!(Key::from_char('x'), None);
    }

    #[test]
    fn test_fast_overrides_normal() {
        let mut paddle = Paddle::default();
        let start = paddle.x;
        let input = InputState {
            move_left: true,
            fast_left: true,
            ..Default::default()
        };
        drift_paddle(&mut paddle, &input, FIELD_WIDTH);
        assert!((paddle.x - (start - PADDLE_SPEED_FAST)).abs() < 1e-5);

        let input = InputState {
            move_right: true,
            ..Default::default()
        };
        drift_paddle(&mut paddle, &input, FIELD_WIDTH);
        assert!((paddle.x - (start - PADDLE_SPEED_FAST + PADDLE_SPEED_NORMAL)).abs() < 1e-5);
    }

    #[test]
    fn test_drift_clamps_to_field() {
        let mut paddle = Paddle::default();
        paddle.x = 0.1;
        let left = InputState {
            fast_left: true,
            ..Default::default()
        };
        drift_paddle(&mut paddle, &left, FIELD_WIDTH);
        assert_eq!(paddle.x, 0.0);

        paddle.width = 200.0;
        paddle.x = 650.0;
        drift_paddle(&mut paddle, &InputState::default(), FIELD_WIDTH);
        assert_eq!(paddle.x, 600.0);
    }
}

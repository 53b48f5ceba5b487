//! Power-up spawning, falling, pickup and effects

use glam::Vec2;
use rand::Rng;

use super::state::{ActiveEffects, Ball, GameState, Paddle, PowerUp, PowerUpKind};
use crate::consts::*;

/// Roll the drop chance for a destroyed brick and spawn at `at` on success
pub fn maybe_spawn<R: Rng + ?Sized>(rng: &mut R, power_ups: &mut Vec<PowerUp>, at: Vec2) -> bool {
    if !rng.random_bool(POWER_UP_CHANCE) {
        return false;
    }
    let kind = PowerUpKind::random(rng);
    power_ups.push(PowerUp::new(at, kind));
    true
}

/// Whether a power-up center is inside the paddle's pickup zone
pub fn touches_paddle(power_up: &PowerUp, paddle: &Paddle) -> bool {
    let p = power_up.pos;
    let s = power_up.size;
    p.y <= paddle.y + paddle.height
        && p.y >= paddle.y - s
        && p.x >= paddle.x - s
        && p.x <= paddle.x + paddle.width + s
}

/// Drop every power-up one step, apply those caught, then purge inactive ones
pub fn update_power_ups(state: &mut GameState) {
    for i in 0..state.power_ups.len() {
        if !state.power_ups[i].active {
            continue;
        }

        let power_up = &mut state.power_ups[i];
        power_up.pos.y -= power_up.fall_speed;

        if touches_paddle(power_up, &state.paddle) {
            power_up.active = false;
            let kind = power_up.kind;
            apply_power_up(state, kind);
        } else if power_up.pos.y < 0.0 {
            power_up.active = false;
        }
    }

    state.power_ups.retain(|p| p.active);
}

/// Apply a collected power-up
pub fn apply_power_up(state: &mut GameState, kind: PowerUpKind) {
    match kind {
        PowerUpKind::SpeedBoost => {
            boost_speed(&mut state.balls, SPEED_BOOST_FACTOR);
            log::debug!("Speed boost collected");
        }
        PowerUpKind::MultiBall => {
            let added = split_balls(&mut state.balls, MAX_BALLS);
            log::debug!("Multi-ball collected: {} new balls", added);
        }
        PowerUpKind::WidePaddle => {
            widen_paddle(&mut state.paddle, &mut state.effects, state.clock_ms);
            log::debug!("Wide paddle collected: width {}", state.paddle.width);
        }
    }
}

/// Scale every active ball's speed, keeping its direction
pub fn boost_speed(balls: &mut [Ball], factor: f32) {
    for ball in balls.iter_mut().filter(|b| b.active) {
        let speed = ball.vel.length();
        if speed <= f32::EPSILON {
            continue;
        }
        ball.vel = ball.vel / speed * (speed * factor);
    }
}

/// Give every active ball a mirrored twin.
///
/// Only happens if doubling the active count stays within `cap`. Inactive
/// slots are reused before the collection grows, so it never holds more than
/// `cap` balls. Returns the number of balls added.
pub fn split_balls(balls: &mut Vec<Ball>, cap: usize) -> usize {
    let active = balls.iter().filter(|b| b.active).count();
    if active == 0 || active * 2 > cap {
        return 0;
    }

    let twins: Vec<Ball> = balls.iter().filter(|b| b.active).map(Ball::mirrored).collect();
    let mut added = 0;
    for twin in twins {
        if let Some(slot) = balls.iter_mut().find(|b| !b.active) {
            *slot = twin;
        } else if balls.len() < cap {
            balls.push(twin);
        } else {
            break;
        }
        added += 1;
    }
    added
}

/// Widen the paddle up to the maximum and restart the countdown
pub fn widen_paddle(paddle: &mut Paddle, effects: &mut ActiveEffects, now_ms: f64) {
    paddle.width = (paddle.width + PADDLE_WIDEN_STEP).min(PADDLE_WIDTH_MAX);
    effects.widen_started_ms = Some(now_ms);
}

/// Revert the paddle once the widen countdown has run out
pub fn expire_widen(paddle: &mut Paddle, effects: &mut ActiveEffects, now_ms: f64) {
    if let Some(started) = effects.widen_started_ms {
        if now_ms - started >= WIDE_PADDLE_DURATION_MS {
            paddle.width = PADDLE_WIDTH_NORMAL;
            effects.widen_started_ms = None;
            log::debug!("Wide paddle expired");
        }
    }
}

//! Fixed-step simulation tick
//!
//! Core game loop that advances the round deterministically.

use glam::Vec2;

use super::collision::{circle_rect_overlap, crossed_exit, paddle_deflect, resolve_brick_hit, resolve_walls};
use super::color::BallColor;
use super::powerup;
use super::state::GameState;
use crate::consts::*;

/// Advance the round by one tick; `dt_ms` is the elapsed time since the
/// previous call and only drives timed effects
pub fn tick(state: &mut GameState, dt_ms: f64) {
    state.clock_ms += dt_ms;

    if state.game_over {
        state.paddle.width = PADDLE_WIDTH_NORMAL;
        state.effects.widen_started_ms = None;
        return;
    }

    state.time_ticks += 1;
    powerup::expire_widen(&mut state.paddle, &mut state.effects, state.clock_ms);

    let brick_broken = step_balls(state);

    if brick_broken {
        for ball in state.balls.iter_mut().filter(|b| b.active) {
            ball.color = BallColor::random(&mut state.rng);
        }
    }

    if state.game_won {
        log::info!("Round won with score {}", state.score);
        return;
    }

    powerup::update_power_ups(state);

    if !state.balls.iter().any(|b| b.active) {
        state.game_over = true;
        log::info!("Round lost with score {}", state.score);
    }
}

/// Move and collide every active ball in storage order.
///
/// Returns true if any brick was destroyed. Clearing the last brick ends the
/// round immediately; later balls are not moved.
fn step_balls(state: &mut GameState) -> bool {
    let field = Vec2::new(FIELD_WIDTH, FIELD_HEIGHT);
    let paddle = state.paddle.rect();
    let mut brick_broken = false;

    for ball in state.balls.iter_mut() {
        if !ball.active {
            continue;
        }

        let prev = ball.pos;
        ball.pos += ball.vel;

        resolve_walls(&mut ball.pos, &mut ball.vel, ball.radius, field);

        if crossed_exit(ball.pos) {
            ball.active = false;
            continue;
        }

        if let Some(vel) = paddle_deflect(ball.pos, ball.vel, &paddle) {
            ball.vel = vel;
        }

        // First visible brick in storage order wins
        let Some(idx) = state
            .bricks
            .iter()
            .position(|b| b.visible && circle_rect_overlap(ball.pos, ball.radius, &b.rect()))
        else {
            continue;
        };

        let brick = &mut state.bricks[idx];
        let rect = brick.rect();
        resolve_brick_hit(prev, &mut ball.pos, &mut ball.vel, ball.radius, &rect);

        if !ball.color.matches(brick.color) {
            continue;
        }

        brick.visible = false;
        state.score += BRICK_SCORE;
        brick_broken = true;
        if brick.drops_power_up {
            powerup::maybe_spawn(&mut state.rng, &mut state.power_ups, rect.center());
        }

        if state.bricks.iter().all(|b| !b.visible) {
            state.game_won = true;
            state.game_over = true;
            break;
        }
    }

    brick_broken
}

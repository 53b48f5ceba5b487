//! Color Breaker entry point
//!
//! Headless native runner: plays seeded rounds with an autopilot paddle and
//! logs the status readout. A windowed front end drives the same calls.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use color_breaker::Settings;
use color_breaker::sim::{GameState, Key, tick};
use color_breaker::view::{Frame, status_lines};

/// Environment variable naming a JSON settings file
const SETTINGS_ENV: &str = "COLOR_BREAKER_SETTINGS";

/// Steer toward the lowest ball that is heading for the exit edge
fn autopilot(state: &mut GameState) {
    let target = state
        .active_balls()
        .filter(|b| b.vel.y < 0.0)
        .min_by(|a, b| a.pos.y.partial_cmp(&b.pos.y).unwrap_or(std::cmp::Ordering::Equal))
        .or_else(|| state.active_balls().next())
        .map(|b| b.pos.x);

    let Some(target_x) = target else {
        state.input.release_all();
        return;
    };

    let offset = target_x - state.paddle.center_x();
    let far = offset.abs() > state.paddle.width / 4.0;
    let near = offset.abs() > 4.0;

    state.handle_key(Key::FastLeft, far && offset < 0.0);
    state.handle_key(Key::FastRight, far && offset > 0.0);
    state.handle_key(Key::Left, near && !far && offset < 0.0);
    state.handle_key(Key::Right, near && !far && offset > 0.0);
}

fn main() {
    env_logger::init();
    log::info!("Color Breaker (headless) starting...");

    let settings = match std::env::var_os(SETTINGS_ENV) {
        Some(path) => Settings::load(&PathBuf::from(path)),
        None => Settings::default(),
    };

    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    log::info!("Game initialized with seed: {}", seed);

    let mut state = GameState::new(seed);
    let mut rounds_played = 0;

    for t in 0..settings.max_ticks {
        if settings.autopilot {
            autopilot(&mut state);
        }
        for _ in 0..settings.drift_steps_per_tick {
            state.drift_paddle();
        }
        tick(&mut state, settings.tick_ms);

        if state.is_over() {
            rounds_played += 1;
            log::info!("Round {} finished after {} ticks", rounds_played, t + 1);
            for line in status_lines(&state) {
                println!("{line}");
            }
            if rounds_played >= settings.rounds {
                break;
            }
            state.handle_key(Key::Restart, true);
        }
    }

    if !state.is_over() {
        log::info!("Tick limit reached");
        for line in status_lines(&state) {
            println!("{line}");
        }
    }

    if settings.dump_final_frame {
        match serde_json::to_string_pretty(&Frame::capture(&state)) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Could not serialize frame: {}", e),
        }
    }
}

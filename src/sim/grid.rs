//! Brick grid generation
//!
//! Bricks are colored at random, then each row is rebalanced so neither
//! color drops below `MIN_COLOR_SHARE` of the row.

use glam::Vec2;
use rand::Rng;

use super::color::BallColor;
use super::state::Brick;
use crate::consts::*;

/// Build a full grid, rows ordered from the far wall inward
pub fn generate_bricks<R: Rng + ?Sized>(rng: &mut R) -> Vec<Brick> {
    let mut bricks = Vec::with_capacity(BRICK_ROWS * BRICK_COLS);

    for row in 0..BRICK_ROWS {
        let y = FIELD_HEIGHT - (row as f32 + 1.0) * (BRICK_HEIGHT + BRICK_SPACING);
        let mut row_bricks: Vec<Brick> = (0..BRICK_COLS)
            .map(|col| {
                let x = col as f32 * (BRICK_WIDTH + BRICK_SPACING) + BRICK_MARGIN_X;
                Brick::new(Vec2::new(x, y), BallColor::random(rng))
            })
            .collect();

        rebalance_row(&mut row_bricks, rng);
        bricks.extend(row_bricks);
    }

    log::debug!("Generated {} bricks", bricks.len());
    bricks
}

/// Flip randomly picked bricks toward the minority color until both colors
/// reach the minimum share
pub fn rebalance_row<R: Rng + ?Sized>(row: &mut [Brick], rng: &mut R) {
    if row.is_empty() {
        return;
    }
    let min_count = row.len() as f32 * MIN_COLOR_SHARE;
    let mut red = row.iter().filter(|b| b.color == BallColor::Red).count();
    let mut green = row.len() - red;

    while (red as f32) < min_count || (green as f32) < min_count {
        let idx = rng.random_range(0..row.len());
        let brick = &mut row[idx];
        if (red as f32) < min_count && brick.color == BallColor::Green {
            brick.color = BallColor::Red;
            red += 1;
            green -= 1;
        } else if (green as f32) < min_count && brick.color == BallColor::Red {
            brick.color = BallColor::Green;
            green += 1;
            red -= 1;
        }
    }
}

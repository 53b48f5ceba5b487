//! Collision detection and response for axis-aligned geometry
//!
//! Balls are circles, everything else (walls, paddle, bricks) is an
//! axis-aligned rectangle. All functions here are pure so the tick loop can
//! compose them in a fixed order.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{PADDLE_DAMPING, PADDLE_DEFLECTION};

/// Axis-aligned rectangle anchored at its bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn min_x(&self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.x
    }

    #[inline]
    pub fn min_y(&self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    /// Inclusive point containment
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.min_x() && p.x <= self.max_x() && p.y >= self.min_y() && p.y <= self.max_y()
    }
}

/// Check whether a circle's bounding box touches a rectangle (edges inclusive)
#[inline]
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    center.x + radius >= rect.min_x()
        && center.x - radius <= rect.max_x()
        && center.y + radius >= rect.min_y()
        && center.y - radius <= rect.max_y()
}

/// Clamp a ball against the left, right and far walls.
///
/// The velocity component is forced to point away from any wall touched,
/// rather than negated, so a ball already moving away is never flipped back.
/// Returns true if any wall was touched.
pub fn resolve_walls(pos: &mut Vec2, vel: &mut Vec2, radius: f32, field: Vec2) -> bool {
    let mut touched = false;
    if pos.x - radius <= 0.0 {
        pos.x = radius;
        vel.x = vel.x.abs();
        touched = true;
    }
    if pos.x + radius >= field.x {
        pos.x = field.x - radius;
        vel.x = -vel.x.abs();
        touched = true;
    }
    if pos.y + radius >= field.y {
        pos.y = field.y - radius;
        vel.y = -vel.y.abs();
        touched = true;
    }
    touched
}

/// The exit edge has no wall: a ball center at or below it is out of play
#[inline]
pub fn crossed_exit(pos: Vec2) -> bool {
    pos.y <= 0.0
}

/// Paddle bounce for a ball center inside the paddle rectangle.
///
/// Vertical velocity is sent back up the field, horizontal velocity is
/// damped and nudged by where along the paddle the ball landed: the left
/// edge adds -2, the middle nothing, the right edge +2.
pub fn paddle_deflect(pos: Vec2, vel: Vec2, paddle: &Rect) -> Option<Vec2> {
    if !paddle.contains_point(pos) || paddle.size.x <= 0.0 {
        return None;
    }
    let hit = (pos.x - paddle.min_x()) / paddle.size.x;
    Some(Vec2::new(
        vel.x * PADDLE_DAMPING + (hit - 0.5) * PADDLE_DEFLECTION,
        vel.y.abs(),
    ))
}

/// Which faces a brick hit reflected off
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrickHit {
    /// Side face: horizontal velocity inverted
    pub side: bool,
    /// Top/bottom face: vertical velocity inverted
    pub cap: bool,
}

/// Reflect a ball off a brick it now overlaps.
///
/// The face is chosen from the ball's position *before* this tick's move:
/// if its horizontal extent was clear of the brick it came in through a side,
/// if its vertical extent was clear it came through the top or bottom. Both
/// can be true on a corner. The ball is placed just outside each face it
/// crossed.
pub fn resolve_brick_hit(prev: Vec2, pos: &mut Vec2, vel: &mut Vec2, radius: f32, brick: &Rect) -> BrickHit {
    let side = prev.x + radius < brick.min_x() || prev.x - radius > brick.max_x();
    let cap = prev.y + radius < brick.min_y() || prev.y - radius > brick.max_y();

    if side {
        vel.x = -vel.x;
        pos.x = if prev.x < brick.min_x() {
            brick.min_x() - radius
        } else {
            brick.max_x() + radius
        };
    }
    if cap {
        vel.y = -vel.y;
        pos.y = if prev.y < brick.min_y() {
            brick.min_y() - radius
        } else {
            brick.max_y() + radius
        };
    }

    BrickHit { side, cap }
}

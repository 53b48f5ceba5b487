//! Ball/brick palette and approximate color matching

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::COLOR_EPSILON;

/// Linear RGB color, channels in 0..=1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// True when every channel differs by less than `COLOR_EPSILON`
#[inline]
pub fn colors_approx_equal(a: Rgb, b: Rgb) -> bool {
    (a.r - b.r).abs() < COLOR_EPSILON
        && (a.g - b.g).abs() < COLOR_EPSILON
        && (a.b - b.b).abs() < COLOR_EPSILON
}

/// The two colors shared by balls and bricks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BallColor {
    Red,
    Green,
}

impl BallColor {
    pub const ALL: [BallColor; 2] = [BallColor::Red, BallColor::Green];

    pub fn rgb(self) -> Rgb {
        match self {
            BallColor::Red => Rgb::new(1.0, 0.0, 0.0),
            BallColor::Green => Rgb::new(0.0, 1.0, 0.0),
        }
    }

    /// Uniform pick from the palette
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn other(self) -> Self {
        match self {
            BallColor::Red => BallColor::Green,
            BallColor::Green => BallColor::Red,
        }
    }

    /// Color match between a ball and a brick
    pub fn matches(self, other: BallColor) -> bool {
        colors_approx_equal(self.rgb(), other.rgb())
    }
}

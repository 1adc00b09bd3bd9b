//! Ring colors and the animated background.

use bevy::color::{Mix, Srgba};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::BACKGROUND_SPEED;

/// The nine colors every ring palette is a permutation of
pub const BASE_COLORS: [[u8; 3]; 9] = [
    [0x1d, 0x1f, 0x73],
    [0x3e, 0x91, 0x89],
    [0x57, 0xb6, 0x52],
    [0x7e, 0xaf, 0xcb],
    [0xd7, 0x44, 0x2a],
    [0xde, 0x76, 0xbe],
    [0xe7, 0x8e, 0x43],
    [0xe1, 0xc1, 0x62],
    [0x3e, 0x07, 0x07],
];

/// Background endpoints, the cycle swings between them
pub const BACKGROUND_FROM: [u8; 3] = [183, 96, 178];
pub const BACKGROUND_TO: [u8; 3] = [37, 88, 109];

pub fn rgb(c: [u8; 3]) -> Srgba {
    Srgba::rgb_u8(c[0], c[1], c[2])
}

/// Per-ring shuffled copy of the base colors
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: [Srgba; 9],
}

impl Palette {
    pub fn shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut colors = BASE_COLORS.map(rgb);
        colors.shuffle(rng);
        Self { colors }
    }

    /// Palette in base order, no shuffling
    pub fn base() -> Self {
        Self {
            colors: BASE_COLORS.map(rgb),
        }
    }

    pub fn get(&self, index: usize) -> Srgba {
        self.colors[index % self.colors.len()]
    }

    pub fn colors(&self) -> &[Srgba] {
        &self.colors
    }
}

/// Background color for a frame, looping between the two endpoints
pub fn background_color(frame: u64) -> Srgba {
    let amount = ((frame as f32 * BACKGROUND_SPEED).sin() + 1.0) / 2.0;
    rgb(BACKGROUND_FROM).mix(&rgb(BACKGROUND_TO), amount)
}

/// Per-channel absolute difference, alpha taken from the drawn color
pub fn difference(color: Srgba, backdrop: Srgba) -> Srgba {
    Srgba::new(
        (color.red - backdrop.red).abs(),
        (color.green - backdrop.green).abs(),
        (color.blue - backdrop.blue).abs(),
        color.alpha,
    )
}

//! Configuration constants for the ring field

use bevy::prelude::*;

// ============================================================================
// CANVAS
// ============================================================================

/// Side length of the unscaled square canvas all positions and sizes live in
pub const REFERENCE_SIZE: f32 = 1000.0;

/// Stroke weight for the outline of every layer's base circle
pub const LINE_WEIGHT: f32 = 4.0;

/// Stroke weight for the spoke path of the radial pattern
pub const SPOKE_LINE_WEIGHT: f32 = 2.0;

/// Upper bound on dots per dot ring, spokes per path and bands per layer
pub const MAX_PATTERN_ELEMENTS: usize = 2048;

// ============================================================================
// PLACEMENT
// ============================================================================

/// Number of rings the field tries to place on each regeneration
pub const RING_COUNT: usize = 100;

/// Smallest base diameter a freshly placed ring can get
pub const MIN_RING_SIZE: f32 = REFERENCE_SIZE * 0.2;

/// Largest base diameter a freshly placed ring can get
pub const MAX_RING_SIZE: f32 = REFERENCE_SIZE * 0.8;

/// Total candidate budget shared by every ring of one regeneration
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100_000;

/// Two rings are spaced apart when their centers are at least this fraction of their summed sizes apart
pub const SPACING_FACTOR: f32 = 0.25;

/// A point hits a ring when it lies within this fraction of the ring's scaled size
pub const HIT_RADIUS_FACTOR: f32 = 0.25;

// ============================================================================
// INTERACTION
// ============================================================================

/// Per-draw growth of a clicked ring is drawn uniformly from this range
pub const MIN_GROWTH_RATE: f32 = 2.0;
pub const MAX_GROWTH_RATE: f32 = 4.0;

/// Size multiplier applied when scrolling up over a ring
pub const SCROLL_GROW_FACTOR: f32 = 1.02;

/// Size multiplier applied for any other wheel movement over a ring
pub const SCROLL_SHRINK_FACTOR: f32 = 0.98;

// ============================================================================
// ANIMATION
// ============================================================================

/// Frame multiplier of the rotation oscillation
pub const ROTATION_SPEED: f32 = 0.01;

/// Peak rotation in radians
pub const ROTATION_AMPLITUDE: f32 = 0.5;

/// Frame multiplier of the breathing scale oscillation
pub const PULSE_SPEED: f32 = 0.02;

/// Resting scale and swing of the breathing oscillation
pub const PULSE_BASE: f32 = 0.9;
pub const PULSE_AMPLITUDE: f32 = 0.1;

/// Phase shift of the pulse per ring index (the rotation shifts by 1 per index)
pub const PULSE_PHASE_STEP: f32 = 2.0;

/// Frame multiplier of the background color cycle
pub const BACKGROUND_SPEED: f32 = 0.01;

/// Runtime configuration for field generation
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub ring_count: usize,
    pub min_size: f32,
    pub max_size: f32,
    pub max_attempts: usize,
    /// Fixed seed for reproducible fields, entropy when absent
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            ring_count: RING_COUNT,
            min_size: MIN_RING_SIZE,
            max_size: MAX_RING_SIZE,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
            seed: None,
        }
    }
}

impl FieldConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

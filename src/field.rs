//! The ring collection: placement, animated drawing and hit testing.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::canvas::Canvas;
use crate::config::*;
use crate::ring::Ring;

/// Outcome of one regeneration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlacementReport {
    pub placed: usize,
    pub target: usize,
    /// Candidates drawn, accepted and rejected alike
    pub attempts: usize,
}

impl PlacementReport {
    /// Budget ran out before the target was reached
    pub fn is_partial(&self) -> bool {
        self.placed < self.target
    }
}

/// Rotation (radians) and scale for the ring at `index` on `frame`
pub fn animation_params(frame: u64, index: usize) -> (f32, f32) {
    let t = frame as f32;
    let i = index as f32;
    let rotation = (t * ROTATION_SPEED + i).sin() * ROTATION_AMPLITUDE;
    let scale = PULSE_BASE + PULSE_AMPLITUDE * (t * PULSE_SPEED + i * PULSE_PHASE_STEP).sin();
    (rotation, scale)
}

/// Surface scale for a drawable area, the canvas stays square on the smaller side
pub fn surface_scale(width: f32, height: f32) -> f32 {
    let side = width.min(height);
    if side.is_finite() && side > 0.0 {
        side / REFERENCE_SIZE
    } else {
        0.0
    }
}

/// Resource owning every ring on screen, the random source and the surface scale
#[derive(Resource)]
pub struct RingField {
    rings: Vec<Ring>,
    scale: f32,
    config: FieldConfig,
    rng: StdRng,
    last_report: PlacementReport,
}

impl FromWorld for RingField {
    fn from_world(world: &mut World) -> Self {
        let config = world
            .get_resource::<FieldConfig>()
            .cloned()
            .unwrap_or_default();
        RingField::new(config)
    }
}

impl RingField {
    /// Empty field at scale 1, seeded from the config when it carries a seed
    pub fn new(config: FieldConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: FieldConfig, rng: StdRng) -> Self {
        Self {
            rings: Vec::new(),
            scale: 1.0,
            config,
            rng,
            last_report: PlacementReport::default(),
        }
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn len(&self) -> usize {
        self.rings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn last_report(&self) -> PlacementReport {
        self.last_report
    }

    pub fn clicked_count(&self) -> usize {
        self.rings.iter().filter(|r| r.clicked()).count()
    }

    /// Recomputes the surface scale for a new drawable size
    pub fn resize(&mut self, width: f32, height: f32) {
        self.scale = surface_scale(width, height);
        debug!("surface {}x{} -> scale {:.3}", width, height, self.scale);
    }

    /// Regenerates with the configured count, size range and budget
    pub fn regenerate_from_config(&mut self) -> PlacementReport {
        let FieldConfig {
            ring_count,
            min_size,
            max_size,
            max_attempts,
            ..
        } = self.config;
        self.regenerate(ring_count, min_size, max_size, max_attempts)
    }

    /// Replaces every ring with a freshly placed set.
    ///
    /// Candidates are drawn uniformly over the reference canvas and kept only when spaced from
    /// every ring already placed. All candidates share one attempt budget; running out of it
    /// leaves a partial field.
    pub fn regenerate(
        &mut self,
        target: usize,
        min_size: f32,
        max_size: f32,
        max_attempts: usize,
    ) -> PlacementReport {
        let (low, high) = if min_size <= max_size {
            (min_size, max_size)
        } else {
            (max_size, min_size)
        };

        // Sizes that cannot be sampled leave the field empty
        let sizes_valid = low.is_finite() && high.is_finite();

        let mut rings: Vec<Ring> = Vec::new();
        let mut attempts = 0;

        while sizes_valid && rings.len() < target && attempts < max_attempts {
            attempts += 1;

            let center = Vec2::new(
                self.rng.gen_range(0.0..REFERENCE_SIZE),
                self.rng.gen_range(0.0..REFERENCE_SIZE),
            );
            let size = self.rng.gen_range(low..=high);

            let spaced = rings
                .iter()
                .all(|other| center.distance(other.center()) >= (size + other.size()) * SPACING_FACTOR);

            if spaced {
                rings.push(Ring::new(center, size, &mut self.rng));
            }
        }

        self.rings = rings;
        self.last_report = PlacementReport {
            placed: self.rings.len(),
            target,
            attempts,
        };

        if self.last_report.is_partial() {
            debug!(
                "placement budget of {} exhausted with {} of {} rings",
                max_attempts, self.last_report.placed, target
            );
        }
        info!(
            "placed {} of {} rings after {} attempts",
            self.last_report.placed, target, attempts
        );

        self.last_report
    }

    /// Draws every ring in insertion order, each with its own phase of the animation
    pub fn draw_all<C: Canvas + ?Sized>(&mut self, canvas: &mut C, frame: u64) {
        let scale = self.scale;
        for (i, ring) in self.rings.iter_mut().enumerate() {
            let (rotation, pulse) = animation_params(frame, i);
            ring.draw(canvas, scale, rotation, pulse);
        }
    }

    /// Index of the first ring whose hit radius contains `point` (surface coordinates)
    pub fn hit_test(&self, point: Vec2) -> Option<usize> {
        self.rings.iter().position(|r| r.contains(point, self.scale))
    }

    /// Marks the ring under `point` as clicked
    pub fn click_at(&mut self, point: Vec2) -> Option<usize> {
        let index = self.hit_test(point)?;
        self.rings[index].on_click();
        debug!("ring {} clicked", index);
        Some(index)
    }

    /// Grows the ring under `point` for an upward scroll, shrinks it otherwise
    pub fn scroll_at(&mut self, point: Vec2, delta_y: f32) -> Option<usize> {
        let index = self.hit_test(point)?;
        let factor = if delta_y > 0.0 {
            SCROLL_GROW_FACTOR
        } else {
            SCROLL_SHRINK_FACTOR
        };
        self.rings[index].rescale(factor);
        Some(index)
    }
}

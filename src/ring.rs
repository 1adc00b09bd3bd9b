//! A single ring and its three layer patterns.

use bevy::math::Vec2;
use rand::Rng;
use rand::seq::SliceRandom;
use std::f32::consts::TAU;

use crate::canvas::{BlendMode, Canvas, Paint, Stroke};
use crate::config::*;
use crate::palette::Palette;

/// Procedural style a ring layer is rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Spiral of small dots over a base disc
    Dotted,
    /// Zig-zag path between two radii, a star or gear silhouette
    Spokes,
    /// Alternating concentric discs, a bullseye
    Bands,
}

impl Pattern {
    pub const ALL: [Pattern; 3] = [Pattern::Dotted, Pattern::Spokes, Pattern::Bands];
}

/// One decorative ring of the field
#[derive(Debug, Clone)]
pub struct Ring {
    center: Vec2,
    size: f32,
    clicked: bool,
    growth_rate: f32,
    layer_order: [Pattern; 3],
    palette: Palette,
}

impl Ring {
    /// New ring with a shuffled palette, shuffled layer order and a random growth rate
    pub fn new<R: Rng>(center: Vec2, size: f32, rng: &mut R) -> Self {
        let growth_rate = rng.gen_range(MIN_GROWTH_RATE..MAX_GROWTH_RATE);
        let mut layer_order = Pattern::ALL;
        layer_order.shuffle(rng);
        let palette = Palette::shuffled(rng);

        Self {
            center,
            size,
            clicked: false,
            growth_rate,
            layer_order,
            palette,
        }
    }

    /// Ring with explicit per-instance settings
    pub fn with_parts(
        center: Vec2,
        size: f32,
        growth_rate: f32,
        layer_order: [Pattern; 3],
        palette: Palette,
    ) -> Self {
        Self {
            center,
            size,
            clicked: false,
            growth_rate,
            layer_order,
            palette,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn clicked(&self) -> bool {
        self.clicked
    }

    pub fn growth_rate(&self) -> f32 {
        self.growth_rate
    }

    pub fn layer_order(&self) -> [Pattern; 3] {
        self.layer_order
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn on_click(&mut self) {
        self.clicked = true;
    }

    /// Multiplies the base size, no bounds applied
    pub fn rescale(&mut self, factor: f32) {
        self.size *= factor;
    }

    /// True when `point` (surface coordinates) lies strictly inside the hit radius
    pub fn contains(&self, point: Vec2, canvas_scale: f32) -> bool {
        point.distance(self.center * canvas_scale) < self.size * canvas_scale * HIT_RADIUS_FACTOR
    }

    /// Pattern and rendered size of each layer, outermost first
    pub fn layer_plan(&self, canvas_scale: f32) -> impl Iterator<Item = (Pattern, f32)> + '_ {
        let count = self.layer_order.len() as f32;
        self.layer_order.iter().enumerate().map(move |(i, &pattern)| {
            let scaling = 1.0 - (i as f32 + 1.0) / count;
            (pattern, self.size * canvas_scale * scaling)
        })
    }

    /// Renders every layer around the ring center.
    ///
    /// A clicked ring grows by its growth rate first and is drawn in difference mode; the
    /// canvas is back in normal mode when this returns.
    pub fn draw<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        canvas_scale: f32,
        rotation: f32,
        scale_factor: f32,
    ) {
        if self.clicked {
            self.size += self.growth_rate;
            canvas.set_blend_mode(BlendMode::Difference);
        }

        canvas.push();
        canvas.translate(self.center * canvas_scale);
        canvas.rotate(rotation);
        canvas.scale(scale_factor);

        for (pattern, size) in self.layer_plan(canvas_scale) {
            match pattern {
                Pattern::Dotted => draw_dotted(canvas, &self.palette, size),
                Pattern::Spokes => draw_spokes(canvas, &self.palette, size),
                Pattern::Bands => draw_bands(canvas, &self.palette, size),
            }
        }

        canvas.pop();
        canvas.set_blend_mode(BlendMode::Normal);
    }
}

/// Whole elements for a fractional count, capped at `MAX_PATTERN_ELEMENTS`; NaN gives 0
fn element_count(count: f32) -> usize {
    (count.ceil() as usize).min(MAX_PATTERN_ELEMENTS)
}

fn draw_dotted<C: Canvas + ?Sized>(canvas: &mut C, palette: &Palette, s: f32) {
    canvas.circle(
        Vec2::ZERO,
        s,
        Paint::outlined(palette.get(0), Stroke::new(palette.get(1), LINE_WEIGHT)),
    );

    let spacing = s * 0.04;
    if spacing <= 0.0 {
        return;
    }

    let dot = Paint::fill(palette.get(1));
    let ring_count = element_count((s / 2.0) / spacing);
    let spots = s * 0.2;
    let spot_count = element_count(spots);
    let spot_step = TAU / spots;
    let offset_step = s * 0.1;
    let mut offset = 0.0;

    for i in 0..ring_count.saturating_sub(1) {
        offset += offset_step;
        let radius = i as f32 * spacing;
        for j in 0..spot_count {
            let angle = j as f32 * spot_step + offset;
            canvas.circle(Vec2::from_angle(angle) * radius, s * 0.03, dot);
        }
    }
}

fn draw_spokes<C: Canvas + ?Sized>(canvas: &mut C, palette: &Palette, s: f32) {
    canvas.circle(
        Vec2::ZERO,
        s,
        Paint::outlined(palette.get(1), Stroke::new(palette.get(2), LINE_WEIGHT)),
    );

    let spokes = s * 0.3;
    let step = TAU / spokes;
    let inner = s * 0.25;
    let outer = s * 0.45;

    let spoke_count = element_count(spokes);
    let mut path = Vec::with_capacity(spoke_count * 2);
    for i in 0..spoke_count {
        let direction = Vec2::from_angle(i as f32 * step);
        path.push(direction * inner);
        path.push(direction * outer);
    }

    if path.len() >= 2 {
        canvas.closed_polyline(&path, Stroke::new(palette.get(2), SPOKE_LINE_WEIGHT));
    }
}

fn draw_bands<C: Canvas + ?Sized>(canvas: &mut C, palette: &Palette, s: f32) {
    canvas.circle(
        Vec2::ZERO,
        s,
        Paint::outlined(palette.get(2), Stroke::new(palette.get(3), LINE_WEIGHT)),
    );

    let spacing = s * 0.1;
    if spacing <= 0.0 {
        return;
    }

    let bands = ((s / spacing).round() as usize).min(MAX_PATTERN_ELEMENTS);
    for i in (0..bands).rev() {
        let color = if i % 2 == 0 { palette.get(3) } else { palette.get(2) };
        canvas.circle(Vec2::ZERO, i as f32 * spacing, Paint::fill(color));
    }
}

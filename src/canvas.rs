//! Drawing surface contract the rings render through.

use bevy::color::Srgba;
use bevy::math::{Affine2, Vec2};

/// How drawn colors combine with what is already on the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    #[default]
    Normal,
    Difference,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Srgba,
    pub weight: f32,
}

impl Stroke {
    pub fn new(color: Srgba, weight: f32) -> Self {
        Self { color, weight }
    }
}

/// Fill and outline of a shape, either may be missing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Paint {
    pub fill: Option<Srgba>,
    pub stroke: Option<Stroke>,
}

impl Paint {
    pub fn fill(color: Srgba) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    pub fn outlined(fill: Srgba, stroke: Stroke) -> Self {
        Self {
            fill: Some(fill),
            stroke: Some(stroke),
        }
    }
}

/// Save/restore stack of affine transforms, later operations apply in local space
#[derive(Debug, Clone)]
pub struct TransformStack {
    current: Affine2,
    saved: Vec<Affine2>,
}

impl Default for TransformStack {
    fn default() -> Self {
        Self {
            current: Affine2::IDENTITY,
            saved: Vec::new(),
        }
    }
}

impl TransformStack {
    pub fn push(&mut self) {
        self.saved.push(self.current);
    }

    /// Restores the last pushed transform, an unbalanced pop resets to identity
    pub fn pop(&mut self) {
        self.current = self.saved.pop().unwrap_or(Affine2::IDENTITY);
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.current = self.current * Affine2::from_translation(offset);
    }

    pub fn rotate(&mut self, radians: f32) {
        self.current = self.current * Affine2::from_angle(radians);
    }

    pub fn scale(&mut self, factor: f32) {
        self.current = self.current * Affine2::from_scale(Vec2::splat(factor));
    }

    pub fn apply(&self, point: Vec2) -> Vec2 {
        self.current.transform_point2(point)
    }

    /// Length multiplier of the current transform (scales are always uniform)
    pub fn length_scale(&self) -> f32 {
        self.current.matrix2.x_axis.length()
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }
}

/// Primitives a ring needs from the host surface.
///
/// Shapes are given in local coordinates and mapped through the transform stack by the implementor.
pub trait Canvas {
    fn transform(&mut self) -> &mut TransformStack;

    fn set_blend_mode(&mut self, mode: BlendMode);

    /// Circle given by its diameter
    fn circle(&mut self, center: Vec2, diameter: f32, paint: Paint);

    fn closed_polyline(&mut self, points: &[Vec2], stroke: Stroke);

    fn push(&mut self) {
        self.transform().push();
    }

    fn pop(&mut self) {
        self.transform().pop();
    }

    fn translate(&mut self, offset: Vec2) {
        self.transform().translate(offset);
    }

    fn rotate(&mut self, radians: f32) {
        self.transform().rotate(radians);
    }

    fn scale(&mut self, factor: f32) {
        self.transform().scale(factor);
    }
}

/// A primitive as it landed on the surface, in surface coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: Vec2,
        diameter: f32,
        fill: Option<Srgba>,
        stroke: Option<Stroke>,
        blend: BlendMode,
    },
    Polyline {
        points: Vec<Vec2>,
        stroke: Stroke,
        blend: BlendMode,
    },
}

/// Canvas that keeps every transformed primitive instead of painting it
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    transform: TransformStack,
    blend: BlendMode,
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blend_mode(&self) -> BlendMode {
        self.blend
    }

    pub fn stack_depth(&self) -> usize {
        self.transform.depth()
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn transform(&mut self) -> &mut TransformStack {
        &mut self.transform
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend = mode;
    }

    fn circle(&mut self, center: Vec2, diameter: f32, paint: Paint) {
        let scale = self.transform.length_scale();
        self.commands.push(DrawCommand::Circle {
            center: self.transform.apply(center),
            diameter: diameter * scale,
            fill: paint.fill,
            stroke: paint
                .stroke
                .map(|s| Stroke::new(s.color, s.weight * scale)),
            blend: self.blend,
        });
    }

    fn closed_polyline(&mut self, points: &[Vec2], stroke: Stroke) {
        let scale = self.transform.length_scale();
        self.commands.push(DrawCommand::Polyline {
            points: points.iter().map(|p| self.transform.apply(*p)).collect(),
            stroke: Stroke::new(stroke.color, stroke.weight * scale),
            blend: self.blend,
        });
    }
}

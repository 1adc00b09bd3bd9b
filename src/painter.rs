//! Canvas backed by an egui painter.

use bevy::color::Srgba;
use bevy::math::Vec2;
use bevy_egui::egui;

use crate::canvas::{BlendMode, Canvas, Paint, Stroke, TransformStack};
use crate::palette::difference;

pub fn to_color32(color: Srgba) -> egui::Color32 {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        channel(color.red),
        channel(color.green),
        channel(color.blue),
        channel(color.alpha),
    )
}

/// Canvas painting into an egui layer.
///
/// Difference blending is resolved against the frame's background color.
pub struct EguiCanvas<'a> {
    painter: &'a egui::Painter,
    transform: TransformStack,
    blend: BlendMode,
    backdrop: Srgba,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(painter: &'a egui::Painter, origin: Vec2, backdrop: Srgba) -> Self {
        let mut transform = TransformStack::default();
        transform.translate(origin);
        Self {
            painter,
            transform,
            blend: BlendMode::Normal,
            backdrop,
        }
    }

    fn resolve(&self, color: Srgba) -> egui::Color32 {
        match self.blend {
            BlendMode::Normal => to_color32(color),
            BlendMode::Difference => to_color32(difference(color, self.backdrop)),
        }
    }

    fn pos(&self, point: Vec2) -> egui::Pos2 {
        let p = self.transform.apply(point);
        egui::pos2(p.x, p.y)
    }
}

impl Canvas for EguiCanvas<'_> {
    fn transform(&mut self) -> &mut TransformStack {
        &mut self.transform
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend = mode;
    }

    fn circle(&mut self, center: Vec2, diameter: f32, paint: Paint) {
        let scale = self.transform.length_scale();
        let radius = diameter * scale / 2.0;
        if radius <= 0.0 {
            return;
        }

        let fill = paint
            .fill
            .map(|c| self.resolve(c))
            .unwrap_or(egui::Color32::TRANSPARENT);
        let stroke = paint
            .stroke
            .map(|s| egui::Stroke::new(s.weight * scale, self.resolve(s.color)))
            .unwrap_or(egui::Stroke::NONE);

        self.painter.circle(self.pos(center), radius, fill, stroke);
    }

    fn closed_polyline(&mut self, points: &[Vec2], stroke: Stroke) {
        let scale = self.transform.length_scale();
        let path: Vec<egui::Pos2> = points.iter().map(|p| self.pos(*p)).collect();
        let stroke = egui::Stroke::new(stroke.weight * scale, self.resolve(stroke.color));
        self.painter.add(egui::Shape::closed_line(path, stroke));
    }
}

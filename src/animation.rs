//! Frame driver and the per-frame render of the field.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::{egui, EguiContexts};

use crate::field::RingField;
use crate::painter::{to_color32, EguiCanvas};
use crate::palette::background_color;

/// Frames elapsed while the animation was running
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCounter(pub u64);

/// Resource to pause and resume the animation
#[derive(Resource, PartialEq, Eq, Clone, Copy, Debug)]
pub enum AnimationState {
    Running,
    Paused,
}

impl Default for AnimationState {
    fn default() -> Self {
        AnimationState::Running
    }
}

impl AnimationState {
    pub fn toggled(self) -> Self {
        match self {
            AnimationState::Running => AnimationState::Paused,
            AnimationState::Paused => AnimationState::Running,
        }
    }
}

pub fn animation_running(state: Res<AnimationState>) -> bool {
    *state == AnimationState::Running
}

pub fn advance_frame(mut counter: ResMut<FrameCounter>) {
    counter.0 += 1;
}

/// System to paint the background and every ring into egui's background layer
pub fn render_field(
    mut contexts: EguiContexts,
    mut field: ResMut<RingField>,
    frame: Res<FrameCounter>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    // Square canvas on the smaller window side, anchored top-left
    let side = window.width().min(window.height());
    let canvas_rect = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(side, side));

    let painter = contexts
        .ctx_mut()
        .layer_painter(egui::LayerId::background())
        .with_clip_rect(canvas_rect);

    let backdrop = background_color(frame.0);
    painter.rect_filled(canvas_rect, 0.0, to_color32(backdrop));

    let mut canvas = EguiCanvas::new(&painter, Vec2::ZERO, backdrop);
    field.draw_all(&mut canvas, frame.0);
}

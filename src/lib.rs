//! Animated field of non-overlapping decorative rings.

pub mod animation;
pub mod canvas;
pub mod config;
pub mod field;
pub mod input;
pub mod painter;
pub mod palette;
pub mod ring;

use bevy::prelude::*;

use animation::{advance_frame, animation_running, render_field, AnimationState, FrameCounter};
use config::FieldConfig;
use field::RingField;
use input::{
    handle_pointer, handle_resize, handle_wheel, pointer_free, setup_field, track_ui_pointer,
    PointerCapture,
};

/// Field resources plus the input, frame and render systems. Expects `EguiPlugin`.
pub struct RingFieldPlugin;

impl Plugin for RingFieldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FieldConfig>()
            .init_resource::<RingField>()
            .init_resource::<FrameCounter>()
            .init_resource::<AnimationState>()
            .init_resource::<PointerCapture>()
            .add_systems(Startup, setup_field)
            .add_systems(
                Update,
                (
                    handle_resize,
                    track_ui_pointer,
                    (handle_pointer, handle_wheel).run_if(pointer_free),
                    advance_frame.run_if(animation_running),
                    render_field,
                )
                    .chain(),
            );
    }
}

//! Pointer, wheel and window events routed to the field.

use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};
use bevy_egui::EguiContexts;

use crate::field::RingField;

/// Resource set while egui claims the pointer (hovering or dragging the info window)
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerCapture(pub bool);

/// System to record whether egui wants this frame's pointer input
pub fn track_ui_pointer(mut contexts: EguiContexts, mut capture: ResMut<PointerCapture>) {
    capture.0 = contexts.ctx_mut().wants_pointer_input();
}

/// Run condition for systems that react to pointer input on the canvas
pub fn pointer_free(capture: Res<PointerCapture>) -> bool {
    !capture.0
}

/// System to size the canvas to the primary window and place the first field
pub fn setup_field(mut field: ResMut<RingField>, windows: Query<&Window, With<PrimaryWindow>>) {
    if let Ok(window) = windows.get_single() {
        field.resize(window.width(), window.height());
    }
    field.regenerate_from_config();
}

/// System to recompute the canvas scale whenever the window changes size
pub fn handle_resize(mut resize_events: EventReader<WindowResized>, mut field: ResMut<RingField>) {
    for event in resize_events.read() {
        field.resize(event.width, event.height);
    }
}

/// System to click rings with the left button and regenerate the field with the right
pub fn handle_pointer(
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut field: ResMut<RingField>,
) {
    if mouse_button.just_pressed(MouseButton::Left) {
        let Ok(window) = windows.get_single() else {
            return;
        };
        if let Some(cursor_pos) = window.cursor_position() {
            field.click_at(cursor_pos);
        }
    } else if mouse_button.just_pressed(MouseButton::Right) {
        field.regenerate_from_config();
    }
}

/// System to grow or shrink the ring under the cursor with the mouse wheel
pub fn handle_wheel(
    mut scroll_events: EventReader<MouseWheel>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut field: ResMut<RingField>,
) {
    let cursor = windows.get_single().ok().and_then(|w| w.cursor_position());

    for event in scroll_events.read() {
        if let Some(cursor_pos) = cursor {
            field.scroll_at(cursor_pos, event.y);
        }
    }
}

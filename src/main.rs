use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin};
use rings_rs::animation::{AnimationState, FrameCounter};
use rings_rs::config::REFERENCE_SIZE;
use rings_rs::field::RingField;
use rings_rs::RingFieldPlugin;

fn main() {
    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Ring Field".to_string(),
                resolution: (REFERENCE_SIZE, REFERENCE_SIZE).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .add_plugins(RingFieldPlugin)
        .add_systems(Startup, setup_camera)
        .add_systems(Update, ui_system)
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn ui_system(
    mut contexts: EguiContexts,
    mut field: ResMut<RingField>,
    mut animation_state: ResMut<AnimationState>,
    frame: Res<FrameCounter>,
) {
    egui::Window::new("Ring Field")
        .default_pos(egui::pos2(10.0, 10.0))
        .default_open(false)
        .show(contexts.ctx_mut(), |ui| {
            // Pause/Resume and Regenerate buttons
            ui.horizontal(|ui| {
                let button_text = if *animation_state == AnimationState::Running {
                    "⏸ Pause"
                } else {
                    "▶ Resume"
                };

                if ui.button(button_text).clicked() {
                    *animation_state = animation_state.toggled();
                }

                if ui.button("🔄 Regenerate").clicked() {
                    field.regenerate_from_config();
                }
            });

            ui.separator();
            ui.heading("Field");
            ui.separator();

            let report = field.last_report();
            ui.label(format!("Rings: {}", field.len()));
            ui.label(format!("Clicked: {}", field.clicked_count()));
            ui.label(format!(
                "Last placement: {} / {} in {} attempts",
                report.placed, report.target, report.attempts
            ));
            ui.label(format!("Canvas scale: {:.2}", field.scale()));
            ui.label(format!("Frame: {}", frame.0));

            ui.separator();
            ui.label("Controls:");
            ui.label("• Left Click - Grow a ring");
            ui.label("• Mouse Wheel - Resize the ring under the cursor");
            ui.label("• Right Click - Regenerate the field");
        });
}

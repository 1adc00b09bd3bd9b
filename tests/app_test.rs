use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};
use rings_rs::animation::{advance_frame, animation_running, AnimationState, FrameCounter};
use rings_rs::config::FieldConfig;
use rings_rs::field::RingField;
use rings_rs::input::{
    handle_pointer, handle_resize, handle_wheel, pointer_free, setup_field, PointerCapture,
};

/// Headless app with the frame driver and resize handling, no window or egui
fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_event::<WindowResized>();
    app.insert_resource(FieldConfig {
        ring_count: 6,
        min_size: 100.0,
        max_size: 200.0,
        ..FieldConfig::default().with_seed(99)
    });
    app.init_resource::<RingField>()
        .init_resource::<FrameCounter>()
        .init_resource::<AnimationState>()
        .add_systems(Startup, setup_field)
        .add_systems(
            Update,
            (handle_resize, advance_frame.run_if(animation_running)),
        );
    app
}

/// Headless app with a primary window and pointer dispatch; the window is 1280x720 so the
/// canvas scale is 0.72
fn interactive_app() -> App {
    let mut app = headless_app();
    app.init_resource::<PointerCapture>()
        .init_resource::<ButtonInput<MouseButton>>()
        .add_event::<MouseWheel>()
        .add_systems(Update, (handle_pointer, handle_wheel).run_if(pointer_free));
    app.world_mut().spawn((Window::default(), PrimaryWindow));
    app.update();
    app
}

fn move_cursor(app: &mut App, position: Vec2) {
    let world = app.world_mut();
    let mut windows = world.query_filtered::<&mut Window, With<PrimaryWindow>>();
    for mut window in windows.iter_mut(world) {
        window.set_cursor_position(Some(position));
    }
}

/// Cursor position over the center of ring `index`
fn ring_screen_center(app: &App, index: usize) -> Vec2 {
    let field = app.world().resource::<RingField>();
    field.rings()[index].center() * field.scale()
}

fn ring_size(app: &App, index: usize) -> f32 {
    app.world().resource::<RingField>().rings()[index].size()
}

fn scroll(app: &mut App, y: f32) {
    app.world_mut().send_event(MouseWheel {
        unit: MouseScrollUnit::Line,
        x: 0.0,
        y,
        window: Entity::PLACEHOLDER,
    });
}

/// The field resource picks up the inserted config and places rings at startup
#[test]
fn test_startup_places_configured_field() {
    let mut app = headless_app();
    app.update();

    let field = app.world().resource::<RingField>();
    assert_eq!(field.config().seed, Some(99));
    assert_eq!(field.len(), 6);
    assert_eq!(field.last_report().target, 6);
    assert_eq!(field.scale(), 1.0, "No window means the default scale");
}

#[test]
fn test_frame_counter_advances_per_update() {
    let mut app = headless_app();
    app.update();
    app.update();

    let counter = app.world().resource::<FrameCounter>();
    assert_eq!(counter.0, 2, "Should have run exactly 2 frames");
}

#[test]
fn test_paused_animation_holds_frame() {
    let mut app = headless_app();
    app.update();

    *app.world_mut().resource_mut::<AnimationState>() = AnimationState::Paused;
    app.update();
    app.update();
    assert_eq!(app.world().resource::<FrameCounter>().0, 1);

    let state = *app.world().resource::<AnimationState>();
    *app.world_mut().resource_mut::<AnimationState>() = state.toggled();
    app.update();
    assert_eq!(app.world().resource::<FrameCounter>().0, 2);
}

#[test]
fn test_resize_event_updates_scale() {
    let mut app = headless_app();
    app.update();

    app.world_mut().send_event(WindowResized {
        window: Entity::PLACEHOLDER,
        width: 500.0,
        height: 800.0,
    });
    app.update();

    let field = app.world().resource::<RingField>();
    assert!((field.scale() - 0.5).abs() < 1e-6);
    for (index, ring) in field.rings().iter().enumerate() {
        assert_eq!(field.hit_test(ring.center() * 0.5), Some(index));
    }
}

/// Same seed, same startup field
#[test]
fn test_seeded_apps_match() {
    let mut first = headless_app();
    let mut second = headless_app();
    first.update();
    second.update();

    let a = first.world().resource::<RingField>();
    let b = second.world().resource::<RingField>();
    assert_eq!(a.len(), b.len());
    for (ra, rb) in a.rings().iter().zip(b.rings()) {
        assert_eq!(ra.center(), rb.center());
        assert_eq!(ra.size(), rb.size());
    }
}

#[test]
fn test_window_sets_startup_scale() {
    let app = interactive_app();
    let field = app.world().resource::<RingField>();
    assert!((field.scale() - 0.72).abs() < 1e-6);
    assert_eq!(field.len(), 6);
}

/// Left press clicks only the ring under the cursor
#[test]
fn test_left_press_clicks_ring_under_cursor() {
    let mut app = interactive_app();
    let target = ring_screen_center(&app, 1);
    move_cursor(&mut app, target);

    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .press(MouseButton::Left);
    app.update();

    let field = app.world().resource::<RingField>();
    assert!(field.rings()[1].clicked());
    assert_eq!(field.clicked_count(), 1, "Only the first hit ring is clicked");
}

#[test]
fn test_right_press_regenerates_field() {
    let mut app = interactive_app();
    let target = ring_screen_center(&app, 0);
    move_cursor(&mut app, target);

    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .press(MouseButton::Left);
    app.update();
    assert_eq!(app.world().resource::<RingField>().clicked_count(), 1);

    let before: Vec<Vec2> = app
        .world()
        .resource::<RingField>()
        .rings()
        .iter()
        .map(|r| r.center())
        .collect();

    {
        let mut buttons = app.world_mut().resource_mut::<ButtonInput<MouseButton>>();
        buttons.release(MouseButton::Left);
        buttons.clear();
        buttons.press(MouseButton::Right);
    }
    app.update();

    let field = app.world().resource::<RingField>();
    let after: Vec<Vec2> = field.rings().iter().map(|r| r.center()).collect();
    assert_eq!(field.clicked_count(), 0, "Regeneration should replace clicked rings");
    assert_eq!(field.last_report().target, 6);
    assert_ne!(before, after, "Field should be freshly placed");
}

#[test]
fn test_wheel_resizes_ring_under_cursor() {
    let mut app = interactive_app();
    let target = ring_screen_center(&app, 2);
    move_cursor(&mut app, target);
    let start = ring_size(&app, 2);

    scroll(&mut app, 1.0);
    app.update();
    assert!((ring_size(&app, 2) - start * 1.02).abs() < 1e-3);

    scroll(&mut app, -1.0);
    app.update();
    assert!((ring_size(&app, 2) - start * 1.02 * 0.98).abs() < 1e-3);
}

#[test]
fn test_wheel_away_from_rings_changes_nothing() {
    let mut app = interactive_app();
    // Inside the window, right of the square canvas
    move_cursor(&mut app, Vec2::new(1200.0, 700.0));
    let sizes: Vec<f32> = (0..6).map(|i| ring_size(&app, i)).collect();

    scroll(&mut app, 1.0);
    app.update();

    let after: Vec<f32> = (0..6).map(|i| ring_size(&app, i)).collect();
    assert_eq!(sizes, after);
}

/// Pointer input egui claims never reaches the field
#[test]
fn test_captured_pointer_is_not_forwarded() {
    let mut app = interactive_app();
    let target = ring_screen_center(&app, 0);
    move_cursor(&mut app, target);
    let start = ring_size(&app, 0);

    app.world_mut().resource_mut::<PointerCapture>().0 = true;
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .press(MouseButton::Left);
    scroll(&mut app, 1.0);
    app.update();

    assert_eq!(app.world().resource::<RingField>().clicked_count(), 0);
    assert_eq!(ring_size(&app, 0), start);
}

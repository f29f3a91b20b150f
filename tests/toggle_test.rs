//! Drag toggle behaviour through the public API

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use city_guide::{
    toggle::{DragToggle, ToggleConfig},
    GuideError,
};

fn toggle_with_log(config: ToggleConfig) -> (DragToggle, Arc<Mutex<Vec<bool>>>) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let toggle = DragToggle::new(config, false)
        .unwrap()
        .with_on_change(move |value| sink.lock().unwrap().push(value));
    (toggle, log)
}

#[test]
fn release_threshold_around_midpoint() {
    // knob 20, travel 3..=119, midpoint 61
    for (dx, expected) in [(59.0, true), (58.0, false), (0.0, false), (116.0, true)] {
        let (mut toggle, log) = toggle_with_log(ToggleConfig::sized(142.0, 26.0));
        toggle.on_gesture_start();
        toggle.on_gesture_move(dx);
        assert_eq!(toggle.on_gesture_end(dx), Some(expected), "dx={}", dx);
        assert_eq!(*log.lock().unwrap(), vec![expected]);
    }
}

#[test]
fn knob_returns_to_rest_after_release() {
    let (mut toggle, _) = toggle_with_log(ToggleConfig::default());
    toggle.on_gesture_start();
    toggle.on_gesture_move(70.0);
    toggle.on_gesture_end(70.0);
    assert!(!toggle.is_at_rest());

    for _ in 0..20 {
        toggle.advance(Duration::from_millis(16));
    }
    assert!(toggle.is_at_rest());
    assert_eq!(toggle.knob_position(), toggle.geometry().max_x);
    assert_eq!(toggle.label_opacity(), 0.0);
}

#[test]
fn cancelled_drag_changes_nothing() {
    let (mut toggle, log) = toggle_with_log(ToggleConfig::default());
    toggle.on_gesture_start();
    toggle.on_gesture_move(110.0);
    toggle.on_gesture_cancel();
    toggle.finish_animation();

    assert!(!toggle.value());
    assert_eq!(toggle.knob_position(), toggle.geometry().min_x);
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn disabled_config_freezes_the_control() {
    let config = ToggleConfig {
        disabled: true,
        ..ToggleConfig::default()
    };
    let (mut toggle, log) = toggle_with_log(config);
    assert_eq!(toggle.on_tap(), None);
    toggle.on_gesture_start();
    toggle.on_gesture_move(200.0);
    assert_eq!(toggle.on_gesture_end(200.0), None);

    assert!(toggle.is_disabled());
    assert_eq!(toggle.knob_position(), toggle.geometry().min_x);
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn rejects_track_too_small_for_knob() {
    let result = DragToggle::new(ToggleConfig::sized(10.0, 28.0), false);
    assert!(matches!(result, Err(GuideError::InvalidToggleGeometry { .. })));
}

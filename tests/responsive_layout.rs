use std::time::Duration;
use tokio::time::sleep;

use educore_dashboard::layout::{is_compact, ResponsiveMonitor, Viewport, ViewportSignal};

async fn settle() {
    sleep(Duration::from_millis(1)).await;
}

#[test]
fn breakpoint_boundaries() {
    assert!(is_compact(0));
    assert!(is_compact(767));
    assert!(!is_compact(768));
    assert!(!is_compact(1920));
}

#[tokio::test]
async fn initial_flag_is_computed_synchronously() {
    let narrow = ResponsiveMonitor::attach(&Viewport::new(375));
    assert!(narrow.is_compact());

    let wide = ResponsiveMonitor::attach(&Viewport::new(1024));
    assert!(!wide.is_compact());
}

#[tokio::test(start_paused = true)]
async fn follows_resize_and_orientation_signals() {
    let viewport = Viewport::new(1024);
    let monitor = ResponsiveMonitor::attach(&viewport);
    let mut changes = monitor.subscribe();

    viewport.resize(767);
    changes.changed().await.unwrap();
    assert!(monitor.is_compact());

    viewport.rotate(768);
    changes.changed().await.unwrap();
    assert!(!monitor.is_compact());

    viewport.emit(ViewportSignal::OrientationChange, 500);
    settle().await;
    assert!(monitor.is_compact());
    assert_eq!(viewport.width(), 500);
}

#[tokio::test(start_paused = true)]
async fn same_mode_does_not_notify() {
    let viewport = Viewport::new(1024);
    let monitor = ResponsiveMonitor::attach(&viewport);
    let changes = monitor.subscribe();

    viewport.resize(900);
    viewport.resize(1200);
    settle().await;
    assert!(!changes.has_changed().unwrap());
    assert!(!monitor.is_compact());
}

#[tokio::test]
async fn detach_unsubscribes_from_both_signals() {
    let viewport = Viewport::new(1024);
    assert_eq!(viewport.listener_count(), 0);

    let monitor = ResponsiveMonitor::attach(&viewport);
    assert_eq!(viewport.listener_count(), 2);
    assert!(monitor.is_attached());

    monitor.detach().await;
    assert_eq!(viewport.listener_count(), 0);

    // Signals after teardown are recorded but nobody listens.
    viewport.resize(320);
    assert_eq!(viewport.width(), 320);
}

#[test]
fn signal_names_match_the_browser_events() {
    let resize: ViewportSignal = serde_json::from_str("\"resize\"").unwrap();
    let rotate: ViewportSignal = serde_json::from_str("\"orientationchange\"").unwrap();
    assert_eq!(resize, ViewportSignal::Resize);
    assert_eq!(rotate, ViewportSignal::OrientationChange);
}

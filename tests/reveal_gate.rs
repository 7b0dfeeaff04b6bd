use std::time::Duration;
use tokio::time::sleep;

use educore_dashboard::reveal::{GateKey, RevealGate, Skeleton};
use educore_dashboard::ViewId;

fn key() -> GateKey {
    GateKey::new(ViewId::Catalog, 0)
}

#[tokio::test(start_paused = true)]
async fn placeholder_until_delay_elapses() {
    let gate = RevealGate::new(key(), Duration::from_millis(100), "content");
    assert!(!gate.is_revealed());
    assert!(gate.frame().is_placeholder());

    sleep(Duration::from_millis(99)).await;
    assert!(!gate.is_revealed());

    sleep(Duration::from_millis(2)).await;
    assert!(gate.is_revealed());
    assert!(!gate.frame().is_placeholder());
    assert!(!gate.is_pending());
}

#[tokio::test(start_paused = true)]
async fn stays_revealed() {
    let gate = RevealGate::new(key(), Duration::from_millis(200), 7u32);
    sleep(Duration::from_millis(201)).await;
    assert!(gate.is_revealed());
    sleep(Duration::from_secs(60)).await;
    assert!(gate.is_revealed());
    assert_eq!(*gate.content(), 7);
}

#[tokio::test(start_paused = true)]
async fn zero_delay_reveals_on_first_poll() {
    let gate = RevealGate::new(key(), Duration::ZERO, ());
    assert!(!gate.is_revealed());
    sleep(Duration::from_millis(1)).await;
    assert!(gate.is_revealed());
}

#[tokio::test(start_paused = true)]
async fn custom_placeholder_is_shown() {
    let skeleton = Skeleton {
        header_lines: 1,
        metric_cards: 0,
        chart_cards: 0,
        list_rows: 8,
    };
    let gate = RevealGate::with_placeholder(key(), Duration::from_millis(100), (), skeleton.clone());
    match gate.frame() {
        educore_dashboard::reveal::Frame::Placeholder(shown) => assert_eq!(shown, &skeleton),
        educore_dashboard::reveal::Frame::Content(_) => panic!("revealed too early"),
    }
}

fn alive_tasks() -> usize {
    tokio::runtime::Handle::current().metrics().num_alive_tasks()
}

#[tokio::test(start_paused = true)]
async fn dropping_the_gate_cancels_the_timer() {
    let before = alive_tasks();
    let gate = RevealGate::new(key(), Duration::from_millis(100), ());
    assert!(gate.is_pending());
    assert_eq!(alive_tasks(), before + 1);

    drop(gate);
    sleep(Duration::from_millis(1)).await;
    assert_eq!(alive_tasks(), before);
}

#[tokio::test(start_paused = true)]
async fn a_kept_gate_holds_its_timer_until_the_reveal() {
    let before = alive_tasks();
    let gate = RevealGate::new(key(), Duration::from_millis(100), ());
    sleep(Duration::from_millis(1)).await;
    assert_eq!(alive_tasks(), before + 1);

    sleep(Duration::from_millis(100)).await;
    assert!(gate.is_revealed());
    assert_eq!(alive_tasks(), before);
}

#[test]
fn default_skeleton_layout() {
    let skeleton = Skeleton::default();
    assert_eq!(skeleton.header_lines, 2);
    assert_eq!(skeleton.metric_cards, 4);
    assert_eq!(skeleton.chart_cards, 2);
    assert_eq!(skeleton.list_rows, 3);
}

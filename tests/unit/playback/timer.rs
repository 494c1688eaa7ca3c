use super::*;

#[test]
fn fires_once_at_deadline() {
    let mut t = OneShotTimer::new();
    assert!(!t.is_active());
    t.start(1_000, 500);
    assert_eq!(t.deadline(), Some(1_500));
    assert_eq!(t.remaining(1_200), Some(300));
    assert!(!t.poll(1_499));
    assert!(t.poll(1_500));
    assert!(!t.is_active());
    assert!(!t.poll(2_000));
}

#[test]
fn rearming_replaces_pending_deadline() {
    let mut t = OneShotTimer::new();
    t.start(0, 100);
    t.start(50, 1_000);
    assert!(!t.poll(100));
    assert!(!t.poll(1_049));
    assert!(t.poll(1_050));
}

#[test]
fn stop_cancels() {
    let mut t = OneShotTimer::new();
    t.start(0, 10);
    t.stop();
    assert!(!t.poll(100));
    assert_eq!(t.remaining(0), None);
}

#[test]
fn zero_interval_fires_on_next_poll() {
    let mut t = OneShotTimer::new();
    t.start(42, 0);
    assert!(t.poll(42));
}

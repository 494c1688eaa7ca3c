use super::*;

#[test]
fn selecting_announces_duration_and_position() {
    let mut p = TimelinePlayer::new(vec![5_000, 3_000]);
    assert_eq!(p.media_count(), 2);
    assert!(p.poll_events(0).is_empty());
    assert!(p.set_current(1, 0));
    assert_eq!(p.duration_ms(), 3_000);
    assert_eq!(
        p.poll_events(0),
        vec![
            PlayerEvent::DurationChanged(3_000),
            PlayerEvent::PositionChanged(0)
        ]
    );
    assert!(p.poll_events(0).is_empty());
}

#[test]
fn unknown_index_is_rejected() {
    let mut p = TimelinePlayer::new(vec![1_000]);
    assert!(!p.set_current(3, 0));
    assert_eq!(p.current(), None);
}

#[test]
fn position_advances_only_while_playing() {
    let mut p = TimelinePlayer::new(vec![10_000]);
    p.set_current(0, 0);
    p.play(1_000);
    assert_eq!(p.state(), PlayerState::Playing);
    assert_eq!(p.position_ms(1_500), 500);
    p.pause(2_000);
    assert_eq!(p.state(), PlayerState::Paused);
    assert_eq!(p.position_ms(9_000), 1_000);
    p.play(9_000);
    assert_eq!(p.position_ms(9_250), 1_250);
}

#[test]
fn seek_is_clamped_and_always_announced() {
    let mut p = TimelinePlayer::new(vec![4_000]);
    p.set_current(0, 0);
    p.poll_events(0);
    p.set_position(9_999, 0);
    assert_eq!(p.position_ms(0), 4_000);
    p.set_position(10, 0);
    assert_eq!(p.poll_events(0), vec![PlayerEvent::PositionChanged(10)]);
}

#[test]
fn reaching_the_end_stops_and_reports() {
    let mut p = TimelinePlayer::new(vec![1_000]);
    p.set_current(0, 0);
    p.play(0);
    p.poll_events(0);
    let events = p.poll_events(1_200);
    assert_eq!(
        events,
        vec![PlayerEvent::PositionChanged(1_000), PlayerEvent::EndOfMedia]
    );
    assert_eq!(p.state(), PlayerState::Stopped);
    assert_eq!(p.position_ms(1_300), 0);
}

#[test]
fn unknown_duration_never_ends() {
    let mut p = TimelinePlayer::new(vec![0]);
    p.set_current(0, 0);
    p.play(0);
    let events = p.poll_events(60_000);
    assert!(!events.contains(&PlayerEvent::EndOfMedia));
    assert_eq!(p.position_ms(60_000), 60_000);
}

#[test]
fn volume_is_capped() {
    let mut p = TimelinePlayer::new(vec![]);
    p.set_volume(250);
    assert_eq!(p.volume(), 100);
    assert_eq!(PlayerState::Paused.to_string(), "paused");
}

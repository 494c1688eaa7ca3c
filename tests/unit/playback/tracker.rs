use super::*;
use crate::{
    playback::{fade::FadeChannel, player::TimelinePlayer},
    stage::pixmap::Pixmap,
};

const LONG: usize = 0;
const UNKNOWN: usize = 1;
const SHORT: usize = 2;

fn config() -> Config {
    Config {
        fade_in_ms: 1_000,
        fade_out_ms: 500,
        ..Config::default()
    }
}

fn setup() -> (PlaybackTracker<TimelinePlayer>, Stage) {
    let player = TimelinePlayer::new(vec![10_000, 0, 600]);
    (
        PlaybackTracker::new(player, &config()),
        Stage::new(64, 64, Pixmap::empty()),
    )
}

fn fade_in(tracker: &mut PlaybackTracker<TimelinePlayer>, stage: &mut Stage, index: usize) {
    assert!(tracker.choose_video(index, 0, stage));
    assert_eq!(tracker.tick_fade(1_000, stage), Some(FadeDirection::In));
    tracker.on_fade_finished(FadeDirection::In, 1_000, stage);
}

#[test]
fn choose_video_starts_fade_in_from_silence() {
    let (mut tracker, mut stage) = setup();
    assert!(tracker.choose_video(LONG, 0, &mut stage));

    assert_eq!(tracker.phase(), Phase::FadingIn);
    assert_eq!(tracker.active_fade(), Some(FadeDirection::In));
    assert!(stage.video.visible);
    assert_eq!(stage.video.opacity, 0.0);
    assert_eq!(stage.picture.opacity, 1.0);
    assert_eq!(tracker.player().state(), PlayerState::Playing);
    assert_eq!(tracker.player().volume(), 0);
    assert_eq!(tracker.session().index, Some(LONG));
    assert!(!tracker.timer().is_active());
}

#[test]
fn volume_follows_the_fade() {
    let (mut tracker, mut stage) = setup();
    tracker.choose_video(LONG, 0, &mut stage);
    assert_eq!(tracker.tick_fade(500, &mut stage), None);
    let v = tracker.player().volume();
    assert!(v > 50 && v < 100, "volume {v}");
}

#[test]
fn unknown_index_is_ignored() {
    let (mut tracker, mut stage) = setup();
    assert!(!tracker.choose_video(9, 0, &mut stage));
    assert_eq!(tracker.phase(), Phase::Stopped);
    assert!(!stage.video.visible);
}

#[test]
fn fade_in_completion_arms_timer_for_remaining_minus_lead() {
    let (mut tracker, mut stage) = setup();
    fade_in(&mut tracker, &mut stage, LONG);

    assert_eq!(tracker.phase(), Phase::PlayingVisible);
    // position 1000 of 10000, lead 500
    assert_eq!(tracker.timer().deadline(), Some(9_500));
    assert_eq!(stage.video.opacity, 1.0);
    assert_eq!(stage.picture.opacity, 0.0);
    assert_eq!(tracker.player().volume(), 100);
}

#[test]
fn timer_then_fade_out_returns_to_stopped() {
    let (mut tracker, mut stage) = setup();
    fade_in(&mut tracker, &mut stage, LONG);

    assert!(!tracker.poll_timer(9_499));
    assert!(tracker.poll_timer(9_500));
    assert!(tracker.fade_out(9_500, &mut stage));
    assert_eq!(tracker.phase(), Phase::FadingOut);
    assert_eq!(stage.video.opacity, 1.0);

    assert_eq!(tracker.tick_fade(10_000, &mut stage), Some(FadeDirection::Out));
    tracker.on_fade_finished(FadeDirection::Out, 10_000, &mut stage);

    assert_eq!(tracker.phase(), Phase::Stopped);
    assert!(!stage.video.visible);
    assert_eq!(stage.picture.opacity, 1.0);
    assert_eq!(tracker.player().state(), PlayerState::Stopped);
    assert_eq!(tracker.player().volume(), 0);
    assert_eq!(tracker.seek_bar(), SeekBar::parked());
    assert_eq!(tracker.session(), &PlaybackSession::new());
}

#[test]
fn fade_out_is_ignored_when_hidden_or_already_fading_out() {
    let (mut tracker, mut stage) = setup();
    assert!(!tracker.fade_out(0, &mut stage));

    fade_in(&mut tracker, &mut stage, LONG);
    assert!(tracker.fade_out(2_000, &mut stage));
    tracker.tick_fade(2_200, &mut stage);
    let mid = stage.video.opacity;
    assert!(!tracker.fade_out(2_200, &mut stage));
    assert_eq!(stage.video.opacity, mid);
    let video = tracker.fades().channel(FadeChannel::VideoOpacity);
    assert_eq!(video.map(|t| t.start), Some(1.0));
}

#[test]
fn fade_out_cancels_the_timer() {
    let (mut tracker, mut stage) = setup();
    fade_in(&mut tracker, &mut stage, LONG);
    assert!(tracker.timer().is_active());
    tracker.fade_out(3_000, &mut stage);
    assert!(!tracker.timer().is_active());
}

#[test]
fn fade_out_interrupts_fade_in() {
    let (mut tracker, mut stage) = setup();
    tracker.choose_video(LONG, 0, &mut stage);
    tracker.tick_fade(300, &mut stage);
    assert!(tracker.fade_out(300, &mut stage));
    assert_eq!(tracker.active_fade(), Some(FadeDirection::Out));
    assert_eq!(tracker.tick_fade(800, &mut stage), Some(FadeDirection::Out));
}

#[test]
fn seek_without_selection_is_ignored() {
    let (mut tracker, mut stage) = setup();
    tracker.seek(4_000, 0, &mut stage);
    assert_eq!(tracker.player().current(), None);
    assert_eq!(tracker.phase(), Phase::Stopped);
}

#[test]
fn seek_reschedules_or_fades_out() {
    let (mut tracker, mut stage) = setup();
    fade_in(&mut tracker, &mut stage, LONG);

    tracker.seek(2_000, 1_000, &mut stage);
    assert_eq!(tracker.timer().deadline(), Some(1_000 + 8_000 - 500));

    tracker.seek(9_700, 1_500, &mut stage);
    assert_eq!(tracker.phase(), Phase::FadingOut);
    assert!(!tracker.timer().is_active());
}

#[test]
fn seek_while_paused_leaves_timer_disarmed() {
    let (mut tracker, mut stage) = setup();
    fade_in(&mut tracker, &mut stage, LONG);
    tracker.play_pause(1_000, &mut stage);
    tracker.seek(9_900, 1_100, &mut stage);
    assert_eq!(tracker.phase(), Phase::PlayingVisible);
    assert!(!tracker.timer().is_active());
    assert_eq!(tracker.player().position_ms(5_000), 9_900);
}

#[test]
fn play_pause_needs_a_visible_video() {
    let (mut tracker, mut stage) = setup();
    tracker.play_pause(0, &mut stage);
    assert_eq!(tracker.player().state(), PlayerState::Stopped);

    tracker.choose_video(LONG, 0, &mut stage);
    // opacity still 0 right after choosing
    tracker.play_pause(0, &mut stage);
    assert_eq!(tracker.player().state(), PlayerState::Playing);
}

#[test]
fn pause_disarms_and_resume_rearms_timer() {
    let (mut tracker, mut stage) = setup();
    fade_in(&mut tracker, &mut stage, LONG);

    tracker.play_pause(2_000, &mut stage);
    assert_eq!(tracker.player().state(), PlayerState::Paused);
    assert_eq!(tracker.session().state, PlayerState::Paused);
    assert!(!tracker.timer().is_active());

    tracker.play_pause(5_000, &mut stage);
    assert_eq!(tracker.player().state(), PlayerState::Playing);
    // paused at 2000, so 8000 remain
    assert_eq!(tracker.timer().deadline(), Some(5_000 + 8_000 - 500));
}

#[test]
fn unknown_duration_does_not_arm_after_fade_in() {
    let (mut tracker, mut stage) = setup();
    fade_in(&mut tracker, &mut stage, UNKNOWN);
    assert_eq!(tracker.phase(), Phase::PlayingVisible);
    assert!(!tracker.timer().is_active());

    for ev in tracker.poll_player(1_500) {
        tracker.on_player_event(ev, 1_500, &mut stage);
    }
    assert_eq!(tracker.session().duration_ms, 0);
    assert_eq!(tracker.phase(), Phase::PlayingVisible);
}

#[test]
fn seek_with_unknown_duration_fades_out() {
    let (mut tracker, mut stage) = setup();
    fade_in(&mut tracker, &mut stage, UNKNOWN);

    tracker.seek(50_000, 2_000, &mut stage);
    assert_eq!(tracker.phase(), Phase::FadingOut);
    assert!(!tracker.timer().is_active());
}

#[test]
fn resume_with_unknown_duration_fades_out() {
    let (mut tracker, mut stage) = setup();
    fade_in(&mut tracker, &mut stage, UNKNOWN);
    tracker.play_pause(2_000, &mut stage);
    assert_eq!(tracker.phase(), Phase::PlayingVisible);

    tracker.play_pause(3_000, &mut stage);
    assert_eq!(tracker.phase(), Phase::FadingOut);
}

#[test]
fn short_video_fades_out_right_after_fade_in() {
    let (mut tracker, mut stage) = setup();
    fade_in(&mut tracker, &mut stage, SHORT);
    assert_eq!(tracker.phase(), Phase::FadingOut);
    assert!(!tracker.timer().is_active());
}

#[test]
fn player_events_update_session_and_seek_bar() {
    let (mut tracker, mut stage) = setup();
    tracker.choose_video(LONG, 0, &mut stage);
    for ev in tracker.poll_player(0) {
        tracker.on_player_event(ev, 0, &mut stage);
    }
    assert_eq!(tracker.session().duration_ms, 10_000);
    assert_eq!(tracker.seek_bar().maximum, 10_000);

    for ev in tracker.poll_player(700) {
        tracker.on_player_event(ev, 700, &mut stage);
    }
    assert_eq!(tracker.session().position_ms, 700);
    assert_eq!(tracker.seek_bar().value, 700);
}

#[test]
fn end_of_media_while_visible_fades_out() {
    let (mut tracker, mut stage) = setup();
    fade_in(&mut tracker, &mut stage, UNKNOWN);
    tracker.on_player_event(PlayerEvent::EndOfMedia, 3_000, &mut stage);
    assert_eq!(tracker.phase(), Phase::FadingOut);
}

#[test]
fn end_of_media_during_fade_out_keeps_the_running_fade() {
    let (mut tracker, mut stage) = setup();
    fade_in(&mut tracker, &mut stage, LONG);
    assert!(tracker.fade_out(9_500, &mut stage));
    tracker.tick_fade(9_900, &mut stage);
    let low = stage.video.opacity;
    assert!(low < 0.5, "opacity {low}");

    // the fade has finished, but its completion is still queued
    assert_eq!(tracker.tick_fade(10_000, &mut stage), Some(FadeDirection::Out));
    assert_eq!(tracker.active_fade(), None);
    tracker.on_player_event(PlayerEvent::EndOfMedia, 10_000, &mut stage);
    assert!(!tracker.fade_out(10_000, &mut stage));
    assert_eq!(tracker.active_fade(), None);
    assert_eq!(stage.video.opacity, 0.0);

    tracker.on_fade_finished(FadeDirection::Out, 10_000, &mut stage);
    assert_eq!(tracker.phase(), Phase::Stopped);
    assert!(!stage.video.visible);
}

#[test]
fn choosing_again_restarts_the_fade_in() {
    let (mut tracker, mut stage) = setup();
    fade_in(&mut tracker, &mut stage, LONG);
    assert!(tracker.timer().is_active());

    assert!(tracker.choose_video(SHORT, 2_000, &mut stage));
    assert!(!tracker.timer().is_active());
    assert_eq!(tracker.phase(), Phase::FadingIn);
    assert_eq!(stage.video.opacity, 0.0);
    assert_eq!(tracker.session().index, Some(SHORT));
    assert_eq!(tracker.session().duration_ms, 0);
}

#[test]
fn completion_of_a_replaced_fade_is_ignored() {
    let (mut tracker, mut stage) = setup();
    tracker.choose_video(LONG, 0, &mut stage);
    tracker.on_fade_finished(FadeDirection::In, 100, &mut stage);
    assert_eq!(tracker.phase(), Phase::FadingIn);
    assert!(!tracker.timer().is_active());
}

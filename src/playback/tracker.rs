use crate::{
    config::Config,
    controls::SeekBar,
    foundation::clock::Millis,
    playback::{
        fade::{FadeController, FadeDirection, FadePlan},
        player::{MediaPlayer, PlayerEvent, PlayerState},
        session::{Phase, PlaybackSession},
        timer::OneShotTimer,
    },
    stage::scene::Stage,
};

/// Video opacity below which play/pause is ignored.
pub const PLAY_PAUSE_MIN_OPACITY: f64 = 0.1;

/// Owns the player and decides when videos fade in and out.
///
/// The fade-out lead time equals the fade-out duration: a playing video starts
/// fading out exactly when its remaining time drops to that duration.
#[derive(Debug)]
pub struct PlaybackTracker<P> {
    player: P,
    session: PlaybackSession,
    timer: OneShotTimer,
    fades: FadeController,
    seek_bar: SeekBar,
    fade_in_ms: Millis,
    fade_out_ms: Millis,
}

impl<P: MediaPlayer> PlaybackTracker<P> {
    /// Tracker driving `player` with the fade durations from `config`.
    pub fn new(player: P, config: &Config) -> Self {
        Self {
            player,
            session: PlaybackSession::new(),
            timer: OneShotTimer::new(),
            fades: FadeController::new(),
            seek_bar: SeekBar::parked(),
            fade_in_ms: config.fade_in_ms,
            fade_out_ms: config.fade_out_ms,
        }
    }

    /// Driven player.
    pub fn player(&self) -> &P {
        &self.player
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    /// Current choreography phase.
    pub fn phase(&self) -> Phase {
        self.session.phase
    }

    /// Seek slider state.
    pub fn seek_bar(&self) -> SeekBar {
        self.seek_bar
    }

    /// Fade-out transition timer.
    pub fn timer(&self) -> &OneShotTimer {
        &self.timer
    }

    /// Direction of the running video fade, if any.
    pub fn active_fade(&self) -> Option<FadeDirection> {
        self.fades.active()
    }

    /// Video fades, for inspection.
    pub fn fades(&self) -> &FadeController {
        &self.fades
    }

    /// Remaining play time at which fade-out begins.
    pub fn lead_ms(&self) -> Millis {
        self.fade_out_ms
    }

    /// Select playlist entry `index` and fade it in from silence.
    pub fn choose_video(&mut self, index: usize, now_ms: Millis, stage: &mut Stage) -> bool {
        if !self.player.set_current(index, now_ms) {
            tracing::warn!(
                index,
                available = self.player.media_count(),
                "no such video"
            );
            return false;
        }
        self.timer.stop();
        self.session.index = Some(index);
        self.session.position_ms = 0;
        self.session.duration_ms = 0;

        stage.video.opacity = 0.0;
        self.player.play(now_ms);
        stage.video.visible = true;
        self.fades
            .start(FadePlan::fade_in(self.fade_in_ms), now_ms, stage);
        self.sync_player(stage);
        self.set_phase(Phase::FadingIn);
        true
    }

    /// Start fading the video out. Ignored while the video is hidden or
    /// already fading out; returns whether a fade started.
    pub fn fade_out(&mut self, now_ms: Millis, stage: &mut Stage) -> bool {
        if !stage.video.visible {
            tracing::debug!("fade-out ignored, video hidden");
            return false;
        }
        if self.session.phase == Phase::FadingOut
            || self.fades.active() == Some(FadeDirection::Out)
        {
            tracing::debug!("fade-out ignored, already fading out");
            return false;
        }
        self.timer.stop();
        self.fades
            .start(FadePlan::fade_out(self.fade_out_ms), now_ms, stage);
        self.sync_player(stage);
        self.set_phase(Phase::FadingOut);
        true
    }

    /// Handle completion of the fade that moved towards `direction`.
    pub fn on_fade_finished(&mut self, direction: FadeDirection, now_ms: Millis, stage: &mut Stage) {
        if let Some(running) = self.fades.active() {
            tracing::debug!(?direction, ?running, "stale fade completion ignored");
            return;
        }
        match direction {
            FadeDirection::In => {
                self.set_phase(Phase::PlayingVisible);
                // Zero duration means the media is not loaded yet.
                if self.player.duration_ms() == 0 {
                    tracing::debug!("duration unknown after fade-in, not scheduling fade-out");
                    return;
                }
                self.arm_or_fade_out(now_ms, stage);
            }
            FadeDirection::Out => {
                self.player.stop();
                stage.video.visible = false;
                self.seek_bar.park();
                self.timer.stop();
                self.set_phase(Phase::Stopped);
                self.session.reset();
            }
        }
    }

    /// Move playback to `position_ms`. While playing, re-arms the fade-out
    /// timer if more than the lead time remains and fades out otherwise.
    /// An unknown (zero) duration leaves nothing remaining.
    pub fn seek(&mut self, position_ms: Millis, now_ms: Millis, stage: &mut Stage) {
        if self.session.index.is_none() {
            tracing::debug!("seek ignored, nothing selected");
            return;
        }
        self.player.set_position(position_ms, now_ms);
        if self.player.state() != PlayerState::Playing
            || !matches!(self.session.phase, Phase::FadingIn | Phase::PlayingVisible)
        {
            return;
        }
        self.arm_or_fade_out(now_ms, stage);
    }

    /// Toggle pause on a visible video. Pausing cancels the fade-out timer;
    /// resuming re-arms it from the remaining time.
    pub fn play_pause(&mut self, now_ms: Millis, stage: &mut Stage) {
        if !stage.video.visible || stage.video.opacity < PLAY_PAUSE_MIN_OPACITY {
            return;
        }
        match self.player.state() {
            PlayerState::Playing => {
                self.player.pause(now_ms);
                self.timer.stop();
                tracing::info!("video paused");
            }
            PlayerState::Paused => {
                self.player.play(now_ms);
                tracing::info!("video resumed");
                self.arm_or_fade_out(now_ms, stage);
            }
            PlayerState::Stopped => {}
        }
        self.session.state = self.player.state();
    }

    /// Apply a player notification to the session and seek bar.
    pub fn on_player_event(&mut self, event: PlayerEvent, now_ms: Millis, stage: &mut Stage) {
        match event {
            PlayerEvent::DurationChanged(d) => {
                self.session.duration_ms = d;
                self.seek_bar.maximum = d;
                if d > 0 && self.session.phase == Phase::PlayingVisible && !self.timer.is_active()
                {
                    self.arm_or_fade_out(now_ms, stage);
                }
            }
            PlayerEvent::PositionChanged(p) => {
                self.session.position_ms = p;
                self.seek_bar.value = p;
            }
            PlayerEvent::EndOfMedia if self.session.phase == Phase::FadingOut => {
                tracing::debug!("end of media during fade-out");
            }
            PlayerEvent::EndOfMedia => {
                tracing::debug!("end of media");
                self.fade_out(now_ms, stage);
            }
        }
        self.session.state = self.player.state();
    }

    /// Drain player notifications.
    pub fn poll_player(&mut self, now_ms: Millis) -> Vec<PlayerEvent> {
        self.player.poll_events(now_ms)
    }

    /// Advance the running fade; returns its direction once it completes.
    pub fn tick_fade(&mut self, now_ms: Millis, stage: &mut Stage) -> Option<FadeDirection> {
        let finished = self.fades.tick(now_ms, stage);
        if self.fades.is_running() || finished.is_some() {
            self.sync_player(stage);
        }
        finished
    }

    /// Whether the transition timer fired.
    pub fn poll_timer(&mut self, now_ms: Millis) -> bool {
        self.timer.poll(now_ms)
    }

    fn arm_or_fade_out(&mut self, now_ms: Millis, stage: &mut Stage) {
        if self.session.phase == Phase::FadingOut {
            return;
        }
        let remaining = self
            .player
            .duration_ms()
            .saturating_sub(self.player.position_ms(now_ms));
        if remaining <= self.fade_out_ms {
            self.fade_out(now_ms, stage);
        } else if self.player.state() == PlayerState::Playing {
            self.timer.start(now_ms, remaining - self.fade_out_ms);
            tracing::debug!(in_ms = remaining - self.fade_out_ms, "fade-out scheduled");
        }
    }

    fn sync_player(&mut self, stage: &Stage) {
        self.player
            .set_volume(stage.volume.round().clamp(0.0, 100.0) as u8);
        self.session.state = self.player.state();
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.session.phase != phase {
            tracing::info!(from = ?self.session.phase, to = ?phase, "playback phase");
            self.session.phase = phase;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/tracker.rs"]
mod tests;

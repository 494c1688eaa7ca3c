use crate::{
    config::Config,
    controls::ControlPanel,
    foundation::clock::Millis,
    playback::{player::MediaPlayer, tracker::PlaybackTracker},
    playlist::Playlist,
    runtime::{dispatch::Dispatcher, event::Event},
    stage::{pixmap::Pixmap, scene::Stage},
    wordcloud::{
        gate::WordSubmissionGate,
        generator::{GeneratorSupervisor, Regenerator},
        watcher::ImageRefreshWatcher,
    },
};

/// The whole installation: screen, operator panel, playback and word cloud.
///
/// Nothing here reads the clock or blocks. Callers [`post`](Kiosk::post)
/// operator events and call [`pump`](Kiosk::pump) with the current time,
/// which polls every source and handles the queue to exhaustion.
#[derive(Debug)]
pub struct Kiosk<P, R> {
    stage: Stage,
    panel: ControlPanel,
    tracker: PlaybackTracker<P>,
    watcher: ImageRefreshWatcher,
    gate: WordSubmissionGate,
    generator: GeneratorSupervisor<R>,
    queue: Dispatcher,
}

impl<P: MediaPlayer, R: Regenerator> Kiosk<P, R> {
    /// Assemble the kiosk. A missing or unreadable word cloud image leaves
    /// the picture layer empty until the generator produces one.
    pub fn new(config: &Config, playlist: &Playlist, player: P, regenerator: R) -> Self {
        let pixmap = match Pixmap::load(&config.image_path) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!("starting without word cloud: {e}");
                Pixmap::empty()
            }
        };
        if player.media_count() != playlist.len() {
            tracing::warn!(
                player = player.media_count(),
                playlist = playlist.len(),
                "player and playlist disagree on entry count"
            );
        }

        Self {
            stage: Stage::new(config.width, config.height, pixmap),
            panel: ControlPanel::new(config, playlist),
            tracker: PlaybackTracker::new(player, config),
            watcher: ImageRefreshWatcher::new(&config.image_path, config.image_change_ms),
            gate: WordSubmissionGate::new(config),
            generator: GeneratorSupervisor::new(regenerator),
            queue: Dispatcher::new(),
        }
    }

    /// Screen contents.
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Operator panel contents.
    pub fn panel(&self) -> &ControlPanel {
        &self.panel
    }

    /// Playback state machine.
    pub fn tracker(&self) -> &PlaybackTracker<P> {
        &self.tracker
    }

    /// Word cloud refresh state.
    pub fn watcher(&self) -> &ImageRefreshWatcher {
        &self.watcher
    }

    /// Word input validation.
    pub fn gate(&self) -> &WordSubmissionGate {
        &self.gate
    }

    /// Generator run state.
    pub fn generator(&self) -> &GeneratorSupervisor<R> {
        &self.generator
    }

    /// Mutable access to the generator, for drivers that complete runs by hand.
    pub fn generator_mut(&mut self) -> &mut GeneratorSupervisor<R> {
        &mut self.generator
    }

    /// Events waiting for the next pump.
    pub fn pending(&self) -> &Dispatcher {
        &self.queue
    }

    /// Queue an event for the next pump.
    pub fn post(&mut self, event: Event) {
        self.queue.push(event);
    }

    /// Handle queued events, then poll sources at `now_ms` and handle what
    /// they produced. Returns the number of events handled.
    pub fn pump(&mut self, now_ms: Millis) -> usize {
        let mut handled = self.drain(now_ms);
        self.poll_sources(now_ms);
        handled += self.drain(now_ms);
        handled
    }

    fn drain(&mut self, now_ms: Millis) -> usize {
        let mut handled = 0;
        while let Some(event) = self.queue.pop() {
            self.handle(event, now_ms);
            handled += 1;
        }
        handled
    }

    fn poll_sources(&mut self, now_ms: Millis) {
        let player_events = self.tracker.poll_player(now_ms);
        self.queue.extend(player_events.into_iter().map(Event::Player));
        if let Some(direction) = self.tracker.tick_fade(now_ms, &mut self.stage) {
            self.queue.push(Event::FadeFinished(direction));
        }
        if self.watcher.tick(now_ms, &mut self.stage) {
            self.queue.push(Event::ImageChangeFinished);
        }
        if self.tracker.poll_timer(now_ms) {
            self.queue.push(Event::TransitionTimerFired);
        }
        if let Some(code) = self.generator.poll() {
            self.queue.push(Event::GeneratorExited(code));
        }
    }

    /// Route one event to its handler.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn handle(&mut self, event: Event, now_ms: Millis) {
        let stage = &mut self.stage;
        match event {
            Event::ChooseVideo(index) => {
                self.tracker.choose_video(index, now_ms, stage);
            }
            Event::PressButton(label) => match self.panel.button_index(&label) {
                Some(index) => {
                    tracing::info!(%label, index, "video chosen");
                    self.tracker.choose_video(index, now_ms, stage);
                }
                None => tracing::warn!(%label, "no such video button"),
            },
            Event::Seek(position_ms) => self.tracker.seek(position_ms, now_ms, stage),
            Event::PlayPause => self.tracker.play_pause(now_ms, stage),
            Event::StopVideo | Event::TransitionTimerFired => {
                self.tracker.fade_out(now_ms, stage);
            }
            Event::SubmitWord { text, weight } => {
                self.panel.form.text = text;
                if let Some(weight) = weight {
                    self.panel.form.weight = weight;
                }
                self.submit_form();
            }
            Event::Player(ev) => self.tracker.on_player_event(ev, now_ms, stage),
            Event::FadeFinished(direction) => {
                self.tracker.on_fade_finished(direction, now_ms, stage);
            }
            Event::GeneratorExited(code) => {
                let outcome = self.watcher.on_generator_exit(code, now_ms, stage);
                tracing::debug!(?outcome, "generator exit handled");
            }
            Event::ImageChangeFinished => tracing::debug!("word cloud change finished"),
        }
        self.panel.seek_bar = self.tracker.seek_bar();
    }

    fn submit_form(&mut self) {
        match self.gate.submit(&mut self.panel.form) {
            Ok(submission) if submission.triggers_regeneration() => {
                let request = self.generator.request();
                tracing::debug!(?request, "regeneration requested");
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("word not saved: {e}");
                self.panel.form.message = format!("Ignored input: {e}");
            }
        }
    }

    /// One-line state description for the console.
    pub fn status(&self, now_ms: Millis) -> String {
        let session = self.tracker.session();
        let label = session
            .index
            .and_then(|i| self.panel.buttons.get(i))
            .map(String::as_str)
            .unwrap_or("-");
        let timer = match self.tracker.timer().remaining(now_ms) {
            Some(ms) => format!("{ms}ms"),
            None => "off".to_string(),
        };
        let mut line = format!(
            "phase={:?} video={label} state={} position={}/{}ms fade-out-in={timer} generator={} | {}",
            session.phase,
            session.state,
            session.position_ms,
            session.duration_ms,
            if self.generator.is_running() {
                "running"
            } else {
                "idle"
            },
            self.stage.summary(),
        );
        if !self.panel.form.message.is_empty() {
            line.push_str(" | ");
            line.push_str(&self.panel.form.message);
        }
        line
    }
}

#[cfg(test)]
#[path = "../tests/unit/kiosk.rs"]
mod tests;

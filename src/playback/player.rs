use crate::foundation::clock::Millis;

/// Transport state reported by a media player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerState {
    /// Nothing playing; position rewound.
    Stopped,
    /// Position advancing.
    Playing,
    /// Position frozen.
    Paused,
}

impl std::fmt::Display for PlayerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerState::Stopped => write!(f, "stopped"),
            PlayerState::Playing => write!(f, "playing"),
            PlayerState::Paused => write!(f, "paused"),
        }
    }
}

/// Notifications a player emits while media is loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerEvent {
    /// Length of the current media became known or changed.
    DurationChanged(Millis),
    /// Playback position moved.
    PositionChanged(Millis),
    /// Current media played to its end; the player has stopped.
    EndOfMedia,
}

/// Playback backend driven by the controller.
///
/// Decoding and output happen behind this trait. Methods receive the
/// controller's `now` so that clock-driven implementations stay deterministic.
pub trait MediaPlayer {
    /// Number of playlist entries the player can select.
    fn media_count(&self) -> usize;
    /// Select entry `index` and stop. Returns false for an unknown index.
    fn set_current(&mut self, index: usize, now_ms: Millis) -> bool;
    /// Start or resume playback of the current entry.
    fn play(&mut self, now_ms: Millis);
    /// Freeze playback.
    fn pause(&mut self, now_ms: Millis);
    /// Stop and rewind.
    fn stop(&mut self);
    /// Jump to `position_ms`.
    fn set_position(&mut self, position_ms: Millis, now_ms: Millis);
    /// Output volume, `0..=100`.
    fn set_volume(&mut self, volume: u8);
    /// Current transport state.
    fn state(&self) -> PlayerState;
    /// Current position.
    fn position_ms(&self, now_ms: Millis) -> Millis;
    /// Length of the current entry; zero while unknown.
    fn duration_ms(&self) -> Millis;
    /// Drain notifications produced up to `now_ms`.
    fn poll_events(&mut self, now_ms: Millis) -> Vec<PlayerEvent>;
}

/// Minimum position movement between two `PositionChanged` notifications.
pub const POSITION_NOTIFY_INTERVAL_MS: Millis = 100;

/// Player that tracks a position timeline without decoding anything.
///
/// Durations are known up front (probed, or zero when unknown). The console
/// binary drives it from a monotonic clock; tests drive it by hand.
#[derive(Clone, Debug)]
pub struct TimelinePlayer {
    durations: Vec<Millis>,
    current: Option<usize>,
    state: PlayerState,
    anchor_pos: Millis,
    anchor_at: Millis,
    volume: u8,
    reported_duration: Option<Millis>,
    reported_pos: Option<Millis>,
}

impl TimelinePlayer {
    /// Player over entries with the given durations.
    pub fn new(durations: Vec<Millis>) -> Self {
        Self {
            durations,
            current: None,
            state: PlayerState::Stopped,
            anchor_pos: 0,
            anchor_at: 0,
            volume: 0,
            reported_duration: None,
            reported_pos: None,
        }
    }

    /// Currently selected entry.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Last volume set by the controller.
    pub fn volume(&self) -> u8 {
        self.volume
    }

    fn clamp_to_duration(&self, pos: Millis) -> Millis {
        match self.duration_ms() {
            0 => pos,
            d => pos.min(d),
        }
    }
}

impl MediaPlayer for TimelinePlayer {
    fn media_count(&self) -> usize {
        self.durations.len()
    }

    fn set_current(&mut self, index: usize, _now_ms: Millis) -> bool {
        if index >= self.durations.len() {
            return false;
        }
        self.current = Some(index);
        self.state = PlayerState::Stopped;
        self.anchor_pos = 0;
        self.reported_duration = None;
        self.reported_pos = None;
        true
    }

    fn play(&mut self, now_ms: Millis) {
        if self.current.is_none() || self.state == PlayerState::Playing {
            return;
        }
        self.anchor_at = now_ms;
        self.state = PlayerState::Playing;
    }

    fn pause(&mut self, now_ms: Millis) {
        if self.state != PlayerState::Playing {
            return;
        }
        self.anchor_pos = self.position_ms(now_ms);
        self.state = PlayerState::Paused;
    }

    fn stop(&mut self) {
        self.state = PlayerState::Stopped;
        self.anchor_pos = 0;
        self.reported_pos = None;
    }

    fn set_position(&mut self, position_ms: Millis, now_ms: Millis) {
        self.anchor_pos = self.clamp_to_duration(position_ms);
        self.anchor_at = now_ms;
        // Seeks are always announced, even inside the notify interval.
        self.reported_pos = None;
    }

    fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(100);
    }

    fn state(&self) -> PlayerState {
        self.state
    }

    fn position_ms(&self, now_ms: Millis) -> Millis {
        match self.state {
            PlayerState::Playing => self
                .clamp_to_duration(self.anchor_pos + now_ms.saturating_sub(self.anchor_at)),
            PlayerState::Paused | PlayerState::Stopped => self.anchor_pos,
        }
    }

    fn duration_ms(&self) -> Millis {
        self.current
            .and_then(|i| self.durations.get(i).copied())
            .unwrap_or(0)
    }

    fn poll_events(&mut self, now_ms: Millis) -> Vec<PlayerEvent> {
        let mut out = Vec::new();
        if self.current.is_none() {
            return out;
        }

        let duration = self.duration_ms();
        if self.reported_duration != Some(duration) {
            self.reported_duration = Some(duration);
            out.push(PlayerEvent::DurationChanged(duration));
        }

        let pos = self.position_ms(now_ms);
        let moved = match self.reported_pos {
            None => true,
            Some(last) => pos.abs_diff(last) >= POSITION_NOTIFY_INTERVAL_MS,
        };
        if moved {
            self.reported_pos = Some(pos);
            out.push(PlayerEvent::PositionChanged(pos));
        }

        if self.state == PlayerState::Playing && duration > 0 && pos >= duration {
            if self.reported_pos != Some(pos) {
                out.push(PlayerEvent::PositionChanged(pos));
            }
            self.state = PlayerState::Stopped;
            self.anchor_pos = 0;
            self.reported_pos = None;
            out.push(PlayerEvent::EndOfMedia);
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/player.rs"]
mod tests;

use crate::{foundation::clock::Millis, playback::player::PlayerState};

/// Where the video is in its fade choreography.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Phase {
    /// No video shown; the word cloud is on screen.
    Stopped,
    /// Video appearing.
    FadingIn,
    /// Video fully shown (playing or paused).
    PlayingVisible,
    /// Video receding.
    FadingOut,
}

/// What is playing right now, as last reported by the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PlaybackSession {
    /// Selected playlist entry.
    pub index: Option<usize>,
    /// Last reported position.
    pub position_ms: Millis,
    /// Last reported duration; zero while unknown.
    pub duration_ms: Millis,
    /// Player transport state.
    pub state: PlayerState,
    /// Fade choreography phase.
    pub phase: Phase,
}

impl PlaybackSession {
    /// Nothing selected.
    pub fn new() -> Self {
        Self {
            index: None,
            position_ms: 0,
            duration_ms: 0,
            state: PlayerState::Stopped,
            phase: Phase::Stopped,
        }
    }

    /// Forget the finished video.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for PlaybackSession {
    fn default() -> Self {
        Self::new()
    }
}

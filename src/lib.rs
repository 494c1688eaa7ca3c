//! VideoSwitch drives a two-screen kiosk: a large screen that shows a word
//! cloud image and, on request, plays videos on top of it, and an operator
//! panel with one button per video plus a form for adding words to the cloud.
//!
//! # Flow
//!
//! 1. **Choose**: a button press selects a playlist entry and fades the video in
//!    (video opacity and audio volume up, word cloud down).
//! 2. **Schedule**: once visible, a one-shot timer is armed so that the fade-out
//!    starts exactly one fade-out duration before the video ends.
//! 3. **Recede**: the fade-out mirrors the fade-in; on completion the player
//!    stops and the word cloud is fully shown again.
//! 4. **Regenerate**: accepted words are appended to the word list and an
//!    external generator re-renders the cloud; a changed image cross-fades in.
//!
//! The design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Explicit time**: every transition takes `now` in milliseconds; nothing
//!   reads the clock except the binary's event loop.
//! - **Single-threaded**: one FIFO [`Dispatcher`] serializes operator input and
//!   internal notifications.
//! - **Headless stage**: [`Stage`] and [`ControlPanel`] are plain data that a
//!   front end draws as-is.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod animation;
mod config;
mod controls;
mod foundation;
mod kiosk;
mod media;
mod playback;
mod playlist;
mod runtime;
mod stage;
mod wordcloud;

pub use animation::ease::Ease;
pub use animation::group::{GroupSample, TweenGroup};
pub use animation::tween::Tween;
pub use config::{Config, DEFAULT_WORD_PATTERN, RawOptions, anchored};
pub use controls::{ControlPanel, SeekBar};
pub use foundation::clock::{Clock, ManualClock, Millis, MonotonicClock};
pub use foundation::error::{VideoSwitchError, VideoSwitchResult};
pub use kiosk::Kiosk;
pub use media::probe::{is_ffprobe_on_path, parse_probe_duration, probe_duration_ms, probe_playlist};
pub use playback::fade::{FadeChannel, FadeController, FadeDirection, FadePlan};
pub use playback::player::{
    MediaPlayer, POSITION_NOTIFY_INTERVAL_MS, PlayerEvent, PlayerState, TimelinePlayer,
};
pub use playback::session::{Phase, PlaybackSession};
pub use playback::timer::OneShotTimer;
pub use playback::tracker::{PLAY_PAUSE_MIN_OPACITY, PlaybackTracker};
pub use playlist::{Playlist, PlaylistEntry};
pub use runtime::command::{Command, parse_command};
pub use runtime::dispatch::Dispatcher;
pub use runtime::event::Event;
pub use stage::pixmap::Pixmap;
pub use stage::scene::{PictureLayer, Stage, VideoLayer};
pub use wordcloud::gate::{Submission, WordForm, WordSubmissionGate};
pub use wordcloud::generator::{GeneratorSupervisor, ProcessRegenerator, RegenRequest, Regenerator};
pub use wordcloud::watcher::{ImageRefreshWatcher, RefreshOutcome};
pub use wordcloud::words::{WordEntry, WordList};

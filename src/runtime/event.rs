use crate::{
    foundation::clock::Millis,
    playback::{fade::FadeDirection, player::PlayerEvent},
};

/// Everything the kiosk reacts to. Operator input and internal
/// notifications share one queue and are handled strictly in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Select playlist entry by index.
    ChooseVideo(usize),
    /// Press the video button with this label.
    PressButton(String),
    /// Move the seek slider, ms.
    Seek(Millis),
    /// Toggle pause on the visible video.
    PlayPause,
    /// Fade the current video out.
    StopVideo,
    /// Press "update" with the given form contents. An empty text just
    /// regenerates; a missing weight keeps the form's current weight.
    SubmitWord {
        /// Word field.
        text: String,
        /// Weight field, as typed.
        weight: Option<String>,
    },
    /// Notification from the media player.
    Player(PlayerEvent),
    /// All channels of a video fade reached their end value.
    FadeFinished(FadeDirection),
    /// Remaining play time reached the fade-out lead.
    TransitionTimerFired,
    /// Word cloud generator exited with this code.
    GeneratorExited(i32),
    /// Old word cloud finished fading out.
    ImageChangeFinished,
}

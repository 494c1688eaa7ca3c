/// Convenience result type used across VideoSwitch.
pub type VideoSwitchResult<T> = Result<T, VideoSwitchError>;

/// Top-level error taxonomy used by controller APIs.
#[derive(thiserror::Error, Debug)]
pub enum VideoSwitchError {
    /// Invalid operator input (word text, weight, console command).
    #[error("validation error: {0}")]
    Validation(String),

    /// Unusable configuration value.
    #[error("config error: {0}")]
    Config(String),

    /// Playlist descriptor could not be read or understood.
    #[error("playlist error: {0}")]
    Playlist(String),

    /// Failure starting or observing the word cloud generator.
    #[error("generator error: {0}")]
    Generator(String),

    /// Failure probing or decoding media (videos, pixmaps).
    #[error("media error: {0}")]
    Media(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VideoSwitchError {
    /// Build a [`VideoSwitchError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`VideoSwitchError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`VideoSwitchError::Playlist`] value.
    pub fn playlist(msg: impl Into<String>) -> Self {
        Self::Playlist(msg.into())
    }

    /// Build a [`VideoSwitchError::Generator`] value.
    pub fn generator(msg: impl Into<String>) -> Self {
        Self::Generator(msg.into())
    }

    /// Build a [`VideoSwitchError::Media`] value.
    pub fn media(msg: impl Into<String>) -> Self {
        Self::Media(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

use crate::{
    config::Config, foundation::clock::Millis, playlist::Playlist, wordcloud::gate::WordForm,
};

/// Seek slider bound to the player position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeekBar {
    /// Slider position, ms.
    pub value: Millis,
    /// Slider range end, ms.
    pub maximum: Millis,
}

impl SeekBar {
    /// Slider parked at 0 with a maximum of 1, i.e. nothing loaded.
    pub fn parked() -> Self {
        Self {
            value: 0,
            maximum: 1,
        }
    }

    /// Return to the parked state.
    pub fn park(&mut self) {
        *self = Self::parked();
    }
}

impl Default for SeekBar {
    fn default() -> Self {
        Self::parked()
    }
}

/// Operator window contents, minus anything owned by the playback side.
#[derive(Clone, Debug)]
pub struct ControlPanel {
    /// One button per playlist entry, in playlist order.
    pub buttons: Vec<String>,
    /// Seek slider, mirroring the playback position.
    pub seek_bar: SeekBar,
    /// Word input form.
    pub form: WordForm,
    /// Font size of buttons and inputs.
    pub font_size: u32,
    /// Font size of the message line.
    pub message_font_size: u32,
}

impl ControlPanel {
    /// Panel with a button per entry of `playlist`.
    pub fn new(config: &Config, playlist: &Playlist) -> Self {
        Self {
            buttons: playlist.entries().iter().map(|e| e.label.clone()).collect(),
            seek_bar: SeekBar::parked(),
            form: WordForm::new(config.default_weight),
            font_size: config.font_size,
            message_font_size: config.message_font_size(),
        }
    }

    /// Index of the first button labelled `label`.
    pub fn button_index(&self, label: &str) -> Option<usize> {
        self.buttons.iter().position(|b| b == label)
    }
}

#[cfg(test)]
#[path = "../tests/unit/controls.rs"]
mod tests;

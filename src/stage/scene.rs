use crate::stage::pixmap::Pixmap;

/// Surface the media player renders into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VideoLayer {
    /// Whether the surface is shown at all.
    pub visible: bool,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

/// Layer showing a word cloud pixmap.
#[derive(Clone, Debug)]
pub struct PictureLayer {
    /// Image on the layer.
    pub pixmap: Pixmap,
    /// Whether the layer is shown at all.
    pub visible: bool,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

/// Everything the large screen shows, bottom to top: `picture`, `previous`,
/// `video`. Plus the audio volume of the player.
///
/// The stage is plain data; a rendering front end draws it as-is.
#[derive(Clone, Debug)]
pub struct Stage {
    /// Screen width in pixels.
    pub width: u32,
    /// Screen height in pixels.
    pub height: u32,
    /// Word cloud currently displayed.
    pub picture: PictureLayer,
    /// Old word cloud, only populated while an image change fades it out.
    pub previous: PictureLayer,
    /// Video surface.
    pub video: VideoLayer,
    /// Player volume, `0..=100`.
    pub volume: f64,
}

impl Stage {
    /// Idle stage: word cloud fully shown, video hidden and silent.
    pub fn new(width: u32, height: u32, pixmap: Pixmap) -> Self {
        Self {
            width,
            height,
            picture: PictureLayer {
                pixmap,
                visible: true,
                opacity: 1.0,
            },
            previous: PictureLayer {
                pixmap: Pixmap::empty(),
                visible: false,
                opacity: 0.0,
            },
            video: VideoLayer {
                visible: false,
                opacity: 0.0,
            },
            volume: 0.0,
        }
    }

    /// Video is shown with some opacity, so it at least partly covers the
    /// word cloud.
    pub fn video_prominent(&self) -> bool {
        self.video.visible && self.video.opacity > 0.0
    }

    /// One-line description used by status logging.
    pub fn summary(&self) -> String {
        format!(
            "video={}@{:.2} picture@{:.2} previous={}@{:.2} volume={:.0}",
            if self.video.visible { "shown" } else { "hidden" },
            self.video.opacity,
            self.picture.opacity,
            if self.previous.visible {
                "shown"
            } else {
                "hidden"
            },
            self.previous.opacity,
            self.volume,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/scene.rs"]
mod tests;

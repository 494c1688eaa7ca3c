use std::{path::Path, sync::Arc};

use anyhow::Context as _;

use crate::foundation::error::{VideoSwitchError, VideoSwitchResult};

/// Decoded straight-alpha RGBA8 image shown on a picture layer.
///
/// Cloning is cheap; clones share pixels, and [`Pixmap::ptr_eq`] tells whether
/// two handles refer to the same decoded image.
#[derive(Clone, Debug)]
pub struct Pixmap {
    image: Arc<image::RgbaImage>,
}

impl Pixmap {
    /// A 0x0 image, shown when nothing has been generated yet.
    pub fn empty() -> Self {
        Self {
            image: Arc::new(image::RgbaImage::new(0, 0)),
        }
    }

    /// Wrap an already decoded image.
    pub fn from_rgba(image: image::RgbaImage) -> Self {
        Self {
            image: Arc::new(image),
        }
    }

    /// Decode the image file at `path`.
    pub fn load(path: &Path) -> VideoSwitchResult<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
        let decoded = image::load_from_memory(&bytes).map_err(|e| {
            VideoSwitchError::media(format!("decode image '{}': {e}", path.display()))
        })?;
        Ok(Self::from_rgba(decoded.to_rgba8()))
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// True for the 0x0 placeholder.
    pub fn is_null(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Whether both handles share the same decoded image.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.image, &other.image)
    }
}

impl Default for Pixmap {
    fn default() -> Self {
        Self::empty()
    }
}

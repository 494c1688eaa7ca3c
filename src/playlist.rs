use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{VideoSwitchError, VideoSwitchResult};

/// One button of the playlist.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PlaylistEntry {
    /// Button caption.
    pub label: String,
    /// Video file played by the button.
    pub path: PathBuf,
}

/// Ordered label-to-video mapping read from a JSON object.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct Playlist {
    entries: Vec<PlaylistEntry>,
}

impl Playlist {
    /// Parse a JSON object, keeping document order. Non-string values are
    /// skipped with a warning.
    pub fn from_json_str(json: &str) -> VideoSwitchResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| VideoSwitchError::playlist(format!("parse playlist JSON: {e}")))?;
        let serde_json::Value::Object(map) = value else {
            return Err(VideoSwitchError::playlist(
                "playlist must be a JSON object of label -> video path",
            ));
        };
        if map.is_empty() {
            return Err(VideoSwitchError::playlist("playlist is empty"));
        }

        let mut entries = Vec::with_capacity(map.len());
        for (label, value) in map {
            match value {
                serde_json::Value::String(path) => entries.push(PlaylistEntry {
                    label,
                    path: PathBuf::from(path),
                }),
                other => tracing::warn!(%label, "skipping playlist entry with non-string value {other}"),
            }
        }
        Ok(Self { entries })
    }

    /// Read and parse the playlist file at `path`.
    pub fn try_load(path: &Path) -> VideoSwitchResult<Self> {
        if !path.exists() {
            return Err(VideoSwitchError::playlist(format!(
                "file not found: '{}'",
                path.display()
            )));
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read playlist '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Like [`Playlist::try_load`], but any failure is logged and yields an
    /// empty playlist.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(p) => {
                tracing::info!(entries = p.len(), path = %path.display(), "playlist loaded");
                p
            }
            Err(e) => {
                tracing::warn!("no videos available: {e}");
                Self::default()
            }
        }
    }

    /// Entries in document order.
    pub fn entries(&self) -> &[PlaylistEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../tests/unit/playlist.rs"]
mod tests;

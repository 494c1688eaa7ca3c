use std::path::Path;

use crate::{
    foundation::{
        clock::Millis,
        error::{VideoSwitchError, VideoSwitchResult},
    },
    playlist::Playlist,
};

/// Whether `ffprobe` can be run from `PATH`.
pub fn is_ffprobe_on_path() -> bool {
    std::process::Command::new("ffprobe")
        .arg("-version")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Container duration of `source_path` in milliseconds.
pub fn probe_duration_ms(source_path: &Path) -> VideoSwitchResult<Millis> {
    let out = std::process::Command::new("ffprobe")
        .args(["-v", "error", "-print_format", "json", "-show_format"])
        .arg(source_path)
        .output()
        .map_err(|e| VideoSwitchError::media(format!("failed to run ffprobe: {e}")))?;
    if !out.status.success() {
        return Err(VideoSwitchError::media(format!(
            "ffprobe failed for '{}': {}",
            source_path.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }
    parse_probe_duration(&out.stdout)
}

/// Extract `format.duration` (seconds, as a string) from ffprobe JSON output.
pub fn parse_probe_duration(json: &[u8]) -> VideoSwitchResult<Millis> {
    #[derive(serde::Deserialize)]
    struct ProbeFormat {
        duration: Option<String>,
    }
    #[derive(serde::Deserialize)]
    struct ProbeOut {
        format: Option<ProbeFormat>,
    }

    let parsed: ProbeOut = serde_json::from_slice(json)
        .map_err(|e| VideoSwitchError::media(format!("ffprobe json parse failed: {e}")))?;
    let secs = parsed
        .format
        .and_then(|f| f.duration)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|s| s.is_finite() && *s >= 0.0)
        .ok_or_else(|| VideoSwitchError::media("ffprobe reported no duration"))?;
    Ok((secs * 1000.0).round() as Millis)
}

/// Durations for every playlist entry, in order. Entries that cannot be
/// probed get 0, which the controller treats as "not loaded yet".
pub fn probe_playlist(playlist: &Playlist) -> Vec<Millis> {
    if playlist.is_empty() {
        return Vec::new();
    }
    if !is_ffprobe_on_path() {
        tracing::warn!("ffprobe not found on PATH; video durations unknown");
        return vec![0; playlist.len()];
    }
    playlist
        .entries()
        .iter()
        .map(|entry| match probe_duration_ms(&entry.path) {
            Ok(ms) => {
                tracing::debug!(label = %entry.label, duration_ms = ms, "probed video");
                ms
            }
            Err(e) => {
                tracing::warn!(label = %entry.label, "{e}");
                0
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/media/probe.rs"]
mod tests;

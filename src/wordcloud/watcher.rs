use std::{
    path::{Path, PathBuf},
    time::SystemTime,
};

use crate::{
    animation::{ease::Ease, group::TweenGroup, tween::Tween},
    foundation::clock::Millis,
    stage::{pixmap::Pixmap, scene::Stage},
};

/// What a generator exit did to the displayed word cloud.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Generator reported failure; nothing changed.
    GeneratorFailed(i32),
    /// Image file timestamp did not move; nothing changed.
    Unchanged,
    /// New image loaded straight into the picture layer behind the video.
    Replaced,
    /// New image loaded and the old one is fading out on top of it.
    CrossFading,
    /// Timestamp moved but the file could not be decoded; old image kept.
    Unreadable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PreviousOpacity;

/// Picks up regenerated word cloud images and blends them in.
#[derive(Clone, Debug)]
pub struct ImageRefreshWatcher {
    path: PathBuf,
    last_modified: Option<SystemTime>,
    change_ms: Millis,
    change: Option<TweenGroup<PreviousOpacity>>,
}

impl ImageRefreshWatcher {
    /// Watch `path`, recording its current timestamp as already displayed.
    pub fn new(path: impl Into<PathBuf>, change_ms: Millis) -> Self {
        let path = path.into();
        let last_modified = modified(&path);
        Self {
            path,
            last_modified,
            change_ms,
            change: None,
        }
    }

    /// Image file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Timestamp of the image currently considered displayed.
    pub fn last_modified(&self) -> Option<SystemTime> {
        self.last_modified
    }

    /// Whether the old image is still fading out.
    pub fn is_cross_fading(&self) -> bool {
        self.change.is_some()
    }

    /// Opacity spec of the running image change, if any.
    pub fn change_tween(&self) -> Option<Tween> {
        self.change
            .as_ref()
            .and_then(|g| g.channel(PreviousOpacity).copied())
    }

    /// React to the generator exiting with `exit_code` at `now_ms`.
    pub fn on_generator_exit(
        &mut self,
        exit_code: i32,
        now_ms: Millis,
        stage: &mut Stage,
    ) -> RefreshOutcome {
        if exit_code != 0 {
            tracing::warn!(exit_code, "word cloud generator failed");
            return RefreshOutcome::GeneratorFailed(exit_code);
        }

        let current = modified(&self.path);
        if current == self.last_modified {
            tracing::debug!("word cloud image unchanged");
            return RefreshOutcome::Unchanged;
        }
        self.last_modified = current;

        let pixmap = match Pixmap::load(&self.path) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!("keeping old word cloud: {e}");
                return RefreshOutcome::Unreadable;
            }
        };

        if stage.video_prominent() {
            stage.picture.pixmap = pixmap;
            return RefreshOutcome::Replaced;
        }

        stage.previous.pixmap = stage.picture.pixmap.clone();
        stage.previous.opacity = 1.0;
        stage.previous.visible = true;
        stage.picture.pixmap = pixmap;
        self.change = Some(TweenGroup::start(
            vec![(
                PreviousOpacity,
                Tween::new(self.change_ms, 1.0, 0.0, Ease::InOutQuad),
            )],
            now_ms,
        ));
        tracing::info!(duration_ms = self.change_ms, "word cloud changing");
        RefreshOutcome::CrossFading
    }

    /// Advance the image change. Returns true once, when it completes and
    /// the previous layer has been hidden and released.
    pub fn tick(&mut self, now_ms: Millis, stage: &mut Stage) -> bool {
        let Some(group) = &self.change else {
            return false;
        };
        let sample = group.sample(now_ms);
        if let Some(opacity) = sample.value(PreviousOpacity) {
            stage.previous.opacity = opacity;
        }
        if !sample.finished {
            return false;
        }
        self.change = None;
        stage.previous.visible = false;
        stage.previous.pixmap = Pixmap::empty();
        true
    }
}

fn modified(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

#[cfg(test)]
#[path = "../../tests/unit/wordcloud/watcher.rs"]
mod tests;

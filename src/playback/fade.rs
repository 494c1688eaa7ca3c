use crate::{
    animation::{ease::Ease, group::TweenGroup, tween::Tween},
    foundation::clock::Millis,
    stage::scene::Stage,
};

/// Which edge a video fade moves towards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum FadeDirection {
    /// Video and audio appear, word cloud recedes.
    In,
    /// Video and audio recede, word cloud returns.
    Out,
}

/// Stage property driven by one channel of a video fade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeChannel {
    /// `Stage::video.opacity`, `0..=1`.
    VideoOpacity,
    /// `Stage::volume`, `0..=100`.
    Volume,
    /// `Stage::picture.opacity`, `0..=1`, inverse to the video.
    PictureOpacity,
}

/// The three synchronized channel specs of one fade.
///
/// Built fresh for every fade; never changed once started.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadePlan {
    /// Edge this plan moves towards.
    pub direction: FadeDirection,
    /// Video opacity channel.
    pub video: Tween,
    /// Audio volume channel.
    pub audio: Tween,
    /// Word cloud opacity channel.
    pub picture: Tween,
}

impl FadePlan {
    /// Decelerating fade-in over `duration_ms`.
    pub fn fade_in(duration_ms: Millis) -> Self {
        Self {
            direction: FadeDirection::In,
            video: Tween::new(duration_ms, 0.0, 1.0, Ease::OutQuad),
            audio: Tween::new(duration_ms, 0.0, 100.0, Ease::OutExpo),
            picture: Tween::new(duration_ms, 1.0, 0.0, Ease::InQuad),
        }
    }

    /// Fade-out over `duration_ms`; audio drops late, the word cloud returns early.
    pub fn fade_out(duration_ms: Millis) -> Self {
        Self {
            direction: FadeDirection::Out,
            video: Tween::new(duration_ms, 1.0, 0.0, Ease::InQuad),
            audio: Tween::new(duration_ms, 100.0, 0.0, Ease::InExpo),
            picture: Tween::new(duration_ms, 0.0, 1.0, Ease::OutQuad),
        }
    }

    fn channels(&self) -> Vec<(FadeChannel, Tween)> {
        vec![
            (FadeChannel::VideoOpacity, self.video),
            (FadeChannel::Volume, self.audio),
            (FadeChannel::PictureOpacity, self.picture),
        ]
    }
}

#[derive(Clone, Debug)]
struct RunningFade {
    direction: FadeDirection,
    group: TweenGroup<FadeChannel>,
}

/// Runs at most one video fade at a time and reports its completion once.
#[derive(Clone, Debug, Default)]
pub struct FadeController {
    running: Option<RunningFade>,
}

impl FadeController {
    /// Idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `plan` at `now_ms`, replacing any fade still running, and apply
    /// its start values to `stage`.
    pub fn start(&mut self, plan: FadePlan, now_ms: Millis, stage: &mut Stage) {
        if let Some(prev) = &self.running {
            tracing::debug!(
                replaced = ?prev.direction,
                "fade replaced before completion"
            );
        }
        let group = TweenGroup::start(plan.channels(), now_ms);
        apply(&group, now_ms, stage);
        self.running = Some(RunningFade {
            direction: plan.direction,
            group,
        });
    }

    /// Direction of the running fade, if any.
    pub fn active(&self) -> Option<FadeDirection> {
        self.running.as_ref().map(|r| r.direction)
    }

    /// Whether a fade is running.
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Plan currently driving `channel`, if a fade is running.
    pub fn channel(&self, channel: FadeChannel) -> Option<Tween> {
        self.running
            .as_ref()
            .and_then(|r| r.group.channel(channel).copied())
    }

    /// Advance the running fade to `now_ms`, writing channel values into
    /// `stage`. Returns the direction once, when all three channels are done.
    pub fn tick(&mut self, now_ms: Millis, stage: &mut Stage) -> Option<FadeDirection> {
        let running = self.running.as_ref()?;
        let finished = apply(&running.group, now_ms, stage);
        if !finished {
            return None;
        }
        let direction = running.direction;
        self.running = None;
        Some(direction)
    }
}

fn apply(group: &TweenGroup<FadeChannel>, now_ms: Millis, stage: &mut Stage) -> bool {
    let sample = group.sample(now_ms);
    for (channel, value) in &sample.values {
        match channel {
            FadeChannel::VideoOpacity => stage.video.opacity = *value,
            FadeChannel::Volume => stage.volume = *value,
            FadeChannel::PictureOpacity => stage.picture.opacity = *value,
        }
    }
    sample.finished
}

#[cfg(test)]
#[path = "../../tests/unit/playback/fade.rs"]
mod tests;

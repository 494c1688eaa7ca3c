use crate::{animation::tween::Tween, foundation::clock::Millis};

/// Values of every channel at one instant, plus the join-barrier state.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupSample<K> {
    /// `(channel, value)` in the order the channels were added.
    pub values: Vec<(K, f64)>,
    /// True once every channel has reached its end value.
    pub finished: bool,
}

impl<K: Copy + PartialEq> GroupSample<K> {
    /// Value of one channel, if present.
    pub fn value(&self, key: K) -> Option<f64> {
        self.values
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }
}

/// Parallel tweens started from one instant.
///
/// The group only reports `finished` after the longest channel completes, so
/// completion handlers observe every channel at its end value.
#[derive(Clone, Debug)]
pub struct TweenGroup<K> {
    channels: Vec<(K, Tween)>,
    started_at: Millis,
}

impl<K: Copy + PartialEq> TweenGroup<K> {
    /// Start all `channels` at `now_ms`.
    pub fn start(channels: Vec<(K, Tween)>, now_ms: Millis) -> Self {
        Self {
            channels,
            started_at: now_ms,
        }
    }

    /// Length of the longest channel.
    pub fn duration_ms(&self) -> Millis {
        self.channels
            .iter()
            .map(|(_, tw)| tw.duration_ms)
            .max()
            .unwrap_or(0)
    }

    /// Tween driving `key`, if the group has that channel.
    pub fn channel(&self, key: K) -> Option<&Tween> {
        self.channels
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, tw)| tw)
    }

    /// Sample every channel at `now_ms`.
    pub fn sample(&self, now_ms: Millis) -> GroupSample<K> {
        let elapsed = now_ms.saturating_sub(self.started_at);
        let values = self
            .channels
            .iter()
            .map(|(k, tw)| (*k, tw.sample(elapsed)))
            .collect();
        let finished = self.channels.iter().all(|(_, tw)| tw.is_complete(elapsed));
        GroupSample { values, finished }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/group.rs"]
mod tests;

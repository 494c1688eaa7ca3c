use crate::{animation::ease::Ease, foundation::clock::Millis};

/// One interpolated channel: `start` to `end` over `duration_ms` along `ease`.
///
/// A tween is a pure function of elapsed time; it holds no clock and no target.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tween {
    /// Total length in milliseconds. Zero means "jump to `end`".
    pub duration_ms: Millis,
    /// Value at elapsed 0.
    pub start: f64,
    /// Value at and after `duration_ms`.
    pub end: f64,
    /// Curve applied to normalized time.
    pub ease: Ease,
}

impl Tween {
    /// Build a tween.
    pub fn new(duration_ms: Millis, start: f64, end: f64, ease: Ease) -> Self {
        Self {
            duration_ms,
            start,
            end,
            ease,
        }
    }

    /// Normalized progress in `[0, 1]` after `elapsed_ms`.
    pub fn progress(&self, elapsed_ms: Millis) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (elapsed_ms as f64 / self.duration_ms as f64).clamp(0.0, 1.0)
    }

    /// Interpolated value after `elapsed_ms`.
    pub fn sample(&self, elapsed_ms: Millis) -> f64 {
        let t = self.progress(elapsed_ms);
        if t >= 1.0 {
            return self.end;
        }
        lerp(self.start, self.end, self.ease.apply(t))
    }

    /// Whether the tween has reached its end value.
    pub fn is_complete(&self, elapsed_ms: Millis) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;

/// Named easing curves over normalized time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Constant rate.
    Linear,
    /// Quadratic, accelerating.
    InQuad,
    /// Quadratic, decelerating.
    OutQuad,
    /// Quadratic, accelerating then decelerating.
    InOutQuad,
    /// Cubic, accelerating.
    InCubic,
    /// Cubic, decelerating.
    OutCubic,
    /// Cubic, accelerating then decelerating.
    InOutCubic,
    /// Exponential, accelerating.
    InExpo,
    /// Exponential, decelerating.
    OutExpo,
    /// Exponential, accelerating then decelerating.
    InOutExpo,
}

impl Ease {
    /// Map normalized time `t` (clamped to `[0, 1]`) onto the curve.
    ///
    /// Endpoints are exact: `apply(0.0) == 0.0` and `apply(1.0) == 1.0`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let (curve, shape) = self.parts();
        match shape {
            Shape::In => curve.ease_in(t),
            Shape::Out => 1.0 - curve.ease_in(1.0 - t),
            Shape::InOut if t < 0.5 => curve.ease_in(2.0 * t) / 2.0,
            Shape::InOut => 1.0 - curve.ease_in(2.0 - 2.0 * t) / 2.0,
        }
    }

    fn parts(self) -> (Curve, Shape) {
        match self {
            Self::Linear => (Curve::Power(1), Shape::In),
            Self::InQuad => (Curve::Power(2), Shape::In),
            Self::OutQuad => (Curve::Power(2), Shape::Out),
            Self::InOutQuad => (Curve::Power(2), Shape::InOut),
            Self::InCubic => (Curve::Power(3), Shape::In),
            Self::OutCubic => (Curve::Power(3), Shape::Out),
            Self::InOutCubic => (Curve::Power(3), Shape::InOut),
            Self::InExpo => (Curve::Expo, Shape::In),
            Self::OutExpo => (Curve::Expo, Shape::Out),
            Self::InOutExpo => (Curve::Expo, Shape::InOut),
        }
    }
}

/// Accelerating base curve; the other shapes mirror it.
#[derive(Clone, Copy)]
enum Curve {
    Power(i32),
    Expo,
}

impl Curve {
    fn ease_in(self, t: f64) -> f64 {
        match self {
            Self::Power(n) => t.powi(n),
            // 2^(10t - 10) misses 0 at t = 0
            Self::Expo if t == 0.0 => 0.0,
            Self::Expo => 2f64.powf(10.0 * t - 10.0),
        }
    }
}

#[derive(Clone, Copy)]
enum Shape {
    In,
    Out,
    InOut,
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;

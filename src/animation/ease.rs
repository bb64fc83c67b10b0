use std::f64::consts::PI;

const BACK_OVERSHOOT: f64 = 1.70158;
const BOUNCE_N: f64 = 7.5625;
const BOUNCE_D: f64 = 2.75;

/// Easing functions used to map normalized animation progress.
///
/// Curves follow Robert Penner's formulation. All of them satisfy `f(0) == 0` and `f(1) == 1`;
/// the back and elastic families overshoot `[0, 1]` between the endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Linear interpolation.
    #[default]
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// Quartic ease-in.
    InQuart,
    /// Quartic ease-out.
    OutQuart,
    /// Quartic ease-in/out.
    InOutQuart,
    /// Quintic ease-in.
    InQuint,
    /// Quintic ease-out.
    OutQuint,
    /// Quintic ease-in/out.
    InOutQuint,
    /// Sinusoidal ease-in.
    InSine,
    /// Sinusoidal ease-out.
    OutSine,
    /// Sinusoidal ease-in/out.
    InOutSine,
    /// Exponential ease-in.
    InExpo,
    /// Exponential ease-out.
    OutExpo,
    /// Exponential ease-in/out.
    InOutExpo,
    /// Circular ease-in.
    InCirc,
    /// Circular ease-out.
    OutCirc,
    /// Circular ease-in/out.
    InOutCirc,
    /// Elastic ease-in (period depends on duration).
    InElastic,
    /// Elastic ease-out (period depends on duration).
    OutElastic,
    /// Elastic ease-in/out (period depends on duration).
    InOutElastic,
    /// Back ease-in (undershoots below 0).
    InBack,
    /// Back ease-out (overshoots above 1).
    OutBack,
    /// Back ease-in/out.
    InOutBack,
    /// Bounce ease-in.
    InBounce,
    /// Bounce ease-out.
    OutBounce,
    /// Bounce ease-in/out.
    InOutBounce,
}

impl Ease {
    /// Every easing function, in declaration order.
    pub const ALL: [Ease; 31] = [
        Self::Linear,
        Self::InQuad,
        Self::OutQuad,
        Self::InOutQuad,
        Self::InCubic,
        Self::OutCubic,
        Self::InOutCubic,
        Self::InQuart,
        Self::OutQuart,
        Self::InOutQuart,
        Self::InQuint,
        Self::OutQuint,
        Self::InOutQuint,
        Self::InSine,
        Self::OutSine,
        Self::InOutSine,
        Self::InExpo,
        Self::OutExpo,
        Self::InOutExpo,
        Self::InCirc,
        Self::OutCirc,
        Self::InOutCirc,
        Self::InElastic,
        Self::OutElastic,
        Self::InOutElastic,
        Self::InBack,
        Self::OutBack,
        Self::InOutBack,
        Self::InBounce,
        Self::OutBounce,
        Self::InOutBounce,
    ];

    /// Return `true` for the families whose output leaves `[0, 1]` between the endpoints.
    pub fn overshoots(self) -> bool {
        matches!(
            self,
            Self::InElastic
                | Self::OutElastic
                | Self::InOutElastic
                | Self::InBack
                | Self::OutBack
                | Self::InOutBack
        )
    }

    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        self.apply_for_duration(t, 1.0)
    }

    /// Normalized progress for an animation lasting `duration` seconds.
    ///
    /// Only the elastic family reads `duration`; a non-positive value is treated as one second.
    pub fn apply_for_duration(self, t: f64, duration: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 {
            return 0.0;
        }
        if t == 1.0 {
            return 1.0;
        }
        let d = if duration.is_finite() && duration > 0.0 {
            duration
        } else {
            1.0
        };

        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InQuart => t.powi(4),
            Self::OutQuart => 1.0 - (1.0 - t).powi(4),
            Self::InOutQuart => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(4) / 2.0)
                }
            }
            Self::InQuint => t.powi(5),
            Self::OutQuint => 1.0 - (1.0 - t).powi(5),
            Self::InOutQuint => {
                if t < 0.5 {
                    16.0 * t.powi(5)
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(5) / 2.0)
                }
            }
            Self::InSine => 1.0 - (t * PI / 2.0).cos(),
            Self::OutSine => (t * PI / 2.0).sin(),
            Self::InOutSine => -((PI * t).cos() - 1.0) / 2.0,
            Self::InExpo => 2f64.powf(10.0 * (t - 1.0)),
            Self::OutExpo => 1.0 - 2f64.powf(-10.0 * t),
            Self::InOutExpo => {
                if t < 0.5 {
                    2f64.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2f64.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
            Self::InCirc => 1.0 - (1.0 - t * t).sqrt(),
            Self::OutCirc => (1.0 - (t - 1.0).powi(2)).sqrt(),
            Self::InOutCirc => {
                if t < 0.5 {
                    (1.0 - (1.0 - (2.0 * t).powi(2)).sqrt()) / 2.0
                } else {
                    ((1.0 - (-2.0 * t + 2.0).powi(2)).sqrt() + 1.0) / 2.0
                }
            }
            Self::InElastic => {
                let p = d * 0.3;
                let s = p / 4.0;
                let u = t - 1.0;
                -(2f64.powf(10.0 * u) * ((u * d - s) * (2.0 * PI) / p).sin())
            }
            Self::OutElastic => {
                let p = d * 0.3;
                let s = p / 4.0;
                2f64.powf(-10.0 * t) * ((t * d - s) * (2.0 * PI) / p).sin() + 1.0
            }
            Self::InOutElastic => {
                let p = d * (0.3 * 1.5);
                let s = p / 4.0;
                let u = 2.0 * t - 1.0;
                let wave = ((u * d - s) * (2.0 * PI) / p).sin();
                if u < 0.0 {
                    -0.5 * 2f64.powf(10.0 * u) * wave
                } else {
                    0.5 * 2f64.powf(-10.0 * u) * wave + 1.0
                }
            }
            Self::InBack => {
                let c3 = BACK_OVERSHOOT + 1.0;
                c3 * t * t * t - BACK_OVERSHOOT * t * t
            }
            Self::OutBack => {
                let c3 = BACK_OVERSHOOT + 1.0;
                1.0 + c3 * (t - 1.0).powi(3) + BACK_OVERSHOOT * (t - 1.0).powi(2)
            }
            Self::InOutBack => {
                let c2 = BACK_OVERSHOOT * 1.525;
                if t < 0.5 {
                    ((2.0 * t).powi(2) * ((c2 + 1.0) * 2.0 * t - c2)) / 2.0
                } else {
                    ((2.0 * t - 2.0).powi(2) * ((c2 + 1.0) * (t * 2.0 - 2.0) + c2) + 2.0) / 2.0
                }
            }
            Self::InBounce => 1.0 - bounce_out(1.0 - t),
            Self::OutBounce => bounce_out(t),
            Self::InOutBounce => {
                if t < 0.5 {
                    (1.0 - bounce_out(1.0 - 2.0 * t)) / 2.0
                } else {
                    (1.0 + bounce_out(2.0 * t - 1.0)) / 2.0
                }
            }
        }
    }

    /// Penner-style evaluation: start `b`, change `c`, duration `d`.
    pub fn ease(self, t: f64, b: f64, c: f64, d: f64) -> f64 {
        b + c * self.apply_for_duration(t, d)
    }
}

fn bounce_out(t: f64) -> f64 {
    if t < 1.0 / BOUNCE_D {
        BOUNCE_N * t * t
    } else if t < 2.0 / BOUNCE_D {
        let t = t - 1.5 / BOUNCE_D;
        BOUNCE_N * t * t + 0.75
    } else if t < 2.5 / BOUNCE_D {
        let t = t - 2.25 / BOUNCE_D;
        BOUNCE_N * t * t + 0.9375
    } else {
        let t = t - 2.625 / BOUNCE_D;
        BOUNCE_N * t * t + 0.984375
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;

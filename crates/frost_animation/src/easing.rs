//! Easing functions for animations

use std::fmt;
use std::str::FromStr;

/// Error returned when an easing name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown easing curve `{0}`")]
pub struct ParseEasingError(pub String);

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    /// Overshoots past 1.0 before settling
    EaseOutBack,
    /// Undershoots below 0.0, then overshoots past 1.0
    EaseInOutBack,
    /// Decaying oscillation around 1.0
    ElasticOut,
    BounceOut,
    CubicBezier(f32, f32, f32, f32),
}

const BACK_C1: f32 = 1.70158;
const BACK_C2: f32 = BACK_C1 * 1.525;
const BACK_C3: f32 = BACK_C1 + 1.0;

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    ///
    /// Input is clamped to 0.0..=1.0 and both endpoints map exactly onto
    /// themselves. The output may leave 0.0..=1.0 in between for the back and
    /// elastic curves.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::EaseInCubic => t * t * t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::EaseInQuart => t * t * t * t,
            Easing::EaseOutQuart => 1.0 - (1.0 - t).powi(4),
            Easing::EaseInOutQuart => {
                if t < 0.5 {
                    8.0 * t * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
                }
            }
            Easing::EaseOutBack => {
                1.0 + BACK_C3 * (t - 1.0).powi(3) + BACK_C1 * (t - 1.0).powi(2)
            }
            Easing::EaseInOutBack => {
                if t < 0.5 {
                    ((2.0 * t).powi(2) * ((BACK_C2 + 1.0) * 2.0 * t - BACK_C2)) / 2.0
                } else {
                    ((2.0 * t - 2.0).powi(2) * ((BACK_C2 + 1.0) * (2.0 * t - 2.0) + BACK_C2)
                        + 2.0)
                        / 2.0
                }
            }
            Easing::ElasticOut => {
                let c4 = (2.0 * std::f32::consts::PI) / 3.0;
                2.0_f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * c4).sin() + 1.0
            }
            Easing::BounceOut => bounce_out(t),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier_ease(t, *x1, *y1, *x2, *y2),
        }
    }

    /// Whether the curve can leave 0.0..=1.0 between its endpoints
    pub fn overshoots(&self) -> bool {
        match self {
            Easing::EaseOutBack | Easing::EaseInOutBack | Easing::ElasticOut => true,
            Easing::CubicBezier(_, y1, _, y2) => {
                !(0.0..=1.0).contains(y1) || !(0.0..=1.0).contains(y2)
            }
            _ => false,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
            Easing::EaseInQuad => "ease-in-quad",
            Easing::EaseOutQuad => "ease-out-quad",
            Easing::EaseInOutQuad => "ease-in-out-quad",
            Easing::EaseInCubic => "ease-in-cubic",
            Easing::EaseOutCubic => "ease-out-cubic",
            Easing::EaseInOutCubic => "ease-in-out-cubic",
            Easing::EaseInQuart => "ease-in-quart",
            Easing::EaseOutQuart => "ease-out-quart",
            Easing::EaseInOutQuart => "ease-in-out-quart",
            Easing::EaseOutBack => "ease-out-back",
            Easing::EaseInOutBack => "ease-in-out-back",
            Easing::ElasticOut => "elastic-out",
            Easing::BounceOut => "bounce-out",
            Easing::CubicBezier(..) => "cubic-bezier",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for Easing {
    type Err = ParseEasingError;

    /// Parses kebab-case names (`ease-in-out`) and `cubic-bezier(x1, y1, x2, y2)`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const NAMED: [Easing; 17] = [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::EaseInQuad,
            Easing::EaseOutQuad,
            Easing::EaseInOutQuad,
            Easing::EaseInCubic,
            Easing::EaseOutCubic,
            Easing::EaseInOutCubic,
            Easing::EaseInQuart,
            Easing::EaseOutQuart,
            Easing::EaseInOutQuart,
            Easing::EaseOutBack,
            Easing::EaseInOutBack,
            Easing::ElasticOut,
            Easing::BounceOut,
        ];

        let trimmed = s.trim();
        if let Some(easing) = NAMED.iter().find(|e| e.name() == trimmed) {
            return Ok(*easing);
        }

        let args = trimmed
            .strip_prefix("cubic-bezier(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| ParseEasingError(s.to_string()))?;
        let values = args
            .split(',')
            .map(|v| v.trim().parse::<f32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ParseEasingError(s.to_string()))?;
        match values.as_slice() {
            [x1, y1, x2, y2] => Ok(Easing::CubicBezier(*x1, *y1, *x2, *y2)),
            _ => Err(ParseEasingError(s.to_string())),
        }
    }
}

fn bounce_out(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

/// One axis of a cubic bezier anchored at 0 and 1, kept as polynomial coefficients
struct BezierAxis {
    a: f64,
    b: f64,
    c: f64,
}

impl BezierAxis {
    fn new(p1: f32, p2: f32) -> Self {
        let (p1, p2) = (p1 as f64, p2 as f64);
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        Self {
            a: 1.0 - c - b,
            b,
            c,
        }
    }

    fn at(&self, u: f64) -> f64 {
        ((self.a * u + self.b) * u + self.c) * u
    }

    fn derivative(&self, u: f64) -> f64 {
        (3.0 * self.a * u + 2.0 * self.b) * u + self.c
    }

    /// Parameter `u` whose position on this axis is `x`
    fn solve(&self, x: f64) -> f64 {
        const EPSILON: f64 = 1e-7;

        let mut u = x;
        for _ in 0..8 {
            let err = self.at(u) - x;
            if err.abs() < EPSILON {
                return u;
            }
            let d = self.derivative(u);
            if d.abs() < EPSILON {
                break;
            }
            u -= err / d;
        }

        // Newton stalled on a flat spot; bisect the monotonic x curve instead
        let (mut lo, mut hi) = (0.0, 1.0);
        u = x;
        for _ in 0..20 {
            let here = self.at(u);
            if (here - x).abs() < EPSILON {
                break;
            }
            if here < x {
                lo = u;
            } else {
                hi = u;
            }
            u = 0.5 * (lo + hi);
        }
        u
    }
}

/// CSS-style `cubic-bezier(x1, y1, x2, y2)`, evaluated in f64
fn cubic_bezier_ease(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let u = BezierAxis::new(x1, x2).solve(t as f64);
    BezierAxis::new(y1, y2).at(u) as f32
}

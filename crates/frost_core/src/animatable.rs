//! Interpolation between visual values
//!
//! Every lerp is written as `a * (1 - t) + b * t` so that `t == 0.0` yields `a`
//! and `t == 1.0` yields `b` bit for bit.

use crate::visual::{Brush, Color, CornerRadius, Gradient, GradientStop, Point};

/// A value that can be tweened between two endpoints.
///
/// `t` is the eased progress. It is usually in `0.0..=1.0` but overshooting
/// curves may push it slightly outside; implementations clamp whatever has a
/// bounded valid range.
pub trait Animatable: Clone + PartialEq {
    fn lerp(&self, to: &Self, t: f32) -> Self;
}

#[inline]
pub fn lerp_f32(from: f32, to: f32, t: f32) -> f32 {
    from * (1.0 - t) + to * t
}

impl Animatable for f32 {
    fn lerp(&self, to: &Self, t: f32) -> Self {
        lerp_f32(*self, *to, t)
    }
}

impl Animatable for Point {
    fn lerp(&self, to: &Self, t: f32) -> Self {
        Point::new(lerp_f32(self.x, to.x, t), lerp_f32(self.y, to.y, t))
    }
}

impl Animatable for Color {
    fn lerp(&self, to: &Self, t: f32) -> Self {
        Color::rgba(
            lerp_f32(self.r, to.r, t),
            lerp_f32(self.g, to.g, t),
            lerp_f32(self.b, to.b, t),
            lerp_f32(self.a, to.a, t),
        )
        .clamped()
    }
}

impl Animatable for CornerRadius {
    fn lerp(&self, to: &Self, t: f32) -> Self {
        let corner = |a: f32, b: f32| lerp_f32(a, b, t).max(0.0);
        CornerRadius {
            top_left: corner(self.top_left, to.top_left),
            top_right: corner(self.top_right, to.top_right),
            bottom_right: corner(self.bottom_right, to.bottom_right),
            bottom_left: corner(self.bottom_left, to.bottom_left),
        }
    }
}

impl Animatable for Gradient {
    fn lerp(&self, to: &Self, t: f32) -> Self {
        if self.stops.len() != to.stops.len() {
            return step(self, to, t);
        }
        Gradient {
            start: self.start.lerp(&to.start, t),
            end: self.end.lerp(&to.end, t),
            stops: self
                .stops
                .iter()
                .zip(to.stops.iter())
                .map(|(a, b)| {
                    GradientStop::new(
                        lerp_f32(a.offset, b.offset, t).clamp(0.0, 1.0),
                        a.color.lerp(&b.color, t),
                    )
                })
                .collect(),
        }
    }
}

impl Animatable for Brush {
    fn lerp(&self, to: &Self, t: f32) -> Self {
        match (self, to) {
            (Brush::Solid(a), Brush::Solid(b)) => Brush::Solid(a.lerp(b, t)),
            (Brush::Gradient(a), Brush::Gradient(b)) => Brush::Gradient(a.lerp(b, t)),
            // A solid color is a gradient whose stops all agree.
            (Brush::Solid(a), Brush::Gradient(b)) => {
                if t >= 1.0 {
                    return to.clone();
                }
                if t <= 0.0 {
                    return self.clone();
                }
                Brush::Gradient(b.filled_like(*a).lerp(b, t))
            }
            (Brush::Gradient(a), Brush::Solid(b)) => {
                if t >= 1.0 {
                    return to.clone();
                }
                if t <= 0.0 {
                    return self.clone();
                }
                Brush::Gradient(a.lerp(&a.filled_like(*b), t))
            }
        }
    }
}

/// Discrete switch for values with no continuous path between them
fn step<T: Clone>(from: &T, to: &T, t: f32) -> T {
    if t < 0.5 {
        from.clone()
    } else {
        to.clone()
    }
}

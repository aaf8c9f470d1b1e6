//! Hardcoded fallbacks, the last tier of every resolution chain

use std::time::Duration;

use frost_animation::Easing;
use frost_core::{Brush, Color, CornerRadius, Gradient};

/// Background blur sigma
pub const BLUR: f32 = 10.0;

/// Frost tint opacity
pub const OPACITY: f32 = 0.1;

/// Frost tint color
pub const TINT: Color = Color::WHITE;

/// Uniform corner radius
pub const CORNER_RADIUS: f32 = 16.0;

/// Border stroke width
pub const BORDER_WIDTH: f32 = 1.5;

/// Implicit animation length
pub const ANIMATION_DURATION: Duration = Duration::from_millis(300);

/// Implicit animation curve
pub const EASING: Easing = Easing::EaseInOut;

/// Blur at or below this value gets no backdrop filter
pub const MIN_BLUR_THRESHOLD: f32 = 0.0;

/// Opacity factor applied to disabled controls
pub const DISABLED_OPACITY: f32 = 0.5;

pub fn corner_radius() -> CornerRadius {
    CornerRadius::uniform(CORNER_RADIUS)
}

/// White sheen fading from the top-left to the bottom-right corner
pub fn border() -> Brush {
    Brush::Gradient(Gradient::diagonal(
        Color::WHITE.with_alpha(0.5),
        Color::WHITE.with_alpha(0.1),
    ))
}

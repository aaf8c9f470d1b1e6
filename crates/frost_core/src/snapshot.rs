//! Resolved visual parameters of one glass surface at one instant

use crate::animatable::{lerp_f32, Animatable};
use crate::visual::{Brush, Color, CornerRadius};

/// Fully resolved visual parameters of a glass surface.
///
/// Owned by the component that resolved it and replaced wholesale on every
/// parameter change.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualSnapshot {
    /// Background blur sigma (>= 0)
    pub blur: f32,
    /// Frost tint opacity (0.0 to 1.0)
    pub opacity: f32,
    /// Frost tint color
    pub tint: Color,
    /// Border stroke width (>= 0)
    pub border_width: f32,
    pub corner_radius: CornerRadius,
    pub border: Brush,
}

impl VisualSnapshot {
    /// The tint as it is actually painted: `tint` with its alpha scaled by `opacity`
    pub fn frost_color(&self) -> Color {
        self.tint.with_alpha((self.tint.a * self.opacity).clamp(0.0, 1.0))
    }
}

impl Animatable for VisualSnapshot {
    fn lerp(&self, to: &Self, t: f32) -> Self {
        Self {
            blur: lerp_f32(self.blur, to.blur, t).max(0.0),
            opacity: lerp_f32(self.opacity, to.opacity, t).clamp(0.0, 1.0),
            tint: self.tint.lerp(&to.tint, t),
            border_width: lerp_f32(self.border_width, to.border_width, t).max(0.0),
            corner_radius: self.corner_radius.lerp(&to.corner_radius, t),
            border: self.border.lerp(&to.border, t),
        }
    }
}

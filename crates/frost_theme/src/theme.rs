//! Theme-tier values for glass surfaces

use std::time::Duration;

use frost_animation::Easing;
use frost_core::{Brush, Color, CornerRadius};

use crate::performance::PerformanceMode;

/// Theme-supplied glass parameters.
///
/// Every channel is optional. A theme only names the channels it cares about;
/// the rest fall through to [`defaults`](crate::defaults). `GlassTheme::default()`
/// supplies nothing and stands in for "no theme".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlassTheme {
    pub blur: Option<f32>,
    pub opacity: Option<f32>,
    pub tint: Option<Color>,
    pub corner_radius: Option<CornerRadius>,
    pub border_width: Option<f32>,
    pub border: Option<Brush>,
    pub duration: Option<Duration>,
    pub easing: Option<Easing>,
    pub performance_mode: Option<PerformanceMode>,
    pub disabled_opacity: Option<f32>,
}

impl GlassTheme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blur(mut self, blur: f32) -> Self {
        self.blur = Some(blur);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn tint(mut self, tint: Color) -> Self {
        self.tint = Some(tint);
        self
    }

    pub fn corner_radius(mut self, radius: impl Into<CornerRadius>) -> Self {
        self.corner_radius = Some(radius.into());
        self
    }

    pub fn border_width(mut self, width: f32) -> Self {
        self.border_width = Some(width);
        self
    }

    pub fn border(mut self, border: impl Into<Brush>) -> Self {
        self.border = Some(border.into());
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    pub fn performance_mode(mut self, mode: PerformanceMode) -> Self {
        self.performance_mode = Some(mode);
        self
    }

    pub fn disabled_opacity(mut self, factor: f32) -> Self {
        self.disabled_opacity = Some(factor);
        self
    }

    /// Layer `overrides` on top of this theme, channel by channel
    pub fn merged_with(&self, overrides: &GlassTheme) -> GlassTheme {
        GlassTheme {
            blur: overrides.blur.or(self.blur),
            opacity: overrides.opacity.or(self.opacity),
            tint: overrides.tint.or(self.tint),
            corner_radius: overrides.corner_radius.or(self.corner_radius),
            border_width: overrides.border_width.or(self.border_width),
            border: overrides.border.clone().or_else(|| self.border.clone()),
            duration: overrides.duration.or(self.duration),
            easing: overrides.easing.or(self.easing),
            performance_mode: overrides.performance_mode.or(self.performance_mode),
            disabled_opacity: overrides.disabled_opacity.or(self.disabled_opacity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_supplies_nothing() {
        let theme = GlassTheme::default();
        assert!(theme.blur.is_none());
        assert!(theme.border.is_none());
        assert!(theme.easing.is_none());
    }

    #[test]
    fn test_merge_prefers_overrides_per_channel() {
        let base = GlassTheme::new().blur(12.0).opacity(0.2);
        let overrides = GlassTheme::new().opacity(0.4).tint(Color::BLACK);
        let merged = base.merged_with(&overrides);

        assert_eq!(merged.blur, Some(12.0));
        assert_eq!(merged.opacity, Some(0.4));
        assert_eq!(merged.tint, Some(Color::BLACK));
        assert_eq!(merged.border_width, None);
    }
}

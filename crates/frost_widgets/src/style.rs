//! Per-instance glass props and their resolution

use std::time::Duration;

use frost_animation::Easing;
use frost_core::{Brush, Color, CornerRadius, VisualSnapshot};
use frost_theme::{defaults, resolve};

use crate::context::GlassContext;

/// Explicitly set glass parameters of one component.
///
/// Unset channels fall through to the theme in scope, then to the defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlassStyle {
    pub blur: Option<f32>,
    pub opacity: Option<f32>,
    pub tint: Option<Color>,
    pub corner_radius: Option<CornerRadius>,
    pub border_width: Option<f32>,
    pub border: Option<Brush>,
    pub duration: Option<Duration>,
    pub easing: Option<Easing>,
}

impl GlassStyle {
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

    /// Resolve every visual channel against `ctx`.
    ///
    /// The blur channel comes back already scaled by the performance mode.
    /// Negative scalars are clamped to zero here, before they reach an animator
    /// or the filter cache.
    pub fn resolve(&self, ctx: &GlassContext) -> VisualSnapshot {
        let theme = ctx.theme();
        let blur = resolve(self.blur, theme.blur, defaults::BLUR).max(0.0);

        VisualSnapshot {
            blur: ctx.performance_mode().effective_blur(blur),
            opacity: resolve(self.opacity, theme.opacity, defaults::OPACITY).clamp(0.0, 1.0),
            tint: resolve(self.tint, theme.tint, defaults::TINT),
            border_width: resolve(self.border_width, theme.border_width, defaults::BORDER_WIDTH)
                .max(0.0),
            corner_radius: non_negative_radius(resolve(
                self.corner_radius,
                theme.corner_radius,
                defaults::corner_radius(),
            )),
            border: self
                .border
                .clone()
                .or_else(|| theme.border.clone())
                .unwrap_or_else(defaults::border),
        }
    }

    pub fn resolve_duration(&self, ctx: &GlassContext) -> Duration {
        resolve(self.duration, ctx.theme().duration, defaults::ANIMATION_DURATION)
    }

    pub fn resolve_easing(&self, ctx: &GlassContext) -> Easing {
        resolve(self.easing, ctx.theme().easing, defaults::EASING)
    }
}

fn non_negative_radius(radius: CornerRadius) -> CornerRadius {
    CornerRadius::from_array(radius.to_array().map(|r| r.max(0.0)))
}

//! Built-in glass theme presets

use std::fmt::{Display, Formatter};
use std::time::Duration;

use frost_animation::Easing;
use frost_core::{Brush, Color, CornerRadius, Gradient};

use crate::theme::GlassTheme;

/// Built-in preset catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GlassPreset {
    /// Light frosted panel over bright backgrounds
    Frost,
    /// Dark smoked glass for dark backgrounds
    Smoke,
    /// Barely-there glass with a soft blur
    Clear,
}

impl GlassPreset {
    /// Stable preset id for config/serialization
    pub fn id(self) -> &'static str {
        match self {
            Self::Frost => "frost",
            Self::Smoke => "smoke",
            Self::Clear => "clear",
        }
    }

    /// User-facing display name
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Frost => "Frost",
            Self::Smoke => "Smoke",
            Self::Clear => "Clear",
        }
    }

    /// Full preset list
    pub fn all() -> &'static [GlassPreset] {
        const PRESETS: [GlassPreset; 3] =
            [GlassPreset::Frost, GlassPreset::Smoke, GlassPreset::Clear];
        &PRESETS
    }

    pub fn from_id(id: &str) -> Option<GlassPreset> {
        Self::all().iter().copied().find(|p| p.id() == id)
    }

    /// Build the theme for this preset
    pub fn theme(self) -> GlassTheme {
        match self {
            Self::Frost => GlassTheme::new()
                .blur(12.0)
                .opacity(0.15)
                .tint(Color::WHITE)
                .corner_radius(20.0)
                .border_width(1.5)
                .border(Gradient::diagonal(
                    Color::WHITE.with_alpha(0.6),
                    Color::WHITE.with_alpha(0.1),
                ))
                .duration(Duration::from_millis(300))
                .easing(Easing::EaseInOut),
            Self::Smoke => GlassTheme::new()
                .blur(16.0)
                .opacity(0.35)
                .tint(Color::from_hex(0x101418))
                .corner_radius(16.0)
                .border_width(1.0)
                .border(Gradient::diagonal(
                    Color::WHITE.with_alpha(0.2),
                    Color::WHITE.with_alpha(0.05),
                ))
                .duration(Duration::from_millis(350))
                .easing(Easing::EaseOutCubic),
            Self::Clear => GlassTheme::new()
                .blur(6.0)
                .opacity(0.05)
                .tint(Color::WHITE)
                .corner_radius(CornerRadius::uniform(24.0))
                .border_width(1.0)
                .border(Brush::Solid(Color::WHITE.with_alpha(0.25)))
                .duration(Duration::from_millis(250))
                .easing(Easing::EaseOut),
        }
    }
}

impl Display for GlassPreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

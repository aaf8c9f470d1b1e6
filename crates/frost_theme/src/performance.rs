//! Blur quality/cost switch

use std::fmt;
use std::str::FromStr;

use crate::error::ThemeError;

/// Global quality setting; scales the blur channel and nothing else
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PerformanceMode {
    /// Half-strength blur
    Low,
    /// Full-strength blur
    #[default]
    Medium,
}

impl PerformanceMode {
    pub fn multiplier(self) -> f32 {
        match self {
            PerformanceMode::Low => 0.5,
            PerformanceMode::Medium => 1.0,
        }
    }

    /// Blur after applying this mode's multiplier
    pub fn effective_blur(self, resolved_blur: f32) -> f32 {
        resolved_blur * self.multiplier()
    }

    pub fn id(self) -> &'static str {
        match self {
            PerformanceMode::Low => "low",
            PerformanceMode::Medium => "medium",
        }
    }
}

/// Free-function form of [`PerformanceMode::effective_blur`]
pub fn effective_blur(resolved_blur: f32, mode: PerformanceMode) -> f32 {
    mode.effective_blur(resolved_blur)
}

impl fmt::Display for PerformanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PerformanceMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "low" => Ok(PerformanceMode::Low),
            "medium" => Ok(PerformanceMode::Medium),
            other => Err(ThemeError::InvalidPerformanceMode(other.to_string())),
        }
    }
}

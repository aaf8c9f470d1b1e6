//! Error types for frost_theme

use thiserror::Error;

/// Theme loading errors
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Theme file is not valid TOML or has unexpected keys
    #[error("Theme file parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Theme could not be written back out
    #[error("Theme serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Theme file could not be read
    #[error("Theme file read error: {0}")]
    Io(#[from] std::io::Error),

    /// Color literal is not `#RRGGBB` or `#RRGGBBAA`
    #[error("Invalid color `{0}`, expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),

    /// Easing name not recognized
    #[error(transparent)]
    InvalidEasing(#[from] frost_animation::ParseEasingError),

    /// Performance mode name not recognized
    #[error("Unknown performance mode `{0}`, expected `low` or `medium`")]
    InvalidPerformanceMode(String),

    /// Numeric value outside its valid range
    #[error("`{key}` = {value} is out of range ({expected})")]
    OutOfRange {
        key: &'static str,
        value: f32,
        expected: &'static str,
    },

    /// `border_colors` must hold at least one color
    #[error("`border_colors` must contain at least one color")]
    EmptyBorder,
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;

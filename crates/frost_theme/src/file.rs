//! TOML theme files
//!
//! ```toml
//! blur = 12.0
//! opacity = 0.15
//! tint = "#FFFFFF"
//! corner_radius = [20.0, 20.0, 0.0, 0.0]
//! border_width = 1.0
//! border_colors = ["#FFFFFF80", "#FFFFFF1A"]
//! duration_ms = 250
//! easing = "ease-out-back"
//! performance_mode = "low"
//! ```
//!
//! Every key is optional. One border color means a solid border; two or more
//! build a top-left to bottom-right gradient with evenly spaced stops.

use std::path::Path;
use std::time::Duration;

use frost_core::{Brush, Color, CornerRadius, Gradient, GradientStop, GradientStops, Point};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};
use crate::theme::GlassTheme;

/// Corner radius as written in a theme file
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RadiusSpec {
    Uniform(f32),
    /// top-left, top-right, bottom-right, bottom-left
    Corners([f32; 4]),
}

/// On-disk shape of a theme
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<RadiusSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_colors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_opacity: Option<f32>,
}

impl GlassTheme {
    /// Parse a theme from TOML text
    pub fn from_toml_str(source: &str) -> Result<GlassTheme> {
        let file: ThemeFile = toml::from_str(source).map_err(|err| {
            tracing::warn!(%err, "failed to parse theme file");
            ThemeError::from(err)
        })?;
        GlassTheme::try_from(file)
    }

    /// Read and parse a TOML theme file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<GlassTheme> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|err| {
            tracing::warn!(path = %path.display(), %err, "failed to read theme file");
            ThemeError::from(err)
        })?;
        let theme = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "loaded glass theme");
        Ok(theme)
    }

    /// Render this theme as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(&ThemeFile::from(self))?)
    }
}

impl TryFrom<ThemeFile> for GlassTheme {
    type Error = ThemeError;

    fn try_from(file: ThemeFile) -> Result<Self> {
        let corner_radius = file.corner_radius.map(|spec| match spec {
            RadiusSpec::Uniform(r) => CornerRadius::uniform(r),
            RadiusSpec::Corners(radii) => CornerRadius::from_array(radii),
        });
        if let Some(radius) = corner_radius {
            for r in radius.to_array() {
                non_negative("corner_radius", r)?;
            }
        }

        Ok(GlassTheme {
            blur: file.blur.map(|v| non_negative("blur", v)).transpose()?,
            opacity: file.opacity.map(|v| unit("opacity", v)).transpose()?,
            tint: file.tint.as_deref().map(parse_color).transpose()?,
            corner_radius,
            border_width: file
                .border_width
                .map(|v| non_negative("border_width", v))
                .transpose()?,
            border: file.border_colors.map(|c| parse_border(&c)).transpose()?,
            duration: file.duration_ms.map(Duration::from_millis),
            easing: file.easing.map(|e| e.parse()).transpose()?,
            performance_mode: file.performance_mode.map(|m| m.parse()).transpose()?,
            disabled_opacity: file
                .disabled_opacity
                .map(|v| unit("disabled_opacity", v))
                .transpose()?,
        })
    }
}

impl From<&GlassTheme> for ThemeFile {
    fn from(theme: &GlassTheme) -> Self {
        ThemeFile {
            blur: theme.blur,
            opacity: theme.opacity,
            tint: theme.tint.map(format_color),
            corner_radius: theme.corner_radius.map(|r| {
                if r.is_uniform() {
                    RadiusSpec::Uniform(r.top_left)
                } else {
                    RadiusSpec::Corners(r.to_array())
                }
            }),
            border_width: theme.border_width,
            border_colors: theme.border.as_ref().map(|brush| match brush {
                Brush::Solid(c) => vec![format_color(*c)],
                Brush::Gradient(g) => g.stops.iter().map(|s| format_color(s.color)).collect(),
            }),
            duration_ms: theme.duration.map(|d| d.as_millis() as u64),
            easing: theme.easing.map(|e| e.to_string()),
            performance_mode: theme.performance_mode.map(|m| m.to_string()),
            disabled_opacity: theme.disabled_opacity,
        }
    }
}

fn non_negative(key: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ThemeError::OutOfRange {
            key,
            value,
            expected: ">= 0",
        })
    }
}

fn unit(key: &'static str, value: f32) -> Result<f32> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ThemeError::OutOfRange {
            key,
            value,
            expected: "0.0..=1.0",
        })
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA`
pub fn parse_color(literal: &str) -> Result<Color> {
    let invalid = || ThemeError::InvalidColor(literal.to_string());
    let hex = literal.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
    match hex.len() {
        6 => Ok(Color::from_hex(value)),
        8 => Ok(Color::from_hex_rgba(value)),
        _ => Err(invalid()),
    }
}

/// Format as `#RRGGBBAA`
pub fn format_color(color: Color) -> String {
    let [r, g, b, a] = color
        .clamped()
        .to_array()
        .map(|c| (c * 255.0).round() as u8);
    format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
}

fn parse_border(colors: &[String]) -> Result<Brush> {
    let parsed = colors
        .iter()
        .map(|c| parse_color(c))
        .collect::<Result<Vec<_>>>()?;
    match parsed.as_slice() {
        [] => Err(ThemeError::EmptyBorder),
        [solid] => Ok(Brush::Solid(*solid)),
        many => {
            let last = (many.len() - 1) as f32;
            let stops: GradientStops = many
                .iter()
                .enumerate()
                .map(|(i, c)| GradientStop::new(i as f32 / last, *c))
                .collect();
            Ok(Brush::Gradient(Gradient {
                start: Point::TOP_LEFT,
                end: Point::BOTTOM_RIGHT,
                stops,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#FFFFFF").unwrap(), Color::WHITE);
        assert_eq!(parse_color("#00000000").unwrap(), Color::TRANSPARENT);
        assert!(parse_color("FFFFFF").is_err());
        assert!(parse_color("#FFF").is_err());
        assert!(parse_color("#GGGGGG").is_err());
        assert!(parse_color("#+FFFFF").is_err());
    }

    #[test]
    fn test_format_color() {
        assert_eq!(format_color(Color::WHITE.with_alpha(0.5)), "#FFFFFF80");
        assert_eq!(format_color(Color::BLACK), "#000000FF");
    }

    #[test]
    fn test_border_shapes() {
        let solid = parse_border(&["#FF0000".to_string()]).unwrap();
        assert_eq!(solid, Brush::Solid(Color::rgb(1.0, 0.0, 0.0)));

        let three = parse_border(&[
            "#FFFFFFFF".to_string(),
            "#FFFFFF80".to_string(),
            "#FFFFFF00".to_string(),
        ])
        .unwrap();
        match three {
            Brush::Gradient(g) => {
                let offsets: Vec<f32> = g.stops.iter().map(|s| s.offset).collect();
                assert_eq!(offsets, vec![0.0, 0.5, 1.0]);
            }
            other => panic!("expected gradient, got {other:?}"),
        }

        assert!(matches!(parse_border(&[]), Err(ThemeError::EmptyBorder)));
    }
}

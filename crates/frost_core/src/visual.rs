//! Visual value types for glass surfaces
//!
//! Colors, corner radii, gradients and brushes. Every type here is a plain
//! value: surfaces replace them wholesale rather than mutating in place.

use smallvec::SmallVec;

// ─────────────────────────────────────────────────────────────────────────────
// Geometry
// ─────────────────────────────────────────────────────────────────────────────

/// 2D point in unit space (0.0..=1.0 across the surface bounds)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const TOP_LEFT: Point = Point::new(0.0, 0.0);
    pub const BOTTOM_RIGHT: Point = Point::new(1.0, 1.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Color
// ─────────────────────────────────────────────────────────────────────────────

/// RGBA color with f32 components (0.0 to 1.0)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from a `0xRRGGBB` value (opaque)
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Create from a `0xRRGGBBAA` value
    pub fn from_hex_rgba(hex: u32) -> Self {
        let a = (hex & 0xFF) as f32 / 255.0;
        Self::from_hex(hex >> 8).with_alpha(a)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Clamp every component into 0.0..=1.0
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Corner radii
// ─────────────────────────────────────────────────────────────────────────────

/// Corner radii for rounded rectangles
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadius {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadius {
    pub const ZERO: CornerRadius = CornerRadius {
        top_left: 0.0,
        top_right: 0.0,
        bottom_right: 0.0,
        bottom_left: 0.0,
    };

    pub fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// Rounded top corners, square bottom corners
    pub fn top(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            ..Self::ZERO
        }
    }

    pub fn from_array(radii: [f32; 4]) -> Self {
        Self {
            top_left: radii[0],
            top_right: radii[1],
            bottom_right: radii[2],
            bottom_left: radii[3],
        }
    }

    pub fn to_array(&self) -> [f32; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }

    pub fn is_uniform(&self) -> bool {
        let [tl, tr, br, bl] = self.to_array();
        tl == tr && tr == br && br == bl
    }
}

impl From<f32> for CornerRadius {
    fn from(radius: f32) -> Self {
        Self::uniform(radius)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Gradients and brushes
// ─────────────────────────────────────────────────────────────────────────────

/// Gradient stop
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient (0.0 to 1.0)
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Stops are almost always two or three entries; keep them inline.
pub type GradientStops = SmallVec<[GradientStop; 4]>;

/// Linear gradient between two points in unit space
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    pub start: Point,
    pub end: Point,
    pub stops: GradientStops,
}

impl Gradient {
    /// Create a simple linear gradient between two colors
    pub fn linear_simple(start: Point, end: Point, from: Color, to: Color) -> Self {
        let mut stops = GradientStops::new();
        stops.push(GradientStop::new(0.0, from));
        stops.push(GradientStop::new(1.0, to));
        Self { start, end, stops }
    }

    /// Top-left to bottom-right gradient, the usual glass border sheen
    pub fn diagonal(from: Color, to: Color) -> Self {
        Self::linear_simple(Point::TOP_LEFT, Point::BOTTOM_RIGHT, from, to)
    }

    /// A gradient with this geometry whose every stop is `color`
    pub fn filled_like(&self, color: Color) -> Self {
        Self {
            start: self.start,
            end: self.end,
            stops: self
                .stops
                .iter()
                .map(|stop| GradientStop::new(stop.offset, color))
                .collect(),
        }
    }
}

/// Border paint: a single color or a gradient
#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    Gradient(Gradient),
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

impl From<Gradient> for Brush {
    fn from(gradient: Gradient) -> Self {
        Brush::Gradient(gradient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_rgba() {
        let c = Color::from_hex_rgba(0xFF000080);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_clamped() {
        let c = Color::rgba(1.5, -0.2, 0.5, 2.0).clamped();
        assert_eq!(c, Color::rgba(1.0, 0.0, 0.5, 1.0));
    }

    #[test]
    fn test_corner_radius_top() {
        let r = CornerRadius::top(24.0);
        assert_eq!(r.to_array(), [24.0, 24.0, 0.0, 0.0]);
        assert!(!r.is_uniform());
        assert!(CornerRadius::uniform(8.0).is_uniform());
    }

    #[test]
    fn test_filled_like_keeps_geometry() {
        let g = Gradient::diagonal(Color::WHITE, Color::BLACK);
        let filled = g.filled_like(Color::TRANSPARENT);
        assert_eq!(filled.start, g.start);
        assert_eq!(filled.stops.len(), 2);
        assert!(filled.stops.iter().all(|s| s.color == Color::TRANSPARENT));
    }
}

//! Frost Core Types
//!
//! Value types shared by every frost crate:
//!
//! - **Visual values**: [`Color`], [`CornerRadius`], [`Gradient`], [`Brush`]
//! - **Interpolation**: the [`Animatable`] trait with endpoint-exact lerps
//! - **Snapshots**: [`VisualSnapshot`], the resolved parameters of a glass surface
//!
//! # Example
//!
//! ```rust
//! use frost_core::{Animatable, Color};
//!
//! let from = Color::rgba(1.0, 1.0, 1.0, 0.1);
//! let to = Color::rgba(1.0, 1.0, 1.0, 0.3);
//! assert_eq!(from.lerp(&to, 1.0), to);
//! ```

pub mod animatable;
pub mod snapshot;
pub mod visual;

pub use animatable::{lerp_f32, Animatable};
pub use snapshot::VisualSnapshot;
pub use visual::{Brush, Color, CornerRadius, Gradient, GradientStop, GradientStops, Point};

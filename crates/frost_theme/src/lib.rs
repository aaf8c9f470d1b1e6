//! Frost Theme System
//!
//! Where glass parameters come from when a component does not set them.
//!
//! # Overview
//!
//! Every visual channel resolves independently through three tiers:
//!
//! 1. the value set explicitly on the component
//! 2. the value supplied by the [`GlassTheme`] in scope
//! 3. the hardcoded fallback in [`defaults`]
//!
//! ```rust
//! use frost_theme::{defaults, resolve, GlassTheme};
//!
//! let theme = GlassTheme::new().opacity(0.2);
//! assert_eq!(resolve(None, theme.opacity, defaults::OPACITY), 0.2);
//! assert_eq!(resolve(None, theme.blur, defaults::BLUR), defaults::BLUR);
//! ```
//!
//! The blur channel is additionally scaled by the [`PerformanceMode`] before it
//! reaches the filter cache or an animator.
//!
//! # Theme files
//!
//! Themes can be loaded from TOML, see [`file`]:
//!
//! ```rust,ignore
//! let theme = GlassTheme::from_toml_file("glass.toml")?;
//! ```

pub mod defaults;
pub mod error;
pub mod file;
pub mod performance;
pub mod presets;
pub mod resolve;
pub mod theme;

pub use error::{Result, ThemeError};
pub use file::{RadiusSpec, ThemeFile};
pub use performance::{effective_blur, PerformanceMode};
pub use presets::GlassPreset;
pub use resolve::resolve;
pub use theme::GlassTheme;

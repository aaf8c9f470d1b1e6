//! Frost Paint Primitives
//!
//! Backdrop filtering for glass surfaces.
//!
//! - [`BlurFilter`]: separable gaussian with per-axis sigma and a [`TileMode`]
//!   for out-of-bounds sampling
//! - [`FilterCache`]: bounded, insertion-ordered store that lets every surface
//!   with the same radii share one filter

pub mod blur;
pub mod cache;
pub mod error;

pub use blur::{check_rgba8, BlurFilter, TileMode};
pub use cache::{FilterCache, FilterHandle, FilterKey, DEFAULT_CAPACITY};
pub use error::{PaintError, Result};

//! Frost Animation System
//!
//! Implicit animation of glass surface parameters.
//!
//! # Features
//!
//! - **Easing**: standard, overshooting and cubic-bezier curves
//! - **Property animators**: one shared clock per component, re-based from the
//!   live value when a new target arrives mid-flight
//! - **Scheduler**: attach/detach lifecycle and per-frame ticking

pub mod animator;
pub mod easing;
pub mod scheduler;

pub use animator::{AnimationStatus, PropertyAnimator};
pub use easing::{Easing, ParseEasingError};
pub use scheduler::{AnimationScheduler, AnimatorId};

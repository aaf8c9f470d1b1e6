//! Three-tier override resolution

/// Pick the explicit value, else the theme value, else the hardcoded default.
///
/// Each channel resolves on its own; nothing is merged inside a channel.
#[inline]
pub fn resolve<T>(explicit: Option<T>, theme: Option<T>, default: T) -> T {
    explicit.or(theme).unwrap_or(default)
}

//! Explicit build context
//!
//! Everything a widget needs besides its own props travels in a
//! [`GlassContext`]: the theme in scope, the performance mode and the filter
//! cache. Nested scopes derive a new context instead of searching ancestors.

use std::sync::Arc;

use frost_paint::{FilterCache, FilterHandle};
use frost_theme::{defaults, GlassTheme, PerformanceMode};

/// Theme, performance mode and filter cache for one build pass
#[derive(Clone, Debug)]
pub struct GlassContext {
    theme: Arc<GlassTheme>,
    performance: PerformanceMode,
    filters: Arc<FilterCache>,
    blur_threshold: f32,
}

impl GlassContext {
    /// Context over `theme` using the process-wide filter cache.
    ///
    /// The performance mode comes from the theme when it names one.
    pub fn new(theme: GlassTheme) -> Self {
        Self {
            performance: theme.performance_mode.unwrap_or_default(),
            theme: Arc::new(theme),
            filters: FilterCache::shared(),
            blur_threshold: defaults::MIN_BLUR_THRESHOLD,
        }
    }

    /// Use an injected cache instead of the process-wide one
    pub fn with_filter_cache(mut self, filters: Arc<FilterCache>) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_performance_mode(mut self, mode: PerformanceMode) -> Self {
        self.performance = mode;
        self
    }

    /// Blur values at or below `threshold` render without a backdrop filter
    pub fn with_blur_threshold(mut self, threshold: f32) -> Self {
        self.blur_threshold = threshold;
        self
    }

    /// A nested scope whose theme layers `overrides` over this one
    pub fn scoped(&self, overrides: &GlassTheme) -> Self {
        let mut scope = self.clone();
        scope.theme = Arc::new(self.theme.merged_with(overrides));
        if let Some(mode) = overrides.performance_mode {
            scope.performance = mode;
        }
        scope
    }

    pub fn theme(&self) -> &GlassTheme {
        &self.theme
    }

    pub fn performance_mode(&self) -> PerformanceMode {
        self.performance
    }

    pub fn filters(&self) -> &Arc<FilterCache> {
        &self.filters
    }

    pub fn blur_threshold(&self) -> f32 {
        self.blur_threshold
    }

    /// The backdrop filter for an effective blur value, if it needs one
    pub fn backdrop_filter(&self, blur: f32) -> Option<FilterHandle> {
        (blur > self.blur_threshold).then(|| self.filters.get_or_create(blur, blur))
    }
}

impl Default for GlassContext {
    fn default() -> Self {
        Self::new(GlassTheme::default())
    }
}

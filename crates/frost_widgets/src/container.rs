//! Static glass container

use crate::context::GlassContext;
use crate::render::{RenderNode, SurfaceRole};
use crate::style::GlassStyle;
use crate::widget::{glass_layer, Widget};

/// Frosted surface wrapping arbitrary children
#[derive(Default)]
pub struct GlassContainer {
    pub style: GlassStyle,
    pub padding: (f32, f32),
    children: Vec<Box<dyn Widget>>,
    labels: Vec<String>,
}

impl GlassContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(mut self, style: GlassStyle) -> Self {
        self.style = style;
        self
    }

    pub fn padding(mut self, horizontal: f32, vertical: f32) -> Self {
        self.padding = (horizontal, vertical);
        self
    }

    pub fn child(mut self, child: impl Widget + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Add a plain text child
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.labels.push(text.into());
        self
    }
}

impl Widget for GlassContainer {
    fn build(&self, ctx: &GlassContext) -> RenderNode {
        let mut layer = glass_layer(SurfaceRole::Container, &self.style, ctx);
        layer.padding = self.padding;
        layer.children = self
            .children
            .iter()
            .map(|child| child.build(ctx))
            .chain(self.labels.iter().map(|text| RenderNode::text(text.as_str())))
            .collect();
        RenderNode::Glass(layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frost_paint::FilterCache;
    use std::sync::Arc;

    #[test]
    fn test_nested_containers_share_filter() {
        let ctx = GlassContext::default().with_filter_cache(Arc::new(FilterCache::new()));
        let tree = GlassContainer::new()
            .style(GlassStyle::new().blur(6.0))
            .child(GlassContainer::new().style(GlassStyle::new().blur(6.0)))
            .text("hello")
            .build(&ctx);

        let outer = tree.as_glass().unwrap();
        let inner = outer.children[0].as_glass().unwrap();
        assert!(Arc::ptr_eq(
            outer.backdrop.as_ref().unwrap(),
            inner.backdrop.as_ref().unwrap()
        ));
        assert_eq!(ctx.filters().len(), 1);
        assert!(matches!(&outer.children[1], RenderNode::Text { text, .. } if text == "hello"));
    }

    #[test]
    fn test_zero_blur_has_no_backdrop() {
        let ctx = GlassContext::default().with_filter_cache(Arc::new(FilterCache::new()));
        let tree = GlassContainer::new()
            .style(GlassStyle::new().blur(0.0))
            .build(&ctx);
        assert!(tree.as_glass().unwrap().backdrop.is_none());
        assert!(ctx.filters().is_empty());
    }
}

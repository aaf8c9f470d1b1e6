//! Glass card

use crate::context::GlassContext;
use crate::render::{RenderNode, SurfaceRole};
use crate::style::GlassStyle;
use crate::widget::{glass_layer, Widget};

const DEFAULT_PADDING: f32 = 16.0;

/// Padded glass panel with an optional title line above its body
pub struct GlassCard {
    pub style: GlassStyle,
    pub padding: f32,
    title: Option<String>,
    body: Vec<Box<dyn Widget>>,
}

impl GlassCard {
    pub fn new() -> Self {
        Self {
            style: GlassStyle::default(),
            padding: DEFAULT_PADDING,
            title: None,
            body: Vec::new(),
        }
    }

    pub fn style(mut self, style: GlassStyle) -> Self {
        self.style = style;
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn child(mut self, child: impl Widget + 'static) -> Self {
        self.body.push(Box::new(child));
        self
    }
}

impl Default for GlassCard {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for GlassCard {
    fn build(&self, ctx: &GlassContext) -> RenderNode {
        let mut layer = glass_layer(SurfaceRole::Card, &self.style, ctx);
        layer.padding = (self.padding, self.padding);
        layer.children = self
            .title
            .iter()
            .map(|title| RenderNode::text(title.as_str()))
            .chain(self.body.iter().map(|child| child.build(ctx)))
            .collect();
        RenderNode::Glass(layer)
    }
}

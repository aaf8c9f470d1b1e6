//! Glass app bar

use frost_core::CornerRadius;

use crate::context::GlassContext;
use crate::render::{RenderNode, SurfaceRole};
use crate::style::GlassStyle;
use crate::widget::{glass_layer, Widget};

pub const APP_BAR_HEIGHT: f32 = 56.0;

/// Full-width bar with a title and trailing actions.
///
/// Corners are square unless the style sets a radius explicitly; the theme
/// radius does not apply to bars.
pub struct GlassAppBar {
    pub title: String,
    pub style: GlassStyle,
    pub height: f32,
    actions: Vec<Box<dyn Widget>>,
}

impl GlassAppBar {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            style: GlassStyle::default(),
            height: APP_BAR_HEIGHT,
            actions: Vec::new(),
        }
    }

    pub fn style(mut self, style: GlassStyle) -> Self {
        self.style = style;
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn action(mut self, action: impl Widget + 'static) -> Self {
        self.actions.push(Box::new(action));
        self
    }
}

impl Widget for GlassAppBar {
    fn build(&self, ctx: &GlassContext) -> RenderNode {
        let mut style = self.style.clone();
        if style.corner_radius.is_none() {
            style.corner_radius = Some(CornerRadius::ZERO);
        }

        let mut layer = glass_layer(SurfaceRole::AppBar, &style, ctx);
        layer.height = Some(self.height);
        layer.padding = (16.0, 0.0);
        layer.children.push(RenderNode::text(self.title.as_str()));
        if !self.actions.is_empty() {
            layer
                .children
                .push(RenderNode::Row(self.actions.iter().map(|a| a.build(ctx)).collect()));
        }
        RenderNode::Glass(layer)
    }
}

//! Glass bottom sheet

use frost_core::{Color, CornerRadius};
use frost_theme::{defaults, resolve};

use crate::context::GlassContext;
use crate::render::{RenderNode, SurfaceRole};
use crate::style::GlassStyle;
use crate::widget::{glass_layer, Widget};

const HANDLE_WIDTH: f32 = 36.0;
const HANDLE_HEIGHT: f32 = 4.0;

/// Sheet anchored to the bottom edge: only the top corners are rounded
pub struct GlassBottomSheet {
    pub style: GlassStyle,
    pub show_handle: bool,
    content: Vec<Box<dyn Widget>>,
}

impl GlassBottomSheet {
    pub fn new() -> Self {
        Self {
            style: GlassStyle::default(),
            show_handle: true,
            content: Vec::new(),
        }
    }

    pub fn style(mut self, style: GlassStyle) -> Self {
        self.style = style;
        self
    }

    pub fn show_handle(mut self, show: bool) -> Self {
        self.show_handle = show;
        self
    }

    pub fn child(mut self, child: impl Widget + 'static) -> Self {
        self.content.push(Box::new(child));
        self
    }
}

impl Default for GlassBottomSheet {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for GlassBottomSheet {
    fn build(&self, ctx: &GlassContext) -> RenderNode {
        // Keep the resolved top corners, square off the bottom edge
        let resolved = resolve(
            self.style.corner_radius,
            ctx.theme().corner_radius,
            defaults::corner_radius(),
        );
        let mut style = self.style.clone();
        style.corner_radius = Some(CornerRadius {
            top_left: resolved.top_left,
            top_right: resolved.top_right,
            ..CornerRadius::ZERO
        });

        let mut layer = glass_layer(SurfaceRole::BottomSheet, &style, ctx);
        layer.padding = (16.0, 12.0);
        if self.show_handle {
            layer.children.push(RenderNode::Handle {
                width: HANDLE_WIDTH,
                height: HANDLE_HEIGHT,
                color: Color::WHITE.with_alpha(0.4),
            });
        }
        layer
            .children
            .extend(self.content.iter().map(|child| child.build(ctx)));
        RenderNode::Glass(layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_top_corners_survive() {
        let radii = CornerRadius::from_array([8.0, 20.0, 6.0, 6.0]);
        let node = GlassBottomSheet::new()
            .style(GlassStyle::new().corner_radius(radii))
            .build(&GlassContext::default());
        let radius = node.as_glass().unwrap().visual.corner_radius;
        assert_eq!(radius.to_array(), [8.0, 20.0, 0.0, 0.0]);
    }
}

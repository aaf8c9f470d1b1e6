//! Glass button
//!
//! A glass surface around a label. Disabled buttons keep their shape and blur
//! but their frost opacity is multiplied by the disabled factor (theme, else
//! [`defaults::DISABLED_OPACITY`]).

use frost_theme::{defaults, resolve};

use crate::context::GlassContext;
use crate::render::{RenderNode, SurfaceRole};
use crate::style::GlassStyle;
use crate::widget::{glass_layer, Widget};

/// Button configuration
#[derive(Clone, Debug)]
pub struct GlassButton {
    pub label: String,
    pub style: GlassStyle,
    /// Padding (horizontal, vertical)
    pub padding: (f32, f32),
    pub disabled: bool,
}

impl GlassButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: GlassStyle::default(),
            padding: (20.0, 12.0),
            disabled: false,
        }
    }

    pub fn style(mut self, style: GlassStyle) -> Self {
        self.style = style;
        self
    }

    pub fn padding(mut self, horizontal: f32, vertical: f32) -> Self {
        self.padding = (horizontal, vertical);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl Widget for GlassButton {
    fn build(&self, ctx: &GlassContext) -> RenderNode {
        let mut layer = glass_layer(SurfaceRole::Button, &self.style, ctx);
        layer.padding = self.padding;

        let mut label_color = frost_core::Color::WHITE;
        if self.disabled {
            let factor = resolve(None, ctx.theme().disabled_opacity, defaults::DISABLED_OPACITY);
            layer.visual.opacity = (layer.visual.opacity * factor).clamp(0.0, 1.0);
            layer.frost = layer.visual.frost_color();
            label_color = label_color.with_alpha(factor);
        }

        layer.children.push(RenderNode::Text {
            text: self.label.clone(),
            color: label_color,
        });
        RenderNode::Glass(layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frost_theme::GlassTheme;

    #[test]
    fn test_disabled_dims_opacity() {
        let ctx = GlassContext::default();
        let style = GlassStyle::new().opacity(0.4);
        let enabled = GlassButton::new("Go").style(style.clone()).build(&ctx);
        let disabled = GlassButton::new("Go").style(style).disabled(true).build(&ctx);

        let enabled = enabled.as_glass().unwrap();
        let disabled = disabled.as_glass().unwrap();
        assert_eq!(enabled.visual.opacity, 0.4);
        assert_eq!(disabled.visual.opacity, 0.2);
        assert_eq!(disabled.visual.blur, enabled.visual.blur);
    }

    #[test]
    fn test_theme_disabled_factor() {
        let ctx = GlassContext::new(GlassTheme::new().opacity(0.5).disabled_opacity(0.2));
        let node = GlassButton::new("Stop").disabled(true).build(&ctx);
        let layer = node.as_glass().unwrap();
        assert!((layer.visual.opacity - 0.1).abs() < 1e-6);
        assert!(matches!(
            &layer.children[0],
            RenderNode::Text { text, color } if text == "Stop" && color.a == 0.2
        ));
    }
}

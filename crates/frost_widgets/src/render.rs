//! Render tree produced by glass components

use frost_core::{Color, VisualSnapshot};
use frost_paint::FilterHandle;

/// What a glass surface is used as
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceRole {
    Container,
    Card,
    Button,
    AppBar,
    BottomSheet,
}

/// One frosted surface: the blurred backdrop, the tint fill and the border
#[derive(Clone, Debug)]
pub struct GlassLayer {
    pub role: SurfaceRole,
    /// Resolved or live visual parameters
    pub visual: VisualSnapshot,
    /// Tint as painted, alpha already scaled by opacity
    pub frost: Color,
    /// Shared backdrop filter, absent when blur is at or below the threshold
    pub backdrop: Option<FilterHandle>,
    /// Inner spacing (horizontal, vertical)
    pub padding: (f32, f32),
    /// Fixed height, if the surface has one
    pub height: Option<f32>,
    pub children: Vec<RenderNode>,
}

impl GlassLayer {
    pub fn new(role: SurfaceRole, visual: VisualSnapshot, backdrop: Option<FilterHandle>) -> Self {
        Self {
            role,
            frost: visual.frost_color(),
            visual,
            backdrop,
            padding: (0.0, 0.0),
            height: None,
            children: Vec::new(),
        }
    }

    /// Blur an RGBA8 backdrop the way this layer would.
    ///
    /// Without a backdrop filter the pixels come back unchanged. The buffer is
    /// validated either way.
    pub fn blur_backdrop(
        &self,
        rgba: &[u8],
        width: u32,
        height: u32,
    ) -> frost_paint::Result<Vec<u8>> {
        match &self.backdrop {
            Some(filter) => filter.apply(rgba, width, height),
            None => {
                frost_paint::check_rgba8(rgba, width, height)?;
                Ok(rgba.to_vec())
            }
        }
    }
}

/// Node of the tree a component builds
#[derive(Clone, Debug)]
pub enum RenderNode {
    Glass(GlassLayer),
    Text { text: String, color: Color },
    /// Drag handle bar of a bottom sheet
    Handle { width: f32, height: f32, color: Color },
    /// Children laid out in a row
    Row(Vec<RenderNode>),
}

impl RenderNode {
    pub fn text(text: impl Into<String>) -> Self {
        RenderNode::Text {
            text: text.into(),
            color: Color::WHITE,
        }
    }

    pub fn as_glass(&self) -> Option<&GlassLayer> {
        match self {
            RenderNode::Glass(layer) => Some(layer),
            _ => None,
        }
    }

    /// Depth-first count of glass layers in this subtree
    pub fn glass_count(&self) -> usize {
        match self {
            RenderNode::Glass(layer) => {
                1 + layer.children.iter().map(Self::glass_count).sum::<usize>()
            }
            RenderNode::Row(items) => items.iter().map(Self::glass_count).sum(),
            RenderNode::Text { .. } | RenderNode::Handle { .. } => 0,
        }
    }
}

impl From<&str> for RenderNode {
    fn from(text: &str) -> Self {
        RenderNode::text(text)
    }
}

impl From<String> for RenderNode {
    fn from(text: String) -> Self {
        RenderNode::text(text)
    }
}

impl From<GlassLayer> for RenderNode {
    fn from(layer: GlassLayer) -> Self {
        RenderNode::Glass(layer)
    }
}

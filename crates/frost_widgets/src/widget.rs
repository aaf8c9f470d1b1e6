//! Base widget trait

use crate::context::GlassContext;
use crate::render::{GlassLayer, RenderNode, SurfaceRole};
use crate::style::GlassStyle;

/// A declarative glass component.
///
/// `build` is a pure function of the widget's own props and the context; it
/// holds no state between calls.
pub trait Widget {
    fn build(&self, ctx: &GlassContext) -> RenderNode;
}

impl<W: Widget + ?Sized> Widget for Box<W> {
    fn build(&self, ctx: &GlassContext) -> RenderNode {
        (**self).build(ctx)
    }
}

/// Resolve `style`, then attach the shared backdrop filter for the effective blur
pub(crate) fn glass_layer(role: SurfaceRole, style: &GlassStyle, ctx: &GlassContext) -> GlassLayer {
    let visual = style.resolve(ctx);
    let backdrop = ctx.backdrop_filter(visual.blur);
    tracing::trace!(?role, blur = visual.blur, filtered = backdrop.is_some(), "built glass layer");
    GlassLayer::new(role, visual, backdrop)
}

//! Implicitly animated glass container
//!
//! The container owns no timer of its own. Its animator lives in a
//! [`GlassScheduler`] between [`on_attach`](AnimatedGlassContainer::on_attach)
//! and [`on_detach`](AnimatedGlassContainer::on_detach); every prop change
//! re-resolves the style and submits the result as the new target, and
//! [`build`](AnimatedGlassContainer::build) paints whatever the animator
//! currently reports.
//!
//! ```rust
//! use std::time::Duration;
//! use frost_widgets::{AnimatedGlassContainer, GlassContext, GlassScheduler, GlassStyle};
//!
//! let ctx = GlassContext::default();
//! let mut scheduler = GlassScheduler::new();
//! let mut glass = AnimatedGlassContainer::new(GlassStyle::new().blur(4.0));
//! glass.on_attach(&ctx, &mut scheduler);
//!
//! glass.update(GlassStyle::new().blur(12.0), &ctx, &mut scheduler);
//! scheduler.tick_by(Duration::from_secs(1));
//! assert_eq!(glass.live_snapshot(&ctx, &scheduler).blur, 12.0);
//!
//! glass.on_detach(&mut scheduler);
//! assert!(scheduler.is_empty());
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use frost_animation::{AnimationScheduler, AnimatorId, PropertyAnimator};
use frost_core::VisualSnapshot;

use crate::context::GlassContext;
use crate::render::{GlassLayer, RenderNode, SurfaceRole};
use crate::style::GlassStyle;
use crate::widget::Widget;

/// Scheduler driving every animated glass surface of a tree
pub type GlassScheduler = AnimationScheduler<VisualSnapshot>;

pub struct AnimatedGlassContainer {
    style: GlassStyle,
    padding: (f32, f32),
    children: Vec<Box<dyn Widget>>,
    animator: Option<AnimatorId>,
    on_complete: Option<Rc<RefCell<dyn FnMut()>>>,
}

impl AnimatedGlassContainer {
    pub fn new(style: GlassStyle) -> Self {
        Self {
            style,
            padding: (0.0, 0.0),
            children: Vec::new(),
            animator: None,
            on_complete: None,
        }
    }

    pub fn padding(mut self, horizontal: f32, vertical: f32) -> Self {
        self.padding = (horizontal, vertical);
        self
    }

    pub fn child(mut self, child: impl Widget + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Notified once at the end of every animation run.
    ///
    /// The container keeps the callback and hands it to every animator it
    /// attaches, so it survives a detach and re-attach.
    pub fn on_complete(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_complete = Some(Rc::new(RefCell::new(callback)));
        self
    }

    pub fn style(&self) -> &GlassStyle {
        &self.style
    }

    pub fn animator_id(&self) -> Option<AnimatorId> {
        self.animator
    }

    pub fn is_attached(&self) -> bool {
        self.animator.is_some()
    }

    /// Enter the tree: create the animator resting at the resolved style.
    ///
    /// Attaching twice keeps the existing animator.
    pub fn on_attach(&mut self, ctx: &GlassContext, scheduler: &mut GlassScheduler) -> AnimatorId {
        if let Some(id) = self.animator {
            return id;
        }
        let mut animator = PropertyAnimator::new(
            self.style.resolve(ctx),
            self.style.resolve_duration(ctx),
            self.style.resolve_easing(ctx),
        );
        if let Some(callback) = self.on_complete.clone() {
            animator.set_on_complete(move || (&mut *callback.borrow_mut())());
        }
        let id = scheduler.attach(animator);
        self.animator = Some(id);
        id
    }

    /// Replace the props and animate towards the newly resolved values.
    ///
    /// Returns whether a new run started. Before attach the props are only
    /// stored.
    pub fn update(
        &mut self,
        style: GlassStyle,
        ctx: &GlassContext,
        scheduler: &mut GlassScheduler,
    ) -> bool {
        self.style = style;
        self.refresh(ctx, scheduler)
    }

    /// Re-resolve the current props, e.g. after the theme in scope changed.
    ///
    /// New timing only applies to the next run; a run in flight keeps its own.
    pub fn refresh(&mut self, ctx: &GlassContext, scheduler: &mut GlassScheduler) -> bool {
        let Some(animator) = self.animator.and_then(|id| scheduler.get_mut(id)) else {
            return false;
        };
        animator.set_duration(self.style.resolve_duration(ctx));
        animator.set_easing(self.style.resolve_easing(ctx));
        animator.submit(self.style.resolve(ctx))
    }

    /// Live visual parameters; the static resolution when not attached
    pub fn live_snapshot(&self, ctx: &GlassContext, scheduler: &GlassScheduler) -> VisualSnapshot {
        self.animator
            .and_then(|id| scheduler.get(id))
            .map(PropertyAnimator::value)
            .unwrap_or_else(|| self.style.resolve(ctx))
    }

    pub fn build(&self, ctx: &GlassContext, scheduler: &GlassScheduler) -> RenderNode {
        let visual = self.live_snapshot(ctx, scheduler);
        let backdrop = ctx.backdrop_filter(visual.blur);
        let mut layer = GlassLayer::new(SurfaceRole::Container, visual, backdrop);
        layer.padding = self.padding;
        layer.children = self.children.iter().map(|child| child.build(ctx)).collect();
        RenderNode::Glass(layer)
    }

    /// Leave the tree: the animator is dropped immediately, so no tick reaches
    /// the completion callback until the next attach
    pub fn on_detach(&mut self, scheduler: &mut GlassScheduler) -> bool {
        match self.animator.take() {
            Some(id) => scheduler.detach(id).is_some(),
            None => false,
        }
    }
}

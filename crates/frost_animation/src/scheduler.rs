//! Animation scheduler
//!
//! Owns every attached animator and advances the running ones each frame.
//! Components attach an animator when they enter the tree and detach it when
//! they leave; a detached animator is dropped immediately together with its
//! completion callback, so no per-frame work outlives its component.

use std::time::{Duration, Instant};

use frost_core::Animatable;
use slotmap::{new_key_type, SlotMap};

use crate::animator::{AnimationStatus, PropertyAnimator};

new_key_type! {
    pub struct AnimatorId;
}

/// The animation scheduler that ticks all attached animators
pub struct AnimationScheduler<T: Animatable> {
    animators: SlotMap<AnimatorId, PropertyAnimator<T>>,
    last_frame: Instant,
    /// Whether any animator was still running after the previous tick
    was_active: bool,
}

impl<T: Animatable> AnimationScheduler<T> {
    pub fn new() -> Self {
        Self {
            animators: SlotMap::with_key(),
            last_frame: Instant::now(),
            was_active: false,
        }
    }

    /// Attach an animator (the owning component entered the tree)
    pub fn attach(&mut self, animator: PropertyAnimator<T>) -> AnimatorId {
        let id = self.animators.insert(animator);
        tracing::debug!(?id, attached = self.animators.len(), "animator attached");
        id
    }

    /// Detach an animator (the owning component left the tree)
    pub fn detach(&mut self, id: AnimatorId) -> Option<PropertyAnimator<T>> {
        let removed = self.animators.remove(id);
        if removed.is_some() {
            tracing::debug!(?id, attached = self.animators.len(), "animator detached");
        }
        removed
    }

    pub fn get(&self, id: AnimatorId) -> Option<&PropertyAnimator<T>> {
        self.animators.get(id)
    }

    pub fn get_mut(&mut self, id: AnimatorId) -> Option<&mut PropertyAnimator<T>> {
        self.animators.get_mut(id)
    }

    /// Tick all animations using wall-clock time since the previous tick.
    ///
    /// Time spent idle does not count: the first tick after every animator
    /// had settled advances by zero, so a run submitted after a pause starts
    /// from progress 0 on that frame.
    pub fn tick(&mut self) -> usize {
        let now = Instant::now();
        let dt = if self.was_active {
            now - self.last_frame
        } else {
            Duration::ZERO
        };
        self.last_frame = now;
        self.tick_by(dt)
    }

    /// Tick all animations by an explicit frame delta.
    ///
    /// Returns how many runs completed during this tick.
    pub fn tick_by(&mut self, dt: Duration) -> usize {
        let mut completed = 0;
        for (_, animator) in self.animators.iter_mut() {
            if !animator.is_animating() {
                continue;
            }
            if animator.tick(dt) == AnimationStatus::Completed {
                completed += 1;
            }
        }
        self.was_active = self.has_active_animations();
        tracing::trace!(dt_us = dt.as_micros() as u64, completed, "scheduler tick");
        completed
    }

    /// Check if any animations are still active
    pub fn has_active_animations(&self) -> bool {
        self.animators.iter().any(|(_, a)| a.is_animating())
    }

    /// Get the number of attached animators
    pub fn len(&self) -> usize {
        self.animators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animators.is_empty()
    }
}

impl<T: Animatable> Default for AnimationScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

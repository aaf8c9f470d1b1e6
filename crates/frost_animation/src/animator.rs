//! Implicit property animation
//!
//! A [`PropertyAnimator`] tweens one value (usually a whole
//! [`VisualSnapshot`](frost_core::VisualSnapshot)) from a previous snapshot
//! toward a target. All channels of the value share one clock and one easing
//! curve; the live value is always a pure function of
//! `(previous, target, progress, easing)`.
//!
//! ```text
//!              submit(new != target)
//!   Settled ───────────────────────────▶ Animating
//!      ▲                                   │  │
//!      │        progress reaches 1.0       │  │ submit(new != target)
//!      └───────────────────────────────────┘  └──▶ re-base: previous = live value
//! ```

use std::time::Duration;

use frost_core::Animatable;

use crate::easing::Easing;

/// Outcome of advancing an animator by one frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationStatus {
    /// Nothing to do; the live value equals the target
    Idle,
    /// Still interpolating
    Running,
    /// Reached the target during this tick
    Completed,
}

/// Time-driven interpolation between a previous and a target value
pub struct PropertyAnimator<T: Animatable> {
    previous: T,
    target: T,
    elapsed: Duration,
    duration: Duration,
    easing: Easing,
    /// Timing of the run in flight, fixed when the run starts
    run_duration: Duration,
    run_easing: Easing,
    animating: bool,
    on_complete: Option<Box<dyn FnMut()>>,
}

impl<T: Animatable> PropertyAnimator<T> {
    /// Create a settled animator resting at `initial`
    pub fn new(initial: T, duration: Duration, easing: Easing) -> Self {
        Self {
            previous: initial.clone(),
            target: initial,
            elapsed: Duration::ZERO,
            duration,
            easing,
            run_duration: duration,
            run_easing: easing,
            animating: false,
            on_complete: None,
        }
    }

    /// Register a callback fired once each time an animation run finishes
    pub fn on_complete(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    pub fn set_on_complete(&mut self, callback: impl FnMut() + 'static) {
        self.on_complete = Some(Box::new(callback));
    }

    /// Change the duration used by subsequent runs.
    ///
    /// A run already in flight keeps the timing it started with.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Change the curve used by subsequent runs; the run in flight keeps its own
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Duration and curve of the current (or last) run
    pub fn run_timing(&self) -> (Duration, Easing) {
        (self.run_duration, self.run_easing)
    }

    pub fn previous(&self) -> &T {
        &self.previous
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Linear (un-eased) progress of the current run in 0.0..=1.0
    pub fn progress(&self) -> f32 {
        if !self.animating || self.run_duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.run_duration.as_secs_f32()).min(1.0)
    }

    /// Submit a newly resolved target.
    ///
    /// Returns `false` and leaves the run untouched when `target` equals the
    /// current target. Otherwise the live value becomes the new starting
    /// point and the clock restarts.
    pub fn submit(&mut self, target: T) -> bool {
        if target == self.target {
            return false;
        }

        let live = self.value();
        tracing::trace!(
            was_animating = self.animating,
            progress = self.progress(),
            "re-basing animation from live value"
        );
        self.previous = live;
        self.target = target;
        self.elapsed = Duration::ZERO;
        self.run_duration = self.duration;
        self.run_easing = self.easing;
        self.animating = true;
        true
    }

    /// Jump straight to `target` without animating or notifying
    pub fn snap_to(&mut self, target: T) {
        self.previous = target.clone();
        self.target = target;
        self.elapsed = Duration::ZERO;
        self.animating = false;
    }

    /// Advance the clock by `dt`
    pub fn tick(&mut self, dt: Duration) -> AnimationStatus {
        if !self.animating {
            return AnimationStatus::Idle;
        }

        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed < self.run_duration {
            return AnimationStatus::Running;
        }

        self.elapsed = self.run_duration;
        self.animating = false;
        self.previous = self.target.clone();
        tracing::debug!(duration_ms = self.run_duration.as_millis() as u64, "animation settled");
        if let Some(callback) = self.on_complete.as_mut() {
            callback();
        }
        AnimationStatus::Completed
    }

    /// The live value at the current clock position
    pub fn value(&self) -> T {
        if !self.animating {
            return self.target.clone();
        }
        self.sample(self.progress())
    }

    /// The value this run produces at linear `progress` (clamped to 0.0..=1.0)
    pub fn sample(&self, progress: f32) -> T {
        let eased = self.run_easing.apply(progress);
        self.previous.lerp(&self.target, eased)
    }
}

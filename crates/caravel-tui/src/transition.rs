//! Track transition animation.
//!
//! The carousel animates the track offset with one fixed transition: 300 ms
//! with a cubic ease-out. A non-animated update snaps the position
//! immediately (used for resize reactions and live drag feedback).

use std::time::{Duration, Instant};

/// Fixed transition length for animated track moves.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(300);

/// An in-flight transition from one offset percent to another.
#[derive(Debug, Clone)]
struct ActiveTransition {
    start: Instant,
    from: f64,
    to: f64,
}

/// Animates the track offset percent between committed positions.
///
/// Call [`TrackAnimator::go_to`] or [`TrackAnimator::snap`] to set a
/// target, then [`TrackAnimator::update`] each frame to get the current
/// interpolated offset.
#[derive(Debug, Clone, Default)]
pub struct TrackAnimator {
    transition: Option<ActiveTransition>,
    current: f64,
}

impl TrackAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a transition from the current visible offset to `target`.
    /// Already at the target means nothing to animate.
    pub fn go_to(&mut self, target: f64) {
        if (self.current - target).abs() < 1e-9 {
            self.transition = None;
            return;
        }
        self.transition = Some(ActiveTransition {
            start: Instant::now(),
            from: self.current,
            to: target,
        });
    }

    /// Jump to `target` with no transition.
    pub fn snap(&mut self, target: f64) {
        self.transition = None;
        self.current = target;
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Final offset after any in-flight transition.
    pub fn target(&self) -> f64 {
        self.transition.as_ref().map(|t| t.to).unwrap_or(self.current)
    }

    /// Advance the transition and return the current offset percent.
    pub fn update(&mut self) -> f64 {
        if let Some(ref t) = self.transition {
            let p = progress(t.start, TRANSITION_DURATION);
            if p >= 1.0 {
                self.current = t.to;
                self.transition = None;
            } else {
                self.current = lerp(t.from, t.to, ease(p));
            }
        }
        self.current
    }
}

/// Progress through a transition, clamped to [0, 1].
#[inline]
fn progress(start: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let ratio = start.elapsed().as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

#[inline]
fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Cubic ease-out: f(t) = 1 - (1-t)^3
#[inline]
fn ease(t: f64) -> f64 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

//! Pointer-drag session arithmetic.
//!
//! A [`DragSession`] exists only while a pointer drag is active. It tracks
//! the ephemeral track translate in percent; the committed index is never
//! touched until the session settles into a [`DragOutcome`].

/// Fraction of one slide the pointer must travel for a drag to commit a
/// navigation instead of snapping back. Small jitters must not read as an
/// intentional swipe, while a clear partial drag still commits a full step.
pub const COMMIT_THRESHOLD: f64 = 0.2;

/// How a finished drag settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Advance by the effective step (not by one slide).
    Advance,
    /// Retreat by the effective step.
    Retreat,
    /// Snap back to the already-committed index.
    SnapBack,
}

/// State of one active pointer drag.
#[derive(Debug, Clone, Copy)]
pub struct DragSession {
    /// Pointer X at drag start.
    start_x: f64,
    /// Track translate (percent) at drag start.
    start_translate: f64,
    /// Live track translate (percent) under the pointer.
    current_translate: f64,
}

impl DragSession {
    pub fn new(start_x: f64, start_translate: f64) -> Self {
        Self {
            start_x,
            start_translate,
            current_translate: start_translate,
        }
    }

    /// Update the live translate for a pointer at `x`, returning the new
    /// translate percent. `viewport_width` is the viewport extent in the
    /// same units as the pointer X.
    pub fn move_to(&mut self, x: f64, viewport_width: f64) -> f64 {
        if viewport_width > 0.0 {
            let delta_percent = (x - self.start_x) / viewport_width * 100.0;
            self.current_translate = self.start_translate - delta_percent;
        }
        self.current_translate
    }

    pub fn current_translate(&self) -> f64 {
        self.current_translate
    }

    /// Net movement in slide units (positive = dragged towards later
    /// slides).
    pub fn moved_slides(&self, slides_to_show: u32) -> f64 {
        (self.current_translate - self.start_translate) * slides_to_show as f64 / 100.0
    }

    /// Decide how the session settles against the commit threshold.
    pub fn settle(&self, slides_to_show: u32) -> DragOutcome {
        let moved = self.moved_slides(slides_to_show);
        if moved > COMMIT_THRESHOLD {
            DragOutcome::Advance
        } else if moved < -COMMIT_THRESHOLD {
            DragOutcome::Retreat
        } else {
            DragOutcome::SnapBack
        }
    }
}

//! Terminal implementation of the engine's capability trait.

use caravel_core::Surface;

use crate::transition::TrackAnimator;

/// Carousel surface backed by the terminal.
///
/// Holds the rendering-facing side of the carousel state: viewport width in
/// terminal columns, per-slide size, control enablement, and the animated
/// track offset. The widgets read from here; the engine writes through the
/// [`Surface`] trait.
#[derive(Debug, Default)]
pub struct TermSurface {
    viewport_width: f64,
    slide_size_percent: f64,
    prev_enabled: bool,
    next_enabled: bool,
    animator: TrackAnimator,
    pointer_captured: bool,
}

impl TermSurface {
    pub fn new() -> Self {
        Self {
            slide_size_percent: 100.0,
            ..Self::default()
        }
    }

    /// Record the rendered viewport width (terminal columns). The engine's
    /// resize reaction picks it up through `viewport_width()`.
    pub fn set_viewport_width(&mut self, columns: u16) {
        self.viewport_width = columns as f64;
    }

    pub fn slide_size_percent(&self) -> f64 {
        self.slide_size_percent
    }

    pub fn prev_enabled(&self) -> bool {
        self.prev_enabled
    }

    pub fn next_enabled(&self) -> bool {
        self.next_enabled
    }

    /// Advance the transition and return the offset percent to draw at.
    pub fn offset_percent(&mut self) -> f64 {
        self.animator.update()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    pub fn pointer_captured(&self) -> bool {
        self.pointer_captured
    }
}

impl Surface for TermSurface {
    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn set_slide_size(&mut self, percent: f64) {
        self.slide_size_percent = percent;
    }

    fn set_track_offset(&mut self, percent: f64, animate: bool) {
        if animate {
            self.animator.go_to(percent);
        } else {
            self.animator.snap(percent);
        }
    }

    fn set_controls(&mut self, prev_enabled: bool, next_enabled: bool) {
        self.prev_enabled = prev_enabled;
        self.next_enabled = next_enabled;
    }

    fn capture_pointer(&mut self) -> bool {
        // Terminal mouse capture is process-global (enabled at startup), so
        // an active drag already receives every motion event.
        self.pointer_captured = true;
        true
    }

    fn release_pointer(&mut self) {
        self.pointer_captured = false;
    }
}

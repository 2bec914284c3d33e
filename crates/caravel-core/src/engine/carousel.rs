//! The carousel engine: a single state machine over the pure helpers.
//!
//! All state lives here and is mutated exclusively through the engine's
//! own operations; every index change funnels through the normalize gate,
//! and every visual consequence is pushed out through the [`Surface`].

use tracing::{debug, trace};

use super::drag::{DragOutcome, DragSession};
use super::index::normalize;
use super::layout::{compute_max_index, slide_size_percent, track_offset_percent};
use super::resolve::{resolve, LayoutParams};
use super::surface::{PointerKind, Surface};
use crate::config::CarouselConfig;

/// Interactive, responsive slide carousel.
///
/// The slide sequence is fixed at construction. Navigation targets are
/// normalized (clamped, or wrapped when `loop` is configured) into
/// `[0, max_index]`; the effective visible-slide count and step follow the
/// viewport width through the breakpoint table.
pub struct Carousel<S: Surface> {
    config: CarouselConfig,
    surface: S,
    slide_count: usize,
    current_index: usize,
    slides_to_show: u32,
    step: u32,
    max_index: usize,
    drag: Option<DragSession>,
    /// One-shot: the next visual update skips the transition.
    suppress_transition: bool,
    pointer_captured: bool,
}

impl<S: Surface> Carousel<S> {
    /// Build an engine over `slide_count` slides.
    ///
    /// Fails with [`crate::Error::Config`] on zero layout values. Zero
    /// slides is accepted: `max_index` becomes 0 and navigation is a
    /// no-op. Breakpoints are sorted ascending by width once, stably, so a
    /// duplicated width keeps its last-entry-wins evaluation order.
    pub fn new(slide_count: usize, mut config: CarouselConfig, surface: S) -> crate::Result<Self> {
        config.validate()?;
        config.breakpoints.sort_by_key(|bp| bp.width);

        let mut carousel = Self {
            config,
            surface,
            slide_count,
            current_index: 0,
            slides_to_show: 1,
            step: 1,
            max_index: 0,
            drag: None,
            suppress_transition: false,
            pointer_captured: false,
        };

        let params = resolve(carousel.surface.viewport_width(), &carousel.config);
        carousel.apply_layout(params);
        carousel.sync();

        Ok(carousel)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn max_index(&self) -> usize {
        self.max_index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Effective visible-slide count for the current viewport width.
    pub fn slides_to_show(&self) -> u32 {
        self.slides_to_show
    }

    /// Effective advance amount for the current viewport width.
    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Navigate to `target`, normalized into range. With `animate` false
    /// the next visual update snaps without a transition.
    pub fn go_to(&mut self, target: isize, animate: bool) {
        self.current_index = normalize(target, self.max_index, self.config.wrap);
        if !animate {
            self.suppress_transition = true;
        }
        trace!(
            requested = target,
            index = self.current_index,
            animate,
            "carousel go_to"
        );
        self.sync();
    }

    /// Advance by the effective step.
    pub fn advance(&mut self) {
        self.go_to(self.current_index as isize + self.step as isize, true);
    }

    /// Retreat by the effective step.
    pub fn retreat(&mut self) {
        self.go_to(self.current_index as isize - self.step as isize, true);
    }

    /// React to a viewport size change: re-resolve layout parameters,
    /// recompute the index range, then snap the (re-normalized) current
    /// index into place without a transition, so resize ticks never sweep
    /// the track across the screen. Idempotent for an unchanged width.
    pub fn handle_resize(&mut self) {
        let params = resolve(self.surface.viewport_width(), &self.config);
        self.apply_layout(params);
        self.go_to(self.current_index as isize, false);
    }

    /// Idle -> Dragging. Only the primary button opens a drag for
    /// mouse-kind pointers. Pointer capture is requested best-effort;
    /// without it, tracking continues through ordinary move/up events.
    pub fn pointer_down(&mut self, x: f64, kind: PointerKind, primary: bool) {
        if kind == PointerKind::Mouse && !primary {
            return;
        }
        if self.drag.is_some() {
            return;
        }

        let start_translate = track_offset_percent(self.current_index, self.slides_to_show);
        self.drag = Some(DragSession::new(x, start_translate));
        self.pointer_captured = self.surface.capture_pointer();
        trace!(x, start_translate, "drag start");

        // Freeze the track under the pointer before the first move.
        self.surface.set_track_offset(start_translate, false);
    }

    /// Live drag feedback: redraw the track at the ephemeral translate.
    /// The committed index is untouched until the drag settles.
    pub fn pointer_move(&mut self, x: f64) {
        let viewport_width = self.surface.viewport_width();
        if let Some(drag) = self.drag.as_mut() {
            let translate = drag.move_to(x, viewport_width);
            self.surface.set_track_offset(translate, false);
        }
    }

    /// Dragging -> Idle: settle against the commit threshold.
    pub fn pointer_up(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };

        if self.pointer_captured {
            self.surface.release_pointer();
            self.pointer_captured = false;
        }

        let outcome = drag.settle(self.slides_to_show);
        debug!(
            moved_slides = drag.moved_slides(self.slides_to_show),
            ?outcome,
            "drag settled"
        );
        match outcome {
            DragOutcome::Advance => self.advance(),
            DragOutcome::Retreat => self.retreat(),
            DragOutcome::SnapBack => self.go_to(self.current_index as isize, true),
        }
    }

    /// Unconditional drag termination (pointer-cancel or pointer-leave);
    /// settles exactly like pointer-up, whichever arrives first.
    pub fn pointer_cancel(&mut self) {
        self.pointer_up();
    }

    fn apply_layout(&mut self, params: LayoutParams) {
        self.slides_to_show = params.slides_to_show;
        self.step = params.step;
        self.max_index = compute_max_index(self.slide_count, self.slides_to_show);
        self.surface
            .set_slide_size(slide_size_percent(self.slides_to_show));
        debug!(
            slides_to_show = self.slides_to_show,
            step = self.step,
            max_index = self.max_index,
            "layout applied"
        );
    }

    /// Push the committed position and control state to the surface,
    /// consuming the one-shot transition suppression.
    fn sync(&mut self) {
        let offset = track_offset_percent(self.current_index, self.slides_to_show);
        let animate = !self.suppress_transition;
        self.suppress_transition = false;
        self.surface.set_track_offset(offset, animate);

        let at_start = self.current_index == 0;
        let at_end = self.current_index >= self.max_index;
        let wrap = self.config.wrap;
        self.surface
            .set_controls(!(at_start && !wrap), !(at_end && !wrap));
    }
}

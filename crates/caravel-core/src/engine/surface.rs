//! The capability trait the engine drives its environment through.
//!
//! The engine never queries the environment directly; everything it needs
//! (the viewport width) and everything it produces (slide sizing, track
//! positioning, control enablement) goes through [`Surface`]. Tests run the
//! engine against a fake surface with no terminal at all.

/// What kind of pointer opened a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// A mouse pointer; only the primary button starts a drag.
    Mouse,
    /// A touch/pen-style pointer with no button discrimination.
    Touch,
}

/// Environment capabilities required by the carousel engine.
pub trait Surface {
    /// Current viewport width, in whatever unit pointer X coordinates use
    /// (terminal columns for the TUI surface).
    fn viewport_width(&self) -> f64;

    /// Size every slide to `percent` of the viewport width.
    fn set_slide_size(&mut self, percent: f64);

    /// Position the track at `percent` of the viewport width. `animate`
    /// selects the fixed transition; a non-animated call snaps immediately
    /// (used for resize reactions and live drag feedback).
    fn set_track_offset(&mut self, percent: f64, animate: bool);

    /// Reflect whether the previous/next controls accept input.
    fn set_controls(&mut self, prev_enabled: bool, next_enabled: bool);

    /// Request pointer input capture for an active drag. Best-effort: a
    /// surface that cannot capture returns false and drag tracking
    /// continues through ordinary move/up events.
    fn capture_pointer(&mut self) -> bool {
        false
    }

    /// Release a previously granted pointer capture.
    fn release_pointer(&mut self) {}
}

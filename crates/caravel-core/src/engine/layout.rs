//! Pure sizing and positioning math.
//!
//! Every slide is sized to the same fraction of the viewport so exactly
//! `slides_to_show` slides are visible per page; the track is translated by
//! a percentage of the viewport width to bring the target slide into view.

/// Highest valid `current_index`: the last index at which a full page of
/// slides still fits. Saturates at 0 when the deck is smaller than a page.
#[inline]
pub fn compute_max_index(slide_count: usize, slides_to_show: u32) -> usize {
    slide_count.saturating_sub(slides_to_show.max(1) as usize)
}

/// Per-slide size as a percentage fraction of the viewport.
#[inline]
pub fn slide_size_percent(slides_to_show: u32) -> f64 {
    100.0 / slides_to_show.max(1) as f64
}

/// Track translation, in percent of the viewport width, that brings
/// `index` to the left edge of the viewport.
#[inline]
pub fn track_offset_percent(index: usize, slides_to_show: u32) -> f64 {
    index as f64 * 100.0 / slides_to_show.max(1) as f64
}

//! The index normalizer.
//!
//! [`normalize`] is the sole gate through which the engine's current index
//! is updated. It guarantees the `[0, max_index]` range invariant
//! unconditionally, including when the slide count or visible-slide count
//! changes (e.g. on resize) and the previous index is out of range.

/// Bring a candidate index into `[0, max_index]`.
///
/// With `wrap`, an index below 0 wraps to `max_index` and an index above
/// `max_index` wraps to 0; otherwise the index is clamped.
pub fn normalize(index: isize, max_index: usize, wrap: bool) -> usize {
    if wrap {
        if index < 0 {
            return max_index;
        }
        if index > max_index as isize {
            return 0;
        }
    }
    index.clamp(0, max_index as isize) as usize
}

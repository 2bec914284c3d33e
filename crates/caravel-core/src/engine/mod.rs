//! The carousel engine.
//!
//! A single state machine plus pure computation functions:
//!
//! - `resolve` - breakpoint resolution (viewport width -> layout params)
//! - `layout` - index range and percent sizing/positioning math
//! - `index` - the normalize gate that keeps `current_index` in range
//! - `drag` - pointer-drag session arithmetic and the commit threshold
//! - `surface` - the capability trait the engine drives its environment
//!   through
//! - `carousel` - the engine itself, tying the above together
//!
//! The engine owns its state exclusively; the surrounding application only
//! invokes the public navigation operations. All decision logic runs
//! against the [`Surface`] trait, so the engine is fully exercisable in
//! tests with a fake surface and no terminal at all.

pub mod carousel;
pub mod drag;
pub mod index;
pub mod layout;
pub mod resolve;
pub mod surface;

pub use carousel::Carousel;
pub use drag::{DragOutcome, DragSession};
pub use resolve::LayoutParams;
pub use surface::{PointerKind, Surface};

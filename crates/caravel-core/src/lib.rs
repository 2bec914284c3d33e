pub mod config;
pub mod deck;
pub mod engine;
pub mod error;

pub use config::{AppConfig, Breakpoint, CarouselConfig};
pub use deck::{Deck, Slide};
pub use engine::{Carousel, PointerKind, Surface};
pub use error::{Error, Result};

//! Domain types shared across layers.

mod screen;

pub use screen::Screen;

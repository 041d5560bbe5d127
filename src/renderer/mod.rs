//! 2D rendering module
//!
//! Draws a field through the [`DrawSurface`] trait: the HTML canvas on
//! wasm32, a recording surface everywhere else.

pub mod draw;
pub mod shapes;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use draw::render;
pub use surface::{DrawCommand, DrawSurface, RecordingSurface};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

//! Windowed front end for interactive exploration.
//!
//! Thin glue over winit (window + events) and pixels (framebuffer): pointer
//! events are translated into `PlaneView` operations and the resulting
//! buffer is blitted to the surface. No fractal logic lives here.

mod app;

pub use app::run_gui;

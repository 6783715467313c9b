mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;
mod storage;

pub use crate::controllers::snapshot::render_snapshot;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBufferError, PixelEntry};
pub use crate::core::data::pixel_grid::PixelGridError;
pub use crate::core::data::point::Point;
pub use crate::core::mandelbrot::iteration_bands::IterationBandsError;
pub use crate::core::view::plane_view::{PlaneView, RefreshError};
pub use crate::core::view::view_config::{ViewConfig, ViewConfigError};
pub use crate::presenters::pixel_format::{copy_entries_to_rgba, entries_to_rgb};

#[cfg(feature = "gui")]
pub use crate::input::gui::run_gui;

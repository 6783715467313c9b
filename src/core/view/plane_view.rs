use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError, PixelEntry};
use crate::core::data::pixel_grid::{PixelGrid, PixelGridError};
use crate::core::data::point::Point;
use crate::core::mandelbrot::iteration_bands::{IterationBands, IterationBandsError};
use crate::core::render::frame::{RenderFrameError, render_frame};
use crate::core::util::map_pixel_to_plane::map_pixel_to_plane;
use crate::core::view::view_config::ViewConfig;
use crate::core::view::view_state::ViewState;
use std::error::Error;
use std::fmt;
use std::num::NonZeroUsize;
use std::thread;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RefreshError {
    /// The derived view size or center left f64 range, typically after
    /// many zoom-out operations. Detected, never corrected.
    NonFiniteView { zoom_level: i32 },
    ColourMap(IterationBandsError),
}

impl fmt::Display for RefreshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteView { zoom_level } => {
                write!(
                    f,
                    "view center or size is not finite at zoom level {}",
                    zoom_level
                )
            }
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
        }
    }
}

impl Error for RefreshError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NonFiniteView { .. } => None,
            Self::ColourMap(err) => Some(err),
        }
    }
}

/// The viewing session: owns the view state and the pixel buffer, and
/// turns pointer events from the presentation layer into zoom/recenter
/// transitions. The presentation layer reads the buffer and the status
/// text back out; it never mutates either.
pub struct PlaneView {
    grid: PixelGrid,
    config: ViewConfig,
    view: ViewState,
    buffer: PixelBuffer,
    colour_map: IterationBands,
    mouse_location: Complex,
    worker_count: NonZeroUsize,
}

impl PlaneView {
    pub fn new(width: u32, height: u32, config: ViewConfig) -> Result<Self, PixelGridError> {
        let grid = PixelGrid::new(width, height)?;

        let worker_count = thread::available_parallelism()
            .unwrap_or(NonZeroUsize::new(4).unwrap());

        Ok(Self {
            grid,
            config,
            view: ViewState::new(grid),
            buffer: PixelBuffer::new(grid),
            colour_map: IterationBands::new(config.max_iterations()),
            mouse_location: Complex::ZERO,
            worker_count,
        })
    }

    /// Overrides the hardware-derived worker count.
    #[must_use]
    pub fn with_worker_count(mut self, worker_count: NonZeroUsize) -> Self {
        self.worker_count = worker_count;
        self
    }

    /// Runs a full recompute pass if any operation invalidated the buffer
    /// since the last one; a no-op otherwise. Blocks until the frame is
    /// complete.
    pub fn refresh(&mut self) -> Result<(), RefreshError> {
        if !self.view.needs_recompute() {
            return Ok(());
        }

        if !self.view.size(&self.config).is_finite() || !self.view.center().is_finite() {
            return Err(RefreshError::NonFiniteView {
                zoom_level: self.view.zoom_level(),
            });
        }

        render_frame(
            &mut self.buffer,
            &mut self.view,
            &self.config,
            &self.colour_map,
            self.worker_count,
        )
        .map_err(|RenderFrameError::ColourMap(err)| RefreshError::ColourMap(err))
    }

    pub fn zoom_in(&mut self) {
        self.view.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.view.zoom_out();
    }

    /// Recenters the view on the plane coordinate under the given device
    /// pixel, mapped through the view as it is right now.
    pub fn set_center(&mut self, pixel: Point) {
        let coord = self.map_to_plane(pixel);
        self.view.set_center(coord);
    }

    /// Records the pointer's plane position for the status text. Advisory
    /// only; never triggers a recompute.
    pub fn set_mouse_location(&mut self, pixel: Point) {
        self.mouse_location = self.map_to_plane(pixel);
    }

    #[must_use]
    pub fn pixels(&self) -> &[PixelEntry] {
        self.buffer.entries()
    }

    /// Single-pixel read; fails fast on coordinates outside the grid
    /// rather than reading a neighbouring slot.
    pub fn pixel_at(&self, pixel: Point) -> Result<PixelEntry, PixelBufferError> {
        self.buffer.entry_at(pixel)
    }

    #[must_use]
    pub fn grid(&self) -> PixelGrid {
        self.grid
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.view.center()
    }

    #[must_use]
    pub fn zoom_level(&self) -> i32 {
        self.view.zoom_level()
    }

    #[must_use]
    pub fn mouse_location(&self) -> Complex {
        self.mouse_location
    }

    #[must_use]
    pub fn needs_recompute(&self) -> bool {
        self.view.needs_recompute()
    }

    /// Textual summary of the session, derived fresh on every call.
    #[must_use]
    pub fn status_text(&self) -> String {
        let center = self.view.center();
        let size = self.view.size(&self.config);

        format!(
            "Mandelbrot Set\n\
             Center: ({}, {})\n\
             Size: ({}, {})\n\
             Cursor: ({}, {})\n\
             Left-click: Zoom in\n\
             Right-click: Zoom out",
            center.re, center.im, size.x, size.y, self.mouse_location.re, self.mouse_location.im
        )
    }

    fn map_to_plane(&self, pixel: Point) -> Complex {
        map_pixel_to_plane(
            pixel,
            self.grid,
            self.view.center(),
            self.view.size(&self.config),
        )
    }
}

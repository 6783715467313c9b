use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelEntry};
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::Point;
use crate::core::mandelbrot::escape_time::escape_time;
use crate::core::render::ports::colour_map::ColourMap;
use crate::core::render::row_pool::for_each_row;
use crate::core::util::map_pixel_to_plane::map_pixel_to_plane;
use crate::core::view::view_config::ViewConfig;
use crate::core::view::view_state::{PlaneSize, ViewState};
use std::error::Error;
use std::fmt;
use std::num::NonZeroUsize;

#[derive(Debug)]
pub enum RenderFrameError<MapFailure: Error> {
    ColourMap(MapFailure),
}

impl<MapFailure: Error> fmt::Display for RenderFrameError<MapFailure> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
        }
    }
}

impl<MapFailure: Error + 'static> Error for RenderFrameError<MapFailure> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err),
        }
    }
}

/// Fully repopulates the buffer for the current view: every pixel is
/// mapped to its plane coordinate, evaluated, classified and written to
/// its row-major slot.
///
/// Works from a by-value snapshot of center and size taken before any
/// worker starts, so the pass is a pure function of the view it was
/// handed; re-running it on an unchanged view recomputes identical output.
/// On success the view is marked up to date.
pub fn render_frame<M: ColourMap>(
    buffer: &mut PixelBuffer,
    view: &mut ViewState,
    config: &ViewConfig,
    colour_map: &M,
    worker_count: NonZeroUsize,
) -> Result<(), RenderFrameError<M::Failure>> {
    let grid = buffer.grid();
    let center = view.center();
    let size = view.size(config);

    // grid dimensions are validated positive at construction
    let row_len = NonZeroUsize::new(grid.width() as usize).unwrap();

    for_each_row(buffer.entries_mut(), row_len, worker_count, |row_index, row| {
        fill_row(row_index, row, grid, center, size, config, colour_map)
    })
    .map_err(RenderFrameError::ColourMap)?;

    view.mark_up_to_date();

    Ok(())
}

fn fill_row<M: ColourMap>(
    row_index: usize,
    row: &mut [PixelEntry],
    grid: PixelGrid,
    center: Complex,
    size: PlaneSize,
    config: &ViewConfig,
    colour_map: &M,
) -> Result<(), M::Failure> {
    for (col, entry) in row.iter_mut().enumerate() {
        let pixel = Point {
            x: col as i32,
            y: row_index as i32,
        };
        let coord = map_pixel_to_plane(pixel, grid, center, size);
        let iterations = escape_time(coord, config.max_iterations(), config.escape_radius());

        *entry = PixelEntry {
            position: pixel,
            colour: colour_map.map(iterations)?,
        };
    }

    Ok(())
}

use crate::core::data::colour::Colour;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelBufferError {
    PixelOutsideBounds { pixel: Point, grid: PixelGrid },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds { pixel, grid } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} grid",
                    pixel.x,
                    pixel.y,
                    grid.width(),
                    grid.height()
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

/// One device pixel: where it sits on screen and what colour it got.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelEntry {
    pub position: Point,
    pub colour: Colour,
}

impl Default for PixelEntry {
    fn default() -> Self {
        Self {
            position: Point { x: 0, y: 0 },
            colour: Colour::BLACK,
        }
    }
}

/// Row-major grid of position + colour entries, one per device pixel.
/// A recompute pass overwrites every entry; readers only ever see whole
/// frames.
#[derive(Debug)]
pub struct PixelBuffer {
    grid: PixelGrid,
    entries: Vec<PixelEntry>,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(grid: PixelGrid) -> Self {
        Self {
            grid,
            entries: vec![PixelEntry::default(); grid.pixel_count()],
        }
    }

    #[must_use]
    pub fn grid(&self) -> PixelGrid {
        self.grid
    }

    #[must_use]
    pub fn entries(&self) -> &[PixelEntry] {
        &self.entries
    }

    /// Mutable row-major slice for the renderer to partition into rows.
    pub fn entries_mut(&mut self) -> &mut [PixelEntry] {
        &mut self.entries
    }

    pub fn entry_at(&self, pixel: Point) -> Result<PixelEntry, PixelBufferError> {
        let index = self
            .grid
            .index_of(pixel)
            .ok_or(PixelBufferError::PixelOutsideBounds {
                pixel,
                grid: self.grid,
            })?;

        Ok(self.entries[index])
    }

    #[allow(dead_code)]
    pub fn set_entry(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self
            .grid
            .index_of(pixel)
            .ok_or(PixelBufferError::PixelOutsideBounds {
                pixel,
                grid: self.grid,
            })?;

        self.entries[index] = PixelEntry {
            position: pixel,
            colour,
        };

        Ok(())
    }
}

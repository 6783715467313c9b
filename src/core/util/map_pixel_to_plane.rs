use crate::core::data::complex::Complex;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::Point;
use crate::core::view::view_state::PlaneSize;

/// Maps a device pixel to the plane coordinate it represents under the
/// given center and view size.
///
/// Total over all inputs: pixels outside the grid extrapolate linearly,
/// because the same mapping serves pointer positions that can momentarily
/// sit outside the window during event delivery. The vertical term flips
/// row order, since device rows grow downward while the imaginary axis
/// grows upward.
#[must_use]
pub fn map_pixel_to_plane(
    pixel: Point,
    grid: PixelGrid,
    center: Complex,
    size: PlaneSize,
) -> Complex {
    let width = grid.width() as f64;
    let height = grid.height() as f64;

    let re = (pixel.x as f64 / width) * size.x + (center.re - size.x / 2.0);
    let im = ((pixel.y as f64 - height) / -height) * size.y + (center.im - size.y / 2.0);

    Complex { re, im }
}

use crate::core::data::pixel_buffer::PixelEntry;
use crate::core::data::pixel_grid::PixelGrid;
use crate::presenters::pixel_format::entries_to_rgb;
use std::io::Write;
use std::path::Path;

pub fn write_ppm(
    grid: PixelGrid,
    entries: &[PixelEntry],
    filepath: impl AsRef<Path>,
) -> std::io::Result<()> {
    let mut file = std::fs::File::create(filepath)?;

    // PPM header: P6 means binary RGB, then width height max_colour
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", grid.width(), grid.height())?;
    writeln!(file, "255")?;
    file.write_all(&entries_to_rgb(entries))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use crate::core::data::point::Point;

    #[test]
    fn test_write_ppm_header_and_payload() {
        let grid = PixelGrid::new(2, 2).unwrap();
        let mut buffer = PixelBuffer::new(grid);
        buffer
            .set_entry(Point { x: 1, y: 1 }, Colour { r: 234, g: 50, b: 60 })
            .unwrap();

        let path = std::env::temp_dir().join("mandelbrot_viewer_write_ppm_test.ppm");
        write_ppm(grid, buffer.entries(), &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        let expected_header = b"P6\n2 2\n255\n";
        assert_eq!(&written[..expected_header.len()], expected_header);
        assert_eq!(written.len(), expected_header.len() + 12);
        assert_eq!(&written[written.len() - 3..], &[234, 50, 60]);
    }
}

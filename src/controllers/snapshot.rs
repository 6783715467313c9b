use std::path::Path;
use std::time::Instant;

use crate::core::view::plane_view::PlaneView;
use crate::core::view::view_config::ViewConfig;
use crate::storage::write_ppm::write_ppm;

/// Headless path: renders the default view once and saves it as a PPM
/// image.
pub fn render_snapshot(
    width: u32,
    height: u32,
    filepath: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let filepath = filepath.as_ref();
    let mut plane = PlaneView::new(width, height, ViewConfig::default())?;

    println!("Rendering Mandelbrot set...");
    println!("Image size: {}x{}", width, height);

    let start = Instant::now();
    plane.refresh()?;
    let duration = start.elapsed();

    println!("Duration:   {:?}", duration);
    println!("{}", plane.status_text());

    if let Some(parent) = filepath.parent() {
        std::fs::create_dir_all(parent)?;
    }

    write_ppm(plane.grid(), plane.pixels(), filepath)?;
    println!("Saved to {}", filepath.display());

    Ok(())
}

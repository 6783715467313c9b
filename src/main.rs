fn main() -> Result<(), Box<dyn std::error::Error>> {
    mandelbrot_viewer::render_snapshot(800, 600, "output/mandelbrot.ppm")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    mandelbrot_viewer::run_gui(800, 600)
}

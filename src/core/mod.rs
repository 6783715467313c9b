pub mod data;
pub mod mandelbrot;
pub mod render;
pub mod util;
pub mod view;

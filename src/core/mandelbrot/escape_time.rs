use crate::core::data::complex::Complex;

/// Number of `z <- z^2 + c` iterations before |z| exceeds the escape
/// radius, or `max_iterations` if it never does (the point is presumed
/// inside the set).
///
/// Compares squared magnitudes to skip the square root in the hot loop.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32, escape_radius: f64) -> u32 {
    let escape_radius_squared = escape_radius * escape_radius;
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        if z.magnitude_squared() > escape_radius_squared {
            return iteration;
        }
        z = z * z + c;
    }

    max_iterations
}

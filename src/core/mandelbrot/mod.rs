pub mod escape_time;
pub mod iteration_bands;

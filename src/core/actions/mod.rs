pub mod accumulate;
pub mod cancellation;
pub mod generate_fractal;
pub mod map_output;

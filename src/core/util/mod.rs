pub mod calculate_rows_per_block;
pub mod pixel_to_complex_coords;

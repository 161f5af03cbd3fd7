pub mod complex;
pub mod iteration_result;
pub mod output_grid;
pub mod point;
pub mod region;
pub mod resolution;
pub mod row_order;
pub mod text_stream;
pub mod viewport;

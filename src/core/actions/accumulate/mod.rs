pub mod ports;
pub mod raster_accumulator;
pub mod text_accumulator;

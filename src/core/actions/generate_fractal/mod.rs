pub mod generate_rows;
pub mod ports;

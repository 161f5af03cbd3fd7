pub mod errors;
pub mod ports;
pub mod render;
pub mod render_config;

pub mod ascii_glyphs;
pub mod grayscale_ramp;
pub mod output_mode;

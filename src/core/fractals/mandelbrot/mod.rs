pub mod algorithm;
pub mod errors;
pub mod output_maps;
pub mod params;
pub mod presets;
pub mod tie_rule;

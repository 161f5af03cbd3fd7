mod controllers;
mod core;
mod input;
mod presenters;
mod storage;

pub use controllers::errors::{RenderError, RenderErrorKind};
pub use controllers::ports::render_observer::{NullObserver, RenderObserver};
pub use controllers::render::{RenderReport, render, render_cancelable};
pub use controllers::render_config::{ConfigError, RenderConfig};
pub use input::cli::args::Args;
pub use presenters::console::observer::ConsoleObserver;

pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::iteration_result::IterationResult;
pub use crate::core::data::point::Point;
pub use crate::core::data::region::{Region, RegionError};
pub use crate::core::data::resolution::{Resolution, ResolutionError};
pub use crate::core::data::row_order::RowOrder;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::mandelbrot::algorithm::evaluate;
pub use crate::core::fractals::mandelbrot::output_maps::ascii_glyphs::AsciiGlyphs;
pub use crate::core::fractals::mandelbrot::output_maps::output_mode::{
    OutputMode, OutputValue, to_output,
};
pub use crate::core::fractals::mandelbrot::presets::{PRESETS, PresetError, parse_view, preset};
pub use crate::core::fractals::mandelbrot::tie_rule::TieRule;
pub use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

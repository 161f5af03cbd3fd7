use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

use crate::controllers::render_config::{
    ConfigError, DEFAULT_HEIGHT, DEFAULT_MAX_ITERATIONS, DEFAULT_WIDTH, RenderConfig,
    default_region,
};
use crate::core::data::complex::Complex;
use crate::core::data::region::Region;
use crate::core::data::resolution::Resolution;
use crate::core::data::row_order::RowOrder;
use crate::core::fractals::mandelbrot::output_maps::output_mode::OutputMode;
use crate::core::fractals::mandelbrot::presets::parse_view;
use crate::core::fractals::mandelbrot::tie_rule::TieRule;

/// Command line flags of the `mandel-render` binary.
#[derive(Debug, Parser)]
#[command(name = "mandel-render", version, about = "Escape-time Mandelbrot renderer")]
pub struct Args {
    /// Centre of the view as X,Y
    #[arg(long, value_name = "X,Y", value_parser = parse_center, allow_hyphen_values = true)]
    pub center: Option<Complex>,

    /// Half-width of the view
    #[arg(long, value_name = "R", allow_hyphen_values = true)]
    pub radius: Option<f64>,

    /// Named preset or a literal [X,Y,R] triple; --center and --radius override parts of it
    #[arg(long, value_name = "NAME|[X,Y,R]", allow_hyphen_values = true)]
    pub view: Option<String>,

    /// Output size in pixels
    #[arg(long, short = 's', value_name = "WxH", value_parser = parse_size)]
    pub size: Option<(u32, u32)>,

    /// Iteration cap per pixel
    #[arg(long, short = 'i', default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub iterations: u32,

    /// raster (P3 image) or ascii
    #[arg(long, short = 'm', default_value_t = OutputMode::default())]
    pub mode: OutputMode,

    /// Order in which rows are written
    #[arg(long, default_value_t = RowOrder::default())]
    pub row_order: RowOrder,

    /// Classification of points crossing the threshold on the last iteration
    #[arg(long, default_value_t = TieRule::default())]
    pub tie_rule: TieRule,

    /// Copies of each glyph per pixel in ascii mode
    #[arg(long, default_value_t = 1)]
    pub glyph_width: usize,

    /// Worker threads, 1 renders on the main thread
    #[arg(long, short = 't')]
    pub threads: Option<usize>,

    /// Output file, defaults to output/mandelbrot.<ppm|txt>
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Do not print progress
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl Args {
    pub fn into_config(self) -> Result<RenderConfig, ConfigError> {
        let base = match &self.view {
            Some(view) => parse_view(view)?,
            None => default_region(),
        };

        let region = if self.center.is_some() || self.radius.is_some() {
            Region::new(
                self.center.unwrap_or(base.center()),
                self.radius.unwrap_or(base.radius()),
            )?
        } else {
            base
        };

        let (width, height) = self.size.unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT));
        let output = self.output.unwrap_or_else(|| {
            PathBuf::from(format!("output/mandelbrot.{}", self.mode.default_extension()))
        });

        Ok(RenderConfig {
            region,
            resolution: Resolution::new(width, height)?,
            max_iterations: self.iterations,
            mode: self.mode,
            row_order: self.row_order,
            tie_rule: self.tie_rule,
            glyph_width: self.glyph_width,
            threads: self.threads,
            output,
            ..RenderConfig::default()
        })
    }
}

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    let (left, right) = s.split_once(separator)?;

    match (T::from_str(left.trim()), T::from_str(right.trim())) {
        (Ok(l), Ok(r)) => Some((l, r)),
        _ => None,
    }
}

fn parse_center(s: &str) -> Result<Complex, String> {
    parse_pair::<f64>(s, ',')
        .map(|(real, imag)| Complex::new(real, imag))
        .ok_or_else(|| format!("could not parse centre '{}', expected X,Y", s))
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    parse_pair::<u32>(s, 'x').ok_or_else(|| format!("could not parse size '{}', expected WxH", s))
}

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use crate::core::actions::map_output::ports::output_map::OutputMapError;
use crate::core::data::region::{Region, RegionError};
use crate::core::data::resolution::{Resolution, ResolutionError};
use crate::core::data::row_order::RowOrder;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::output_maps::ascii_glyphs::AsciiGlyphs;
use crate::core::fractals::mandelbrot::output_maps::grayscale_ramp::{
    DEFAULT_PALETTE_SIZE, GrayscaleRamp,
};
use crate::core::fractals::mandelbrot::output_maps::output_mode::OutputMode;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;
use crate::core::fractals::mandelbrot::presets::{DEFAULT_PRESET, PresetError, preset};
use crate::core::fractals::mandelbrot::tie_rule::TieRule;
use crate::presenters::file::ppm::DEFAULT_PPM_COMMENT;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 800;
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;
pub const DEFAULT_OUTPUT: &str = "output/mandelbrot.ppm";

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Region(RegionError),
    Resolution(ResolutionError),
    Preset(PresetError),
    Mandelbrot(MandelbrotError),
    OutputMap(OutputMapError),
    ZeroThreads,
    ZeroGlyphWidth,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Region(err) => write!(f, "{}", err),
            Self::Resolution(err) => write!(f, "{}", err),
            Self::Preset(err) => write!(f, "{}", err),
            Self::Mandelbrot(err) => write!(f, "{}", err),
            Self::OutputMap(err) => write!(f, "{}", err),
            Self::ZeroThreads => write!(f, "thread count must be greater than zero"),
            Self::ZeroGlyphWidth => write!(f, "glyph width must be greater than zero"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Region(err) => Some(err),
            Self::Resolution(err) => Some(err),
            Self::Preset(err) => Some(err),
            Self::Mandelbrot(err) => Some(err),
            Self::OutputMap(err) => Some(err),
            Self::ZeroThreads | Self::ZeroGlyphWidth => None,
        }
    }
}

impl From<RegionError> for ConfigError {
    fn from(err: RegionError) -> Self {
        Self::Region(err)
    }
}

impl From<ResolutionError> for ConfigError {
    fn from(err: ResolutionError) -> Self {
        Self::Resolution(err)
    }
}

impl From<PresetError> for ConfigError {
    fn from(err: PresetError) -> Self {
        Self::Preset(err)
    }
}

impl From<MandelbrotError> for ConfigError {
    fn from(err: MandelbrotError) -> Self {
        Self::Mandelbrot(err)
    }
}

impl From<OutputMapError> for ConfigError {
    fn from(err: OutputMapError) -> Self {
        Self::OutputMap(err)
    }
}

pub(crate) fn default_region() -> Region {
    preset(DEFAULT_PRESET).expect("default preset is a valid region")
}

/// Everything one render run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub region: Region,
    pub resolution: Resolution,
    pub max_iterations: u32,
    pub mode: OutputMode,
    pub row_order: RowOrder,
    pub tie_rule: TieRule,
    /// Grayscale levels used by raster output, at most 256.
    pub palette_size: u16,
    pub glyphs: AsciiGlyphs,
    /// Copies of each glyph per pixel in text output.
    pub glyph_width: usize,
    /// `None` uses the global rayon pool, `Some(1)` renders on the calling thread.
    pub threads: Option<usize>,
    /// Comment line written into raster headers.
    pub comment: Option<String>,
    pub output: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            resolution: Resolution::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
                .expect("default resolution is valid"),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            mode: OutputMode::default(),
            row_order: RowOrder::default(),
            tie_rule: TieRule::default(),
            palette_size: DEFAULT_PALETTE_SIZE,
            glyphs: AsciiGlyphs::default(),
            glyph_width: 1,
            threads: None,
            comment: Some(DEFAULT_PPM_COMMENT.to_string()),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl RenderConfig {
    /// Checks the settings that region and resolution construction do not cover.
    pub fn validate(&self) -> Result<MandelbrotParams, ConfigError> {
        let params = MandelbrotParams::new(self.max_iterations, self.tie_rule)?;

        if self.mode == OutputMode::Raster {
            GrayscaleRamp::new(self.max_iterations, self.palette_size)?;
        }

        if self.threads == Some(0) {
            return Err(ConfigError::ZeroThreads);
        }

        if self.glyph_width == 0 {
            return Err(ConfigError::ZeroGlyphWidth);
        }

        Ok(params)
    }
}

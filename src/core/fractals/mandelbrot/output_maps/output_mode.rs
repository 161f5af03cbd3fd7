use crate::core::actions::map_output::ports::output_map::{OutputMap, OutputMapError};
use crate::core::data::iteration_result::IterationResult;
use crate::core::fractals::mandelbrot::output_maps::ascii_glyphs::AsciiGlyphs;
use crate::core::fractals::mandelbrot::output_maps::grayscale_ramp::{
    DEFAULT_PALETTE_SIZE, GrayscaleRamp,
};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Plain-text P3 raster with equal R, G and B channels.
    #[default]
    Raster,
    /// One glyph per pixel, one line per row.
    Ascii,
}

impl OutputMode {
    pub const ALL: &'static [Self] = &[Self::Raster, Self::Ascii];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Raster => "raster",
            Self::Ascii => "ascii",
        }
    }

    #[must_use]
    pub const fn default_extension(self) -> &'static str {
        match self {
            Self::Raster => "ppm",
            Self::Ascii => "txt",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutputModeError(String);

impl fmt::Display for ParseOutputModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown output mode '{}', expected 'raster' or 'ascii'",
            self.0
        )
    }
}

impl std::error::Error for ParseOutputModeError {}

impl FromStr for OutputMode {
    type Err = ParseOutputModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.display_name() == s)
            .ok_or_else(|| ParseOutputModeError(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputValue {
    Intensity(u8),
    Glyph(char),
}

/// Maps one result with the default palette or glyph pair of `mode`.
pub fn to_output(
    result: IterationResult,
    max_iterations: u32,
    mode: OutputMode,
) -> Result<OutputValue, OutputMapError> {
    match mode {
        OutputMode::Raster => {
            let ramp = GrayscaleRamp::new(max_iterations, DEFAULT_PALETTE_SIZE)?;
            ramp.map(result).map(OutputValue::Intensity)
        }
        OutputMode::Ascii => {
            if result.iterations() > max_iterations {
                return Err(OutputMapError::IterationsExceedMax {
                    iterations: result.iterations(),
                    max_iterations,
                });
            }

            AsciiGlyphs::default().map(result).map(OutputValue::Glyph)
        }
    }
}

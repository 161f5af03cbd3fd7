use crate::core::data::iteration_result::IterationResult;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMapError {
    IterationsExceedMax {
        iterations: u32,
        max_iterations: u32,
    },
    ZeroMaxIterations,
    InvalidPaletteSize {
        palette_size: u16,
    },
    InvalidGlyph {
        glyph: char,
    },
    IndistinctGlyphs {
        glyph: char,
    },
}

impl fmt::Display for OutputMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationsExceedMax {
                iterations,
                max_iterations,
            } => {
                write!(
                    f,
                    "iterations {} exceeds maximum {}",
                    iterations, max_iterations
                )
            }
            Self::ZeroMaxIterations => write!(f, "maximum iterations must be greater than zero"),
            Self::InvalidPaletteSize { palette_size } => {
                write!(f, "palette size must be in 1..=256: {}", palette_size)
            }
            Self::InvalidGlyph { glyph } => {
                write!(f, "glyph {:?} cannot be used in text output", glyph)
            }
            Self::IndistinctGlyphs { glyph } => {
                write!(f, "inside and escaped glyphs are both {:?}", glyph)
            }
        }
    }
}

impl Error for OutputMapError {}

/// Turns an escape-time result into the symbol stored for its pixel.
pub trait OutputMap: Send + Sync {
    type Symbol: Copy + Send;

    fn map(&self, result: IterationResult) -> Result<Self::Symbol, OutputMapError>;
}

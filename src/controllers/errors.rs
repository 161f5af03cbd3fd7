use std::error::Error;
use std::fmt;

use crate::controllers::render_config::ConfigError;
use crate::core::actions::accumulate::ports::accumulator::AccumulateError;
use crate::core::actions::cancellation::Cancelled;
use crate::core::actions::generate_fractal::generate_rows::GenerateRowsError;
use crate::core::actions::map_output::ports::output_map::OutputMapError;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;

/// Coarse classification of a failed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderErrorKind {
    Config,
    ResourceExhausted,
    Io,
    Cancelled,
    Internal,
}

#[derive(Debug)]
pub enum RenderError {
    Config(ConfigError),
    ResourceExhausted { cells: u64 },
    ThreadPool(rayon::ThreadPoolBuildError),
    Io(std::io::Error),
    Cancelled(Cancelled),
    Evaluation(PixelToComplexCoordsError),
    OutputMap(OutputMapError),
    Accumulate(AccumulateError),
}

impl RenderError {
    #[must_use]
    pub fn kind(&self) -> RenderErrorKind {
        match self {
            Self::Config(_) => RenderErrorKind::Config,
            Self::ResourceExhausted { .. } | Self::ThreadPool(_) => {
                RenderErrorKind::ResourceExhausted
            }
            Self::Io(_) => RenderErrorKind::Io,
            Self::Cancelled(_) => RenderErrorKind::Cancelled,
            Self::Evaluation(_) | Self::OutputMap(_) | Self::Accumulate(_) => {
                RenderErrorKind::Internal
            }
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid configuration: {}", err),
            Self::ResourceExhausted { cells } => {
                write!(f, "not enough memory to hold {} cells", cells)
            }
            Self::ThreadPool(err) => write!(f, "could not start worker pool: {}", err),
            Self::Io(err) => write!(f, "could not write output: {}", err),
            Self::Cancelled(err) => write!(f, "{}", err),
            Self::Evaluation(err) => write!(f, "evaluation error: {}", err),
            Self::OutputMap(err) => write!(f, "output map error: {}", err),
            Self::Accumulate(err) => write!(f, "accumulate error: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::ResourceExhausted { .. } => None,
            Self::ThreadPool(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Cancelled(err) => Some(err),
            Self::Evaluation(err) => Some(err),
            Self::OutputMap(err) => Some(err),
            Self::Accumulate(err) => Some(err),
        }
    }
}

impl From<ConfigError> for RenderError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<AccumulateError> for RenderError {
    fn from(err: AccumulateError) -> Self {
        match err {
            AccumulateError::AllocationFailed { cells } => Self::ResourceExhausted { cells },
            other => Self::Accumulate(other),
        }
    }
}

impl From<GenerateRowsError<PixelToComplexCoordsError>> for RenderError {
    fn from(err: GenerateRowsError<PixelToComplexCoordsError>) -> Self {
        match err {
            GenerateRowsError::Cancelled(c) => Self::Cancelled(c),
            GenerateRowsError::Algorithm(e) => Self::Evaluation(e),
            GenerateRowsError::OutputMap(e) => Self::OutputMap(e),
            GenerateRowsError::Accumulate(e) => e.into(),
        }
    }
}

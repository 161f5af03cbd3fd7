use crate::core::data::output_grid::OutputGridError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccumulateError {
    RowOutOfBounds {
        row: u32,
        height: u32,
    },
    RowWidthMismatch {
        row: u32,
        expected: usize,
        actual: usize,
    },
    RowAlreadyWritten {
        row: u32,
    },
    Incomplete {
        rows_written: u32,
        height: u32,
    },
    AllocationFailed {
        cells: u64,
    },
    Grid(OutputGridError),
}

impl fmt::Display for AccumulateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowOutOfBounds { row, height } => {
                write!(f, "row {} is outside a grid {} rows tall", row, height)
            }
            Self::RowWidthMismatch {
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "row {} has {} cells, expected {}",
                    row, actual, expected
                )
            }
            Self::RowAlreadyWritten { row } => write!(f, "row {} was written twice", row),
            Self::Incomplete {
                rows_written,
                height,
            } => {
                write!(
                    f,
                    "only {} of {} rows were written",
                    rows_written, height
                )
            }
            Self::AllocationFailed { cells } => {
                write!(f, "could not allocate storage for {} cells", cells)
            }
            Self::Grid(err) => write!(f, "output grid error: {}", err),
        }
    }
}

impl Error for AccumulateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<OutputGridError> for AccumulateError {
    fn from(err: OutputGridError) -> Self {
        match err {
            OutputGridError::AllocationFailed { cells } => Self::AllocationFailed { cells },
            other => Self::Grid(other),
        }
    }
}

/// Collects mapped rows in visiting order and hands over the finished result.
///
/// Every row must be pushed exactly once; `finish` fails otherwise.
pub trait Accumulator {
    type Symbol;
    type Output;

    fn push_row(&mut self, row: u32, symbols: &[Self::Symbol]) -> Result<(), AccumulateError>;

    fn finish(self) -> Result<Self::Output, AccumulateError>;
}

/// Bookkeeping shared by the accumulators: which rows have arrived.
#[derive(Debug)]
pub(crate) struct RowLedger {
    written: Vec<bool>,
    rows_written: u32,
    width: usize,
}

impl RowLedger {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            written: vec![false; height as usize],
            rows_written: 0,
            width: width as usize,
        }
    }

    pub(crate) fn record(&mut self, row: u32, len: usize) -> Result<(), AccumulateError> {
        let height = self.written.len() as u32;

        let Some(slot) = self.written.get_mut(row as usize) else {
            return Err(AccumulateError::RowOutOfBounds { row, height });
        };

        if len != self.width {
            return Err(AccumulateError::RowWidthMismatch {
                row,
                expected: self.width,
                actual: len,
            });
        }

        if *slot {
            return Err(AccumulateError::RowAlreadyWritten { row });
        }

        *slot = true;
        self.rows_written += 1;

        Ok(())
    }

    pub(crate) fn check_complete(&self) -> Result<(), AccumulateError> {
        let height = self.written.len() as u32;

        if self.rows_written != height {
            return Err(AccumulateError::Incomplete {
                rows_written: self.rows_written,
                height,
            });
        }

        Ok(())
    }
}

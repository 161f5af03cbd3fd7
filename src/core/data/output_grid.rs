use crate::core::data::resolution::Resolution;
use crate::core::data::row_order::RowOrder;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputGridError {
    AllocationFailed {
        cells: u64,
    },
    RowOutsideBounds {
        row: u32,
        resolution: Resolution,
    },
    RowWidthMismatch {
        row: u32,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for OutputGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { cells } => {
                write!(f, "could not allocate an output grid of {} cells", cells)
            }
            Self::RowOutsideBounds { row, resolution } => {
                write!(f, "row {} outside of grid {}", row, resolution)
            }
            Self::RowWidthMismatch {
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "row {} has {} cells, grid rows have {}",
                    row, actual, expected
                )
            }
        }
    }
}

impl Error for OutputGridError {}

pub type OutputGridData = Vec<u8>;

/// Dense `width x height` grid of grayscale intensities, stored by pixel row.
///
/// The row order only affects [`OutputGrid::rows`], which is how serializers
/// read the grid back.
#[derive(Debug)]
pub struct OutputGrid {
    resolution: Resolution,
    row_order: RowOrder,
    cells: OutputGridData,
}

impl OutputGrid {
    /// Allocates a zeroed grid, failing instead of aborting when memory runs out.
    pub fn try_new(resolution: Resolution, row_order: RowOrder) -> Result<Self, OutputGridError> {
        let cells = resolution.cell_count();
        let len =
            usize::try_from(cells).map_err(|_| OutputGridError::AllocationFailed { cells })?;

        let mut data = OutputGridData::new();
        data.try_reserve_exact(len)
            .map_err(|_| OutputGridError::AllocationFailed { cells })?;
        data.resize(len, 0);

        Ok(Self {
            resolution,
            row_order,
            cells: data,
        })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn set_row(&mut self, row: u32, values: &[u8]) -> Result<(), OutputGridError> {
        if row >= self.resolution.height() {
            return Err(OutputGridError::RowOutsideBounds {
                row,
                resolution: self.resolution,
            });
        }

        let width = self.resolution.width() as usize;
        if values.len() != width {
            return Err(OutputGridError::RowWidthMismatch {
                row,
                expected: width,
                actual: values.len(),
            });
        }

        let start = row as usize * width;
        self.cells[start..start + width].copy_from_slice(values);

        Ok(())
    }

    /// Rows in the grid's row order.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        let width = self.resolution.width() as usize;

        self.row_order
            .rows(self.resolution.height())
            .map(move |row| {
                let start = row as usize * width;
                &self.cells[start..start + width]
            })
    }
}

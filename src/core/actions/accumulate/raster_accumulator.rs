use crate::core::actions::accumulate::ports::accumulator::{
    AccumulateError, Accumulator, RowLedger,
};
use crate::core::data::output_grid::OutputGrid;
use crate::core::data::resolution::Resolution;
use crate::core::data::row_order::RowOrder;

/// Dense-grid strategy for raster output. The grid is allocated up front.
#[derive(Debug)]
pub struct RasterAccumulator {
    grid: OutputGrid,
    ledger: RowLedger,
}

impl RasterAccumulator {
    pub fn try_new(resolution: Resolution, row_order: RowOrder) -> Result<Self, AccumulateError> {
        let grid = OutputGrid::try_new(resolution, row_order)?;

        Ok(Self {
            grid,
            ledger: RowLedger::new(resolution.width(), resolution.height()),
        })
    }
}

impl Accumulator for RasterAccumulator {
    type Symbol = u8;
    type Output = OutputGrid;

    fn push_row(&mut self, row: u32, symbols: &[u8]) -> Result<(), AccumulateError> {
        self.ledger.record(row, symbols.len())?;
        self.grid.set_row(row, symbols)?;

        Ok(())
    }

    fn finish(self) -> Result<OutputGrid, AccumulateError> {
        self.ledger.check_complete()?;

        Ok(self.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accumulator(width: u32, height: u32) -> RasterAccumulator {
        RasterAccumulator::try_new(Resolution::new(width, height).unwrap(), RowOrder::TopDown)
            .unwrap()
    }

    #[test]
    fn test_full_grid_is_returned() {
        let mut accumulator = accumulator(2, 2);

        accumulator.push_row(1, &[3, 4]).unwrap();
        accumulator.push_row(0, &[1, 2]).unwrap();
        let grid = accumulator.finish().unwrap();

        let rows: Vec<&[u8]> = grid.rows().collect();

        assert_eq!(rows, vec![&[1, 2][..], &[3, 4][..]]);
    }

    #[test]
    fn test_missing_rows_fail_finish() {
        let mut accumulator = accumulator(2, 3);

        accumulator.push_row(0, &[1, 2]).unwrap();

        assert_eq!(
            accumulator.finish().unwrap_err(),
            AccumulateError::Incomplete {
                rows_written: 1,
                height: 3
            }
        );
    }

    #[test]
    fn test_rows_cannot_be_written_twice() {
        let mut accumulator = accumulator(2, 2);

        accumulator.push_row(0, &[1, 2]).unwrap();

        assert_eq!(
            accumulator.push_row(0, &[1, 2]),
            Err(AccumulateError::RowAlreadyWritten { row: 0 })
        );
    }

    #[test]
    fn test_row_bounds_and_width_are_checked() {
        let mut accumulator = accumulator(2, 2);

        assert_eq!(
            accumulator.push_row(2, &[1, 2]),
            Err(AccumulateError::RowOutOfBounds { row: 2, height: 2 })
        );
        assert_eq!(
            accumulator.push_row(0, &[1, 2, 3]),
            Err(AccumulateError::RowWidthMismatch {
                row: 0,
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn test_oversized_grid_reports_allocation_failure() {
        let resolution = Resolution::new(u32::MAX, u32::MAX).unwrap();
        let result = RasterAccumulator::try_new(resolution, RowOrder::TopDown);

        assert!(matches!(
            result,
            Err(AccumulateError::AllocationFailed { .. })
        ));
    }
}

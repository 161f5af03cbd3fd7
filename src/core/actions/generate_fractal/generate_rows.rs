use rayon::prelude::*;

use crate::core::actions::accumulate::ports::accumulator::{AccumulateError, Accumulator};
use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::map_output::ports::output_map::{OutputMap, OutputMapError};
use crate::core::data::iteration_result::IterationResult;
use crate::core::data::point::Point;
use crate::core::data::row_order::RowOrder;

/// Error type for row generation.
///
/// Cancellation is kept apart from real failures so callers can treat it as
/// expected control flow.
#[derive(Debug)]
pub enum GenerateRowsError<E> {
    /// The cancel token fired before every row was evaluated.
    Cancelled(Cancelled),
    /// The fractal algorithm reported a failure.
    Algorithm(E),
    /// An iteration result could not be mapped to an output symbol.
    OutputMap(OutputMapError),
    /// The accumulator rejected a row.
    Accumulate(AccumulateError),
}

impl<E: std::fmt::Display> std::fmt::Display for GenerateRowsError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateRowsError::Cancelled(c) => write!(f, "{}", c),
            GenerateRowsError::Algorithm(e) => write!(f, "algorithm error: {}", e),
            GenerateRowsError::OutputMap(e) => write!(f, "output map error: {}", e),
            GenerateRowsError::Accumulate(e) => write!(f, "accumulate error: {}", e),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for GenerateRowsError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateRowsError::Cancelled(c) => Some(c),
            GenerateRowsError::Algorithm(e) => Some(e),
            GenerateRowsError::OutputMap(e) => Some(e),
            GenerateRowsError::Accumulate(e) => Some(e),
        }
    }
}

impl<E> From<AccumulateError> for GenerateRowsError<E> {
    fn from(err: AccumulateError) -> Self {
        Self::Accumulate(err)
    }
}

impl<E> From<OutputMapError> for GenerateRowsError<E> {
    fn from(err: OutputMapError) -> Self {
        Self::OutputMap(err)
    }
}

/// How rows are spread over workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSchedule {
    /// Evaluate the rows of a block on the current rayon pool.
    pub parallel: bool,
    /// Rows evaluated between two cancellation checks and accumulator flushes.
    pub rows_per_block: usize,
}

impl RowSchedule {
    #[must_use]
    pub fn serial() -> Self {
        Self {
            parallel: false,
            rows_per_block: 1,
        }
    }

    #[must_use]
    pub fn parallel(rows_per_block: usize) -> Self {
        Self {
            parallel: true,
            rows_per_block: rows_per_block.max(1),
        }
    }
}

/// Escaped and interior pixel counts for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowTally {
    pub escaped: u64,
    pub interior: u64,
}

impl RowTally {
    fn record(&mut self, result: IterationResult) {
        if result.escaped() {
            self.escaped += 1;
        } else {
            self.interior += 1;
        }
    }

    fn merge(&mut self, other: RowTally) {
        self.escaped += other.escaped;
        self.interior += other.interior;
    }
}

struct EvaluatedRow<S> {
    row: u32,
    symbols: Vec<S>,
    tally: RowTally,
}

/// Evaluates every pixel, maps it, and pushes whole rows to `accumulator`
/// in `row_order`.
///
/// Rows are processed in blocks of [`RowSchedule::rows_per_block`]. Within a
/// block each worker owns the buffer of the row it evaluates; the block is
/// joined before its rows are pushed, so the accumulator sees rows strictly
/// in visiting order. The cancel token is polled before each block, at the
/// start of each row and every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels.
pub fn generate_rows<Alg, Map, Acc, C>(
    algorithm: &Alg,
    output_map: &Map,
    accumulator: &mut Acc,
    row_order: RowOrder,
    schedule: RowSchedule,
    cancel: &C,
) -> Result<RowTally, GenerateRowsError<Alg::Failure>>
where
    Alg: FractalAlgorithm<Success = IterationResult> + Sync,
    Alg::Failure: Send,
    Map: OutputMap,
    Acc: Accumulator<Symbol = Map::Symbol>,
    C: CancelToken,
{
    let resolution = algorithm.resolution();
    let rows: Vec<u32> = row_order.rows(resolution.height()).collect();
    let mut tally = RowTally::default();

    for block in rows.chunks(schedule.rows_per_block.max(1)) {
        if cancel.is_cancelled() {
            return Err(GenerateRowsError::Cancelled(Cancelled));
        }

        let evaluated: Vec<EvaluatedRow<Map::Symbol>> = if schedule.parallel {
            block
                .par_iter()
                .map(|&row| evaluate_row(row, algorithm, output_map, cancel))
                .collect::<Result<_, _>>()?
        } else {
            block
                .iter()
                .map(|&row| evaluate_row(row, algorithm, output_map, cancel))
                .collect::<Result<_, _>>()?
        };

        for row in evaluated {
            accumulator.push_row(row.row, &row.symbols)?;
            tally.merge(row.tally);
        }
    }

    Ok(tally)
}

fn evaluate_row<Alg, Map, C>(
    row: u32,
    algorithm: &Alg,
    output_map: &Map,
    cancel: &C,
) -> Result<EvaluatedRow<Map::Symbol>, GenerateRowsError<Alg::Failure>>
where
    Alg: FractalAlgorithm<Success = IterationResult>,
    Map: OutputMap,
    C: CancelToken,
{
    let width = algorithm.resolution().width();
    let mut symbols = Vec::with_capacity(width as usize);
    let mut tally = RowTally::default();

    for x in 0..width {
        if x as usize % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(GenerateRowsError::Cancelled(Cancelled));
        }

        let result = algorithm
            .compute(Point { x, y: row })
            .map_err(GenerateRowsError::Algorithm)?;

        tally.record(result);
        symbols.push(output_map.map(result)?);
    }

    Ok(EvaluatedRow {
        row,
        symbols,
        tally,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::accumulate::raster_accumulator::RasterAccumulator;
    use crate::core::actions::accumulate::text_accumulator::TextAccumulator;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::data::output_grid::OutputGrid;
    use crate::core::data::resolution::Resolution;
    use crate::core::fractals::mandelbrot::output_maps::ascii_glyphs::AsciiGlyphs;
    use std::error::Error;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    /// Escapes after `x + y + 1` steps, interior on the diagonal.
    #[derive(Debug)]
    struct StubSuccessAlgorithm {
        resolution: Resolution,
    }

    impl FractalAlgorithm for StubSuccessAlgorithm {
        type Success = IterationResult;
        type Failure = StubError;

        fn resolution(&self) -> Resolution {
            self.resolution
        }

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok(IterationResult::new(pixel.x + pixel.y + 1, pixel.x != pixel.y))
        }
    }

    #[derive(Debug)]
    struct StubFailureAlgorithm {
        resolution: Resolution,
    }

    impl FractalAlgorithm for StubFailureAlgorithm {
        type Success = IterationResult;
        type Failure = StubError;

        fn resolution(&self) -> Resolution {
            self.resolution
        }

        fn compute(&self, _: Point) -> Result<Self::Success, Self::Failure> {
            Err(StubError {})
        }
    }

    /// Symbol is the raw iteration count, truncated.
    struct StubCountMap;

    impl OutputMap for StubCountMap {
        type Symbol = u8;

        fn map(&self, result: IterationResult) -> Result<u8, OutputMapError> {
            Ok(result.iterations() as u8)
        }
    }

    fn success(width: u32, height: u32) -> StubSuccessAlgorithm {
        StubSuccessAlgorithm {
            resolution: Resolution::new(width, height).unwrap(),
        }
    }

    fn contents(grid: &OutputGrid) -> Vec<u8> {
        grid.rows().collect::<Vec<_>>().concat()
    }

    fn raster(algorithm: &impl FractalAlgorithm, row_order: RowOrder) -> RasterAccumulator {
        RasterAccumulator::try_new(algorithm.resolution(), row_order).unwrap()
    }

    #[test]
    fn test_serial_fills_every_cell() {
        let algorithm = success(4, 3);
        let mut accumulator = raster(&algorithm, RowOrder::TopDown);

        let tally = generate_rows(
            &algorithm,
            &StubCountMap,
            &mut accumulator,
            RowOrder::TopDown,
            RowSchedule::serial(),
            &NeverCancel,
        )
        .unwrap();

        let grid = accumulator.finish().unwrap();
        assert_eq!(contents(&grid), vec![1, 2, 3, 4, 2, 3, 4, 5, 3, 4, 5, 6]);
        assert_eq!(tally, RowTally { escaped: 9, interior: 3 });
    }

    #[test]
    fn test_parallel_generates_same_results_as_serial() {
        let algorithm = success(37, 29);
        let mut serial = raster(&algorithm, RowOrder::TopDown);
        let mut parallel = raster(&algorithm, RowOrder::TopDown);

        let serial_tally = generate_rows(
            &algorithm,
            &StubCountMap,
            &mut serial,
            RowOrder::TopDown,
            RowSchedule::serial(),
            &NeverCancel,
        )
        .unwrap();
        let parallel_tally = generate_rows(
            &algorithm,
            &StubCountMap,
            &mut parallel,
            RowOrder::TopDown,
            RowSchedule::parallel(5),
            &NeverCancel,
        )
        .unwrap();

        assert_eq!(serial_tally, parallel_tally);
        assert_eq!(
            contents(&serial.finish().unwrap()),
            contents(&parallel.finish().unwrap())
        );
    }

    #[test]
    fn test_text_rows_arrive_in_row_order() {
        let algorithm = success(3, 3);
        let mut top_down = TextAccumulator::try_new(algorithm.resolution(), 1).unwrap();
        let mut bottom_up = TextAccumulator::try_new(algorithm.resolution(), 1).unwrap();

        for (accumulator, order) in [
            (&mut top_down, RowOrder::TopDown),
            (&mut bottom_up, RowOrder::BottomUp),
        ] {
            generate_rows(
                &algorithm,
                &AsciiGlyphs::default(),
                accumulator,
                order,
                RowSchedule::parallel(2),
                &NeverCancel,
            )
            .unwrap();
        }

        assert_eq!(top_down.finish().unwrap().as_str(), " **\n* *\n** \n");
        assert_eq!(bottom_up.finish().unwrap().as_str(), "** \n* *\n **\n");
    }

    #[test]
    fn test_single_pixel_grid() {
        let algorithm = success(1, 1);
        let mut accumulator = raster(&algorithm, RowOrder::TopDown);

        generate_rows(
            &algorithm,
            &StubCountMap,
            &mut accumulator,
            RowOrder::TopDown,
            RowSchedule::parallel(8),
            &NeverCancel,
        )
        .unwrap();

        assert_eq!(contents(&accumulator.finish().unwrap()), vec![1]);
    }

    #[test]
    fn test_propagates_algorithm_failure() {
        let algorithm = StubFailureAlgorithm {
            resolution: Resolution::new(3, 4).unwrap(),
        };
        let mut accumulator = raster(&algorithm, RowOrder::TopDown);

        for schedule in [RowSchedule::serial(), RowSchedule::parallel(2)] {
            let result = generate_rows(
                &algorithm,
                &StubCountMap,
                &mut accumulator,
                RowOrder::TopDown,
                schedule,
                &NeverCancel,
            );

            assert!(matches!(result, Err(GenerateRowsError::Algorithm(_))));
        }
    }

    #[test]
    fn test_returns_cancelled_when_token_is_cancelled() {
        let algorithm = success(10, 8);
        let mut accumulator = raster(&algorithm, RowOrder::TopDown);
        let cancel_token = || true;

        let result = generate_rows(
            &algorithm,
            &StubCountMap,
            &mut accumulator,
            RowOrder::TopDown,
            RowSchedule::parallel(4),
            &cancel_token,
        );

        assert!(matches!(result, Err(GenerateRowsError::Cancelled(_))));
    }

    #[test]
    fn test_cancels_between_blocks() {
        let algorithm = success(2, 8);
        let mut accumulator = raster(&algorithm, RowOrder::TopDown);
        let polls = AtomicUsize::new(0);
        // block check + 2 row checks per block of two rows
        let cancel_token = || polls.fetch_add(1, Ordering::Relaxed) >= 3;

        let result = generate_rows(
            &algorithm,
            &StubCountMap,
            &mut accumulator,
            RowOrder::TopDown,
            RowSchedule {
                parallel: false,
                rows_per_block: 2,
            },
            &cancel_token,
        );

        assert!(matches!(result, Err(GenerateRowsError::Cancelled(_))));
        assert!(matches!(
            accumulator.finish(),
            Err(AccumulateError::Incomplete { rows_written: 2, height: 8 })
        ));
    }

    #[test]
    fn test_cancellation_polled_multiple_times_on_wide_rows() {
        let algorithm = success(3000, 2);
        let mut accumulator = raster(&algorithm, RowOrder::TopDown);
        let polls = AtomicUsize::new(0);
        let cancel_token = || {
            polls.fetch_add(1, Ordering::Relaxed);
            false
        };

        let result = generate_rows(
            &algorithm,
            &StubCountMap,
            &mut accumulator,
            RowOrder::TopDown,
            RowSchedule::parallel(2),
            &cancel_token,
        );

        assert!(result.is_ok());
        // one block poll plus polls at pixels 0, 1024 and 2048 of both rows
        let polls = polls.load(Ordering::Relaxed);
        assert!(polls >= 7, "Expected at least 7 polls, got {}", polls);
    }

    #[test]
    fn test_error_displays() {
        let cancelled: GenerateRowsError<StubError> = GenerateRowsError::Cancelled(Cancelled);
        let algorithm: GenerateRowsError<StubError> = GenerateRowsError::Algorithm(StubError {});

        assert_eq!(cancelled.to_string(), "render cancelled");
        assert_eq!(algorithm.to_string(), "algorithm error: StubError");
    }
}

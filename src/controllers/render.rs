use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::controllers::errors::RenderError;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::ports::render_observer::RenderObserver;
use crate::controllers::render_config::{ConfigError, RenderConfig};
use crate::core::actions::accumulate::ports::accumulator::Accumulator;
use crate::core::actions::accumulate::raster_accumulator::RasterAccumulator;
use crate::core::actions::accumulate::text_accumulator::TextAccumulator;
use crate::core::actions::cancellation::{CancelToken, NeverCancel};
use crate::core::actions::generate_fractal::generate_rows::{RowSchedule, generate_rows};
use crate::core::actions::map_output::ports::output_map::OutputMap;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::output_maps::grayscale_ramp::GrayscaleRamp;
use crate::core::fractals::mandelbrot::output_maps::output_mode::OutputMode;
use crate::core::util::calculate_rows_per_block::calculate_rows_per_block;
use crate::presenters::file::ppm::PpmFilePresenter;
use crate::presenters::file::text::TextFilePresenter;
use crate::storage::write_atomic::write_atomic;

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderReport {
    pub resolution: Resolution,
    pub mode: OutputMode,
    pub escaped_cells: u64,
    pub interior_cells: u64,
    pub evaluation_elapsed: Duration,
    pub total_elapsed: Duration,
    pub path: PathBuf,
}

/// Renders `config` to its output file.
///
/// Either the whole file is written or, on any error, nothing is left at the
/// output path.
pub fn render<O>(config: &RenderConfig, observer: &mut O) -> Result<RenderReport, RenderError>
where
    O: RenderObserver + ?Sized,
{
    render_cancelable(config, observer, &NeverCancel)
}

/// Like [`render`], but stops with [`RenderError::Cancelled`] once `cancel` fires.
pub fn render_cancelable<O, C>(
    config: &RenderConfig,
    observer: &mut O,
    cancel: &C,
) -> Result<RenderReport, RenderError>
where
    O: RenderObserver + ?Sized,
    C: CancelToken,
{
    let start = Instant::now();
    let params = config.validate()?;
    let algorithm = MandelbrotAlgorithm::new(Viewport::new(config.region, config.resolution), params);
    let pool = build_pool(config.threads)?;

    let run = Run {
        config,
        algorithm: &algorithm,
        pool: pool.as_ref(),
        start,
    };

    match config.mode {
        OutputMode::Raster => {
            let ramp = GrayscaleRamp::new(params.max_iterations(), config.palette_size)
                .map_err(ConfigError::from)?;
            let accumulator = RasterAccumulator::try_new(config.resolution, config.row_order)?;
            let presenter = PpmFilePresenter::new(config.comment.as_deref());

            run.execute(&ramp, accumulator, &presenter, observer, cancel)
        }
        OutputMode::Ascii => {
            let accumulator = TextAccumulator::try_new(config.resolution, config.glyph_width)?;

            run.execute(
                &config.glyphs,
                accumulator,
                &TextFilePresenter::new(),
                observer,
                cancel,
            )
        }
    }
}

struct Run<'a> {
    config: &'a RenderConfig,
    algorithm: &'a MandelbrotAlgorithm,
    pool: Option<&'a ThreadPool>,
    start: Instant,
}

impl Run<'_> {
    fn execute<Map, Acc, P, O, C>(
        &self,
        output_map: &Map,
        mut accumulator: Acc,
        presenter: &P,
        observer: &mut O,
        cancel: &C,
    ) -> Result<RenderReport, RenderError>
    where
        Map: OutputMap,
        Acc: Accumulator<Symbol = Map::Symbol> + Send,
        P: FilePresenterPort<Acc::Output>,
        O: RenderObserver + ?Sized,
        C: CancelToken,
    {
        let config = self.config;
        let schedule = schedule_for(config.threads, config.resolution.height(), self.pool);

        observer.evaluation_started(config);
        let evaluation_start = Instant::now();

        let mut generate = || {
            generate_rows(
                self.algorithm,
                output_map,
                &mut accumulator,
                config.row_order,
                schedule,
                cancel,
            )
        };
        let tally = match self.pool {
            Some(pool) => pool.install(generate),
            None => generate(),
        }?;

        let evaluation_elapsed = evaluation_start.elapsed();
        observer.evaluation_finished(evaluation_elapsed);

        let output = accumulator.finish()?;
        write_atomic(presenter, &output, &config.output)?;

        let total_elapsed = self.start.elapsed();
        observer.serialization_finished(&config.output, total_elapsed);

        Ok(RenderReport {
            resolution: config.resolution,
            mode: config.mode,
            escaped_cells: tally.escaped,
            interior_cells: tally.interior,
            evaluation_elapsed,
            total_elapsed,
            path: config.output.clone(),
        })
    }
}

fn build_pool(threads: Option<usize>) -> Result<Option<ThreadPool>, RenderError> {
    match threads {
        Some(n) if n > 1 => ThreadPoolBuilder::new()
            .num_threads(n)
            .build()
            .map(Some)
            .map_err(RenderError::ThreadPool),
        _ => Ok(None),
    }
}

fn schedule_for(threads: Option<usize>, height: u32, pool: Option<&ThreadPool>) -> RowSchedule {
    if threads == Some(1) {
        return RowSchedule::serial();
    }

    let workers = pool
        .map(ThreadPool::current_num_threads)
        .unwrap_or_else(rayon::current_num_threads);

    RowSchedule::parallel(calculate_rows_per_block(
        NonZeroUsize::new(workers).unwrap_or(NonZeroUsize::MIN),
        height,
    ))
}

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_result::IterationResult;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;
use crate::core::fractals::mandelbrot::tie_rule::TieRule;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

/// Escape radius 2.0, compared squared.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Runs `z <- z² + c` from `z = 0` until `|z| > 2` or `max_iterations` steps.
///
/// The count starts at one for the first step, so any `c` already outside the
/// escape radius escapes at `1`. `max_iterations` must be at least one; a cap
/// of zero takes no steps and reports an interior point with zero iterations.
#[must_use]
pub fn evaluate(c: Complex, max_iterations: u32, tie_rule: TieRule) -> IterationResult {
    let mut z = Complex::ZERO;

    for iteration in 1..=max_iterations {
        z = z * z + c;

        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            let escaped = !(tie_rule == TieRule::CapWins && iteration == max_iterations);
            return IterationResult::new(iteration, escaped);
        }
    }

    IterationResult::new(max_iterations, false)
}

#[derive(Debug)]
pub struct MandelbrotAlgorithm {
    viewport: Viewport,
    params: MandelbrotParams,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = IterationResult;
    type Failure = PixelToComplexCoordsError;

    fn resolution(&self) -> Resolution {
        self.viewport.resolution()
    }

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, &self.viewport)?;

        Ok(evaluate(
            c,
            self.params.max_iterations(),
            self.params.tie_rule(),
        ))
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(viewport: Viewport, params: MandelbrotParams) -> Self {
        Self { viewport, params }
    }
}

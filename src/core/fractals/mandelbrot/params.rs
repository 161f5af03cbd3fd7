use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::tie_rule::TieRule;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotParams {
    max_iterations: u32,
    tie_rule: TieRule,
}

impl MandelbrotParams {
    pub fn new(max_iterations: u32, tie_rule: TieRule) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self {
            max_iterations,
            tie_rule,
        })
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn tie_rule(&self) -> TieRule {
        self.tie_rule
    }
}

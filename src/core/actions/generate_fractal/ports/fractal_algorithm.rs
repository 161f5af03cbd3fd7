use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use std::error::Error;

/// Per-pixel computation driven by the row generators.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn resolution(&self) -> Resolution;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}

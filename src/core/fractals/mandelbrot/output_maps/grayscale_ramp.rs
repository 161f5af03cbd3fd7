use crate::core::actions::map_output::ports::output_map::{OutputMap, OutputMapError};
use crate::core::data::iteration_result::IterationResult;

pub const DEFAULT_PALETTE_SIZE: u16 = 256;
pub const MAX_PALETTE_SIZE: u16 = 256;

/// Linear grayscale ramp: interior points are black, escaped points get
/// `floor(J * palette_size / max_iterations)` clamped into the palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrayscaleRamp {
    max_iterations: u32,
    palette_size: u16,
    scale: f64,
}

impl GrayscaleRamp {
    pub fn new(max_iterations: u32, palette_size: u16) -> Result<Self, OutputMapError> {
        if max_iterations == 0 {
            return Err(OutputMapError::ZeroMaxIterations);
        }

        if palette_size == 0 || palette_size > MAX_PALETTE_SIZE {
            return Err(OutputMapError::InvalidPaletteSize { palette_size });
        }

        Ok(Self {
            max_iterations,
            palette_size,
            scale: f64::from(palette_size) / f64::from(max_iterations),
        })
    }
}

impl OutputMap for GrayscaleRamp {
    type Symbol = u8;

    fn map(&self, result: IterationResult) -> Result<u8, OutputMapError> {
        let iterations = result.iterations();

        if iterations > self.max_iterations {
            return Err(OutputMapError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            });
        }

        if result.is_interior() {
            return Ok(0);
        }

        let top = f64::from(self.palette_size - 1);
        let level = (f64::from(iterations) * self.scale).floor().clamp(0.0, top);

        Ok(level as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_is_black() {
        let ramp = GrayscaleRamp::new(100, DEFAULT_PALETTE_SIZE).unwrap();

        assert_eq!(ramp.map(IterationResult::new(100, false)), Ok(0));
        assert_eq!(ramp.map(IterationResult::new(7, false)), Ok(0));
    }

    #[test]
    fn test_escaped_points_follow_linear_ramp() {
        let ramp = GrayscaleRamp::new(50, DEFAULT_PALETTE_SIZE).unwrap();

        // 256 / 50 = 5.12 per iteration
        assert_eq!(ramp.map(IterationResult::new(1, true)), Ok(5));
        assert_eq!(ramp.map(IterationResult::new(2, true)), Ok(10));
        assert_eq!(ramp.map(IterationResult::new(3, true)), Ok(15));
        assert_eq!(ramp.map(IterationResult::new(25, true)), Ok(128));
    }

    #[test]
    fn test_escape_at_cap_is_clamped_to_palette() {
        let ramp = GrayscaleRamp::new(50, DEFAULT_PALETTE_SIZE).unwrap();

        assert_eq!(ramp.map(IterationResult::new(50, true)), Ok(255));
    }

    #[test]
    fn test_small_palette() {
        let ramp = GrayscaleRamp::new(10, 4).unwrap();

        assert_eq!(ramp.map(IterationResult::new(2, true)), Ok(0));
        assert_eq!(ramp.map(IterationResult::new(5, true)), Ok(2));
        assert_eq!(ramp.map(IterationResult::new(10, true)), Ok(3));
    }

    #[test]
    fn test_map_is_deterministic() {
        let ramp = GrayscaleRamp::new(1000, DEFAULT_PALETTE_SIZE).unwrap();

        for iterations in 1..=1000 {
            let result = IterationResult::new(iterations, true);

            assert_eq!(ramp.map(result), ramp.map(result));
        }
    }

    #[test]
    fn test_map_returns_error_when_iterations_exceed_max() {
        let ramp = GrayscaleRamp::new(100, DEFAULT_PALETTE_SIZE).unwrap();

        assert_eq!(
            ramp.map(IterationResult::new(101, true)),
            Err(OutputMapError::IterationsExceedMax {
                iterations: 101,
                max_iterations: 100,
            })
        );
    }

    #[test]
    fn test_new_validates_arguments() {
        assert_eq!(
            GrayscaleRamp::new(0, 256),
            Err(OutputMapError::ZeroMaxIterations)
        );
        assert_eq!(
            GrayscaleRamp::new(10, 0),
            Err(OutputMapError::InvalidPaletteSize { palette_size: 0 })
        );
        assert_eq!(
            GrayscaleRamp::new(10, 257),
            Err(OutputMapError::InvalidPaletteSize { palette_size: 257 })
        );
    }
}

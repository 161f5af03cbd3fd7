use crate::core::data::complex::Complex;
use crate::core::data::region::Region;
use crate::core::data::resolution::Resolution;

/// A [`Region`] sampled at a [`Resolution`].
///
/// Pixel `(0, 0)` sits on [`Region::begin`] and pixel
/// `(width - 1, height - 1)` on [`Region::end`]. A side of a single pixel
/// collapses onto the lower bound of that axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    region: Region,
    resolution: Resolution,
    begin: Complex,
    end: Complex,
}

impl Viewport {
    #[must_use]
    pub fn new(region: Region, resolution: Resolution) -> Self {
        Self {
            region,
            resolution,
            begin: region.begin(),
            end: region.end(),
        }
    }

    #[must_use]
    pub fn region(&self) -> Region {
        self.region
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn begin(&self) -> Complex {
        self.begin
    }

    #[must_use]
    pub fn end(&self) -> Complex {
        self.end
    }

    /// Horizontal distance between neighbouring pixel centres, zero for a single column.
    #[must_use]
    pub fn delta_x(&self) -> f64 {
        axis_delta(self.begin.real, self.end.real, self.resolution.width())
    }

    /// Vertical distance between neighbouring pixel centres, zero for a single row.
    #[must_use]
    pub fn delta_y(&self) -> f64 {
        axis_delta(self.begin.imag, self.end.imag, self.resolution.height())
    }
}

fn axis_delta(begin: f64, end: f64, samples: u32) -> f64 {
    if samples < 2 {
        return 0.0;
    }

    (end - begin) / f64::from(samples - 1)
}

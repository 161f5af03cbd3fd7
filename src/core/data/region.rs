use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RegionError {
    NonPositiveRadius { radius: f64 },
    NonFiniteCenter { center: Complex },
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveRadius { radius } => {
                write!(f, "region radius must be positive and finite: {}", radius)
            }
            Self::NonFiniteCenter { center } => {
                write!(
                    f,
                    "region center must be finite: ({}, {})",
                    center.real, center.imag
                )
            }
        }
    }
}

impl Error for RegionError {}

/// A square patch of the complex plane given by its center and half-extent.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Region {
    center: Complex,
    radius: f64,
}

impl Region {
    pub fn new(center: Complex, radius: f64) -> Result<Self, RegionError> {
        if !center.is_finite() {
            return Err(RegionError::NonFiniteCenter { center });
        }

        // `!(radius > 0.0)` also rejects NaN
        if !(radius > 0.0) || !radius.is_finite() {
            return Err(RegionError::NonPositiveRadius { radius });
        }

        Ok(Self { center, radius })
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Lower corner: `(Cx - R, Cy - R)`.
    #[must_use]
    pub fn begin(&self) -> Complex {
        Complex {
            real: self.center.real - self.radius,
            imag: self.center.imag - self.radius,
        }
    }

    /// Upper corner: `(Cx + R, Cy + R)`.
    #[must_use]
    pub fn end(&self) -> Complex {
        Complex {
            real: self.center.real + self.radius,
            imag: self.center.imag + self.radius,
        }
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        let begin = self.begin();
        let end = self.end();

        begin.real <= point.real
            && begin.imag <= point.imag
            && end.real >= point.real
            && end.imag >= point.imag
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},{},{}]",
            self.center.real, self.center.imag, self.radius
        )
    }
}

use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelToComplexCoordsError {
    PointOutsideResolution { point: Point, resolution: Resolution },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideResolution { point, resolution } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {} pixel grid",
                    point.x, point.y, resolution
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Maps a pixel to its sample on the complex plane.
///
/// Column `x` runs from `begin.real` to `end.real` and row `y` from
/// `begin.imag` to `end.imag`. Both ends of each axis are hit exactly.
pub fn pixel_to_complex_coords(
    pixel: Point,
    viewport: &Viewport,
) -> Result<Complex, PixelToComplexCoordsError> {
    let resolution = viewport.resolution();

    if !resolution.contains_point(pixel) {
        return Err(PixelToComplexCoordsError::PointOutsideResolution {
            point: pixel,
            resolution,
        });
    }

    let begin = viewport.begin();
    let end = viewport.end();

    Ok(Complex {
        real: axis_coord(pixel.x, resolution.width(), begin.real, end.real),
        imag: axis_coord(pixel.y, resolution.height(), begin.imag, end.imag),
    })
}

fn axis_coord(index: u32, samples: u32, begin: f64, end: f64) -> f64 {
    if samples == 1 {
        return begin;
    }

    // weighted on both bounds so t == 0 and t == 1 reproduce them bit for bit
    let t = f64::from(index) / f64::from(samples - 1);
    begin * (1.0 - t) + end * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::region::Region;

    fn viewport(center: Complex, radius: f64, width: u32, height: u32) -> Viewport {
        Viewport::new(
            Region::new(center, radius).unwrap(),
            Resolution::new(width, height).unwrap(),
        )
    }

    #[test]
    fn test_pixel_to_complex_top_left() {
        let viewport = viewport(Complex::new(-0.5, 0.0), 1.5, 101, 101);

        let result = pixel_to_complex_coords(Point { x: 0, y: 0 }, &viewport).unwrap();

        assert_eq!(result, Complex::new(-2.0, -1.5));
    }

    #[test]
    fn test_pixel_to_complex_bottom_right() {
        let viewport = viewport(Complex::new(-0.5, 0.0), 1.5, 101, 77);

        let result = pixel_to_complex_coords(Point { x: 100, y: 76 }, &viewport).unwrap();

        assert_eq!(result, Complex::new(1.0, 1.5));
    }

    #[test]
    fn test_corners_are_exact_for_awkward_regions() {
        let viewport = viewport(Complex::new(-0.16070135, 1.0375665), 1.0e-7, 333, 217);
        let begin = viewport.begin();
        let end = viewport.end();

        let top_left = pixel_to_complex_coords(Point { x: 0, y: 0 }, &viewport).unwrap();
        let bottom_right = pixel_to_complex_coords(Point { x: 332, y: 216 }, &viewport).unwrap();

        assert_eq!(top_left, begin);
        assert_eq!(bottom_right, end);
    }

    #[test]
    fn test_pixel_to_complex_center() {
        let viewport = viewport(Complex::new(-0.5, 0.0), 1.5, 3, 3);

        let result = pixel_to_complex_coords(Point { x: 1, y: 1 }, &viewport).unwrap();

        assert_eq!(result, Complex::new(-0.5, 0.0));
    }

    #[test]
    fn test_mapping_is_affine() {
        let viewport = viewport(Complex::new(0.0, 0.0), 2.0, 5, 9);

        for x in 0..5 {
            for y in 0..9 {
                let result = pixel_to_complex_coords(Point { x, y }, &viewport).unwrap();
                let expected_real = viewport.begin().real + f64::from(x) * viewport.delta_x();
                let expected_imag = viewport.begin().imag + f64::from(y) * viewport.delta_y();

                assert!((result.real - expected_real).abs() < 1e-12);
                assert!((result.imag - expected_imag).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_single_pixel_axes_map_to_lower_bound() {
        let single_row = viewport(Complex::new(0.0, 0.0), 1.0, 4, 1);
        let single_column = viewport(Complex::new(0.0, 0.0), 1.0, 1, 4);

        let on_row = pixel_to_complex_coords(Point { x: 3, y: 0 }, &single_row).unwrap();
        let on_column = pixel_to_complex_coords(Point { x: 0, y: 3 }, &single_column).unwrap();

        assert_eq!(on_row, Complex::new(1.0, -1.0));
        assert_eq!(on_column, Complex::new(-1.0, 1.0));
    }

    #[test]
    fn test_shared_samples_survive_resolution_changes() {
        let coarse = viewport(Complex::new(-0.5, 0.0), 1.5, 3, 3);
        let fine = viewport(Complex::new(-0.5, 0.0), 1.5, 5, 5);

        for (coarse_index, fine_index) in [(0, 0), (1, 2), (2, 4)] {
            let a = pixel_to_complex_coords(Point { x: coarse_index, y: coarse_index }, &coarse)
                .unwrap();
            let b = pixel_to_complex_coords(Point { x: fine_index, y: fine_index }, &fine).unwrap();

            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_pixel_outside_resolution_fails() {
        let viewport = viewport(Complex::new(0.0, 0.0), 1.0, 10, 10);
        let point = Point { x: 10, y: 3 };

        assert_eq!(
            pixel_to_complex_coords(point, &viewport),
            Err(PixelToComplexCoordsError::PointOutsideResolution {
                point,
                resolution: viewport.resolution(),
            })
        );
    }
}

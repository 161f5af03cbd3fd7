use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::output_grid::OutputGrid;
use std::io::Write;

pub const DEFAULT_PPM_COMMENT: &str = "Mandelbrot";

/// Writes a grid as a plain-text P3 raster, one `v v v` line per pixel.
pub struct PpmFilePresenter {
    comment: Option<String>,
}

impl FilePresenterPort<OutputGrid> for PpmFilePresenter {
    fn present(&self, grid: &OutputGrid, out: &mut dyn Write) -> std::io::Result<()> {
        let resolution = grid.resolution();

        writeln!(out, "P3")?;
        if let Some(comment) = &self.comment {
            writeln!(out, "#{}", comment)?;
        }
        writeln!(out, "{} {}", resolution.width(), resolution.height())?;
        writeln!(out, "255")?;

        for row in grid.rows() {
            for value in row {
                writeln!(out, "{} {} {}", value, value, value)?;
            }
        }

        Ok(())
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new(Some(DEFAULT_PPM_COMMENT))
    }
}

impl PpmFilePresenter {
    /// Line breaks in `comment` are flattened so the header stays one comment line.
    pub fn new(comment: Option<&str>) -> Self {
        Self {
            comment: comment.map(|c| c.replace(['\r', '\n'], " ")),
        }
    }
}

use crate::core::actions::accumulate::ports::accumulator::{
    AccumulateError, Accumulator, RowLedger,
};
use crate::core::data::resolution::Resolution;
use crate::core::data::text_stream::TextStream;

/// Streaming strategy for text output: glyphs are appended in arrival order,
/// each repeated `glyph_width` times, with a newline after every row.
#[derive(Debug)]
pub struct TextAccumulator {
    stream: TextStream,
    ledger: RowLedger,
    glyph_width: usize,
}

impl TextAccumulator {
    pub fn try_new(resolution: Resolution, glyph_width: usize) -> Result<Self, AccumulateError> {
        let glyph_width = glyph_width.max(1);
        let cells = resolution.cell_count();
        let bytes = (resolution.width() as usize)
            .checked_mul(glyph_width)
            .and_then(|row| row.checked_add(1))
            .and_then(|row| row.checked_mul(resolution.height() as usize))
            .ok_or(AccumulateError::AllocationFailed { cells })?;

        let stream = TextStream::try_with_capacity(bytes)
            .map_err(|_| AccumulateError::AllocationFailed { cells })?;

        Ok(Self {
            stream,
            ledger: RowLedger::new(resolution.width(), resolution.height()),
            glyph_width,
        })
    }
}

impl Accumulator for TextAccumulator {
    type Symbol = char;
    type Output = TextStream;

    fn push_row(&mut self, row: u32, symbols: &[char]) -> Result<(), AccumulateError> {
        self.ledger.record(row, symbols.len())?;

        for &glyph in symbols {
            for _ in 0..self.glyph_width {
                self.stream.push_glyph(glyph);
            }
        }
        self.stream.end_row();

        Ok(())
    }

    fn finish(self) -> Result<TextStream, AccumulateError> {
        self.ledger.check_complete()?;

        Ok(self.stream)
    }
}

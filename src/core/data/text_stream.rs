use std::collections::TryReserveError;

/// Append-only glyph buffer with a newline after every completed row.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextStream {
    buffer: String,
}

impl TextStream {
    /// Reserves `capacity` bytes up front, reporting allocation failure.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        let mut buffer = String::new();
        buffer.try_reserve_exact(capacity)?;

        Ok(Self { buffer })
    }

    pub fn push_glyph(&mut self, glyph: char) {
        self.buffer.push(glyph);
    }

    pub fn end_row(&mut self) {
        self.buffer.push('\n');
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

use crate::core::actions::map_output::ports::output_map::{OutputMap, OutputMapError};
use crate::core::data::iteration_result::IterationResult;

pub const DEFAULT_INSIDE_GLYPH: char = ' ';
pub const DEFAULT_ESCAPED_GLYPH: char = '*';

/// Two-symbol text rendering; every escape speed collapses to one glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiGlyphs {
    inside: char,
    escaped: char,
}

impl AsciiGlyphs {
    pub fn new(inside: char, escaped: char) -> Result<Self, OutputMapError> {
        for glyph in [inside, escaped] {
            if glyph.is_control() {
                return Err(OutputMapError::InvalidGlyph { glyph });
            }
        }

        if inside == escaped {
            return Err(OutputMapError::IndistinctGlyphs { glyph: inside });
        }

        Ok(Self { inside, escaped })
    }

    #[must_use]
    pub fn inside(&self) -> char {
        self.inside
    }

    #[must_use]
    pub fn escaped(&self) -> char {
        self.escaped
    }
}

impl Default for AsciiGlyphs {
    fn default() -> Self {
        Self {
            inside: DEFAULT_INSIDE_GLYPH,
            escaped: DEFAULT_ESCAPED_GLYPH,
        }
    }
}

impl OutputMap for AsciiGlyphs {
    type Symbol = char;

    fn map(&self, result: IterationResult) -> Result<char, OutputMapError> {
        if result.escaped() {
            Ok(self.escaped)
        } else {
            Ok(self.inside)
        }
    }
}

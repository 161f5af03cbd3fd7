use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::text_stream::TextStream;
use std::io::Write;

/// Writes the glyph stream verbatim, no header.
#[derive(Debug, Default)]
pub struct TextFilePresenter {}

impl FilePresenterPort<TextStream> for TextFilePresenter {
    fn present(&self, stream: &TextStream, out: &mut dyn Write) -> std::io::Result<()> {
        out.write_all(stream.as_str().as_bytes())
    }
}

impl TextFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

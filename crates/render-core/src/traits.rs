use crate::error::RenderError;
use crate::types::DocumentInfo;
use billforge_layout::{LaidOutDocument, LaidOutPage};
use std::io::{Seek, Write};

/// A backend that serializes laid-out pages into a document format.
pub trait DocumentRenderer<W: Write + Seek> {
    /// Start a document. The whole layout is passed so shared resources
    /// (fonts, images) can be registered before any page is written.
    fn begin_document(&mut self, writer: W, document: &LaidOutDocument) -> Result<(), RenderError>;

    fn render_page(&mut self, page: &LaidOutPage) -> Result<(), RenderError>;

    fn finish(self: Box<Self>, info: &DocumentInfo) -> Result<W, RenderError>;
}

/// Drive a renderer over every page of `document`.
pub fn render_document<W: Write + Seek>(
    mut renderer: Box<dyn DocumentRenderer<W>>,
    writer: W,
    document: &LaidOutDocument,
    info: &DocumentInfo,
) -> Result<W, RenderError> {
    renderer.begin_document(writer, document)?;
    for page in &document.pages {
        renderer.render_page(page)?;
    }
    renderer.finish(info)
}

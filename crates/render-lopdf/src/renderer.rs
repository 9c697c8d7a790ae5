use crate::helpers::PageContext;
use crate::resources::ResourceNames;
use crate::writer::PdfWriter;
use billforge_layout::{LaidOutDocument, LaidOutPage};
use billforge_render_core::{DocumentInfo, DocumentRenderer, RenderError};
use lopdf::{Object, StringFormat, dictionary};
use std::io::{Cursor, Seek, Write};

const PDF_VERSION: &str = "1.7";

/// Serializes laid-out pages to PDF with standard-14 fonts, so nothing
/// but images needs embedding.
pub struct LopdfRenderer<W: Write + Seek> {
    writer: Option<PdfWriter<W>>,
    names: ResourceNames,
}

impl<W: Write + Seek> Default for LopdfRenderer<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Seek> LopdfRenderer<W> {
    pub fn new() -> Self {
        Self {
            writer: None,
            names: ResourceNames::default(),
        }
    }

    fn writer_mut(&mut self) -> Result<&mut PdfWriter<W>, RenderError> {
        self.writer
            .as_mut()
            .ok_or_else(|| RenderError::Other("Document not started".into()))
    }
}

impl LopdfRenderer<Cursor<Vec<u8>>> {
    /// Render a whole document into memory.
    pub fn render_to_vec(document: &LaidOutDocument, info: &DocumentInfo) -> Result<Vec<u8>, RenderError> {
        let renderer: Box<dyn DocumentRenderer<Cursor<Vec<u8>>>> = Box::new(Self::new());
        let cursor = billforge_render_core::render_document(renderer, Cursor::new(Vec::new()), document, info)?;
        Ok(cursor.into_inner())
    }
}

fn text_string(s: &str) -> Object {
    Object::String(crate::helpers::to_win_ansi(s), StringFormat::Literal)
}

impl<W: Write + Seek> DocumentRenderer<W> for LopdfRenderer<W> {
    fn begin_document(&mut self, writer: W, document: &LaidOutDocument) -> Result<(), RenderError> {
        let names = ResourceNames::collect(document);
        let mut pdf = PdfWriter::new(writer, PDF_VERSION)?;
        let resources = names.write_resources(&mut pdf)?;
        pdf.set_resources(resources);
        log::debug!(
            "Started PDF with {} font(s) and {} image(s)",
            names.font_count(),
            names.image_count()
        );
        self.names = names;
        self.writer = Some(pdf);
        Ok(())
    }

    fn render_page(&mut self, page: &LaidOutPage) -> Result<(), RenderError> {
        let mut page_ctx = PageContext::new(page.height, &self.names);
        for element in &page.elements {
            page_ctx.draw_element(element)?;
        }
        let content = page_ctx.finish();

        let writer = self.writer_mut()?;
        let content_id = writer.buffer_content_stream(content)?;
        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => writer.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), page.width.into(), page.height.into()],
            "Contents" => content_id,
            "Resources" => writer.resources_id,
        };
        let page_id = writer.buffer_object(page_dict.into());
        writer.add_page(page_id);
        Ok(())
    }

    fn finish(self: Box<Self>, info: &DocumentInfo) -> Result<W, RenderError> {
        let mut renderer = *self;
        let writer = renderer
            .writer
            .take()
            .ok_or_else(|| RenderError::Other("Document was never started with begin_document".into()))?;
        log::debug!("Finishing PDF with {} page(s)", writer.page_count());
        let info = dictionary! {
            "Title" => text_string(&info.title),
            "Author" => text_string(&info.author),
            "Producer" => text_string(&info.producer),
        };
        writer.finish(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use billforge_layout::{
        EmbeddedImage, ImageElement, LayoutElement, PositionedElement, RectElement, TextElement, TextStyle,
    };
    use billforge_style::FontFamily;
    use billforge_types::{Color, Rect};
    use std::sync::Arc;

    fn text(x: f32, y: f32, content: &str, style: TextStyle) -> PositionedElement {
        PositionedElement::new(
            Rect::new(x, y, style.measure(content), style.line_height()),
            LayoutElement::Text(TextElement {
                content: content.to_string(),
                style,
            }),
        )
    }

    fn page(elements: Vec<PositionedElement>) -> LaidOutPage {
        LaidOutPage {
            width: 612.0,
            height: 792.0,
            elements,
        }
    }

    fn info() -> DocumentInfo {
        DocumentInfo::new("Invoice 1001", "Acme Builders")
    }

    fn two_page_document() -> LaidOutDocument {
        let body = TextStyle::new(FontFamily::Helvetica, 10.0);
        LaidOutDocument {
            pages: vec![
                page(vec![
                    text(48.0, 48.0, "Invoice", body.bold()),
                    PositionedElement::new(
                        Rect::new(48.0, 80.0, 516.0, 20.0),
                        LayoutElement::Rectangle(RectElement::filled(Color::rgb(240, 240, 240))),
                    ),
                    text(48.0, 84.0, "Framing labor", body),
                ]),
                page(vec![text(48.0, 48.0, "Page two", body)]),
            ],
            warnings: Vec::new(),
        }
    }

    #[test]
    fn renders_every_page_with_text() {
        let _ = env_logger::builder().is_test(true).try_init();
        let bytes = LopdfRenderer::render_to_vec(&two_page_document(), &info()).unwrap();
        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
        let first = doc.extract_text(&[1]).unwrap();
        assert!(first.contains("Framing labor"), "got {:?}", first);
        let second = doc.extract_text(&[2]).unwrap();
        assert!(second.contains("Page two"));
    }

    #[test]
    fn output_is_byte_identical_across_runs() {
        let a = LopdfRenderer::render_to_vec(&two_page_document(), &info()).unwrap();
        let b = LopdfRenderer::render_to_vec(&two_page_document(), &info()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn fonts_are_registered_once_per_face() {
        let bytes = LopdfRenderer::render_to_vec(&two_page_document(), &info()).unwrap();
        let raw = String::from_utf8_lossy(&bytes);
        assert_eq!(raw.matches("/BaseFont /Helvetica-Bold").count(), 1);
        assert_eq!(raw.matches("/BaseFont /Helvetica ").count(), 1);
    }

    #[test]
    fn shared_image_is_embedded_once_with_soft_mask() {
        let image = Arc::new(EmbeddedImage {
            width: 2,
            height: 1,
            rgb: vec![255, 0, 0, 0, 0, 255],
            alpha: Some(vec![255, 128]),
        });
        let drawn = |y: f32| {
            PositionedElement::new(
                Rect::new(48.0, y, 40.0, 20.0),
                LayoutElement::Image(ImageElement { image: image.clone() }),
            )
        };
        let document = LaidOutDocument {
            pages: vec![page(vec![drawn(48.0)]), page(vec![drawn(48.0)])],
            warnings: Vec::new(),
        };
        let bytes = LopdfRenderer::render_to_vec(&document, &info()).unwrap();
        let raw = String::from_utf8_lossy(&bytes);
        assert_eq!(raw.matches("/ColorSpace /DeviceRGB").count(), 1);
        assert_eq!(raw.matches("/SMask").count(), 1);
        assert_eq!(raw.matches("/Im1 Do").count(), 2);
        assert!(lopdf::Document::load_mem(&bytes).is_ok());
    }

    #[test]
    fn info_dictionary_carries_title_and_producer() {
        let bytes = LopdfRenderer::render_to_vec(&two_page_document(), &info()).unwrap();
        let raw = String::from_utf8_lossy(&bytes);
        assert!(raw.contains("/Title (Invoice 1001)"));
        assert!(raw.contains("/Producer (billforge)"));
        assert!(!raw.contains("/CreationDate"));
    }

    #[test]
    fn finishing_an_unstarted_document_fails() {
        let renderer: Box<LopdfRenderer<Cursor<Vec<u8>>>> = Box::new(LopdfRenderer::new());
        assert!(renderer.finish(&info()).is_err());
    }
}

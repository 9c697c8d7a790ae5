#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use billforge::{
    DocumentAssembler, DocumentData, ElementRole, EngineError, LaidOutDocument, RenderOutcome, TemplateConfig, TotalsLine,
};
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn from_outcome(outcome: &RenderOutcome) -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_bytes(outcome.bytes().to_vec())
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text of one page, 1-based
    pub fn page_text(&self, page: u32) -> String {
        self.doc.extract_text(&[page]).unwrap_or_default()
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Render with default engine settings and reload the output
pub fn generate_pdf(
    data: &DocumentData,
    template: Option<&TemplateConfig>,
) -> Result<(RenderOutcome, GeneratedPdf), Box<dyn std::error::Error>> {
    let outcome = render(data, template)?;
    let pdf = GeneratedPdf::from_outcome(&outcome)?;
    Ok((outcome, pdf))
}

pub fn render(data: &DocumentData, template: Option<&TemplateConfig>) -> Result<RenderOutcome, EngineError> {
    DocumentAssembler::default().render(data, template)
}

/// The printed value of one totals line, if that line was laid out
pub fn totals_value(layout: &LaidOutDocument, line: TotalsLine) -> Option<String> {
    layout
        .pages
        .iter()
        .flat_map(|page| &page.elements)
        .filter(|el| el.role == ElementRole::Totals(line))
        .filter_map(|el| el.text())
        .nth(1)
        .map(str::to_string)
}

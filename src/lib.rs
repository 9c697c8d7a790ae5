//! Estimate and invoice PDF generation.
//!
//! [`DocumentAssembler`] runs the whole pipeline: the template is resolved
//! fail-open, figures are formatted for the configured locale, sections and
//! the line-item table are paginated, and the pages are serialized to PDF.
//!
//! ```ignore
//! use billforge::{AssemblerBuilder, TemplateConfig};
//!
//! let assembler = AssemblerBuilder::new().with_locale("en-US").build()?;
//! let outcome = assembler.render(&data, Some(&TemplateConfig::default()))?;
//! std::fs::write(&outcome.document().file_name, outcome.bytes())?;
//! ```

mod assembler;
mod builder;
mod config;
mod error;
mod naming;
mod outcome;

pub use assembler::DocumentAssembler;
pub use builder::AssemblerBuilder;
pub use config::EngineConfig;
pub use error::EngineError;
pub use naming::suggested_file_name;
pub use outcome::{RenderOutcome, RenderWarning, RenderedDocument};

pub use billforge_format::{Catalog, Formatter, LocaleSettings, MessageKey, Translator};
pub use billforge_layout::{
    AssetKind, AssetWarning, ElementRole, LaidOutDocument, LaidOutPage, LayoutElement, PositionedElement, TotalsLine,
};
pub use billforge_style::{Margins, PageSize};
pub use billforge_template::{Feature, HeaderVariant, ResolvedConfig, TableVariant, TemplateConfig};
pub use billforge_totals::{BalanceState, Figure, TotalsDiscrepancy, TotalsError, TotalsSummary};
pub use billforge_types::{
    Color, Decimal, DocumentData, DocumentKind, DocumentStatus, ImageSource, LineItem, PartyRecord, PostalAddress,
    ProjectReference,
};

/// Render with default engine settings.
pub fn render(data: &DocumentData, template: Option<&TemplateConfig>) -> Result<RenderOutcome, EngineError> {
    DocumentAssembler::default().render(data, template)
}

/// Render a single-page preview with default engine settings.
pub fn render_preview(data: &DocumentData, template: Option<&TemplateConfig>) -> Result<RenderOutcome, EngineError> {
    DocumentAssembler::default().render_preview(data, template)
}

/// Table pagination arithmetic, for callers that plan page counts up front.
pub mod pagination {
    pub use billforge_layout::algorithms::pagination::{pages_needed, rows_per_page};
    pub use billforge_layout::table::{HEADER_HEIGHT, ROW_HEIGHT};
}

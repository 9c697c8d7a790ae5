use crate::builder::AssemblerBuilder;
use crate::error::EngineError;
use crate::naming::suggested_file_name;
use crate::outcome::{RenderOutcome, RenderWarning, RenderedDocument};
use billforge_format::{Formatter, Translator};
use billforge_layout::{FooterOptions, LaidOutDocument, LayoutEngine, RenderMode, SectionEnv};
use billforge_render_core::DocumentInfo;
use billforge_render_lopdf::LopdfRenderer;
use billforge_template::{ResolvedConfig, TemplateConfig, resolve, resolve_json};
use billforge_totals::{TotalsSummary, validate_totals};
use billforge_types::DocumentData;
use std::sync::Arc;

/// Turns a [`DocumentData`] record and a template into a paginated PDF.
///
/// The assembler holds only immutable settings. Every call builds its own
/// page stream and buffers, so one assembler can serve concurrent renders.
pub struct DocumentAssembler {
    engine: LayoutEngine,
    formatter: Formatter,
    translator: Arc<dyn Translator>,
    footer: FooterOptions,
}

impl Default for DocumentAssembler {
    fn default() -> Self {
        AssemblerBuilder::new().assemble()
    }
}

impl DocumentAssembler {
    pub(crate) fn new(
        engine: LayoutEngine,
        formatter: Formatter,
        translator: Arc<dyn Translator>,
        footer: FooterOptions,
    ) -> Self {
        Self {
            engine,
            formatter,
            translator,
            footer,
        }
    }

    pub fn builder() -> AssemblerBuilder {
        AssemblerBuilder::new()
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    pub fn translator(&self) -> &dyn Translator {
        self.translator.as_ref()
    }

    /// Render the final, paginated document.
    pub fn render(&self, data: &DocumentData, template: Option<&TemplateConfig>) -> Result<RenderOutcome, EngineError> {
        self.render_resolved(data, &resolve(template), RenderMode::Final)
    }

    /// Render a single growing page for on-screen preview. Figures are
    /// formatted exactly as in [`render`](Self::render).
    pub fn render_preview(
        &self,
        data: &DocumentData,
        template: Option<&TemplateConfig>,
    ) -> Result<RenderOutcome, EngineError> {
        self.render_resolved(data, &resolve(template), RenderMode::Preview)
    }

    /// Render from the JSON forms both inputs are usually stored in.
    ///
    /// Malformed document JSON is a hard error; a malformed template falls
    /// back to the defaults.
    pub fn render_json(&self, data_json: &str, template_json: Option<&str>) -> Result<RenderOutcome, EngineError> {
        let data: DocumentData = serde_json::from_str(data_json)?;
        self.render_resolved(&data, &resolve_json(template_json), RenderMode::Final)
    }

    /// Lay out the final document without serializing it.
    pub fn layout(&self, data: &DocumentData, template: Option<&TemplateConfig>) -> Result<LaidOutDocument, EngineError> {
        self.layout_resolved(data, &resolve(template), RenderMode::Final)
    }

    pub fn layout_preview(
        &self,
        data: &DocumentData,
        template: Option<&TemplateConfig>,
    ) -> Result<LaidOutDocument, EngineError> {
        self.layout_resolved(data, &resolve(template), RenderMode::Preview)
    }

    fn layout_resolved(
        &self,
        data: &DocumentData,
        config: &ResolvedConfig,
        mode: RenderMode,
    ) -> Result<LaidOutDocument, EngineError> {
        if let Some(field) = data.first_missing_required_field() {
            return Err(EngineError::MissingField(field));
        }
        let totals = TotalsSummary::for_document(data)?;
        let env = SectionEnv {
            data,
            config,
            formatter: &self.formatter,
            translator: self.translator.as_ref(),
            totals: &totals,
            footer: &self.footer,
            content_width: self.engine.content_width(),
            mode,
        };
        Ok(self.engine.layout(&env)?)
    }

    fn render_resolved(
        &self,
        data: &DocumentData,
        config: &ResolvedConfig,
        mode: RenderMode,
    ) -> Result<RenderOutcome, EngineError> {
        let layout = self.layout_resolved(data, config, mode)?;

        let title = format!("{} {}", data.document_kind.file_label(), data.document_number);
        let info = DocumentInfo::new(title, data.issuer.name.clone());
        let bytes = LopdfRenderer::render_to_vec(&layout, &info)?;

        let mut warnings: Vec<RenderWarning> = Vec::new();
        for warning in layout.warnings {
            log::warn!("{} {}: {}", data.document_kind, data.document_number, warning);
            warnings.push(RenderWarning::Asset(warning));
        }
        for discrepancy in validate_totals(data).discrepancies {
            log::warn!("{} {}: {}", data.document_kind, data.document_number, discrepancy);
            warnings.push(RenderWarning::TotalsMismatch(discrepancy));
        }

        let page_count = layout.pages.len();
        log::info!(
            "Rendered {} {} ({:?}): {} page(s), {} bytes, {} warning(s)",
            data.document_kind,
            data.document_number,
            mode,
            page_count,
            bytes.len(),
            warnings.len()
        );

        let document = RenderedDocument {
            bytes,
            page_count,
            file_name: suggested_file_name(data.document_kind, &data.document_number),
        };
        Ok(RenderOutcome::new(document, warnings))
    }
}

use billforge_format::FormatError;
use billforge_layout::LayoutError;
use billforge_render_core::RenderError;
use billforge_totals::TotalsError;
use thiserror::Error;

/// Hard failures of a render call.
///
/// Asset and template problems never appear here; they degrade into
/// placeholders, defaults and [`RenderWarning`](crate::RenderWarning)s.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Document is missing required field '{0}'")]
    MissingField(&'static str),

    #[error("Document data is not valid JSON: {0}")]
    Data(#[from] serde_json::Error),

    #[error("Formatting setup failed: {0}")]
    Format(#[from] FormatError),

    #[error("Totals could not be computed: {0}")]
    Totals(#[from] TotalsError),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),
}

//! What a successful render hands back to the caller.

use billforge_layout::AssetWarning;
use billforge_totals::TotalsDiscrepancy;
use std::fmt;

/// A finished PDF and the name it should be offered under.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub page_count: usize,
    pub file_name: String,
}

/// A non-blocking problem found while rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderWarning {
    /// A logo or signature could not be embedded; a placeholder was drawn.
    Asset(AssetWarning),
    /// Supplied figures disagree with recomputed ones. The supplied figures
    /// were printed.
    TotalsMismatch(TotalsDiscrepancy),
}

impl fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderWarning::Asset(warning) => write!(f, "{}", warning),
            RenderWarning::TotalsMismatch(discrepancy) => write!(f, "{}", discrepancy),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    Success(RenderedDocument),
    SuccessWithWarnings(RenderedDocument, Vec<RenderWarning>),
}

impl RenderOutcome {
    pub(crate) fn new(document: RenderedDocument, warnings: Vec<RenderWarning>) -> Self {
        if warnings.is_empty() {
            RenderOutcome::Success(document)
        } else {
            RenderOutcome::SuccessWithWarnings(document, warnings)
        }
    }

    pub fn document(&self) -> &RenderedDocument {
        match self {
            RenderOutcome::Success(document) | RenderOutcome::SuccessWithWarnings(document, _) => document,
        }
    }

    pub fn into_document(self) -> RenderedDocument {
        match self {
            RenderOutcome::Success(document) | RenderOutcome::SuccessWithWarnings(document, _) => document,
        }
    }

    pub fn warnings(&self) -> &[RenderWarning] {
        match self {
            RenderOutcome::Success(_) => &[],
            RenderOutcome::SuccessWithWarnings(_, warnings) => warnings,
        }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings().is_empty()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.document().bytes
    }
}

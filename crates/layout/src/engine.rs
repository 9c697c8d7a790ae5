use crate::env::{RenderMode, SectionEnv};
use crate::error::LayoutError;
use crate::page::{LaidOutDocument, PageGeometry, PageStream};
use crate::sections::{
    FooterBlock, HeaderBlock, MetaBlock, PartiesBlock, Section, SignatureBlock, TextBlock, TotalsBlock,
};
use crate::table::TableLayoutEngine;

/// Runs the fixed section pipeline over one document.
///
/// Every call allocates its own [`PageStream`]; the engine itself holds no
/// mutable state and can be shared between threads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutEngine {
    geometry: PageGeometry,
}

impl LayoutEngine {
    pub fn new(geometry: PageGeometry) -> Self {
        Self { geometry }
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Width every section lays out against. A [`SectionEnv`] passed to
    /// [`layout`](Self::layout) must carry this value.
    pub fn content_width(&self) -> f32 {
        self.geometry.content_rect().width
    }

    pub fn layout(&self, env: &SectionEnv) -> Result<LaidOutDocument, LayoutError> {
        let footer = FooterBlock;
        let geometry = self.geometry.with_footer(footer.is_active(env));
        let mut stream = match env.mode {
            RenderMode::Final => PageStream::new(geometry)?,
            RenderMode::Preview => PageStream::growing(geometry)?,
        };

        let leading: [&dyn Section; 3] = [&HeaderBlock, &PartiesBlock, &MetaBlock];
        for section in leading {
            stream.place(section, env);
        }

        TableLayoutEngine::new(env).layout(&mut stream);

        let trailing: [&dyn Section; 4] = [
            &TotalsBlock,
            &SignatureBlock,
            &TextBlock::terms(),
            &TextBlock::notes(),
        ];
        for section in trailing {
            stream.place(section, env);
        }

        let document = stream.finish(&footer, env);
        log::debug!(
            "Laid out {} {} over {} page(s) with {} warning(s)",
            env.data.document_kind,
            env.data.document_number,
            document.page_count(),
            document.warnings.len()
        );
        Ok(document)
    }
}

//! The fixed-order blocks of an estimate or invoice.
//!
//! Each block renders into coordinates relative to its own top-left corner;
//! the [`PageStream`](crate::PageStream) decides which page it lands on and
//! offsets it to the cursor.

mod footer;
mod header;
mod meta;
mod parties;
mod signature;
mod text_block;
mod totals;

pub use footer::FooterBlock;
pub use header::HeaderBlock;
pub use meta::MetaBlock;
pub use parties::{PartiesBlock, party_lines};
pub use signature::SignatureBlock;
pub use text_block::{TextBlock, TextBlockKind};
pub use totals::TotalsBlock;

use crate::assets::AssetWarning;
use crate::elements::{
    ElementRole, LayoutElement, PositionedElement, RectElement, Stroke, TextElement, TextStyle,
};
use crate::env::SectionEnv;
use billforge_style::TextAlign;
use billforge_types::Rect;

/// Vertical space left between consecutive sections.
pub const SECTION_GAP: f32 = 16.0;

/// Draw commands for one block, relative to the block's origin.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SectionOutput {
    pub height: f32,
    /// Spacing after the block. Not part of the keep-together check.
    pub gap_after: f32,
    pub elements: Vec<PositionedElement>,
    pub warnings: Vec<AssetWarning>,
}

impl SectionOutput {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(height: f32, gap_after: f32) -> Self {
        Self {
            height,
            gap_after,
            ..Self::default()
        }
    }

    pub fn push(&mut self, element: PositionedElement) {
        self.elements.push(element);
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        for el in &mut self.elements {
            el.x += dx;
            el.y += dy;
        }
    }

    /// One line of text inside a box of `box_width`, aligned horizontally.
    #[allow(clippy::too_many_arguments)]
    pub fn text(
        &mut self,
        x: f32,
        y: f32,
        box_width: f32,
        content: impl Into<String>,
        style: TextStyle,
        align: TextAlign,
        role: ElementRole,
    ) {
        self.push(text_element(x, y, box_width, content, style, align).with_role(role));
    }

    pub fn rect(&mut self, rect: Rect, shape: RectElement, role: ElementRole) {
        self.push(PositionedElement::new(rect, LayoutElement::Rectangle(shape)).with_role(role));
    }

    /// A horizontal rule of `width` at `y`.
    pub fn rule(&mut self, x: f32, y: f32, width: f32, stroke: Stroke, role: ElementRole) {
        self.push(
            PositionedElement::new(Rect::new(x, y, width, 0.0), LayoutElement::Line(stroke))
                .with_role(role),
        );
    }
}

pub(crate) fn text_element(
    x: f32,
    y: f32,
    box_width: f32,
    content: impl Into<String>,
    style: TextStyle,
    align: TextAlign,
) -> PositionedElement {
    let content = content.into();
    let width = style.measure(&content);
    let offset = align.offset(box_width, width);
    PositionedElement::new(
        Rect::new(x + offset, y, width, style.line_height()),
        LayoutElement::Text(TextElement { content, style }),
    )
}

/// A block in the fixed document order.
///
/// `render` must be pure: the same environment always yields the same
/// output. Inactive sections are skipped entirely by the page stream.
pub trait Section {
    fn name(&self) -> &'static str;

    fn is_active(&self, env: &SectionEnv) -> bool;

    /// Height the block occupies, excluding the gap after it.
    fn measure(&self, env: &SectionEnv) -> f32 {
        self.render(env).height
    }

    fn render(&self, env: &SectionEnv) -> SectionOutput;

    /// Pieces the block may be split into across pages. A block that must
    /// stay together returns a single fragment.
    fn fragments(&self, env: &SectionEnv) -> Vec<SectionOutput> {
        vec![self.render(env)]
    }

    /// Render at `cursor_y` and return the cursor after the block.
    fn render_at(&self, cursor_y: f32, env: &SectionEnv) -> (f32, SectionOutput) {
        if !self.is_active(env) {
            return (cursor_y, SectionOutput::empty());
        }
        let mut output = self.render(env);
        output.translate(0.0, cursor_y);
        (cursor_y + output.height + output.gap_after, output)
    }
}

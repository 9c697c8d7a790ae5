//! The page stream: an ordered list of pages plus the cursor on the last one.
//!
//! All placement goes through [`PageStream`], which owns the page-break
//! policy. The cursor is an offset from the top of the current page's content
//! area and never exceeds that area's height.

use crate::algorithms::pagination::check_child_fit;
use crate::assets::{AssetWarning, EmbeddedImage};
use crate::elements::{LayoutElement, PositionedElement};
use crate::env::SectionEnv;
use crate::error::LayoutError;
use crate::sections::{FooterBlock, Section, SectionOutput};
use billforge_style::{Margins, PageSize};
use billforge_types::Rect;
use std::sync::Arc;

/// Height reserved at the bottom of every page for the footer band.
pub const FOOTER_BAND: f32 = 36.0;

/// Smallest content area that can still hold a header and a table row.
const MIN_CONTENT: f32 = 72.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margins: Margins,
    pub footer_height: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        PageGeometry::new(PageSize::Letter, Margins::default()).with_footer(true)
    }
}

impl PageGeometry {
    pub fn new(size: PageSize, margins: Margins) -> Self {
        let (width, height) = size.dimensions_pt();
        Self {
            width,
            height,
            margins,
            footer_height: 0.0,
        }
    }

    /// Reserve (or release) the footer band.
    pub fn with_footer(mut self, enabled: bool) -> Self {
        self.footer_height = if enabled { FOOTER_BAND } else { 0.0 };
        self
    }

    pub fn content_rect(&self) -> Rect {
        Rect::new(
            self.margins.left,
            self.margins.top,
            self.width - self.margins.left - self.margins.right,
            self.height - self.margins.top - self.margins.bottom - self.footer_height,
        )
    }

    pub fn footer_rect(&self) -> Rect {
        let content = self.content_rect();
        Rect::new(content.x, content.bottom(), content.width, self.footer_height)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        let content = self.content_rect();
        if content.width < MIN_CONTENT || content.height < MIN_CONTENT {
            return Err(LayoutError::InvalidGeometry(content.width, content.height));
        }
        Ok(())
    }
}

/// One finished page of absolutely positioned elements.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutPage {
    pub width: f32,
    pub height: f32,
    pub elements: Vec<PositionedElement>,
}

impl LaidOutPage {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|el| el.text())
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }
}

/// The complete layout of one document, ready for serialization.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LaidOutDocument {
    pub pages: Vec<LaidOutPage>,
    pub warnings: Vec<AssetWarning>,
}

impl LaidOutDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Distinct images in first-use order.
    pub fn images(&self) -> Vec<Arc<EmbeddedImage>> {
        let mut seen: Vec<Arc<EmbeddedImage>> = Vec::new();
        let drawn = self.pages.iter().flat_map(|page| &page.elements);
        for el in drawn {
            if let LayoutElement::Image(img) = &el.element {
                if !seen.iter().any(|s| Arc::ptr_eq(s, &img.image)) {
                    seen.push(img.image.clone());
                }
            }
        }
        seen
    }
}

pub struct PageStream {
    geometry: PageGeometry,
    content: Rect,
    growing: bool,
    pages: Vec<Vec<PositionedElement>>,
    cursor_y: f32,
    warnings: Vec<AssetWarning>,
}

impl PageStream {
    pub fn new(geometry: PageGeometry) -> Result<Self, LayoutError> {
        geometry.validate()?;
        Ok(Self {
            geometry,
            content: geometry.content_rect(),
            growing: false,
            pages: vec![Vec::new()],
            cursor_y: 0.0,
            warnings: Vec::new(),
        })
    }

    /// A single page that never breaks and grows to fit its content.
    pub fn growing(geometry: PageGeometry) -> Result<Self, LayoutError> {
        let mut stream = Self::new(geometry.with_footer(false))?;
        stream.growing = true;
        Ok(stream)
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn content_width(&self) -> f32 {
        self.content.width
    }

    /// Height of the content area of every page.
    pub fn capacity(&self) -> f32 {
        if self.growing {
            f32::INFINITY
        } else {
            self.content.height
        }
    }

    pub fn cursor_y(&self) -> f32 {
        self.cursor_y
    }

    pub fn available_height(&self) -> f32 {
        (self.capacity() - self.cursor_y).max(0.0)
    }

    pub fn is_at_page_top(&self) -> bool {
        self.cursor_y < 0.1
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn fits(&self, height: f32) -> bool {
        self.growing || !check_child_fit(self.cursor_y, height, self.capacity()).should_break
    }

    /// Close the current page and reset the cursor to the top of a new one.
    pub fn break_page(&mut self) {
        if self.growing {
            return;
        }
        self.pages.push(Vec::new());
        self.cursor_y = 0.0;
        log::debug!("Opened page {}", self.pages.len());
    }

    /// Break first if `height` does not fit and the page is not empty.
    /// Returns whether a new page was opened.
    pub fn ensure_room(&mut self, height: f32) -> bool {
        if !self.fits(height) && !self.is_at_page_top() {
            self.break_page();
            return true;
        }
        false
    }

    /// Move the cursor down, never past the bottom of the content area.
    pub fn advance(&mut self, dy: f32) {
        self.cursor_y = (self.cursor_y + dy).min(self.capacity());
    }

    /// Add an element positioned relative to the cursor.
    pub fn push_element(&mut self, mut element: PositionedElement) {
        element.x += self.content.x;
        element.y += self.content.y + self.cursor_y;
        if let Some(page) = self.pages.last_mut() {
            page.push(element);
        }
    }

    pub fn add_warning(&mut self, warning: AssetWarning) {
        log::warn!("{}", warning);
        self.warnings.push(warning);
    }

    /// Draw a rendered block at the cursor and move past it.
    pub fn place_output(&mut self, output: SectionOutput) {
        let SectionOutput {
            height,
            gap_after,
            elements,
            warnings,
        } = output;
        for element in elements {
            self.push_element(element);
        }
        for warning in warnings {
            self.add_warning(warning);
        }
        self.advance(height + gap_after);
    }

    /// Place a whole section, keeping it on one page when it fits on one.
    ///
    /// Sections that split into fragments flow across pages fragment by
    /// fragment. Returns `false` when the section was inactive.
    pub fn place(&mut self, section: &dyn Section, env: &SectionEnv) -> bool {
        if !section.is_active(env) {
            log::debug!("Skipping disabled section '{}'", section.name());
            return false;
        }

        let height = section.measure(env);
        if self.fits(height) {
            self.place_output(section.render(env));
            return true;
        }

        let fragments = section.fragments(env);
        if fragments.len() > 1 {
            log::debug!(
                "Section '{}' flows over {} fragments from page {}",
                section.name(),
                fragments.len(),
                self.page_count()
            );
            for fragment in fragments {
                self.ensure_room(fragment.height);
                self.place_output(fragment);
            }
            return true;
        }

        if !self.ensure_room(height) {
            log::warn!(
                "Section '{}' ({:.1}pt) is taller than the page body ({:.1}pt)",
                section.name(),
                height,
                self.capacity()
            );
        }
        for fragment in fragments {
            self.place_output(fragment);
        }
        true
    }

    /// Stamp the footer onto every page and hand the pages over.
    pub fn finish(self, footer: &FooterBlock, env: &SectionEnv) -> LaidOutDocument {
        let page_count = self.pages.len();
        let footer_band = self.geometry.footer_rect();
        let draw_footer = !self.growing && footer.is_active(env) && footer_band.height > 0.0;
        let height = if self.growing {
            self.content.y + self.cursor_y + self.geometry.margins.bottom
        } else {
            self.geometry.height
        };

        let pages = self
            .pages
            .into_iter()
            .enumerate()
            .map(|(index, mut elements)| {
                if draw_footer {
                    elements.extend(footer.render_page(index + 1, page_count, footer_band, env));
                }
                LaidOutPage {
                    width: self.geometry.width,
                    height,
                    elements,
                }
            })
            .collect();

        LaidOutDocument {
            pages,
            warnings: self.warnings,
        }
    }
}

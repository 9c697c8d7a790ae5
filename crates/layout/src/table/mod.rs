//! The line-item table and its pagination.
//!
//! Rows have a fixed height that does not depend on their text, so the
//! number of pages a table needs is known up front (see
//! [`pages_needed`](crate::algorithms::pagination::pages_needed)). Long
//! descriptions are truncated with an ellipsis instead of wrapped.

mod columns;

pub use columns::{Column, ColumnKind, column_layout};

use crate::elements::{ElementRole, RectElement, Stroke, TextStyle};
use crate::env::{RULE_COLOR, SectionEnv, TEXT_COLOR};
use crate::page::PageStream;
use crate::sections::{SECTION_GAP, SectionOutput};
use crate::text::truncate_to_width;
use billforge_template::{Feature, TableVariant};
use billforge_types::{Color, LineItem, Rect};

pub const HEADER_HEIGHT: f32 = 22.0;
pub const ROW_HEIGHT: f32 = 20.0;
/// Extra fixed height under a row whose item carries notes.
pub const NOTES_LINE_HEIGHT: f32 = 12.0;
const CELL_PADDING: f32 = 6.0;
const BODY_SIZE: f32 = 9.5;

/// Where the table ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TablePlacement {
    pub first_page: usize,
    pub last_page: usize,
    pub rows: usize,
}

impl TablePlacement {
    pub fn page_span(&self) -> usize {
        self.last_page - self.first_page + 1
    }
}

pub struct TableLayoutEngine<'e, 'a> {
    env: &'e SectionEnv<'a>,
    columns: Vec<Column>,
    variant: TableVariant,
    show_notes: bool,
}

impl<'e, 'a> TableLayoutEngine<'e, 'a> {
    pub fn new(env: &'e SectionEnv<'a>) -> Self {
        Self {
            env,
            columns: column_layout(env.content_width, env.is_enabled(Feature::ItemDetails)),
            variant: env.config.table_variant,
            show_notes: env.is_enabled(Feature::ItemNotes),
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn header_height(&self) -> f32 {
        HEADER_HEIGHT
    }

    pub fn row_height(&self, item: &LineItem) -> f32 {
        if self.show_notes && item.has_notes() {
            ROW_HEIGHT + NOTES_LINE_HEIGHT
        } else {
            ROW_HEIGHT
        }
    }

    /// Lay the whole table into `stream`, re-emitting the header on every
    /// page that carries rows. Never fails: content volume only adds pages.
    pub fn layout(&self, stream: &mut PageStream) -> TablePlacement {
        let items = &self.env.data.line_items;
        let first_row = items.first().map_or(0.0, |item| self.row_height(item));
        stream.ensure_room(HEADER_HEIGHT + first_row);

        let first_page = stream.page_count();
        stream.place_output(self.header());

        let mut rows_on_page = 0;
        for (index, item) in items.iter().enumerate() {
            let height = self.row_height(item);
            if !stream.fits(height) {
                if rows_on_page > 0 {
                    stream.break_page();
                    stream.place_output(self.header());
                    rows_on_page = 0;
                } else {
                    log::warn!(
                        "Table row {} ({:.1}pt) does not fit under the header ({:.1}pt left)",
                        index + 1,
                        height,
                        stream.available_height()
                    );
                }
            }
            stream.place_output(self.row(index, item, height));
            rows_on_page += 1;
        }

        // A page that is full after the last row already closes the table.
        if stream.fits(SECTION_GAP) {
            stream.place_output(self.separator());
        } else {
            stream.advance(SECTION_GAP);
        }

        let placement = TablePlacement {
            first_page,
            last_page: stream.page_count(),
            rows: items.len(),
        };
        log::debug!(
            "Laid out {} table rows over {} page(s)",
            placement.rows,
            placement.page_span()
        );
        placement
    }

    fn width(&self) -> f32 {
        self.env.content_width
    }

    fn primary(&self) -> Color {
        self.env.config.primary_color
    }

    fn cell_text(
        &self,
        out: &mut SectionOutput,
        column: &Column,
        y: f32,
        content: &str,
        style: TextStyle,
        role: ElementRole,
    ) {
        let inner = (column.width - 2.0 * CELL_PADDING).max(0.0);
        let fitted = truncate_to_width(content, &style, inner);
        out.text(column.x + CELL_PADDING, y, inner, fitted, style, column.kind.align(), role);
    }

    fn header(&self) -> SectionOutput {
        let mut out = SectionOutput::new(HEADER_HEIGHT, 0.0);
        let role = ElementRole::TableHeader;
        let band = Rect::new(0.0, 0.0, self.width(), HEADER_HEIGHT);

        let style = TextStyle::new(self.env.font(), 9.0).bold();
        let style = match self.variant {
            TableVariant::Striped => {
                out.rect(band, RectElement::filled(self.primary()), role);
                style.colored(Color::WHITE)
            }
            TableVariant::Bordered => {
                out.rect(band, RectElement::filled(self.primary().lighten(0.85)), role);
                self.cell_borders(&mut out, HEADER_HEIGHT, role);
                style.colored(TEXT_COLOR)
            }
            TableVariant::Minimal => {
                out.rule(0.0, HEADER_HEIGHT, self.width(), Stroke::new(self.primary(), 1.0), role);
                style.colored(self.primary())
            }
        };

        let y = (HEADER_HEIGHT - style.line_height()) / 2.0;
        for column in &self.columns {
            self.cell_text(&mut out, column, y, &self.env.label(column.kind.heading()), style, role);
        }
        out
    }

    fn row(&self, index: usize, item: &LineItem, height: f32) -> SectionOutput {
        let mut out = SectionOutput::new(height, 0.0);
        let role = ElementRole::TableRow { index };

        match self.variant {
            TableVariant::Striped if index % 2 == 1 => out.rect(
                Rect::new(0.0, 0.0, self.width(), height),
                RectElement::filled(self.primary().lighten(0.92)),
                role,
            ),
            TableVariant::Striped => {}
            TableVariant::Bordered => self.cell_borders(&mut out, height, role),
            TableVariant::Minimal => {
                out.rule(0.0, height, self.width(), Stroke::new(RULE_COLOR, 0.5), role)
            }
        }

        let style = self.env.body_style(BODY_SIZE);
        let y = (ROW_HEIGHT - style.line_height()) / 2.0;
        let f = self.env.formatter;
        for column in &self.columns {
            let content = match column.kind {
                ColumnKind::Description => item.description.clone(),
                ColumnKind::Quantity => f.format_quantity(item.quantity),
                ColumnKind::UnitPrice => f.format_currency(item.unit_price),
                ColumnKind::Amount => f.format_currency(item.amount),
            };
            self.cell_text(&mut out, column, y, &content, style, role);
        }

        if height > ROW_HEIGHT {
            if let (Some(notes), Some(column)) = (item.notes.as_deref(), self.columns.first()) {
                let notes_style = self.env.muted_style(8.5);
                self.cell_text(&mut out, column, ROW_HEIGHT - 4.0, notes, notes_style, role);
            }
        }
        out
    }

    fn cell_borders(&self, out: &mut SectionOutput, height: f32, role: ElementRole) {
        for column in &self.columns {
            out.rect(
                Rect::new(column.x, 0.0, column.width, height),
                RectElement::stroked(Stroke::new(RULE_COLOR, 0.5)),
                role,
            );
        }
    }

    fn separator(&self) -> SectionOutput {
        let mut out = SectionOutput::new(SECTION_GAP, 0.0);
        out.rule(
            0.0,
            SECTION_GAP / 2.0,
            self.width(),
            Stroke::new(RULE_COLOR, 0.75),
            ElementRole::Decoration,
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::pagination::{EPSILON, pages_needed};
    use crate::elements::{LayoutElement, PositionedElement};
    use crate::page::PageGeometry;
    use crate::test_utils::{Fixture, document};
    use billforge_template::TemplateConfig;
    use billforge_types::DocumentKind;

    fn lay_out(fx: &Fixture) -> (PageStream, TablePlacement) {
        let mut stream = PageStream::new(fx.geometry).unwrap();
        let env = fx.env();
        let placement = TableLayoutEngine::new(&env).layout(&mut stream);
        (stream, placement)
    }

    fn finished(fx: &Fixture, stream: PageStream) -> Vec<Vec<PositionedElement>> {
        stream
            .finish(&crate::sections::FooterBlock, &fx.env())
            .pages
            .into_iter()
            .map(|p| p.elements)
            .collect()
    }

    fn header_texts(page: &[PositionedElement]) -> Vec<&str> {
        page.iter()
            .filter(|el| el.role == ElementRole::TableHeader)
            .filter_map(|el| el.text())
            .collect()
    }

    #[test]
    fn page_count_matches_plan() {
        let geometry = PageGeometry::default();
        let capacity = geometry.content_rect().height;
        for n in [0, 1, 31, 32, 40, 95] {
            let fx = Fixture::new(document(DocumentKind::Invoice, n));
            let (stream, placement) = lay_out(&fx);
            assert_eq!(
                Some(stream.page_count()),
                pages_needed(HEADER_HEIGHT, ROW_HEIGHT, n, capacity),
                "{n} rows"
            );
            assert_eq!(placement.rows, n);
        }
    }

    #[test]
    fn header_repeats_on_every_page_and_rows_never_split() {
        let fx = Fixture::new(document(DocumentKind::Invoice, 40));
        let content = fx.geometry.content_rect();
        let (stream, placement) = lay_out(&fx);
        assert!(placement.page_span() >= 2);

        let pages = finished(&fx, stream);
        let mut seen = 0;
        for page in &pages {
            assert_eq!(header_texts(page), vec!["Description", "Qty", "Unit Price", "Amount"]);
            let header_top = page
                .iter()
                .filter(|el| el.role == ElementRole::TableHeader)
                .map(|el| el.y)
                .fold(f32::INFINITY, f32::min);
            for el in page {
                if let ElementRole::TableRow { index } = el.role {
                    assert!(el.y > header_top);
                    assert!(el.bottom() <= content.bottom() + EPSILON, "row {index} overflows");
                    seen = seen.max(index + 1);
                }
            }
        }
        assert_eq!(seen, 40);
    }

    #[test]
    fn empty_table_draws_only_the_header() {
        let fx = Fixture::new(document(DocumentKind::Estimate, 0));
        let (stream, _) = lay_out(&fx);
        let pages = finished(&fx, stream);
        assert_eq!(pages.len(), 1);
        assert!(!pages[0].iter().any(|el| matches!(el.role, ElementRole::TableRow { .. })));
        assert_eq!(header_texts(&pages[0]).len(), 4);
    }

    #[test]
    fn long_descriptions_are_truncated() {
        let mut data = document(DocumentKind::Invoice, 1);
        data.line_items[0].description = "Remove and dispose of existing cabinetry ".repeat(10);
        let fx = Fixture::new(data);
        let (stream, _) = lay_out(&fx);
        let pages = finished(&fx, stream);
        let description = pages[0]
            .iter()
            .find(|el| el.role == ElementRole::TableRow { index: 0 } && el.text().is_some_and(|t| t.starts_with("Remove")))
            .unwrap();
        assert!(description.text().unwrap().ends_with('…'));
        assert!(description.width <= fx.env().content_width * 0.5);
    }

    #[test]
    fn item_details_off_collapses_columns() {
        let fx = Fixture::with_template(
            document(DocumentKind::Invoice, 2),
            &TemplateConfig::default().with_feature(Feature::ItemDetails, false),
        );
        let env = fx.env();
        let engine = TableLayoutEngine::new(&env);
        let kinds: Vec<_> = engine.columns().iter().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![ColumnKind::Description, ColumnKind::Amount]);
    }

    #[test]
    fn notes_add_a_fixed_line() {
        let mut data = document(DocumentKind::Invoice, 2);
        data.line_items[0] = data.line_items[0].clone().with_notes("Includes haul-away");
        let fx = Fixture::new(data.clone());
        let env = fx.env();
        let engine = TableLayoutEngine::new(&env);
        assert_eq!(engine.row_height(&data.line_items[0]), ROW_HEIGHT + NOTES_LINE_HEIGHT);
        assert_eq!(engine.row_height(&data.line_items[1]), ROW_HEIGHT);

        let hidden = Fixture::with_template(
            data.clone(),
            &TemplateConfig::default().with_feature(Feature::ItemNotes, false),
        );
        let env = hidden.env();
        assert_eq!(TableLayoutEngine::new(&env).row_height(&data.line_items[0]), ROW_HEIGHT);
    }

    #[test]
    fn variants_draw_differently() {
        let count_rects = |style: &str| {
            let fx = Fixture::with_template(
                document(DocumentKind::Invoice, 4),
                &TemplateConfig::default().with_table_style(style),
            );
            let (stream, _) = lay_out(&fx);
            finished(&fx, stream)[0]
                .iter()
                .filter(|el| matches!(el.element, LayoutElement::Rectangle(_)))
                .count()
        };
        // Striped: header band plus the two odd rows.
        assert_eq!(count_rects("striped"), 3);
        // Bordered: header band plus one box per cell on five rows.
        assert_eq!(count_rects("bordered"), 1 + 4 * 5);
        assert_eq!(count_rects("minimal"), 0);
    }

    #[test]
    fn nothing_is_drawn_below_the_content_area() {
        for n in 1..80 {
            let fx = Fixture::new(document(DocumentKind::Estimate, n));
            let content = fx.geometry.content_rect();
            let mut stream = PageStream::new(fx.geometry).unwrap();
            // Leave room for the blocks that precede the table.
            stream.advance(180.0);
            let env = fx.env();
            TableLayoutEngine::new(&env).layout(&mut stream);
            let document = stream.finish(&crate::sections::FooterBlock, &env);
            for (page, laid_out) in document.pages.iter().enumerate() {
                for el in laid_out.elements.iter().filter(|el| el.role != ElementRole::Footer) {
                    assert!(
                        el.bottom() <= content.bottom() + EPSILON,
                        "{n} rows: {:?} on page {} reaches {}",
                        el.role,
                        page + 1,
                        el.bottom()
                    );
                }
            }
        }
    }

    #[test]
    fn table_does_not_leave_an_orphaned_header() {
        let fx = Fixture::new(document(DocumentKind::Invoice, 3));
        let mut stream = PageStream::new(fx.geometry).unwrap();
        stream.advance(stream.capacity() - HEADER_HEIGHT - 5.0);
        let env = fx.env();
        let placement = TableLayoutEngine::new(&env).layout(&mut stream);
        assert_eq!(placement.first_page, 2);
        assert_eq!(stream.page_count(), 2);
    }
}

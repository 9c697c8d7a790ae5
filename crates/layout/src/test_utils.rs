use crate::elements::{ElementRole, PositionedElement};
use crate::env::{FooterOptions, RenderMode, SectionEnv};
use crate::page::PageGeometry;
use billforge_format::{Catalog, Formatter, LocaleSettings};
use billforge_template::{ResolvedConfig, TemplateConfig, resolve};
use billforge_totals::TotalsSummary;
use billforge_types::{DocumentData, DocumentKind, LineItem, PartyRecord};
use chrono::NaiveDate;
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use std::str::FromStr;

pub fn dec(s: &str) -> billforge_types::Decimal {
    billforge_types::Decimal::from_str(s).unwrap()
}

pub fn png_bytes() -> Vec<u8> {
    let img = RgbaImage::from_pixel(8, 4, Rgba([20, 40, 60, 255]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).unwrap();
    out.into_inner()
}

pub fn document(kind: DocumentKind, item_count: usize) -> DocumentData {
    let items: Vec<LineItem> = (0..item_count)
        .map(|i| LineItem::priced(format!("Item {}", i + 1), dec("1"), dec("100.00")))
        .collect();
    let subtotal = dec("100.00") * billforge_types::Decimal::from(item_count as u64);
    DocumentData {
        document_kind: kind,
        document_number: "1001".to_string(),
        status: Default::default(),
        issue_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        due_or_expiry_date: NaiveDate::from_ymd_opt(2025, 3, 31),
        line_items: items,
        subtotal,
        tax_rate_percent: dec("0"),
        discount_rate_percent: dec("0"),
        total: subtotal,
        amount_paid: None,
        party: PartyRecord::named("Jane Client"),
        issuer: PartyRecord::named("Acme Builders"),
        project_reference: None,
        terms: None,
        notes: None,
        signature_image: None,
    }
}

/// Owns everything a [`SectionEnv`] borrows.
pub struct Fixture {
    pub data: DocumentData,
    pub config: ResolvedConfig,
    pub catalog: Catalog,
    pub formatter: Formatter,
    pub totals: TotalsSummary,
    pub footer: FooterOptions,
    pub geometry: PageGeometry,
    pub mode: RenderMode,
}

impl Fixture {
    pub fn new(data: DocumentData) -> Self {
        Self::with_template(data, &TemplateConfig::default())
    }

    pub fn with_template(data: DocumentData, template: &TemplateConfig) -> Self {
        let catalog = Catalog::english();
        let formatter = Formatter::new(LocaleSettings::en_us(), &catalog);
        let totals = TotalsSummary::for_document(&data).unwrap();
        Self {
            data,
            config: resolve(Some(template)),
            catalog,
            formatter,
            totals,
            footer: FooterOptions {
                show_page_numbers: true,
                ..FooterOptions::default()
            },
            geometry: PageGeometry::default(),
            mode: RenderMode::Final,
        }
    }

    pub fn env(&self) -> SectionEnv<'_> {
        SectionEnv {
            data: &self.data,
            config: &self.config,
            formatter: &self.formatter,
            translator: &self.catalog,
            totals: &self.totals,
            footer: &self.footer,
            content_width: self.geometry.content_rect().width,
            mode: self.mode,
        }
    }
}

pub fn texts(elements: &[PositionedElement]) -> Vec<&str> {
    elements.iter().filter_map(|el| el.text()).collect()
}

pub fn with_role(elements: &[PositionedElement], role: ElementRole) -> Vec<&PositionedElement> {
    elements.iter().filter(|el| el.role == role).collect()
}

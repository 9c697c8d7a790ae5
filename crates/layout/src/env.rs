use crate::elements::TextStyle;
use billforge_format::{Formatter, MessageKey, Translator};
use billforge_style::FontFamily;
use billforge_template::{Feature, ResolvedConfig};
use billforge_totals::TotalsSummary;
use billforge_types::{Color, DocumentData};
use chrono::NaiveDate;

/// Full output paginates and embeds images; preview lays everything on one
/// growing page without raster images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Final,
    Preview,
}

/// Host-controlled footer content.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FooterOptions {
    /// Overrides the translated default footer message.
    pub message: Option<String>,
    /// The only time-dependent content a document can carry.
    pub generated_on: Option<NaiveDate>,
    pub show_page_numbers: bool,
}

/// Read-only inputs shared by every section of one render.
pub struct SectionEnv<'a> {
    pub data: &'a DocumentData,
    pub config: &'a ResolvedConfig,
    pub formatter: &'a Formatter,
    pub translator: &'a dyn Translator,
    pub totals: &'a TotalsSummary,
    pub footer: &'a FooterOptions,
    pub content_width: f32,
    pub mode: RenderMode,
}

pub const TEXT_COLOR: Color = Color::rgb(0x1F, 0x29, 0x37);
pub const MUTED_COLOR: Color = Color::rgb(0x6B, 0x72, 0x80);
pub const RULE_COLOR: Color = Color::rgb(0xD1, 0xD5, 0xDB);

impl SectionEnv<'_> {
    pub fn is_enabled(&self, feature: Feature) -> bool {
        self.config.is_enabled(feature)
    }

    pub fn label(&self, key: MessageKey) -> String {
        self.translator.translate(key).into_owned()
    }

    pub fn font(&self) -> FontFamily {
        self.config.font_family
    }

    pub fn body_style(&self, size: f32) -> TextStyle {
        TextStyle::new(self.font(), size).colored(TEXT_COLOR)
    }

    pub fn muted_style(&self, size: f32) -> TextStyle {
        TextStyle::new(self.font(), size).colored(MUTED_COLOR)
    }

    pub fn is_preview(&self) -> bool {
        self.mode == RenderMode::Preview
    }
}

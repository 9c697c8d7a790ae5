use crate::config::TemplateConfig;
use crate::feature::{Feature, FeatureFlags};
use billforge_style::FontFamily;
use billforge_types::Color;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderVariant {
    #[default]
    Simple,
    Gradient,
    Boxed,
}

impl HeaderVariant {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "simple" => Some(HeaderVariant::Simple),
            "gradient" => Some(HeaderVariant::Gradient),
            "boxed" => Some(HeaderVariant::Boxed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TableVariant {
    #[default]
    Striped,
    Bordered,
    Minimal,
}

impl TableVariant {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "striped" => Some(TableVariant::Striped),
            "bordered" => Some(TableVariant::Bordered),
            "minimal" => Some(TableVariant::Minimal),
            _ => None,
        }
    }
}

pub const DEFAULT_PRIMARY: Color = Color::rgb(0x1E, 0x40, 0xAF);
pub const DEFAULT_SECONDARY: Color = Color::rgb(0x64, 0x74, 0x8B);

/// A template after defaults have been merged in. Every accessor is total.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    pub flags: FeatureFlags,
    pub header_variant: HeaderVariant,
    pub table_variant: TableVariant,
    pub primary_color: Color,
    pub secondary_color: Color,
    pub font_family: FontFamily,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            flags: FeatureFlags::default(),
            header_variant: HeaderVariant::default(),
            table_variant: TableVariant::default(),
            primary_color: DEFAULT_PRIMARY,
            secondary_color: DEFAULT_SECONDARY,
            font_family: FontFamily::Helvetica,
        }
    }
}

impl ResolvedConfig {
    pub fn is_enabled(&self, feature: Feature) -> bool {
        self.flags.is_enabled(feature)
    }

    /// String-keyed lookup; keys this engine does not know are enabled.
    pub fn is_key_enabled(&self, key: &str) -> bool {
        match Feature::from_key(key) {
            Some(feature) => self.is_enabled(feature),
            None => true,
        }
    }
}

/// Merge a stored template over the hard defaults. Never fails.
pub fn resolve(raw: Option<&TemplateConfig>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();
    let Some(raw) = raw else {
        return defaults;
    };

    let header_variant = pick(raw.header_style.as_deref(), "headerStyle", HeaderVariant::parse)
        .unwrap_or(defaults.header_variant);
    let table_variant = pick(raw.table_style.as_deref(), "tableStyle", TableVariant::parse)
        .unwrap_or(defaults.table_variant);
    let primary_color = pick(raw.primary_color.as_deref(), "primaryColor", |s| {
        Color::parse_hex(s).ok()
    })
    .unwrap_or(defaults.primary_color);
    let secondary_color = pick(raw.secondary_color.as_deref(), "secondaryColor", |s| {
        Color::parse_hex(s).ok()
    })
    .unwrap_or(defaults.secondary_color);
    let font_family = pick(raw.font_family.as_deref(), "fontFamily", FontFamily::from_identifier)
        .unwrap_or(defaults.font_family);

    ResolvedConfig {
        flags: raw.flags,
        header_variant,
        table_variant,
        primary_color,
        secondary_color,
        font_family,
    }
}

/// Resolve straight from stored JSON. Unparseable input yields the defaults.
pub fn resolve_json(raw: Option<&str>) -> ResolvedConfig {
    let Some(json) = raw.filter(|s| !s.trim().is_empty()) else {
        return ResolvedConfig::default();
    };
    match TemplateConfig::from_json(json) {
        Ok(config) => resolve(Some(&config)),
        Err(e) => {
            log::warn!("{}; using default template", e);
            ResolvedConfig::default()
        }
    }
}

fn pick<T>(value: Option<&str>, field: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    let value = value?;
    let parsed = parse(value);
    if parsed.is_none() {
        log::warn!("Unrecognized template {} '{}', using default", field, value);
    }
    parsed
}

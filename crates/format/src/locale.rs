use crate::error::FormatError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    /// `$1,234.50`
    Prefix,
    /// `1.234,50 €`
    Suffix,
}

/// How a long-form date is laid out. Month names come from the translator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateStyle {
    /// `March 1, 2025`
    MonthDayYear,
    /// `1 March 2025`
    DayMonthYear,
    /// `1 de marzo de 2025`
    DayDeMonthDeYear,
    /// `1. März 2025`
    DayDotMonthYear,
}

/// Number, currency and date conventions for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleSettings {
    pub tag: String,
    pub currency_symbol: String,
    pub symbol_position: SymbolPosition,
    pub thousands_separator: String,
    pub decimal_separator: String,
    pub date_style: DateStyle,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self::en_us()
    }
}

impl LocaleSettings {
    pub const SUPPORTED: &'static [&'static str] =
        &["en-US", "en-GB", "en-CA", "es-ES", "es-MX", "de-DE", "fr-FR"];

    fn preset(
        tag: &str,
        symbol: &str,
        position: SymbolPosition,
        thousands: &str,
        decimal: &str,
        date_style: DateStyle,
    ) -> Self {
        Self {
            tag: tag.to_string(),
            currency_symbol: symbol.to_string(),
            symbol_position: position,
            thousands_separator: thousands.to_string(),
            decimal_separator: decimal.to_string(),
            date_style,
        }
    }

    pub fn en_us() -> Self {
        Self::preset("en-US", "$", SymbolPosition::Prefix, ",", ".", DateStyle::MonthDayYear)
    }

    /// Look up a preset by BCP-47 tag. Matching ignores case and accepts `_`.
    pub fn for_tag(tag: &str) -> Result<Self, FormatError> {
        let normalized = tag.trim().replace('_', "-").to_ascii_lowercase();
        let settings = match normalized.as_str() {
            "en-us" | "en" => Self::en_us(),
            "en-gb" => Self::preset("en-GB", "£", SymbolPosition::Prefix, ",", ".", DateStyle::DayMonthYear),
            "en-ca" => Self::preset("en-CA", "$", SymbolPosition::Prefix, ",", ".", DateStyle::MonthDayYear),
            "es-es" | "es" => Self::preset("es-ES", "€", SymbolPosition::Suffix, ".", ",", DateStyle::DayDeMonthDeYear),
            "es-mx" => Self::preset("es-MX", "$", SymbolPosition::Prefix, ",", ".", DateStyle::DayDeMonthDeYear),
            "de-de" | "de" => Self::preset("de-DE", "€", SymbolPosition::Suffix, ".", ",", DateStyle::DayDotMonthYear),
            "fr-fr" | "fr" => Self::preset("fr-FR", "€", SymbolPosition::Suffix, " ", ",", DateStyle::DayMonthYear),
            _ => return Err(FormatError::UnknownLocale(tag.to_string())),
        };
        Ok(settings)
    }

    /// Like [`LocaleSettings::for_tag`], but an unknown tag yields `en-US`.
    pub fn for_tag_or_default(tag: &str) -> Self {
        Self::for_tag(tag).unwrap_or_else(|e| {
            log::warn!("{}; falling back to en-US", e);
            Self::en_us()
        })
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }
}

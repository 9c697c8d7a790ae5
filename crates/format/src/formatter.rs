//! Pure value-to-string formatting.
//!
//! A [`Formatter`] is built once per render from a [`LocaleSettings`] and a
//! [`Translator`] and then shared by every section, so the final document
//! and the preview can never disagree on how a number is printed.

use crate::locale::{DateStyle, LocaleSettings, SymbolPosition};
use crate::translator::{MessageKey, Translator};
use chrono::{DateTime, Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

#[derive(Debug, Clone, PartialEq)]
pub struct Formatter {
    locale: LocaleSettings,
    months: Vec<String>,
    date_placeholder: String,
}

impl Formatter {
    pub fn new(locale: LocaleSettings, translator: &dyn Translator) -> Self {
        let months = MessageKey::MONTHS
            .iter()
            .map(|key| translator.translate(*key).into_owned())
            .collect();
        Self {
            locale,
            months,
            date_placeholder: translator.translate(MessageKey::DateUnavailable).into_owned(),
        }
    }

    pub fn locale(&self) -> &LocaleSettings {
        &self.locale
    }

    /// Currency with exactly two decimals, rounded half away from zero.
    pub fn format_currency(&self, value: Decimal) -> String {
        let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let digits = self.localize_digits(&rounded.abs().to_string());
        let sign = if negative { "-" } else { "" };
        let symbol = &self.locale.currency_symbol;
        match self.locale.symbol_position {
            SymbolPosition::Prefix => format!("{}{}{}", sign, symbol, digits),
            SymbolPosition::Suffix => format!("{}{} {}", sign, digits, symbol),
        }
    }

    /// A quantity with trailing zeros trimmed: `2`, `1.5`, `1,250`.
    pub fn format_quantity(&self, value: Decimal) -> String {
        let normalized = value.normalize();
        let digits = self.localize_digits(&normalized.abs().to_string());
        if normalized.is_sign_negative() && !normalized.is_zero() {
            format!("-{}", digits)
        } else {
            digits
        }
    }

    /// A percentage rate as entered: `8%`, `7.5%`.
    pub fn format_percent(&self, rate: Decimal) -> String {
        format!("{}%", self.format_quantity(rate))
    }

    /// Long-form date, or the placeholder when there is no date.
    pub fn format_date(&self, value: Option<NaiveDate>) -> String {
        let Some(date) = value else {
            return self.date_placeholder.clone();
        };
        let month = &self.months[date.month0() as usize];
        let (day, year) = (date.day(), date.year());
        match self.locale.date_style {
            DateStyle::MonthDayYear => format!("{} {}, {}", month, day, year),
            DateStyle::DayMonthYear => format!("{} {} {}", day, month, year),
            DateStyle::DayDeMonthDeYear => format!("{} de {} de {}", day, month, year),
            DateStyle::DayDotMonthYear => format!("{}. {} {}", day, month, year),
        }
    }

    /// Parses `YYYY-MM-DD` or RFC 3339 first; anything else gives the placeholder.
    pub fn format_date_str(&self, value: &str) -> String {
        let value = value.trim();
        let parsed = NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()));
        if parsed.is_none() {
            log::debug!("Unparseable date string '{}'", value);
        }
        self.format_date(parsed)
    }

    pub fn date_placeholder(&self) -> &str {
        &self.date_placeholder
    }

    /// Applies grouping and the decimal separator to a plain `1234.5` string.
    fn localize_digits(&self, plain: &str) -> String {
        let (integer, fraction) = match plain.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (plain, None),
        };
        let mut out = group_thousands(integer, &self.locale.thousands_separator);
        if let Some(fraction) = fraction {
            out.push_str(&self.locale.decimal_separator);
            out.push_str(fraction);
        }
        out
    }
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

//! Locale-aware formatting and message catalogs.
//!
//! - [`Formatter`] turns decimals and dates into display strings
//! - [`LocaleSettings`] holds the per-locale conventions
//! - [`Translator`] / [`Catalog`] supply every user-visible label

mod error;
mod formatter;
mod locale;
mod translator;

pub use error::FormatError;
pub use formatter::Formatter;
pub use locale::{DateStyle, LocaleSettings, SymbolPosition};
pub use translator::{Catalog, MessageKey, Translator};

//! Host-owned engine settings.

use billforge_style::{Margins, PageSize};
use chrono::NaiveDate;
use serde::Deserialize;

/// Settings the host application controls, as opposed to the user-owned
/// [`TemplateConfig`](billforge_template::TemplateConfig).
///
/// Every field has a default, so `{}` is a valid configuration. The engine
/// never reads the clock: `generated_on` is the only date it prints that
/// does not come from the document itself.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    pub page_size: PageSize,
    pub margins: Margins,
    pub locale: String,
    pub currency_symbol: Option<String>,
    pub footer_message: Option<String>,
    pub generated_on: Option<NaiveDate>,
    pub show_page_numbers: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::Letter,
            margins: Margins::default(),
            locale: "en-US".to_string(),
            currency_symbol: None,
            footer_message: None,
            generated_on: None,
            show_page_numbers: true,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_the_default() {
        assert_eq!(EngineConfig::from_json("{}").unwrap(), EngineConfig::default());
    }

    #[test]
    fn reads_camel_case_fields() {
        let config = EngineConfig::from_json(
            r#"{
                "pageSize": "A4",
                "margins": "36pt 48pt",
                "locale": "de-DE",
                "currencySymbol": "CHF",
                "footerMessage": "Danke!",
                "generatedOn": "2025-04-01",
                "showPageNumbers": false
            }"#,
        )
        .unwrap();
        assert_eq!(config.page_size, PageSize::A4);
        assert_eq!(config.margins.top, 36.0);
        assert_eq!(config.margins.left, 48.0);
        assert_eq!(config.locale, "de-DE");
        assert_eq!(config.currency_symbol.as_deref(), Some("CHF"));
        assert_eq!(config.generated_on, NaiveDate::from_ymd_opt(2025, 4, 1));
        assert!(!config.show_page_numbers);
    }

    #[test]
    fn custom_page_size_in_points() {
        let config = EngineConfig::from_json(r#"{ "pageSize": { "width": 400, "height": 600 } }"#).unwrap();
        assert_eq!(
            config.page_size,
            PageSize::Custom {
                width: 400.0,
                height: 600.0
            }
        );
    }
}

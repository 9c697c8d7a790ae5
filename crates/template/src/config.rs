//! The user-owned template record, exactly as stored by the host app.
//!
//! Deserialization never rejects a field because of its value: a flag that
//! is not a JSON boolean and a style field that is not a string both read
//! as "not set", which the resolver turns into the default.

use crate::error::TemplateError;
use crate::feature::{Feature, FeatureFlags};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateConfig {
    #[serde(flatten)]
    pub flags: FeatureFlags,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub header_style: Option<String>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub table_style: Option<String>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

impl TemplateConfig {
    pub fn from_json(json: &str) -> Result<Self, TemplateError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_feature(mut self, feature: Feature, enabled: bool) -> Self {
        self.flags.set(feature, Some(enabled));
        self
    }

    pub fn with_header_style(mut self, style: impl Into<String>) -> Self {
        self.header_style = Some(style.into());
        self
    }

    pub fn with_table_style(mut self, style: impl Into<String>) -> Self {
        self.table_style = Some(style.into());
        self
    }

    pub fn with_colors(mut self, primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        self.primary_color = Some(primary.into());
        self.secondary_color = Some(secondary.into());
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }
}

pub(crate) fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Bool(b) => Ok(Some(b)),
        Value::Null => Ok(None),
        other => {
            log::debug!("Ignoring non-boolean feature flag value {}", other);
            Ok(None)
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        Value::Null => Ok(None),
        other => {
            log::debug!("Ignoring non-string template value {}", other);
            Ok(None)
        }
    }
}

use serde::{Deserialize, Serialize};

/// An optional part of the document that a template can switch off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Header,
    Footer,
    ItemDetails,
    ItemNotes,
    ProjectDetails,
    ClientDetails,
    Terms,
    Notes,
    SignatureLine,
    Dates,
}

impl Feature {
    pub const ALL: [Feature; 10] = [
        Feature::Header,
        Feature::Footer,
        Feature::ItemDetails,
        Feature::ItemNotes,
        Feature::ProjectDetails,
        Feature::ClientDetails,
        Feature::Terms,
        Feature::Notes,
        Feature::SignatureLine,
        Feature::Dates,
    ];

    /// The JSON key of the flag in a stored template.
    pub fn key(self) -> &'static str {
        match self {
            Feature::Header => "showHeader",
            Feature::Footer => "showFooter",
            Feature::ItemDetails => "showItemDetails",
            Feature::ItemNotes => "showItemNotes",
            Feature::ProjectDetails => "showProjectDetails",
            Feature::ClientDetails => "showClientDetails",
            Feature::Terms => "showTerms",
            Feature::Notes => "showNotes",
            Feature::SignatureLine => "showSignatureLine",
            Feature::Dates => "showDates",
        }
    }

    /// The short kebab-case name, e.g. `item-details`.
    pub fn name(self) -> &'static str {
        match self {
            Feature::Header => "header",
            Feature::Footer => "footer",
            Feature::ItemDetails => "item-details",
            Feature::ItemNotes => "item-notes",
            Feature::ProjectDetails => "project-details",
            Feature::ClientDetails => "client-details",
            Feature::Terms => "terms",
            Feature::Notes => "notes",
            Feature::SignatureLine => "signature-line",
            Feature::Dates => "dates",
        }
    }

    /// Accepts either the JSON key or the short name.
    pub fn from_key(key: &str) -> Option<Feature> {
        Feature::ALL
            .into_iter()
            .find(|f| f.key() == key || f.name().eq_ignore_ascii_case(key))
    }
}

/// One nullable flag per feature. `None` means the user never set it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureFlags {
    #[serde(deserialize_with = "crate::config::lenient_flag", skip_serializing_if = "Option::is_none")]
    pub show_header: Option<bool>,
    #[serde(deserialize_with = "crate::config::lenient_flag", skip_serializing_if = "Option::is_none")]
    pub show_footer: Option<bool>,
    #[serde(deserialize_with = "crate::config::lenient_flag", skip_serializing_if = "Option::is_none")]
    pub show_item_details: Option<bool>,
    #[serde(deserialize_with = "crate::config::lenient_flag", skip_serializing_if = "Option::is_none")]
    pub show_item_notes: Option<bool>,
    #[serde(deserialize_with = "crate::config::lenient_flag", skip_serializing_if = "Option::is_none")]
    pub show_project_details: Option<bool>,
    #[serde(deserialize_with = "crate::config::lenient_flag", skip_serializing_if = "Option::is_none")]
    pub show_client_details: Option<bool>,
    #[serde(deserialize_with = "crate::config::lenient_flag", skip_serializing_if = "Option::is_none")]
    pub show_terms: Option<bool>,
    #[serde(deserialize_with = "crate::config::lenient_flag", skip_serializing_if = "Option::is_none")]
    pub show_notes: Option<bool>,
    #[serde(deserialize_with = "crate::config::lenient_flag", skip_serializing_if = "Option::is_none")]
    pub show_signature_line: Option<bool>,
    #[serde(deserialize_with = "crate::config::lenient_flag", skip_serializing_if = "Option::is_none")]
    pub show_dates: Option<bool>,
}

impl FeatureFlags {
    pub fn get(&self, feature: Feature) -> Option<bool> {
        match feature {
            Feature::Header => self.show_header,
            Feature::Footer => self.show_footer,
            Feature::ItemDetails => self.show_item_details,
            Feature::ItemNotes => self.show_item_notes,
            Feature::ProjectDetails => self.show_project_details,
            Feature::ClientDetails => self.show_client_details,
            Feature::Terms => self.show_terms,
            Feature::Notes => self.show_notes,
            Feature::SignatureLine => self.show_signature_line,
            Feature::Dates => self.show_dates,
        }
    }

    pub fn set(&mut self, feature: Feature, value: Option<bool>) {
        let slot = match feature {
            Feature::Header => &mut self.show_header,
            Feature::Footer => &mut self.show_footer,
            Feature::ItemDetails => &mut self.show_item_details,
            Feature::ItemNotes => &mut self.show_item_notes,
            Feature::ProjectDetails => &mut self.show_project_details,
            Feature::ClientDetails => &mut self.show_client_details,
            Feature::Terms => &mut self.show_terms,
            Feature::Notes => &mut self.show_notes,
            Feature::SignatureLine => &mut self.show_signature_line,
            Feature::Dates => &mut self.show_dates,
        };
        *slot = value;
    }

    /// Fail-open: only an explicit `false` disables a feature.
    pub fn is_enabled(&self, feature: Feature) -> bool {
        self.get(feature) != Some(false)
    }
}

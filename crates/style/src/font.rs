use serde::{Deserialize, Serialize};

/// The PDF standard-14 families the renderer can reference without embedding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    #[default]
    Helvetica,
    Times,
    Courier,
}

impl FontFamily {
    /// Map a user-facing font identifier onto a standard family.
    ///
    /// Returns `None` for identifiers that have no sensible mapping.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        let normalized = identifier.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "helvetica" | "arial" | "inter" | "roboto" | "sans" | "sans-serif" | "system-ui" => {
                Some(FontFamily::Helvetica)
            }
            "times" | "times new roman" | "times-roman" | "georgia" | "serif" | "merriweather" => {
                Some(FontFamily::Times)
            }
            "courier" | "courier new" | "mono" | "monospace" => Some(FontFamily::Courier),
            _ => None,
        }
    }

    pub fn postscript_name(self, weight: FontWeight) -> &'static str {
        match (self, weight) {
            (FontFamily::Helvetica, FontWeight::Regular) => "Helvetica",
            (FontFamily::Helvetica, FontWeight::Bold) => "Helvetica-Bold",
            (FontFamily::Times, FontWeight::Regular) => "Times-Roman",
            (FontFamily::Times, FontWeight::Bold) => "Times-Bold",
            (FontFamily::Courier, FontWeight::Regular) => "Courier",
            (FontFamily::Courier, FontWeight::Bold) => "Courier-Bold",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

impl FontWeight {
    pub const ALL: [FontWeight; 2] = [FontWeight::Regular, FontWeight::Bold];
}

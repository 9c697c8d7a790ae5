//! The business record that drives one render.
//!
//! Everything here is produced by the surrounding application from its data
//! store and is treated as an immutable value by the engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Estimate,
    Invoice,
}

impl DocumentKind {
    /// The fixed label used when naming the downloadable artifact.
    pub fn file_label(self) -> &'static str {
        match self {
            DocumentKind::Estimate => "Estimate",
            DocumentKind::Invoice => "Invoice",
        }
    }

    pub fn file_extension(self) -> &'static str {
        "pdf"
    }

    pub fn is_invoice(self) -> bool {
        self == DocumentKind::Invoice
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    #[default]
    Draft,
    Pending,
    Sent,
    Accepted,
    Rejected,
    Converted,
    Paid,
    PartiallyPaid,
    Overdue,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl LineItem {
    /// A line item whose amount is `quantity * unit_price`.
    ///
    /// # Panics
    ///
    /// Panics if the product does not fit in a `Decimal`.
    pub fn priced(description: impl Into<String>, quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
            amount: quantity * unit_price,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn has_notes(&self) -> bool {
        self.notes.as_deref().is_some_and(|n| !n.trim().is_empty())
    }
}

/// An embedded image. The engine performs no I/O, so images arrive inline,
/// either as a `data:` URI (or bare base64 string) or as raw encoded bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageSource {
    DataUri(String),
    Bytes(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostalAddress {
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

/// A client or contractor record. Only `name` is required.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyRecord {
    pub name: String,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub address: PostalAddress,
    #[serde(default)]
    pub logo: Option<ImageSource>,
}

impl PartyRecord {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectReference {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentData {
    pub document_kind: DocumentKind,
    pub document_number: String,
    #[serde(default)]
    pub status: DocumentStatus,
    pub issue_date: NaiveDate,
    #[serde(default)]
    pub due_or_expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    pub subtotal: Decimal,
    #[serde(default)]
    pub tax_rate_percent: Decimal,
    #[serde(default)]
    pub discount_rate_percent: Decimal,
    pub total: Decimal,
    #[serde(default)]
    pub amount_paid: Option<Decimal>,
    pub party: PartyRecord,
    pub issuer: PartyRecord,
    #[serde(default)]
    pub project_reference: Option<ProjectReference>,
    #[serde(default)]
    pub terms: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub signature_image: Option<ImageSource>,
}

impl DocumentData {
    pub fn is_invoice(&self) -> bool {
        self.document_kind.is_invoice()
    }

    /// The first required field that is blank, by its JSON name.
    pub fn first_missing_required_field(&self) -> Option<&'static str> {
        if self.document_number.trim().is_empty() {
            Some("documentNumber")
        } else if self.issuer.name.trim().is_empty() {
            Some("issuer.name")
        } else if self.party.name.trim().is_empty() {
            Some("party.name")
        } else {
            None
        }
    }
}

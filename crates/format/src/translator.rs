//! Message catalogs.
//!
//! Every user-visible label the engine prints is named by a [`MessageKey`].
//! A [`Translator`] maps keys to strings; [`Catalog`] is the stock
//! implementation, with built-in English and Spanish tables and JSON loading
//! for anything else. Missing entries fall back to English.

use crate::error::FormatError;
use billforge_types::{DocumentKind, DocumentStatus};
use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::collections::BTreeMap;

macro_rules! message_keys {
    ($($variant:ident => $key:literal, $english:literal;)+) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum MessageKey {
            $($variant,)+
        }

        impl MessageKey {
            pub const ALL: &'static [MessageKey] = &[$(MessageKey::$variant,)+];

            /// The stable string form used in JSON catalogs.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(MessageKey::$variant => $key,)+
                }
            }

            pub fn parse(key: &str) -> Option<MessageKey> {
                match key {
                    $($key => Some(MessageKey::$variant),)+
                    _ => None,
                }
            }

            fn english(self) -> &'static str {
                match self {
                    $(MessageKey::$variant => $english,)+
                }
            }
        }
    };
}

message_keys! {
    EstimateTitle => "estimate.title", "ESTIMATE";
    InvoiceTitle => "invoice.title", "INVOICE";
    EstimateNumber => "estimate.number", "Estimate #";
    InvoiceNumber => "invoice.number", "Invoice #";
    PreparedFor => "parties.preparedFor", "Prepared For";
    BillTo => "parties.billTo", "Bill To";
    From => "parties.from", "From";
    IssueDate => "meta.issueDate", "Issue Date";
    DueDate => "meta.dueDate", "Due Date";
    ValidUntil => "meta.validUntil", "Valid Until";
    Status => "meta.status", "Status";
    Project => "meta.project", "Project";
    Description => "table.description", "Description";
    Quantity => "table.quantity", "Qty";
    UnitPrice => "table.unitPrice", "Unit Price";
    Amount => "table.amount", "Amount";
    Subtotal => "totals.subtotal", "Subtotal";
    Tax => "totals.tax", "Tax";
    Discount => "totals.discount", "Discount";
    Total => "totals.total", "Total";
    AmountPaid => "totals.amountPaid", "Amount Paid";
    BalanceDue => "totals.balanceDue", "Balance Due";
    Terms => "section.terms", "Terms & Conditions";
    Notes => "section.notes", "Notes";
    Signature => "section.signature", "Authorized Signature";
    SignatureUnavailable => "asset.signatureUnavailable", "[Signature could not be displayed]";
    LogoUnavailable => "asset.logoUnavailable", "[Logo unavailable]";
    FooterMessage => "footer.message", "Thank you for your business!";
    PageOf => "footer.pageOf", "Page {page} of {pages}";
    GeneratedOn => "footer.generatedOn", "Generated on {date}";
    DateUnavailable => "date.unavailable", "N/A";
    StatusDraft => "status.draft", "Draft";
    StatusPending => "status.pending", "Pending";
    StatusSent => "status.sent", "Sent";
    StatusAccepted => "status.accepted", "Accepted";
    StatusRejected => "status.rejected", "Rejected";
    StatusConverted => "status.converted", "Converted";
    StatusPaid => "status.paid", "Paid";
    StatusPartiallyPaid => "status.partiallyPaid", "Partially Paid";
    StatusOverdue => "status.overdue", "Overdue";
    StatusCancelled => "status.cancelled", "Cancelled";
    January => "month.january", "January";
    February => "month.february", "February";
    March => "month.march", "March";
    April => "month.april", "April";
    May => "month.may", "May";
    June => "month.june", "June";
    July => "month.july", "July";
    August => "month.august", "August";
    September => "month.september", "September";
    October => "month.october", "October";
    November => "month.november", "November";
    December => "month.december", "December";
}

impl MessageKey {
    pub const MONTHS: [MessageKey; 12] = [
        MessageKey::January,
        MessageKey::February,
        MessageKey::March,
        MessageKey::April,
        MessageKey::May,
        MessageKey::June,
        MessageKey::July,
        MessageKey::August,
        MessageKey::September,
        MessageKey::October,
        MessageKey::November,
        MessageKey::December,
    ];

    pub fn title_for(kind: DocumentKind) -> MessageKey {
        match kind {
            DocumentKind::Estimate => MessageKey::EstimateTitle,
            DocumentKind::Invoice => MessageKey::InvoiceTitle,
        }
    }

    pub fn number_label_for(kind: DocumentKind) -> MessageKey {
        match kind {
            DocumentKind::Estimate => MessageKey::EstimateNumber,
            DocumentKind::Invoice => MessageKey::InvoiceNumber,
        }
    }

    pub fn for_status(status: DocumentStatus) -> MessageKey {
        match status {
            DocumentStatus::Draft => MessageKey::StatusDraft,
            DocumentStatus::Pending => MessageKey::StatusPending,
            DocumentStatus::Sent => MessageKey::StatusSent,
            DocumentStatus::Accepted => MessageKey::StatusAccepted,
            DocumentStatus::Rejected => MessageKey::StatusRejected,
            DocumentStatus::Converted => MessageKey::StatusConverted,
            DocumentStatus::Paid => MessageKey::StatusPaid,
            DocumentStatus::PartiallyPaid => MessageKey::StatusPartiallyPaid,
            DocumentStatus::Overdue => MessageKey::StatusOverdue,
            DocumentStatus::Cancelled => MessageKey::StatusCancelled,
        }
    }
}

/// Maps message keys to localized strings.
pub trait Translator: Send + Sync {
    fn translate(&self, key: MessageKey) -> Cow<'_, str>;

    /// Translate and substitute `{name}` placeholders.
    fn translate_with(&self, key: MessageKey, args: &[(&str, &str)]) -> String {
        let mut text = self.translate(key).into_owned();
        for (name, value) in args {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        text
    }
}

/// A table of overrides on top of the built-in English strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    language: String,
    entries: BTreeMap<MessageKey, String>,
}

static SPANISH: Lazy<Catalog> = Lazy::new(|| {
    let entries = [
        (MessageKey::EstimateTitle, "PRESUPUESTO"),
        (MessageKey::InvoiceTitle, "FACTURA"),
        (MessageKey::EstimateNumber, "Presupuesto n.º"),
        (MessageKey::InvoiceNumber, "Factura n.º"),
        (MessageKey::PreparedFor, "Preparado para"),
        (MessageKey::BillTo, "Facturar a"),
        (MessageKey::From, "De"),
        (MessageKey::IssueDate, "Fecha de emisión"),
        (MessageKey::DueDate, "Fecha de vencimiento"),
        (MessageKey::ValidUntil, "Válido hasta"),
        (MessageKey::Status, "Estado"),
        (MessageKey::Project, "Proyecto"),
        (MessageKey::Description, "Descripción"),
        (MessageKey::Quantity, "Cant."),
        (MessageKey::UnitPrice, "Precio unitario"),
        (MessageKey::Amount, "Importe"),
        (MessageKey::Subtotal, "Subtotal"),
        (MessageKey::Tax, "Impuesto"),
        (MessageKey::Discount, "Descuento"),
        (MessageKey::Total, "Total"),
        (MessageKey::AmountPaid, "Importe pagado"),
        (MessageKey::BalanceDue, "Saldo pendiente"),
        (MessageKey::Terms, "Términos y condiciones"),
        (MessageKey::Notes, "Notas"),
        (MessageKey::Signature, "Firma autorizada"),
        (MessageKey::SignatureUnavailable, "[No se pudo mostrar la firma]"),
        (MessageKey::LogoUnavailable, "[Logotipo no disponible]"),
        (MessageKey::FooterMessage, "¡Gracias por su confianza!"),
        (MessageKey::PageOf, "Página {page} de {pages}"),
        (MessageKey::GeneratedOn, "Generado el {date}"),
        (MessageKey::DateUnavailable, "N/D"),
        (MessageKey::StatusDraft, "Borrador"),
        (MessageKey::StatusPending, "Pendiente"),
        (MessageKey::StatusSent, "Enviado"),
        (MessageKey::StatusAccepted, "Aceptado"),
        (MessageKey::StatusRejected, "Rechazado"),
        (MessageKey::StatusConverted, "Convertido"),
        (MessageKey::StatusPaid, "Pagado"),
        (MessageKey::StatusPartiallyPaid, "Pago parcial"),
        (MessageKey::StatusOverdue, "Vencido"),
        (MessageKey::StatusCancelled, "Cancelado"),
        (MessageKey::January, "enero"),
        (MessageKey::February, "febrero"),
        (MessageKey::March, "marzo"),
        (MessageKey::April, "abril"),
        (MessageKey::May, "mayo"),
        (MessageKey::June, "junio"),
        (MessageKey::July, "julio"),
        (MessageKey::August, "agosto"),
        (MessageKey::September, "septiembre"),
        (MessageKey::October, "octubre"),
        (MessageKey::November, "noviembre"),
        (MessageKey::December, "diciembre"),
    ];
    Catalog {
        language: "es".to_string(),
        entries: entries
            .into_iter()
            .map(|(key, text)| (key, text.to_string()))
            .collect(),
    }
});

impl Default for Catalog {
    fn default() -> Self {
        Self::english()
    }
}

impl Catalog {
    /// The built-in English strings.
    pub fn english() -> Self {
        Self {
            language: "en".to_string(),
            entries: BTreeMap::new(),
        }
    }

    pub fn spanish() -> Self {
        SPANISH.clone()
    }

    /// The built-in catalog for a BCP-47 tag's language, English otherwise.
    pub fn for_locale(tag: &str) -> Self {
        let language = tag.split(['-', '_']).next().unwrap_or_default();
        if language.eq_ignore_ascii_case("es") {
            Self::spanish()
        } else {
            Self::english()
        }
    }

    /// Load a catalog from a flat JSON object of `"key": "text"` pairs.
    ///
    /// Unknown keys are skipped with a warning; absent keys fall back to English.
    pub fn from_json(language: &str, json: &str) -> Result<Self, FormatError> {
        let raw: BTreeMap<String, String> = serde_json::from_str(json)?;
        let mut entries = BTreeMap::new();
        for (key, text) in raw {
            match MessageKey::parse(&key) {
                Some(message_key) => {
                    entries.insert(message_key, text);
                }
                None => log::warn!("Ignoring unknown message key '{}' in '{}' catalog", key, language),
            }
        }
        Ok(Self {
            language: language.to_string(),
            entries,
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn with_entry(mut self, key: MessageKey, text: impl Into<String>) -> Self {
        self.entries.insert(key, text.into());
        self
    }
}

impl Translator for Catalog {
    fn translate(&self, key: MessageKey) -> Cow<'_, str> {
        match self.entries.get(&key) {
            Some(text) => Cow::Borrowed(text.as_str()),
            None => Cow::Borrowed(key.english()),
        }
    }
}

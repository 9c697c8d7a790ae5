use base64::Engine;
use billforge::{
    Decimal, DocumentData, DocumentKind, DocumentStatus, ImageSource, LineItem, PartyRecord, PostalAddress,
    ProjectReference,
};
use chrono::NaiveDate;
use std::str::FromStr;

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn client() -> PartyRecord {
    PartyRecord {
        contact_name: Some("Jane Client".to_string()),
        email: Some("jane@example.com".to_string()),
        phone: Some("(512) 555-0100".to_string()),
        address: PostalAddress {
            line1: Some("12 Oak Street".to_string()),
            city: Some("Austin".to_string()),
            state: Some("TX".to_string()),
            postal_code: Some("78701".to_string()),
            ..Default::default()
        },
        ..PartyRecord::named("Oakridge Homes")
    }
}

pub fn contractor() -> PartyRecord {
    PartyRecord {
        email: Some("office@acme.example".to_string()),
        website: Some("acme.example".to_string()),
        ..PartyRecord::named("Acme Builders")
    }
}

/// A document whose supplied totals match its line items exactly
pub fn document(kind: DocumentKind, items: Vec<LineItem>, tax: &str, discount: &str) -> DocumentData {
    let subtotal: Decimal = items.iter().map(|i| i.amount).sum();
    let tax_rate = dec(tax);
    let discount_rate = dec(discount);
    let hundred = Decimal::from(100);
    let total = subtotal + subtotal * tax_rate / hundred - subtotal * discount_rate / hundred;
    DocumentData {
        document_kind: kind,
        document_number: "1001".to_string(),
        status: DocumentStatus::Sent,
        issue_date: date(2025, 3, 1),
        due_or_expiry_date: Some(date(2025, 3, 31)),
        line_items: items,
        subtotal,
        tax_rate_percent: tax_rate,
        discount_rate_percent: discount_rate,
        total: total.round_dp(2),
        amount_paid: None,
        party: client(),
        issuer: contractor(),
        project_reference: None,
        terms: None,
        notes: None,
        signature_image: None,
    }
}

/// The single-item estimate: Labor, 1 x 500.00, no tax or discount
pub fn minimal_estimate() -> DocumentData {
    document(
        DocumentKind::Estimate,
        vec![LineItem::priced("Labor", dec("1"), dec("500.00"))],
        "0",
        "0",
    )
}

pub fn numbered_items(count: usize) -> Vec<LineItem> {
    (1..=count)
        .map(|i| LineItem::priced(format!("Line item {}", i), dec("2"), dec("37.50")))
        .collect()
}

pub fn invoice_with_payment(total: &str, paid: &str) -> DocumentData {
    let mut data = document(
        DocumentKind::Invoice,
        vec![LineItem::priced("Kitchen remodel", dec("1"), dec(total))],
        "0",
        "0",
    );
    data.document_number = "INV-1001".to_string();
    data.amount_paid = Some(dec(paid));
    data
}

pub fn with_project(mut data: DocumentData) -> DocumentData {
    data.project_reference = Some(ProjectReference {
        title: "Backyard Deck".to_string(),
        description: Some("Pressure-treated pine deck with railing".to_string()),
    });
    data
}

/// A 4x2 opaque PNG as a data URI
pub fn png_data_uri() -> ImageSource {
    let image = image::RgbImage::from_pixel(4, 2, image::Rgb([30, 64, 175]));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(image)
        .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    ImageSource::DataUri(format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    ))
}

pub fn corrupt_image() -> ImageSource {
    ImageSource::Bytes(vec![0x89, b'P', b'N', b'G', 0, 1, 2, 3])
}

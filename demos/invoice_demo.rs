use billforge::{
    AssemblerBuilder, Decimal, DocumentData, DocumentKind, DocumentStatus, LineItem, PartyRecord,
    PostalAddress, ProjectReference, RenderOutcome, TemplateConfig,
};
use chrono::NaiveDate;
use std::error::Error;
use std::fs;

fn sample_invoice() -> DocumentData {
    let mut line_items = vec![
        LineItem::priced("Demolition and haul-away", Decimal::from(1), Decimal::new(85000, 2)),
        LineItem::priced("Cabinet installation", Decimal::from(14), Decimal::new(12500, 2))
            .with_notes("Upper and lower run, soft-close hinges"),
        LineItem::priced("Quartz countertop, per sq ft", Decimal::new(425, 1), Decimal::new(7800, 2)),
        LineItem::priced("Electrical rough-in", Decimal::from(6), Decimal::new(9500, 2)),
    ];
    for week in 1..=30 {
        line_items.push(LineItem::priced(
            format!("Site supervision, week {}", week),
            Decimal::from(8),
            Decimal::new(6500, 2),
        ));
    }

    let subtotal: Decimal = line_items.iter().map(|i| i.amount).sum();
    let tax_rate = Decimal::new(825, 2);
    let discount_rate = Decimal::from(5);
    let hundred = Decimal::from(100);
    let total = (subtotal + subtotal * tax_rate / hundred - subtotal * discount_rate / hundred).round_dp(2);

    DocumentData {
        document_kind: DocumentKind::Invoice,
        document_number: "INV-2025-0042".to_string(),
        status: DocumentStatus::PartiallyPaid,
        issue_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap_or_default(),
        due_or_expiry_date: NaiveDate::from_ymd_opt(2025, 3, 31),
        line_items,
        subtotal,
        tax_rate_percent: tax_rate,
        discount_rate_percent: discount_rate,
        total,
        amount_paid: Some(Decimal::new(500000, 2)),
        party: PartyRecord {
            contact_name: Some("Jane Client".to_string()),
            email: Some("jane@example.com".to_string()),
            address: PostalAddress {
                line1: Some("12 Oak Street".to_string()),
                city: Some("Austin".to_string()),
                state: Some("TX".to_string()),
                postal_code: Some("78701".to_string()),
                ..Default::default()
            },
            ..PartyRecord::named("Oakridge Homes")
        },
        issuer: PartyRecord {
            phone: Some("(512) 555-0199".to_string()),
            website: Some("acme.example".to_string()),
            ..PartyRecord::named("Acme Builders")
        },
        project_reference: Some(ProjectReference {
            title: "Kitchen Remodel".to_string(),
            description: Some("Full gut and rebuild of the main kitchen, including new cabinets and counters.".to_string()),
        }),
        terms: Some("Balance due within 30 days. A 1.5% monthly finance charge applies to overdue balances.".to_string()),
        notes: Some("Thank you for choosing Acme Builders for your remodel.".to_string()),
        signature_image: None,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    println!("Running Invoice Demo...");

    let assembler = AssemblerBuilder::new()
        .with_locale("en-US")
        .with_footer_message("Acme Builders · Licensed and insured")
        .build()?;
    println!("✓ Assembler built.");

    let template = TemplateConfig::default()
        .with_header_style("boxed")
        .with_table_style("striped")
        .with_colors("#0F766E", "#475569");

    let outcome = assembler.render(&sample_invoice(), Some(&template))?;
    if let RenderOutcome::SuccessWithWarnings(_, warnings) = &outcome {
        for warning in warnings {
            println!("! {}", warning);
        }
    }

    let document = outcome.into_document();
    fs::write(&document.file_name, &document.bytes)?;
    println!("\nSuccess! Generated {} ({} pages)", document.file_name, document.page_count);
    Ok(())
}

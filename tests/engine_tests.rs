mod common;

use billforge::{
    AssemblerBuilder, AssetKind, Decimal, DocumentAssembler, DocumentKind, EngineError, Feature, Figure, LineItem,
    RenderOutcome, RenderWarning, TemplateConfig, TotalsDiscrepancy, TotalsError, TotalsLine,
};
use common::fixtures::*;
use common::{GeneratedPdf, TestResult, generate_pdf, render, totals_value};
use std::sync::Arc;

fn with_terms_and_notes() -> billforge::DocumentData {
    let mut data = minimal_estimate();
    data.terms = Some("Half due on acceptance.".to_string());
    data.notes = Some("Site access via the side gate.".to_string());
    data
}

#[test]
fn test_identical_inputs_give_identical_bytes() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut data = with_project(document(DocumentKind::Invoice, numbered_items(45), "8.25", "5"));
    data.issuer.logo = Some(png_data_uri());
    let template = TemplateConfig::default().with_header_style("gradient");

    let first = render(&data, Some(&template))?;
    let second = render(&data, Some(&template))?;
    assert_eq!(first.bytes(), second.bytes());

    let dated = AssemblerBuilder::new().with_generated_on(date(2025, 4, 2)).build()?;
    let a = dated.render(&data, Some(&template))?;
    let b = dated.render(&data, Some(&template))?;
    assert_eq!(a.bytes(), b.bytes());
    let pdf = GeneratedPdf::from_outcome(&a)?;
    assert_pdf_contains_text!(pdf, "Generated on April 2, 2025");
    Ok(())
}

#[test]
fn test_concurrent_renders_match_sequential_ones() -> TestResult {
    let assembler = Arc::new(DocumentAssembler::default());
    let documents: Vec<_> = (0..6)
        .map(|i| {
            let mut data = document(DocumentKind::Invoice, numbered_items(i * 12), "7", "0");
            data.document_number = format!("INV-{}", 2000 + i);
            data
        })
        .collect();

    let sequential: Vec<Vec<u8>> = documents
        .iter()
        .map(|data| assembler.render(data, None).map(|o| o.into_document().bytes))
        .collect::<Result<_, _>>()?;

    let concurrent: Vec<Vec<u8>> = std::thread::scope(|scope| {
        let handles: Vec<_> = documents
            .iter()
            .map(|data| {
                let assembler = Arc::clone(&assembler);
                scope.spawn(move || assembler.render(data, None).map(|o| o.into_document().bytes))
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("render thread panicked"))
            .collect::<Result<_, EngineError>>()
    })?;

    assert_eq!(sequential, concurrent);
    Ok(())
}

#[test]
fn test_absent_and_empty_templates_render_the_defaults() -> TestResult {
    let data = with_terms_and_notes();
    let absent = render(&data, None)?;
    let empty = render(&data, Some(&TemplateConfig::from_json("{}")?))?;
    assert_eq!(absent.bytes(), empty.bytes());

    let data_json = serde_json::to_string(&data)?;
    let assembler = DocumentAssembler::default();
    let malformed = assembler.render_json(&data_json, Some("{ not json"))?;
    assert_eq!(absent.bytes(), malformed.bytes());

    let non_boolean = assembler.render_json(&data_json, Some(r#"{ "showTerms": "no", "showNotes": 0 }"#))?;
    assert_eq!(absent.bytes(), non_boolean.bytes());
    Ok(())
}

#[test]
fn test_explicit_false_disables_only_that_section() -> TestResult {
    let data = with_terms_and_notes();
    let template = TemplateConfig::from_json(r#"{ "showTerms": false }"#)?;
    let (_, pdf) = generate_pdf(&data, Some(&template))?;
    assert_pdf_not_contains_text!(pdf, "Half due on acceptance.");
    assert_pdf_not_contains_text!(pdf, "Terms & Conditions");
    assert_pdf_contains_text!(pdf, "Site access via the side gate.");
    assert_pdf_contains_text!(pdf, "Labor");
    assert_pdf_contains_text!(pdf, "Thank you for your business!");
    Ok(())
}

#[test]
fn test_item_details_off_collapses_columns() -> TestResult {
    let data = minimal_estimate();
    let template = TemplateConfig::default().with_feature(Feature::ItemDetails, false);
    let (_, pdf) = generate_pdf(&data, Some(&template))?;
    assert_pdf_contains_text!(pdf, "Description");
    assert_pdf_not_contains_text!(pdf, "Unit Price");
    assert_pdf_not_contains_text!(pdf, "Qty");
    Ok(())
}

#[test]
fn test_preview_is_one_page_with_the_same_figures() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut data = document(DocumentKind::Invoice, numbered_items(80), "8", "10");
    data.issuer.logo = Some(corrupt_image());
    let assembler = DocumentAssembler::default();

    let preview = assembler.render_preview(&data, None)?;
    assert!(!preview.has_warnings(), "preview decodes no images: {:?}", preview.warnings());
    let pdf = GeneratedPdf::from_outcome(&preview)?;
    assert_pdf_page_count!(pdf, 1);
    assert_pdf_contains_text!(pdf, "Line item 80");
    assert_eq!(common::pdf_assertions::count_images(&pdf.doc), 0);

    let preview_layout = assembler.layout_preview(&data, None)?;
    assert!(preview_layout.pages[0].height > 792.0);
    let final_layout = assembler.layout(&data, None)?;
    assert!(final_layout.pages.len() > 1);
    for line in [TotalsLine::Subtotal, TotalsLine::Tax, TotalsLine::Discount, TotalsLine::Total] {
        assert_eq!(totals_value(&preview_layout, line), totals_value(&final_layout, line));
    }
    Ok(())
}

#[test]
fn test_missing_required_fields_are_hard_failures() {
    let mut data = minimal_estimate();
    data.document_number = "   ".to_string();
    assert!(matches!(render(&data, None), Err(EngineError::MissingField("documentNumber"))));

    let mut data = minimal_estimate();
    data.issuer.name = String::new();
    assert!(matches!(render(&data, None), Err(EngineError::MissingField("issuer.name"))));

    let mut data = minimal_estimate();
    data.party.name = String::new();
    assert!(matches!(
        DocumentAssembler::default().render_preview(&data, None),
        Err(EngineError::MissingField("party.name"))
    ));
}

#[test]
fn test_malformed_document_json_is_a_data_error() {
    let result = DocumentAssembler::default().render_json(r#"{ "documentKind": "receipt" }"#, None);
    assert!(matches!(result, Err(EngineError::Data(_))));
}

#[test]
fn test_broken_logo_renders_placeholder_and_warns() -> TestResult {
    let mut data = minimal_estimate();
    data.issuer.logo = Some(corrupt_image());
    let (outcome, pdf) = generate_pdf(&data, None)?;

    let RenderOutcome::SuccessWithWarnings(document, warnings) = &outcome else {
        panic!("expected warnings, got {:?}", outcome.warnings());
    };
    assert_eq!(document.page_count, 1);
    assert_eq!(warnings.len(), 1);
    assert!(matches!(&warnings[0], RenderWarning::Asset(w) if w.asset == AssetKind::Logo));
    assert_pdf_contains_text!(pdf, "[Logo unavailable]");
    assert_pdf_contains_text!(pdf, "Labor");
    Ok(())
}

#[test]
fn test_broken_signature_renders_placeholder_and_warns() -> TestResult {
    let mut data = invoice_with_payment("1200.00", "0");
    data.signature_image = Some(corrupt_image());
    let (outcome, pdf) = generate_pdf(&data, None)?;
    assert!(matches!(
        outcome.warnings(),
        [RenderWarning::Asset(w)] if w.asset == AssetKind::Signature
    ));
    assert_pdf_contains_text!(pdf, "[Signature could not be displayed]");
    assert_pdf_contains_text!(pdf, "Authorized Signature");
    Ok(())
}

#[test]
fn test_valid_images_are_embedded() -> TestResult {
    let mut data = invoice_with_payment("1200.00", "0");
    data.issuer.logo = Some(png_data_uri());
    data.signature_image = Some(png_data_uri());
    let (outcome, pdf) = generate_pdf(&data, None)?;
    assert!(!outcome.has_warnings());
    assert_eq!(common::pdf_assertions::count_images(&pdf.doc), 2);
    assert_pdf_not_contains_text!(pdf, "[Logo unavailable]");
    Ok(())
}

#[test]
fn test_totals_mismatch_prints_supplied_total_and_warns() -> TestResult {
    let mut data = minimal_estimate();
    data.total = dec("999.00");
    let (outcome, pdf) = generate_pdf(&data, None)?;
    assert_pdf_contains_text!(pdf, "$999.00");
    assert_eq!(
        outcome.warnings(),
        &[RenderWarning::TotalsMismatch(TotalsDiscrepancy::Total {
            supplied: dec("999.00"),
            computed: dec("500.00"),
        })]
    );
    Ok(())
}

#[test]
fn test_out_of_range_amounts_warn_instead_of_aborting() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut bulk = LineItem::priced("Bulk order", dec("1"), dec("1"));
    bulk.unit_price = Decimal::MAX;
    bulk.amount = Decimal::MAX;
    let mut data = minimal_estimate();
    data.line_items = vec![bulk.clone(), bulk];

    let outcome = render(&data, None)?;
    assert_eq!(
        outcome.warnings(),
        &[RenderWarning::TotalsMismatch(TotalsDiscrepancy::Overflow {
            figure: Figure::Subtotal
        })]
    );
    let pdf = GeneratedPdf::from_outcome(&outcome)?;
    assert_pdf_contains_text!(pdf, "$500.00");

    let mut data = minimal_estimate();
    data.subtotal = Decimal::MAX;
    data.tax_rate_percent = dec("250");
    assert!(matches!(
        render(&data, None),
        Err(EngineError::Totals(TotalsError::Overflow(Figure::TaxAmount)))
    ));
    Ok(())
}

#[test]
fn test_locale_controls_number_formatting() -> TestResult {
    let assembler = AssemblerBuilder::new().with_locale("de-DE").build()?;
    let data = document(
        DocumentKind::Estimate,
        vec![billforge::LineItem::priced("Fliesen", dec("1"), dec("1234.50"))],
        "0",
        "0",
    );
    let layout = assembler.layout(&data, None)?;
    assert_eq!(totals_value(&layout, TotalsLine::Total).as_deref(), Some("1.234,50 €"));
    let outcome = assembler.render(&data, None)?;
    assert_eq!(GeneratedPdf::from_outcome(&outcome)?.page_count(), 1);
    Ok(())
}

#[test]
fn test_page_size_and_margins_from_engine_config() -> TestResult {
    let config = billforge::EngineConfig::from_json(r#"{ "pageSize": "A4", "margins": "2cm" }"#)?;
    let assembler = AssemblerBuilder::new().with_config(config).build()?;
    let layout = assembler.layout(&minimal_estimate(), None)?;
    assert!((layout.pages[0].width - 595.28).abs() < 0.01);
    assert!((layout.pages[0].height - 841.89).abs() < 0.01);

    let outcome = assembler.render(&minimal_estimate(), None)?;
    let pdf = GeneratedPdf::from_outcome(&outcome)?;
    let page_id = pdf.doc.get_pages()[&1];
    let media_box = pdf.doc.get_dictionary(page_id)?.get(b"MediaBox")?.as_array()?.clone();
    assert_eq!(media_box.len(), 4);
    Ok(())
}

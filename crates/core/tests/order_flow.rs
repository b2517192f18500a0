//! Order generation and export flow

mod support;

use freehold_core::order::render::render_html;
use freehold_core::{download_text, print_document, ExportError, OrderError, OrderState};
use freehold_domain::constants::ORDER_NOT_GENERATED_MESSAGE;
use freehold_domain::{OrderField, OrderForm};
use support::order::{
    complete_form, generator, order_date, CapturingSink, FixedClock, HeadlessPrinter,
};

#[test]
fn figures_are_derived_and_formatted() {
    let mut state = OrderState::new();
    let summary = generator(vec![4821]).generate(&complete_form(), &mut state).expect("valid form");

    assert_eq!(summary.reference, "FH-20261014-4821");
    assert_eq!(summary.formatted.one_off, "£1,000");
    assert_eq!(summary.formatted.monthly, "£100");
    assert_eq!(summary.formatted.annual, "£1,200");
    assert_eq!(summary.formatted.first_year, "£2,200");
    assert!(summary.text.contains("Annual estimate: £1,200\n"));
    assert!(summary.text.contains("First-year estimate: £2,200\n"));
    assert!(summary.text.contains("Add-ons: Priority support\n"));
    assert!(state.exports_enabled());
}

#[test]
fn very_large_fees_are_formatted_in_full() {
    let form = OrderForm {
        one_off_fee: "100000000000000000000".into(),
        monthly_fee: "0".into(),
        ..complete_form()
    };
    let mut state = OrderState::new();
    let summary = generator(vec![1234]).generate(&form, &mut state).expect("valid form");

    assert_eq!(summary.formatted.one_off, "£100,000,000,000,000,000,000");
    assert_eq!(summary.formatted.first_year, "£100,000,000,000,000,000,000");
}

#[test]
fn text_document_sections_are_in_order() {
    let mut state = OrderState::new();
    let summary = generator(vec![1234]).generate(&complete_form(), &mut state).expect("valid form");

    let headings = [
        "FREEHOLD COMMERCIAL ORDER SUMMARY",
        "CUSTOMER",
        "COMMERCIALS",
        "SCOPE SUMMARY",
        "ASSUMPTIONS",
        "LICENCE AND IP TERMS",
        "SIGNATURES",
        "NOTES",
    ];
    let positions: Vec<usize> = headings
        .iter()
        .map(|h| summary.text.find(&format!("{h}\n")).unwrap_or_else(|| panic!("missing {h}")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "sections out of order: {positions:?}");
    assert!(!summary.text.contains("ACCEPTANCE"));
    assert!(summary.text.contains("Freehold representative: TBC\n"));
    assert!(summary.text.contains("None recorded.\n"));
}

#[test]
fn acceptance_block_appears_when_terms_accepted() {
    let form = OrderForm { terms_accepted: true, ..complete_form() };
    let mut state = OrderState::new();
    let summary = generator(vec![1234]).generate(&form, &mut state).expect("valid form");

    let acceptance = summary.text.find("ACCEPTANCE\n").expect("acceptance block");
    let signatures = summary.text.find("SIGNATURES\n").expect("signature block");
    assert!(acceptance < signatures);
    assert!(render_html(summary).contains("<h2>Acceptance</h2>"));
}

#[test]
fn missing_fields_are_reported_by_label() {
    let form = OrderForm {
        legal_entity: String::new(),
        signer_title: " ".to_string(),
        ..complete_form()
    };
    let mut state = OrderState::new();

    let err = generator(vec![1234]).generate(&form, &mut state).expect_err("incomplete form");

    assert_eq!(
        err,
        OrderError::MissingFields(vec![OrderField::LegalEntity, OrderField::SignerTitle])
    );
    assert_eq!(
        err.user_message(),
        "Please complete the required order fields: Legal entity name, Signer title."
    );
    assert!(!state.exports_enabled());
}

#[test]
fn free_text_is_escaped_in_html_but_literal_in_text() {
    let form = OrderForm {
        scope_summary: "Phase 1 <core> & \"extras\"\nPhase 2 'later'".to_string(),
        ..complete_form()
    };
    let mut state = OrderState::new();
    generator(vec![1234]).generate(&form, &mut state).expect("valid form");

    let sink = CapturingSink::default();
    download_text(&state, &FixedClock(order_date()), &sink).expect("download");
    let text = String::from_utf8(sink.delivered()[0].bytes.clone()).expect("utf-8");
    assert!(text.contains("Phase 1 <core> & \"extras\"\nPhase 2 'later'\n"));

    let printer = HeadlessPrinter::default();
    print_document(&state, &printer).expect("print");
    let html = &printer.printed()[0].html;
    assert!(html
        .contains("Phase 1 &lt;core&gt; &amp; &quot;extras&quot;<br>Phase 2 &#x27;later&#x27;"));
    assert!(html.contains("Acme &amp; Co."));
    assert!(!html.contains("<core>"));
}

#[test]
fn download_is_named_after_company_slug() {
    let mut state = OrderState::new();
    generator(vec![1234]).generate(&complete_form(), &mut state).expect("valid form");
    let sink = CapturingSink::default();

    let receipt = download_text(&state, &FixedClock(order_date()), &sink).expect("download");

    assert_eq!(receipt.filename, "freehold-order-acme-co-2026-10-14.txt");
    let file = &sink.delivered()[0];
    assert_eq!(file.filename, receipt.filename);
    assert_eq!(file.content_type, "text/plain; charset=utf-8");
    assert_eq!(file.bytes.len(), receipt.bytes);
}

#[test]
fn download_is_dated_on_the_day_it_is_taken() {
    let mut state = OrderState::new();
    generator(vec![1234]).generate(&complete_form(), &mut state).expect("valid form");
    let next_day = order_date().succ_opt().expect("valid date");
    let sink = CapturingSink::default();

    let receipt = download_text(&state, &FixedClock(next_day), &sink).expect("download");

    assert_eq!(receipt.filename, "freehold-order-acme-co-2026-10-15.txt");
    assert!(sink.delivered()[0].bytes.starts_with(b"FREEHOLD COMMERCIAL ORDER SUMMARY"));
    assert_eq!(state.latest().expect("summary").reference, "FH-20261014-1234");
}

#[test]
fn regenerating_replaces_the_stored_summary() {
    let generator = generator(vec![1111, 2222]);
    let mut state = OrderState::new();

    generator.generate(&complete_form(), &mut state).expect("first");
    let second = OrderForm { company: "Globex".to_string(), ..complete_form() };
    generator.generate(&second, &mut state).expect("second");

    let latest = state.latest().expect("summary stored");
    assert_eq!(latest.reference, "FH-20261014-2222");
    assert_eq!(latest.input.company, "Globex");

    let sink = CapturingSink::default();
    let receipt = download_text(&state, &FixedClock(order_date()), &sink).expect("download");
    assert_eq!(receipt.filename, "freehold-order-globex-2026-10-14.txt");
}

#[test]
fn exports_before_generation_ask_to_generate_first() {
    let state = OrderState::new();
    let sink = CapturingSink::default();
    let printer = HeadlessPrinter::default();

    let download =
        download_text(&state, &FixedClock(order_date()), &sink).expect_err("nothing generated");
    let print = print_document(&state, &printer).expect_err("nothing generated");

    assert_eq!(download, ExportError::NotGenerated);
    assert_eq!(print.user_message(), ORDER_NOT_GENERATED_MESSAGE);
    assert!(sink.delivered().is_empty());
    assert!(printer.printed().is_empty());
}

#[test]
fn blocked_print_window_leaves_text_export_available() {
    let mut state = OrderState::new();
    generator(vec![1234]).generate(&complete_form(), &mut state).expect("valid form");

    let err = print_document(&state, &HeadlessPrinter::blocked()).expect_err("window blocked");
    assert!(matches!(err, ExportError::WindowBlocked(_)));

    let sink = CapturingSink::default();
    assert!(download_text(&state, &FixedClock(order_date()), &sink).is_ok());
}

#[test]
fn print_document_is_standalone_and_triggers_print() {
    let mut state = OrderState::new();
    generator(vec![4821]).generate(&complete_form(), &mut state).expect("valid form");
    let printer = HeadlessPrinter::default();

    print_document(&state, &printer).expect("print");

    let document = &printer.printed()[0];
    assert_eq!(document.title, "Freehold Commercial Order Summary FH-20261014-4821");
    assert!(document.html.starts_with("<!DOCTYPE html>"));
    assert!(document.html.contains("<style>"));
    assert!(document.html.contains("window.print()"));
    assert!(document.html.contains("<td>£2,200</td>"));
}

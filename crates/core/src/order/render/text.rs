//! Plain-text order summary

use std::fmt::Write as _;

use freehold_domain::OrderSummary;

use super::{
    notes, ACCEPTANCE_CONFIRMATION, DOCUMENT_TITLE, GENERATED_DATE_FORMAT, LICENCE_TERMS,
};

/// Render the summary as the fixed-structure text document.
///
/// Free text is written as entered: line breaks stay literal newlines and no
/// escaping is applied.
pub fn render_text(summary: &OrderSummary) -> String {
    let input = &summary.input;
    let figures = &summary.formatted;
    let mut out = String::with_capacity(2048);

    section(&mut out, &DOCUMENT_TITLE.to_uppercase());
    line(&mut out, "Reference", &summary.reference);
    line(&mut out, "Generated", &summary.generated_on.format(GENERATED_DATE_FORMAT).to_string());

    section(&mut out, "CUSTOMER");
    line(&mut out, "Company", &input.company);
    line(&mut out, "Legal entity", &input.legal_entity);
    line(&mut out, "Contact", &format!("{} <{}>", input.contact_name, input.contact_email));
    line(&mut out, "Deployment option", &input.deployment);
    line(&mut out, "Target go-live", input.go_live_or_tbc());

    section(&mut out, "COMMERCIALS");
    line(&mut out, "One-off fee", &figures.one_off);
    line(&mut out, "Monthly fee", &figures.monthly);
    line(&mut out, "Annual estimate", &figures.annual);
    line(&mut out, "First-year estimate", &figures.first_year);
    line(&mut out, "Add-ons", &summary.add_ons_text);

    section(&mut out, "SCOPE SUMMARY");
    paragraph(&mut out, &input.scope_summary);

    section(&mut out, "ASSUMPTIONS");
    paragraph(&mut out, input.assumptions_or_placeholder());

    section(&mut out, "LICENCE AND IP TERMS");
    for term in LICENCE_TERMS {
        bullet(&mut out, term);
    }

    if input.terms_accepted {
        section(&mut out, "ACCEPTANCE");
        paragraph(&mut out, ACCEPTANCE_CONFIRMATION);
    }

    section(&mut out, "SIGNATURES");
    line(&mut out, "Customer signatory", &input.signer_name);
    line(&mut out, "Title", &input.signer_title);
    line(&mut out, "Date", &input.signer_date);
    line(&mut out, "Freehold representative", input.representative_or_tbc());

    section(&mut out, "NOTES");
    for note in notes(&summary.currency_code) {
        bullet(&mut out, &note);
    }

    out
}

fn section(out: &mut String, heading: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(heading);
    out.push('\n');
}

fn line(out: &mut String, label: &str, value: &str) {
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{label}: {value}");
}

fn paragraph(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
}

fn bullet(out: &mut String, text: &str) {
    let _ = writeln!(out, "- {text}");
}

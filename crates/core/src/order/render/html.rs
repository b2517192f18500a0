//! Printable HTML order summary
//!
//! Produces a standalone document with inline styles. Every value taken from
//! the order is escaped; the multi-line free-text fields additionally have
//! their line breaks turned into `<br>`.

use std::fmt::Write as _;

use freehold_domain::utils::text::{escape_html, escape_multiline_html};
use freehold_domain::OrderSummary;

use super::{
    notes, ACCEPTANCE_CONFIRMATION, DOCUMENT_TITLE, GENERATED_DATE_FORMAT, LICENCE_TERMS,
};

const STYLES: &str = r"
    * { box-sizing: border-box; }
    body { margin: 0; padding: 32px 40px; font-family: 'Helvetica Neue', Arial, sans-serif;
           color: #1c2430; font-size: 13px; line-height: 1.5; }
    header { border-bottom: 2px solid #1c2430; padding-bottom: 12px; margin-bottom: 20px; }
    header h1 { margin: 0 0 6px; font-size: 22px; letter-spacing: 0.02em; }
    header p { margin: 0; color: #4a5566; }
    section { margin-bottom: 18px; page-break-inside: avoid; }
    h2 { font-size: 12px; text-transform: uppercase; letter-spacing: 0.08em; color: #4a5566;
         margin: 0 0 8px; border-bottom: 1px solid #d6dbe3; padding-bottom: 4px; }
    table { width: 100%; border-collapse: collapse; }
    th { text-align: left; font-weight: 600; width: 34%; padding: 4px 8px 4px 0;
         vertical-align: top; }
    td { padding: 4px 0; vertical-align: top; }
    tr.total th, tr.total td { border-top: 1px solid #d6dbe3; font-weight: 700; }
    ul { margin: 0; padding-left: 18px; }
    .signature-line { margin-top: 28px; border-top: 1px solid #1c2430; width: 60%;
                      padding-top: 4px; color: #4a5566; }
    @media print { body { padding: 0; } }
";

/// Render the summary as a standalone, print-ready HTML document.
pub fn render_html(summary: &OrderSummary) -> String {
    let input = &summary.input;
    let figures = &summary.formatted;
    let title = format!("{DOCUMENT_TITLE} {}", summary.reference);
    let generated = summary.generated_on.format(GENERATED_DATE_FORMAT).to_string();

    let mut body = String::with_capacity(4096);

    let _ = write!(
        body,
        "<header><h1>{}</h1><p>Reference {} &middot; Generated {}</p></header>",
        escape_html(DOCUMENT_TITLE),
        escape_html(&summary.reference),
        escape_html(&generated),
    );

    open_section(&mut body, "Customer");
    body.push_str("<table>");
    row(&mut body, "Company", &input.company);
    row(&mut body, "Legal entity", &input.legal_entity);
    row(&mut body, "Contact", &format!("{} <{}>", input.contact_name, input.contact_email));
    row(&mut body, "Deployment option", &input.deployment);
    row(&mut body, "Target go-live", input.go_live_or_tbc());
    body.push_str("</table></section>");

    open_section(&mut body, "Commercials");
    body.push_str("<table>");
    row(&mut body, "One-off fee", &figures.one_off);
    row(&mut body, "Monthly fee", &figures.monthly);
    row(&mut body, "Annual estimate", &figures.annual);
    let _ = write!(
        body,
        "<tr class=\"total\"><th>First-year estimate</th><td>{}</td></tr>",
        escape_html(&figures.first_year)
    );
    row(&mut body, "Add-ons", &summary.add_ons_text);
    body.push_str("</table></section>");

    open_section(&mut body, "Scope summary");
    let _ = write!(body, "<p>{}</p></section>", escape_multiline_html(&input.scope_summary));

    open_section(&mut body, "Assumptions");
    let _ = write!(
        body,
        "<p>{}</p></section>",
        escape_multiline_html(input.assumptions_or_placeholder())
    );

    open_section(&mut body, "Licence and IP terms");
    list(&mut body, LICENCE_TERMS.iter().copied());
    body.push_str("</section>");

    if input.terms_accepted {
        open_section(&mut body, "Acceptance");
        let _ = write!(body, "<p>{}</p></section>", escape_html(ACCEPTANCE_CONFIRMATION));
    }

    open_section(&mut body, "Signatures");
    body.push_str("<table>");
    row(&mut body, "Customer signatory", &input.signer_name);
    row(&mut body, "Title", &input.signer_title);
    row(&mut body, "Date", &input.signer_date);
    row(&mut body, "Freehold representative", input.representative_or_tbc());
    body.push_str("</table>");
    let _ = write!(
        body,
        "<p class=\"signature-line\">Signed for and on behalf of {}</p></section>",
        escape_html(&input.legal_entity)
    );

    open_section(&mut body, "Notes");
    let notes = notes(&summary.currency_code);
    list(&mut body, notes.iter().map(String::as_str));
    body.push_str("</section>");

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>{STYLES}</style>\n</head>\n<body>\n{body}\n\
         <script>window.addEventListener(\"load\", function () {{ window.print(); }});</script>\n\
         </body>\n</html>\n",
        escape_html(&title),
    )
}

fn open_section(out: &mut String, heading: &str) {
    let _ = write!(out, "<section><h2>{}</h2>", escape_html(heading));
}

fn row(out: &mut String, label: &str, value: &str) {
    let _ = write!(out, "<tr><th>{}</th><td>{}</td></tr>", escape_html(label), escape_html(value));
}

fn list<'a>(out: &mut String, items: impl Iterator<Item = &'a str>) {
    out.push_str("<ul>");
    for item in items {
        let _ = write!(out, "<li>{}</li>", escape_html(item));
    }
    out.push_str("</ul>");
}

//! Order summary documents
//!
//! Both renderers emit the same sections in the same order; the boilerplate
//! copy lives here so the two stay in step.

pub mod html;
pub mod text;

pub use html::render_html;
pub use text::render_text;

pub(crate) const DOCUMENT_TITLE: &str = "Freehold Commercial Order Summary";

pub(crate) const LICENCE_TERMS: [&str; 4] = [
    "Freehold retains all intellectual property in the platform, its configuration tooling and any \
     pre-existing materials.",
    "The customer is granted a non-exclusive, non-transferable licence to use the platform for its \
     internal business purposes for the term of this order.",
    "Customer data remains the property of the customer and is processed only to deliver the \
     services described in this order.",
    "Deliverables created specifically for the customer are licensed to the customer on payment of \
     the fees in this order.",
];

pub(crate) const ACCEPTANCE_CONFIRMATION: &str = "The customer confirms that it has read and \
     accepts the commercial terms and the licence and IP terms set out in this summary.";

pub(crate) fn notes(currency_code: &str) -> [String; 3] {
    [
        format!("All figures are in {currency_code} and exclude VAT."),
        "Annual and first-year figures are estimates derived from the monthly fee.".to_string(),
        "This summary becomes binding only once countersigned by a Freehold representative."
            .to_string(),
    ]
}

pub(crate) const GENERATED_DATE_FORMAT: &str = "%-d %B %Y";

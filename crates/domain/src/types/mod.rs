//! Domain types and models

pub mod contact;
pub mod order;
pub mod reveal;
pub mod status;

pub use contact::{ContactEnquiry, ContactField, ContactForm, ContactPayload};
pub use order::{
    order_text_filename, FeeField, FormattedFigures, OrderFigures, OrderField, OrderForm,
    OrderInput, OrderSummary, REQUIRED_ORDER_FIELDS,
};
pub use reveal::{ElementId, IntersectionEntry, RevealOptions};
pub use status::{FormStatus, StatusTone};

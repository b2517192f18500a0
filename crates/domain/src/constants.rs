//! Application constants
//!
//! Centralized location for the fixed copy and markers used by the website
//! behaviour. Values that operators may want to change live in
//! [`crate::config`] instead.

// Reveal animator
pub const REVEAL_MARKER_CLASS: &str = "reveal";
pub const REVEAL_VISIBLE_CLASS: &str = "is-visible";
pub const REVEAL_THRESHOLD: f64 = 0.18;

// Contact enquiry copy
pub const CONTACT_VALIDATION_MESSAGE: &str = "Please complete all fields before sending.";
pub const CONTACT_SENDING_MESSAGE: &str = "Sending your enquiry...";
pub const CONTACT_SUCCESS_MESSAGE: &str =
    "Thanks, your enquiry has been sent. We will be in touch shortly.";
pub const CONTACT_FAILURE_MESSAGE: &str =
    "We could not send your enquiry right now. Please try again shortly.";
pub const CONTACT_SOURCE: &str = "website";
pub const CONTACT_PREFERRED_METHOD: &str = "email";
pub const CONTACT_PATH: &str = "/api/contacts";

// Order generator placeholders
pub const PLACEHOLDER_TBC: &str = "TBC";
pub const PLACEHOLDER_NO_ADDONS: &str = "None selected";
pub const PLACEHOLDER_NO_ASSUMPTIONS: &str = "None recorded.";
pub const ORDER_NOT_GENERATED_MESSAGE: &str = "Please generate the order summary first.";
pub const ORDER_WINDOW_BLOCKED_MESSAGE: &str =
    "The print window could not be opened. Allow pop-ups or download the text summary instead.";
pub const ORDER_FILENAME_PREFIX: &str = "freehold-order";
pub const ORDER_SLUG_FALLBACK: &str = "customer";
pub const DEFAULT_REFERENCE_PREFIX: &str = "FH";

// Proxy
pub const BACKEND_UNREACHABLE_DETAIL: &str = "Unable to reach CRM backend from website service.";
pub const PROXY_TIMEOUT_SECS: u64 = 20;

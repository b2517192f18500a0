//! Page state shared by the generate and export handlers

use freehold_domain::OrderSummary;

/// The most recently generated order summary, if any.
///
/// Held in memory only. Each successful generation replaces the previous
/// summary; failed generations leave it untouched.
#[derive(Debug, Clone, Default)]
pub struct OrderState {
    latest: Option<OrderSummary>,
}

impl OrderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(&self) -> Option<&OrderSummary> {
        self.latest.as_ref()
    }

    /// Export controls are enabled once a summary exists
    pub fn exports_enabled(&self) -> bool {
        self.latest.is_some()
    }

    /// Store a new summary, returning a reference to it
    pub fn replace(&mut self, summary: OrderSummary) -> &OrderSummary {
        self.latest.insert(summary)
    }

    pub fn clear(&mut self) {
        self.latest = None;
    }
}

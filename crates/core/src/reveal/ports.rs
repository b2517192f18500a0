//! Port interfaces for the reveal animator
//!
//! The page and the viewport observer are supplied by the host (a browser
//! binding, or an in-memory page in tests).

use freehold_domain::ElementId;

/// Read and mutate element classes on the page
pub trait RevealPage {
    /// Elements currently carrying `class`, in document order
    fn elements_with_class(&self, class: &str) -> Vec<ElementId>;

    /// Add `class` to the element. Adding an existing class is a no-op.
    fn add_class(&mut self, element: &ElementId, class: &str);
}

/// Viewport intersection observer
pub trait VisibilityObserver {
    /// Start reporting intersection changes for `element` once at least
    /// `threshold` of it is visible.
    fn observe(&mut self, element: &ElementId, threshold: f64);

    /// Stop reporting changes for `element`.
    fn unobserve(&mut self, element: &ElementId);
}

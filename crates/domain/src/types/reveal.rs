//! Scroll reveal types

use serde::{Deserialize, Serialize};

use crate::constants::{REVEAL_MARKER_CLASS, REVEAL_THRESHOLD, REVEAL_VISIBLE_CLASS};

/// Opaque handle for a page element
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One visibility change reported by the viewport observer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntersectionEntry {
    pub target: ElementId,
    pub is_intersecting: bool,
    /// Visible fraction of the element, `0.0..=1.0`
    pub intersection_ratio: f64,
}

impl IntersectionEntry {
    pub fn entering(target: ElementId, intersection_ratio: f64) -> Self {
        Self { target, is_intersecting: true, intersection_ratio }
    }

    pub fn leaving(target: ElementId) -> Self {
        Self { target, is_intersecting: false, intersection_ratio: 0.0 }
    }
}

/// Marker classes and visibility threshold for the reveal animator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealOptions {
    pub marker_class: String,
    pub visible_class: String,
    pub threshold: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            marker_class: REVEAL_MARKER_CLASS.to_string(),
            visible_class: REVEAL_VISIBLE_CLASS.to_string(),
            threshold: REVEAL_THRESHOLD,
        }
    }
}

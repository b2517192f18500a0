//! Reveal animator - one-shot visibility state for marked elements

use std::collections::BTreeSet;

use freehold_domain::{ElementId, IntersectionEntry, RevealOptions};
use tracing::debug;

use super::ports::{RevealPage, VisibilityObserver};

/// Adds the visible class to marked elements the first time they scroll into
/// view, then stops watching them.
pub struct RevealAnimator<O: VisibilityObserver> {
    observer: O,
    options: RevealOptions,
    watching: BTreeSet<ElementId>,
}

impl<O: VisibilityObserver> RevealAnimator<O> {
    /// Create an animator with the default marker classes and threshold
    pub fn new(observer: O) -> Self {
        Self::with_options(observer, RevealOptions::default())
    }

    pub fn with_options(observer: O, options: RevealOptions) -> Self {
        Self { observer, options, watching: BTreeSet::new() }
    }

    /// Observe every marked element on the page.
    ///
    /// Returns the number of elements newly observed. Elements already being
    /// watched are not registered twice.
    pub fn attach(&mut self, page: &impl RevealPage) -> usize {
        let mut attached = 0;
        for element in page.elements_with_class(&self.options.marker_class) {
            if self.watching.insert(element.clone()) {
                self.observer.observe(&element, self.options.threshold);
                attached += 1;
            }
        }
        debug!(attached, threshold = self.options.threshold, "reveal elements observed");
        attached
    }

    /// Handle a batch of intersection changes.
    ///
    /// Returns the number of elements revealed by this batch.
    pub fn on_intersections(
        &mut self,
        page: &mut impl RevealPage,
        entries: &[IntersectionEntry],
    ) -> usize {
        let mut revealed = 0;
        for entry in entries {
            if !entry.is_intersecting {
                continue;
            }
            // Entries can still arrive for an element unobserved earlier in
            // the same batch.
            if !self.watching.remove(&entry.target) {
                continue;
            }

            page.add_class(&entry.target, &self.options.visible_class);
            self.observer.unobserve(&entry.target);
            revealed += 1;
        }
        revealed
    }

    /// Whether `element` is still waiting to be revealed
    pub fn is_watching(&self, element: &ElementId) -> bool {
        self.watching.contains(element)
    }

    pub fn pending(&self) -> usize {
        self.watching.len()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }
}

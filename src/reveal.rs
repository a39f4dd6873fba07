//! Scroll Reveal - one-shot visibility observers
//!
//! An observer watches a set of elements. The first time an element is
//! visible by at least `threshold` of its area, it receives the observer's
//! class and is no longer watched.
//!
//! Two presets match the page:
//! - sections reveal at 10% visibility (`REVEAL`)
//! - skill items animate at 50% visibility (`ANIMATE`)

use std::collections::{HashMap, HashSet};

use crate::error::{FolioError, Result};
use crate::types::{ClassList, ElementId};

/// Visibility report for one element, as delivered by the host's observer.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    pub target: ElementId,
    /// Visible fraction of the element's area, `0.0..=1.0`.
    pub ratio: f64,
}

impl IntersectionEntry {
    pub fn new(target: impl Into<ElementId>, ratio: f64) -> Self {
        Self {
            target: target.into(),
            ratio,
        }
    }

    pub fn is_intersecting(&self) -> bool {
        self.ratio > 0.0
    }
}

#[derive(Debug, Clone)]
pub struct RevealObserver {
    threshold: f64,
    class: ClassList,
    observed: HashSet<ElementId>,
    classes: HashMap<ElementId, ClassList>,
}

impl RevealObserver {
    pub fn new(threshold: f64, class: ClassList) -> Result<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(FolioError::InvalidThreshold(threshold));
        }
        Ok(Self {
            threshold,
            class,
            observed: HashSet::new(),
            classes: HashMap::new(),
        })
    }

    /// Page sections: revealed at `threshold` (page default 0.1).
    pub fn sections(threshold: f64) -> Result<Self> {
        Self::new(threshold, ClassList::REVEAL)
    }

    /// Skill items: animated at `threshold` (page default 0.5).
    pub fn skills(threshold: f64) -> Result<Self> {
        Self::new(threshold, ClassList::ANIMATE)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn observe(&mut self, id: impl Into<ElementId>) {
        let id = id.into();
        if !self.is_revealed(&id) {
            self.observed.insert(id);
        }
    }

    pub fn unobserve(&mut self, id: &ElementId) {
        self.observed.remove(id);
    }

    pub fn is_observing(&self, id: &ElementId) -> bool {
        self.observed.contains(id)
    }

    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }

    pub fn is_revealed(&self, id: &ElementId) -> bool {
        self.classes(id).contains(self.class)
    }

    /// Classes this observer has applied to `id`.
    pub fn classes(&self, id: &ElementId) -> ClassList {
        self.classes.get(id).copied().unwrap_or_default()
    }

    /// Apply a batch of visibility reports.
    ///
    /// Returns the elements revealed by this batch, in entry order.
    pub fn on_intersections(&mut self, entries: &[IntersectionEntry]) -> Vec<ElementId> {
        let mut revealed = Vec::new();

        for entry in entries {
            if !self.observed.contains(&entry.target) {
                continue;
            }
            if !entry.is_intersecting() || entry.ratio < self.threshold {
                continue;
            }

            *self.classes.entry(entry.target.clone()).or_default() |= self.class;
            self.observed.remove(&entry.target);
            revealed.push(entry.target.clone());
        }

        if !revealed.is_empty() {
            tracing::debug!(count = revealed.len(), class = ?self.class, "elements revealed");
        }
        revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(ids: &[&str]) -> RevealObserver {
        let mut observer = RevealObserver::sections(0.1).unwrap();
        for id in ids {
            observer.observe(*id);
        }
        observer
    }

    #[test]
    fn test_threshold_validation() {
        assert!(RevealObserver::new(-0.1, ClassList::REVEAL).is_err());
        assert!(RevealObserver::new(1.1, ClassList::REVEAL).is_err());
        assert!(RevealObserver::new(0.0, ClassList::REVEAL).is_ok());
        assert!(RevealObserver::new(1.0, ClassList::REVEAL).is_ok());
    }

    #[test]
    fn test_reveal_past_threshold() {
        let mut observer = sections(&["about", "projects"]);

        let revealed = observer.on_intersections(&[
            IntersectionEntry::new("about", 0.25),
            IntersectionEntry::new("projects", 0.05),
        ]);

        assert_eq!(revealed, vec![ElementId::new("about")]);
        assert!(observer.is_revealed(&"about".into()));
        assert!(!observer.is_revealed(&"projects".into()));
        assert!(observer.classes(&"about".into()).contains(ClassList::REVEAL));
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let mut observer = sections(&["about"]);

        observer.on_intersections(&[IntersectionEntry::new("about", 0.5)]);
        assert!(!observer.is_observing(&"about".into()));

        let again = observer.on_intersections(&[IntersectionEntry::new("about", 1.0)]);
        assert!(again.is_empty());

        // Re-observing a revealed element is a no-op.
        observer.observe("about");
        assert_eq!(observer.observed_count(), 0);
    }

    #[test]
    fn test_unobserved_entries_ignored() {
        let mut observer = sections(&["about"]);
        let revealed = observer.on_intersections(&[IntersectionEntry::new("footer", 1.0)]);
        assert!(revealed.is_empty());
        assert!(!observer.is_revealed(&"footer".into()));
    }

    #[test]
    fn test_skills_need_half_visibility() {
        let mut observer = RevealObserver::skills(0.5).unwrap();
        observer.observe("skill-rust");

        assert!(observer
            .on_intersections(&[IntersectionEntry::new("skill-rust", 0.49)])
            .is_empty());

        let revealed = observer.on_intersections(&[IntersectionEntry::new("skill-rust", 0.5)]);
        assert_eq!(revealed.len(), 1);
        assert!(observer.classes(&"skill-rust".into()).contains(ClassList::ANIMATE));
    }

    #[test]
    fn test_zero_threshold_needs_some_overlap() {
        let mut observer = RevealObserver::new(0.0, ClassList::REVEAL).unwrap();
        observer.observe("hero");

        assert!(observer
            .on_intersections(&[IntersectionEntry::new("hero", 0.0)])
            .is_empty());
        assert_eq!(
            observer.on_intersections(&[IntersectionEntry::new("hero", 0.01)]).len(),
            1
        );
    }
}

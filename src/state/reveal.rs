//! Reveal Registry - One-shot visibility watch
//!
//! Elements are registered by key and move one way, `Watching -> Revealed`.
//! After the transition the key leaves the watch set; later intersection
//! reports for it are ignored, whether or not the element left the viewport
//! in between.
//!
//! The same registry backs reveal-on-scroll (`[data-aos]`, 10% threshold)
//! and lazy images (`img[data-src]`, any intersection).

use std::collections::BTreeSet;

/// Identifies a watched element. Adapters stamp it onto the node.
pub type RevealKey = usize;

/// One intersection report from the observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub key: RevealKey,
    pub is_intersecting: bool,
    /// Visible fraction of the element, 0-1.
    pub ratio: f64,
}

/// What the adapter should do with a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// First qualifying intersection: apply the effect and stop observing.
    Reveal,
    /// Not yet visible enough; keep watching.
    Pending,
    /// Already revealed or never registered.
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct RevealRegistry {
    threshold: f64,
    watching: BTreeSet<RevealKey>,
    revealed: BTreeSet<RevealKey>,
    next_key: RevealKey,
}

impl RevealRegistry {
    /// `threshold` is the minimum visible ratio. Zero means any overlap.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Register a new element and return its key.
    pub fn watch(&mut self) -> RevealKey {
        let key = self.next_key;
        self.next_key += 1;
        self.watching.insert(key);
        key
    }

    pub fn is_watching(&self, key: RevealKey) -> bool {
        self.watching.contains(&key)
    }

    pub fn is_revealed(&self, key: RevealKey) -> bool {
        self.revealed.contains(&key)
    }

    pub fn watching_count(&self) -> usize {
        self.watching.len()
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// Feed one observer entry.
    pub fn observe(&mut self, sample: IntersectionSample) -> RevealOutcome {
        if !self.watching.contains(&sample.key) {
            return RevealOutcome::Ignored;
        }
        if !sample.is_intersecting || sample.ratio < self.threshold {
            return RevealOutcome::Pending;
        }
        self.watching.remove(&sample.key);
        self.revealed.insert(sample.key);
        RevealOutcome::Reveal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(key: RevealKey, ratio: f64) -> IntersectionSample {
        IntersectionSample {
            key,
            is_intersecting: ratio > 0.0,
            ratio,
        }
    }

    #[test]
    fn test_watch_assigns_distinct_keys() {
        let mut registry = RevealRegistry::new(0.1);
        let a = registry.watch();
        let b = registry.watch();
        assert_ne!(a, b);
        assert_eq!(registry.watching_count(), 2);
    }

    #[test]
    fn test_reveal_past_threshold() {
        let mut registry = RevealRegistry::new(0.1);
        let key = registry.watch();

        assert_eq!(registry.observe(sample(key, 0.05)), RevealOutcome::Pending);
        assert!(registry.is_watching(key));

        assert_eq!(registry.observe(sample(key, 0.1)), RevealOutcome::Reveal);
        assert!(registry.is_revealed(key));
        assert!(!registry.is_watching(key));
    }

    #[test]
    fn test_revealed_never_reevaluated() {
        let mut registry = RevealRegistry::new(0.1);
        let key = registry.watch();

        assert_eq!(registry.observe(sample(key, 0.5)), RevealOutcome::Reveal);
        // Leaves the viewport, then comes back
        assert_eq!(registry.observe(sample(key, 0.0)), RevealOutcome::Ignored);
        assert_eq!(registry.observe(sample(key, 1.0)), RevealOutcome::Ignored);
        assert_eq!(registry.revealed_count(), 1);
    }

    #[test]
    fn test_not_intersecting_is_pending() {
        let mut registry = RevealRegistry::new(0.1);
        let key = registry.watch();
        let outcome = registry.observe(IntersectionSample {
            key,
            is_intersecting: false,
            ratio: 0.5,
        });
        assert_eq!(outcome, RevealOutcome::Pending);
    }

    #[test]
    fn test_unknown_key_ignored() {
        let mut registry = RevealRegistry::new(0.1);
        assert_eq!(registry.observe(sample(42, 1.0)), RevealOutcome::Ignored);
    }

    #[test]
    fn test_zero_threshold_any_overlap() {
        let mut registry = RevealRegistry::new(0.0);
        let key = registry.watch();
        assert_eq!(registry.observe(sample(key, 0.001)), RevealOutcome::Reveal);
    }
}

use std::collections::HashMap;
use std::hash::Hash;

/// Fraction of an element's height that must overlap the trigger window
/// before it counts as entered.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// The trigger window is the viewport shrunk by this many pixels from the
/// bottom edge, so elements start animating slightly before they are fully
/// on screen.
pub const BOTTOM_INSET_PX: f64 = 50.0;

/// Visibility state of a tracked element. The transition is one-way:
/// once `Revealed`, an element never goes back to `Pending`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Pending,
    Revealed,
}

/// What the caller should do with an element after registering it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Registration {
    /// Not in view yet: start watching it for intersection.
    Watch,
    /// Already inside the trigger window: reveal right away. `order` counts
    /// the immediate reveals so far, for the cosmetic stagger delay.
    RevealNow { order: usize },
    /// Duplicate `register` call, nothing to do.
    AlreadyTracked,
}

/// One-way reveal state for a set of observed elements, keyed by element
/// identity. Keys are generic so the tracker can be exercised without a
/// rendering surface; the DOM driver in `components::scroll_reveal` maps
/// real elements onto them.
pub struct RevealTracker<K: Hash + Eq + Clone> {
    phases: HashMap<K, Phase>,
    immediate: usize,
}

impl<K: Hash + Eq + Clone> RevealTracker<K> {
    pub fn new() -> Self {
        Self {
            phases: HashMap::new(),
            immediate: 0,
        }
    }

    /// Begin tracking a key. Idempotent: a key that is already tracked
    /// (pending or revealed) is left untouched. `in_view` is the geometric
    /// already-intersecting check at registration time, so above-the-fold
    /// content reveals without waiting for a scroll event.
    pub fn register(&mut self, key: K, in_view: bool) -> Registration {
        if self.phases.contains_key(&key) {
            return Registration::AlreadyTracked;
        }
        if in_view {
            self.phases.insert(key, Phase::Revealed);
            let order = self.immediate;
            self.immediate += 1;
            Registration::RevealNow { order }
        } else {
            self.phases.insert(key, Phase::Pending);
            Registration::Watch
        }
    }

    /// Record that a key's element intersected the trigger window. Returns
    /// true only on the `Pending` -> `Revealed` transition; repeated
    /// intersections and unknown keys are no-ops.
    pub fn mark_entered(&mut self, key: &K) -> bool {
        match self.phases.get_mut(key) {
            Some(phase @ Phase::Pending) => {
                *phase = Phase::Revealed;
                true
            }
            _ => false,
        }
    }

    /// Stop tracking a key. Safe to call on keys that were never registered
    /// or were already revealed. Returns whether the key was being tracked.
    pub fn unregister(&mut self, key: &K) -> bool {
        self.phases.remove(key).is_some()
    }

    /// Fail-open path: when the intersection primitive is unavailable,
    /// reveal every pending key so no content stays hidden. Returns the keys
    /// that transitioned.
    pub fn reveal_all(&mut self) -> Vec<K> {
        let mut revealed = Vec::new();
        for (key, phase) in self.phases.iter_mut() {
            if *phase == Phase::Pending {
                *phase = Phase::Revealed;
                revealed.push(key.clone());
            }
        }
        revealed
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.phases.get(key) == Some(&Phase::Revealed)
    }
}

impl<K: Hash + Eq + Clone> Default for RevealTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Fraction of an element lying inside the trigger window, given its
/// bounding-box top and height and the viewport height. The window spans
/// from the top of the viewport to `viewport_height - bottom_inset`.
pub fn visible_fraction(top: f64, height: f64, viewport_height: f64, bottom_inset: f64) -> f64 {
    let window_bottom = (viewport_height - bottom_inset).max(0.0);
    if height <= 0.0 {
        // Zero-height markers count as visible when their edge is inside
        // the window.
        return if top >= 0.0 && top <= window_bottom {
            1.0
        } else {
            0.0
        };
    }
    let overlap = (top + height).min(window_bottom) - top.max(0.0);
    (overlap / height).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_entered_stays_pending() {
        let mut tracker = RevealTracker::new();
        tracker.register("a", false);
        tracker.register("b", false);
        assert!(!tracker.is_revealed(&"a"));
        assert!(!tracker.is_revealed(&"b"));
    }

    #[test]
    fn entering_reveals_once_and_for_all() {
        let mut tracker = RevealTracker::new();
        assert_eq!(tracker.register("a", false), Registration::Watch);
        assert!(tracker.mark_entered(&"a"));
        assert!(tracker.is_revealed(&"a"));
        // Re-triggered intersection events after reveal have no effect.
        assert!(!tracker.mark_entered(&"a"));
        assert!(tracker.is_revealed(&"a"));
    }

    #[test]
    fn duplicate_register_is_a_noop() {
        let mut tracker = RevealTracker::new();
        assert_eq!(tracker.register("a", false), Registration::Watch);
        assert_eq!(tracker.register("a", false), Registration::AlreadyTracked);
        // Exactly one transition when it comes into view, not two.
        assert!(tracker.mark_entered(&"a"));
        assert!(!tracker.mark_entered(&"a"));
    }

    #[test]
    fn register_after_reveal_does_not_reset() {
        let mut tracker = RevealTracker::new();
        tracker.register("a", false);
        tracker.mark_entered(&"a");
        assert_eq!(tracker.register("a", false), Registration::AlreadyTracked);
        assert!(tracker.is_revealed(&"a"));
    }

    #[test]
    fn unregister_stops_transitions() {
        let mut tracker = RevealTracker::new();
        tracker.register("a", false);
        assert!(tracker.unregister(&"a"));
        assert!(!tracker.mark_entered(&"a"));
        assert!(!tracker.is_revealed(&"a"));
    }

    #[test]
    fn unregister_unknown_key_is_safe() {
        let mut tracker: RevealTracker<&str> = RevealTracker::new();
        assert!(!tracker.unregister(&"ghost"));
    }

    #[test]
    fn reveal_all_covers_every_pending_key() {
        let mut tracker = RevealTracker::new();
        tracker.register("a", false);
        tracker.register("b", false);
        tracker.register("c", true);
        let mut revealed = tracker.reveal_all();
        revealed.sort();
        // "c" was already revealed at registration and does not transition
        // again.
        assert_eq!(revealed, vec!["a", "b"]);
        for key in ["a", "b", "c"] {
            assert!(tracker.is_revealed(&key));
        }
    }

    #[test]
    fn initial_placement_splits_immediate_and_watched() {
        let mut tracker = RevealTracker::new();
        // A starts within the viewport, B and C below the fold.
        assert_eq!(tracker.register("a", true), Registration::RevealNow { order: 0 });
        assert_eq!(tracker.register("b", false), Registration::Watch);
        assert_eq!(tracker.register("c", false), Registration::Watch);

        assert!(tracker.is_revealed(&"a"));
        assert!(!tracker.is_revealed(&"b"));
        assert!(!tracker.is_revealed(&"c"));

        // Scrolling brings each into the trigger window independently.
        assert!(tracker.mark_entered(&"b"));
        assert!(!tracker.is_revealed(&"c"));
        assert!(tracker.mark_entered(&"c"));
        assert!(tracker.is_revealed(&"b") && tracker.is_revealed(&"c"));
    }

    #[test]
    fn stagger_order_counts_immediate_reveals() {
        let mut tracker = RevealTracker::new();
        assert_eq!(tracker.register(1, true), Registration::RevealNow { order: 0 });
        assert_eq!(tracker.register(2, false), Registration::Watch);
        assert_eq!(tracker.register(3, true), Registration::RevealNow { order: 1 });
        assert_eq!(tracker.register(4, true), Registration::RevealNow { order: 2 });
    }

    #[test]
    fn visible_fraction_inside_window() {
        // 200px element fully inside a 1000px viewport.
        assert_eq!(visible_fraction(100.0, 200.0, 1000.0, 50.0), 1.0);
    }

    #[test]
    fn visible_fraction_below_fold() {
        assert_eq!(visible_fraction(1200.0, 200.0, 1000.0, 50.0), 0.0);
    }

    #[test]
    fn visible_fraction_at_trigger_edge() {
        // Element straddling the shrunk bottom edge: window bottom is 950,
        // element spans 900..1100, so 50 of 200 px are inside.
        let fraction = visible_fraction(900.0, 200.0, 1000.0, 50.0);
        assert!((fraction - 0.25).abs() < 1e-9);
    }

    #[test]
    fn visible_fraction_partially_scrolled_off_top() {
        // Element spans -100..100: half of it is above the viewport.
        let fraction = visible_fraction(-100.0, 200.0, 1000.0, 50.0);
        assert!((fraction - 0.5).abs() < 1e-9);
    }

    #[test]
    fn zero_height_element_uses_edge_test() {
        assert_eq!(visible_fraction(10.0, 0.0, 1000.0, 50.0), 1.0);
        assert_eq!(visible_fraction(980.0, 0.0, 1000.0, 50.0), 0.0);
    }
}

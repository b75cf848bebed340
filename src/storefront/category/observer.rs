//! Section Visibility Observer
//!
//! One per catalog section. Each frame it is fed the fraction of the
//! section's rect visible in the viewport; when that fraction crosses the
//! threshold from below, the observer writes its category id to the
//! tracker. Staying above the threshold does not re-fire, and leaving it
//! does nothing, so the last section to cross in stays active until
//! another one does.

use crate::storefront::category::tracker::CategoryTracker;

/// Visible fraction at which a section becomes the active one.
pub const VISIBILITY_THRESHOLD: f32 = 0.4;

/// Threshold-crossing detector for one catalog section.
#[derive(Debug)]
pub struct SectionObserver {
    category_id: i64,
    above: bool,
}

impl SectionObserver {
    pub fn new(category_id: i64) -> Self {
        Self {
            category_id,
            above: false,
        }
    }

    pub fn category_id(&self) -> i64 {
        self.category_id
    }

    /// Feed one visibility sample. Writes the tracker and returns true only
    /// on an upward crossing of [`VISIBILITY_THRESHOLD`].
    pub fn observe(&mut self, visible_fraction: f32, tracker: &CategoryTracker) -> bool {
        let above = visible_fraction >= VISIBILITY_THRESHOLD;
        let crossed_in = above && !self.above;
        self.above = above;

        if crossed_in {
            tracing::debug!(category_id = self.category_id, "section crossed into view");
            tracker.set(self.category_id);
        }
        crossed_in
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_on_upward_crossing() {
        let tracker = CategoryTracker::new(1);
        let mut observer = SectionObserver::new(2);

        assert!(!observer.observe(0.1, &tracker));
        assert!(observer.observe(0.5, &tracker));
        assert_eq!(tracker.get(), 2);
    }

    #[test]
    fn staying_above_does_not_refire() {
        let tracker = CategoryTracker::new(1);
        let mut observer = SectionObserver::new(2);

        observer.observe(0.5, &tracker);
        tracker.set(3);

        // Still above: no write
        assert!(!observer.observe(0.9, &tracker));
        assert_eq!(tracker.get(), 3);
    }

    #[test]
    fn leaving_does_not_write() {
        let tracker = CategoryTracker::new(1);
        let mut observer = SectionObserver::new(2);

        observer.observe(0.5, &tracker);
        assert!(!observer.observe(0.1, &tracker));
        assert_eq!(tracker.get(), 2);
    }

    #[test]
    fn refires_after_dropping_below() {
        let tracker = CategoryTracker::new(1);
        let mut observer = SectionObserver::new(2);

        observer.observe(0.5, &tracker);
        observer.observe(0.1, &tracker);
        tracker.set(3);

        assert!(observer.observe(0.6, &tracker));
        assert_eq!(tracker.get(), 2);
    }

    #[test]
    fn exact_threshold_counts_as_above() {
        let tracker = CategoryTracker::new(1);
        let mut observer = SectionObserver::new(2);

        assert!(observer.observe(VISIBILITY_THRESHOLD, &tracker));
    }

    #[test]
    fn scroll_from_section_a_into_b() {
        let tracker = CategoryTracker::new(1);
        let mut section_a = SectionObserver::new(1);
        let mut section_b = SectionObserver::new(2);

        // A fully visible, B off-screen
        section_a.observe(1.0, &tracker);
        section_b.observe(0.0, &tracker);
        assert_eq!(tracker.get(), 1);

        // Scrolling down: A shrinks, B crosses in
        section_a.observe(0.6, &tracker);
        section_b.observe(0.2, &tracker);
        section_a.observe(0.3, &tracker);
        section_b.observe(0.45, &tracker);
        assert_eq!(tracker.get(), 2);

        // A leaving entirely does not steal it back
        section_a.observe(0.0, &tracker);
        assert_eq!(tracker.get(), 2);
    }
}

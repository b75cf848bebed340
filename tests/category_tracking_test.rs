//! Property tests for the scroll-synced category tracking: the tracker
//! must always equal the id of the section that last crossed the
//! visibility threshold upward, for any sequence of visibility samples.

use pizzetta::storefront::category::{CategoryTracker, SectionObserver, VISIBILITY_THRESHOLD};
use proptest::prelude::*;

const INITIAL: i64 = 1;
const SECTIONS: usize = 4;

proptest! {
    #[test]
    fn tracker_equals_last_upward_crossing(
        samples in prop::collection::vec((0..SECTIONS, 0.0f32..=1.0f32), 0..300)
    ) {
        let tracker = CategoryTracker::new(INITIAL);
        let mut observers: Vec<SectionObserver> =
            (0..SECTIONS).map(|i| SectionObserver::new(i as i64 + 1)).collect();

        // Reference model: per-section above/below flags and the id of the
        // last section to cross in.
        let mut above = [false; SECTIONS];
        let mut expected = INITIAL;

        for (section, fraction) in samples {
            let now_above = fraction >= VISIBILITY_THRESHOLD;
            if now_above && !above[section] {
                expected = section as i64 + 1;
            }
            above[section] = now_above;

            observers[section].observe(fraction, &tracker);
            prop_assert_eq!(tracker.get(), expected);
        }
    }

    #[test]
    fn observer_never_fires_below_threshold(
        fractions in prop::collection::vec(0.0f32..VISIBILITY_THRESHOLD, 0..100)
    ) {
        let tracker = CategoryTracker::new(INITIAL);
        let mut observer = SectionObserver::new(7);

        for fraction in fractions {
            prop_assert!(!observer.observe(fraction, &tracker));
        }
        prop_assert_eq!(tracker.get(), INITIAL);
    }

    #[test]
    fn repeated_samples_above_threshold_fire_once(
        fractions in prop::collection::vec(VISIBILITY_THRESHOLD..=1.0f32, 1..100)
    ) {
        let tracker = CategoryTracker::new(INITIAL);
        let mut observer = SectionObserver::new(7);

        let fired: usize = fractions
            .into_iter()
            .filter(|&f| observer.observe(f, &tracker))
            .count();
        prop_assert_eq!(fired, 1);
    }
}

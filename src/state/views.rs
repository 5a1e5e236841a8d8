//! Derived views over the show collection.
//!
//! Both views are recomputed from scratch whenever the collection is
//! replaced. Neither touches its input: the high-rated view filters into a
//! new vector, the recent view sorts a copy.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::models::Show;

/// Minimum rating for the high-rated view.
pub const HIGH_RATED_THRESHOLD: f64 = 8.0;

/// Length of the recent view.
pub const RECENT_LIMIT: usize = 10;

/// Parameters of the derived views.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSettings {
    pub high_rated_threshold: f64,
    pub recent_limit: usize,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            high_rated_threshold: HIGH_RATED_THRESHOLD,
            recent_limit: RECENT_LIMIT,
        }
    }
}

/// Cached projections of one revision of the show collection.
#[derive(Debug, Clone, Default)]
pub struct DerivedViews {
    high_rated: Arc<Vec<Show>>,
    recent: Arc<Vec<Show>>,
    revision: u64,
}

impl DerivedViews {
    pub fn compute(shows: &[Show], settings: ViewSettings, revision: u64) -> Self {
        Self {
            high_rated: Arc::new(high_rated(shows, settings.high_rated_threshold)),
            recent: Arc::new(recent(shows, settings.recent_limit)),
            revision,
        }
    }

    pub fn high_rated(&self) -> Arc<Vec<Show>> {
        Arc::clone(&self.high_rated)
    }

    pub fn recent(&self) -> Arc<Vec<Show>> {
        Arc::clone(&self.recent)
    }

    /// Revision of the collection these views were computed from.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// Shows rated at or above `threshold`, best first.
///
/// Non-numeric ratings never qualify. Equal ratings are ordered by title,
/// then url.
pub fn high_rated(shows: &[Show], threshold: f64) -> Vec<Show> {
    let mut selected: Vec<Show> = shows
        .iter()
        .filter(|show| show.rate.value() >= threshold)
        .cloned()
        .collect();
    selected.sort_by(|a, b| {
        b.rate
            .value()
            .total_cmp(&a.rate.value())
            .then_with(|| tie_break(a, b))
    });
    selected
}

/// The `limit` most recent shows by release year, newest first.
///
/// Equal years are ordered by title, then url.
pub fn recent(shows: &[Show], limit: usize) -> Vec<Show> {
    let mut sorted = shows.to_vec();
    sorted.sort_by(|a, b| b.year.cmp(&a.year).then_with(|| tie_break(a, b)));
    sorted.truncate(limit);
    sorted
}

fn tie_break(a: &Show, b: &Show) -> Ordering {
    a.title.cmp(&b.title).then_with(|| a.url.cmp(&b.url))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Vec<Show> {
        vec![
            Show::new("A", "https://x/a", 9.1, 2020).with_categories(["Drama"]),
            Show::new("B", "https://x/b", 7.5, 2023).with_categories(["Comedy"]),
        ]
    }

    fn titles(shows: &[Show]) -> Vec<&str> {
        shows.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_two_show_scenario() {
        let shows = scenario();
        assert_eq!(titles(&high_rated(&shows, HIGH_RATED_THRESHOLD)), vec!["A"]);
        assert_eq!(titles(&recent(&shows, RECENT_LIMIT)), vec!["B", "A"]);
    }

    #[test]
    fn test_high_rated_threshold_is_inclusive() {
        let shows = vec![
            Show::new("Edge", "e", 8.0, 2000),
            Show::new("Below", "b", 7.99, 2000),
        ];
        assert_eq!(titles(&high_rated(&shows, 8.0)), vec!["Edge"]);
    }

    #[test]
    fn test_high_rated_sorted_descending() {
        let shows = vec![
            Show::new("Mid", "m", 8.5, 2001),
            Show::new("Top", "t", 9.6, 2002),
            Show::new("Low", "l", 8.1, 2003),
            Show::new("Out", "o", 6.0, 2004),
        ];
        let view = high_rated(&shows, 8.0);
        assert_eq!(titles(&view), vec!["Top", "Mid", "Low"]);
        assert!(view.windows(2).all(|w| w[0].rate >= w[1].rate));
    }

    #[test]
    fn test_high_rated_skips_non_numeric() {
        let shows = vec![
            Show::new("Unknown", "u", f64::NAN, 2001),
            Show::new("Good", "g", 8.8, 2002),
        ];
        assert_eq!(titles(&high_rated(&shows, 8.0)), vec!["Good"]);
    }

    #[test]
    fn test_high_rated_ties_by_title() {
        let shows = vec![
            Show::new("Zeta", "z", 9.0, 2001),
            Show::new("Alpha", "a", 9.0, 2002),
        ];
        assert_eq!(titles(&high_rated(&shows, 8.0)), vec!["Alpha", "Zeta"]);
    }

    #[test]
    fn test_recent_truncates_and_does_not_mutate() {
        let shows: Vec<Show> = (0..15)
            .map(|i| Show::new(format!("S{:02}", i), format!("u{}", i), 7.0, 2000 + i))
            .collect();
        let before = shows.clone();

        let view = recent(&shows, 10);
        assert_eq!(view.len(), 10);
        assert_eq!(view[0].year, 2014);
        assert_eq!(view[9].year, 2005);
        assert!(view.windows(2).all(|w| w[0].year >= w[1].year));
        assert_eq!(shows, before);
    }

    #[test]
    fn test_recent_boundary_tie_is_deterministic() {
        let mut shows: Vec<Show> = (0..9)
            .map(|i| Show::new(format!("N{}", i), format!("n{}", i), 7.0, 2024))
            .collect();
        shows.push(Show::new("Zed", "z", 7.0, 2020));
        shows.push(Show::new("Abe", "a", 7.0, 2020));

        let view = recent(&shows, 10);
        assert_eq!(view[9].title, "Abe");
    }

    #[test]
    fn test_empty_collection() {
        assert!(high_rated(&[], 8.0).is_empty());
        assert!(recent(&[], 10).is_empty());
    }

    #[test]
    fn test_derived_views_compute() {
        let views = DerivedViews::compute(&scenario(), ViewSettings::default(), 3);
        assert_eq!(views.revision(), 3);
        assert_eq!(views.high_rated().len(), 1);
        assert_eq!(views.recent().len(), 2);
    }
}

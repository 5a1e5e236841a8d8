//! The authoritative in-memory dataset.

use std::sync::Arc;

use crate::models::{Show, StatEntry, StatKind};

/// Show collection plus the precomputed distributions.
///
/// The only mutation is wholesale replacement of one sequence. Sequences
/// are held behind `Arc` so readers get cheap snapshots that stay valid
/// after a later replacement.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    shows: Arc<Vec<Show>>,
    rate_stats: Arc<Vec<StatEntry>>,
    category_stats: Arc<Vec<StatEntry>>,
    year_stats: Arc<Vec<StatEntry>>,
    area_stats: Arc<Vec<StatEntry>>,
    /// Bumped on every replacement of `shows`
    revision: u64,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows in the order the server sent them.
    pub fn shows(&self) -> Arc<Vec<Show>> {
        Arc::clone(&self.shows)
    }

    pub fn stats(&self, kind: StatKind) -> Arc<Vec<StatEntry>> {
        Arc::clone(self.stats_slot(kind))
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }

    /// Replace the show collection and return the new revision.
    pub fn replace_shows(&mut self, shows: Vec<Show>) -> u64 {
        self.shows = Arc::new(shows);
        self.revision += 1;
        self.revision
    }

    pub fn replace_stats(&mut self, kind: StatKind, entries: Vec<StatEntry>) {
        *self.stats_slot_mut(kind) = Arc::new(entries);
    }

    fn stats_slot(&self, kind: StatKind) -> &Arc<Vec<StatEntry>> {
        match kind {
            StatKind::Rate => &self.rate_stats,
            StatKind::Category => &self.category_stats,
            StatKind::Year => &self.year_stats,
            StatKind::Area => &self.area_stats,
        }
    }

    fn stats_slot_mut(&mut self, kind: StatKind) -> &mut Arc<Vec<StatEntry>> {
        match kind {
            StatKind::Rate => &mut self.rate_stats,
            StatKind::Category => &mut self.category_stats,
            StatKind::Year => &mut self.year_stats,
            StatKind::Area => &mut self.area_stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_dataset_is_empty() {
        let dataset = Dataset::new();
        assert!(dataset.is_empty());
        assert_eq!(dataset.revision(), 0);
        for kind in StatKind::ALL {
            assert!(dataset.stats(kind).is_empty());
        }
    }

    #[test]
    fn test_replace_shows_bumps_revision() {
        let mut dataset = Dataset::new();
        assert_eq!(dataset.replace_shows(vec![Show::new("A", "a", 9.0, 2020)]), 1);
        assert_eq!(dataset.replace_shows(Vec::new()), 2);
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_snapshot_survives_replacement() {
        let mut dataset = Dataset::new();
        dataset.replace_shows(vec![Show::new("A", "a", 9.0, 2020)]);
        let snapshot = dataset.shows();
        dataset.replace_shows(vec![Show::new("B", "b", 7.0, 2021)]);
        assert_eq!(snapshot[0].title, "A");
        assert_eq!(dataset.shows()[0].title, "B");
    }

    #[test]
    fn test_replace_stats_is_per_kind() {
        let mut dataset = Dataset::new();
        dataset.replace_stats(StatKind::Year, vec![StatEntry::new("2020", 4.0)]);
        assert_eq!(dataset.stats(StatKind::Year).len(), 1);
        assert!(dataset.stats(StatKind::Rate).is_empty());
        assert_eq!(dataset.revision(), 0);
    }
}

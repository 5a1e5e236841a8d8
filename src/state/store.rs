//! Shared show store: fetch orchestration, dataset, views and filters.
//!
//! `ShowStore` is constructed once by the application and handed to
//! consumers as `Arc<ShowStore<_>>`. The dataset sits behind a
//! `std::sync::RwLock` that is only ever held for a copy or a swap, never
//! across an `.await`. Consumers that want change notifications subscribe
//! to a `watch` channel carrying [`StoreStatus`].

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Instant;

use serde::Deserialize;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use super::dataset::Dataset;
use super::filters;
use super::views::{DerivedViews, ViewSettings};
use crate::api::ShowsApi;
use crate::models::{ApiEnvelope, Show, ShowPage, ShowQuery, StatEntry, StatKind, BULK_PAGE_SIZE};
use crate::startup::DashConfig;
use crate::traits::HttpClient;

/// Statistics fetched behind the fail-fast barrier.
const BARRIER_STATS: [StatKind; 3] = [StatKind::Rate, StatKind::Category, StatKind::Year];

// ============================================================================
// Status and outcome types
// ============================================================================

/// What subscribers see on every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreStatus {
    /// Revision of the show collection
    pub revision: u64,
    pub loading: bool,
}

/// Where a fetch cycle failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStage {
    /// The rate/category/year barrier
    Statistics,
    /// The bulk show-list request
    Shows,
}

impl fmt::Display for FetchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchStage::Statistics => write!(f, "statistics"),
            FetchStage::Shows => write!(f, "shows"),
        }
    }
}

/// What a successful cycle changed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FetchSummary {
    /// Number of shows now held
    pub shows: usize,
    /// Show records dropped because they could not be decoded
    pub skipped_shows: usize,
    /// Statistics replaced this cycle
    pub stats_updated: Vec<StatKind>,
    /// Statistics left unchanged because their payload was malformed
    pub stats_kept: Vec<StatKind>,
    /// Revision after the cycle
    pub revision: u64,
}

/// Result of [`ShowStore::fetch_all_data`].
///
/// Failures are already logged; callers that only care about the state can
/// ignore this value.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Loaded(FetchSummary),
    Failed { stage: FetchStage, reason: String },
    /// Another cycle was running; nothing was done
    AlreadyInFlight,
}

impl FetchOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, FetchOutcome::Loaded(_))
    }
}

// ============================================================================
// ShowStore
// ============================================================================

struct StoreInner {
    dataset: Dataset,
    views: DerivedViews,
}

/// Client-side store of TV-show data.
pub struct ShowStore<C> {
    api: ShowsApi<C>,
    settings: ViewSettings,
    page_size: u32,
    inner: RwLock<StoreInner>,
    loading: AtomicBool,
    status_tx: watch::Sender<StoreStatus>,
}

impl<C: HttpClient> ShowStore<C> {
    pub fn new(api: ShowsApi<C>) -> Self {
        Self::with_settings(api, ViewSettings::default(), BULK_PAGE_SIZE)
    }

    pub fn from_config(api: ShowsApi<C>, config: &DashConfig) -> Self {
        let settings = ViewSettings {
            high_rated_threshold: config.high_rated_threshold,
            recent_limit: config.recent_limit,
        };
        Self::with_settings(api, settings, config.page_size)
    }

    pub fn with_settings(api: ShowsApi<C>, settings: ViewSettings, page_size: u32) -> Self {
        let (status_tx, _) = watch::channel(StoreStatus::default());
        Self {
            api,
            settings,
            page_size,
            inner: RwLock::new(StoreInner {
                dataset: Dataset::new(),
                views: DerivedViews::default(),
            }),
            loading: AtomicBool::new(false),
            status_tx,
        }
    }

    pub fn api(&self) -> &ShowsApi<C> {
        &self.api
    }

    pub fn settings(&self) -> ViewSettings {
        self.settings
    }

    // ------------------------------------------------------------------------
    // Fetch orchestration
    // ------------------------------------------------------------------------

    /// Run one fetch cycle.
    ///
    /// 1. Rate, category and year statistics are requested concurrently;
    ///    if any request fails the cycle stops before touching anything.
    /// 2. Each statistic is replaced only when its `data` is an array of
    ///    entries; otherwise the previous value stays.
    /// 3. The show list is requested as one large page and replaces the
    ///    collection (`data.items` missing means an empty collection).
    ///
    /// The show list is the last request of the cycle. Area statistics are
    /// not part of it; see [`fetch_area_stats`](Self::fetch_area_stats).
    ///
    /// Errors are logged, never returned. The loading flag is set for the
    /// duration and cleared on every exit path. A call made while a cycle
    /// is running returns [`FetchOutcome::AlreadyInFlight`] immediately.
    pub async fn fetch_all_data(&self) -> FetchOutcome {
        let Some(_loading) = LoadingGuard::acquire(self) else {
            debug!("Fetch cycle already in flight, skipping");
            return FetchOutcome::AlreadyInFlight;
        };
        let started = Instant::now();
        let mut summary = FetchSummary::default();

        let barrier = tokio::try_join!(
            self.api.fetch_rate_stats(),
            self.api.fetch_category_stats(),
            self.api.fetch_year_stats(),
        );
        let (rate, category, year) = match barrier {
            Ok(envelopes) => envelopes,
            Err(e) => {
                error!(
                    stage = %FetchStage::Statistics,
                    error_code = e.error_code(),
                    error = %e,
                    "Failed to load dashboard data"
                );
                return FetchOutcome::Failed {
                    stage: FetchStage::Statistics,
                    reason: e.to_string(),
                };
            }
        };

        {
            let mut inner = self.write();
            for (kind, envelope) in BARRIER_STATS.into_iter().zip([rate, category, year]) {
                match stats_from_envelope(kind, &envelope) {
                    Some(entries) => {
                        inner.dataset.replace_stats(kind, entries);
                        summary.stats_updated.push(kind);
                    }
                    None => summary.stats_kept.push(kind),
                }
            }
        }
        self.publish();

        let query = ShowQuery::new().with_page(1, self.page_size);
        let envelope = match self.api.fetch_shows(&query).await {
            Ok(envelope) => envelope,
            Err(e) => {
                error!(
                    stage = %FetchStage::Shows,
                    error_code = e.error_code(),
                    error = %e,
                    "Failed to load dashboard data"
                );
                return FetchOutcome::Failed {
                    stage: FetchStage::Shows,
                    reason: e.to_string(),
                };
            }
        };
        let (shows, skipped) = shows_from_envelope(&envelope);
        summary.shows = shows.len();
        summary.skipped_shows = skipped;
        summary.revision = self.replace_shows(shows);

        info!(
            shows = summary.shows,
            skipped = summary.skipped_shows,
            stats_updated = summary.stats_updated.len(),
            revision = summary.revision,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Dashboard data loaded"
        );
        FetchOutcome::Loaded(summary)
    }

    /// Refresh the area distribution on its own.
    ///
    /// Runs outside the fetch cycle and never touches the loading flag. A
    /// failed request or a malformed payload is logged and the previous
    /// value stays. Returns whether the distribution was replaced.
    pub async fn fetch_area_stats(&self) -> bool {
        let envelope = match self.api.fetch_area_stats().await {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!(kind = %StatKind::Area, error = %e, "Area statistics unavailable");
                return false;
            }
        };
        match stats_from_envelope(StatKind::Area, &envelope) {
            Some(entries) => {
                debug!(entries = entries.len(), "Area statistics updated");
                self.write().dataset.replace_stats(StatKind::Area, entries);
                true
            }
            None => false,
        }
    }

    /// Replace the show collection wholesale and recompute the views.
    ///
    /// Returns the new revision.
    pub fn replace_shows(&self, shows: Vec<Show>) -> u64 {
        let revision = {
            let mut inner = self.write();
            let revision = inner.dataset.replace_shows(shows);
            let views = DerivedViews::compute(&inner.dataset.shows(), self.settings, revision);
            inner.views = views;
            revision
        };
        self.publish();
        revision
    }

    // ------------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------------

    pub fn shows(&self) -> Arc<Vec<Show>> {
        self.read().dataset.shows()
    }

    pub fn stats(&self, kind: StatKind) -> Arc<Vec<StatEntry>> {
        self.read().dataset.stats(kind)
    }

    pub fn rate_stats(&self) -> Arc<Vec<StatEntry>> {
        self.stats(StatKind::Rate)
    }

    pub fn category_stats(&self) -> Arc<Vec<StatEntry>> {
        self.stats(StatKind::Category)
    }

    pub fn year_stats(&self) -> Arc<Vec<StatEntry>> {
        self.stats(StatKind::Year)
    }

    pub fn area_stats(&self) -> Arc<Vec<StatEntry>> {
        self.stats(StatKind::Area)
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    pub fn revision(&self) -> u64 {
        self.read().dataset.revision()
    }

    /// Shows rated at or above the configured threshold, best first.
    pub fn high_rated_shows(&self) -> Arc<Vec<Show>> {
        self.read().views.high_rated()
    }

    /// The most recent shows by release year, newest first.
    pub fn recent_shows(&self) -> Arc<Vec<Show>> {
        self.read().views.recent()
    }

    pub fn status(&self) -> StoreStatus {
        *self.status_tx.borrow()
    }

    /// Receiver that is notified on every dataset or loading change.
    pub fn subscribe(&self) -> watch::Receiver<StoreStatus> {
        self.status_tx.subscribe()
    }

    // ------------------------------------------------------------------------
    // Filters over the current snapshot
    // ------------------------------------------------------------------------

    pub fn filter_by_category(&self, category: &str) -> Vec<Show> {
        filters::filter_by_category(&self.shows(), category)
    }

    pub fn filter_by_year(&self, year: i32) -> Vec<Show> {
        filters::filter_by_year(&self.shows(), year)
    }

    pub fn filter_by_rate_range(&self, min: f64, max: f64) -> Vec<Show> {
        filters::filter_by_rate_range(&self.shows(), min, max)
    }

    pub fn filter_by_area(&self, area: &str) -> Vec<Show> {
        filters::filter_by_area(&self.shows(), area)
    }

    pub fn search_title(&self, keyword: &str) -> Vec<Show> {
        filters::search_title(&self.shows(), keyword)
    }

    pub fn find_by_url(&self, url: &str) -> Option<Show> {
        filters::find_by_url(&self.shows(), url)
    }

    pub fn apply_query(&self, query: &ShowQuery) -> ShowPage {
        filters::apply_query(&self.shows(), query)
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self) {
        let status = StoreStatus {
            revision: self.revision(),
            loading: self.is_loading(),
        };
        self.status_tx.send_replace(status);
    }
}

/// Holds the loading flag for one fetch cycle.
///
/// Dropping it clears the flag, whether the cycle returned, panicked or
/// was cancelled mid-await.
struct LoadingGuard<'a, C: HttpClient> {
    store: &'a ShowStore<C>,
}

impl<'a, C: HttpClient> LoadingGuard<'a, C> {
    fn acquire(store: &'a ShowStore<C>) -> Option<Self> {
        store
            .loading
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()?;
        store.publish();
        Some(Self { store })
    }
}

impl<C: HttpClient> Drop for LoadingGuard<'_, C> {
    fn drop(&mut self) {
        self.store.loading.store(false, Ordering::SeqCst);
        self.store.publish();
    }
}

/// Statistic entries from an envelope, or `None` when `data` is not an
/// array. Entries that are not `{name, value}` objects are dropped.
fn stats_from_envelope(kind: StatKind, envelope: &ApiEnvelope) -> Option<Vec<StatEntry>> {
    let Some(items) = envelope.data_array() else {
        warn!(kind = %kind, "Statistics payload is not an array, keeping previous value");
        return None;
    };
    let entries: Vec<StatEntry> = items
        .iter()
        .filter_map(|item| match StatEntry::deserialize(item) {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!(kind = %kind, error = %e, "Skipping malformed statistics entry");
                None
            }
        })
        .collect();
    if entries.len() < items.len() {
        warn!(
            kind = %kind,
            skipped = items.len() - entries.len(),
            "Malformed statistics entries dropped"
        );
    }
    Some(entries)
}

/// Show records from `data.items`, plus the count of records that could not
/// be decoded. Missing or non-array `items` gives an empty collection.
fn shows_from_envelope(envelope: &ApiEnvelope) -> (Vec<Show>, usize) {
    let Some(items) = envelope.data_items() else {
        warn!("Show list payload has no items, using an empty collection");
        return (Vec::new(), 0);
    };
    let Some(records) = items.as_array() else {
        warn!("Show list items is not an array, using an empty collection");
        return (Vec::new(), 0);
    };

    let mut shows = Vec::with_capacity(records.len());
    let mut skipped = 0;
    for record in records {
        match Show::deserialize(record) {
            Ok(show) => shows.push(show),
            Err(e) => {
                skipped += 1;
                debug!(error = %e, "Skipping malformed show record");
            }
        }
    }
    if skipped > 0 {
        warn!(skipped, "Dropped malformed show records");
    }
    (shows, skipped)
}

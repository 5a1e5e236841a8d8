//! Client-side state for the TV-show dashboard
//!
//! - `Dataset`: the show collection and the precomputed distributions
//! - `DerivedViews`: high-rated and recent projections, recomputed on replace
//! - `filters`: pure query functions over a snapshot
//! - `ShowStore`: the shared context object tying them to the API

pub mod dataset;
pub mod filters;
pub mod store;
pub mod views;

pub use dataset::Dataset;
pub use store::{FetchOutcome, FetchStage, FetchSummary, ShowStore, StoreStatus};
pub use views::{DerivedViews, ViewSettings, HIGH_RATED_THRESHOLD, RECENT_LIMIT};

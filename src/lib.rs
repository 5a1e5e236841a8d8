//! tvdash - client-side data store for a TV-show ratings dashboard
//!
//! This library exposes modules for use by the binary and integration tests.

pub mod adapters;
pub mod api;
pub mod cli;
pub mod cli_output;
pub mod error;
pub mod models;
pub mod startup;
pub mod state;
pub mod traits;

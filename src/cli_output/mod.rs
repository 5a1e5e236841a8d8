//! CLI output utilities for line-based dashboard output.
//!
//! This module provides functions for rendering section headers, show
//! lists and statistic bars to stdout.

mod boxes;

pub use boxes::*;

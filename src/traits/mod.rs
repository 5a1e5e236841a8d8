//! Trait abstractions for dependency injection and testability.
//!
//! The store never talks to the network directly. It is handed something that
//! implements [`HttpClient`], which lets tests swap the real transport for a
//! canned one.

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};

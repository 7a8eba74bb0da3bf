//! HTTP client for the remote menu document.
//!
//! The endpoint is a static JSON file: one unauthenticated GET, no paging.

pub mod client;
pub mod error;

pub use client::MenuClient;
pub use error::ApiError;

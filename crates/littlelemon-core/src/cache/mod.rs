//! Local menu cache.
//!
//! `MenuCache` keeps the current snapshot of dishes on disk as JSON and
//! answers filter/sort queries over it. The only writer is menu sync,
//! which replaces the whole table at once.

pub mod menu;
pub mod query;
pub mod snapshot;

pub use menu::MenuCache;
pub use query::{CategoryFilter, MenuQuery};
pub use snapshot::CachedData;

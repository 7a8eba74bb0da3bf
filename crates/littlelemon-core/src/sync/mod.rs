//! Menu synchronization.
//!
//! A sync fetches the remote menu on a background task and reports back
//! with exactly one `SyncMessage` over an mpsc channel. The owner of the
//! `MenuCache` drains the channel on its own thread, so the cache only
//! ever has one writer. Starting a sync cancels the one in flight, and a
//! message from a superseded sync is dropped.

pub mod menu_sync;

pub use menu_sync::{MenuSync, SyncMessage, SyncOutcome};

//! # Preference Store Module
//!
//! Persists per-collection usage counters and a bounded most-recently-used
//! icon history, and serves both back as ranking inputs.
//!
//! ## Storage
//!
//! One JSON document at a well-known location (platform data directory by
//! default, e.g. `~/.local/share/glyphsync/preferences.json` on Linux), or
//! at any explicit path handed to [`PreferenceStore::new`] for hermetic
//! tests.
//!
//! ## Data Format
//!
//! ```json
//! {
//!   "collections": {
//!     "lucide": { "count": 42, "lastUsed": "2026-08-31T10:30:00Z" }
//!   },
//!   "history": [
//!     { "iconId": "lucide:home", "timestamp": "2026-08-31T10:30:00Z" }
//!   ]
//! }
//! ```
//!
//! History is capped at 50 entries, newest first, at most one entry per
//! icon identifier.
//!
//! ## Consistency
//!
//! Saves go through a sibling temp file and an atomic rename, so a reader
//! never observes a torn write. Concurrent read-modify-write cycles from
//! separate processes can still lose an increment (last writer wins); usage
//! tracking is a best-effort optimization, not a correctness-bearing count.

mod store;

pub use store::{
    CollectionUsage, HistoryEntry, PreferenceStore, Preferences, MAX_HISTORY_ENTRIES,
};

//! Glyphsync - idempotent icon component synchronization
//!
//! This library provides the core functionality for resolving icon-set
//! documents (alias chains, fill injection), generating framework-specific
//! icon components, merging them into a single machine-managed source file
//! without duplication, and ranking icon collections by observed usage.

pub mod codegen;
mod error;
pub mod icon;
pub mod managed;
pub mod prefs;
pub mod rank;
pub mod remote;
pub mod sync;

pub use error::SyncError;
pub use sync::{sync_icon, SyncReport};

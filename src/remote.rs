//! # Remote Collaborator Contracts
//!
//! The network-facing search and icon-set fetch services are external
//! collaborators; only their wire shapes and the seam they plug into live
//! here. Fetch failures are the collaborator's to report and are not
//! retried by this library.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::icon::IconSetDocument;

/// A search request: free-text query plus optional collection/category
/// filters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    pub query: String,
    pub prefixes: Vec<String>,
    pub category: Option<String>,
    pub limit: Option<u32>,
}

/// A search response: matching icon identifiers plus pagination and
/// per-collection match counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    pub icons: Vec<String>,
    pub total: u64,
    pub limit: u32,
    pub start: u32,
    pub collections: HashMap<String, u64>,
}

/// Seam implemented by whatever transport layer talks to the icon API.
pub trait IconSource {
    /// Search for icons matching the query.
    fn search(&self, query: &SearchQuery) -> Result<SearchResponse>;

    /// Fetch the full icon-set document for a collection prefix.
    fn fetch_icon_set(&self, prefix: &str) -> Result<IconSetDocument>;
}

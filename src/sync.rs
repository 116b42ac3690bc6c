//! # Sync Orchestration
//!
//! Wires the pipeline end to end for one icon: resolve the identifier
//! against a fetched icon-set document, assemble final markup, generate the
//! flavor-specific snippet, merge it idempotently into the managed file,
//! and record the usage event.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::codegen::Flavor;
use crate::icon::{build_svg, resolve_icon, IconId, IconSetDocument, SvgOptions};
use crate::managed;
use crate::prefs::PreferenceStore;

/// Result of synchronizing one icon into a managed file.
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub component_name: String,
    /// True when the icon was already present and the file was not touched.
    pub already_exists: bool,
    pub file: PathBuf,
}

/// Synchronize one icon into the managed file at `managed_path`.
///
/// Upstream data errors (invalid identifier, icon not found) and managed
/// file persistence errors are surfaced to the caller. Usage tracking is
/// best-effort and never fails the operation.
#[allow(clippy::too_many_arguments)]
pub fn sync_icon(
    doc: &IconSetDocument,
    icon_id: &str,
    managed_path: &Path,
    flavor: Flavor,
    options: &SvgOptions,
    custom_name: Option<&str>,
    prefs: &PreferenceStore,
) -> Result<SyncReport> {
    let id = IconId::parse(icon_id)?;
    let icon = resolve_icon(doc, &id)?;
    let markup = build_svg(doc, icon, options)?;

    let outcome = managed::add_icon_to_file(managed_path, icon_id, &markup, flavor, custom_name)?;

    prefs.track_usage(&id.prefix, Some(icon_id));

    Ok(SyncReport {
        component_name: outcome.component_name,
        already_exists: outcome.already_exists,
        file: managed_path.to_path_buf(),
    })
}

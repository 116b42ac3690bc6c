use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum number of entries retained in the recently-used icon history.
pub const MAX_HISTORY_ENTRIES: usize = 50;

/// Bounded, no-delay retry count for usage-tracking writes.
const TRACK_USAGE_ATTEMPTS: u32 = 3;

/// The persisted preferences document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Per-collection usage, keyed by collection prefix.
    pub collections: HashMap<String, CollectionUsage>,
    /// Recently used icons, newest first, at most one entry per identifier.
    pub history: Vec<HistoryEntry>,
}

/// Usage counters for one collection prefix.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionUsage {
    pub count: u64,
    pub last_used: DateTime<Utc>,
}

/// One entry in the recently-used icon history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub icon_id: String,
    pub timestamp: DateTime<Utc>,
}

impl Preferences {
    /// Record a usage event: bump the collection counter (creating the
    /// entry on first use) and, when an identifier is given, move it to the
    /// front of the history and truncate to [`MAX_HISTORY_ENTRIES`].
    pub fn record_usage(&mut self, prefix: &str, icon_id: Option<&str>) {
        let now = Utc::now();

        let entry = self
            .collections
            .entry(prefix.to_string())
            .or_insert_with(|| CollectionUsage {
                count: 0,
                last_used: now,
            });
        entry.count += 1;
        entry.last_used = now;

        if let Some(icon_id) = icon_id {
            self.history.retain(|h| h.icon_id != icon_id);
            self.history.insert(
                0,
                HistoryEntry {
                    icon_id: icon_id.to_string(),
                    timestamp: now,
                },
            );
            self.history.truncate(MAX_HISTORY_ENTRIES);
        }
    }

    /// Collection prefixes sorted by descending usage count. Tie order is
    /// whatever the underlying map yields.
    pub fn preferred_collections(&self) -> Vec<String> {
        let mut entries: Vec<_> = self.collections.iter().collect();
        entries.sort_by(|a, b| b.1.count.cmp(&a.1.count));
        entries.into_iter().map(|(prefix, _)| prefix.clone()).collect()
    }

    /// The first `limit` history entries (already newest first).
    pub fn recent_icons(&self, limit: usize) -> &[HistoryEntry] {
        &self.history[..limit.min(self.history.len())]
    }
}

/// Persistent preference storage at one on-disk path. The in-memory
/// [`Preferences`] value is transient; every operation is a fresh
/// read-modify-write of the whole file.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Create a store backed by an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the platform-appropriate data directory, e.g.
    /// `~/.local/share/glyphsync/preferences.json` on Linux.
    pub fn open_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "glyphsync")
            .context("Failed to determine application data directory")?;
        Ok(Self::new(dirs.data_dir().join("preferences.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the preferences document. A missing or unparseable file yields
    /// the default empty structure; this never errors.
    pub fn load(&self) -> Preferences {
        match fs::read_to_string(&self.path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Preferences::default(),
        }
    }

    /// Persist the preferences document crash-safely: serialize to a
    /// sibling temp file (unique per writing process), then atomically
    /// rename it over the target. When the rename fails a plain overwrite
    /// is attempted so the data still lands where possible, but the rename
    /// failure is reported either way; the non-atomic fallback is the only
    /// path on which a reader could observe a torn file.
    pub fn save(&self, prefs: &Preferences) -> Result<()> {
        let json =
            serde_json::to_string_pretty(prefs).context("Failed to serialize preferences")?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create preferences directory: {}", parent.display())
                })?;
            }
        }

        let tmp = self.temp_path();
        fs::write(&tmp, &json).with_context(|| {
            format!("Failed to write temporary preferences file: {}", tmp.display())
        })?;

        if let Err(rename_err) = fs::rename(&tmp, &self.path) {
            let _ = fs::write(&self.path, &json);
            let _ = fs::remove_file(&tmp);
            return Err(rename_err).with_context(|| {
                format!(
                    "Failed to replace preferences file: {}",
                    self.path.display()
                )
            });
        }

        Ok(())
    }

    /// Record a usage event with up to [`TRACK_USAGE_ATTEMPTS`] immediate
    /// load-mutate-save attempts. Exhausting the attempts logs a warning
    /// and returns normally: usage tracking must never fail the caller's
    /// primary operation.
    pub fn track_usage(&self, prefix: &str, icon_id: Option<&str>) {
        let mut last_err = None;
        for _ in 0..TRACK_USAGE_ATTEMPTS {
            let mut prefs = self.load();
            prefs.record_usage(prefix, icon_id);
            match self.save(&prefs) {
                Ok(()) => return,
                Err(err) => last_err = Some(err),
            }
        }
        if let Some(err) = last_err {
            tracing::warn!(
                prefix,
                error = %err,
                "usage tracking failed after {} attempts; dropping the event",
                TRACK_USAGE_ATTEMPTS
            );
        }
    }

    /// Collection prefixes by descending observed usage.
    pub fn preferred_collections(&self) -> Vec<String> {
        self.load().preferred_collections()
    }

    /// The most recently used icons, newest first.
    pub fn recent_icons(&self, limit: usize) -> Vec<HistoryEntry> {
        let prefs = self.load();
        prefs.history.into_iter().take(limit).collect()
    }

    /// Reset to the default empty structure, persisted atomically.
    pub fn clear(&self) -> Result<()> {
        self.save(&Preferences::default())
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("preferences.json");
        self.path
            .with_file_name(format!(".{}.{}.tmp", file_name, std::process::id()))
    }
}

use thiserror::Error;

/// Upstream data failures surfaced to callers as structured values rather
/// than bare strings. Persistence failures use [`anyhow::Error`] with
/// context instead; see the individual store modules.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The identifier did not split into a non-empty `prefix:name` pair.
    #[error("invalid icon identifier '{0}': expected 'prefix:name'")]
    InvalidIconId(String),

    /// The (alias-resolved) icon name is absent from the collection document.
    #[error("icon '{name}' not found in collection '{prefix}'")]
    IconNotFound { prefix: String, name: String },

    /// The requested code flavor is not one of the supported targets.
    #[error("unknown code flavor '{0}' (expected react, vue, svelte, solid or raw)")]
    UnknownFlavor(String),
}

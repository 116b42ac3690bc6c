//! # Managed File Module
//!
//! One generated artifact file per project: a flavor-specific header
//! followed by icon entry blocks, each a `// prefix:name` marker comment
//! directly above an exported declaration, blocks separated by exactly one
//! blank line.
//!
//! The file is hand-editable but machine-managed: entries are discovered by
//! re-parsing the marker comments, and [`add_icon_to_file`] appends a block
//! at most once per icon identifier. Reformatting or deleting a marker
//! comment by hand silently defeats duplicate detection for that icon.

mod store;

pub use store::{add_icon_to_file, parse_existing_icons, AddOutcome};

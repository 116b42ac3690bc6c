//! # Icon Module
//!
//! This module owns the icon data model and markup assembly:
//!
//! - [`IconId`] — parsed `prefix:name` identifiers
//! - [`IconSetDocument`] — a collection payload (icons, aliases, defaults)
//! - [`resolve_alias`] — depth-bounded alias chain resolution
//! - [`build_svg`] — final markup assembly with deterministic fill injection
//!
//! ## Document Shape
//!
//! ```json
//! {
//!   "icons": { "home": { "body": "<path d=\"...\"/>", "width": 24 } },
//!   "aliases": { "house": { "parent": "home" } },
//!   "width": 24,
//!   "height": 24
//! }
//! ```

mod id;
mod resolver;

pub use id::{collection_prefix, IconId};
pub use resolver::{
    build_svg, resolve_alias, resolve_alias_with_depth, resolve_icon, IconAlias, IconData,
    IconSetDocument, SvgOptions, MAX_ALIAS_DEPTH,
};

use anyhow::{Context, Result};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::SyncError;
use crate::icon::IconId;

/// Maximum number of alias hops followed before a chain is cut off.
///
/// A chain longer than this (including self-referential or cyclic chains)
/// stops silently at the depth-limited point; callers cannot distinguish
/// truncation from natural termination.
pub const MAX_ALIAS_DEPTH: usize = 10;

/// Shape elements that receive a `fill` attribute when they declare neither
/// `fill` nor `stroke` themselves.
const SHAPE_ELEMENTS: &[&str] = &[
    "path", "circle", "rect", "polygon", "polyline", "line", "ellipse",
];

/// A per-collection icon-set payload: icon bodies, alias mappings, and
/// document-level default dimensions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IconSetDocument {
    pub prefix: Option<String>,
    pub icons: HashMap<String, IconData>,
    pub aliases: HashMap<String, IconAlias>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Raw vector data for a single icon.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IconData {
    pub body: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub left: Option<i32>,
    pub top: Option<i32>,
}

/// An alias entry pointing at its parent icon name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconAlias {
    pub parent: String,
}

/// Options controlling final markup assembly.
#[derive(Debug, Clone, Default)]
pub struct SvgOptions {
    /// Rendered width and height (e.g. `"24"` or `"2em"`). Defaults to `1em`.
    pub size: Option<String>,
    /// Fill color injected into unfilled shape elements. Defaults to
    /// `currentColor`.
    pub color: Option<String>,
}

/// Follow the alias chain for `name` up to [`MAX_ALIAS_DEPTH`] hops and
/// return the last name reached. Never fails; a name with no alias entry is
/// returned unchanged.
pub fn resolve_alias(doc: &IconSetDocument, name: &str) -> String {
    resolve_alias_with_depth(doc, name, MAX_ALIAS_DEPTH)
}

/// Alias resolution with an explicit hop bound. Cyclic chains terminate at
/// the bound without signaling truncation.
pub fn resolve_alias_with_depth(doc: &IconSetDocument, name: &str, max_depth: usize) -> String {
    let mut current = name.to_string();
    for _ in 0..max_depth {
        match doc.aliases.get(&current) {
            Some(alias) => current = alias.parent.clone(),
            None => break,
        }
    }
    current
}

/// Resolve an identifier's alias chain and look up its icon data.
pub fn resolve_icon<'a>(doc: &'a IconSetDocument, id: &IconId) -> Result<&'a IconData, SyncError> {
    let resolved = resolve_alias(doc, &id.name);
    doc.icons.get(&resolved).ok_or_else(|| SyncError::IconNotFound {
        prefix: id.prefix.clone(),
        name: id.name.clone(),
    })
}

/// Assemble final SVG markup for an icon.
///
/// Width and height fall back `icon -> document default -> 24`; the viewBox
/// is `"{left} {top} {width} {height}"` with left/top defaulting to 0. The
/// rendered size is `options.size` when given, otherwise `1em`.
pub fn build_svg(doc: &IconSetDocument, icon: &IconData, options: &SvgOptions) -> Result<String> {
    let width = icon.width.or(doc.width).unwrap_or(24);
    let height = icon.height.or(doc.height).unwrap_or(24);
    let left = icon.left.unwrap_or(0);
    let top = icon.top.unwrap_or(0);
    let size = options.size.as_deref().unwrap_or("1em");
    let color = options.color.as_deref().unwrap_or("currentColor");

    let body = inject_fill(&icon.body, color)?;

    Ok(format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="{left} {top} {width} {height}">{body}</svg>"#
    ))
}

/// Add `fill="<color>"` to every shape-element opening tag that declares
/// neither `fill` nor `stroke`. Insertion only: existing attributes are
/// never removed or reordered.
fn inject_fill(body: &str, color: &str) -> Result<String> {
    let tag_pattern = format!(r"<({})\b([^>]*)>", SHAPE_ELEMENTS.join("|"));
    let tag_re =
        Regex::new(&tag_pattern).context("Failed to compile shape element regex pattern")?;
    // `fill-rule` / `stroke-width` etc. must not count as declarations, so
    // the attribute name has to be followed directly by `=`.
    let declared_re = Regex::new(r#"(?:^|\s)(?:fill|stroke)\s*="#)
        .context("Failed to compile fill/stroke attribute regex pattern")?;

    let result = tag_re.replace_all(body, |caps: &Captures| {
        let element = &caps[1];
        let attrs = &caps[2];
        if declared_re.is_match(attrs) {
            caps[0].to_string()
        } else {
            format!(r#"<{element} fill="{color}"{attrs}>"#)
        }
    });

    Ok(result.into_owned())
}

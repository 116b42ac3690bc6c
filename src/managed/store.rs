use anyhow::{Context, Result};
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::codegen::{self, Flavor};

/// Outcome of an [`add_icon_to_file`] call.
#[derive(Debug, Clone)]
pub struct AddOutcome {
    /// The component name the icon is reachable under in the managed file.
    pub component_name: String,
    /// True when the icon was already present and the file was left as-is.
    pub already_exists: bool,
    /// The previously recorded name when `already_exists` is true.
    pub existing_name: Option<String>,
}

/// Scan a managed file for already-synchronized icons, returning a mapping
/// from icon identifier to component name. A missing or unreadable file
/// yields an empty mapping; malformed or unmatched content is ignored.
pub fn parse_existing_icons(path: &Path) -> HashMap<String, String> {
    let Ok(content) = fs::read_to_string(path) else {
        return HashMap::new();
    };
    parse_icon_entries(&content).unwrap_or_default()
}

fn parse_icon_entries(content: &str) -> Result<HashMap<String, String>> {
    // Identifier line comment, optionally followed by further comment lines,
    // immediately preceding an exported declaration.
    let line_marker_re = Regex::new(
        r"(?m)^//[ \t]*([\w-]+:[\w-]+)[ \t]*$(?:\n//[^\n]*)*\nexport\s+(?:const|function|let|var)\s+([A-Za-z_$][\w$]*)",
    )
    .context("Failed to compile line marker regex pattern")?;

    // Alternate template-comment marker style: {/* prefix:name */}
    let template_marker_re = Regex::new(
        r"(?m)^\{/\*[ \t]*([\w-]+:[\w-]+)[ \t]*\*/\}[ \t]*\nexport\s+(?:const|function|let|var)\s+([A-Za-z_$][\w$]*)",
    )
    .context("Failed to compile template marker regex pattern")?;

    let mut entries = HashMap::new();
    for caps in line_marker_re.captures_iter(content) {
        entries.insert(caps[1].to_string(), caps[2].to_string());
    }
    for caps in template_marker_re.captures_iter(content) {
        entries
            .entry(caps[1].to_string())
            .or_insert_with(|| caps[2].to_string());
    }
    Ok(entries)
}

/// Idempotently merge a generated icon block into the managed file at
/// `path`.
///
/// When `icon_id` is already present the existing component name is
/// returned and the file is not touched; repeated synchronization requests
/// for the same identifier never grow the file. Otherwise a component name
/// is derived (or `custom_name` used), the flavor-specific block generated,
/// and the whole file rewritten with the new block appended after exactly
/// one blank line. A fresh file starts with the flavor's header.
///
/// Persistence failures (directory creation, file write) are surfaced to
/// the caller and never retried.
pub fn add_icon_to_file(
    path: &Path,
    icon_id: &str,
    markup: &str,
    flavor: Flavor,
    custom_name: Option<&str>,
) -> Result<AddOutcome> {
    let existing = parse_existing_icons(path);
    if let Some(name) = existing.get(icon_id) {
        return Ok(AddOutcome {
            component_name: name.clone(),
            already_exists: true,
            existing_name: Some(name.clone()),
        });
    }

    let component_name = custom_name
        .map(str::to_string)
        .unwrap_or_else(|| codegen::component_name(icon_id));
    let block = codegen::generate(flavor, icon_id, &component_name, markup);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create managed file directory: {}", parent.display())
            })?;
        }
    }

    let current = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => codegen::header_for(flavor).to_string(),
    };

    let mut content = current.trim_end().to_string();
    content.push_str("\n\n");
    content.push_str(&block);
    content.push('\n');

    fs::write(path, &content)
        .with_context(|| format!("Failed to write managed icon file: {}", path.display()))?;

    tracing::debug!(
        icon = icon_id,
        component = %component_name,
        file = %path.display(),
        "appended icon entry"
    );

    Ok(AddOutcome {
        component_name,
        already_exists: false,
        existing_name: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MARKUP: &str = "<svg viewBox=\"0 0 24 24\"><path fill=\"currentColor\" d=\"X\"/></svg>";

    #[test]
    fn test_parse_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("icons.jsx");
        assert!(parse_existing_icons(&path).is_empty());
    }

    #[test]
    fn test_add_then_parse_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("icons.jsx");

        let outcome =
            add_icon_to_file(&path, "lucide:arrow-right", MARKUP, Flavor::React, None).unwrap();
        assert_eq!(outcome.component_name, "ArrowRightIcon");
        assert!(!outcome.already_exists);

        let parsed = parse_existing_icons(&path);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed["lucide:arrow-right"], "ArrowRightIcon");
    }

    #[test]
    fn test_add_is_idempotent_byte_for_byte() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("icons.jsx");

        let first = add_icon_to_file(&path, "mdi:home", MARKUP, Flavor::React, None).unwrap();
        let content_after_first = fs::read_to_string(&path).unwrap();

        let second = add_icon_to_file(&path, "mdi:home", MARKUP, Flavor::React, None).unwrap();
        let content_after_second = fs::read_to_string(&path).unwrap();

        assert!(second.already_exists);
        assert_eq!(second.component_name, first.component_name);
        assert_eq!(second.existing_name.as_deref(), Some("HomeIcon"));
        assert_eq!(content_after_first, content_after_second);
    }

    #[test]
    fn test_add_multiple_icons_one_blank_line_apart() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("icons.jsx");

        add_icon_to_file(&path, "mdi:home", MARKUP, Flavor::React, None).unwrap();
        add_icon_to_file(&path, "mdi:gear", MARKUP, Flavor::React, None).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains(");\n\n// mdi:gear\n"));
        assert!(!content.contains("\n\n\n"));

        let parsed = parse_existing_icons(&path);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed["mdi:gear"], "GearIcon");
    }

    #[test]
    fn test_add_custom_name() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("icons.jsx");

        let outcome =
            add_icon_to_file(&path, "mdi:home", MARKUP, Flavor::React, Some("Casa")).unwrap();
        assert_eq!(outcome.component_name, "Casa");
        assert_eq!(parse_existing_icons(&path)["mdi:home"], "Casa");
    }

    #[test]
    fn test_add_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("src").join("generated").join("icons.jsx");

        add_icon_to_file(&path, "mdi:home", MARKUP, Flavor::React, None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_fresh_file_gets_flavor_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("icons.jsx");

        add_icon_to_file(&path, "mdi:home", MARKUP, Flavor::React, None).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("// Icon components synchronized by glyphsync."));
        assert!(content.contains("import * as React from 'react';"));
    }

    #[test]
    fn test_parse_marker_with_extra_comment_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("icons.jsx");
        let content = "// lucide:home\n// added manually for the nav bar\nexport const HomeIcon = (props) => (\n  <svg/>\n);\n";
        fs::write(&path, content).unwrap();

        let parsed = parse_existing_icons(&path);
        assert_eq!(parsed["lucide:home"], "HomeIcon");
    }

    #[test]
    fn test_parse_template_comment_marker() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("icons.jsx");
        let content = "{/* lucide:star */}\nexport const StarIcon = (props) => (\n  <svg/>\n);\n";
        fs::write(&path, content).unwrap();

        let parsed = parse_existing_icons(&path);
        assert_eq!(parsed["lucide:star"], "StarIcon");
    }

    #[test]
    fn test_parse_ignores_malformed_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("icons.jsx");
        let content = "\
// just a prose comment, not an identifier
export const Unmarked = 1;

// lucide:home

export const BlankLineBreaksAdjacency = 2;

const notExported = 3;
";
        fs::write(&path, content).unwrap();

        // The blank line between the marker and the export breaks the
        // "immediately preceding" requirement, so nothing matches.
        assert!(parse_existing_icons(&path).is_empty());
    }

    #[test]
    fn test_parse_all_flavor_outputs() {
        let temp_dir = TempDir::new().unwrap();
        for (flavor, ext) in [
            (Flavor::React, "jsx"),
            (Flavor::Vue, "js"),
            (Flavor::Svelte, "svelte.js"),
            (Flavor::Solid, "solid.jsx"),
            (Flavor::Raw, "raw.js"),
        ] {
            let path = temp_dir.path().join(format!("icons.{ext}"));
            add_icon_to_file(&path, "lucide:arrow-right", MARKUP, flavor, None).unwrap();
            let parsed = parse_existing_icons(&path);
            assert_eq!(
                parsed.get("lucide:arrow-right").map(String::as_str),
                Some("ArrowRightIcon"),
                "flavor {flavor} block was not re-discoverable"
            );
        }
    }

    #[test]
    fn test_write_error_is_surfaced() {
        // The managed path is a directory, so the write must fail loudly.
        let temp_dir = TempDir::new().unwrap();
        let result = add_icon_to_file(temp_dir.path(), "mdi:home", MARKUP, Flavor::React, None);
        assert!(result.is_err());
    }
}

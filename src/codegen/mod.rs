//! # Code Generation Module
//!
//! This module turns assembled SVG markup into ready-to-insert source
//! snippets for a target code flavor.
//!
//! ## Supported Flavors
//!
//! | Flavor | Output | Generator |
//! |--------|--------|-----------|
//! | React | JSX arrow component | [`react::generate`] |
//! | Vue | template-string component object | [`vue::generate`] |
//! | Svelte | markup string + class-name helper | [`svelte::generate`] |
//! | Solid | JSX arrow component | [`solid::generate`] |
//! | Raw | quoted markup string export | [`raw::generate`] |
//!
//! Every snippet is preceded by a `// prefix:name` comment line recording
//! the source identifier verbatim; the managed-file store relies on that
//! marker for duplicate detection.

pub mod markup;
pub mod raw;
pub mod react;
pub mod solid;
pub mod svelte;
pub mod vue;

use std::fmt;
use std::str::FromStr;

use crate::error::SyncError;

/// The code flavor a snippet is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    React,
    Vue,
    Svelte,
    Solid,
    Raw,
}

impl Flavor {
    pub fn as_str(self) -> &'static str {
        match self {
            Flavor::React => "react",
            Flavor::Vue => "vue",
            Flavor::Svelte => "svelte",
            Flavor::Solid => "solid",
            Flavor::Raw => "raw",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Flavor {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "react" => Ok(Flavor::React),
            "vue" => Ok(Flavor::Vue),
            "svelte" => Ok(Flavor::Svelte),
            "solid" => Ok(Flavor::Solid),
            "raw" => Ok(Flavor::Raw),
            other => Err(SyncError::UnknownFlavor(other.to_string())),
        }
    }
}

/// Generate a named, exported snippet for `markup` in the given flavor. Any
/// XML declaration is stripped before flavor-specific processing.
pub fn generate(flavor: Flavor, icon_id: &str, component_name: &str, markup: &str) -> String {
    let markup = markup::strip_xml_declaration(markup);
    match flavor {
        Flavor::React => react::generate(icon_id, component_name, &markup),
        Flavor::Vue => vue::generate(icon_id, component_name, &markup),
        Flavor::Svelte => svelte::generate(icon_id, component_name, &markup),
        Flavor::Solid => solid::generate(icon_id, component_name, &markup),
        Flavor::Raw => raw::generate(icon_id, component_name, &markup),
    }
}

/// The flavor-specific banner/import block written at the top of a freshly
/// created managed file.
pub fn header_for(flavor: Flavor) -> &'static str {
    match flavor {
        Flavor::React => react::HEADER,
        Flavor::Vue => vue::HEADER,
        Flavor::Svelte => svelte::HEADER,
        Flavor::Solid => solid::HEADER,
        Flavor::Raw => raw::HEADER,
    }
}

/// Derive a component name from an icon identifier.
///
/// The name part is split on `-`/`_`, each segment capitalized, and the
/// segments concatenated with an `Icon` suffix:
/// `lucide:arrow-right -> ArrowRightIcon`. An identifier without a name part
/// falls back to the literal `Icon`.
pub fn component_name(icon_id: &str) -> String {
    let Some((_, name)) = icon_id.split_once(':') else {
        return "Icon".to_string();
    };

    let mut result = String::new();
    for segment in name.split(['-', '_']) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(&chars.as_str().to_lowercase());
        }
    }
    result.push_str("Icon");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_name_hyphenated() {
        assert_eq!(component_name("lucide:arrow-right"), "ArrowRightIcon");
    }

    #[test]
    fn test_component_name_single_letter() {
        assert_eq!(component_name("mdi:a"), "AIcon");
    }

    #[test]
    fn test_component_name_no_name_part() {
        assert_eq!(component_name("lucide"), "Icon");
        assert_eq!(component_name(""), "Icon");
    }

    #[test]
    fn test_component_name_underscores_and_case() {
        assert_eq!(component_name("mdi:HOME_filled"), "HomeFilledIcon");
        assert_eq!(component_name("ph:arrow_up-right"), "ArrowUpRightIcon");
    }

    #[test]
    fn test_component_name_empty_name() {
        assert_eq!(component_name("lucide:"), "Icon");
    }

    #[test]
    fn test_flavor_from_str() {
        assert_eq!("react".parse::<Flavor>().unwrap(), Flavor::React);
        assert_eq!("Svelte".parse::<Flavor>().unwrap(), Flavor::Svelte);
        assert!(matches!(
            "angular".parse::<Flavor>(),
            Err(SyncError::UnknownFlavor(_))
        ));
    }

    #[test]
    fn test_flavor_display_round_trip() {
        for flavor in [
            Flavor::React,
            Flavor::Vue,
            Flavor::Svelte,
            Flavor::Solid,
            Flavor::Raw,
        ] {
            assert_eq!(flavor.to_string().parse::<Flavor>().unwrap(), flavor);
        }
    }

    #[test]
    fn test_generate_strips_xml_declaration_for_every_flavor() {
        let markup = "<?xml version=\"1.0\"?>\n<svg viewBox=\"0 0 24 24\"><path d=\"X\"/></svg>";
        for flavor in [
            Flavor::React,
            Flavor::Vue,
            Flavor::Svelte,
            Flavor::Solid,
            Flavor::Raw,
        ] {
            let snippet = generate(flavor, "mdi:home", "HomeIcon", markup);
            assert!(!snippet.contains("<?xml"), "{flavor} kept the declaration");
            assert!(snippet.starts_with("// mdi:home\n"));
        }
    }

    #[test]
    fn test_headers_mark_file_as_machine_managed() {
        for flavor in [
            Flavor::React,
            Flavor::Vue,
            Flavor::Svelte,
            Flavor::Solid,
            Flavor::Raw,
        ] {
            let header = header_for(flavor);
            assert!(header.contains("glyphsync"));
            assert!(header.starts_with("//"));
        }
    }
}

use crate::codegen::markup::escape_double_quoted;

/// Header written at the top of a freshly created raw-markup managed file.
pub const HEADER: &str = "\
// Icon markup strings synchronized by glyphsync. Entries are appended and
// looked up automatically; keep each `// prefix:name` marker directly above
// its export or the icon will be re-added on the next sync.
";

/// Export the markup itself as a plain quoted string constant. No spread
/// point applies to a bare string.
pub fn generate(icon_id: &str, component_name: &str, markup: &str) -> String {
    let literal = escape_double_quoted(markup);

    format!("// {icon_id}\nexport const {component_name} = \"{literal}\";")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_quoted_string_export() {
        let snippet = generate("bi:gear", "GearIcon", r#"<svg><path d="X"/></svg>"#);
        assert_eq!(
            snippet,
            "// bi:gear\nexport const GearIcon = \"<svg><path d=\\\"X\\\"/></svg>\";"
        );
    }

    #[test]
    fn test_generate_escapes_backslashes_first() {
        let snippet = generate("bi:odd", "OddIcon", r#"<svg data-x="\"></svg>"#);
        assert!(snippet.contains(r#"data-x=\"\\\""#));
    }
}

use crate::codegen::markup::{escape_backticks, inject_root_attr};

/// Header written at the top of a freshly created Vue managed file.
pub const HEADER: &str = "\
// Icon components synchronized by glyphsync. Entries are appended and
// looked up automatically; keep each `// prefix:name` marker directly above
// its export or the icon will be re-added on the next sync.
";

/// Generate a Vue component object whose template embeds the markup. The
/// root element carries `v-bind=\"$attrs\"` so callers can override
/// attributes; literal backticks are escaped before template-literal
/// embedding.
pub fn generate(icon_id: &str, component_name: &str, markup: &str) -> String {
    let template = inject_root_attr(&escape_backticks(markup), r#"v-bind="$attrs""#);

    format!(
        "// {icon_id}\nexport const {component_name} = {{\n  template: `{template}`,\n}};"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_template_component() {
        let snippet = generate("mdi:home", "HomeIcon", "<svg viewBox=\"0 0 24 24\"></svg>");
        assert!(snippet.starts_with("// mdi:home\nexport const HomeIcon = {"));
        assert!(snippet.contains("template: `<svg viewBox=\"0 0 24 24\" v-bind=\"$attrs\">"));
        assert!(snippet.ends_with("};"));
    }

    #[test]
    fn test_generate_escapes_backticks() {
        let snippet = generate("mdi:odd", "OddIcon", "<svg data-x=\"`tick`\"></svg>");
        assert!(snippet.contains("\\`tick\\`"));
    }
}

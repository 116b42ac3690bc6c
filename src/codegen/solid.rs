use crate::codegen::markup::inject_root_attr;

/// Header written at the top of a freshly created Solid managed file.
pub const HEADER: &str = "\
// Icon components synchronized by glyphsync. Entries are appended and
// looked up automatically; keep each `// prefix:name` marker directly above
// its export or the icon will be re-added on the next sync.
";

/// Generate a Solid arrow-function component. Unlike React, Solid keeps
/// standard SVG attribute names, so no attribute rewriting happens here.
pub fn generate(icon_id: &str, component_name: &str, markup: &str) -> String {
    let jsx = inject_root_attr(markup, "{...props}");

    format!("// {icon_id}\nexport const {component_name} = (props) => (\n  {jsx}\n);")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_keeps_svg_attribute_names() {
        let markup = r#"<svg class="icon"><path fill-rule="evenodd" d="X"/></svg>"#;
        let snippet = generate("tabler:bolt", "BoltIcon", markup);
        assert!(snippet.contains("class=\"icon\""));
        assert!(snippet.contains("fill-rule=\"evenodd\""));
        assert!(!snippet.contains("className"));
    }

    #[test]
    fn test_generate_spreads_props_on_root() {
        let snippet = generate("tabler:bolt", "BoltIcon", "<svg viewBox=\"0 0 24 24\"></svg>");
        assert!(snippet.contains("<svg viewBox=\"0 0 24 24\" {...props}>"));
        assert!(snippet.starts_with("// tabler:bolt\nexport const BoltIcon = (props) => ("));
    }
}

use crate::codegen::markup::{escape_backticks, inject_root_attr};

/// Header written at the top of a freshly created Svelte managed file.
pub const HEADER: &str = "\
// Icon markup strings synchronized by glyphsync. Entries are appended and
// looked up automatically; keep each `// prefix:name` marker directly above
// its export or the icon will be re-added on the next sync.
";

/// Generate a markup-string export plus a helper export that substitutes a
/// caller-supplied class name into the root element. Literal backticks are
/// escaped before template-literal embedding.
pub fn generate(icon_id: &str, component_name: &str, markup: &str) -> String {
    let escaped = escape_backticks(markup);
    let with_class = inject_root_attr(&escaped, "class=\"${className}\"");

    format!(
        "// {icon_id}\nexport const {component_name} = `{escaped}`;\n\nexport const {component_name}WithClass = (className = '') =>\n  `{with_class}`;"
    )
}

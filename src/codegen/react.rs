use crate::codegen::markup::inject_root_attr;

/// Header written at the top of a freshly created React managed file.
pub const HEADER: &str = "\
// Icon components synchronized by glyphsync. Entries are appended and
// looked up automatically; keep each `// prefix:name` marker directly above
// its export or the icon will be re-added on the next sync.
import * as React from 'react';
";

/// HTML-style attribute names rewritten to their JSX camelCase equivalents.
const ATTRIBUTE_RENAMES: &[(&str, &str)] = &[
    ("class=", "className="),
    ("clip-path=", "clipPath="),
    ("fill-rule=", "fillRule="),
    ("stroke-width=", "strokeWidth="),
    ("stroke-linecap=", "strokeLinecap="),
    ("stroke-linejoin=", "strokeLinejoin="),
];

/// Generate a React arrow-function component wrapping the markup, with a
/// `{...props}` spread on the root element so callers can override
/// attributes.
pub fn generate(icon_id: &str, component_name: &str, markup: &str) -> String {
    let mut jsx = markup.to_string();
    for (html_name, jsx_name) in ATTRIBUTE_RENAMES {
        jsx = jsx.replace(html_name, jsx_name);
    }
    let jsx = inject_root_attr(&jsx, "{...props}");

    format!("// {icon_id}\nexport const {component_name} = (props) => (\n  {jsx}\n);")
}

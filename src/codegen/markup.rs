//! Shared markup manipulation helpers used by the flavor generators.

/// Remove a leading XML declaration (`<?xml ... ?>`) if present.
pub fn strip_xml_declaration(markup: &str) -> String {
    let trimmed = markup.trim_start();
    if trimmed.starts_with("<?xml") {
        if let Some(end) = trimmed.find("?>") {
            return trimmed[end + 2..].trim_start().to_string();
        }
    }
    markup.to_string()
}

/// Insert an attribute fragment into the first opening tag of the markup,
/// immediately before its closing bracket. Existing attributes are left
/// untouched; self-closing tags stay self-closing. Markup without a tag is
/// returned unchanged.
pub fn inject_root_attr(markup: &str, fragment: &str) -> String {
    let Some(end) = markup.find('>') else {
        return markup.to_string();
    };
    let insert_at = if markup[..end].ends_with('/') {
        end - 1
    } else {
        end
    };

    let mut out = String::with_capacity(markup.len() + fragment.len() + 1);
    out.push_str(&markup[..insert_at]);
    out.push(' ');
    out.push_str(fragment);
    out.push_str(&markup[insert_at..]);
    out
}

/// Escape literal backticks so the markup can be embedded in a JS template
/// literal.
pub fn escape_backticks(markup: &str) -> String {
    markup.replace('`', "\\`")
}

/// Escape backslashes and double quotes so the markup can be embedded in a
/// plain JS string literal.
pub fn escape_double_quoted(markup: &str) -> String {
    markup.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_xml_declaration_present() {
        let markup = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg><path d=\"X\"/></svg>";
        assert_eq!(strip_xml_declaration(markup), "<svg><path d=\"X\"/></svg>");
    }

    #[test]
    fn test_strip_xml_declaration_absent() {
        let markup = "<svg><path d=\"X\"/></svg>";
        assert_eq!(strip_xml_declaration(markup), markup);
    }

    #[test]
    fn test_strip_xml_declaration_unterminated_left_alone() {
        let markup = "<?xml version=\"1.0\"";
        assert_eq!(strip_xml_declaration(markup), markup);
    }

    #[test]
    fn test_inject_root_attr_into_open_tag() {
        let out = inject_root_attr("<svg viewBox=\"0 0 24 24\"><path d=\"X\"/></svg>", "{...props}");
        assert_eq!(out, "<svg viewBox=\"0 0 24 24\" {...props}><path d=\"X\"/></svg>");
    }

    #[test]
    fn test_inject_root_attr_self_closing() {
        let out = inject_root_attr("<svg viewBox=\"0 0 24 24\"/>", "class=\"x\"");
        assert_eq!(out, "<svg viewBox=\"0 0 24 24\" class=\"x\"/>");
    }

    #[test]
    fn test_inject_root_attr_no_tag() {
        assert_eq!(inject_root_attr("plain text", "x"), "plain text");
    }

    #[test]
    fn test_escape_backticks() {
        assert_eq!(escape_backticks("a`b`c"), "a\\`b\\`c");
        assert_eq!(escape_backticks("no ticks"), "no ticks");
    }

    #[test]
    fn test_escape_double_quoted() {
        assert_eq!(escape_double_quoted(r#"<path d="X"/>"#), r#"<path d=\"X\"/>"#);
        assert_eq!(escape_double_quoted(r"back\slash"), r"back\\slash");
    }
}

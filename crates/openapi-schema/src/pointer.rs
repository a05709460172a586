//! RFC 6901 JSON Pointer helpers used by `$ref` paths and coding paths.

/// Turns one `$ref` segment back into a component name: `Pet~1Owner` names
/// the schema `Pet/Owner`.
///
/// # Example
///
/// ```
/// use openapi_schema::pointer::unescape_component;
///
/// assert_eq!(unescape_component("Pet~1Owner"), "Pet/Owner");
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// ```
pub fn unescape_component(segment: &str) -> String {
    if segment.contains('~') {
        // `~1` first, so `~01` stays `~1`
        segment.replace("~1", "/").replace("~0", "~")
    } else {
        segment.to_string()
    }
}

/// Writes a component name or object key as one `$ref` segment, so a `/`
/// inside the name does not split it.
///
/// # Example
///
/// ```
/// use openapi_schema::pointer::escape_component;
///
/// assert_eq!(escape_component("Pet/Owner"), "Pet~1Owner");
/// assert_eq!(escape_component("Pet"), "Pet");
/// ```
pub fn escape_component(name: &str) -> String {
    if name.contains(['/', '~']) {
        name.replace('~', "~0").replace('/', "~1")
    } else {
        name.to_string()
    }
}

/// Parses a pointer such as `/components/schemas/Pet` into unescaped
/// components.
///
/// Returns `None` when a non-empty pointer does not start with `/`.
pub fn parse_pointer(pointer: &str) -> Option<Vec<String>> {
    if pointer.is_empty() {
        return Some(Vec::new());
    }
    let rest = pointer.strip_prefix('/')?;
    Some(rest.split('/').map(unescape_component).collect())
}

/// Formats components into a pointer string. The root is the empty string.
pub fn format_pointer<S: AsRef<str>>(path: &[S]) -> String {
    let mut out = String::new();
    for component in path {
        out.push('/');
        out.push_str(&escape_component(component.as_ref()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_root_and_nested() {
        assert_eq!(parse_pointer(""), Some(vec![]));
        assert_eq!(parse_pointer("/"), Some(vec![String::new()]));
        assert_eq!(
            parse_pointer("/components/schemas/a~1b"),
            Some(vec![
                "components".to_string(),
                "schemas".to_string(),
                "a/b".to_string()
            ])
        );
    }

    #[test]
    fn parse_rejects_relative_pointer() {
        assert_eq!(parse_pointer("components/schemas"), None);
    }

    #[test]
    fn format_escapes_each_component() {
        assert_eq!(format_pointer::<&str>(&[]), "");
        assert_eq!(format_pointer(&["properties", "a/b", "c~d"]), "/properties/a~1b/c~0d");
    }

    #[test]
    fn escape_order_is_reversible() {
        for raw in ["~1", "/~", "~0/", "plain"] {
            assert_eq!(unescape_component(&escape_component(raw)), raw);
        }
    }
}

//! Fully-qualified name helpers
//!
//! The provider reports every name with a trailing dot and encodes a literal
//! `*` label as the octal escape `\052`. User input is normalized to the same
//! form before it is compared against listed records.

/// Octal escape the provider uses for a literal `*` in record names.
pub const WILDCARD_ESCAPE: &str = "\\052";

/// Append a trailing dot if `name` doesn't already end with one.
///
/// 如: "example.com" -> "example.com."
/// 如: "example.com." -> "example.com."
pub fn ensure_trailing_dot(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    }
}

/// Replace every `*` with the provider's literal-wildcard encoding.
///
/// 如: "*.dev" -> "\052.dev"
pub fn escape_wildcards(name: &str) -> String {
    name.replace('*', WILDCARD_ESCAPE)
}

/// Join a relative name onto a zone, producing a fully-qualified name.
///
/// 如: "www" + "example.com" -> "www.example.com."
/// 如: "www.example.com." + "example.com" -> "www.example.com." (already qualified)
pub fn qualify(relative_name: &str, zone_name: &str) -> String {
    let zone = ensure_trailing_dot(zone_name);
    let name = relative_name.trim();

    if name.is_empty() || name == "@" {
        zone
    } else if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.{zone}")
    }
}

//! Handler name normalization
//!
//! Canonical identifiers are camel-case with a lower-case first
//! character. Normalization is idempotent, so re-running it on a
//! forwarded (already canonical) name is harmless.

/// Capitalize each word-boundary segment
///
/// Segments are split on `_`, `-` and spaces. Characters inside a
/// segment keep their case, which is what makes the round trip
/// idempotent: `camelize("notFoundException")` is `"NotFoundException"`.
pub fn camelize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for segment in input.split(['_', '-', ' ']) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Lower-case only the first character
pub fn lcfirst(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Produce the canonical handler identifier for a requested name
pub fn normalize_handler_name(input: &str) -> String {
    lcfirst(&camelize(input))
}

//! Tag identifier to accessor name conversion.
//!
//! Tags are snake_case identifiers that may carry a `disable_` prefix and
//! uppercase acronym segments (`disable_gen_UI`). Accessor names are the
//! verb prefix followed by the PascalCase form of the tag (`hasGenUI`).
//!
//! This module only depends on `std`: the build script compiles it directly
//! to generate typed accessors for the default catalog.

/// Verb prefixed to generated accessor names.
pub const DEFAULT_VERB: &str = "has";

/// Prefix stripped from catalog tags before naming.
pub const DISABLE_PREFIX: &str = "disable_";

/// Convert a tag identifier to PascalCase.
///
/// If `strip_prefix` is given and the identifier starts with it exactly, that
/// prefix is removed first. Empty segments (from leading, trailing or doubled
/// underscores) are dropped. A segment longer than one character that is
/// already all uppercase is kept as is; any other segment gets its first
/// character uppercased and the rest left untouched.
///
/// ```
/// use brain_features::naming::to_pascal;
///
/// assert_eq!(to_pascal("gen_UI", None), "GenUI");
/// assert_eq!(to_pascal("disable_no_meeting_tab", Some("disable_")), "NoMeetingTab");
/// assert_eq!(to_pascal("__", None), "");
/// ```
pub fn to_pascal(identifier: &str, strip_prefix: Option<&str>) -> String {
    let rest = match strip_prefix {
        Some(prefix) => identifier.strip_prefix(prefix).unwrap_or(identifier),
        None => identifier,
    };

    let mut out = String::with_capacity(rest.len());
    for part in rest.split('_').filter(|p| !p.is_empty()) {
        push_segment(&mut out, part);
    }
    out
}

/// Build an accessor name: `verb` followed by [`to_pascal`] of the identifier.
///
/// Never lowercases anything, so an empty `verb` yields the PascalCase form.
pub fn to_accessor_name(identifier: &str, verb: &str, strip_prefix: Option<&str>) -> String {
    let mut name = String::from(verb);
    name.push_str(&to_pascal(identifier, strip_prefix));
    name
}

/// Whether `name` is usable as an ASCII Rust identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    name != "_" && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn push_segment(out: &mut String, part: &str) {
    if part.chars().nth(1).is_some() && is_all_uppercase(part) {
        out.push_str(part);
        return;
    }

    let mut chars = part.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}

// Same test as comparing a string against its uppercased copy: characters
// without case (digits, punctuation) do not break an acronym.
fn is_all_uppercase(part: &str) -> bool {
    part.chars().all(|c| !c.is_lowercase())
}

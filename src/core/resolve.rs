//! Field path resolution
//!
//! A field path either names a direct attribute (`"title"`) or a one-hop
//! related lookup joined by a double-underscore separator
//! (`"client__name"`). This module decides which, with pure string logic
//! and no I/O.

use regex::Regex;
use std::sync::OnceLock;

// Identifier: a word character followed by alphanumerics, where an
// underscore must be followed by an alphanumeric. This is what keeps a
// single identifier from swallowing the `__` separator.
static RELATED_LOOKUP: OnceLock<Regex> = OnceLock::new();
static TAIL_FIELD: OnceLock<Regex> = OnceLock::new();

fn related_lookup_re() -> &'static Regex {
    RELATED_LOOKUP.get_or_init(|| {
        Regex::new(r"^(\w(?:[0-9A-Za-z]|_[0-9A-Za-z])*)__\w.*").expect("valid pattern")
    })
}

fn tail_field_re() -> &'static Regex {
    TAIL_FIELD.get_or_init(|| {
        Regex::new(r".*__(\w(?:[0-9A-Za-z]|_[0-9A-Za-z])*)$").expect("valid pattern")
    })
}

/// Split a field path into its `(immediate, terminal)` lookup parts
///
/// Returns `None` for a direct field (no `__` separator, or a string that
/// doesn't parse as a lookup at all). For a related lookup, returns the
/// first identifier and the *last* identifier.
///
/// A path with more than two segments, such as `client__goal__name`,
/// yields `("client", "name")`: the middle segments are silently dropped.
/// Callers depend on this exact tuple shape, so multi-hop traversal is
/// deliberately not attempted here.
pub fn related_lookup_parts(field_name: &str) -> Option<(&str, &str)> {
    let immediate = related_lookup_re()
        .captures(field_name)?
        .get(1)
        .map(|m| m.as_str())?;

    let terminal = tail_field_re()
        .captures(field_name)?
        .get(1)
        .map(|m| m.as_str())?;

    Some((immediate, terminal))
}

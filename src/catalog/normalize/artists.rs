//! Artist-credit resolution.
//!
//! Builds a single display string from an ordered list of credits,
//! honoring per-credit name variations (anv), join separators, and the
//! catalog's " (N)" duplicate-name disambiguation suffixes.

use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::discogs::dto;

/// Trailing duplicate-name suffix: whitespace followed by a parenthesized
/// number at the end of the string, e.g. "Dr. Rhythm (2)".
static DISAMBIGUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s\(\d+\)$").expect("disambiguation pattern is valid"));

/// Resolve an ordered list of artist credits into one display string.
///
/// Per credit: the anv is preferred over the main name, then the
/// disambiguation suffix is stripped from the whole string accumulated so
/// far - not just from this credit. A comma join attaches as ", "; any
/// other join is wrapped in single spaces.
///
/// The final string is only cleaned of a trailing comma. A non-comma join
/// on the last credit leaves its trailing space in place; downstream
/// string matches depend on the exact output, so it is not trimmed.
pub fn resolve_credits(credits: &[dto::ArtistCredit]) -> String {
    let mut resolved = String::new();

    for credit in credits {
        let name = if credit.anv.is_empty() {
            &credit.name
        } else {
            &credit.anv
        };
        resolved.push_str(name);
        resolved = strip_disambiguation(&resolved);

        if !credit.join.is_empty() {
            if credit.join == "," {
                resolved.push_str(", ");
            } else {
                resolved.push(' ');
                resolved.push_str(&credit.join);
                resolved.push(' ');
            }
        }
    }

    let trimmed = resolved.trim();
    match trimmed.strip_suffix(',') {
        Some(stripped) => stripped.to_string(),
        None => resolved,
    }
}

/// Strip one trailing " (N)" suffix, if present.
fn strip_disambiguation(name: &str) -> String {
    DISAMBIGUATION.replace(name, "").into_owned()
}

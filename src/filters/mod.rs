pub mod candidate;
pub mod range;
pub mod supplier;

use std::cmp::Ordering;

/// Case-insensitive name comparator. Locale-aware collation is deliberately
/// out of scope; a lowercase fold keeps "alice" before "Bob" on every machine.
pub(crate) fn ci_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

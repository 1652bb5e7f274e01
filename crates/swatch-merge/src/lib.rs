//! Conflict-aware merging of utility CSS class strings.
//!
//! Component libraries compose class strings from several sources: static
//! base classes, per-variant fragments and a caller override. When two of
//! those sources set the same CSS property (`p-2` and `p-4`), the later one
//! should win and the earlier one should disappear, so the element does not
//! depend on stylesheet order.
//!
//! - [`ClassMerger`]: the merger, extensible with custom groups
//! - [`merge`]: merge with the built-in Tailwind-style groups
//! - [`dedupe`]: collapse exact duplicates only
//! - [`join`]: concatenate fragments into one normalized string
//! - [`parse_class`]: split a token into modifiers, flags and base utility
//!
//! # Example
//!
//! ```rust
//! use swatch_merge::{join, merge};
//!
//! let classes = join(["inline-flex h-9 px-4", "h-8 px-3", "px-6"]);
//! assert_eq!(merge(&classes), "inline-flex h-8 px-6");
//! ```

mod groups;
mod merger;
mod parse;

use once_cell::sync::Lazy;
use std::collections::HashSet;

pub use merger::ClassMerger;
pub use parse::{parse_class, ParsedClass};

static DEFAULT_MERGER: Lazy<ClassMerger> = Lazy::new(ClassMerger::new);

/// Merges a class string using the built-in groups.
pub fn merge(classes: &str) -> String {
    DEFAULT_MERGER.merge(classes)
}

/// Collapses exact duplicate tokens, keeping the first occurrence.
///
/// ```rust
/// assert_eq!(swatch_merge::dedupe("a b a  c b"), "a b c");
/// ```
pub fn dedupe(classes: &str) -> String {
    let mut seen = HashSet::new();
    classes
        .split_whitespace()
        .filter(|token| seen.insert(*token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Joins class fragments with single spaces, skipping blank fragments.
pub fn join<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for part in parts {
        for token in part.as_ref().split_whitespace() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(token);
        }
    }
    out
}

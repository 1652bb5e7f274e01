//! Conflict-aware class merging.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

use crate::groups::{builtin_conflicts, builtin_group};
use crate::parse::parse_class;

/// Merges class strings so that later utilities override earlier ones.
///
/// Utilities are grouped by the CSS property they set. When two tokens with
/// the same modifiers fall into the same group, only the later one survives.
/// Tokens the merger cannot classify are kept, with exact duplicates
/// collapsed.
///
/// Custom rules are consulted before the built-in Tailwind table, so a
/// design system can teach the merger about its own utilities.
///
/// # Example
///
/// ```rust
/// use swatch_merge::ClassMerger;
///
/// let merger = ClassMerger::new()
///     .with_prefix("elevation", "elevation")
///     .with_exact("card-flat", "elevation");
///
/// assert_eq!(
///     merger.merge("px-2 py-1 bg-muted p-3 bg-primary"),
///     "p-3 bg-primary"
/// );
/// assert_eq!(merger.merge("elevation-2 card-flat"), "card-flat");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClassMerger {
    exact: HashMap<String, String>,
    prefixes: Vec<(String, String)>,
    conflicts: HashMap<String, Vec<String>>,
}

impl ClassMerger {
    /// Creates a merger that only knows the built-in groups.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns an exact utility name to a group.
    pub fn with_exact(mut self, class: impl Into<String>, group: impl Into<String>) -> Self {
        self.exact.insert(class.into(), group.into());
        self
    }

    /// Assigns every `<prefix>-<value>` utility to a group.
    ///
    /// Custom prefixes are tried longest first, before the built-in table.
    pub fn with_prefix(mut self, prefix: impl Into<String>, group: impl Into<String>) -> Self {
        self.prefixes.push((prefix.into(), group.into()));
        self.prefixes.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        self
    }

    /// Declares that a utility in `group` also overrides the given groups.
    pub fn with_conflict<I, S>(mut self, group: impl Into<String>, overridden: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.conflicts
            .entry(group.into())
            .or_default()
            .extend(overridden.into_iter().map(Into::into));
        self
    }

    /// Returns the conflict group of a base utility, if it has one.
    pub fn group_of<'a>(&'a self, base: &'a str) -> Option<Cow<'a, str>> {
        if let Some(group) = self.exact.get(base) {
            return Some(Cow::Borrowed(group.as_str()));
        }
        for (prefix, group) in &self.prefixes {
            let matches = base
                .strip_prefix(prefix.as_str())
                .and_then(|rest| rest.strip_prefix('-'))
                .is_some_and(|value| !value.is_empty());
            if matches {
                return Some(Cow::Borrowed(group.as_str()));
            }
        }
        builtin_group(base)
    }

    fn conflicts_of<'a>(&'a self, group: &str) -> impl Iterator<Item = &'a str> {
        let custom = self
            .conflicts
            .get(group)
            .into_iter()
            .flatten()
            .map(String::as_str);
        custom.chain(builtin_conflicts(group).iter().copied())
    }

    /// Merges a whitespace-separated class string.
    ///
    /// Tokens are walked from last to first; a token is dropped when a later
    /// token already claimed its conflict key. Survivors keep their original
    /// relative order.
    pub fn merge(&self, classes: &str) -> String {
        self.merge_over(classes, "")
    }

    /// Merges `earlier` under `last`, keeping every token of `last`.
    ///
    /// Tokens of `last` only lose exact duplicates among themselves. They
    /// claim their conflict keys first, so conflicting tokens of `earlier`
    /// are dropped; `earlier` is otherwise merged as by [`merge`](Self::merge).
    ///
    /// ```rust
    /// use swatch_merge::ClassMerger;
    ///
    /// let merger = ClassMerger::new();
    /// assert_eq!(merger.merge_over("rounded p-2", "px-4 p-3"), "rounded px-4 p-3");
    /// ```
    pub fn merge_over(&self, earlier: &str, last: &str) -> String {
        let mut claimed: HashSet<String> = HashSet::new();

        let mut tail: Vec<&str> = Vec::new();
        for token in last.split_whitespace() {
            if tail.contains(&token) {
                continue;
            }
            self.claim(token, &mut claimed);
            tail.push(token);
        }

        let mut kept: Vec<&str> = earlier
            .split_whitespace()
            .rev()
            .filter(|token| self.claim(token, &mut claimed))
            .collect();
        kept.reverse();
        kept.extend(tail);
        kept.join(" ")
    }

    /// Claims the conflict key of `token`, returning false when a later
    /// token already holds it.
    fn claim(&self, token: &str, claimed: &mut HashSet<String>) -> bool {
        let parsed = parse_class(token);
        let mut scope = parsed.modifier_key();
        if parsed.important {
            scope.push('!');
        }

        match self.group_of(parsed.base) {
            Some(group) => {
                if !claimed.insert(format!("{scope}|{group}")) {
                    return false;
                }
                for other in self.conflicts_of(&group) {
                    claimed.insert(format!("{scope}|{other}"));
                }
                true
            }
            None => {
                let sign = if parsed.negative { "-" } else { "" };
                claimed.insert(format!("{scope}|={sign}{}", parsed.base))
            }
        }
    }
}

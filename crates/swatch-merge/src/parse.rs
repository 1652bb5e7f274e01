//! Splitting class tokens into modifiers, flags and the base utility.

/// A class token broken into the parts that matter for conflict detection.
///
/// ```rust
/// use swatch_merge::parse_class;
///
/// let parsed = parse_class("md:hover:!-mt-2");
/// assert_eq!(parsed.modifiers, vec!["md", "hover"]);
/// assert!(parsed.important);
/// assert!(parsed.negative);
/// assert_eq!(parsed.base, "mt-2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedClass<'a> {
    /// Variant prefixes in source order (`hover`, `md`, `data-[state=open]`).
    pub modifiers: Vec<&'a str>,
    /// `!` prefix or suffix on the utility.
    pub important: bool,
    /// Leading `-` on the utility (`-mt-2`).
    pub negative: bool,
    /// The utility itself, without modifiers or flags.
    pub base: &'a str,
}

impl<'a> ParsedClass<'a> {
    /// Canonical modifier prefix used as part of the conflict key.
    ///
    /// Plain modifiers are order-insensitive, so `hover:focus:` and
    /// `focus:hover:` produce the same key. Arbitrary modifiers (`[&>svg]`)
    /// keep their position and split the list into independently sorted runs.
    pub fn modifier_key(&self) -> String {
        sort_modifiers(&self.modifiers).join(":")
    }
}

/// Parses a single whitespace-free class token.
///
/// Colons inside `[...]` or `(...)` are part of an arbitrary value and do not
/// separate modifiers.
pub fn parse_class(token: &str) -> ParsedClass<'_> {
    let mut modifiers = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in token.char_indices() {
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                modifiers.push(&token[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    let mut base = &token[start..];
    let mut important = false;
    if let Some(rest) = base.strip_prefix('!') {
        base = rest;
        important = true;
    } else if let Some(rest) = base.strip_suffix('!') {
        base = rest;
        important = true;
    }

    let mut negative = false;
    if let Some(rest) = base.strip_prefix('-') {
        if !rest.is_empty() {
            base = rest;
            negative = true;
        }
    }

    ParsedClass {
        modifiers,
        important,
        negative,
        base,
    }
}

fn sort_modifiers<'a>(modifiers: &[&'a str]) -> Vec<&'a str> {
    let mut sorted = Vec::with_capacity(modifiers.len());
    let mut run: Vec<&'a str> = Vec::new();

    for modifier in modifiers {
        if modifier.starts_with('[') {
            run.sort_unstable();
            sorted.append(&mut run);
            sorted.push(*modifier);
        } else {
            run.push(*modifier);
        }
    }

    run.sort_unstable();
    sorted.append(&mut run);
    sorted
}

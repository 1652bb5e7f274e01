//! Built-in conflict groups for Tailwind-style utilities.
//!
//! A conflict group names the CSS property (or property family) a utility
//! sets. Two utilities in the same group with the same modifiers conflict,
//! and the later one wins. Some groups also override narrower groups: `p-4`
//! replaces any earlier `px-*` or `pt-*`.
//!
//! Classification happens in three steps:
//!
//! 1. Exact keywords (`flex`, `hidden`, `truncate`, bare `border`).
//! 2. Arbitrary properties (`[mask-type:luminance]`) group by property name.
//! 3. Prefix rules, longest prefix first. Ambiguous prefixes such as `text-`
//!    or `border-` look at the value to pick between size, width and color.

use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::collections::HashMap;

/// How a utility prefix maps its value to a group.
#[derive(Clone, Copy)]
enum Rule {
    /// Every value belongs to the same group.
    Group(&'static str),
    /// The group depends on the value.
    Resolve(fn(&str) -> &'static str),
}

const DISPLAY: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "table",
    "inline-table",
    "table-caption",
    "table-cell",
    "table-column",
    "table-column-group",
    "table-footer-group",
    "table-header-group",
    "table-row-group",
    "table-row",
    "flow-root",
    "grid",
    "inline-grid",
    "contents",
    "list-item",
    "hidden",
];

static KEYWORDS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for display in DISPLAY {
        map.insert(*display, "display");
    }
    for (groups, keywords) in [
        ("position", &["static", "fixed", "absolute", "relative", "sticky"][..]),
        ("visibility", &["visible", "invisible", "collapse"][..]),
        ("font-style", &["italic", "not-italic"][..]),
        (
            "text-decoration-line",
            &["underline", "overline", "line-through", "no-underline"][..],
        ),
        (
            "text-transform",
            &["uppercase", "lowercase", "capitalize", "normal-case"][..],
        ),
        (
            "text-overflow",
            &["truncate", "text-ellipsis", "text-clip"][..],
        ),
        ("font-smoothing", &["antialiased", "subpixel-antialiased"][..]),
        ("sr", &["sr-only", "not-sr-only"][..]),
        ("isolation", &["isolate", "isolation-auto"][..]),
        ("border-collapse", &["border-collapse", "border-separate"][..]),
        ("table-layout", &["table-auto", "table-fixed"][..]),
        ("caption-side", &["caption-top", "caption-bottom"][..]),
        ("box-sizing", &["box-border", "box-content"][..]),
        ("space-x-reverse", &["space-x-reverse"][..]),
        ("space-y-reverse", &["space-y-reverse"][..]),
    ] {
        for keyword in keywords {
            map.insert(*keyword, groups);
        }
    }
    map.insert("container", "container");
    map.insert("border", "border-w");
    map.insert("rounded", "rounded");
    map.insert("shadow", "shadow");
    map.insert("ring", "ring-w");
    map.insert("outline", "outline-style");
    map.insert("transition", "transition");
    map.insert("resize", "resize");
    map.insert("grow", "grow");
    map.insert("shrink", "shrink");
    map.insert("blur", "blur");
    for side in ["x", "y", "s", "e", "t", "r", "b", "l"] {
        let (width, _) = border_side_groups(side);
        map.insert(bare_border_side(side), width);
    }
    map
});

fn bare_border_side(side: &str) -> &'static str {
    match side {
        "x" => "border-x",
        "y" => "border-y",
        "s" => "border-s",
        "e" => "border-e",
        "t" => "border-t",
        "r" => "border-r",
        "b" => "border-b",
        _ => "border-l",
    }
}

static PREFIXES: Lazy<Vec<(&'static str, Rule)>> = Lazy::new(|| {
    use Rule::{Group, Resolve};

    let mut rules: Vec<(&'static str, Rule)> = vec![
        // Spacing
        ("p", Group("p")),
        ("px", Group("px")),
        ("py", Group("py")),
        ("ps", Group("ps")),
        ("pe", Group("pe")),
        ("pt", Group("pt")),
        ("pr", Group("pr")),
        ("pb", Group("pb")),
        ("pl", Group("pl")),
        ("m", Group("m")),
        ("mx", Group("mx")),
        ("my", Group("my")),
        ("ms", Group("ms")),
        ("me", Group("me")),
        ("mt", Group("mt")),
        ("mr", Group("mr")),
        ("mb", Group("mb")),
        ("ml", Group("ml")),
        ("gap", Group("gap")),
        ("gap-x", Group("gap-x")),
        ("gap-y", Group("gap-y")),
        ("space-x", Group("space-x")),
        ("space-y", Group("space-y")),
        // Sizing
        ("w", Group("w")),
        ("h", Group("h")),
        ("size", Group("size")),
        ("min-w", Group("min-w")),
        ("min-h", Group("min-h")),
        ("max-w", Group("max-w")),
        ("max-h", Group("max-h")),
        // Layout
        ("inset", Group("inset")),
        ("inset-x", Group("inset-x")),
        ("inset-y", Group("inset-y")),
        ("top", Group("top")),
        ("right", Group("right")),
        ("bottom", Group("bottom")),
        ("left", Group("left")),
        ("start", Group("start")),
        ("end", Group("end")),
        ("z", Group("z")),
        ("aspect", Group("aspect")),
        ("columns", Group("columns")),
        ("float", Group("float")),
        ("clear", Group("clear")),
        ("object", Resolve(object_group)),
        ("overflow", Group("overflow")),
        ("overflow-x", Group("overflow-x")),
        ("overflow-y", Group("overflow-y")),
        ("overscroll", Group("overscroll")),
        ("box-decoration", Group("box-decoration")),
        // Flexbox and grid
        ("flex", Resolve(flex_group)),
        ("basis", Group("basis")),
        ("grow", Group("grow")),
        ("shrink", Group("shrink")),
        ("order", Group("order")),
        ("grid-cols", Group("grid-cols")),
        ("grid-rows", Group("grid-rows")),
        ("grid-flow", Group("grid-flow")),
        ("auto-cols", Group("auto-cols")),
        ("auto-rows", Group("auto-rows")),
        ("col", Group("col-start-end")),
        ("col-start", Group("col-start")),
        ("col-end", Group("col-end")),
        ("row", Group("row-start-end")),
        ("row-start", Group("row-start")),
        ("row-end", Group("row-end")),
        ("items", Group("align-items")),
        ("justify", Group("justify-content")),
        ("justify-items", Group("justify-items")),
        ("justify-self", Group("justify-self")),
        ("content", Resolve(content_group)),
        ("self", Group("align-self")),
        ("place-content", Group("place-content")),
        ("place-items", Group("place-items")),
        ("place-self", Group("place-self")),
        // Typography
        ("text", Resolve(text_group)),
        ("font", Resolve(font_group)),
        ("leading", Group("leading")),
        ("tracking", Group("tracking")),
        ("line-clamp", Group("line-clamp")),
        ("list", Resolve(list_group)),
        ("decoration", Resolve(decoration_group)),
        ("underline-offset", Group("underline-offset")),
        ("indent", Group("indent")),
        ("align", Group("vertical-align")),
        ("whitespace", Group("whitespace")),
        ("break", Resolve(break_group)),
        ("hyphens", Group("hyphens")),
        ("placeholder", Group("placeholder-color")),
        // Backgrounds
        ("bg", Resolve(bg_group)),
        ("from", Group("gradient-from")),
        ("via", Group("gradient-via")),
        ("to", Group("gradient-to")),
        // Borders
        ("rounded", Resolve(rounded_group)),
        ("border", Resolve(border_group)),
        ("border-spacing", Group("border-spacing")),
        ("border-spacing-x", Group("border-spacing-x")),
        ("border-spacing-y", Group("border-spacing-y")),
        ("border-x", Resolve(|v| border_side("x", v))),
        ("border-y", Resolve(|v| border_side("y", v))),
        ("border-s", Resolve(|v| border_side("s", v))),
        ("border-e", Resolve(|v| border_side("e", v))),
        ("border-t", Resolve(|v| border_side("t", v))),
        ("border-r", Resolve(|v| border_side("r", v))),
        ("border-b", Resolve(|v| border_side("b", v))),
        ("border-l", Resolve(|v| border_side("l", v))),
        ("divide-x", Group("divide-x")),
        ("divide-y", Group("divide-y")),
        ("divide", Resolve(divide_group)),
        ("outline", Resolve(outline_group)),
        ("outline-offset", Group("outline-offset")),
        ("ring", Resolve(ring_group)),
        ("ring-offset", Resolve(ring_offset_group)),
        // Effects and filters
        ("shadow", Resolve(shadow_group)),
        ("opacity", Group("opacity")),
        ("mix-blend", Group("mix-blend")),
        ("bg-blend", Group("bg-blend")),
        ("blur", Group("blur")),
        ("backdrop-blur", Group("backdrop-blur")),
        ("backdrop-opacity", Group("backdrop-opacity")),
        ("drop-shadow", Group("drop-shadow")),
        // Transitions and animation
        ("transition", Group("transition")),
        ("duration", Group("duration")),
        ("ease", Group("ease")),
        ("delay", Group("delay")),
        ("animate", Group("animate")),
        // Transforms
        ("scale", Group("scale")),
        ("scale-x", Group("scale-x")),
        ("scale-y", Group("scale-y")),
        ("rotate", Group("rotate")),
        ("translate-x", Group("translate-x")),
        ("translate-y", Group("translate-y")),
        ("skew-x", Group("skew-x")),
        ("skew-y", Group("skew-y")),
        ("origin", Group("transform-origin")),
        // Interactivity
        ("cursor", Group("cursor")),
        ("select", Group("user-select")),
        ("pointer-events", Group("pointer-events")),
        ("resize", Group("resize")),
        ("touch", Group("touch")),
        ("snap", Group("snap")),
        ("accent", Group("accent")),
        ("caret", Group("caret")),
        ("appearance", Group("appearance")),
        ("will-change", Group("will-change")),
        ("scroll", Group("scroll-behavior")),
        // SVG
        ("fill", Group("fill")),
        ("stroke", Resolve(stroke_group)),
    ];

    // Longest prefix first so `border-x-2` never matches plain `border`.
    rules.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    rules
});

/// Classifies a base utility (no modifiers, no `!`, no leading `-`).
pub(crate) fn builtin_group(base: &str) -> Option<Cow<'_, str>> {
    if let Some(group) = KEYWORDS.get(base) {
        return Some(Cow::Borrowed(*group));
    }

    if let Some(property) = arbitrary_property(base) {
        return Some(Cow::Borrowed(property));
    }

    for (prefix, rule) in PREFIXES.iter() {
        let value = match base
            .strip_prefix(*prefix)
            .and_then(|rest| rest.strip_prefix('-'))
        {
            Some(value) if !value.is_empty() => value,
            _ => continue,
        };
        let group = match *rule {
            Rule::Group(group) => group,
            Rule::Resolve(resolve) => resolve(value),
        };
        return Some(Cow::Borrowed(group));
    }

    None
}

/// Groups that a utility in `group` also overrides.
pub(crate) fn builtin_conflicts(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "ps", "pe", "pt", "pr", "pb", "pl"],
        "px" => &["pr", "pl"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "ms", "me", "mt", "mr", "mb", "ml"],
        "mx" => &["mr", "ml"],
        "my" => &["mt", "mb"],
        "gap" => &["gap-x", "gap-y"],
        "size" => &["w", "h"],
        "inset" => &[
            "inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left",
        ],
        "inset-x" => &["right", "left"],
        "inset-y" => &["top", "bottom"],
        "overflow" => &["overflow-x", "overflow-y"],
        "flex" => &["basis", "grow", "shrink"],
        "font-size" => &["leading"],
        "line-clamp" => &["display", "overflow"],
        "scale" => &["scale-x", "scale-y"],
        "col-start-end" => &["col-start", "col-end"],
        "row-start-end" => &["row-start", "row-end"],
        "rounded" => &[
            "rounded-s",
            "rounded-e",
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-ss",
            "rounded-se",
            "rounded-ee",
            "rounded-es",
            "rounded-tl",
            "rounded-tr",
            "rounded-br",
            "rounded-bl",
        ],
        "rounded-s" => &["rounded-ss", "rounded-es"],
        "rounded-e" => &["rounded-se", "rounded-ee"],
        "rounded-t" => &["rounded-tl", "rounded-tr"],
        "rounded-r" => &["rounded-tr", "rounded-br"],
        "rounded-b" => &["rounded-br", "rounded-bl"],
        "rounded-l" => &["rounded-tl", "rounded-bl"],
        "border-w" => &[
            "border-w-x",
            "border-w-y",
            "border-w-s",
            "border-w-e",
            "border-w-t",
            "border-w-r",
            "border-w-b",
            "border-w-l",
        ],
        "border-spacing" => &["border-spacing-x", "border-spacing-y"],
        "border-w-x" => &["border-w-r", "border-w-l"],
        "border-w-y" => &["border-w-t", "border-w-b"],
        "border-color" => &[
            "border-color-x",
            "border-color-y",
            "border-color-s",
            "border-color-e",
            "border-color-t",
            "border-color-r",
            "border-color-b",
            "border-color-l",
        ],
        "border-color-x" => &["border-color-r", "border-color-l"],
        "border-color-y" => &["border-color-t", "border-color-b"],
        _ => &[],
    }
}

fn arbitrary_property(base: &str) -> Option<&str> {
    let inner = base.strip_prefix('[')?.strip_suffix(']')?;
    let colon = inner.find(':')?;
    let property = &inner[..colon];
    if property.is_empty() || !property.chars().all(|c| c.is_ascii_lowercase() || c == '-') {
        return None;
    }
    // "[mask-type" including the bracket keeps these apart from built-in names.
    Some(&base[..colon + 1])
}

fn is_arbitrary(value: &str) -> bool {
    value.starts_with('[') && value.ends_with(']')
}

fn is_number(value: &str) -> bool {
    !value.is_empty() && value.parse::<f64>().is_ok()
}

/// Arbitrary value that reads as a length (`[3px]`, `[length:var(--x)]`).
fn is_arbitrary_length(value: &str) -> bool {
    if !is_arbitrary(value) {
        return false;
    }
    let inner = &value[1..value.len() - 1];
    if let Some(hint) = inner.strip_prefix("length:") {
        return !hint.is_empty();
    }
    inner.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        || inner.starts_with("calc(")
        || inner.starts_with("min(")
        || inner.starts_with("max(")
        || inner.starts_with("clamp(")
}

/// Strip an opacity or line-height suffix (`red-500/50`, `sm/6`).
fn head(value: &str) -> &str {
    if is_arbitrary(value) {
        return value;
    }
    value.split('/').next().unwrap_or(value)
}

fn text_group(value: &str) -> &'static str {
    match head(value) {
        "xs" | "sm" | "base" | "lg" | "xl" | "2xl" | "3xl" | "4xl" | "5xl" | "6xl" | "7xl"
        | "8xl" | "9xl" => "font-size",
        "left" | "center" | "right" | "justify" | "start" | "end" => "text-align",
        "wrap" | "nowrap" | "balance" | "pretty" => "text-wrap",
        "ellipsis" | "clip" => "text-overflow",
        v if is_arbitrary_length(v) => "font-size",
        _ => "text-color",
    }
}

fn font_group(value: &str) -> &'static str {
    match value {
        "thin" | "extralight" | "light" | "normal" | "medium" | "semibold" | "bold"
        | "extrabold" | "black" => "font-weight",
        v if is_number(v) => "font-weight",
        v if is_arbitrary(v) && v[1..v.len() - 1].parse::<u32>().is_ok() => "font-weight",
        _ => "font-family",
    }
}

fn flex_group(value: &str) -> &'static str {
    match value {
        "row" | "row-reverse" | "col" | "col-reverse" => "flex-direction",
        "wrap" | "wrap-reverse" | "nowrap" => "flex-wrap",
        _ => "flex",
    }
}

fn content_group(value: &str) -> &'static str {
    match value {
        "none" => "content",
        v if is_arbitrary(v) => "content",
        _ => "align-content",
    }
}

fn object_group(value: &str) -> &'static str {
    match value {
        "contain" | "cover" | "fill" | "none" | "scale-down" => "object-fit",
        _ => "object-position",
    }
}

fn list_group(value: &str) -> &'static str {
    match value {
        "inside" | "outside" => "list-position",
        _ => "list-style-type",
    }
}

fn decoration_group(value: &str) -> &'static str {
    match value {
        "solid" | "double" | "dotted" | "dashed" | "wavy" => "decoration-style",
        "auto" | "from-font" => "decoration-thickness",
        v if is_number(v) || is_arbitrary_length(v) => "decoration-thickness",
        "slice" | "clone" => "box-decoration",
        _ => "decoration-color",
    }
}

fn break_group(value: &str) -> &'static str {
    if value.starts_with("before-") {
        "break-before"
    } else if value.starts_with("after-") {
        "break-after"
    } else if value.starts_with("inside-") {
        "break-inside"
    } else {
        "word-break"
    }
}

fn bg_group(value: &str) -> &'static str {
    match value {
        "fixed" | "local" | "scroll" => "bg-attachment",
        "bottom" | "center" | "left" | "left-bottom" | "left-top" | "right" | "right-bottom"
        | "right-top" | "top" => "bg-position",
        "repeat" | "no-repeat" | "repeat-x" | "repeat-y" | "repeat-round" | "repeat-space" => {
            "bg-repeat"
        }
        "auto" | "cover" | "contain" => "bg-size",
        "clip-border" | "clip-padding" | "clip-content" | "clip-text" => "bg-clip",
        "origin-border" | "origin-padding" | "origin-content" => "bg-origin",
        "none" => "bg-image",
        v if v.starts_with("gradient-") || v.starts_with("linear-") || v.starts_with("radial-") => {
            "bg-image"
        }
        v if v.starts_with("[url(") => "bg-image",
        _ => "bg-color",
    }
}

fn rounded_group(value: &str) -> &'static str {
    let side = value.split('-').next().unwrap_or(value);
    match side {
        "s" => "rounded-s",
        "e" => "rounded-e",
        "t" => "rounded-t",
        "r" => "rounded-r",
        "b" => "rounded-b",
        "l" => "rounded-l",
        "ss" => "rounded-ss",
        "se" => "rounded-se",
        "ee" => "rounded-ee",
        "es" => "rounded-es",
        "tl" => "rounded-tl",
        "tr" => "rounded-tr",
        "br" => "rounded-br",
        "bl" => "rounded-bl",
        _ => "rounded",
    }
}

fn border_width_value(value: &str) -> bool {
    is_number(value) || is_arbitrary_length(value)
}

fn border_group(value: &str) -> &'static str {
    match value {
        v if border_width_value(v) => "border-w",
        "solid" | "dashed" | "dotted" | "double" | "hidden" | "none" => "border-style",
        _ => "border-color",
    }
}

fn border_side_groups(side: &str) -> (&'static str, &'static str) {
    match side {
        "x" => ("border-w-x", "border-color-x"),
        "y" => ("border-w-y", "border-color-y"),
        "s" => ("border-w-s", "border-color-s"),
        "e" => ("border-w-e", "border-color-e"),
        "t" => ("border-w-t", "border-color-t"),
        "r" => ("border-w-r", "border-color-r"),
        "b" => ("border-w-b", "border-color-b"),
        _ => ("border-w-l", "border-color-l"),
    }
}

fn border_side(side: &str, value: &str) -> &'static str {
    let (width, color) = border_side_groups(side);
    if border_width_value(value) {
        width
    } else {
        color
    }
}

fn divide_group(value: &str) -> &'static str {
    match value {
        "solid" | "dashed" | "dotted" | "double" | "none" => "divide-style",
        _ => "divide-color",
    }
}

fn outline_group(value: &str) -> &'static str {
    match value {
        "none" | "hidden" | "solid" | "dashed" | "dotted" | "double" => "outline-style",
        v if border_width_value(v) => "outline-w",
        _ => "outline-color",
    }
}

fn ring_group(value: &str) -> &'static str {
    match value {
        "inset" => "ring-inset",
        v if border_width_value(v) => "ring-w",
        _ => "ring-color",
    }
}

fn ring_offset_group(value: &str) -> &'static str {
    if border_width_value(value) {
        "ring-offset-w"
    } else {
        "ring-offset-color"
    }
}

fn shadow_group(value: &str) -> &'static str {
    match head(value) {
        "2xs" | "xs" | "sm" | "md" | "lg" | "xl" | "2xl" | "inner" | "none" => "shadow",
        v if is_arbitrary(v) => "shadow",
        _ => "shadow-color",
    }
}

fn stroke_group(value: &str) -> &'static str {
    if is_number(value) || is_arbitrary_length(value) {
        "stroke-w"
    } else {
        "stroke"
    }
}

//! Table: a scrollable data table with header, body, footer and caption.
//!
//! Row density applies to header and body cells alike, so a table picks
//! one [`TableDensity`] and passes it to every `head()` and `cell()`.

use once_cell::sync::Lazy;

use super::part;
use crate::styled::Styled;
use crate::table::Recipe;
use crate::Axis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Axis)]
#[axis(name = "density")]
pub enum TableDensity {
    Compact,
    #[axis(default)]
    Default,
    Comfortable,
}

pub static CONTAINER: Lazy<Recipe> =
    Lazy::new(|| Recipe::new("relative w-full overflow-x-auto"));

pub static TABLE: Lazy<Recipe> = Lazy::new(|| Recipe::new("w-full caption-bottom text-sm"));

pub static HEADER: Lazy<Recipe> = Lazy::new(|| Recipe::new("[&_tr]:border-b"));

pub static BODY: Lazy<Recipe> = Lazy::new(|| Recipe::new("[&_tr:last-child]:border-0"));

pub static FOOTER: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new("border-t bg-muted/50 font-medium [&>tr]:last:border-b-0")
});

pub static ROW: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new("border-b transition-colors hover:bg-muted/50 data-[state=selected]:bg-muted")
});

pub static HEAD: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new(
        "text-left align-middle font-medium whitespace-nowrap text-foreground \
         [&:has([role=checkbox])]:pr-0",
    )
    .axis(Axis::typed([
        (TableDensity::Compact, "h-8 px-1.5 text-xs"),
        (TableDensity::Default, "h-10 px-2"),
        (TableDensity::Comfortable, "h-12 px-3"),
    ]))
});

pub static CELL: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new("align-middle whitespace-nowrap [&:has([role=checkbox])]:pr-0").axis(
        Axis::typed([
            (TableDensity::Compact, "px-1.5 py-1 text-xs"),
            (TableDensity::Default, "p-2"),
            (TableDensity::Comfortable, "px-3 py-3"),
        ]),
    )
});

pub static CAPTION: Lazy<Recipe> =
    Lazy::new(|| Recipe::new("mt-4 text-sm text-muted-foreground"));

pub fn container() -> Styled<'static> {
    part(&CONTAINER, "table-container")
}

pub fn table() -> Styled<'static> {
    part(&TABLE, "table")
}

pub fn header() -> Styled<'static> {
    part(&HEADER, "table-header")
}

pub fn body() -> Styled<'static> {
    part(&BODY, "table-body")
}

pub fn footer() -> Styled<'static> {
    part(&FOOTER, "table-footer")
}

pub fn row() -> Styled<'static> {
    part(&ROW, "table-row")
}

pub fn head() -> Styled<'static> {
    part(&HEAD, "table-head")
}

pub fn cell() -> Styled<'static> {
    part(&CELL, "table-cell")
}

pub fn caption() -> Styled<'static> {
    part(&CAPTION, "table-caption")
}

pub(super) fn recipes() -> Vec<(&'static str, &'static Recipe)> {
    vec![
        ("table.container", &*CONTAINER),
        ("table", &*TABLE),
        ("table.header", &*HEADER),
        ("table.body", &*BODY),
        ("table.footer", &*FOOTER),
        ("table.row", &*ROW),
        ("table.head", &*HEAD),
        ("table.cell", &*CELL),
        ("table.caption", &*CAPTION),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::assert_typed_axis;

    #[test]
    fn test_axes_match_enums() {
        assert_typed_axis::<TableDensity>(&HEAD);
        assert_typed_axis::<TableDensity>(&CELL);
    }

    #[test]
    fn test_cell_density() {
        assert_eq!(
            cell().build().class,
            "align-middle whitespace-nowrap [&:has([role=checkbox])]:pr-0 p-2"
        );
        insta::assert_snapshot!(
            cell().with(TableDensity::Comfortable).build().class,
            @"align-middle whitespace-nowrap [&:has([role=checkbox])]:pr-0 px-3 py-3"
        );
    }

    #[test]
    fn test_cell_override_padding() {
        let class = cell().class("px-0").build().class;
        assert!(class.ends_with("p-2 px-0"));
    }

    #[test]
    fn test_selected_row_passthrough() {
        let props = row().attr("data-state", "selected").build();
        assert_eq!(props.attr("data-state"), Some("selected"));
        assert_eq!(props.attr("data-slot"), Some("table-row"));
    }
}

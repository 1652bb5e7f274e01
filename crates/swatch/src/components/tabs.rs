//! Tabs: a list of triggers switching between content panels.
//!
//! The list and triggers vary by orientation and visual variant; the
//! underline variant needs a compound rule to move its rule line to the
//! side when vertical.

use once_cell::sync::Lazy;

use super::part;
use crate::styled::Styled;
use crate::table::{CompoundVariant, Recipe};
use crate::{Axis, AxisValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Axis)]
#[axis(name = "orientation")]
pub enum TabsOrientation {
    #[axis(default)]
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Axis)]
#[axis(name = "variant")]
pub enum TabsVariant {
    #[axis(default)]
    Default,
    Underline,
    Pills,
}

fn underline_vertical(class: &str) -> CompoundVariant {
    CompoundVariant::new(class)
        .when(TabsVariant::AXIS, TabsVariant::Underline.value_name())
        .when(TabsOrientation::AXIS, TabsOrientation::Vertical.value_name())
}

pub static ROOT: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new("flex gap-2").axis(Axis::typed([
        (TabsOrientation::Horizontal, "flex-col"),
        (TabsOrientation::Vertical, "flex-row"),
    ]))
});

pub static LIST: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new("inline-flex w-fit items-center justify-center text-muted-foreground")
        .axis(Axis::typed([
            (TabsOrientation::Horizontal, "h-9"),
            (TabsOrientation::Vertical, "h-auto flex-col"),
        ]))
        .axis(Axis::typed([
            (TabsVariant::Default, "rounded-lg bg-muted p-[3px]"),
            (
                TabsVariant::Underline,
                "rounded-none border-b bg-transparent p-0",
            ),
            (TabsVariant::Pills, "gap-1 bg-transparent p-0"),
        ]))
        .compound(underline_vertical("border-b-0 border-r"))
});

pub static TRIGGER: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new(
        "inline-flex flex-1 items-center justify-center gap-1.5 whitespace-nowrap px-2 py-1 \
         text-sm font-medium text-foreground transition-[color,box-shadow] \
         focus-visible:border-ring focus-visible:ring-[3px] focus-visible:ring-ring/50 \
         focus-visible:outline-1 disabled:pointer-events-none disabled:opacity-50",
    )
    .axis(Axis::typed([
        (TabsOrientation::Horizontal, "h-full"),
        (TabsOrientation::Vertical, "w-full justify-start"),
    ]))
    .axis(Axis::typed([
        (
            TabsVariant::Default,
            "rounded-md border border-transparent data-[state=active]:bg-background \
             data-[state=active]:shadow-sm",
        ),
        (
            TabsVariant::Underline,
            "rounded-none border-b-2 border-transparent data-[state=active]:border-primary",
        ),
        (
            TabsVariant::Pills,
            "rounded-full data-[state=active]:bg-primary \
             data-[state=active]:text-primary-foreground",
        ),
    ]))
    .compound(underline_vertical("border-b-0 border-r-2"))
});

pub static CONTENT: Lazy<Recipe> = Lazy::new(|| Recipe::new("flex-1 outline-none"));

pub fn root() -> Styled<'static> {
    part(&ROOT, "tabs")
}

pub fn list() -> Styled<'static> {
    part(&LIST, "tabs-list")
}

pub fn trigger() -> Styled<'static> {
    part(&TRIGGER, "tabs-trigger")
}

pub fn content() -> Styled<'static> {
    part(&CONTENT, "tabs-content")
}

pub(super) fn recipes() -> Vec<(&'static str, &'static Recipe)> {
    vec![
        ("tabs", &*ROOT),
        ("tabs.list", &*LIST),
        ("tabs.trigger", &*TRIGGER),
        ("tabs.content", &*CONTENT),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::assert_typed_axis;

    #[test]
    fn test_axes_match_enums() {
        assert_typed_axis::<TabsOrientation>(&ROOT);
        assert_typed_axis::<TabsOrientation>(&LIST);
        assert_typed_axis::<TabsVariant>(&LIST);
        assert_typed_axis::<TabsOrientation>(&TRIGGER);
        assert_typed_axis::<TabsVariant>(&TRIGGER);
    }

    #[test]
    fn test_default_list() {
        insta::assert_snapshot!(list().build().class, @"inline-flex w-fit items-center justify-center text-muted-foreground h-9 rounded-lg bg-muted p-[3px]");
    }

    #[test]
    fn test_underline_vertical_list_moves_rule() {
        let class = list()
            .with(TabsVariant::Underline)
            .with(TabsOrientation::Vertical)
            .build()
            .class;
        assert_eq!(
            class,
            "inline-flex w-fit items-center justify-center text-muted-foreground h-auto \
             flex-col rounded-none bg-transparent p-0 border-b-0 border-r"
        );
    }

    #[test]
    fn test_underline_horizontal_has_no_compound() {
        let class = trigger().with(TabsVariant::Underline).build().class;
        assert!(class.contains("border-b-2"));
        assert!(!class.contains("border-r-2"));
    }

    #[test]
    fn test_underline_vertical_trigger() {
        let class = trigger()
            .with(TabsOrientation::Vertical)
            .with(TabsVariant::Underline)
            .build()
            .class;
        assert!(!class.contains("border-b-2"));
        assert!(class.ends_with("border-b-0 border-r-2"));
        assert!(class.contains("w-full justify-start"));
        assert!(!class.contains("justify-center"));
    }
}

//! Navigation menu: a bar of triggers opening shared dropdown panels.

use once_cell::sync::Lazy;

use super::part;
use crate::styled::Styled;
use crate::table::Recipe;
use crate::Axis;

/// Layout direction of the menu root and its list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Axis)]
#[axis(name = "orientation")]
pub enum NavigationMenuOrientation {
    #[axis(default)]
    Horizontal,
    Vertical,
}

pub static ROOT: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new(
        "group/navigation-menu relative flex max-w-max flex-1 items-center justify-center",
    )
    .axis(Axis::typed([
        (NavigationMenuOrientation::Horizontal, "flex-row"),
        (NavigationMenuOrientation::Vertical, "flex-col items-start"),
    ]))
});

pub static LIST: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new("group flex flex-1 list-none items-center justify-center gap-1").axis(
        Axis::typed([
            (NavigationMenuOrientation::Horizontal, "flex-row"),
            (NavigationMenuOrientation::Vertical, "flex-col items-stretch"),
        ]),
    )
});

pub static ITEM: Lazy<Recipe> = Lazy::new(|| Recipe::new("relative"));

pub static TRIGGER: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new(
        "group inline-flex h-9 w-max items-center justify-center rounded-md bg-background \
         px-4 py-2 text-sm font-medium transition-[color,box-shadow] outline-none \
         hover:bg-accent hover:text-accent-foreground focus:bg-accent \
         focus:text-accent-foreground focus-visible:ring-[3px] focus-visible:ring-ring/50 \
         focus-visible:outline-1 disabled:pointer-events-none disabled:opacity-50 \
         data-[state=open]:bg-accent/50 data-[state=open]:text-accent-foreground",
    )
});

pub static CONTENT: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new(
        "top-0 left-0 w-full p-2 pr-2.5 md:absolute md:w-auto \
         data-[motion^=from-]:animate-in data-[motion^=to-]:animate-out \
         data-[motion^=from-]:fade-in data-[motion^=to-]:fade-out",
    )
});

pub static VIEWPORT: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new(
        "relative mt-1.5 h-[var(--radix-navigation-menu-viewport-height)] w-full \
         origin-top overflow-hidden rounded-md border bg-popover text-popover-foreground \
         shadow md:w-[var(--radix-navigation-menu-viewport-width)] \
         data-[state=open]:animate-in data-[state=closed]:animate-out \
         data-[state=closed]:zoom-out-95 data-[state=open]:zoom-in-90",
    )
});

pub static LINK: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new(
        "flex flex-col gap-1 rounded-sm p-2 text-sm transition-all outline-none \
         hover:bg-accent hover:text-accent-foreground focus:bg-accent \
         focus:text-accent-foreground focus-visible:ring-[3px] focus-visible:ring-ring/50 \
         focus-visible:outline-1 data-[active=true]:bg-accent/50 \
         data-[active=true]:text-accent-foreground",
    )
});

pub static INDICATOR: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new(
        "top-full z-[1] flex h-1.5 items-end justify-center overflow-hidden \
         data-[state=visible]:animate-in data-[state=hidden]:animate-out \
         data-[state=hidden]:fade-out data-[state=visible]:fade-in",
    )
});

pub fn root() -> Styled<'static> {
    part(&ROOT, "navigation-menu")
}

pub fn list() -> Styled<'static> {
    part(&LIST, "navigation-menu-list")
}

pub fn item() -> Styled<'static> {
    part(&ITEM, "navigation-menu-item")
}

pub fn trigger() -> Styled<'static> {
    part(&TRIGGER, "navigation-menu-trigger")
}

pub fn content() -> Styled<'static> {
    part(&CONTENT, "navigation-menu-content")
}

pub fn viewport() -> Styled<'static> {
    part(&VIEWPORT, "navigation-menu-viewport")
}

pub fn link() -> Styled<'static> {
    part(&LINK, "navigation-menu-link")
}

pub fn indicator() -> Styled<'static> {
    part(&INDICATOR, "navigation-menu-indicator")
}

pub(super) fn recipes() -> Vec<(&'static str, &'static Recipe)> {
    vec![
        ("navigation-menu", &*ROOT),
        ("navigation-menu.list", &*LIST),
        ("navigation-menu.item", &*ITEM),
        ("navigation-menu.trigger", &*TRIGGER),
        ("navigation-menu.content", &*CONTENT),
        ("navigation-menu.viewport", &*VIEWPORT),
        ("navigation-menu.link", &*LINK),
        ("navigation-menu.indicator", &*INDICATOR),
    ]
}

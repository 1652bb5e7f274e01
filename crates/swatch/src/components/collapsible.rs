//! Collapsible: a trigger that shows and hides a content region.
//!
//! None of the parts vary; open/closed styling keys off the primitive's
//! `data-state` attribute.

use once_cell::sync::Lazy;

use super::part;
use crate::styled::Styled;
use crate::table::Recipe;

pub static ROOT: Lazy<Recipe> = Lazy::new(|| Recipe::new("group/collapsible"));

pub static TRIGGER: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new(
        "flex w-full items-center justify-between gap-2 text-left font-medium \
         [&[data-state=open]>svg]:rotate-180",
    )
});

pub static CONTENT: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new(
        "overflow-hidden data-[state=closed]:animate-collapsible-up \
         data-[state=open]:animate-collapsible-down",
    )
});

pub fn root() -> Styled<'static> {
    part(&ROOT, "collapsible")
}

pub fn trigger() -> Styled<'static> {
    part(&TRIGGER, "collapsible-trigger")
}

pub fn content() -> Styled<'static> {
    part(&CONTENT, "collapsible-content")
}

pub(super) fn recipes() -> Vec<(&'static str, &'static Recipe)> {
    vec![
        ("collapsible", &*ROOT),
        ("collapsible.trigger", &*TRIGGER),
        ("collapsible.content", &*CONTENT),
    ]
}

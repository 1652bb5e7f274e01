//! Popover: a floating panel anchored to a trigger.
//!
//! Positioning is the primitive's job; the table only sets width and
//! entrance animation per side.

use once_cell::sync::Lazy;

use super::part;
use crate::styled::Styled;
use crate::table::Recipe;
use crate::Axis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Axis)]
#[axis(name = "size")]
pub enum PopoverSize {
    Sm,
    #[axis(default)]
    Default,
    Lg,
}

pub static CONTENT: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new(
        "z-50 rounded-md border bg-popover p-4 text-popover-foreground shadow-md \
         outline-hidden data-[state=open]:animate-in data-[state=closed]:animate-out \
         data-[state=closed]:fade-out-0 data-[state=open]:fade-in-0 \
         data-[side=bottom]:slide-in-from-top-2 data-[side=left]:slide-in-from-right-2 \
         data-[side=right]:slide-in-from-left-2 data-[side=top]:slide-in-from-bottom-2",
    )
    .axis(Axis::typed([
        (PopoverSize::Sm, "w-56"),
        (PopoverSize::Default, "w-72"),
        (PopoverSize::Lg, "w-96"),
    ]))
});

pub fn content() -> Styled<'static> {
    part(&CONTENT, "popover-content")
}

pub(super) fn recipes() -> Vec<(&'static str, &'static Recipe)> {
    vec![("popover.content", &*CONTENT)]
}

//! Checkbox: a box with a check indicator.

use once_cell::sync::Lazy;

use super::part;
use crate::styled::Styled;
use crate::table::Recipe;
use crate::Axis;

/// Box size, shared by the root and its indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Axis)]
#[axis(name = "size")]
pub enum CheckboxSize {
    Sm,
    #[axis(default)]
    Default,
    Lg,
}

pub static ROOT: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new(
        "peer shrink-0 rounded border border-input shadow-xs outline-none transition-shadow \
         focus-visible:border-ring focus-visible:ring-[3px] focus-visible:ring-ring/50 \
         disabled:cursor-not-allowed disabled:opacity-50 aria-invalid:border-destructive \
         data-[state=checked]:border-primary data-[state=checked]:bg-primary \
         data-[state=checked]:text-primary-foreground",
    )
    .axis(Axis::typed([
        (CheckboxSize::Sm, "h-3 w-3"),
        (CheckboxSize::Default, "h-4 w-4"),
        (CheckboxSize::Lg, "h-5 w-5"),
    ]))
});

pub static INDICATOR: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new("flex items-center justify-center text-current transition-none").axis(
        Axis::typed([
            (CheckboxSize::Sm, "[&>svg]:size-2.5"),
            (CheckboxSize::Default, "[&>svg]:size-3.5"),
            (CheckboxSize::Lg, "[&>svg]:size-4"),
        ]),
    )
});

pub fn root() -> Styled<'static> {
    part(&ROOT, "checkbox")
}

pub fn indicator() -> Styled<'static> {
    part(&INDICATOR, "checkbox-indicator")
}

pub(super) fn recipes() -> Vec<(&'static str, &'static Recipe)> {
    vec![("checkbox", &*ROOT), ("checkbox.indicator", &*INDICATOR)]
}

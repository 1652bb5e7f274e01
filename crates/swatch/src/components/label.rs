//! Label: caption text for a form control.

use once_cell::sync::Lazy;

use super::part;
use crate::styled::Styled;
use crate::table::Recipe;
use crate::Axis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Axis)]
#[axis(name = "size")]
pub enum LabelSize {
    Sm,
    #[axis(default)]
    Default,
}

pub static LABEL: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new(
        "flex select-none items-center gap-2 font-medium \
         peer-disabled:cursor-not-allowed peer-disabled:opacity-50 \
         group-data-[disabled=true]:pointer-events-none group-data-[disabled=true]:opacity-50",
    )
    .axis(Axis::typed([
        (LabelSize::Sm, "text-xs leading-none"),
        (LabelSize::Default, "text-sm leading-none"),
    ]))
});

pub fn label() -> Styled<'static> {
    part(&LABEL, "label")
}

pub(super) fn recipes() -> Vec<(&'static str, &'static Recipe)> {
    vec![("label", &*LABEL)]
}

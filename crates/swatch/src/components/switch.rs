//! Switch: an on/off toggle with a sliding thumb.

use once_cell::sync::Lazy;

use super::part;
use crate::styled::Styled;
use crate::table::Recipe;
use crate::Axis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Axis)]
#[axis(name = "size")]
pub enum SwitchSize {
    Sm,
    #[axis(default)]
    Default,
    Lg,
}

pub static ROOT: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new(
        "peer inline-flex shrink-0 items-center rounded-full border border-transparent \
         shadow-xs transition-all outline-none focus-visible:border-ring \
         focus-visible:ring-[3px] focus-visible:ring-ring/50 disabled:cursor-not-allowed \
         disabled:opacity-50 data-[state=checked]:bg-primary data-[state=unchecked]:bg-input",
    )
    .axis(Axis::typed([
        (SwitchSize::Sm, "h-4 w-7"),
        (SwitchSize::Default, "h-[1.15rem] w-8"),
        (SwitchSize::Lg, "h-6 w-11"),
    ]))
});

pub static THUMB: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new(
        "pointer-events-none block rounded-full bg-background ring-0 transition-transform \
         data-[state=unchecked]:translate-x-0",
    )
    .axis(Axis::typed([
        (SwitchSize::Sm, "size-3 data-[state=checked]:translate-x-3"),
        (
            SwitchSize::Default,
            "size-4 data-[state=checked]:translate-x-[calc(100%-2px)]",
        ),
        (SwitchSize::Lg, "size-5 data-[state=checked]:translate-x-5"),
    ]))
});

pub fn root() -> Styled<'static> {
    part(&ROOT, "switch")
}

pub fn thumb() -> Styled<'static> {
    part(&THUMB, "switch-thumb")
}

pub(super) fn recipes() -> Vec<(&'static str, &'static Recipe)> {
    vec![("switch", &*ROOT), ("switch.thumb", &*THUMB)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::assert_typed_axis;

    #[test]
    fn test_axes_match_enums() {
        assert_typed_axis::<SwitchSize>(&ROOT);
        assert_typed_axis::<SwitchSize>(&THUMB);
    }

    #[test]
    fn test_thumb_travel_matches_size() {
        let class = thumb().with(SwitchSize::Sm).build().class;
        assert!(class.ends_with("size-3 data-[state=checked]:translate-x-3"));
        assert!(class.contains("data-[state=unchecked]:translate-x-0"));
    }
}

//! Radio group: mutually exclusive options.

use once_cell::sync::Lazy;

use super::part;
use crate::styled::Styled;
use crate::table::Recipe;
use crate::Axis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Axis)]
#[axis(name = "orientation")]
pub enum RadioGroupOrientation {
    #[axis(default)]
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Axis)]
#[axis(name = "size")]
pub enum RadioItemSize {
    Sm,
    #[axis(default)]
    Default,
    Lg,
}

pub static ROOT: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new("grid gap-3").axis(Axis::typed([
        (RadioGroupOrientation::Vertical, "grid-flow-row"),
        (RadioGroupOrientation::Horizontal, "grid-flow-col auto-cols-max"),
    ]))
});

pub static ITEM: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new(
        "aspect-square shrink-0 rounded-full border border-input text-primary shadow-xs \
         transition-[color,box-shadow] outline-none focus-visible:border-ring \
         focus-visible:ring-[3px] focus-visible:ring-ring/50 disabled:cursor-not-allowed \
         disabled:opacity-50 aria-invalid:border-destructive",
    )
    .axis(Axis::typed([
        (RadioItemSize::Sm, "size-3.5"),
        (RadioItemSize::Default, "size-4"),
        (RadioItemSize::Lg, "size-5"),
    ]))
});

pub static INDICATOR: Lazy<Recipe> =
    Lazy::new(|| Recipe::new("relative flex items-center justify-center"));

pub fn root() -> Styled<'static> {
    part(&ROOT, "radio-group")
}

pub fn item() -> Styled<'static> {
    part(&ITEM, "radio-group-item")
}

pub fn indicator() -> Styled<'static> {
    part(&INDICATOR, "radio-group-indicator")
}

pub(super) fn recipes() -> Vec<(&'static str, &'static Recipe)> {
    vec![
        ("radio-group", &*ROOT),
        ("radio-group.item", &*ITEM),
        ("radio-group.indicator", &*INDICATOR),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::assert_typed_axis;

    #[test]
    fn test_axes_match_enums() {
        assert_typed_axis::<RadioGroupOrientation>(&ROOT);
        assert_typed_axis::<RadioItemSize>(&ITEM);
    }

    #[test]
    fn test_root_orientation() {
        assert_eq!(root().build().class, "grid gap-3 grid-flow-row");
        assert_eq!(
            root().with(RadioGroupOrientation::Horizontal).build().class,
            "grid gap-3 grid-flow-col auto-cols-max"
        );
    }

    #[test]
    fn test_item_value_attribute() {
        let props = item().with(RadioItemSize::Sm).attr("value", "monthly").build();
        assert!(props.class.ends_with("size-3.5"));
        assert_eq!(props.attr("value"), Some("monthly"));
    }
}

//! Input: a single-line text field.

use once_cell::sync::Lazy;

use super::part;
use crate::styled::Styled;
use crate::table::Recipe;
use crate::Axis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Axis)]
#[axis(name = "size")]
pub enum InputSize {
    Sm,
    #[axis(default)]
    Default,
    Lg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Axis)]
#[axis(name = "variant")]
pub enum InputVariant {
    #[axis(default)]
    Default,
    Ghost,
}

pub static INPUT: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new(
        "flex w-full min-w-0 rounded-md border bg-transparent text-base shadow-xs outline-none \
         transition-[color,box-shadow] selection:bg-primary selection:text-primary-foreground \
         file:inline-flex file:h-7 file:border-0 file:bg-transparent file:text-sm \
         file:font-medium file:text-foreground placeholder:text-muted-foreground \
         disabled:pointer-events-none disabled:cursor-not-allowed disabled:opacity-50 \
         focus-visible:border-ring focus-visible:ring-[3px] focus-visible:ring-ring/50 \
         aria-invalid:border-destructive md:text-sm",
    )
    .axis(Axis::typed([
        (InputSize::Sm, "h-8 px-2.5 py-1 text-sm"),
        (InputSize::Default, "h-9 px-3 py-1"),
        (InputSize::Lg, "h-10 px-4 py-2"),
    ]))
    .axis(Axis::typed([
        (InputVariant::Default, "border-input dark:bg-input/30"),
        (
            InputVariant::Ghost,
            "border-transparent shadow-none focus-visible:ring-0",
        ),
    ]))
});

pub fn input() -> Styled<'static> {
    part(&INPUT, "input")
}

pub(super) fn recipes() -> Vec<(&'static str, &'static Recipe)> {
    vec![("input", &*INPUT)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::assert_typed_axis;

    #[test]
    fn test_axes_match_enums() {
        assert_typed_axis::<InputSize>(&INPUT);
        assert_typed_axis::<InputVariant>(&INPUT);
    }

    #[test]
    fn test_small_input_drops_base_text_size() {
        let class = input().with(InputSize::Sm).build().class;
        assert!(!class.contains(" text-base "));
        assert!(class.contains("h-8 px-2.5 py-1 text-sm"));
        assert!(class.contains("md:text-sm"));
    }

    #[test]
    fn test_ghost_variant_removes_shadow_and_ring_width() {
        let class = input().with(InputVariant::Ghost).build().class;
        assert!(!class.contains("shadow-xs"));
        assert!(!class.contains("focus-visible:ring-[3px]"));
        assert!(class.contains("focus-visible:ring-ring/50"));
        assert!(class.ends_with("border-transparent shadow-none focus-visible:ring-0"));
    }

    #[test]
    fn test_passthrough_attributes_are_forwarded() {
        let props = input()
            .attr("type", "email")
            .attr("placeholder", "you@example.com")
            .build();
        assert_eq!(props.attr("type"), Some("email"));
        assert_eq!(props.attr("placeholder"), Some("you@example.com"));
        assert_eq!(props.attributes.len(), 3);
    }
}

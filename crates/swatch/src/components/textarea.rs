//! Textarea: a multi-line text field.

use once_cell::sync::Lazy;

use super::part;
use crate::styled::Styled;
use crate::table::Recipe;
use crate::Axis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Axis)]
#[axis(name = "size")]
pub enum TextareaSize {
    Sm,
    #[axis(default)]
    Default,
    Lg,
}

/// Which directions the user may drag to resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Axis)]
#[axis(name = "resize")]
pub enum TextareaResize {
    None,
    #[axis(default)]
    Vertical,
    Both,
}

pub static TEXTAREA: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new(
        "flex field-sizing-content min-h-16 w-full rounded-md border border-input \
         bg-transparent shadow-xs transition-[color,box-shadow] outline-none \
         placeholder:text-muted-foreground focus-visible:border-ring \
         focus-visible:ring-[3px] focus-visible:ring-ring/50 disabled:cursor-not-allowed \
         disabled:opacity-50 aria-invalid:border-destructive",
    )
    .axis(Axis::typed([
        (TextareaSize::Sm, "px-2 py-1 text-sm"),
        (TextareaSize::Default, "px-3 py-2 text-base md:text-sm"),
        (TextareaSize::Lg, "px-4 py-3 text-lg"),
    ]))
    .axis(Axis::typed([
        (TextareaResize::None, "resize-none"),
        (TextareaResize::Vertical, "resize-y"),
        (TextareaResize::Both, "resize"),
    ]))
});

pub fn textarea() -> Styled<'static> {
    part(&TEXTAREA, "textarea")
}

pub(super) fn recipes() -> Vec<(&'static str, &'static Recipe)> {
    vec![("textarea", &*TEXTAREA)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::assert_typed_axis;

    #[test]
    fn test_axes_match_enums() {
        assert_typed_axis::<TextareaSize>(&TEXTAREA);
        assert_typed_axis::<TextareaResize>(&TEXTAREA);
    }

    #[test]
    fn test_default_textarea() {
        let class = textarea().build().class;
        assert!(class.ends_with("px-3 py-2 text-base md:text-sm resize-y"));
    }

    #[test]
    fn test_resize_override() {
        let class = textarea()
            .with(TextareaResize::None)
            .class("resize-x")
            .build()
            .class;
        assert!(!class.contains("resize-none"));
        assert!(class.ends_with("resize-x"));
    }

    #[test]
    fn test_rows_passthrough() {
        let props = textarea().attr("rows", "4").build();
        assert_eq!(props.attr("rows"), Some("4"));
    }
}

//! One-time-password field: a row of single-character slots.

use once_cell::sync::Lazy;

use super::part;
use crate::styled::Styled;
use crate::table::Recipe;
use crate::Axis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Axis)]
#[axis(name = "size")]
pub enum OtpSlotSize {
    Sm,
    #[axis(default)]
    Default,
    Lg,
}

pub static ROOT: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new("flex items-center gap-2 has-[:disabled]:opacity-50 disabled:cursor-not-allowed")
});

pub static GROUP: Lazy<Recipe> = Lazy::new(|| Recipe::new("flex items-center"));

pub static SLOT: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new(
        "relative flex items-center justify-center border-y border-r border-input shadow-xs \
         transition-all outline-none first:rounded-l-md first:border-l last:rounded-r-md \
         aria-invalid:border-destructive data-[active=true]:z-10 \
         data-[active=true]:border-ring data-[active=true]:ring-[3px] \
         data-[active=true]:ring-ring/50",
    )
    .axis(Axis::typed([
        (OtpSlotSize::Sm, "h-8 w-8 text-xs"),
        (OtpSlotSize::Default, "h-9 w-9 text-sm"),
        (OtpSlotSize::Lg, "h-11 w-11 text-base"),
    ]))
});

pub static SEPARATOR: Lazy<Recipe> =
    Lazy::new(|| Recipe::new("flex items-center text-muted-foreground"));

pub fn root() -> Styled<'static> {
    part(&ROOT, "otp")
}

pub fn group() -> Styled<'static> {
    part(&GROUP, "otp-group")
}

pub fn slot() -> Styled<'static> {
    part(&SLOT, "otp-slot")
}

/// The separator is decorative but still announced as a separator.
pub fn separator() -> Styled<'static> {
    part(&SEPARATOR, "otp-separator").named("role", "separator")
}

pub(super) fn recipes() -> Vec<(&'static str, &'static Recipe)> {
    vec![
        ("otp", &*ROOT),
        ("otp.group", &*GROUP),
        ("otp.slot", &*SLOT),
        ("otp.separator", &*SEPARATOR),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::assert_typed_axis;

    #[test]
    fn test_axes_match_enums() {
        assert_typed_axis::<OtpSlotSize>(&SLOT);
    }

    #[test]
    fn test_slot_sizes() {
        assert!(slot().build().class.ends_with("h-9 w-9 text-sm"));
        assert!(slot()
            .with(OtpSlotSize::Lg)
            .build()
            .class
            .ends_with("h-11 w-11 text-base"));
    }

    #[test]
    fn test_separator_role_cannot_be_overridden() {
        let props = separator().attr("role", "presentation").build();
        assert_eq!(props.attr("role"), Some("separator"));
        assert_eq!(props.attr("data-slot"), Some("otp-separator"));
    }
}

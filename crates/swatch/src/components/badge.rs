//! Badge: a small inline status label.

use once_cell::sync::Lazy;

use super::part;
use crate::styled::Styled;
use crate::table::Recipe;
use crate::Axis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Axis)]
#[axis(name = "variant")]
pub enum BadgeVariant {
    #[axis(default)]
    Default,
    Secondary,
    Destructive,
    Outline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Axis)]
#[axis(name = "size")]
pub enum BadgeSize {
    Sm,
    #[axis(default)]
    Default,
    Lg,
}

pub static BADGE: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new(
        "inline-flex w-fit shrink-0 items-center justify-center gap-1 overflow-hidden \
         whitespace-nowrap rounded-md border font-medium transition-[color,box-shadow] \
         focus-visible:border-ring focus-visible:ring-[3px] focus-visible:ring-ring/50 \
         [&>svg]:pointer-events-none [&>svg]:size-3",
    )
    .axis(Axis::typed([
        (
            BadgeVariant::Default,
            "border-transparent bg-primary text-primary-foreground [a&]:hover:bg-primary/90",
        ),
        (
            BadgeVariant::Secondary,
            "border-transparent bg-secondary text-secondary-foreground [a&]:hover:bg-secondary/90",
        ),
        (
            BadgeVariant::Destructive,
            "border-transparent bg-destructive text-white [a&]:hover:bg-destructive/90 \
             focus-visible:ring-destructive/20",
        ),
        (
            BadgeVariant::Outline,
            "text-foreground [a&]:hover:bg-accent [a&]:hover:text-accent-foreground",
        ),
    ]))
    .axis(Axis::typed([
        (BadgeSize::Sm, "px-1.5 py-0 text-[10px]"),
        (BadgeSize::Default, "px-2 py-0.5 text-xs"),
        (BadgeSize::Lg, "px-2.5 py-1 text-sm"),
    ]))
});

pub fn badge() -> Styled<'static> {
    part(&BADGE, "badge")
}

pub(super) fn recipes() -> Vec<(&'static str, &'static Recipe)> {
    vec![("badge", &*BADGE)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::assert_typed_axis;
    use crate::resolve::Resolver;
    use crate::AxisValue;

    #[test]
    fn test_axes_match_enums() {
        assert_typed_axis::<BadgeVariant>(&BADGE);
        assert_typed_axis::<BadgeSize>(&BADGE);
    }

    #[test]
    fn test_default_badge() {
        let props = badge().build_with(&Resolver::plain());
        insta::assert_snapshot!(props.class, @"inline-flex w-fit shrink-0 items-center justify-center gap-1 overflow-hidden whitespace-nowrap rounded-md border font-medium transition-[color,box-shadow] focus-visible:border-ring focus-visible:ring-[3px] focus-visible:ring-ring/50 [&>svg]:pointer-events-none [&>svg]:size-3 border-transparent bg-primary text-primary-foreground [a&]:hover:bg-primary/90 px-2 py-0.5 text-xs");
        assert_eq!(props.attr("data-slot"), Some("badge"));
    }

    #[test]
    fn test_destructive_ring_replaces_base_ring_color() {
        let class = badge().with(BadgeVariant::Destructive).build().class;
        assert!(class.contains("focus-visible:ring-destructive/20"));
        assert!(!class.contains("focus-visible:ring-ring/50"));
        assert!(class.contains("focus-visible:ring-[3px]"));
    }

    #[test]
    fn test_override_wins_padding() {
        let class = badge().with(BadgeSize::Lg).class("px-4").build().class;
        assert!(class.ends_with("py-1 text-sm px-4"));
        assert!(!class.contains("px-2.5"));
    }

    #[test]
    fn test_enum_round_trip() {
        assert_eq!(BadgeVariant::Outline.value_name(), "outline");
        assert_eq!(
            BadgeVariant::from_value_name("secondary"),
            Some(BadgeVariant::Secondary)
        );
        assert_eq!(BadgeSize::default(), BadgeSize::Default);
        assert_eq!(BadgeSize::Lg.to_string(), "lg");
    }
}

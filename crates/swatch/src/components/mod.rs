//! Built-in component tables.
//!
//! Every component of the design system is a set of [`Recipe`]s, one per
//! styled part, plus typed axis enums for the parts that vary. Part
//! functions return a [`Styled`] builder already tagged with the part's
//! `data-slot` attribute.
//!
//! Slots and catalog names use the kebab-case component name for the root
//! (or only) part and `<component>-<part>` / `<component>.<part>` for the
//! others: `checkbox`, `checkbox-indicator`, `checkbox.indicator`.
//!
//! Interaction (focus management, keyboard handling, ARIA wiring) belongs
//! to the primitive the props are forwarded to.

pub mod badge;
pub mod checkbox;
pub mod collapsible;
pub mod dialog;
pub mod input;
pub mod label;
pub mod navigation_menu;
pub mod otp;
pub mod popover;
pub mod radio_group;
pub mod slider;
pub mod switch;
pub mod table;
pub mod tabs;
pub mod textarea;

use crate::styled::Styled;
use crate::table::Recipe;

/// Every built-in recipe with its catalog name, grouped by component.
pub fn all() -> Vec<(&'static str, &'static Recipe)> {
    let mut out = Vec::new();
    out.extend(badge::recipes());
    out.extend(checkbox::recipes());
    out.extend(collapsible::recipes());
    out.extend(dialog::recipes());
    out.extend(input::recipes());
    out.extend(label::recipes());
    out.extend(navigation_menu::recipes());
    out.extend(otp::recipes());
    out.extend(popover::recipes());
    out.extend(radio_group::recipes());
    out.extend(slider::recipes());
    out.extend(switch::recipes());
    out.extend(table::recipes());
    out.extend(tabs::recipes());
    out.extend(textarea::recipes());
    out
}

fn part(recipe: &'static Recipe, slot: &'static str) -> Styled<'static> {
    Styled::new(recipe).named("data-slot", slot)
}

#[cfg(test)]
pub(crate) fn assert_typed_axis<V: crate::AxisValue>(recipe: &Recipe) {
    let axis = recipe
        .table()
        .get(V::AXIS)
        .unwrap_or_else(|| panic!("recipe has no '{}' axis", V::AXIS));
    for value in V::VALUES {
        assert!(
            axis.has_value(value),
            "axis '{}' lacks value '{}'",
            V::AXIS,
            value
        );
    }
    assert_eq!(axis.value_names().count(), V::VALUES.len());
    assert_eq!(axis.default(), V::DEFAULT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_builtin_tables_validate() {
        for (name, recipe) in all() {
            assert!(recipe.validate().is_ok(), "{} does not validate", name);
        }
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = all().into_iter().map(|(name, _)| name).collect();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_every_component_is_listed() {
        let components: HashSet<_> = all()
            .into_iter()
            .map(|(name, _)| name.split('.').next().unwrap_or(name))
            .collect();
        assert_eq!(components.len(), 15);
    }

    #[test]
    fn test_no_base_has_duplicate_tokens() {
        for (name, recipe) in all() {
            let tokens: Vec<_> = recipe.base().split_whitespace().collect();
            let unique: HashSet<_> = tokens.iter().collect();
            assert_eq!(tokens.len(), unique.len(), "{} repeats a base token", name);
        }
    }
}

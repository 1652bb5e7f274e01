//! Slider: a draggable thumb on a track.

use once_cell::sync::Lazy;

use super::part;
use crate::styled::Styled;
use crate::table::Recipe;
use crate::Axis;

/// Direction of travel, shared by root, track and range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Axis)]
#[axis(name = "orientation")]
pub enum SliderOrientation {
    #[axis(default)]
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Axis)]
#[axis(name = "size")]
pub enum SliderThumbSize {
    Sm,
    #[axis(default)]
    Default,
    Lg,
}

pub static ROOT: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new(
        "relative flex touch-none select-none items-center data-[disabled]:opacity-50",
    )
    .axis(Axis::typed([
        (SliderOrientation::Horizontal, "w-full"),
        (SliderOrientation::Vertical, "h-full min-h-44 w-auto flex-col"),
    ]))
});

pub static TRACK: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new("relative grow overflow-hidden rounded-full bg-muted").axis(Axis::typed([
        (SliderOrientation::Horizontal, "h-1.5 w-full"),
        (SliderOrientation::Vertical, "h-full w-1.5"),
    ]))
});

pub static RANGE: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new("absolute bg-primary").axis(Axis::typed([
        (SliderOrientation::Horizontal, "h-full"),
        (SliderOrientation::Vertical, "w-full"),
    ]))
});

pub static THUMB: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new(
        "block shrink-0 rounded-full border border-primary bg-white shadow-sm ring-ring/50 \
         transition-[color,box-shadow] hover:ring-4 focus-visible:ring-4 \
         focus-visible:outline-hidden disabled:pointer-events-none disabled:opacity-50",
    )
    .axis(Axis::typed([
        (SliderThumbSize::Sm, "size-3"),
        (SliderThumbSize::Default, "size-4"),
        (SliderThumbSize::Lg, "size-5"),
    ]))
});

pub fn root() -> Styled<'static> {
    part(&ROOT, "slider")
}

pub fn track() -> Styled<'static> {
    part(&TRACK, "slider-track")
}

pub fn range() -> Styled<'static> {
    part(&RANGE, "slider-range")
}

pub fn thumb() -> Styled<'static> {
    part(&THUMB, "slider-thumb")
}

pub(super) fn recipes() -> Vec<(&'static str, &'static Recipe)> {
    vec![
        ("slider", &*ROOT),
        ("slider.track", &*TRACK),
        ("slider.range", &*RANGE),
        ("slider.thumb", &*THUMB),
    ]
}

//! Dialog: a modal window over a dimmed overlay.
//!
//! Only the content panel varies (by width). Header, footer, title,
//! description and close button are fixed.

use once_cell::sync::Lazy;

use super::part;
use crate::styled::Styled;
use crate::table::Recipe;
use crate::Axis;

/// Maximum width of the content panel from the `sm` breakpoint up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Axis)]
#[axis(name = "size")]
pub enum DialogSize {
    Sm,
    #[axis(default)]
    Default,
    Lg,
    Xl,
    Full,
}

pub static OVERLAY: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new(
        "fixed inset-0 z-50 bg-black/50 data-[state=open]:animate-in \
         data-[state=closed]:animate-out data-[state=closed]:fade-out-0 \
         data-[state=open]:fade-in-0",
    )
});

pub static CONTENT: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new(
        "fixed top-[50%] left-[50%] z-50 grid w-full max-w-[calc(100%-2rem)] \
         translate-x-[-50%] translate-y-[-50%] gap-4 rounded-lg border bg-background p-6 \
         shadow-lg duration-200 data-[state=open]:animate-in data-[state=closed]:animate-out \
         data-[state=closed]:fade-out-0 data-[state=open]:fade-in-0 \
         data-[state=closed]:zoom-out-95 data-[state=open]:zoom-in-95",
    )
    .axis(Axis::typed([
        (DialogSize::Sm, "sm:max-w-sm"),
        (DialogSize::Default, "sm:max-w-lg"),
        (DialogSize::Lg, "sm:max-w-2xl"),
        (DialogSize::Xl, "sm:max-w-4xl"),
        (
            DialogSize::Full,
            "h-[calc(100%-2rem)] sm:max-w-[calc(100%-2rem)]",
        ),
    ]))
});

pub static HEADER: Lazy<Recipe> =
    Lazy::new(|| Recipe::new("flex flex-col gap-2 text-center sm:text-left"));

pub static FOOTER: Lazy<Recipe> =
    Lazy::new(|| Recipe::new("flex flex-col-reverse gap-2 sm:flex-row sm:justify-end"));

pub static TITLE: Lazy<Recipe> =
    Lazy::new(|| Recipe::new("text-lg leading-none font-semibold"));

pub static DESCRIPTION: Lazy<Recipe> =
    Lazy::new(|| Recipe::new("text-sm text-muted-foreground"));

pub static CLOSE: Lazy<Recipe> = Lazy::new(|| {
    Recipe::new(
        "absolute top-4 right-4 rounded-xs opacity-70 ring-offset-background \
         transition-opacity hover:opacity-100 focus:ring-2 focus:ring-ring \
         focus:ring-offset-2 focus:outline-hidden disabled:pointer-events-none \
         [&_svg]:pointer-events-none [&_svg]:shrink-0",
    )
});

pub fn overlay() -> Styled<'static> {
    part(&OVERLAY, "dialog-overlay")
}

pub fn content() -> Styled<'static> {
    part(&CONTENT, "dialog-content")
}

pub fn header() -> Styled<'static> {
    part(&HEADER, "dialog-header")
}

pub fn footer() -> Styled<'static> {
    part(&FOOTER, "dialog-footer")
}

pub fn title() -> Styled<'static> {
    part(&TITLE, "dialog-title")
}

pub fn description() -> Styled<'static> {
    part(&DESCRIPTION, "dialog-description")
}

pub fn close() -> Styled<'static> {
    part(&CLOSE, "dialog-close")
}

pub(super) fn recipes() -> Vec<(&'static str, &'static Recipe)> {
    vec![
        ("dialog.overlay", &*OVERLAY),
        ("dialog.content", &*CONTENT),
        ("dialog.header", &*HEADER),
        ("dialog.footer", &*FOOTER),
        ("dialog.title", &*TITLE),
        ("dialog.description", &*DESCRIPTION),
        ("dialog.close", &*CLOSE),
    ]
}

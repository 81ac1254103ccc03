//! System media-query signals.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{MediaQueryListEvent, Window};

use crate::dom::BootError;

const COLOR_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

fn matches(window: &Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map(|list| list.matches())
        .unwrap_or(false)
}

/// One-shot reading of the system dark-mode preference. An unavailable
/// signal reads as "no dark preference".
pub fn prefers_dark(window: &Window) -> bool {
    matches(window, COLOR_SCHEME_QUERY)
}

/// One-shot reading of the reduced-motion preference.
pub fn prefers_reduced_motion(window: &Window) -> bool {
    matches(window, REDUCED_MOTION_QUERY)
}

/// Subscribe to live changes of the system color-scheme preference.
///
/// `handler` receives the new "prefers dark" value. Environments without
/// `matchMedia` simply never deliver a change.
pub fn watch_color_scheme(
    window: &Window,
    mut handler: impl FnMut(bool) + 'static,
) -> Result<(), BootError> {
    let Some(list) = window.match_media(COLOR_SCHEME_QUERY)? else {
        log::debug!("matchMedia unavailable, system theme changes will not be observed");
        return Ok(());
    };

    let closure = Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |event: MediaQueryListEvent| {
        handler(event.matches());
    });
    list.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

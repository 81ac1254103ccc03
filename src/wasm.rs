//! WASM entry point and boot sequence.
//!
//! Everything is wired here once the DOM is ready: accessibility
//! scaffolding first (the theme surface announces through its live
//! region), then the theme controller, click logging, and the decorative
//! effects. A failure in any one part is logged and the rest still boots.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlElement, KeyboardEvent, MouseEvent};
use web_time::Instant;

use crate::a11y;
use crate::analytics;
use crate::controller::ThemeController;
use crate::dom::{self, BootError, DocumentSurface, LocalStorageStore, Page};
use crate::effects;
use crate::perf;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let Some(window) = web_sys::window() else {
        log::error!("no window object, page enhancements disabled");
        return;
    };
    let Some(document) = window.document() else {
        log::error!("no document, page enhancements disabled");
        return;
    };

    // The module may load from <head> before the document finishes
    // parsing; defer the boot until the tree exists.
    if document.ready_state() == "loading" {
        if let Err(e) = dom::on::<Event>(document.as_ref(), "DOMContentLoaded", move |_| boot()) {
            log::error!("failed to defer boot to DOMContentLoaded: {e}");
        }
    } else {
        boot();
    }
}

fn boot() {
    let started = Instant::now();
    log::info!("devlinks enhancements initializing");

    let page = match Page::query() {
        Ok(page) => page,
        Err(e) => {
            log::error!("page boot failed: {e}");
            return;
        }
    };

    let live_region = match a11y::install(&page) {
        Ok(region) => region,
        Err(e) => {
            log::warn!("accessibility scaffolding failed: {e}");
            None
        }
    };

    if let Err(e) = install_theme(&page, live_region) {
        match e {
            BootError::MissingToggle => log::error!("{e}, theme controller disabled"),
            e => log::error!("theme controller failed to start: {e}"),
        }
    }

    if let Err(e) = analytics::install(&page) {
        log::warn!("click logging failed to attach: {e}");
    }
    if let Err(e) = effects::install(&page) {
        log::warn!("decorative effects failed to attach: {e}");
    }
    if let Err(e) = perf::install(&page) {
        log::warn!("timing report failed to attach: {e}");
    }

    log::info!("devlinks enhancements ready in {:?}", started.elapsed());
}

/// Wire the theme controller to the toggle control and the system signal.
fn install_theme(page: &Page, live_region: Option<HtmlElement>) -> Result<(), BootError> {
    let surface = DocumentSurface::new(page, live_region)?;
    let store = LocalStorageStore::new();
    let controller = ThemeController::new(store, surface, dom::prefers_dark(&page.window));
    let controller = Rc::new(RefCell::new(controller));

    // Surface construction already proved the toggle exists.
    let toggle = page.toggle.clone().ok_or(BootError::MissingToggle)?;

    {
        let controller = Rc::clone(&controller);
        dom::on::<MouseEvent>(toggle.as_ref(), "click", move |_| {
            controller.borrow_mut().toggle();
        })?;
    }
    {
        let controller = Rc::clone(&controller);
        dom::on::<KeyboardEvent>(toggle.as_ref(), "keydown", move |event| {
            let key = event.key();
            if key == "Enter" || key == " " {
                // Space would otherwise scroll the page.
                event.prevent_default();
                controller.borrow_mut().toggle();
            }
        })?;
    }
    {
        let controller = Rc::clone(&controller);
        dom::watch_color_scheme(&page.window, move |prefers_dark| {
            controller.borrow_mut().on_system_preference_changed(prefers_dark);
        })?;
    }

    Ok(())
}

//! Advisory startup timing report, enabled on localhost only.

use wasm_bindgen::JsCast;
use web_sys::{Event, PerformanceEntry, Window};

use crate::dom::{self, BootError, Page};

fn is_localhost(window: &Window) -> bool {
    window
        .location()
        .hostname()
        .map(|host| host == "localhost" || host == "127.0.0.1")
        .unwrap_or(false)
}

/// Log paint timings once the page has fully loaded.
pub fn install(page: &Page) -> Result<(), BootError> {
    if !is_localhost(&page.window) {
        return Ok(());
    }

    let window = page.window.clone();
    dom::on::<Event>(page.window.as_ref(), "load", move |_| {
        let Some(performance) = window.performance() else {
            return;
        };
        for entry in performance.get_entries_by_type("paint").iter() {
            if let Ok(entry) = entry.dyn_into::<PerformanceEntry>() {
                log::info!("{}: {:.0}ms", entry.name(), entry.start_time());
            }
        }
        log::info!("page loaded at {:.0}ms", performance.now());
    })
}

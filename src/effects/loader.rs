//! Page loader overlay removal.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::constants::LOADER_HIDE_DELAY_MS;
use crate::dom::{self, BootError, Page};

/// Hide the `.page-loader` overlay once its entry animation has played.
pub fn install(page: &Page) -> Result<(), BootError> {
    let Some(loader) = page
        .document
        .query_selector(".page-loader")?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(());
    };

    dom::after(&page.window, LOADER_HIDE_DELAY_MS, move || {
        if let Err(e) = loader.style().set_property("display", "none") {
            log::warn!("failed to hide page loader: {e:?}");
        }
    })
}

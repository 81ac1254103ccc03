//! The real document as a theme surface.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlMetaElement};

use crate::constants::LIGHT_CLASS;
use crate::controller::ThemeSurface;
use crate::dom::{BootError, Page};
use crate::theme::Mode;

/// [`ThemeSurface`] over the live document: toggle ARIA state, body class
/// flag, `meta[name="theme-color"]`, and the polite live region.
///
/// Individual DOM mutations that fail after boot are logged and skipped
/// rather than surfaced; nothing here can crash the page.
pub struct DocumentSurface {
    document: Document,
    body: HtmlElement,
    toggle: HtmlElement,
    live_region: Option<HtmlElement>,
    chrome_meta: Option<HtmlMetaElement>,
}

impl DocumentSurface {
    /// Build the surface from the queried page.
    ///
    /// Fails with [`BootError::MissingToggle`] when the page carries no
    /// toggle control, which disables the theme controller for the
    /// session.
    pub fn new(page: &Page, live_region: Option<HtmlElement>) -> Result<Self, BootError> {
        let toggle = page.toggle.clone().ok_or(BootError::MissingToggle)?;
        Ok(Self {
            document: page.document.clone(),
            body: page.body.clone(),
            toggle,
            live_region,
            chrome_meta: None,
        })
    }

    /// The `meta[name="theme-color"]` element, created on first use if the
    /// page does not carry one.
    fn chrome_meta(&mut self) -> Option<&HtmlMetaElement> {
        if self.chrome_meta.is_none() {
            self.chrome_meta = self.find_or_create_chrome_meta();
        }
        self.chrome_meta.as_ref()
    }

    fn find_or_create_chrome_meta(&self) -> Option<HtmlMetaElement> {
        let existing = self
            .document
            .query_selector(r#"meta[name="theme-color"]"#)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlMetaElement>().ok());
        if existing.is_some() {
            return existing;
        }

        let meta = self
            .document
            .create_element("meta")
            .ok()?
            .dyn_into::<HtmlMetaElement>()
            .ok()?;
        meta.set_name("theme-color");
        let head = self.document.head()?;
        if let Err(e) = head.append_child(&meta) {
            log::warn!("failed to attach theme-color meta element: {e:?}");
            return None;
        }
        Some(meta)
    }
}

impl ThemeSurface for DocumentSurface {
    fn set_toggle_pressed(&mut self, pressed: bool) {
        let value = if pressed { "true" } else { "false" };
        if let Err(e) = self.toggle.set_attribute("aria-pressed", value) {
            log::warn!("failed to update toggle ARIA state: {e:?}");
        }
    }

    fn set_root_flag(&mut self, mode: Mode) {
        let classes = self.body.class_list();
        let result = match mode {
            Mode::Light => classes.add_1(LIGHT_CLASS),
            Mode::Dark => classes.remove_1(LIGHT_CLASS),
        };
        if let Err(e) = result {
            log::warn!("failed to update body theme class: {e:?}");
        }
    }

    fn set_chrome_color(&mut self, color: &str) {
        if let Some(meta) = self.chrome_meta() {
            meta.set_content(color);
        }
    }

    fn announce(&mut self, message: &str) {
        if let Some(region) = &self.live_region {
            region.set_text_content(Some(message));
        }
    }
}

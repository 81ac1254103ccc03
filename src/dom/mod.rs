//! DOM plumbing shared by the wasm-only modules.
//!
//! [`Page`] is queried once at boot and describes the capabilities the
//! enhancement layer works against (toggle control, link cards, social
//! links). Installers receive it by reference instead of repeating ad hoc
//! global queries per module.

mod media;
mod storage;
mod surface;

pub use media::{prefers_dark, prefers_reduced_motion, watch_color_scheme};
pub use storage::LocalStorageStore;
pub use surface::DocumentSurface;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, EventTarget, HtmlElement, Window};

use crate::constants::TOGGLE_ID;

/// Errors raised while wiring the enhancement layer to the document.
///
/// None of these crash the page: the entry point logs them and renders
/// whatever could still be installed.
#[derive(Debug, thiserror::Error)]
pub enum BootError {
    #[error("no window object available")]
    NoWindow,

    #[error("document is not available")]
    NoDocument,

    #[error("document has no body")]
    NoBody,

    #[error("document has no head")]
    NoHead,

    #[error("theme toggle control #theme-toggle not found")]
    MissingToggle,

    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for BootError {
    fn from(value: JsValue) -> Self {
        BootError::Js(format!("{value:?}"))
    }
}

/// The UI surface the enhancement layer operates on, queried once at boot.
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub body: HtmlElement,
    /// The theme toggle control. Its absence disables the theme
    /// controller for the session but nothing else.
    pub toggle: Option<HtmlElement>,
    pub link_cards: Vec<HtmlElement>,
    pub social_links: Vec<HtmlElement>,
}

impl Page {
    /// Query the document for everything the installers need.
    pub fn query() -> Result<Self, BootError> {
        let window = web_sys::window().ok_or(BootError::NoWindow)?;
        let document = window.document().ok_or(BootError::NoDocument)?;
        let body = document.body().ok_or(BootError::NoBody)?;

        let toggle = document
            .get_element_by_id(TOGGLE_ID)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());

        let link_cards = collect(&document, ".link-card")?;
        let social_links = collect(&document, ".social-link")?;

        Ok(Self {
            window,
            document,
            body,
            toggle,
            link_cards,
            social_links,
        })
    }
}

/// Collect all elements matching `selector`, skipping non-HTML nodes.
fn collect(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, BootError> {
    let nodes = document.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
            elements.push(el);
        }
    }
    Ok(elements)
}

/// Register a page-lifetime event listener.
///
/// The closure is handed to the browser and kept alive for the rest of
/// the session; nothing in this crate ever unregisters a listener.
pub fn on<E>(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), BootError>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `callback` once after `delay_ms`.
pub fn after(window: &Window, delay_ms: i32, callback: impl FnOnce() + 'static) -> Result<(), BootError> {
    let closure = Closure::once_into_js(callback);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.unchecked_ref(),
        delay_ms,
    )?;
    Ok(())
}

/// Append a `<style>` element with the given rules to the document head.
pub fn append_style(document: &Document, css: &str) -> Result<(), BootError> {
    let style = document.create_element("style")?;
    style.set_text_content(Some(css));
    document
        .head()
        .ok_or(BootError::NoHead)?
        .append_child(&style)?;
    Ok(())
}

/// Create a `<div>` as an [`HtmlElement`].
pub fn create_div(document: &Document) -> Result<HtmlElement, BootError> {
    document
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| BootError::Js("created element is not an HtmlElement".into()))
}

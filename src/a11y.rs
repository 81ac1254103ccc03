//! Accessibility scaffolding: skip link, keyboard-navigation flag, and
//! the polite live region used for theme announcements.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent};

use crate::constants::KEYBOARD_NAV_CLASS;
use crate::dom::{self, BootError, Page};

const SKIP_LINK_CSS: &str = "\
.skip-link {
    position: absolute;
    top: -100px;
    left: 0;
    background: var(--clr-primary);
    color: white;
    padding: 0.5rem 1rem;
    text-decoration: none;
    z-index: 10000;
}
.skip-link:focus {
    top: 0;
}";

const SR_ONLY_CSS: &str = "\
.sr-only {
    position: absolute;
    width: 1px;
    height: 1px;
    padding: 0;
    margin: -1px;
    overflow: hidden;
    clip: rect(0, 0, 0, 0);
    white-space: nowrap;
    border-width: 0;
}";

/// Install all affordances. Returns the live region so the theme surface
/// can announce transitions through it.
pub fn install(page: &Page) -> Result<Option<HtmlElement>, BootError> {
    add_skip_link(page)?;
    install_keyboard_flag(page)?;
    let region = create_live_region(page)?;
    Ok(Some(region))
}

/// Skip link as first body child, targeting the main content region.
fn add_skip_link(page: &Page) -> Result<(), BootError> {
    let link = page
        .document
        .create_element("a")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| BootError::Js("skip link is not an HtmlElement".into()))?;
    link.set_attribute("href", "#main-content")?;
    link.set_class_name("skip-link");
    link.set_text_content(Some("Skip to main content"));

    dom::append_style(&page.document, SKIP_LINK_CSS)?;
    page.body
        .insert_before(&link, page.body.first_child().as_ref())?;

    if let Some(main) = page.document.query_selector("main")? {
        if main.id().is_empty() {
            main.set_id("main-content");
        }
    }
    Ok(())
}

/// Body class toggled between keyboard and pointer navigation, for
/// focus-visible styling.
fn install_keyboard_flag(page: &Page) -> Result<(), BootError> {
    {
        let body = page.body.clone();
        dom::on::<KeyboardEvent>(page.document.as_ref(), "keydown", move |event| {
            if event.key() == "Tab" {
                if let Err(e) = body.class_list().add_1(KEYBOARD_NAV_CLASS) {
                    log::warn!("failed to flag keyboard navigation: {e:?}");
                }
            }
        })?;
    }
    {
        let body = page.body.clone();
        dom::on::<MouseEvent>(page.document.as_ref(), "mousedown", move |_| {
            let _ = body.class_list().remove_1(KEYBOARD_NAV_CLASS);
        })?;
    }
    Ok(())
}

/// Visually hidden `aria-live=polite` region appended to the body.
fn create_live_region(page: &Page) -> Result<HtmlElement, BootError> {
    let region = dom::create_div(&page.document)?;
    region.set_attribute("aria-live", "polite")?;
    region.set_attribute("aria-atomic", "true")?;
    region.set_class_name("sr-only");

    dom::append_style(&page.document, SR_ONLY_CSS)?;
    page.body.append_child(&region)?;
    Ok(region)
}

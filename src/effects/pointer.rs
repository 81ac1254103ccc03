//! Pointer-driven effects: background glow, magnetic hover, click
//! ripple, and scroll parallax.

use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, MouseEvent};

use crate::constants::{MOUSE_ACTIVE_CLASS, RIPPLE_DURATION_MS};
use crate::dom::{self, BootError, Page};
use crate::effect_math;

pub fn install(page: &Page) -> Result<(), BootError> {
    install_glow(page)?;
    install_magnetic(page)?;
    install_ripple(page)?;
    install_parallax(page)?;
    Ok(())
}

/// Track the pointer and expose its position as `--mouse-x`/`--mouse-y`
/// custom properties on the document root.
fn install_glow(page: &Page) -> Result<(), BootError> {
    let Some(root) = page
        .document
        .document_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(());
    };

    let window = page.window.clone();
    let body = page.body.clone();
    dom::on::<MouseEvent>(page.document.as_ref(), "mousemove", move |event| {
        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let x = effect_math::pointer_percent(f64::from(event.client_x()), width);
        let y = effect_math::pointer_percent(f64::from(event.client_y()), height);

        let style = root.style();
        let _ = style.set_property("--mouse-x", &format!("{x:.2}%"));
        let _ = style.set_property("--mouse-y", &format!("{y:.2}%"));
        let _ = body.class_list().add_1(MOUSE_ACTIVE_CLASS);
    })
}

/// Social links lean toward the pointer while hovered.
fn install_magnetic(page: &Page) -> Result<(), BootError> {
    for link in &page.social_links {
        {
            let link = link.clone();
            let target = link.clone();
            dom::on::<MouseEvent>(target.as_ref(), "mousemove", move |event| {
                let rect = link.get_bounding_client_rect();
                let (tx, ty) = effect_math::magnetic_translation(
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                    rect.left(),
                    rect.top(),
                    rect.width(),
                    rect.height(),
                );
                let transform =
                    format!("translateY(-6px) scale(1.1) translate({tx:.1}px, {ty:.1}px)");
                let _ = link.style().set_property("transform", &transform);
            })?;
        }
        {
            let link = link.clone();
            let target = link.clone();
            dom::on::<MouseEvent>(target.as_ref(), "mouseleave", move |_| {
                let _ = link.style().remove_property("transform");
            })?;
        }
    }
    Ok(())
}

/// Link cards flash a ripple class on click.
fn install_ripple(page: &Page) -> Result<(), BootError> {
    for card in &page.link_cards {
        let card = card.clone();
        let target = card.clone();
        let window = page.window.clone();
        dom::on::<MouseEvent>(target.as_ref(), "click", move |_| {
            if let Err(e) = card.class_list().add_1("ripple") {
                log::warn!("failed to start ripple: {e:?}");
                return;
            }
            let card = card.clone();
            if let Err(e) = dom::after(&window, RIPPLE_DURATION_MS, move || {
                let _ = card.class_list().remove_1("ripple");
            }) {
                log::warn!("failed to schedule ripple cleanup: {e}");
            }
        })?;
    }
    Ok(())
}

/// Profile and link items drift upward as the page scrolls.
fn install_parallax(page: &Page) -> Result<(), BootError> {
    let elements = {
        let nodes = page.document.query_selector_all(".profile, .links-item")?;
        let mut elements = Vec::with_capacity(nodes.length() as usize);
        for i in 0..nodes.length() {
            if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                elements.push(el);
            }
        }
        elements
    };
    if elements.is_empty() {
        return Ok(());
    }

    let window = page.window.clone();
    dom::on::<Event>(page.window.as_ref(), "scroll", move |_| {
        let scrolled = window.page_y_offset().unwrap_or(0.0);
        for (index, element) in elements.iter().enumerate() {
            let offset = effect_math::parallax_offset(scrolled, index);
            let _ = element
                .style()
                .set_property("transform", &format!("translateY({offset:.2}px)"));
        }
    })
}

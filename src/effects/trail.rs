//! Cursor trail: a chain of dots chasing the pointer.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{HtmlElement, MouseEvent};

use crate::constants::{CURSOR_DOT_COUNT, CURSOR_TRAIL_MIN_WIDTH, TRAIL_EASING};
use crate::dom::{self, BootError, Page};
use crate::effect_math::{self, TrailDot};

struct TrailState {
    dots: Vec<TrailDot>,
    target: (f64, f64),
}

pub fn install(page: &Page) -> Result<(), BootError> {
    let width = page
        .window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    if width < CURSOR_TRAIL_MIN_WIDTH {
        log::debug!("viewport too narrow, skipping cursor trail");
        return Ok(());
    }

    let mut elements = Vec::with_capacity(CURSOR_DOT_COUNT);
    for index in 0..CURSOR_DOT_COUNT {
        let dot = dom::create_div(&page.document)?;
        dot.set_class_name("cursor-dot");
        dot.set_attribute("style", &effect_math::trail_dot_style(index))?;
        page.body.append_child(&dot)?;
        elements.push(dot);
    }

    let state = Rc::new(RefCell::new(TrailState {
        dots: vec![TrailDot::origin(); CURSOR_DOT_COUNT],
        target: (0.0, 0.0),
    }));

    {
        let state = Rc::clone(&state);
        dom::on::<MouseEvent>(page.document.as_ref(), "mousemove", move |event| {
            state.borrow_mut().target =
                (f64::from(event.client_x()), f64::from(event.client_y()));
        })?;
    }

    start_animation(page, state, elements)
}

/// Drive the dots with a self-rescheduling animation-frame callback.
/// The callback cell and the closure reference each other, which keeps
/// the loop alive for the page session.
fn start_animation(
    page: &Page,
    state: Rc<RefCell<TrailState>>,
    elements: Vec<HtmlElement>,
) -> Result<(), BootError> {
    let window = page.window.clone();
    let cell: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let handle = Rc::clone(&cell);

    *cell.borrow_mut() = Some(Closure::new(move || {
        {
            let mut state = state.borrow_mut();
            let (tx, ty) = state.target;
            effect_math::step_trail(&mut state.dots, tx, ty, TRAIL_EASING);
            for (element, dot) in elements.iter().zip(&state.dots) {
                let transform = format!("translate({:.2}px, {:.2}px)", dot.x - 4.0, dot.y - 4.0);
                let _ = element.style().set_property("transform", &transform);
            }
        }
        if let Some(callback) = handle.borrow().as_ref() {
            let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
        }
    }));

    if let Some(callback) = cell.borrow().as_ref() {
        page.window
            .request_animation_frame(callback.as_ref().unchecked_ref())?;
    }
    Ok(())
}

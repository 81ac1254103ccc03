//! Decorative, stateless presentational effects.
//!
//! Each installer attaches its listeners and owns whatever state it
//! needs; none of them share anything with the rest of the page. All
//! motion effects respect the reduced-motion preference.

mod loader;
mod particles;
mod pointer;
mod trail;

use crate::dom::{self, BootError, Page};

pub fn install(page: &Page) -> Result<(), BootError> {
    // The loader overlay must disappear even when motion is reduced.
    loader::install(page)?;

    if dom::prefers_reduced_motion(&page.window) {
        log::debug!("reduced motion requested, skipping decorative effects");
        return Ok(());
    }

    pointer::install(page)?;
    trail::install(page)?;
    particles::install(page)?;
    Ok(())
}

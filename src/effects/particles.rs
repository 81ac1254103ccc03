//! Floating background particles.

use crate::constants::PARTICLE_COUNT;
use crate::dom::{self, BootError, Page};
use crate::effect_math::{self, PARTICLE_KEYFRAMES};

pub fn install(page: &Page) -> Result<(), BootError> {
    let Some(container) = page.document.query_selector(".particles")? else {
        log::debug!("no particles container, skipping particle effect");
        return Ok(());
    };

    dom::append_style(&page.document, PARTICLE_KEYFRAMES)?;

    for _ in 0..PARTICLE_COUNT {
        let particle = dom::create_div(&page.document)?;
        particle.set_class_name("particle");
        particle.set_attribute("style", &random_particle_style())?;
        container.append_child(&particle)?;
    }

    // Extra floating-orb layer behind the content.
    let orb = dom::create_div(&page.document)?;
    orb.set_class_name("particles-extra");
    page.body.append_child(&orb)?;

    Ok(())
}

fn random_particle_style() -> String {
    effect_math::particle_style(
        js_sys::Math::random() * 100.0,
        js_sys::Math::random() * 100.0,
        js_sys::Math::random() * 4.0 + 2.0,
        js_sys::Math::random() * 25.0,
        js_sys::Math::random() * 15.0 + 20.0,
        js_sys::Math::random() > 0.5,
        js_sys::Math::random() * 2.0,
    )
}

//! Advisory click logging for link cards and social links.
//!
//! Log lines only; there is no analytics backend and nothing is queued
//! or sent anywhere.

use web_sys::MouseEvent;

use crate::dom::{self, BootError, Page};

pub fn install(page: &Page) -> Result<(), BootError> {
    for card in &page.link_cards {
        let label = card
            .query_selector(".link-text")
            .ok()
            .flatten()
            .and_then(|el| el.text_content())
            .unwrap_or_else(|| "unlabeled".to_string());
        dom::on::<MouseEvent>(card.as_ref(), "click", move |_| {
            log::info!("link clicked: {label}");
        })?;
    }

    for link in &page.social_links {
        let label = link
            .get_attribute("aria-label")
            .unwrap_or_else(|| "unlabeled".to_string());
        dom::on::<MouseEvent>(link.as_ref(), "click", move |_| {
            log::info!("social link clicked: {label}");
        })?;
    }

    Ok(())
}

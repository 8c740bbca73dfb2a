//! Price extraction for a single service offer.

use crate::error::{Result, WatchError};
use scraper::{ElementRef, Selector};

/// Marketing token the site appends to some prices ("$3.99 HD").
const QUALITY_TOKEN: &str = "HD";

/// Builds the selector for a price element identified by its class name.
pub fn price_selector(class_name: &str) -> Result<Selector> {
    let selector = format!("div.{class_name}");
    Selector::parse(&selector).map_err(|e| WatchError::Selector {
        selector: selector.clone(),
        message: e.to_string(),
    })
}

/// Drops the quality token and surrounding whitespace from raw price text.
pub fn normalize_price(raw: &str) -> String {
    raw.replace(QUALITY_TOKEN, "").trim().to_string()
}

/// Extracts the normalized price from one offer fragment.
///
/// A fragment without a price element is a markup error; the caller does
/// not try to recover from it.
pub fn extract_price(offer: ElementRef<'_>, price_selector: &Selector) -> Result<String> {
    let element = offer
        .select(price_selector)
        .next()
        .ok_or_else(|| WatchError::markup("offer has no price element"))?;
    let text = element.text().collect::<String>();
    Ok(normalize_price(&text))
}

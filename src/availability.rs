use crate::error::Result;
use crate::report::WatchOptions;
use crate::{PageSelector, WatchType};
use scraper::Html;
use std::collections::HashSet;

/// Collects `"<service> | <price>"` strings for one watch type on a movie page.
///
/// Offers without a service logo are skipped. Duplicates are dropped,
/// keeping the first occurrence. A page with no block for the watch type
/// yields an empty list.
pub fn collect_offers(
    selector: &dyn PageSelector,
    page: &Html,
    watch_type: WatchType,
) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut offers = Vec::new();

    for block in selector.category_blocks(page, watch_type) {
        for element in selector.offer_elements(block) {
            let Some(name) = selector.service_name(element)? else {
                tracing::trace!(%watch_type, "skipping offer without service logo");
                continue;
            };
            let price = selector.price(element)?;
            tracing::debug!(%watch_type, service = %name, %price, "found offer");

            let offer = format!("{name} | {price}");
            if seen.insert(offer.clone()) {
                offers.push(offer);
            }
        }
    }

    Ok(offers)
}

/// Runs [`collect_offers`] for stream, rent and buy, in that order.
pub fn collect_watch_options(selector: &dyn PageSelector, page: &Html) -> Result<WatchOptions> {
    Ok(WatchOptions {
        stream: collect_offers(selector, page, WatchType::Stream)?,
        rent: collect_offers(selector, page, WatchType::Rent)?,
        buy: collect_offers(selector, page, WatchType::Buy)?,
    })
}

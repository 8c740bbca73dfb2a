//! Markup contract for JustWatch movie pages.
//! Movie page: https://www.justwatch.com/us/movie/<slug>
//! Each watch type has a price-comparison row of service tiles; a tile with a
//! provider logo (`<img title="...">`) is an offer, its price sits in a div below.

use crate::error::{Result, WatchError};
use crate::price::{extract_price, price_selector};
use crate::{PageSelector, WatchType};
use scraper::{ElementRef, Html, Selector};

const ROW_CLASS: &str = "price-comparison__grid__row";
const ELEMENT_CLASS: &str = "price-comparison__grid__row__element";
const PRICE_CLASS: &str = "price-comparison__grid__row__price";

/// Row selector for one watch type, e.g.
/// `div.price-comparison__grid__row.price-comparison__grid__row--stream.price-comparison__grid__row--block`.
fn row_selector_str(watch_type: WatchType) -> String {
    format!(
        "div.{ROW_CLASS}.{ROW_CLASS}--{}.{ROW_CLASS}--block",
        watch_type.tag()
    )
}

fn parse(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| WatchError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// [`PageSelector`] for JustWatch's price comparison grid.
pub struct JustWatchSelector {
    stream_rows: Selector,
    rent_rows: Selector,
    buy_rows: Selector,
    element: Selector,
    logo: Selector,
    price: Selector,
}

impl JustWatchSelector {
    pub fn new() -> Result<Self> {
        Ok(Self {
            stream_rows: parse(&row_selector_str(WatchType::Stream))?,
            rent_rows: parse(&row_selector_str(WatchType::Rent))?,
            buy_rows: parse(&row_selector_str(WatchType::Buy))?,
            element: parse(&format!("div.{ELEMENT_CLASS}"))?,
            logo: parse("img")?,
            price: price_selector(PRICE_CLASS)?,
        })
    }

    fn rows(&self, watch_type: WatchType) -> &Selector {
        match watch_type {
            WatchType::Stream => &self.stream_rows,
            WatchType::Rent => &self.rent_rows,
            WatchType::Buy => &self.buy_rows,
        }
    }
}

impl PageSelector for JustWatchSelector {
    fn category_blocks<'a>(&self, page: &'a Html, watch_type: WatchType) -> Vec<ElementRef<'a>> {
        page.select(self.rows(watch_type)).collect()
    }

    fn offer_elements<'a>(&self, block: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        block.select(&self.element).collect()
    }

    fn service_name(&self, offer: ElementRef<'_>) -> Result<Option<String>> {
        let Some(img) = offer.select(&self.logo).next() else {
            return Ok(None);
        };
        let title = img
            .value()
            .attr("title")
            .ok_or_else(|| WatchError::markup("service logo has no title attribute"))?;
        Ok(Some(title.trim().to_string()))
    }

    fn price(&self, offer: ElementRef<'_>) -> Result<String> {
        extract_price(offer, &self.price)
    }
}

use scraper::{ElementRef, Html};
use std::fmt;

pub mod availability;
pub mod config;
pub mod error;
pub mod fetch;
pub mod input;
pub mod justwatch;
pub mod logger;
pub mod pipeline;
pub mod price;
pub mod report;

pub use availability::{collect_offers, collect_watch_options};
pub use error::{Result, WatchError};
pub use fetch::{HttpFetcher, PageFetcher};
pub use input::{Columns, MovieRequest, read_requests};
pub use justwatch::JustWatchSelector;
pub use pipeline::Pipeline;
pub use report::{MovieEntry, Report, WatchOptions};

/// How a viewer can get hold of a movie through a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WatchType {
    Stream,
    Rent,
    Buy,
}

impl WatchType {
    /// Lowercase tag used by the site's class names, e.g. "stream".
    pub fn tag(self) -> &'static str {
        match self {
            WatchType::Stream => "stream",
            WatchType::Rent => "rent",
            WatchType::Buy => "buy",
        }
    }
}

impl fmt::Display for WatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Everything that knows about a particular site's markup.
///
/// When the site changes its HTML, only the implementation of this trait
/// has to change; the collector and the pipeline stay as they are.
pub trait PageSelector {
    /// Blocks on the page that hold the offers for one watch type.
    fn category_blocks<'a>(&self, page: &'a Html, watch_type: WatchType) -> Vec<ElementRef<'a>>;

    /// Offer elements inside one category block.
    fn offer_elements<'a>(&self, block: ElementRef<'a>) -> Vec<ElementRef<'a>>;

    /// Service display name for an offer, or `None` when the offer is not a
    /// real service (no logo image) and should be skipped.
    fn service_name(&self, offer: ElementRef<'_>) -> Result<Option<String>>;

    /// Normalized price text for an offer.
    fn price(&self, offer: ElementRef<'_>) -> Result<String>;
}

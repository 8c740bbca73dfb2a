//! Drives one run: requests in, dated report file out.

use crate::availability::collect_watch_options;
use crate::error::Result;
use crate::fetch::PageFetcher;
use crate::input::{Columns, MovieRequest, read_requests};
use crate::report::{Report, WatchOptions};
use crate::PageSelector;
use chrono::NaiveDate;
use scraper::Html;
use std::path::{Path, PathBuf};

pub struct Pipeline<F, S> {
    fetcher: F,
    selector: S,
    run_date: NaiveDate,
}

impl<F: PageFetcher, S: PageSelector> Pipeline<F, S> {
    pub fn new(fetcher: F, selector: S, run_date: NaiveDate) -> Self {
        Self {
            fetcher,
            selector,
            run_date,
        }
    }

    /// Loads the requests, scrapes every movie and writes the report into
    /// `output_dir`. Nothing is written unless every row succeeds.
    pub async fn run(&self, input: &Path, columns: &Columns, output_dir: &Path) -> Result<PathBuf> {
        let requests = read_requests(input, columns)?;
        tracing::info!(rows = requests.len(), input = %input.display(), "loaded movie requests");

        let report = self.scrape(&requests).await?;
        let json = report.to_json_pretty()?;
        tracing::info!("report:\n{json}");

        let path = report.write_to_dir(output_dir)?;
        tracing::info!(movies = report.movies().len(), path = %path.display(), "report written");
        Ok(path)
    }

    /// Scrapes each request in order, one page at a time.
    pub async fn scrape(&self, requests: &[MovieRequest]) -> Result<Report> {
        let mut report = Report::new(self.run_date);

        for (row, request) in requests.iter().enumerate() {
            tracing::info!(row = row + 1, title = %request.title, url = %request.url, "fetching movie page");
            let body = self.fetcher.fetch(&request.url).await?;

            let options = self.extract(&body)?;
            tracing::debug!(
                title = %request.title,
                stream = options.stream.len(),
                rent = options.rent.len(),
                buy = options.buy.len(),
                "extracted watch options"
            );

            let WatchOptions { stream, rent, buy } = options;
            report.add_movie(&request.title, &request.url, stream, rent, buy);
        }

        Ok(report)
    }

    // Keeps the parsed document out of the async state.
    fn extract(&self, body: &str) -> Result<WatchOptions> {
        let page = Html::parse_document(body);
        collect_watch_options(&self.selector, &page)
    }
}

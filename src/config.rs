use crate::fetch::DEFAULT_USER_AGENT;
use crate::input::{Columns, DEFAULT_TITLE_COLUMN, DEFAULT_URL_COLUMN};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Scrape JustWatch for where each requested movie can be streamed,
/// rented or bought, and write a dated JSON report.
#[derive(Debug, Clone, Parser)]
#[command(name = "movie-watchability", version)]
pub struct Cli {
    /// Spreadsheet (xlsx/xls/ods workbook or CSV, header row first) listing the movies to look up
    #[arg(short, long, default_value = "movie_requests.xlsx")]
    pub input: PathBuf,

    /// Existing directory the `<MM-DD-YYYY>.json` report is written into
    #[arg(short, long, default_value = "movie-watchoptions")]
    pub output_dir: PathBuf,

    /// Header of the movie title column
    #[arg(long, default_value = DEFAULT_TITLE_COLUMN)]
    pub title_column: String,

    /// Header of the movie page URL column
    #[arg(long, default_value = DEFAULT_URL_COLUMN)]
    pub url_column: String,

    /// User-Agent sent with every page request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Per-request timeout in seconds (default: wait forever)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Abort on non-success HTTP status instead of parsing the body anyway
    #[arg(long)]
    pub fail_on_http_error: bool,

    /// Log extraction details
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn columns(&self) -> Columns {
        Columns {
            title: self.title_column.clone(),
            url: self.url_column.clone(),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

use crate::error::{Result, WatchError};
use chrono::NaiveDate;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Run date format used for the report stamp and the output file name.
pub const RUN_DATE_FORMAT: &str = "%m-%d-%Y";

/// Offers for one movie, grouped by watch type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WatchOptions {
    #[serde(rename = "Stream")]
    pub stream: Vec<String>,
    #[serde(rename = "Rent")]
    pub rent: Vec<String>,
    #[serde(rename = "Buy")]
    pub buy: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieEntry {
    #[serde(rename = "Movie Title")]
    pub title: String,
    #[serde(rename = "Movie URL")]
    pub url: String,
    #[serde(rename = "Watch Options")]
    pub watch_options: WatchOptions,
}

/// The dated availability report for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    #[serde(rename = "Metadata")]
    run_date: String,
    #[serde(rename = "Movies")]
    movies: Vec<MovieEntry>,
}

impl Report {
    pub fn new(run_date: NaiveDate) -> Self {
        Self {
            run_date: run_date.format(RUN_DATE_FORMAT).to_string(),
            movies: Vec::new(),
        }
    }

    /// Appends one movie, after any already recorded.
    pub fn add_movie(
        &mut self,
        title: impl Into<String>,
        url: impl Into<String>,
        stream: Vec<String>,
        rent: Vec<String>,
        buy: Vec<String>,
    ) {
        self.movies.push(MovieEntry {
            title: title.into(),
            url: url.into(),
            watch_options: WatchOptions { stream, rent, buy },
        });
    }

    pub fn run_date(&self) -> &str {
        &self.run_date
    }

    pub fn movies(&self) -> &[MovieEntry] {
        &self.movies
    }

    /// `<MM-DD-YYYY>.json`
    pub fn file_name(&self) -> String {
        format!("{}.json", self.run_date)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the report into `dir` and returns the file path.
    ///
    /// The directory must already exist.
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        let json = self.to_json_pretty()?;
        let path = dir.join(self.file_name());
        std::fs::write(&path, json).map_err(|source| WatchError::Write {
            path: path.display().to_string(),
            source,
        })?;
        Ok(path)
    }
}

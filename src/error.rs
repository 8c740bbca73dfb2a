use thiserror::Error;

/// Every way a run can fail. Each one aborts the whole run before the
/// report file is written.
#[derive(Error, Debug)]
pub enum WatchError {
    #[error("failed to read input spreadsheet: {0}")]
    Input(#[from] csv::Error),

    #[error("failed to read input workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("input workbook {path} has no worksheet")]
    EmptyWorkbook { path: String },

    #[error("input spreadsheet has no column named {column:?}")]
    MissingColumn { column: String },

    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid selector {selector:?}: {message}")]
    Selector { selector: String, message: String },

    #[error("unexpected page markup: {message}")]
    Markup { message: String },

    #[error("failed to write report to {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
}

impl WatchError {
    pub(crate) fn markup(message: impl Into<String>) -> Self {
        WatchError::Markup {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, WatchError>;

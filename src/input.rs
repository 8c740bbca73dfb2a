//! Reads the movie request spreadsheet.
//!
//! Excel/OpenDocument workbooks (first worksheet) and CSV exports are both
//! accepted; the first row holds the headers. Only the title and URL
//! columns are read; every other column is ignored.

use crate::error::{Result, WatchError};
use calamine::{Data, Reader, open_workbook_auto};
use std::io::Read;
use std::path::Path;

pub const DEFAULT_TITLE_COLUMN: &str = "Movie Name";
pub const DEFAULT_URL_COLUMN: &str = "JustWatch URL";

const WORKBOOK_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// One row of the input spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRequest {
    pub title: String,
    pub url: String,
}

/// Header names of the title and URL columns.
#[derive(Debug, Clone)]
pub struct Columns {
    pub title: String,
    pub url: String,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE_COLUMN.to_string(),
            url: DEFAULT_URL_COLUMN.to_string(),
        }
    }
}

fn column_index<'h>(mut headers: impl Iterator<Item = &'h str>, column: &str) -> Result<usize> {
    headers
        .position(|h| h.trim() == column)
        .ok_or_else(|| WatchError::MissingColumn {
            column: column.to_string(),
        })
}

fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            WORKBOOK_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Reads all requests from a spreadsheet file, in row order.
///
/// Workbooks are recognized by extension; anything else is read as CSV.
pub fn read_requests(path: &Path, columns: &Columns) -> Result<Vec<MovieRequest>> {
    if is_workbook(path) {
        return read_workbook(path, columns);
    }
    let reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    collect_requests(reader, columns)
}

/// Reads requests from CSV text.
pub fn read_requests_from<R: Read>(input: R, columns: &Columns) -> Result<Vec<MovieRequest>> {
    let reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);
    collect_requests(reader, columns)
}

fn collect_requests<R: Read>(
    mut reader: csv::Reader<R>,
    columns: &Columns,
) -> Result<Vec<MovieRequest>> {
    let headers = reader.headers()?.clone();
    let title_idx = column_index(headers.iter(), &columns.title)?;
    let url_idx = column_index(headers.iter(), &columns.url)?;

    let mut requests = Vec::new();
    for record in reader.records() {
        let record = record?;
        // Short rows read as empty cells.
        let title = record.get(title_idx).unwrap_or("");
        let url = record.get(url_idx).unwrap_or("");
        requests.push(request(title.to_string(), url));
    }

    Ok(requests)
}

fn read_workbook(path: &Path, columns: &Columns) -> Result<Vec<MovieRequest>> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| WatchError::EmptyWorkbook {
            path: path.display().to_string(),
        })??;

    let mut rows = sheet.rows();
    let headers: Vec<String> = rows
        .next()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .unwrap_or_default();
    let title_idx = column_index(headers.iter().map(String::as_str), &columns.title)?;
    let url_idx = column_index(headers.iter().map(String::as_str), &columns.url)?;

    Ok(rows
        .map(|row| request(cell_text(row, title_idx), &cell_text(row, url_idx)))
        .collect())
}

fn cell_text(row: &[Data], idx: usize) -> String {
    row.get(idx).map(|cell| cell.to_string()).unwrap_or_default()
}

// Titles are kept exactly as entered; stray whitespace around a URL is dropped.
fn request(title: String, url: &str) -> MovieRequest {
    MovieRequest {
        title,
        url: url.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_rows_in_order() {
        let data = "\
Movie Name,JustWatch URL,Requested By
Heat,https://www.justwatch.com/us/movie/heat,sam
Alien,https://www.justwatch.com/us/movie/alien,alex
";
        let requests = read_requests_from(data.as_bytes(), &Columns::default()).unwrap();
        assert_eq!(
            requests,
            vec![
                MovieRequest {
                    title: "Heat".into(),
                    url: "https://www.justwatch.com/us/movie/heat".into(),
                },
                MovieRequest {
                    title: "Alien".into(),
                    url: "https://www.justwatch.com/us/movie/alien".into(),
                },
            ]
        );
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let data = "JustWatch URL,Movie Name\nhttp://site/x,\"Movie, The\"\n";
        let requests = read_requests_from(data.as_bytes(), &Columns::default()).unwrap();
        assert_eq!(requests[0].title, "Movie, The");
        assert_eq!(requests[0].url, "http://site/x");
    }

    #[test]
    fn test_missing_column() {
        let data = "Title,JustWatch URL\nHeat,http://site/heat\n";
        let err = read_requests_from(data.as_bytes(), &Columns::default()).unwrap_err();
        match err {
            WatchError::MissingColumn { column } => assert_eq!(column, "Movie Name"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_custom_columns() {
        let columns = Columns {
            title: "Title".into(),
            url: "Link".into(),
        };
        let data = "Link,Title\nhttp://site/a,A\n";
        let requests = read_requests_from(data.as_bytes(), &columns).unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].title, "A");
    }

    #[test]
    fn test_read_requests_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Movie Name,JustWatch URL").unwrap();
        writeln!(file, "Heat,http://site/heat").unwrap();

        let requests = read_requests(file.path(), &Columns::default()).unwrap();
        assert_eq!(requests.len(), 1);
    }

    #[test]
    fn test_title_is_not_trimmed() {
        let data = "Movie Name,JustWatch URL\n Heat , http://site/heat \n";
        let requests = read_requests_from(data.as_bytes(), &Columns::default()).unwrap();
        assert_eq!(requests[0].title, " Heat ");
        assert_eq!(requests[0].url, "http://site/heat");
    }

    #[test]
    fn test_read_requests_from_xlsx() {
        let fixture = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/movie_requests.xlsx");
        let requests = read_requests(&fixture, &Columns::default()).unwrap();
        assert_eq!(
            requests,
            vec![
                MovieRequest {
                    title: "Heat".into(),
                    url: "https://www.justwatch.com/us/movie/heat".into(),
                },
                MovieRequest {
                    title: "1917".into(),
                    url: "https://www.justwatch.com/us/movie/1917".into(),
                },
            ]
        );
    }

    #[test]
    fn test_xlsx_missing_column() {
        let fixture = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/movie_requests.xlsx");
        let columns = Columns {
            title: "Title".into(),
            url: DEFAULT_URL_COLUMN.into(),
        };
        let err = read_requests(&fixture, &columns).unwrap_err();
        assert!(matches!(err, WatchError::MissingColumn { ref column } if column == "Title"));
    }

    #[test]
    fn test_workbook_detected_by_extension() {
        assert!(is_workbook(Path::new("movie_requests.xlsx")));
        assert!(is_workbook(Path::new("old/REQUESTS.XLS")));
        assert!(!is_workbook(Path::new("movie_requests.csv")));
        assert!(!is_workbook(Path::new("movie_requests")));
    }

    #[test]
    fn test_missing_workbook_is_workbook_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_requests(&dir.path().join("nope.xlsx"), &Columns::default()).unwrap_err();
        assert!(matches!(err, WatchError::Workbook(_)));
    }

    #[test]
    fn test_missing_file_is_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_requests(&dir.path().join("nope.csv"), &Columns::default()).unwrap_err();
        assert!(matches!(err, WatchError::Input(_)));
    }
}

//! CSV download of the collected records.
//!
//! The file is built entirely in the browser and handed to the user as a
//! `data:` URI; nothing is uploaded or stored.

use serde::Serialize;

use crate::types::{AppResult, BookRecord, ScrapeError};

const HEADER: [&str; 4] = ["Title", "Price", "Source", "Link"];

#[derive(Serialize)]
struct ExportRow<'a> {
    title: &'a str,
    price: &'a str,
    source: &'a str,
    link: &'a str,
}

/// Write `(source, record)` rows as CSV, header line first.
pub fn to_csv<'s, 'a, I>(rows: I) -> AppResult<String>
where
    I: IntoIterator<Item = (&'s str, &'a BookRecord)>,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for (source, book) in rows {
        writer.serialize(ExportRow {
            title: book.title,
            price: book.price,
            source,
            link: book.link,
        })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ScrapeError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ScrapeError::Export(e.to_string()))
}

/// `href` value that downloads `csv` as a file.
pub fn csv_data_uri(csv: &str) -> String {
    let encoded: String = js_sys::encode_uri_component(csv).into();
    format!("data:text/csv;charset=utf-8,{}", encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{MOCK_BOOKS, SOURCES};
    use crate::state::{Phase, RunState};

    #[test]
    fn test_header_only_when_empty() {
        let csv = to_csv(std::iter::empty::<(&str, &BookRecord)>()).unwrap();
        assert_eq!(csv, "Title,Price,Source,Link\n");
    }

    #[test]
    fn test_rows_follow_header() {
        let rows = SOURCES.iter().copied().zip(MOCK_BOOKS.iter()).take(2);
        let csv = to_csv(rows).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Title,Price,Source,Link");
        assert_eq!(lines[1], "The Great Gatsby,$12.99,bookstore.com,https://example.com/gatsby");
        assert_eq!(
            lines[2],
            "To Kill a Mockingbird,$14.50,amazon.com,https://example.com/mockingbird"
        );
    }

    #[test]
    fn test_export_from_run_state_rows() {
        let state = RunState {
            phase: Phase::Done,
            progress: 100,
            collected: MOCK_BOOKS[..3].to_vec(),
            collected_count: 3,
            ..RunState::default()
        };

        let csv = to_csv(state.rows()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Title,Price,Source,Link",
                "The Great Gatsby,$12.99,bookstore.com,https://example.com/gatsby",
                "To Kill a Mockingbird,$14.50,amazon.com,https://example.com/mockingbird",
                "1984,$13.25,goodreads.com,https://example.com/1984",
            ]
        );
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let book = BookRecord {
            id: "9",
            title: "Eats, Shoots & Leaves",
            price: "$9.99",
            link: "https://example.com/eats",
        };
        let csv = to_csv([("example.com", &book)]).unwrap();

        assert!(csv.contains("\"Eats, Shoots & Leaves\",$9.99"));
    }
}

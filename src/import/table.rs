//! Tabular input loading
//!
//! Both accepted input formats funnel into the same `RawTable` shape: a
//! header row plus string cell rows. CSV comes in through the `csv` crate
//! with flexible record lengths (real exports have ragged rows);
//! spreadsheets are read with `calamine`, first sheet only, every cell
//! stringified.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;

use super::ImportError;

/// An unprocessed table: header row plus raw string cells
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Parse comma-separated content from any reader.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, ImportError> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            rows.push(record.iter().map(|cell| cell.to_string()).collect());
        }

        if headers.is_empty() || rows.is_empty() {
            return Err(ImportError::EmptyFile);
        }

        Ok(Self { headers, rows })
    }

    /// Load a CSV file from disk.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, ImportError> {
        Self::from_csv_reader(File::open(path)?)
    }

    /// Load the first sheet of an `.xlsx`/`.xls` workbook.
    pub fn from_workbook_path(path: impl AsRef<Path>) -> Result<Self, ImportError> {
        let mut workbook = open_workbook_auto(path)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(ImportError::EmptyFile)??;

        let mut rows = range
            .rows()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect::<Vec<String>>());

        let headers: Vec<String> = match rows.next() {
            Some(header_row) => header_row.iter().map(|h| h.trim().to_string()).collect(),
            None => return Err(ImportError::EmptyFile),
        };
        let rows: Vec<Vec<String>> = rows.collect();

        if headers.is_empty() || rows.is_empty() {
            return Err(ImportError::EmptyFile);
        }

        Ok(Self { headers, rows })
    }

    /// Load by file extension: `.xlsx`/`.xls` as a workbook, anything
    /// else as CSV.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ImportError> {
        let path = path.as_ref();
        let is_workbook = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                ext == "xlsx" || ext == "xls"
            })
            .unwrap_or(false);

        if is_workbook {
            Self::from_workbook_path(path)
        } else {
            Self::from_csv_path(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_csv_reader() {
        let content = "Name,Basic Salary\nA,50000\nB,60000\n";
        let table = RawTable::from_csv_reader(content.as_bytes()).unwrap();
        assert_eq!(table.headers, vec!["Name", "Basic Salary"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["A", "50000"]);
    }

    #[test]
    fn test_ragged_rows_are_accepted() {
        let content = "Name,Basic Salary,HRA\nA,50000\nB,60000,10000,extra\n";
        let table = RawTable::from_csv_reader(content.as_bytes()).unwrap();
        assert_eq!(table.rows[0].len(), 2);
        assert_eq!(table.rows[1].len(), 4);
    }

    #[test]
    fn test_empty_content() {
        assert!(matches!(
            RawTable::from_csv_reader("".as_bytes()),
            Err(ImportError::EmptyFile)
        ));
        assert!(matches!(
            RawTable::from_csv_reader("Name,Basic Salary\n".as_bytes()),
            Err(ImportError::EmptyFile)
        ));
    }
}

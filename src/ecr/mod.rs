//! ECR (Electronic Challan-cum-Return) file formats
//!
//! Two interchange encodings of the same 14-field record: the regulator's
//! `#~#`-delimited text format and a spreadsheet-friendly CSV variant. Both
//! decoders tolerate the legacy 11-field layout that predates the EDLI and
//! administrative charge columns.

mod codec;
pub mod csv;

pub use codec::{decode_file, decode_line, encode_file, encode_line};

use thiserror::Error;

/// Field separator of the delimited ECR text format
pub const ECR_SEPARATOR: &str = "#~#";

/// Comment marker for header and legend lines
pub const COMMENT_MARKER: char = '#';

/// Minimum number of fields in any decodable ECR line (legacy layout)
pub const LEGACY_FIELD_COUNT: usize = 11;

/// Field count of the current layout
pub const CURRENT_FIELD_COUNT: usize = 14;

/// Column names for the comment legend, in file order
pub const ECR_COLUMNS: &[&str] = &[
    "UAN",
    "Name",
    "Gross Wages",
    "EPF Wages",
    "EPS Wages",
    "EDLI Wages",
    "EPF EE",
    "EPS",
    "EPF ER",
    "EDLI",
    "Admin Charge",
    "EDLI Admin",
    "NCP Days",
    "Refund Advances",
];

/// Header row of the CSV variant (serial number column prepended)
pub const CSV_COLUMNS: &[&str] = &[
    "Sl.No",
    "UAN",
    "Name",
    "Gross Wages",
    "EPF Wages",
    "EPS Wages",
    "EDLI Wages",
    "EPF EE",
    "EPS",
    "EPF ER",
    "EDLI",
    "Admin Charge",
    "EDLI Admin",
    "NCP Days",
    "Refund Advances",
];

#[derive(Debug, Error)]
pub enum EcrError {
    #[error("line {line}: invalid ECR format, expected at least {} fields, found {found}", LEGACY_FIELD_COUNT)]
    TooFewFields { line: usize, found: usize },

    #[error("no data rows found in ECR content")]
    Empty,
}

/// Month names for export filenames
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[((month.clamp(1, 12)) - 1) as usize]
}

/// Filename for an ECR text export, e.g. `ECR_January_2026.txt`
pub fn ecr_filename(month: u32, year: i32) -> String {
    format!("ECR_{}_{}.txt", month_name(month), year)
}

/// Filename for a CSV export, e.g. `PF_Data_January_2026.csv`
pub fn csv_filename(month: u32, year: i32) -> String {
    format!("PF_Data_{}_{}.csv", month_name(month), year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_filenames() {
        assert_eq!(ecr_filename(1, 2026), "ECR_January_2026.txt");
        assert_eq!(csv_filename(12, 2025), "PF_Data_December_2025.csv");
    }
}

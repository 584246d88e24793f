//! Payroll file import pipeline
//!
//! Raw tabular input flows through row sanitization, header repair,
//! column classification and record building, ending in a batch of
//! normalized employee records plus advisory warnings. The pipeline is
//! best-effort: malformed cells fall back to documented defaults and
//! reconciliation mismatches are reported, never fatal. Only structural
//! problems (empty file, zero data rows, zero usable headers) abort.

mod builder;
mod classifier;
mod reconcile;
mod sanitizer;
mod table;
mod template;

pub use builder::{build_record, classify_row, label_from_header, ClassifiedRow};
pub use classifier::{analyze_headers, classify, ColumnCategory, HeaderAnalysis};
pub use reconcile::{reconcile, QuantityCheck, ReconciledTotals, TotalsValidation};
pub use sanitizer::{clean_header, clean_headers, is_data_row, sanitize_rows};
pub use table::RawTable;
pub use template::{template_csv, TEMPLATE_FILENAME};

use log::{debug, info, warn};
use thiserror::Error;

use crate::employee::{CompanySnapshot, EmployeeRecord};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("file is empty or no data found")]
    EmptyFile,

    #[error("no valid employee data found after cleaning; check if the file contains actual data rows")]
    NoDataRows,

    #[error("no valid headers found in file")]
    NoHeaders,

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Workbook(#[from] calamine::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Outcome of one import run
#[derive(Debug)]
pub struct ImportSummary {
    /// Records built from surviving rows, in input order
    pub records: Vec<EmployeeRecord>,

    /// Advisory warnings: header analysis plus reconciliation mismatches
    pub warnings: Vec<String>,

    /// Rows dropped by sanitization
    pub skipped_rows: usize,
}

/// Run the full import pipeline over a loaded table.
///
/// `existing_count` is the number of records already stored; generated
/// `EMP####` identifiers continue from it. The caller commits the
/// returned records in one batch (`EmployeeStore::extend`), so a failure
/// here leaves prior state untouched.
pub fn import_table(
    table: &RawTable,
    company: &CompanySnapshot,
    existing_count: usize,
) -> Result<ImportSummary, ImportError> {
    if table.headers.is_empty() && table.rows.is_empty() {
        return Err(ImportError::EmptyFile);
    }

    let data_rows = sanitize_rows(&table.rows);
    if data_rows.is_empty() {
        return Err(ImportError::NoDataRows);
    }
    let skipped_rows = table.rows.len() - data_rows.len();

    let headers = clean_headers(&table.headers);
    if headers.iter().all(|h| h.is_empty()) {
        return Err(ImportError::NoHeaders);
    }

    let analysis = analyze_headers(&headers);
    let mut warnings = analysis.warnings;

    let mut records = Vec::with_capacity(data_rows.len());
    for (index, row) in data_rows.iter().enumerate() {
        let (record, validation, unknown_headers) =
            build_record(&headers, row, index, existing_count, company);

        for unknown in &unknown_headers {
            debug!(
                "row {}: unrecognized column '{}' treated as earning",
                index + 1,
                unknown
            );
        }
        for message in validation.warnings() {
            warn!("row {} ({}): {}", index + 1, record.name, message);
            warnings.push(format!("Row {}: {}", index + 1, message));
        }

        records.push(record);
    }

    info!(
        "imported {} records ({} rows skipped, {} warnings)",
        records.len(),
        skipped_rows,
        warnings.len()
    );

    Ok(ImportSummary {
        records,
        warnings,
        skipped_rows,
    })
}

//! Tolerant parsers for free-text spreadsheet cell values
//!
//! Real-world payroll exports carry currency symbols, thousands separators
//! and half a dozen regional date notations. Every parser here resolves bad
//! input to a documented default instead of an error; the import pipeline
//! must never abort on a single malformed cell.

mod numeric;
mod dates;

pub use numeric::parse_amount;
pub use dates::{parse_date, parse_pay_period};

//! Payroll System - Ingestion and statutory PF/ECR calculation engine
//!
//! This library provides:
//! - Tolerant CSV/spreadsheet ingestion with heuristic column classification
//! - Employee compensation records with itemized earnings and deductions
//! - Reconciliation of declared vs. computed payroll totals
//! - EPFO-compliant Provident Fund contribution calculation
//! - ECR (Electronic Challan-cum-Return) file encoding and decoding

pub mod parse;
pub mod import;
pub mod employee;
pub mod pf;
pub mod ecr;
pub mod store;

// Re-export commonly used types
pub use employee::{CompensationItem, CompanySnapshot, EmployeeRecord, EmployeeStore};
pub use import::{ColumnCategory, ImportError, ImportSummary, RawTable};
pub use pf::{PfContribution, PfRecord, PfStore, PfTotals};
pub use ecr::EcrError;

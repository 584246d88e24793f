//! Employee record data structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single itemized earning or deduction line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompensationItem {
    /// Display label, e.g. "Basic Salary" or "Income Tax"
    pub label: String,

    /// Amount in whole currency units (never negative)
    pub amount: f64,
}

impl CompensationItem {
    pub fn new(label: impl Into<String>, amount: f64) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// Company identity captured at record creation time.
///
/// Each employee record owns an independent copy so that historical
/// payslips stay stable when the global company settings change later.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySnapshot {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city_pincode: String,
    #[serde(default)]
    pub country: String,
    /// Reference to the company logo (data URL or file path)
    #[serde(default)]
    pub logo_ref: String,
    #[serde(default)]
    pub pan_number: String,
    #[serde(default)]
    pub tan_number: String,
}

/// A single employee's compensation record for one pay period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    /// Employer-assigned identifier (generated EMP#### when absent)
    pub employee_id: String,

    pub name: String,

    /// Universal Account Number, 12 digits when present
    #[serde(default)]
    pub uan: String,

    /// Pay period as "YYYY-MM"
    pub pay_period: String,

    pub pay_date: NaiveDate,

    #[serde(default)]
    pub paid_days: f64,

    #[serde(default)]
    pub loss_of_pay_days: f64,

    /// Itemized earnings, insertion order (never empty)
    pub earnings: Vec<CompensationItem>,

    /// Itemized deductions, insertion order
    pub deductions: Vec<CompensationItem>,

    /// Gross pay (sum of earnings, or a validated declared total)
    pub gross: f64,

    pub total_deductions: f64,

    /// Always gross - total_deductions
    pub net: f64,

    #[serde(default)]
    pub department: String,

    #[serde(default)]
    pub designation: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub bank_name: String,

    #[serde(default)]
    pub bank_account: String,

    #[serde(default)]
    pub bank_ifsc: String,

    #[serde(default)]
    pub pan_number: String,

    /// Owned company snapshot captured at creation
    pub company: CompanySnapshot,
}

impl EmployeeRecord {
    /// Sum of itemized earnings (may differ from `gross` when a validated
    /// declared total was preferred)
    pub fn earnings_total(&self) -> f64 {
        self.earnings.iter().map(|item| item.amount).sum()
    }

    /// Sum of itemized deductions
    pub fn deductions_total(&self) -> f64 {
        self.deductions.iter().map(|item| item.amount).sum()
    }
}

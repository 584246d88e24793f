//! Building employee records from sanitized rows
//!
//! A row becomes a record in two steps: `classify_row` routes each
//! header/value pair into identity info, itemized earnings/deductions or
//! declared totals, then `build_record` resolves identity fields by
//! probing the info map under prioritized alias keys and reconciles the
//! totals.

use std::collections::HashMap;

use crate::employee::{CompanySnapshot, CompensationItem, EmployeeRecord};
use crate::parse::{parse_amount, parse_date, parse_pay_period};

use super::classifier::{classify, ColumnCategory};
use super::reconcile::{reconcile, TotalsValidation};

/// One row routed into semantic buckets
#[derive(Debug, Default)]
pub struct ClassifiedRow {
    /// Identity fields keyed by lowercased header
    pub info: HashMap<String, String>,
    pub earnings: Vec<CompensationItem>,
    pub deductions: Vec<CompensationItem>,
    /// Declared aggregates keyed by lowercased header
    pub totals: HashMap<String, f64>,
    /// Unrecognized headers whose positive amounts were taken as earnings
    pub unknown_headers: Vec<String>,
}

/// Values that are instructional noise rather than data
fn is_instructional_value(value: &str) -> bool {
    let lowered = value.trim().to_lowercase();
    lowered.contains("instruction")
        || lowered.contains("template")
        || lowered == "not provided"
        || lowered == "n/a"
        || lowered == "-"
}

/// Derive a display label from a header: strip punctuation, title-case
/// each word, words of length <= 2 upper-cased so acronyms survive
/// ("PF", "ID"; "HRA" becomes "Hra").
pub fn label_from_header(header: &str) -> String {
    let cleaned: String = header
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .map(|word| {
            if word.chars().count() <= 2 {
                word.to_uppercase()
            } else {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => {
                        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                    }
                    None => String::new(),
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Route one row's header/value pairs into semantic buckets.
pub fn classify_row(headers: &[String], row: &[String]) -> ClassifiedRow {
    let mut classified = ClassifiedRow::default();
    let empty = String::new();

    for (index, header) in headers.iter().enumerate() {
        if header.is_empty() {
            continue;
        }
        let value = row.get(index).unwrap_or(&empty);
        if is_instructional_value(value) {
            continue;
        }

        let amount = parse_amount(value);
        let label = label_from_header(header);

        match classify(header) {
            ColumnCategory::Info => {
                let trimmed = value.trim();
                if !trimmed.is_empty() {
                    classified.info.insert(header.to_lowercase(), trimmed.to_string());
                }
            }
            ColumnCategory::Earning => {
                // Basic salary is kept even at zero; it anchors the record
                if amount > 0.0 || label.to_lowercase().contains("basic") {
                    classified.earnings.push(CompensationItem::new(label, amount));
                }
            }
            ColumnCategory::Deduction => {
                if amount > 0.0 {
                    classified.deductions.push(CompensationItem::new(label, amount));
                }
            }
            ColumnCategory::Total => {
                if amount > 0.0 {
                    classified.totals.insert(header.to_lowercase(), amount);
                }
            }
            ColumnCategory::Other => {
                // Unknown columns with positive amounts are assumed earnings
                if amount > 0.0 {
                    classified.earnings.push(CompensationItem::new(label, amount));
                    classified.unknown_headers.push(header.clone());
                }
            }
        }
    }

    classified
}

fn probe<'a>(info: &'a HashMap<String, String>, aliases: &[&str]) -> Option<&'a str> {
    aliases
        .iter()
        .find_map(|key| info.get(*key).map(String::as_str))
}

fn probe_or<'a>(info: &'a HashMap<String, String>, aliases: &[&str], default: &'a str) -> &'a str {
    probe(info, aliases).unwrap_or(default)
}

/// Build a full employee record from one classified row.
///
/// `row_index` is the zero-based position within this import;
/// `existing_count` is the number of records already in the store, used
/// to continue the generated `EMP####` sequence. Returns the record and
/// the totals validation for warning reports.
pub fn build_record(
    headers: &[String],
    row: &[String],
    row_index: usize,
    existing_count: usize,
    company: &CompanySnapshot,
) -> (EmployeeRecord, TotalsValidation, Vec<String>) {
    let classified = classify_row(headers, row);
    let info = &classified.info;

    let name = probe(info, &["name", "employee name"])
        .map(str::to_string)
        .unwrap_or_else(|| format!("Employee {}", row_index + 1));

    let employee_id = probe(info, &["employee", "id", "code", "employeeid", "employee id"])
        .map(str::to_string)
        .unwrap_or_else(|| format!("EMP{:04}", existing_count + row_index + 1));

    let uan = probe_or(
        info,
        &["uan", "uancertificate", "universal account number"],
        "",
    )
    .to_string();

    let paid_days = parse_amount(probe_or(info, &["paid days", "paid", "days"], ""));
    let loss_of_pay_days = parse_amount(probe_or(info, &["lop days", "lop", "loss"], ""));

    let pay_date = parse_date(probe_or(info, &["pay date", "date", "paydate"], ""));
    let pay_period = parse_pay_period(probe_or(info, &["pay period", "period", "month"], ""));

    let mut earnings = classified.earnings;
    if earnings.is_empty() {
        // A record always carries at least one earning line
        earnings.push(CompensationItem::new("Basic", 0.0));
    }
    let deductions = classified.deductions;

    let totals = reconcile(&earnings, &deductions, &classified.totals);

    let record = EmployeeRecord {
        employee_id,
        name,
        uan,
        pay_period,
        pay_date,
        paid_days,
        loss_of_pay_days,
        earnings,
        deductions,
        gross: totals.gross,
        total_deductions: totals.total_deductions,
        net: totals.net,
        department: probe_or(info, &["department"], "General").to_string(),
        designation: probe_or(info, &["designation"], "Employee").to_string(),
        email: probe_or(info, &["email"], "").to_string(),
        phone: probe_or(info, &["phone", "mobile"], "").to_string(),
        bank_name: probe_or(info, &["bank", "bank name"], "").to_string(),
        bank_account: probe_or(info, &["account", "account number"], "").to_string(),
        bank_ifsc: probe_or(info, &["ifsc", "ifsc code"], "").to_string(),
        pan_number: probe_or(info, &["pan"], "").to_string(),
        company: company.clone(),
    };

    (record, totals.validation, classified.unknown_headers)
}

//! Heuristic column classification for payroll spreadsheet headers
//!
//! Headers in real payroll exports are free text ("Gross Earn", "PF",
//! "Special Allowance"). Classification is keyword matching over a
//! normalized header, with the priority order encoded as an ordered rule
//! table evaluated top to bottom, first match wins. Aggregate/total checks
//! run before deduction and info checks so headers like "Total Deductions"
//! never land in a generic bucket; "basic"/"salary" are pinned to earning
//! because the Basic Salary column is structurally mandatory for PF
//! computation downstream.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Semantic category of a spreadsheet column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnCategory {
    /// Identity and period fields (name, id, dates, bank details)
    Info,
    /// Itemized earning
    Earning,
    /// Itemized deduction
    Deduction,
    /// Declared aggregate (gross, total deductions, net)
    Total,
    /// Unrecognized column
    Other,
}

/// Aggregate/total keywords, checked first
const TOTAL_KEYWORDS: &[&str] = &[
    "gross", "total", "earnings", "deductions", "net", "payable", "earn",
];

/// Deduction keywords for Indian payroll
const DEDUCTION_KEYWORDS: &[&str] = &[
    "tax", "income", "tds", "pf", "provident", "fund", "professional", "pt",
    "esi", "insurance", "health", "loan", "advance", "recovery",
    "deduction", "other", "labour", "welfare", "pension", "gratuity", "lic",
    "security", "canteen", "club", "union", "donation", "contribution",
];

/// Identity/info keywords (not part of pay calculations)
const INFO_KEYWORDS: &[&str] = &[
    "name", "employee", "id", "code", "period", "date", "day", "days",
    "month", "year", "pay", "department", "designation", "location",
    "account", "bank", "ifsc", "pan", "uan", "esi number",
];

/// Earning keywords for Indian payroll
const EARNING_KEYWORDS: &[&str] = &[
    "basic", "salary", "hra", "house", "rent", "allowance", "special", "conveyance",
    "medical", "education", "lta", "leave", "travel", "bonus", "incentive",
    "overtime", "shift", "night", "arrears", "commission", "performance",
    "allowences", "children", "gratuity", "reimbursement", "other", "miscellaneous",
    "dearness", "city", "project", "food", "uniform", "telephone", "internet",
    "transport", "car", "driver", "petrol", "entertainment", "newspaper", "gift",
];

fn contains_any(header: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| header.contains(keyword))
}

/// One entry of the ordered classification table
struct ClassificationRule {
    /// Does the rule fire for this normalized header?
    applies: fn(&str) -> bool,

    /// Category once the rule fires (may inspect the header again for
    /// total/net overrides)
    resolve: fn(&str) -> ColumnCategory,
}

/// Priority order is the order of this table; evaluation stops at the
/// first rule whose predicate fires.
const RULES: &[ClassificationRule] = &[
    // 1. Aggregates outrank everything
    ClassificationRule {
        applies: |header| contains_any(header, TOTAL_KEYWORDS),
        resolve: |_| ColumnCategory::Total,
    },
    // 2. Deductions outrank info so "Professional Tax" is never just info
    ClassificationRule {
        applies: |header| contains_any(header, DEDUCTION_KEYWORDS),
        resolve: |header| {
            if header.contains("total") || header.contains("net") {
                ColumnCategory::Total
            } else {
                ColumnCategory::Deduction
            }
        },
    },
    // 3. Identity and period fields
    ClassificationRule {
        applies: |header| contains_any(header, INFO_KEYWORDS),
        resolve: |_| ColumnCategory::Info,
    },
    // 4. LOP and paid-day counters are info regardless of other matches
    ClassificationRule {
        applies: |header| {
            header.contains("lop")
                || header.contains("loss")
                || (header.contains("paid") && header.contains("day"))
        },
        resolve: |_| ColumnCategory::Info,
    },
    // 5. Earnings; basic/salary pinned, gross/total combinations override
    ClassificationRule {
        applies: |header| contains_any(header, EARNING_KEYWORDS),
        resolve: |header| {
            if header.contains("basic") || header.contains("salary") {
                ColumnCategory::Earning
            } else if header.contains("total") || header.contains("gross") {
                ColumnCategory::Total
            } else {
                ColumnCategory::Earning
            }
        },
    },
];

/// Normalize a header: ASCII lowercase, letters and spaces only, collapsed
/// whitespace
fn normalize(header: &str) -> String {
    let lowered: String = header
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .map(|c| if c.is_ascii_alphabetic() { c } else { ' ' })
        .collect();
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Classify a raw header string.
///
/// Pure and deterministic: the result depends only on the header text,
/// never on the rest of the header set.
pub fn classify(header: &str) -> ColumnCategory {
    let normalized = normalize(header);
    if normalized.is_empty() {
        return ColumnCategory::Other;
    }

    for rule in RULES {
        if (rule.applies)(&normalized) {
            return (rule.resolve)(&normalized);
        }
    }

    ColumnCategory::Other
}

/// Classification of a full header set plus structural warnings
#[derive(Debug, Clone)]
pub struct HeaderAnalysis {
    /// Raw header string to its category
    pub classifications: HashMap<String, ColumnCategory>,

    /// Advisory warnings about missing expected columns
    pub warnings: Vec<String>,
}

/// Classify every header and flag missing name/earning columns.
pub fn analyze_headers(headers: &[String]) -> HeaderAnalysis {
    let mut classifications = HashMap::new();
    let mut warnings = Vec::new();

    for header in headers {
        classifications.insert(header.clone(), classify(header));
    }

    let has_name = headers.iter().any(|h| {
        classify(h) == ColumnCategory::Info && h.to_ascii_lowercase().contains("name")
    });
    let has_earnings = headers
        .iter()
        .any(|h| classify(h) == ColumnCategory::Earning);

    if !has_name {
        warnings.push("No 'Name' column found. Using placeholder names.".to_string());
    }
    if !has_earnings {
        warnings.push(
            "No earnings columns found. Check if Basic Salary column exists.".to_string(),
        );
    }

    HeaderAnalysis {
        classifications,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_headers() {
        for header in ["Name", "Employee ID", "Pay Period", "Pay Date", "UAN", "Bank Name", "IFSC Code", "PAN"] {
            assert_eq!(classify(header), ColumnCategory::Info, "{header}");
        }
    }

    #[test]
    fn test_earning_headers() {
        for header in ["Basic Salary", "HRA", "Special Allowance", "Conveyance", "Overtime", "Gift"] {
            assert_eq!(classify(header), ColumnCategory::Earning, "{header}");
        }
    }

    #[test]
    fn test_deduction_headers() {
        for header in ["Income Tax", "PF", "Provident Fund", "Professional Tax", "ESI", "TDS", "Loan Recovery"] {
            assert_eq!(classify(header), ColumnCategory::Deduction, "{header}");
        }
    }

    #[test]
    fn test_total_headers() {
        for header in ["Gross Earnings", "Total Deductions", "Net Pay", "Take Home Payable", "Gross"] {
            assert_eq!(classify(header), ColumnCategory::Total, "{header}");
        }
    }

    #[test]
    fn test_totals_outrank_deductions() {
        // "Total Deductions" contains deduction keywords but is an aggregate
        assert_eq!(classify("Total Deductions"), ColumnCategory::Total);
        assert_eq!(classify("Net Salary Payable"), ColumnCategory::Total);
    }

    #[test]
    fn test_basic_salary_is_pinned_to_earning() {
        assert_eq!(classify("Basic Salary"), ColumnCategory::Earning);
        assert_eq!(classify("Salary"), ColumnCategory::Earning);
    }

    #[test]
    fn test_lop_and_paid_days_are_info() {
        assert_eq!(classify("LOP Days"), ColumnCategory::Info);
        assert_eq!(classify("Paid Days"), ColumnCategory::Info);
        assert_eq!(classify("Loss of Pay"), ColumnCategory::Info);
    }

    #[test]
    fn test_unknown_headers() {
        assert_eq!(classify("Zzz Unknown Column"), ColumnCategory::Other);
        assert_eq!(classify(""), ColumnCategory::Other);
        assert_eq!(classify("###"), ColumnCategory::Other);
    }

    #[test]
    fn test_normalization_ignores_punctuation_and_case() {
        assert_eq!(classify("  BASIC-SALARY!!"), classify("basic salary"));
        assert_eq!(classify("H.R.A."), ColumnCategory::Earning);
    }

    #[test]
    fn test_classification_is_idempotent() {
        for header in ["Name", "Basic Salary", "PF", "Gross Earnings", "Mystery"] {
            assert_eq!(classify(header), classify(header));
        }
    }

    #[test]
    fn test_analyze_warns_on_missing_columns() {
        let headers: Vec<String> = ["Foo", "Bar"].iter().map(|s| s.to_string()).collect();
        let analysis = analyze_headers(&headers);
        assert_eq!(analysis.warnings.len(), 2);

        let good: Vec<String> = ["Name", "Basic Salary"].iter().map(|s| s.to_string()).collect();
        let analysis = analyze_headers(&good);
        assert!(analysis.warnings.is_empty());
    }
}

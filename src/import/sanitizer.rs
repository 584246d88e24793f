//! Row and header sanitization
//!
//! Payroll exports arrive with comment rows, embedded instructions and
//! placeholder cells; headers come back garbled from OCR or copy-paste.
//! Everything here is lossy by intent: a row either carries real data or
//! it is dropped, and a corrupted header is repaired to its first
//! recognizable part.

/// Cell values that carry no data
const PLACEHOLDERS: &[&str] = &["", "Not Provided", "N/A", "-"];

/// Substrings (over the joined lowercased row) marking instructional rows
const INSTRUCTION_MARKERS: &[&str] = &["instruction", "template", "required columns"];

/// Separators tried, in order, when repairing a concatenated header
const HEADER_SEPARATORS: &[char] = &['|', ';', '\\', '/', '&'];

/// Recognized payroll keywords used to truncate corrupted headers
const KNOWN_PATTERNS: &[&str] = &[
    "name", "employee", "id", "period", "date", "day", "basic", "salary",
    "hra", "gross", "earnings", "income", "tax", "provident", "fund",
    "professional", "total", "deductions", "net", "pay", "special",
    "allowance", "conveyance", "medical", "bonus", "overtime",
];

/// Extra characters kept past a recognized keyword when truncating
const TRUNCATION_BUFFER: usize = 10;

fn is_placeholder(cell: &str) -> bool {
    let trimmed = cell.trim();
    PLACEHOLDERS.contains(&trimmed)
        || trimmed.contains("INSTRUCTION")
        || trimmed.contains("TEMPLATE")
}

/// Does this row carry actual employee data?
///
/// Rejects comment rows (first cell starts with `#`), rows containing
/// instructional text anywhere, and rows where every cell is a
/// placeholder.
pub fn is_data_row(row: &[String]) -> bool {
    if let Some(first) = row.first() {
        if first.trim().starts_with('#') {
            return false;
        }
    }

    let joined = row.join(" ").to_lowercase();
    if INSTRUCTION_MARKERS.iter().any(|m| joined.contains(m)) {
        return false;
    }

    row.iter().any(|cell| !is_placeholder(cell))
}

/// Drop every non-data row.
pub fn sanitize_rows(rows: &[Vec<String>]) -> Vec<Vec<String>> {
    rows.iter()
        .filter(|row| is_data_row(row))
        .cloned()
        .collect()
}

/// Repair one header.
///
/// First tries to split on a common delimiter and keeps the leading part.
/// Failing that, looks for a recognized payroll keyword at a non-zero
/// offset with no earlier keyword before it, and truncates shortly after
/// it. Returns the trimmed header unchanged when neither applies.
pub fn clean_header(header: &str) -> String {
    for sep in HEADER_SEPARATORS {
        if header.contains(*sep) {
            if let Some(head) = header.split(*sep).next() {
                return head.trim().to_string();
            }
        }
    }

    // Byte offsets below are only valid because ASCII lowercasing
    // preserves lengths
    let lowered = header.to_ascii_lowercase();

    for pattern in KNOWN_PATTERNS {
        if let Some(index) = lowered.find(pattern) {
            if index == 0 {
                continue;
            }
            let before = &lowered[..index];
            let has_earlier = KNOWN_PATTERNS
                .iter()
                .any(|p| p != pattern && before.contains(p));
            if has_earlier {
                continue;
            }

            let mut end = (index + pattern.len() + TRUNCATION_BUFFER).min(header.len());
            while !header.is_char_boundary(end) {
                end -= 1;
            }
            return header[..end].trim().to_string();
        }
    }

    header.trim().to_string()
}

/// Repair every header in place-order.
pub fn clean_headers(headers: &[String]) -> Vec<String> {
    headers.iter().map(|h| clean_header(h)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_comment_rows_are_excluded() {
        assert!(!is_data_row(&row(&["# comment", "50000"])));
        assert!(!is_data_row(&row(&["  # indented comment"])));
    }

    #[test]
    fn test_instruction_rows_are_excluded() {
        assert!(!is_data_row(&row(&["See INSTRUCTIONS below", "x"])));
        assert!(!is_data_row(&row(&["fill in this Template", "x"])));
        assert!(!is_data_row(&row(&["Required Columns: Name, Basic"])));
    }

    #[test]
    fn test_all_placeholder_rows_are_excluded() {
        assert!(!is_data_row(&row(&["", "N/A", "-", "Not Provided"])));
        assert!(!is_data_row(&row(&["N/A"])));
        assert!(!is_data_row(&row(&["", "", ""])));
    }

    #[test]
    fn test_real_data_is_retained() {
        // A real name with zero amounts still counts as data
        assert!(is_data_row(&row(&["Naveen", "0", "0"])));
        assert!(is_data_row(&row(&["", "50000"])));
    }

    #[test]
    fn test_clean_header_splits_on_separator() {
        assert_eq!(clean_header("Basic Salary | HRA"), "Basic Salary");
        assert_eq!(clean_header("Income Tax; PF"), "Income Tax");
        assert_eq!(clean_header("Net Pay & Take Home"), "Net Pay");
    }

    #[test]
    fn test_clean_header_truncates_after_keyword() {
        // "name" is recognized mid-string with nothing recognizable before it
        assert_eq!(clean_header("Emp Name"), "Emp Name");
        let cleaned = clean_header("Xyz Name some trailing garbage text");
        assert!(cleaned.len() <= "Xyz Name".len() + TRUNCATION_BUFFER);
        assert!(cleaned.to_lowercase().contains("name"));
    }

    #[test]
    fn test_clean_header_passthrough() {
        assert_eq!(clean_header("  Basic Salary "), "Basic Salary");
        assert_eq!(clean_header("Mystery Column"), "Mystery Column");
    }

    #[test]
    fn test_clean_header_is_utf8_safe() {
        // Truncation must land on a char boundary
        let cleaned = clean_header("Xyz Name ₹₹₹₹₹₹₹₹₹₹₹₹");
        assert!(cleaned.is_char_boundary(cleaned.len()));
    }

    #[test]
    fn test_sanitize_rows() {
        let rows = vec![
            row(&["# header comment"]),
            row(&["Naveen", "50000"]),
            row(&["N/A", ""]),
        ];
        let kept = sanitize_rows(&rows);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0][0], "Naveen");
    }
}

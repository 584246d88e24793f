//! Starter template for external collaborators

/// Suggested filename for the starter template
pub const TEMPLATE_FILENAME: &str = "simple_payroll_template.csv";

/// Column set of the starter template, in file order
const TEMPLATE_HEADERS: [&str; 17] = [
    "UAN",
    "Name",
    "Employee ID",
    "Pay Period",
    "Pay Date",
    "Paid Days",
    "LOP Days",
    "Basic Salary",
    "HRA",
    "Special Allowance",
    "Gift",
    "Gross Earnings",
    "Income Tax",
    "Provident Fund",
    "Professional Tax",
    "Total Deductions",
    "Net Pay",
];

/// The one fully worked sample row
const TEMPLATE_SAMPLE: [&str; 17] = [
    "101411733970",
    "NAVEEN",
    "G20",
    "Jan-26",
    "31-01-2026",
    "22",
    "0",
    "50000",
    "20000",
    "3000",
    "7000",
    "80000",
    "5000",
    "1800",
    "200",
    "7000",
    "73000",
];

/// Build the starter CSV: header row, one sample row, then comment rows
/// describing usage (which the sanitizer strips on re-import).
pub fn template_csv() -> String {
    [
        TEMPLATE_HEADERS.join(","),
        TEMPLATE_SAMPLE.join(","),
        String::new(),
        "# SIMPLE PAYROLL TEMPLATE".to_string(),
        "# Just fill in the data rows, no instructions in data columns".to_string(),
        "# Delete any columns you don't need".to_string(),
        "# Save as CSV and upload".to_string(),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::{is_data_row, RawTable};

    #[test]
    fn test_template_shape() {
        let content = template_csv();
        let table = RawTable::from_csv_reader(content.as_bytes()).unwrap();
        assert_eq!(table.headers.len(), 17);
        assert_eq!(table.headers[0], "UAN");
        assert_eq!(table.headers[16], "Net Pay");
    }

    #[test]
    fn test_sample_row_survives_sanitization() {
        let content = template_csv();
        let table = RawTable::from_csv_reader(content.as_bytes()).unwrap();

        let surviving: Vec<_> = table.rows.iter().filter(|r| is_data_row(r)).collect();
        assert_eq!(surviving.len(), 1);
        assert_eq!(surviving[0][1], "NAVEEN");
    }
}

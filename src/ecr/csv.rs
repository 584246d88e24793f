//! CSV variant of the ECR interchange format
//!
//! Deliberately hand-rolled rather than built on the `csv` crate: the
//! format is a fixed grid with an optional company-info preamble, a literal
//! `Sl.No` marker row locating the data, and naive quoting (fields are
//! quoted only when they contain a comma). Mirroring that exactly keeps
//! files interchangeable with the regulator-facing originals.

use crate::employee::CompanySnapshot;
use crate::parse::parse_amount;
use crate::pf::PfRecord;

use super::{EcrError, CSV_COLUMNS};

/// Rows with at least this many cells use the current layout
const CURRENT_CELL_COUNT: usize = 15;

/// Minimum cells for the legacy layout
const LEGACY_CELL_COUNT: usize = 12;

fn format_number(value: f64) -> String {
    format!("{}", value.round() as i64)
}

fn quote(value: &str) -> String {
    if value.contains(',') {
        format!("\"{value}\"")
    } else {
        value.to_string()
    }
}

/// Encode records as CSV: optional company preamble rows, the quoted
/// column-name header, then one row per record with a serial number.
pub fn encode_csv(records: &[PfRecord], company: Option<&CompanySnapshot>) -> String {
    let mut lines = Vec::new();

    if let Some(company) = company {
        if !company.name.is_empty() {
            lines.push(format!("Company,{}", company.name));
            if !company.address.is_empty() {
                lines.push(format!("Address,{}", company.address));
            }
            if !company.pan_number.is_empty() {
                lines.push(format!("PAN,{}", company.pan_number));
            }
            lines.push(String::new());
        }
    }

    lines.push(
        CSV_COLUMNS
            .iter()
            .map(|h| format!("\"{h}\""))
            .collect::<Vec<_>>()
            .join(","),
    );

    for (index, record) in records.iter().enumerate() {
        let row = [
            (index + 1).to_string(),
            quote(record.uan.trim()),
            quote(record.name.trim()),
            format_number(record.gross_wages),
            format_number(record.epf_wages),
            format_number(record.eps_wages),
            format_number(record.edli_wages),
            format_number(record.epf_employee),
            format_number(record.eps_contribution),
            format_number(record.epf_employer),
            format_number(record.edli_contribution),
            format_number(record.admin_charge),
            format_number(record.edli_admin_charge),
            record.ncp_days.to_string(),
            format_number(record.refund_advances),
        ];
        lines.push(row.join(","));
    }

    lines.join("\n")
}

/// Strip surrounding quotes and whitespace from a raw cell
fn clean_cell(cell: &str) -> &str {
    cell.trim().trim_matches('"').trim()
}

/// Decode the CSV variant.
///
/// Data rows start after the header row containing the literal `Sl.No`
/// marker; any preceding rows are company-info preamble and are skipped.
/// Rows with 15+ cells use the current layout, 12-14 the legacy layout
/// (newer fields default to zero), shorter rows are ignored.
pub fn decode_csv(content: &str) -> Result<Vec<PfRecord>, EcrError> {
    let lines: Vec<&str> = content.lines().collect();

    let data_start = lines
        .iter()
        .position(|line| line.contains("Sl.No") || line.contains("Sl No"))
        .map(|index| index + 1)
        .unwrap_or(0);

    let mut records = Vec::new();

    for raw in &lines[data_start..] {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let cells: Vec<&str> = line.split(',').map(clean_cell).collect();
        if cells.len() < LEGACY_CELL_COUNT {
            continue;
        }

        let number = |index: usize| parse_amount(cells[index]);

        let record = if cells.len() >= CURRENT_CELL_COUNT {
            PfRecord {
                uan: cells[1].to_string(),
                name: cells[2].to_string(),
                gross_wages: number(3),
                epf_wages: number(4),
                eps_wages: number(5),
                edli_wages: number(6),
                epf_employee: number(7),
                eps_contribution: number(8),
                epf_employer: number(9),
                edli_contribution: number(10),
                admin_charge: number(11),
                edli_admin_charge: number(12),
                ncp_days: number(13).max(0.0) as u32,
                refund_advances: number(14),
            }
        } else {
            PfRecord {
                uan: cells[1].to_string(),
                name: cells[2].to_string(),
                gross_wages: number(3),
                epf_wages: number(4),
                eps_wages: number(5),
                edli_wages: number(6),
                epf_employee: number(7),
                eps_contribution: number(8),
                epf_employer: number(9),
                edli_contribution: 0.0,
                admin_charge: 0.0,
                edli_admin_charge: 0.0,
                ncp_days: number(10).max(0.0) as u32,
                refund_advances: number(11),
            }
        };

        records.push(record);
    }

    if records.is_empty() {
        return Err(EcrError::Empty);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> PfRecord {
        PfRecord {
            uan: "101411733970".into(),
            name: "NAVEEN".into(),
            gross_wages: 20_000.0,
            epf_wages: 15_000.0,
            eps_wages: 15_000.0,
            edli_wages: 15_000.0,
            epf_employee: 1_800.0,
            eps_contribution: 1_250.0,
            epf_employer: 551.0,
            edli_contribution: 75.0,
            admin_charge: 25.0,
            edli_admin_charge: 1.0,
            ncp_days: 0,
            refund_advances: 0.0,
        }
    }

    #[test]
    fn test_round_trip_with_company_preamble() {
        let company = CompanySnapshot {
            name: "Acme Pvt Ltd".into(),
            address: "1 Main Road".into(),
            pan_number: "ABCDE1234F".into(),
            ..Default::default()
        };
        let content = encode_csv(&[sample_record()], Some(&company));

        assert!(content.starts_with("Company,Acme Pvt Ltd"));
        assert!(content.contains("\"Sl.No\""));

        let records = decode_csv(&content).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], sample_record());
    }

    #[test]
    fn test_legacy_twelve_cell_row() {
        let content = "\
\"Sl.No\",\"UAN\",\"Name\",\"Gross Wages\",\"EPF Wages\",\"EPS Wages\",\"EDLI Wages\",\"EPF EE\",\"EPS\",\"EPF ER\",\"NCP Days\",\"Refund Advances\"
1,101411733970,NAVEEN,20000,15000,15000,15000,1800,1250,551,2,0";

        let records = decode_csv(content).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].ncp_days, 2);
        assert_eq!(records[0].edli_contribution, 0.0);
        assert_eq!(records[0].admin_charge, 0.0);
    }

    #[test]
    fn test_short_rows_are_ignored() {
        let content = "\"Sl.No\",\"UAN\",\"Name\"\n1,101411733970,NAVEEN\n";
        assert!(matches!(decode_csv(content), Err(EcrError::Empty)));
    }
}

//! Delimited ECR text codec

use crate::employee::CompanySnapshot;
use crate::parse::parse_amount;
use crate::pf::PfRecord;

use super::{
    EcrError, COMMENT_MARKER, CURRENT_FIELD_COUNT, ECR_COLUMNS, ECR_SEPARATOR, LEGACY_FIELD_COUNT,
};

/// Numeric fields carry no decimals in the ECR format
fn format_number(value: f64) -> String {
    format!("{}", value.round() as i64)
}

/// Encode one record as a 14-field `#~#`-delimited line.
///
/// Field order: UAN, name (uppercased), gross/EPF/EPS/EDLI wages, EPF EE,
/// EPS, EPF ER, EDLI, admin charge, EDLI admin, NCP days, refund advances.
pub fn encode_line(record: &PfRecord) -> String {
    [
        record.uan.trim().to_string(),
        record.name.trim().to_uppercase(),
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
    ]
    .join(ECR_SEPARATOR)
}

/// Encode a full ECR file: optional comment-prefixed company block, a
/// comment legend of column names, then one line per record.
pub fn encode_file(records: &[PfRecord], company: Option<&CompanySnapshot>) -> String {
    if records.is_empty() {
        return "# No PF data to export\n".to_string();
    }

    let rule = format!("# {}", "=".repeat(80));
    let mut lines = Vec::new();

    if let Some(company) = company {
        if !company.name.is_empty() {
            lines.push(format!("# Company: {}", company.name));
            if !company.address.is_empty() {
                lines.push(format!("# Address: {}", company.address));
            }
            if !company.pan_number.is_empty() {
                lines.push(format!("# PAN: {}", company.pan_number));
            }
            lines.push(rule.clone());
            lines.push(String::new());
        }
    }

    lines.push(format!("# {}", ECR_COLUMNS.join(" | ")));
    lines.push(rule);
    lines.push(String::new());

    for record in records {
        lines.push(encode_line(record));
    }

    lines.join("\n")
}

/// Decode one delimited line into a record.
///
/// Accepts the current 14-field layout and the legacy 11-field layout
/// (EDLI, admin charge and EDLI admin default to zero). Fewer than 11
/// fields is a format error.
pub fn decode_line(line: &str) -> Result<PfRecord, EcrError> {
    decode_line_at(line, 0)
}

fn decode_line_at(line: &str, line_number: usize) -> Result<PfRecord, EcrError> {
    let parts: Vec<&str> = line.split(ECR_SEPARATOR).collect();

    if parts.len() < LEGACY_FIELD_COUNT {
        return Err(EcrError::TooFewFields {
            line: line_number,
            found: parts.len(),
        });
    }

    let uan = parts[0].trim().to_string();
    let name = parts[1].trim().to_string();
    let number = |index: usize| parse_amount(parts[index]);

    let record = if parts.len() >= CURRENT_FIELD_COUNT {
        PfRecord {
            uan,
            name,
            gross_wages: number(2),
            epf_wages: number(3),
            eps_wages: number(4),
            edli_wages: number(5),
            epf_employee: number(6),
            eps_contribution: number(7),
            epf_employer: number(8),
            edli_contribution: number(9),
            admin_charge: number(10),
            edli_admin_charge: number(11),
            ncp_days: number(12).max(0.0) as u32,
            refund_advances: number(13),
        }
    } else {
        // Legacy layout predates the three charge columns
        PfRecord {
            uan,
            name,
            gross_wages: number(2),
            epf_wages: number(3),
            eps_wages: number(4),
            edli_wages: number(5),
            epf_employee: number(6),
            eps_contribution: number(7),
            epf_employer: number(8),
            edli_contribution: 0.0,
            admin_charge: 0.0,
            edli_admin_charge: 0.0,
            ncp_days: number(9).max(0.0) as u32,
            refund_advances: number(10),
        }
    };

    Ok(record)
}

/// Decode a full ECR file, skipping blank and comment lines.
///
/// Any data line with fewer than 11 fields aborts the decode with a format
/// error carrying its line number.
pub fn decode_file(content: &str) -> Result<Vec<PfRecord>, EcrError> {
    let mut records = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            continue;
        }
        records.push(decode_line_at(line, index + 1)?);
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
    fn test_encode_line_layout() {
        let line = encode_line(&sample_record());
        assert_eq!(
            line,
            "101411733970#~#NAVEEN#~#20000#~#15000#~#15000#~#15000#~#1800#~#1250#~#551#~#75#~#25#~#1#~#0#~#0"
        );
    }

    #[test]
    fn test_round_trip() {
        let record = sample_record();
        let decoded = decode_line(&encode_line(&record)).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_name_is_uppercased() {
        let mut record = sample_record();
        record.name = "naveen kumar".into();
        let line = encode_line(&record);
        assert!(line.contains("#~#NAVEEN KUMAR#~#"));
    }

    #[test]
    fn test_legacy_eleven_field_line() {
        let line = "101411733970#~#NAVEEN#~#20000#~#15000#~#15000#~#15000#~#1800#~#1250#~#551#~#2#~#150";
        let record = decode_line(line).unwrap();
        assert_eq!(record.uan, "101411733970");
        assert_eq!(record.epf_employer, 551.0);
        assert_eq!(record.ncp_days, 2);
        assert_eq!(record.refund_advances, 150.0);
        // Newer fields default to zero
        assert_eq!(record.edli_contribution, 0.0);
        assert_eq!(record.admin_charge, 0.0);
        assert_eq!(record.edli_admin_charge, 0.0);
    }

    #[test]
    fn test_too_few_fields_is_an_error() {
        let err = decode_line("a#~#b#~#c").unwrap_err();
        assert!(matches!(err, EcrError::TooFewFields { found: 3, .. }));
    }

    #[test]
    fn test_decode_file_skips_comments_and_blanks() {
        let company = CompanySnapshot {
            name: "Acme Pvt Ltd".into(),
            address: "1 Main Road".into(),
            pan_number: "ABCDE1234F".into(),
            ..Default::default()
        };
        let content = encode_file(&[sample_record()], Some(&company));

        assert!(content.starts_with("# Company: Acme Pvt Ltd"));
        assert!(content.contains("# UAN | Name | Gross Wages"));

        let records = decode_file(&content).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], sample_record());
    }

    #[test]
    fn test_decode_file_reports_line_number() {
        let content = "# legend\n\nbad#~#line\n";
        let err = decode_file(content).unwrap_err();
        assert!(matches!(err, EcrError::TooFewFields { line: 3, found: 2 }));
    }

    #[test]
    fn test_encode_empty_set() {
        assert_eq!(encode_file(&[], None), "# No PF data to export\n");
    }
}

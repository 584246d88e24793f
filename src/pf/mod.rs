//! Provident Fund contribution engine and record set

pub mod constants;
mod calculator;
mod totals;

pub use calculator::{compute_pf, validate_entry, EntryValidation, PfContribution};
pub use totals::{calculate_totals, PfTotals};

use log::warn;
use serde::{Deserialize, Serialize};

/// One employee's PF return line: identity, wage bases, contributions and
/// period adjustments. Uniquely keyed by UAN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PfRecord {
    /// Universal Account Number, 12 digits
    pub uan: String,

    pub name: String,

    pub gross_wages: f64,
    pub epf_wages: f64,
    pub eps_wages: f64,
    pub edli_wages: f64,

    pub epf_employee: f64,
    pub eps_contribution: f64,
    pub epf_employer: f64,
    pub edli_contribution: f64,
    pub admin_charge: f64,
    pub edli_admin_charge: f64,

    /// Non-Contributory Period days
    pub ncp_days: u32,

    pub refund_advances: f64,
}

impl PfRecord {
    /// Build a record from identity and gross wages, deriving every
    /// contribution field through the calculation engine
    pub fn from_gross(uan: impl Into<String>, name: impl Into<String>, gross_wages: f64) -> Self {
        let pf = compute_pf(gross_wages);
        Self {
            uan: uan.into(),
            name: name.into(),
            gross_wages: pf.gross_wages,
            epf_wages: pf.pf_wages,
            eps_wages: pf.pf_wages,
            edli_wages: pf.pf_wages,
            epf_employee: pf.epf_employee,
            eps_contribution: pf.eps_contribution,
            epf_employer: pf.epf_employer,
            edli_contribution: pf.edli_contribution,
            admin_charge: pf.admin_charge,
            edli_admin_charge: pf.edli_admin_charge,
            ncp_days: constants::NCP_DAYS,
            refund_advances: constants::REFUND_ADVANCES,
        }
    }

    /// Validate the identity and wage fields of this record
    pub fn validate(&self) -> EntryValidation {
        validate_entry(&self.uan, &self.name, self.gross_wages)
    }
}

/// Outcome of a bulk import into the PF record set
#[derive(Debug, Clone)]
pub struct PfImportOutcome {
    /// Records that validated and were committed
    pub imported: usize,

    /// Per-record validation messages for the rest
    pub warnings: Vec<String>,
}

/// UAN-keyed PF record collection with update-or-insert semantics
#[derive(Debug, Clone, Default)]
pub struct PfStore {
    records: Vec<PfRecord>,
}

impl PfStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[PfRecord] {
        &self.records
    }

    /// Insert a record, replacing any existing record with the same UAN.
    /// Contributions are recomputed from gross wages so stored records can
    /// never disagree with the engine.
    ///
    /// Returns the validation result; invalid records are not stored.
    pub fn upsert(&mut self, uan: &str, name: &str, gross_wages: f64) -> EntryValidation {
        let validation = validate_entry(uan, name, gross_wages);
        if !validation.valid {
            return validation;
        }

        let record = PfRecord::from_gross(uan.trim(), name.trim(), gross_wages);
        match self.records.iter_mut().find(|r| r.uan == record.uan) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
        validation
    }

    /// Remove a record by UAN; true when something was removed
    pub fn remove(&mut self, uan: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.uan != uan);
        self.records.len() != before
    }

    /// Replace the whole record set from decoded file records.
    ///
    /// Best-effort: each record validates independently, contributions are
    /// recomputed from gross wages, invalid records are skipped with a
    /// warning and the valid remainder still commits. The previous contents
    /// are only replaced when at least one record survives.
    pub fn import_records(&mut self, decoded: Vec<PfRecord>) -> PfImportOutcome {
        let mut accepted = Vec::new();
        let mut warnings = Vec::new();

        for (index, record) in decoded.into_iter().enumerate() {
            let validation = record.validate();
            if !validation.valid {
                let message = format!(
                    "record {} (uan {:?}): {}",
                    index + 1,
                    record.uan,
                    validation.errors.join("; ")
                );
                warn!("skipping PF record: {message}");
                warnings.push(message);
                continue;
            }
            accepted.push(PfRecord::from_gross(
                record.uan.trim(),
                record.name.trim(),
                record.gross_wages,
            ));
        }

        let imported = accepted.len();
        if imported > 0 {
            self.records = accepted;
        }
        PfImportOutcome { imported, warnings }
    }

    /// Aggregate totals over the current record set
    pub fn totals(&self) -> PfTotals {
        calculate_totals(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

//! Reconciliation of declared vs. calculated payroll totals
//!
//! Source files often carry their own Gross/Total Deductions/Net columns.
//! Those are honored only when they roughly agree with the item sums:
//! a declared total wins if it is positive and within the rounding
//! tolerance of the calculated value, otherwise the calculated value wins.
//! Net never comes from the file; it is always the difference of the two
//! final figures, so the record can never be internally inconsistent.

use std::collections::HashMap;

use crate::employee::CompensationItem;

/// Declared totals within this distance of the calculated value are
/// accepted as rounding drift
pub const RECONCILE_TOLERANCE: f64 = 1.0;

/// Declared-total alias keys probed for gross
const GROSS_ALIASES: &[&str] = &["gross", "gross earnings", "total earnings"];

/// Declared-total alias keys probed for total deductions
const DEDUCTION_ALIASES: &[&str] = &["total deductions", "deductions", "total deduction"];

/// Declared-total alias keys probed for net pay
const NET_ALIASES: &[&str] = &["net", "net pay", "take home"];

/// Comparison of one declared quantity against its calculated counterpart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantityCheck {
    pub calculated: f64,
    pub declared: f64,
    pub difference: f64,
    /// True when declared is absent (zero) or within tolerance
    pub is_valid: bool,
}

impl QuantityCheck {
    fn of(calculated: f64, declared: f64) -> Self {
        let difference = (calculated - declared).abs();
        Self {
            calculated,
            declared,
            difference,
            is_valid: declared == 0.0 || difference < RECONCILE_TOLERANCE,
        }
    }

    /// Declared value when it is trusted and present, else calculated
    fn resolve(&self) -> f64 {
        if self.is_valid && self.declared > 0.0 {
            self.declared
        } else {
            self.calculated
        }
    }
}

/// Per-quantity validation outcomes, kept for warning reports
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TotalsValidation {
    pub gross: QuantityCheck,
    pub deductions: QuantityCheck,
    pub net: QuantityCheck,
}

impl TotalsValidation {
    /// Human-readable warnings for every out-of-tolerance quantity
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        for (label, check) in [
            ("gross", &self.gross),
            ("deductions", &self.deductions),
            ("net", &self.net),
        ] {
            if !check.is_valid {
                warnings.push(format!(
                    "declared {} {:.2} differs from calculated {:.2} by {:.2}; using calculated",
                    label, check.declared, check.calculated, check.difference
                ));
            }
        }
        warnings
    }
}

/// Final totals for one record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReconciledTotals {
    pub gross: f64,
    pub total_deductions: f64,
    pub net: f64,
    pub validation: TotalsValidation,
}

fn probe(declared: &HashMap<String, f64>, aliases: &[&str]) -> f64 {
    aliases
        .iter()
        .find_map(|key| declared.get(*key).copied())
        .unwrap_or(0.0)
}

/// Reconcile item sums against declared totals.
///
/// Each of the three quantities is validated independently. The final
/// gross and deductions may come from trusted declared values; net is
/// always their difference regardless of any declared net.
pub fn reconcile(
    earnings: &[CompensationItem],
    deductions: &[CompensationItem],
    declared: &HashMap<String, f64>,
) -> ReconciledTotals {
    let calculated_gross: f64 = earnings.iter().map(|item| item.amount).sum();
    let calculated_deductions: f64 = deductions.iter().map(|item| item.amount).sum();
    let calculated_net = calculated_gross - calculated_deductions;

    let validation = TotalsValidation {
        gross: QuantityCheck::of(calculated_gross, probe(declared, GROSS_ALIASES)),
        deductions: QuantityCheck::of(calculated_deductions, probe(declared, DEDUCTION_ALIASES)),
        net: QuantityCheck::of(calculated_net, probe(declared, NET_ALIASES)),
    };

    let gross = validation.gross.resolve();
    let total_deductions = validation.deductions.resolve();

    ReconciledTotals {
        gross,
        total_deductions,
        net: gross - total_deductions,
        validation,
    }
}

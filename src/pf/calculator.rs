//! EPFO-compliant contribution calculation
//!
//! All six contribution components are computed from the slab-rounded PF
//! wage, each rounded at its own step. The employer EPF share uses the
//! residual rate (12% minus the 8.33% pension carve-out) with a single
//! rounding so the two employer sub-components never drift from the
//! combined statutory rate. Reordering or merging these roundings shifts
//! results by ±1 rupee near rate-fraction boundaries.

use super::constants::*;

/// Full contribution breakdown for one employee's wages
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PfContribution {
    /// Gross wages as supplied
    pub gross_wages: f64,

    /// Wage base after the statutory ceiling; EPF, EPS and EDLI wages are
    /// all reported at this value
    pub pf_wages: f64,

    /// Employee EPF share (12%)
    pub epf_employee: f64,

    /// Pension fund carve-out (8.33%)
    pub eps_contribution: f64,

    /// Employer EPF share (residual 3.67%)
    pub epf_employer: f64,

    /// Deposit-linked insurance (0.5%)
    pub edli_contribution: f64,

    /// PF administrative charge (0.17%, truncated)
    pub admin_charge: f64,

    /// EDLI administrative charge (0.01%, truncated)
    pub edli_admin_charge: f64,

    /// Sum of the five employer-side components
    pub total_employer: f64,

    /// Employee share plus employer total
    pub total: f64,

    /// Whether the ceiling clipped the wage base
    pub wages_capped: bool,
}

/// Round half away from zero, the statutory convention for contributions
fn round_rupees(value: f64) -> f64 {
    value.round()
}

/// Administrative charges are truncated to whole rupees
fn trunc_rupees(value: f64) -> f64 {
    value.trunc()
}

/// Compute the PF contribution breakdown for a gross wage.
///
/// Pure function over a single non-negative number. The ceiling applies
/// identically to all three wage-basis quantities; the capped wage is then
/// taken up to the next ₹100 slab before the rates apply, matching the
/// regulator's reference output.
pub fn compute_pf(gross_wages: f64) -> PfContribution {
    let gross = if gross_wages.is_finite() && gross_wages > 0.0 {
        gross_wages
    } else {
        0.0
    };

    let pf_wages = gross.min(WAGE_CEILING);
    let slab_wages = (pf_wages / WAGE_SLAB).ceil() * WAGE_SLAB;

    let epf_employee = round_rupees(slab_wages * EPF_RATE_EMPLOYEE);
    let eps_contribution = round_rupees(slab_wages * EPS_RATE_EMPLOYER);
    let epf_employer = round_rupees(slab_wages * (EPF_RATE_EMPLOYER - EPS_RATE_EMPLOYER));
    let edli_contribution = round_rupees(slab_wages * EDLI_RATE_EMPLOYER);
    let admin_charge = trunc_rupees(slab_wages * ADMIN_CHARGE_RATE);
    let edli_admin_charge = trunc_rupees(slab_wages * EDLI_ADMIN_RATE);

    let total_employer =
        eps_contribution + epf_employer + edli_contribution + admin_charge + edli_admin_charge;
    let total = epf_employee + total_employer;

    PfContribution {
        gross_wages: gross,
        pf_wages,
        epf_employee,
        eps_contribution,
        epf_employer,
        edli_contribution,
        admin_charge,
        edli_admin_charge,
        total_employer,
        total,
        wages_capped: gross > WAGE_CEILING,
    }
}

/// Result of validating a PF data entry
#[derive(Debug, Clone, PartialEq)]
pub struct EntryValidation {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Validate the identity and wage fields of a PF entry.
///
/// Collects every violated rule instead of failing fast.
pub fn validate_entry(uan: &str, name: &str, gross_wages: f64) -> EntryValidation {
    let mut errors = Vec::new();

    if uan.trim().is_empty() {
        errors.push("UAN is required".to_string());
    } else {
        let digits: String = uan.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() != 12 {
            errors.push("UAN must be 12 digits".to_string());
        }
    }

    if name.trim().is_empty() {
        errors.push("Employee name is required".to_string());
    }

    if !gross_wages.is_finite() {
        errors.push("Valid gross wages required".to_string());
    } else if gross_wages < 0.0 {
        errors.push("Gross wages cannot be negative".to_string());
    }

    EntryValidation {
        valid: errors.is_empty(),
        errors,
    }
}

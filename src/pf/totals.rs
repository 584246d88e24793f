//! Aggregate totals over a PF record set

use super::PfRecord;

/// Column-wise totals for an ECR filing summary
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PfTotals {
    pub employee_count: usize,
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
    pub total_employer: f64,
    pub total: f64,
}

/// Sum every monetary column across the record set, rounding each total to
/// whole rupees
pub fn calculate_totals(records: &[PfRecord]) -> PfTotals {
    let mut totals = PfTotals::default();

    for record in records {
        totals.employee_count += 1;
        totals.gross_wages += record.gross_wages;
        totals.epf_wages += record.epf_wages;
        totals.eps_wages += record.eps_wages;
        totals.edli_wages += record.edli_wages;
        totals.epf_employee += record.epf_employee;
        totals.eps_contribution += record.eps_contribution;
        totals.epf_employer += record.epf_employer;
        totals.edli_contribution += record.edli_contribution;
        totals.admin_charge += record.admin_charge;
        totals.edli_admin_charge += record.edli_admin_charge;
    }

    totals.total_employer = totals.eps_contribution
        + totals.epf_employer
        + totals.edli_contribution
        + totals.admin_charge
        + totals.edli_admin_charge;
    totals.total = totals.epf_employee + totals.total_employer;

    totals.gross_wages = totals.gross_wages.round();
    totals.epf_wages = totals.epf_wages.round();
    totals.eps_wages = totals.eps_wages.round();
    totals.edli_wages = totals.edli_wages.round();
    totals.epf_employee = totals.epf_employee.round();
    totals.eps_contribution = totals.eps_contribution.round();
    totals.epf_employer = totals.epf_employer.round();
    totals.edli_contribution = totals.edli_contribution.round();
    totals.admin_charge = totals.admin_charge.round();
    totals.edli_admin_charge = totals.edli_admin_charge.round();
    totals.total_employer = totals.total_employer.round();
    totals.total = totals.total.round();

    totals
}

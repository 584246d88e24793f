//! Statutory PF wage ceiling and contribution rates per EPFO guidelines

/// Only the first ₹15,000 of gross salary counts toward PF wages
pub const WAGE_CEILING: f64 = 15_000.0;

/// Contribution wages are taken to the next ₹100 slab before rates apply
pub const WAGE_SLAB: f64 = 100.0;

/// Employee EPF share, 12% of PF wages
pub const EPF_RATE_EMPLOYEE: f64 = 0.12;

/// Employer total EPF share, 12% of PF wages (EPS carve-out included)
pub const EPF_RATE_EMPLOYER: f64 = 0.12;

/// Pension scheme carve-out, 8.33% of EPS wages
pub const EPS_RATE_EMPLOYER: f64 = 0.0833;

/// Deposit-linked insurance, 0.5% of EDLI wages
pub const EDLI_RATE_EMPLOYER: f64 = 0.005;

/// PF administrative charge, 0.17% of PF wages
pub const ADMIN_CHARGE_RATE: f64 = 0.0017;

/// EDLI administrative charge, 0.01% of EDLI wages
pub const EDLI_ADMIN_RATE: f64 = 0.0001;

/// Default Non-Contributory Period days
pub const NCP_DAYS: u32 = 0;

/// Default refund of advances
pub const REFUND_ADVANCES: f64 = 0.0;

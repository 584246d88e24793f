//! Employee compensation records

mod data;
mod store;

pub use data::{CompanySnapshot, CompensationItem, EmployeeRecord};
pub use store::EmployeeStore;

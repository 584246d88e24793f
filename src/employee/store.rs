//! In-memory employee record collection with blob persistence

use serde::{Deserialize, Serialize};

use super::{CompanySnapshot, EmployeeRecord};
use crate::store::{KeyValueStore, StoreError, STATE_KEY};

/// The single persisted blob: all employee records plus the current
/// company settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedState {
    employee_records: Vec<EmployeeRecord>,
    company_settings: CompanySnapshot,
}

/// Owns the in-memory record set and the current company settings.
///
/// Mutations are synchronous and user-initiated; a batch import commits as
/// one `extend` call so partially built imports are never visible.
#[derive(Debug, Clone, Default)]
pub struct EmployeeStore {
    employees: Vec<EmployeeRecord>,
    company: CompanySnapshot,
}

impl EmployeeStore {
    pub fn new(company: CompanySnapshot) -> Self {
        Self {
            employees: Vec::new(),
            company,
        }
    }

    /// Load state from the key-value store, empty state when absent
    pub fn load_from(store: &dyn KeyValueStore) -> Result<Self, StoreError> {
        let state = match store.load(STATE_KEY)? {
            Some(blob) => serde_json::from_str::<PersistedState>(&blob)?,
            None => PersistedState::default(),
        };
        Ok(Self {
            employees: state.employee_records,
            company: state.company_settings,
        })
    }

    /// Rewrite the full state blob
    pub fn save_to(&self, store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
        let state = PersistedState {
            employee_records: self.employees.clone(),
            company_settings: self.company.clone(),
        };
        store.save(STATE_KEY, &serde_json::to_string(&state)?)?;
        Ok(())
    }

    pub fn employees(&self) -> &[EmployeeRecord] {
        &self.employees
    }

    pub fn company(&self) -> &CompanySnapshot {
        &self.company
    }

    /// Update global company settings. Existing records keep their own
    /// snapshots.
    pub fn set_company(&mut self, company: CompanySnapshot) {
        self.company = company;
    }

    pub fn add(&mut self, record: EmployeeRecord) {
        self.employees.push(record);
    }

    /// Atomic commit of a batch import
    pub fn extend(&mut self, records: Vec<EmployeeRecord>) {
        self.employees.extend(records);
    }

    /// Remove a record by employee id; true when something was removed
    pub fn remove(&mut self, employee_id: &str) -> bool {
        let before = self.employees.len();
        self.employees.retain(|e| e.employee_id != employee_id);
        self.employees.len() != before
    }

    pub fn clear(&mut self) {
        self.employees.clear();
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::CompensationItem;
    use crate::store::MemoryStore;
    use chrono::NaiveDate;

    fn sample_record(id: &str) -> EmployeeRecord {
        EmployeeRecord {
            employee_id: id.into(),
            name: "A".into(),
            uan: String::new(),
            pay_period: "2026-01".into(),
            pay_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
            paid_days: 0.0,
            loss_of_pay_days: 0.0,
            earnings: vec![CompensationItem::new("Basic", 1000.0)],
            deductions: vec![],
            gross: 1000.0,
            total_deductions: 0.0,
            net: 1000.0,
            department: String::new(),
            designation: String::new(),
            email: String::new(),
            phone: String::new(),
            bank_name: String::new(),
            bank_account: String::new(),
            bank_ifsc: String::new(),
            pan_number: String::new(),
            company: CompanySnapshot::default(),
        }
    }

    #[test]
    fn test_persistence_round_trip() {
        let mut kv = MemoryStore::new();
        let mut store = EmployeeStore::new(CompanySnapshot {
            name: "Acme".into(),
            ..Default::default()
        });
        store.add(sample_record("EMP0001"));
        store.add(sample_record("EMP0002"));
        store.save_to(&mut kv).unwrap();

        let restored = EmployeeStore::load_from(&kv).unwrap();
        assert_eq!(restored.len(), 2);
        assert_eq!(restored.company().name, "Acme");
        assert_eq!(restored.employees()[0].employee_id, "EMP0001");
    }

    #[test]
    fn test_load_empty_store() {
        let kv = MemoryStore::new();
        let store = EmployeeStore::load_from(&kv).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_by_id() {
        let mut store = EmployeeStore::default();
        store.add(sample_record("EMP0001"));
        assert!(store.remove("EMP0001"));
        assert!(!store.remove("EMP0001"));
        assert!(store.is_empty());
    }
}

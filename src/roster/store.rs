//! # Record Store
//!
//! [`EmployeeStore`] owns the record collection outright. Reads hand out
//! clones so callers can never mutate internal state through a shared
//! reference; all mutation goes through `add` / `update` / `delete`.
//!
//! Id allocation is a monotone counter seeded from the largest id in the
//! seed set. Deleting a record never frees its id for reuse, so ids stay
//! unique across the whole lifetime of the store.

use crate::error::{Result, RosterError};
use crate::model::{Employee, EmployeeDraft, EmployeeUpdate};

/// The default seed set: fifteen records, mirroring the data the directory
/// ships with. Parsed from embedded JSON.
pub fn default_seed() -> Result<Vec<Employee>> {
    let employees = serde_json::from_str(include_str!("seed.json"))?;
    Ok(employees)
}

/// In-memory employee collection with monotone id allocation.
#[derive(Debug, Clone)]
pub struct EmployeeStore {
    seed: Vec<Employee>,
    employees: Vec<Employee>,
    next_id: u32,
}

impl EmployeeStore {
    /// Build a store from a seed set. `reset` returns to exactly this
    /// content. The id counter starts one past the largest seed id.
    pub fn from_seed(seed: Vec<Employee>) -> Self {
        let next_id = Self::next_id_for(&seed);
        Self {
            employees: seed.clone(),
            seed,
            next_id,
        }
    }

    /// Store seeded with the embedded default record set.
    pub fn with_default_seed() -> Result<Self> {
        Ok(Self::from_seed(default_seed()?))
    }

    fn next_id_for(records: &[Employee]) -> u32 {
        records.iter().map(|e| e.id).max().unwrap_or(0) + 1
    }

    /// Snapshot of all records in insertion order.
    pub fn get_all(&self) -> Vec<Employee> {
        self.employees.clone()
    }

    pub fn get_by_id(&self, id: u32) -> Result<Employee> {
        self.employees
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(RosterError::EmployeeNotFound(id))
    }

    /// Append a new record, assigning it the next id.
    pub fn add(&mut self, draft: EmployeeDraft) -> Employee {
        let employee = draft.into_employee(self.next_id);
        self.next_id += 1;
        self.employees.push(employee.clone());
        employee
    }

    /// Merge the supplied fields into the record with this id. The id
    /// itself is never altered.
    pub fn update(&mut self, id: u32, update: &EmployeeUpdate) -> Result<Employee> {
        let employee = self
            .employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(RosterError::EmployeeNotFound(id))?;
        update.apply_to(employee);
        Ok(employee.clone())
    }

    /// Remove the record with this id. Returns whether anything was removed.
    /// The id counter is left alone, so the id is never handed out again.
    pub fn delete(&mut self, id: u32) -> bool {
        let before = self.employees.len();
        self.employees.retain(|e| e.id != id);
        self.employees.len() != before
    }

    /// Discard all mutations and restore the original seed content and
    /// counter.
    pub fn reset(&mut self) {
        self.employees = self.seed.clone();
        self.next_id = Self::next_id_for(&self.seed);
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

    fn draft(first: &str, last: &str) -> EmployeeDraft {
        EmployeeDraft {
            first_name: first.into(),
            last_name: last.into(),
            email: format!("{}.{}@example.com", first, last).to_lowercase(),
            department: "IT".into(),
            role: "Developer".into(),
        }
    }

    #[test]
    fn ids_are_strictly_increasing_across_deletes() {
        let mut store = EmployeeStore::from_seed(vec![]);
        let a = store.add(draft("Ada", "One"));
        let b = store.add(draft("Ben", "Two"));
        assert_eq!((a.id, b.id), (1, 2));

        assert!(store.delete(b.id));
        let c = store.add(draft("Cy", "Three"));
        assert_eq!(c.id, 3, "deleted ids must never be reused");
    }

    #[test]
    fn counter_starts_past_largest_seed_id() {
        let seed = default_seed().unwrap();
        let mut store = EmployeeStore::from_seed(seed);
        let added = store.add(draft("New", "Hire"));
        assert_eq!(added.id, 16);
    }

    #[test]
    fn empty_update_is_a_no_op() {
        let mut store = EmployeeStore::with_default_seed().unwrap();
        let before = store.get_by_id(3).unwrap();
        let after = store.update(3, &EmployeeUpdate::default()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn update_never_touches_the_id() {
        let mut store = EmployeeStore::with_default_seed().unwrap();
        let update = EmployeeUpdate {
            first_name: Some("Renamed".into()),
            ..Default::default()
        };
        let updated = store.update(5, &update).unwrap();
        assert_eq!(updated.id, 5);
        assert_eq!(updated.first_name, "Renamed");
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut store = EmployeeStore::from_seed(vec![]);
        assert!(matches!(
            store.update(99, &EmployeeUpdate::default()),
            Err(RosterError::EmployeeNotFound(99))
        ));
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let mut store = EmployeeStore::with_default_seed().unwrap();
        assert!(store.delete(4));
        assert!(matches!(
            store.get_by_id(4),
            Err(RosterError::EmployeeNotFound(4))
        ));
        assert!(!store.delete(4), "second delete finds nothing");
    }

    #[test]
    fn reset_restores_seed_and_counter() {
        let seed = default_seed().unwrap();
        let mut store = EmployeeStore::from_seed(seed.clone());
        store.add(draft("Temp", "Worker"));
        store.delete(1);
        store.reset();

        assert_eq!(store.get_all(), seed);
        let added = store.add(draft("Next", "Hire"));
        assert_eq!(added.id, 16, "counter resets to seed max id + 1");
    }

    #[test]
    fn snapshots_are_detached_from_the_store() {
        let store = EmployeeStore::with_default_seed().unwrap();
        let mut snapshot = store.get_all();
        snapshot.clear();
        assert_eq!(store.len(), 15);
    }
}

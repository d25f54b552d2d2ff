//! In-memory record store.
//!
//! Each service owns exactly one entity type and keeps its records in a
//! [`Table`]. The table stands in for the record data access layer: simple
//! get/list/save/delete-by-key operations with existence checks. Uniqueness
//! probes (`any`) are a fast-path convenience only; real uniqueness
//! enforcement belongs to whatever storage backs a deployment.

use std::collections::BTreeMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

/// A keyed table of records with sequential id assignment.
///
/// Ids start at 1 and are handed out by `insert`. Listing returns rows in
/// id order. All reads return clones so callers never hold the lock.
pub struct Table<T> {
    rows: RwLock<BTreeMap<i64, T>>,
    next_id: AtomicI64,
}

impl<T: Clone> Table<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Insert a new record, assigning it the next id.
    ///
    /// The caller builds the record from the assigned id; the stored copy is
    /// returned.
    pub fn insert(&self, build: impl FnOnce(i64) -> T) -> T {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let row = build(id);
        let mut rows = self.rows.write().unwrap_or_else(|e| e.into_inner());
        rows.insert(id, row.clone());
        row
    }

    pub fn get(&self, id: i64) -> Option<T> {
        let rows = self.rows.read().unwrap_or_else(|e| e.into_inner());
        rows.get(&id).cloned()
    }

    pub fn exists(&self, id: i64) -> bool {
        let rows = self.rows.read().unwrap_or_else(|e| e.into_inner());
        rows.contains_key(&id)
    }

    /// All records in id order.
    pub fn list(&self) -> Vec<T> {
        let rows = self.rows.read().unwrap_or_else(|e| e.into_inner());
        rows.values().cloned().collect()
    }

    /// Records matching a predicate, in id order.
    pub fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        let rows = self.rows.read().unwrap_or_else(|e| e.into_inner());
        rows.values().filter(|row| pred(row)).cloned().collect()
    }

    /// Whether any record matches a predicate. Used for uniqueness probes.
    pub fn any(&self, pred: impl Fn(&T) -> bool) -> bool {
        let rows = self.rows.read().unwrap_or_else(|e| e.into_inner());
        rows.values().any(|row| pred(row))
    }

    /// Find the first record matching a predicate.
    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        let rows = self.rows.read().unwrap_or_else(|e| e.into_inner());
        rows.values().find(|row| pred(row)).cloned()
    }

    /// Apply a mutation to the record with the given id.
    ///
    /// Returns the updated record, or `None` if the id is absent.
    pub fn update(&self, id: i64, apply: impl FnOnce(&mut T)) -> Option<T> {
        let mut rows = self.rows.write().unwrap_or_else(|e| e.into_inner());
        let row = rows.get_mut(&id)?;
        apply(row);
        Some(row.clone())
    }

    /// Remove the record with the given id. Returns whether it existed.
    pub fn remove(&self, id: i64) -> bool {
        let mut rows = self.rows.write().unwrap_or_else(|e| e.into_inner());
        rows.remove(&id).is_some()
    }
}

impl<T: Clone> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        name: String,
    }

    fn row(id: i64, name: &str) -> Row {
        Row {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn insert_assigns_sequential_ids() {
        let table = Table::new();
        let a = table.insert(|id| row(id, "a"));
        let b = table.insert(|id| row(id, "b"));
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(table.list(), vec![a, b]);
    }

    #[test]
    fn get_and_exists() {
        let table = Table::new();
        let a = table.insert(|id| row(id, "a"));
        assert_eq!(table.get(a.id), Some(a.clone()));
        assert!(table.exists(a.id));
        assert_eq!(table.get(99), None);
        assert!(!table.exists(99));
    }

    #[test]
    fn filter_and_any() {
        let table = Table::new();
        table.insert(|id| row(id, "alpha"));
        table.insert(|id| row(id, "beta"));
        table.insert(|id| row(id, "alpha"));

        let alphas = table.filter(|r| r.name == "alpha");
        assert_eq!(alphas.len(), 2);
        assert!(table.any(|r| r.name == "beta"));
        assert!(!table.any(|r| r.name == "gamma"));
    }

    #[test]
    fn update_mutates_in_place() {
        let table = Table::new();
        let a = table.insert(|id| row(id, "a"));

        let updated = table.update(a.id, |r| r.name = "renamed".to_string());
        assert_eq!(updated.map(|r| r.name), Some("renamed".to_string()));
        assert_eq!(table.get(a.id).map(|r| r.name), Some("renamed".to_string()));

        assert!(table.update(99, |_| {}).is_none());
    }

    #[test]
    fn remove_reports_existence() {
        let table = Table::new();
        let a = table.insert(|id| row(id, "a"));
        assert!(table.remove(a.id));
        assert!(!table.remove(a.id));
        assert!(!table.exists(a.id));
    }
}

//! In-memory entity tables.
//!
//! Rows are kept flat (foreign keys only) as JSON objects keyed by entity
//! name. Nested reference objects are added on read by [`Store::expand`].

use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock};

use contracts::domain::common::Resource;
use contracts::domain::resource_info;
use contracts::shared::lookup::id_of;
use serde_json::{Map, Value};

/// How many levels of references are embedded on read
/// (`assessment.trainee.registration`).
pub const EMBED_DEPTH: usize = 2;

#[derive(Debug, Default)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, Map<String, Value>>,
}

#[derive(Debug, Default)]
pub struct Store {
    tables: RwLock<HashMap<&'static str, Table>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flat rows in id order.
    pub fn rows(&self, entity: &str) -> Vec<Map<String, Value>> {
        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        tables
            .get(entity)
            .map(|t| t.rows.values().cloned().collect())
            .unwrap_or_default()
    }

    pub fn row(&self, entity: &str, id: i64) -> Option<Map<String, Value>> {
        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        tables.get(entity).and_then(|t| t.rows.get(&id).cloned())
    }

    /// Store a new row under the next id and return that id. Ids start
    /// at 1 and are never reused.
    pub fn insert(&self, entity: &'static str, id_field: &str, mut row: Map<String, Value>) -> i64 {
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        let table = tables.entry(entity).or_default();
        table.next_id += 1;
        let id = table.next_id;
        row.insert(id_field.to_string(), Value::from(id));
        table.rows.insert(id, row);
        id
    }

    /// Replace an existing row. The id comes from the caller, never from
    /// the row itself.
    pub fn update(&self, entity: &str, id_field: &str, id: i64, mut row: Map<String, Value>) -> bool {
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        let Some(existing) = tables.get_mut(entity).and_then(|t| t.rows.get_mut(&id)) else {
            return false;
        };
        row.insert(id_field.to_string(), Value::from(id));
        *existing = row;
        true
    }

    pub fn delete(&self, entity: &str, id: i64) -> bool {
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        tables
            .get_mut(entity)
            .map(|t| t.rows.remove(&id).is_some())
            .unwrap_or(false)
    }

    /// Embed referenced rows under their `embed_as` keys, `depth` levels deep.
    /// Dangling or unset foreign keys are left without a nested object.
    pub fn expand(&self, entity: &str, mut row: Map<String, Value>, depth: usize) -> Map<String, Value> {
        if depth == 0 {
            return row;
        }
        let Some(info) = resource_info(entity) else {
            return row;
        };
        for reference in (info.references)() {
            let Some(id) = row.get(reference.fk).and_then(id_of).filter(|id| *id > 0) else {
                continue;
            };
            if let Some(nested) = self.row(reference.entity, id) {
                let nested = self.expand(reference.entity, nested, depth - 1);
                row.insert(reference.embed_as.to_string(), Value::Object(nested));
            }
        }
        row
    }

    // ============================================================================
    // Typed access
    // ============================================================================

    /// Flat typed rows; rows that no longer match the type are skipped.
    pub fn all<T: Resource>(&self) -> Vec<T> {
        self.rows(T::NAME)
            .into_iter()
            .filter_map(|row| serde_json::from_value(Value::Object(row)).ok())
            .collect()
    }

    /// Typed row with its references embedded.
    pub fn find_expanded<T: Resource>(&self, id: i64) -> Option<T> {
        let row = self.row(T::NAME, id)?;
        serde_json::from_value(Value::Object(self.expand(T::NAME, row, EMBED_DEPTH))).ok()
    }

    pub fn all_expanded<T: Resource>(&self) -> Vec<T> {
        self.rows(T::NAME)
            .into_iter()
            .filter_map(|row| {
                serde_json::from_value(Value::Object(self.expand(T::NAME, row, EMBED_DEPTH))).ok()
            })
            .collect()
    }

    /// Insert a typed entity, returning it with its new id.
    pub fn insert_entity<T: Resource>(&self, entity: &T) -> Result<T, serde_json::Error> {
        let row = flat_row(entity)?;
        let id = self.insert(T::NAME, T::ID_FIELD, row);
        let mut saved = entity.clone();
        saved.set_id(id);
        Ok(saved)
    }
}

/// JSON object of an entity without nested reference objects.
pub fn flat_row<T: Resource>(entity: &T) -> Result<Map<String, Value>, serde_json::Error> {
    match serde_json::to_value(entity)? {
        Value::Object(map) => Ok(map.into_iter().filter(|(_, v)| !v.is_object()).collect()),
        other => Err(serde::de::Error::custom(format!(
            "{} serialized to {} instead of an object",
            T::NAME,
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_department::Department;
    use contracts::domain::a002_designation::Designation;
    use contracts::domain::a003_employee::Employee;
    use contracts::domain::a004_instructor::Instructor;

    fn department(name: &str) -> Department {
        Department {
            department_name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_ids_are_monotonic_and_not_reused() {
        let store = Store::new();
        let a = store.insert_entity(&department("Sales")).unwrap();
        let b = store.insert_entity(&department("Training")).unwrap();
        assert_eq!((a.department_id, b.department_id), (1, 2));

        assert!(store.delete("Department", 2));
        let c = store.insert_entity(&department("Accounts")).unwrap();
        assert_eq!(c.department_id, 3);
        assert_eq!(store.all::<Department>().len(), 2);
    }

    #[test]
    fn test_update_keeps_route_id() {
        let store = Store::new();
        let saved = store.insert_entity(&department("Sales")).unwrap();
        let mut changed = flat_row(&department("Marketing")).unwrap();
        changed.insert("departmentId".into(), Value::from(99));
        assert!(store.update("Department", "departmentId", saved.department_id, changed));

        let row = store.row("Department", 1).unwrap();
        assert_eq!(row["departmentId"], Value::from(1));
        assert_eq!(row["departmentName"], Value::from("Marketing"));
        assert!(!store.update("Department", "departmentId", 42, Map::new()));
    }

    #[test]
    fn test_expand_two_levels() {
        let store = Store::new();
        let dept = store.insert_entity(&department("Training")).unwrap();
        let employee = store
            .insert_entity(&Employee {
                employee_name: "Karim".into(),
                department_id: dept.department_id,
                designation_id: 77,
                ..Default::default()
            })
            .unwrap();
        let instructor = store
            .insert_entity(&Instructor {
                instructor_name: "Karim".into(),
                employee_id: employee.employee_id,
                ..Default::default()
            })
            .unwrap();

        let found: Instructor = store.find_expanded(instructor.instructor_id).unwrap();
        let nested = found.employee.unwrap();
        assert_eq!(nested.employee_name, "Karim");
        assert_eq!(nested.department.unwrap().department_name, "Training");
        // dangling designation id is simply not embedded
        assert!(nested.designation.is_none());
    }

    #[test]
    fn test_flat_row_drops_nested_objects() {
        let designation = Designation {
            designation_title: "Trainer".into(),
            department_id: 1,
            department: Some(Box::new(department("Training"))),
            ..Default::default()
        };
        let row = flat_row(&designation).unwrap();
        assert!(row.get("department").is_none());
        assert_eq!(row["departmentId"], Value::from(1));
    }
}

//! List page state: load status, search, sort and pagination.
//!
//! Everything here runs on already-fetched rows; the backend returns the
//! full collection and the page narrows it down.

use std::cmp::Ordering;

use serde_json::Value;

use super::display::DisplayField;
use super::lookup::id_of;
use crate::domain::common::Resource;

pub const PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Async load status of a page.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

pub trait Searchable {
    /// Case-insensitive match against an already lowercased needle.
    fn matches_filter(&self, needle: &str) -> bool;
}

pub trait Sortable {
    fn compare_by_column(&self, other: &Self, column: usize) -> Ordering;
}

/// One table row: the entity id, its rendered cells and the raw values
/// used for sorting.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityRow {
    pub id: i64,
    pub cells: Vec<String>,
    sort_keys: Vec<Value>,
}

impl EntityRow {
    pub fn from_entity<T: Resource>(entity: &T) -> Self {
        let json = serde_json::to_value(entity).unwrap_or(Value::Null);
        let id = entity
            .id()
            .or_else(|| json.get(T::ID_FIELD).and_then(id_of))
            .unwrap_or_default();
        Self::from_json(id, &json, T::list_columns())
    }

    pub fn from_json(id: i64, json: &Value, columns: &[DisplayField]) -> Self {
        Self {
            id,
            cells: columns.iter().map(|c| c.render(json)).collect(),
            sort_keys: columns
                .iter()
                .map(|c| {
                    super::display::value_at_path(json, c.path)
                        .cloned()
                        .unwrap_or(Value::Null)
                })
                .collect(),
        }
    }
}

impl Searchable for EntityRow {
    fn matches_filter(&self, needle: &str) -> bool {
        self.cells
            .iter()
            .any(|cell| cell.to_lowercase().contains(needle))
    }
}

impl Sortable for EntityRow {
    fn compare_by_column(&self, other: &Self, column: usize) -> Ordering {
        compare_values(
            self.sort_keys.get(column).unwrap_or(&Value::Null),
            other.sort_keys.get(column).unwrap_or(&Value::Null),
        )
    }
}

/// Numbers numerically, strings case-insensitively, nulls last.
fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Greater,
        (_, Value::Null) => Ordering::Less,
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::String(x), Value::String(y)) => x.to_lowercase().cmp(&y.to_lowercase()),
        _ => super::display::plain(a).cmp(&super::display::plain(b)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: usize,
    pub ascending: bool,
}

/// Search text, sort column and page position of a list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub search: String,
    /// Zero based.
    pub page: usize,
    pub page_size: usize,
    pub sort: Option<SortState>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            sort: None,
        }
    }
}

impl ListQuery {
    /// A new search starts from the first page.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.page = 0;
    }

    pub fn set_page_size(&mut self, size: usize) {
        if PAGE_SIZES.contains(&size) {
            self.page_size = size;
            self.page = 0;
        }
    }

    /// First click sorts ascending, the next one reverses.
    pub fn toggle_sort(&mut self, column: usize) {
        self.sort = match self.sort {
            Some(s) if s.column == column => Some(SortState {
                column,
                ascending: !s.ascending,
            }),
            _ => Some(SortState {
                column,
                ascending: true,
            }),
        };
    }

    pub fn sort_indicator(&self, column: usize) -> &'static str {
        match self.sort {
            Some(s) if s.column == column && s.ascending => " ▲",
            Some(s) if s.column == column => " ▼",
            _ => "",
        }
    }

    /// Filter, sort and slice `rows`. The page index is clamped to the
    /// filtered result.
    pub fn apply<R>(&self, rows: &[R]) -> ListPage<R>
    where
        R: Searchable + Sortable + Clone,
    {
        let mut matched = filter_list(rows, &self.search);
        if let Some(sort) = self.sort {
            sort_list(&mut matched, sort.column, sort.ascending);
        }

        let total = matched.len();
        let page_size = self.page_size.max(1);
        let page_count = total.div_ceil(page_size).max(1);
        let page = self.page.min(page_count - 1);
        let items = matched
            .into_iter()
            .skip(page * page_size)
            .take(page_size)
            .collect();

        ListPage {
            items,
            total,
            page,
            page_count,
            page_size,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<R> {
    pub items: Vec<R>,
    /// Rows matching the search.
    pub total: usize,
    pub page: usize,
    pub page_count: usize,
    pub page_size: usize,
}

impl<R> ListPage<R> {
    /// "Showing 11-20 of 42"
    pub fn range_label(&self) -> String {
        if self.total == 0 {
            return "No records".to_string();
        }
        let start = self.page * self.page_size + 1;
        let end = start + self.items.len() - 1;
        format!("Showing {}-{} of {}", start, end, self.total)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count
    }
}

pub fn filter_list<R: Searchable + Clone>(rows: &[R], filter: &str) -> Vec<R> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| row.matches_filter(&needle))
        .cloned()
        .collect()
}

pub fn sort_list<R: Sortable>(rows: &mut [R], column: usize, ascending: bool) {
    rows.sort_by(|a, b| {
        let cmp = a.compare_by_column(b, column);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const COLUMNS: &[DisplayField] = &[
        DisplayField::text("Name", &["visitorName"]),
        DisplayField::number("Age", &["age"]),
    ];

    fn rows(n: usize) -> Vec<EntityRow> {
        (1..=n)
            .map(|i| {
                EntityRow::from_json(
                    i as i64,
                    &json!({"visitorName": format!("Visitor {}", i), "age": 20 + (i % 7)}),
                    COLUMNS,
                )
            })
            .collect()
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let data = vec![
            EntityRow::from_json(1, &json!({"visitorName": "Jane Doe", "age": 30}), COLUMNS),
            EntityRow::from_json(2, &json!({"visitorName": "John Roe", "age": 41}), COLUMNS),
        ];
        let mut query = ListQuery::default();
        query.set_search("JANE");
        let page = query.apply(&data);
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id, 1);

        query.set_search("41");
        assert_eq!(query.apply(&data).items[0].id, 2);
    }

    #[test]
    fn test_pagination_and_clamping() {
        let data = rows(42);
        let mut query = ListQuery::default();
        query.page = 4;
        let page = query.apply(&data);
        assert_eq!(page.page_count, 5);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.range_label(), "Showing 41-42 of 42");
        assert!(!page.has_next());

        // shrinking the result pulls the page back into range
        query.search = "Visitor 1".to_string();
        let page = query.apply(&data);
        assert_eq!(page.page, page.page_count - 1);
        assert!(!page.items.is_empty());
    }

    #[test]
    fn test_page_size_must_be_offered() {
        let mut query = ListQuery::default();
        query.set_page_size(25);
        assert_eq!(query.page_size, 25);
        query.set_page_size(7);
        assert_eq!(query.page_size, 25);
    }

    #[test]
    fn test_sort_toggles_direction() {
        let data = vec![
            EntityRow::from_json(1, &json!({"visitorName": "b", "age": 9}), COLUMNS),
            EntityRow::from_json(2, &json!({"visitorName": "A", "age": 10}), COLUMNS),
            EntityRow::from_json(3, &json!({"visitorName": null, "age": 100}), COLUMNS),
        ];
        let mut query = ListQuery::default();
        query.toggle_sort(1);
        let ids: Vec<i64> = query.apply(&data).items.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        query.toggle_sort(1);
        assert_eq!(query.sort_indicator(1), " ▼");
        let ids: Vec<i64> = query.apply(&data).items.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);

        query.toggle_sort(0);
        let ids: Vec<i64> = query.apply(&data).items.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_empty_list() {
        let page = ListQuery::default().apply::<EntityRow>(&[]);
        assert_eq!(page.page_count, 1);
        assert_eq!(page.range_label(), "No records");
    }
}

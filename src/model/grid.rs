//! Grid data model types
//!
//! A grid is an ordered list of records. Row position is the only identity a
//! record has, so sorting changes which record a row index refers to.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::columns::Column;

/// One row: a value for every column, blank meaning unset
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    cells: [String; Column::COUNT],
}

impl Record {
    /// A record with every field blank
    pub fn blank() -> Self {
        Self::default()
    }

    /// Build a record from `(column, value)` pairs; unnamed columns stay blank
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (Column, &'a str)>) -> Self {
        let mut record = Self::blank();
        for (column, value) in pairs {
            record.set(column, value);
        }
        record
    }

    pub fn get(&self, column: Column) -> &str {
        &self.cells[column.index()]
    }

    pub fn set(&mut self, column: Column, value: impl Into<String>) {
        self.cells[column.index()] = value.into();
    }

    /// Values in column order
    pub fn values(&self) -> impl Iterator<Item = (Column, &str)> {
        Column::ALL.iter().map(move |&c| (c, self.get(c)))
    }

    /// Number of fields held; always the full column count
    pub fn field_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(String::is_empty)
    }
}

/// Records serialize as objects keyed by column name, in column order
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Column::COUNT))?;
        for (column, value) in self.values() {
            map.serialize_entry(column.name(), value)?;
        }
        map.end()
    }
}

/// Ordered sequence of records
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Grid {
    records: Vec<Record>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grid of `rows` blank records
    pub fn blank(rows: usize) -> Self {
        Self {
            records: vec![Record::blank(); rows],
        }
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn record(&self, row: usize) -> Option<&Record> {
        self.records.get(row)
    }

    /// Cell value, `None` when the row is out of range
    pub fn get(&self, row: usize, column: Column) -> Option<&str> {
        self.records.get(row).map(|r| r.get(column))
    }

    /// Set a cell value. Returns false (and does nothing) for a missing row.
    pub fn set(&mut self, row: usize, column: Column, value: impl Into<String>) -> bool {
        match self.records.get_mut(row) {
            Some(record) => {
                record.set(column, value);
                true
            }
            None => false,
        }
    }

    /// Append one blank record at the end
    pub fn push_blank(&mut self) {
        self.records.push(Record::blank());
    }

    /// Stable sort by one column using [`collate`] ordering
    pub fn sort_by_column(&mut self, column: Column) {
        let collator = root_collator();
        self.records.sort_by(|a, b| {
            compare_with(collator.as_ref(), a.get(column), b.get(column))
        });
    }
}

/// Root-locale collator at tertiary strength: accents and case only break
/// ties, lowercase before uppercase.
fn root_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    match Collator::try_new(&Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(e) => {
            tracing::warn!("Collation data unavailable, sorting by code point: {}", e);
            None
        }
    }
}

fn compare_with(collator: Option<&Collator>, a: &str, b: &str) -> Ordering {
    match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    }
}

/// Locale-aware string ordering used for sorting
pub fn collate(a: &str, b: &str) -> Ordering {
    compare_with(root_collator().as_ref(), a, b)
}

/// Immutable copy of a grid captured for undo/redo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    grid: Grid,
}

impl Snapshot {
    /// Consume the snapshot, handing its grid back for use as current state
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

impl From<Grid> for Snapshot {
    fn from(grid: Grid) -> Self {
        Self { grid }
    }
}

/// Holds the current grid. No history side effects and no value validation.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    grid: Grid,
}

impl RecordStore {
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    pub fn current(&self) -> &Grid {
        &self.grid
    }

    /// Swap in a new grid, returning the old one
    pub fn replace(&mut self, grid: Grid) -> Grid {
        std::mem::replace(&mut self.grid, grid)
    }

    pub fn cell(&self, row: usize, column: Column) -> Option<&str> {
        self.grid.get(row, column)
    }

    pub fn set_cell(&mut self, row: usize, column: Column, value: impl Into<String>) -> bool {
        self.grid.set(row, column, value)
    }

    pub fn row_count(&self) -> usize {
        self.grid.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(name: &str, submitter: &str) -> Record {
        Record::from_pairs([(Column::JobRequest, name), (Column::Submitter, submitter)])
    }

    #[test]
    fn test_blank_grid_has_full_records() {
        let grid = Grid::blank(28);
        assert_eq!(grid.len(), 28);
        for record in grid.records() {
            assert_eq!(record.field_count(), Column::COUNT);
            assert!(record.is_blank());
        }
    }

    #[test]
    fn test_grid_get_set() {
        let mut grid = Grid::blank(2);
        assert!(grid.set(1, Column::Status, "Blocked"));
        assert_eq!(grid.get(1, Column::Status), Some("Blocked"));
        assert_eq!(grid.get(0, Column::Status), Some(""));
        assert_eq!(grid.get(5, Column::Status), None);
        assert!(!grid.set(5, Column::Status, "Blocked"));
    }

    #[test]
    fn test_push_blank_appends_at_end() {
        let mut grid = Grid::from_records(vec![job("a", "x")]);
        grid.push_blank();
        assert_eq!(grid.len(), 2);
        assert_eq!(grid.get(0, Column::JobRequest), Some("a"));
        assert!(grid.record(1).unwrap().is_blank());
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut grid = Grid::from_records(vec![
            job("same", "first"),
            job("same", "second"),
            job("same", "third"),
            job("alpha", "fourth"),
        ]);
        grid.sort_by_column(Column::JobRequest);
        let order: Vec<&str> = grid
            .records()
            .iter()
            .map(|r| r.get(Column::Submitter))
            .collect();
        assert_eq!(order, vec!["fourth", "first", "second", "third"]);
    }

    #[test]
    fn test_sort_blank_first_and_case_insensitive() {
        let mut grid = Grid::from_records(vec![
            job("banana", ""),
            job("", ""),
            job("Apple", ""),
            job("cherry", ""),
        ]);
        grid.sort_by_column(Column::JobRequest);
        let names: Vec<&str> = grid
            .records()
            .iter()
            .map(|r| r.get(Column::JobRequest))
            .collect();
        assert_eq!(names, vec!["", "Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_collate() {
        assert_eq!(collate("a", "B"), Ordering::Less);
        assert_eq!(collate("same", "same"), Ordering::Equal);
        assert_eq!(collate("", "a"), Ordering::Less);
        assert_eq!(collate("a", "A"), Ordering::Less);
        assert_eq!(collate("éclair", "zebra"), Ordering::Less);
        assert_eq!(collate("resume", "résumé"), Ordering::Less);
    }

    #[test]
    fn test_record_serializes_in_column_order() {
        let record = job("Fix roof", "Dana");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.starts_with("{\"Job Request\":\"Fix roof\",\"Submitted\":\"\""));
        assert!(json.ends_with("\"Est. Value\":\"\"}"));
    }

    #[test]
    fn test_snapshot_is_independent_of_source() {
        let mut grid = Grid::blank(1);
        let snapshot = Snapshot::from(grid.clone());
        grid.set(0, Column::Url, "changed");
        assert_eq!(snapshot.into_grid().get(0, Column::Url), Some(""));
    }

    #[test]
    fn test_store_replace_returns_previous() {
        let mut store = RecordStore::new(Grid::blank(3));
        let old = store.replace(Grid::blank(1));
        assert_eq!(old.len(), 3);
        assert_eq!(store.row_count(), 1);
    }
}

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::record::{FieldValue, Record, RecordId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("duplicate record id {0}")]
    DuplicateId(RecordId),
}

/// Records captured from one fetch. Cloning shares the underlying rows.
#[derive(Debug, Clone, Default)]
pub struct DatasetSnapshot {
    records: Arc<Vec<Record>>,
    positions: Arc<HashMap<RecordId, usize>>,
}

impl DatasetSnapshot {
    pub fn new(records: Vec<Record>) -> Result<Self, SnapshotError> {
        let mut positions = HashMap::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            if positions.insert(record.id().clone(), idx).is_some() {
                return Err(SnapshotError::DuplicateId(record.id().clone()));
            }
        }
        Ok(Self {
            records: Arc::new(records),
            positions: Arc::new(positions),
        })
    }

    pub fn empty() -> Self {
        Self::default()
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

    pub fn contains(&self, id: &RecordId) -> bool {
        self.positions.contains_key(id)
    }

    pub fn find(&self, id: &RecordId) -> Option<&Record> {
        self.positions.get(id).map(|idx| &self.records[*idx])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub key: String,
    pub header: String,
}

impl Column {
    pub fn new(key: &str, header: &str) -> Self {
        Self {
            key: key.to_string(),
            header: header.to_string(),
        }
    }
}

pub fn product_columns() -> Vec<Column> {
    vec![
        Column::new("id", "ID"),
        Column::new("name", "Name"),
        Column::new("price", "Price"),
        Column::new("quantity", "Quantity"),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortState {
    #[default]
    Unsorted,
    Sorted {
        column: String,
        direction: SortDirection,
    },
}

impl SortState {
    pub fn direction_for(&self, key: &str) -> Option<SortDirection> {
        match self {
            SortState::Sorted { column, direction } if column == key => Some(*direction),
            _ => None,
        }
    }

    /// Next state when the header of `key` is clicked:
    /// inactive -> ascending -> descending -> unsorted.
    pub fn toggled(&self, key: &str) -> SortState {
        match self.direction_for(key) {
            None => SortState::Sorted {
                column: key.to_string(),
                direction: SortDirection::Asc,
            },
            Some(SortDirection::Asc) => SortState::Sorted {
                column: key.to_string(),
                direction: SortDirection::Desc,
            },
            Some(SortDirection::Desc) => SortState::Unsorted,
        }
    }
}

/// Orders two cells of the sort column. Null and missing values go last in
/// both directions.
pub fn compare_cells(
    left: Option<&FieldValue>,
    right: Option<&FieldValue>,
    direction: SortDirection,
) -> Ordering {
    let left = left.filter(|value| !value.is_null());
    let right = right.filter(|value| !value.is_null());
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => match direction {
            SortDirection::Asc => a.natural_cmp(b),
            SortDirection::Desc => b.natural_cmp(a),
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    Ten,
    Twenty,
    TwentyFive,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Ten, PageSize::Twenty, PageSize::TwentyFive];

    pub fn rows(self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::TwentyFive => 25,
        }
    }

    pub fn from_rows(rows: usize) -> Option<PageSize> {
        PageSize::ALL.into_iter().find(|size| size.rows() == rows)
    }
}

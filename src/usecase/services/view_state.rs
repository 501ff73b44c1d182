use tracing::{debug, error, info, warn};

use crate::domain::entities::dataset::{
    compare_cells, product_columns, Column, DatasetSnapshot, PageSize, SortState,
};
use crate::domain::entities::record::{Record, RecordId};
use crate::usecase::ports::provider::FetchError;
use crate::usecase::services::notices::Notices;
use crate::usecase::services::selection::SelectionTracker;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Sort, pagination and selection state over one dataset snapshot.
///
/// All operations are total: out-of-range pages are clamped, unsupported page
/// sizes are ignored and unknown record ids are no-ops.
#[derive(Debug, Clone)]
pub struct ViewStateController {
    columns: Vec<Column>,
    snapshot: DatasetSnapshot,
    // snapshot indices in display order
    order: Vec<usize>,
    sort: SortState,
    page_size: PageSize,
    page_index: usize,
    selection: SelectionTracker,
    load_state: LoadState,
    latest_fetch: u64,
}

impl Default for ViewStateController {
    fn default() -> Self {
        Self::new(product_columns())
    }
}

impl ViewStateController {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            snapshot: DatasetSnapshot::empty(),
            order: Vec::new(),
            sort: SortState::Unsorted,
            page_size: PageSize::default(),
            page_index: 0,
            selection: SelectionTracker::default(),
            load_state: LoadState::Idle,
            latest_fetch: 0,
        }
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self.clamp_page_index();
        self
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn snapshot(&self) -> &DatasetSnapshot {
        &self.snapshot
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_fetch += 1;
        self.load_state = LoadState::Loading;
        info!(ticket = self.latest_fetch, "fetching products");
        FetchTicket(self.latest_fetch)
    }

    /// Installs the outcome of the fetch identified by `ticket`. Results from
    /// an older fetch are dropped and `false` is returned.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Record>, FetchError>,
        notices: &mut Notices,
    ) -> bool {
        if ticket.0 != self.latest_fetch {
            warn!(
                ticket = ticket.0,
                latest = self.latest_fetch,
                "discarding stale fetch result"
            );
            return false;
        }

        match result.and_then(|records| DatasetSnapshot::new(records).map_err(FetchError::from)) {
            Ok(snapshot) => {
                info!(rows = snapshot.len(), "products loaded");
                self.replace_snapshot(snapshot);
                self.load_state = LoadState::Ready;
            }
            Err(err) => {
                error!(error = %err, "error fetching data");
                notices.error(format!("Failed to load products: {err}"));
                self.load_state = LoadState::Failed(err.to_string());
            }
        }
        true
    }

    /// Replaces the dataset wholesale. The selection is discarded, the page
    /// resets to the first one and the active sort is re-applied.
    pub fn replace_snapshot(&mut self, snapshot: DatasetSnapshot) {
        self.snapshot = snapshot;
        self.selection.clear();
        self.page_index = 0;
        self.resort();
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    /// Cycles the column's sort and returns to the first page.
    pub fn set_sort(&mut self, column_key: &str) -> &SortState {
        self.sort = self.sort.toggled(column_key);
        self.page_index = 0;
        debug!(sort = ?self.sort, "sort changed");
        self.resort();
        &self.sort
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Accepts only 10, 20 or 25 rows; other values leave the state untouched.
    pub fn set_page_size(&mut self, rows: usize) -> bool {
        let Some(page_size) = PageSize::from_rows(rows) else {
            debug!(rows, "ignoring unsupported page size");
            return false;
        };
        self.page_size = page_size;
        self.clamp_page_index();
        debug!(rows, page_index = self.page_index, "page size changed");
        true
    }

    pub fn total_rows(&self) -> usize {
        self.snapshot.len()
    }

    pub fn page_count(&self) -> usize {
        self.total_rows().div_ceil(self.page_size.rows())
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn goto_page(&mut self, index: i64) -> usize {
        let last = self.page_count().saturating_sub(1);
        self.page_index = if index <= 0 {
            0
        } else {
            usize::try_from(index).unwrap_or(usize::MAX).min(last)
        };
        debug!(page_index = self.page_index, "page changed");
        self.page_index
    }

    pub fn first_page(&mut self) -> usize {
        self.goto_page(0)
    }

    pub fn previous_page(&mut self) -> usize {
        self.goto_page(self.page_index as i64 - 1)
    }

    pub fn next_page(&mut self) -> usize {
        self.goto_page(self.page_index as i64 + 1)
    }

    pub fn last_page(&mut self) -> usize {
        self.goto_page(self.page_count() as i64 - 1)
    }

    pub fn can_previous_page(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next_page(&self) -> bool {
        self.page_index + 1 < self.page_count()
    }

    /// Rows of the current page in display order.
    pub fn visible_page(&self) -> Vec<&Record> {
        let records = self.snapshot.records();
        let start = (self.page_index * self.page_size.rows()).min(self.order.len());
        let end = (start + self.page_size.rows()).min(self.order.len());
        self.order[start..end]
            .iter()
            .map(|idx| &records[*idx])
            .collect()
    }

    pub fn visible_ids(&self) -> Vec<RecordId> {
        self.visible_page()
            .into_iter()
            .map(|record| record.id().clone())
            .collect()
    }

    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    pub fn toggle(&mut self, id: &RecordId) -> bool {
        let toggled = self.selection.toggle(&self.snapshot, id);
        if !toggled {
            warn!(%id, "ignoring selection toggle for unknown record");
        }
        toggled
    }

    /// Selects or deselects every record in scope: the visible page when
    /// `current_page_only` is set, otherwise the whole snapshot.
    pub fn toggle_all(&mut self, current_page_only: bool) -> bool {
        let scope: Vec<RecordId> = if current_page_only {
            self.visible_ids()
        } else {
            self.snapshot
                .records()
                .iter()
                .map(|record| record.id().clone())
                .collect()
        };
        self.selection.toggle_all(&scope)
    }

    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.selection.is_selected(id)
    }

    pub fn selected_ids(&self) -> Vec<RecordId> {
        self.selection.selected_ids()
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn is_page_fully_selected(&self) -> bool {
        self.selection.all_selected(&self.visible_ids())
    }

    pub fn is_page_partially_selected(&self) -> bool {
        let ids = self.visible_ids();
        self.selection.any_selected(&ids) && !self.selection.all_selected(&ids)
    }

    fn clamp_page_index(&mut self) {
        self.page_index = self.page_index.min(self.page_count().saturating_sub(1));
    }

    fn resort(&mut self) {
        let records = self.snapshot.records();
        let mut order: Vec<usize> = (0..records.len()).collect();
        if let SortState::Sorted { column, direction } = &self.sort {
            // sort_by is stable, so ties keep snapshot order
            order.sort_by(|a, b| {
                compare_cells(records[*a].get(column), records[*b].get(column), *direction)
            });
        }
        self.order = order;
    }
}

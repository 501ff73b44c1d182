use std::collections::BTreeSet;

use crate::domain::entities::dataset::DatasetSnapshot;
use crate::domain::entities::record::RecordId;

/// Selected rows keyed by record id, so membership does not depend on the
/// current sort order or page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    selected: BTreeSet<RecordId>,
}

impl SelectionTracker {
    /// Flips membership of `id`. Ids that are not part of `snapshot` are
    /// ignored and `false` is returned.
    pub fn toggle(&mut self, snapshot: &DatasetSnapshot, id: &RecordId) -> bool {
        if !snapshot.contains(id) {
            return false;
        }
        if !self.selected.remove(id) {
            self.selected.insert(id.clone());
        }
        true
    }

    /// Selects every id in `scope`, or deselects all of them when they are
    /// already all selected. Returns whether the scope ends up selected.
    pub fn toggle_all(&mut self, scope: &[RecordId]) -> bool {
        if scope.is_empty() {
            return false;
        }
        if self.all_selected(scope) {
            for id in scope {
                self.selected.remove(id);
            }
            false
        } else {
            self.selected.extend(scope.iter().cloned());
            true
        }
    }

    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.selected.contains(id)
    }

    pub fn all_selected(&self, scope: &[RecordId]) -> bool {
        !scope.is_empty() && scope.iter().all(|id| self.selected.contains(id))
    }

    pub fn any_selected(&self, scope: &[RecordId]) -> bool {
        scope.iter().any(|id| self.selected.contains(id))
    }

    /// Selected ids in ascending order.
    pub fn selected_ids(&self) -> Vec<RecordId> {
        self.selected.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

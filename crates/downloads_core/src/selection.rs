use std::collections::BTreeSet;

use crate::TaskId;

/// Ids selected for batch actions.
///
/// Every mutator that can admit ids takes the current uncompleted id set and
/// refuses ids outside it, so the set never holds a completed or cancelled id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    ids: BTreeSet<TaskId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many ids were newly selected.
    pub fn add(
        &mut self,
        ids: impl IntoIterator<Item = TaskId>,
        eligible: &BTreeSet<TaskId>,
    ) -> usize {
        ids.into_iter()
            .filter(|id| eligible.contains(id))
            .filter(|id| self.ids.insert(*id))
            .count()
    }

    /// Returns how many ids were deselected.
    pub fn remove(&mut self, ids: impl IntoIterator<Item = TaskId>) -> usize {
        ids.into_iter().filter(|id| self.ids.remove(id)).count()
    }

    /// Non-additive pick of one item.
    ///
    /// An already selected id leaves the whole selection untouched, so opening
    /// a context menu over a multi-selection keeps it.
    pub fn replace_with_single(&mut self, id: TaskId, eligible: &BTreeSet<TaskId>) {
        if self.ids.contains(&id) {
            return;
        }
        self.ids.clear();
        if eligible.contains(&id) {
            self.ids.insert(id);
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drops ids that left the uncompleted projection; returns them.
    pub fn prune(&mut self, eligible: &BTreeSet<TaskId>) -> Vec<TaskId> {
        let stale: Vec<TaskId> = self.ids.difference(eligible).copied().collect();
        for id in &stale {
            self.ids.remove(id);
        }
        stale
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.ids.contains(&id)
    }

    /// Selected ids in ascending order.
    pub fn ids(&self) -> Vec<TaskId> {
        self.ids.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

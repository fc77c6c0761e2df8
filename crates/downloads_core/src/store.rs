use std::collections::BTreeMap;

use crate::{TaskEvent, TaskId, TaskRecord, TaskState};

/// Canonical task state, one record per item id.
///
/// `apply` is the only mutator. Records are never removed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskStore {
    records: BTreeMap<TaskId, TaskRecord>,
    next_seq: u64,
}

/// What a single `TaskStore::apply` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    pub item_id: TaskId,
    pub inserted: bool,
    /// False when the event replayed the record's current contents.
    pub changed: bool,
    /// The record entered or left the uncompleted projection.
    pub membership_changed: bool,
    pub completed: bool,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts the record for `event.item_id`, overwriting every mutable field.
    pub fn apply(&mut self, event: TaskEvent) -> Applied {
        let TaskEvent {
            item_id,
            state,
            downloaded_count,
            total_count,
            mut snapshot,
        } = event;

        let completed = state == TaskState::Completed;
        if completed {
            snapshot.is_downloaded = true;
        }

        let was_uncompleted = self
            .records
            .get(&item_id)
            .map(|record| !record.state.is_terminal());

        let seq = match self.records.get(&item_id) {
            Some(existing) => existing.seq,
            None => {
                let seq = self.next_seq;
                self.next_seq += 1;
                seq
            }
        };

        let next = TaskRecord {
            state,
            downloaded_count,
            total_count,
            snapshot,
            seq,
        };
        let previous = self.records.insert(item_id, next);

        let inserted = previous.is_none();
        let changed = previous.as_ref() != self.records.get(&item_id);
        let is_uncompleted = !state.is_terminal();
        let membership_changed = match was_uncompleted {
            Some(was) => was != is_uncompleted,
            None => is_uncompleted,
        };

        Applied {
            item_id,
            inserted,
            changed,
            membership_changed,
            completed,
        }
    }

    pub fn get(&self, id: TaskId) -> Option<&TaskRecord> {
        self.records.get(&id)
    }

    pub fn state_of(&self, id: TaskId) -> Option<TaskState> {
        self.records.get(&id).map(|record| record.state)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (TaskId, &TaskRecord)> {
        self.records.iter().map(|(id, record)| (*id, record))
    }

    /// Records in the order their ids were first seen.
    pub fn in_insertion_order(&self) -> Vec<(TaskId, &TaskRecord)> {
        let mut records: Vec<_> = self.iter().collect();
        records.sort_by_key(|(_, record)| record.seq);
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ItemSnapshot;

    fn event(id: TaskId, state: TaskState, downloaded: u32, total: u32) -> TaskEvent {
        TaskEvent {
            item_id: id,
            state,
            downloaded_count: downloaded,
            total_count: total,
            snapshot: ItemSnapshot {
                id,
                title: format!("comic {id}"),
                ..ItemSnapshot::default()
            },
        }
    }

    #[test]
    fn first_event_inserts() {
        let mut store = TaskStore::new();
        let applied = store.apply(event(1, TaskState::Pending, 0, 0));
        assert!(applied.inserted);
        assert!(applied.changed);
        assert!(applied.membership_changed);
        assert!(!applied.completed);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn terminal_first_event_does_not_enter_uncompleted() {
        let mut store = TaskStore::new();
        let applied = store.apply(event(1, TaskState::Completed, 3, 3));
        assert!(applied.inserted);
        assert!(!applied.membership_changed);
        assert!(applied.completed);
    }

    #[test]
    fn progress_overwrites_without_membership_change() {
        let mut store = TaskStore::new();
        store.apply(event(1, TaskState::Pending, 0, 0));
        let applied = store.apply(event(1, TaskState::Downloading, 4, 10));
        assert!(!applied.inserted);
        assert!(applied.changed);
        assert!(!applied.membership_changed);

        let record = store.get(1).unwrap();
        assert_eq!(record.state, TaskState::Downloading);
        assert_eq!((record.downloaded_count, record.total_count), (4, 10));
    }

    #[test]
    fn replay_is_reported_unchanged() {
        let mut store = TaskStore::new();
        store.apply(event(1, TaskState::Downloading, 4, 10));
        let before = store.clone();

        let applied = store.apply(event(1, TaskState::Downloading, 4, 10));
        assert!(!applied.inserted);
        assert!(!applied.changed);
        assert!(!applied.membership_changed);
        assert_eq!(store, before);
    }

    #[test]
    fn replayed_completion_still_reports_completed() {
        let mut store = TaskStore::new();
        store.apply(event(1, TaskState::Downloading, 9, 10));
        let first = store.apply(event(1, TaskState::Completed, 10, 10));
        assert!(first.changed);
        assert!(first.membership_changed);
        assert!(first.completed);
        assert!(store.get(1).unwrap().snapshot.is_downloaded);

        let replay = store.apply(event(1, TaskState::Completed, 10, 10));
        assert!(!replay.changed);
        assert!(!replay.membership_changed);
        assert!(replay.completed);
    }

    #[test]
    fn redownload_after_completion_reenters_uncompleted() {
        let mut store = TaskStore::new();
        store.apply(event(1, TaskState::Completed, 10, 10));
        let applied = store.apply(event(1, TaskState::Pending, 0, 0));
        assert!(applied.changed);
        assert!(applied.membership_changed);
        assert!(!applied.completed);

        let record = store.get(1).unwrap();
        assert_eq!(record.state, TaskState::Pending);
        // Full overwrite: the new snapshot carries no download flag.
        assert!(!record.snapshot.is_downloaded);
    }

    #[test]
    fn cancellation_leaves_uncompleted() {
        let mut store = TaskStore::new();
        store.apply(event(1, TaskState::Paused, 2, 10));
        let applied = store.apply(event(1, TaskState::Cancelled, 2, 10));
        assert!(applied.membership_changed);
        assert!(!applied.completed);
    }

    #[test]
    fn insertion_order_survives_updates() {
        let mut store = TaskStore::new();
        store.apply(event(5, TaskState::Pending, 0, 0));
        store.apply(event(2, TaskState::Pending, 0, 0));
        store.apply(event(5, TaskState::Downloading, 1, 4));

        let ids: Vec<TaskId> = store.in_insertion_order().iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![5, 2]);
        let ascending: Vec<TaskId> = store.iter().map(|(id, _)| id).collect();
        assert_eq!(ascending, vec![2, 5]);
    }
}

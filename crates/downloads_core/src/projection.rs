//! Pure groupings over the task store, recomputed on every read.
//!
//! Every grouping orders by descending `total_count`; equal totals keep the
//! order in which ids were first seen.
use std::collections::BTreeSet;

use crate::{TaskId, TaskRecord, TaskState, TaskStore};

/// Records that are neither completed nor cancelled. Selection is scoped to these.
pub fn uncompleted(store: &TaskStore) -> Vec<(TaskId, &TaskRecord)> {
    grouped(store, |state| !state.is_terminal())
}

pub fn completed(store: &TaskStore) -> Vec<(TaskId, &TaskRecord)> {
    grouped(store, |state| state == TaskState::Completed)
}

/// Cancelled records belong to neither of the two groupings above.
pub fn cancelled(store: &TaskStore) -> Vec<(TaskId, &TaskRecord)> {
    grouped(store, |state| state == TaskState::Cancelled)
}

pub fn uncompleted_ids(store: &TaskStore) -> BTreeSet<TaskId> {
    store
        .iter()
        .filter(|(_, record)| !record.state.is_terminal())
        .map(|(id, _)| id)
        .collect()
}

fn grouped(store: &TaskStore, keep: impl Fn(TaskState) -> bool) -> Vec<(TaskId, &TaskRecord)> {
    let mut rows: Vec<_> = store
        .in_insertion_order()
        .into_iter()
        .filter(|(_, record)| keep(record.state))
        .collect();
    // Stable sort: ties stay in insertion order.
    rows.sort_by(|(_, a), (_, b)| b.total_count.cmp(&a.total_count));
    rows
}

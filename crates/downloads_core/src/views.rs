use std::collections::BTreeMap;

use downloads_logging::dl_debug;

use crate::{TaskId, TaskState, TaskStore};

/// Independently fetched lists whose entries carry their own download flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CacheKind {
    SearchResults,
    Favorites,
    Downloaded,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewEntry {
    pub id: TaskId,
    pub title: String,
    pub cover: String,
    /// Copied at fetch time; only `ViewSynchronizer` updates it afterwards.
    pub is_downloaded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListCache {
    pub entries: Vec<ViewEntry>,
    pub current_page: i64,
    pub total_page: i64,
}

impl ListCache {
    pub fn single_page(entries: Vec<ViewEntry>) -> Self {
        Self {
            entries,
            current_page: 1,
            total_page: 1,
        }
    }

    pub fn entry(&self, id: TaskId) -> Option<&ViewEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Flags every entry with `id`; true if any flag flipped.
    fn mark_downloaded(&mut self, id: TaskId) -> bool {
        let mut patched = false;
        for entry in self.entries.iter_mut().filter(|entry| entry.id == id) {
            if !entry.is_downloaded {
                entry.is_downloaded = true;
                patched = true;
            }
        }
        patched
    }
}

/// Keeps the download flag of registered list caches in step with completions.
///
/// Never reads back into the task store and never asks for a refetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewSynchronizer {
    caches: BTreeMap<CacheKind, ListCache>,
}

impl ViewSynchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `cache` for `kind`, replacing any previous list of that kind.
    ///
    /// Entries whose task already completed are flagged on the way in; the
    /// number of entries flagged that way is returned.
    pub fn register(&mut self, kind: CacheKind, mut cache: ListCache, store: &TaskStore) -> usize {
        let mut reconciled = 0;
        for entry in cache.entries.iter_mut() {
            if !entry.is_downloaded && store.state_of(entry.id) == Some(TaskState::Completed) {
                entry.is_downloaded = true;
                reconciled += 1;
            }
        }
        dl_debug!(
            "registered {:?} cache entries={} reconciled={}",
            kind,
            cache.entries.len(),
            reconciled
        );
        self.caches.insert(kind, cache);
        reconciled
    }

    pub fn unregister(&mut self, kind: CacheKind) -> Option<ListCache> {
        self.caches.remove(&kind)
    }

    pub fn cache(&self, kind: CacheKind) -> Option<&ListCache> {
        self.caches.get(&kind)
    }

    /// Patches every registered cache holding `id`; returns the kinds changed.
    pub fn on_task_completed(&mut self, id: TaskId) -> Vec<CacheKind> {
        let patched: Vec<CacheKind> = self
            .caches
            .iter_mut()
            .filter_map(|(kind, cache)| cache.mark_downloaded(id).then_some(*kind))
            .collect();
        if !patched.is_empty() {
            dl_debug!("task {} completed, patched caches {:?}", id, patched);
        }
        patched
    }
}

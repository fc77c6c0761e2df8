use downloads_logging::{dl_debug, dl_trace};

use crate::projection;
use crate::view_model::{AppViewModel, TaskRowView};
use crate::{
    Applied, CacheKind, ListCache, Selection, TaskEvent, TaskId, TaskRecord, TaskStore,
    ViewSynchronizer,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    store: TaskStore,
    views: ViewSynchronizer,
    selection: Selection,
    speed: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn views(&self) -> &ViewSynchronizer {
        &self.views
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn speed(&self) -> Option<&str> {
        self.speed.as_deref()
    }

    pub fn view(&self) -> AppViewModel {
        let row = |(id, record): (TaskId, &TaskRecord)| TaskRowView {
            id,
            title: record.snapshot.title.clone(),
            state: record.state,
            indicator: record.indicator(),
            percentage: record.percentage(),
            selected: self.selection.contains(id),
        };
        AppViewModel {
            uncompleted: projection::uncompleted(&self.store)
                .into_iter()
                .map(&row)
                .collect(),
            completed: projection::completed(&self.store).into_iter().map(&row).collect(),
            cancelled: projection::cancelled(&self.store).into_iter().map(&row).collect(),
            selected: self.selection.ids(),
            speed: self.speed.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Store upsert, then cache patching and selection pruning as needed.
    pub(crate) fn apply_task_event(&mut self, event: TaskEvent) -> Applied {
        let applied = self.store.apply(event);
        dl_trace!(
            "task {} applied inserted={} changed={}",
            applied.item_id,
            applied.inserted,
            applied.changed
        );

        if applied.completed && !self.views.on_task_completed(applied.item_id).is_empty() {
            self.dirty = true;
        }
        if applied.membership_changed {
            self.prune_selection();
        }
        if applied.changed {
            self.dirty = true;
        }
        applied
    }

    pub(crate) fn set_speed(&mut self, speed: String) {
        if self.speed.as_deref() != Some(speed.as_str()) {
            self.speed = Some(speed);
            self.dirty = true;
        }
    }

    pub(crate) fn register_list(&mut self, kind: CacheKind, cache: ListCache) {
        self.views.register(kind, cache, &self.store);
        self.dirty = true;
    }

    pub(crate) fn discard_list(&mut self, kind: CacheKind) {
        if self.views.unregister(kind).is_some() {
            self.dirty = true;
        }
    }

    pub(crate) fn begin_selection(&mut self, additive: bool) {
        if !additive && !self.selection.is_empty() {
            self.selection.clear();
            self.dirty = true;
        }
    }

    pub(crate) fn change_selection(&mut self, added: Vec<TaskId>, removed: Vec<TaskId>) {
        let eligible = projection::uncompleted_ids(&self.store);
        let added = self.selection.add(added, &eligible);
        let removed = self.selection.remove(removed);
        if added + removed > 0 {
            self.dirty = true;
        }
    }

    pub(crate) fn select_for_context_menu(&mut self, id: TaskId) {
        let eligible = projection::uncompleted_ids(&self.store);
        let before = self.selection.clone();
        self.selection.replace_with_single(id, &eligible);
        if self.selection != before {
            self.dirty = true;
        }
    }

    pub(crate) fn clear_selection(&mut self) {
        if !self.selection.is_empty() {
            self.selection.clear();
            self.dirty = true;
        }
    }

    fn prune_selection(&mut self) {
        let eligible = projection::uncompleted_ids(&self.store);
        let stale = self.selection.prune(&eligible);
        if !stale.is_empty() {
            dl_debug!("pruned stale selection {:?}", stale);
            self.dirty = true;
        }
    }
}

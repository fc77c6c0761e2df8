use crate::{CacheKind, ListCache, TaskEvent, TaskId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Engine progress or state change for one task.
    TaskEvent(TaskEvent),
    /// Engine aggregate speed, display only.
    SpeedUpdated(String),
    /// A list fetch finished and its result should be kept in sync.
    ListFetched { kind: CacheKind, cache: ListCache },
    /// The list's owner went away.
    ListDiscarded { kind: CacheKind },
    /// User began a selection gesture (drag or click).
    SelectionStarted { additive: bool },
    /// Hit-testing reported the ids that entered and left the selection.
    SelectionChanged {
        added: Vec<TaskId>,
        removed: Vec<TaskId>,
    },
    /// Context menu opened over a task row.
    ContextMenuOpened { id: TaskId },
    SelectionCleared,
    /// Double activation of a task row.
    TaskActivated { id: TaskId },
    PauseSelectedClicked,
    ResumeSelectedClicked,
    CancelSelectedClicked,
    /// Download button on an item in some list.
    DownloadClicked { id: TaskId, already_downloaded: bool },
    RefreshDownloadedClicked,
}

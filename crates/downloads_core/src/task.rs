use serde::{Deserialize, Serialize};

pub type TaskId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskState {
    Pending,
    Downloading,
    Paused,
    Cancelled,
    Completed,
    Failed,
}

impl TaskState {
    /// Display label shown in task rows.
    pub fn label(self) -> &'static str {
        match self {
            TaskState::Pending => "排队中",
            TaskState::Downloading => "下载中",
            TaskState::Paused => "已暂停",
            TaskState::Cancelled => "已取消",
            TaskState::Completed => "下载完成",
            TaskState::Failed => "下载失败",
        }
    }

    /// No further transitions are expected for this record.
    pub fn is_terminal(self) -> bool {
        matches!(self, TaskState::Completed | TaskState::Cancelled)
    }

    /// Queued or transferring; a toggle on such a task pauses it.
    pub fn is_active(self) -> bool {
        matches!(self, TaskState::Pending | TaskState::Downloading)
    }
}

/// Display metadata of a downloadable item as known at the last event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemSnapshot {
    pub id: TaskId,
    pub title: String,
    pub cover: String,
    pub category: String,
    pub image_count: i64,
    pub is_downloaded: bool,
}

/// One decoded progress/state event from the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEvent {
    pub item_id: TaskId,
    pub state: TaskState,
    pub downloaded_count: u32,
    pub total_count: u32,
    pub snapshot: ItemSnapshot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    pub state: TaskState,
    pub downloaded_count: u32,
    pub total_count: u32,
    pub snapshot: ItemSnapshot,
    /// Position in first-insertion order; survives overwrites.
    pub(crate) seq: u64,
}

impl TaskRecord {
    /// `None` while the total is still unmeasured.
    pub fn percentage(&self) -> Option<f64> {
        if self.total_count == 0 {
            return None;
        }
        Some(f64::from(self.downloaded_count) / f64::from(self.total_count) * 100.0)
    }

    pub fn indicator(&self) -> String {
        let label = self.state.label();
        if self.total_count == 0 {
            label.to_string()
        } else {
            format!("{label} {}/{}", self.downloaded_count, self.total_count)
        }
    }
}

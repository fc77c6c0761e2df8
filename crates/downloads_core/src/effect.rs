use crate::TaskId;

/// An engine call requested by `update`, executed later by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    PauseTask { id: TaskId },
    ResumeTask { id: TaskId },
    CancelTask { id: TaskId },
    /// Fetch the full item detail, then create a task from it.
    CreateTask { id: TaskId },
    /// Re-read the engine's downloaded list into the `Downloaded` cache.
    RefreshDownloaded,
}

impl Effect {
    pub fn task_id(&self) -> Option<TaskId> {
        match self {
            Effect::PauseTask { id }
            | Effect::ResumeTask { id }
            | Effect::CancelTask { id }
            | Effect::CreateTask { id } => Some(*id),
            Effect::RefreshDownloaded => None,
        }
    }
}

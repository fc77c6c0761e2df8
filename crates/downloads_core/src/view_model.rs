use crate::{TaskId, TaskState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub uncompleted: Vec<TaskRowView>,
    pub completed: Vec<TaskRowView>,
    pub cancelled: Vec<TaskRowView>,
    pub selected: Vec<TaskId>,
    pub speed: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskRowView {
    pub id: TaskId,
    pub title: String,
    pub state: TaskState,
    pub indicator: String,
    /// `None` while the total is unmeasured.
    pub percentage: Option<f64>,
    pub selected: bool,
}

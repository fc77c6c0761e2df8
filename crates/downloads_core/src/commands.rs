//! Which engine calls a gesture turns into. Execution lives with the host.
use downloads_logging::{dl_debug, dl_info};

use crate::{Effect, TaskId, TaskState, TaskStore};

pub fn pause_many(ids: impl IntoIterator<Item = TaskId>) -> Vec<Effect> {
    ids.into_iter().map(|id| Effect::PauseTask { id }).collect()
}

pub fn resume_many(ids: impl IntoIterator<Item = TaskId>) -> Vec<Effect> {
    ids.into_iter().map(|id| Effect::ResumeTask { id }).collect()
}

pub fn cancel_many(ids: impl IntoIterator<Item = TaskId>) -> Vec<Effect> {
    ids.into_iter().map(|id| Effect::CancelTask { id }).collect()
}

/// Pauses an active task and resumes anything else. Unknown ids yield nothing.
pub fn toggle_single(store: &TaskStore, id: TaskId) -> Option<Effect> {
    let Some(state) = store.state_of(id) else {
        dl_debug!("toggle ignored for unknown task {}", id);
        return None;
    };
    if state.is_active() {
        Some(Effect::PauseTask { id })
    } else {
        Some(Effect::ResumeTask { id })
    }
}

/// A paused task is resumed in place; anything else goes through a fresh
/// detail fetch and task creation.
pub fn start_or_resume(store: &TaskStore, id: TaskId, already_downloaded: bool) -> Effect {
    match store.state_of(id) {
        Some(TaskState::Paused) => Effect::ResumeTask { id },
        state => {
            if already_downloaded && state.is_none() {
                dl_info!("task {} is already downloaded, downloading again", id);
            }
            Effect::CreateTask { id }
        }
    }
}

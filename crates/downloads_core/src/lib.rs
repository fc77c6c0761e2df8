//! Downloads core: canonical task state, list-cache sync and selection.
//!
//! Everything here is synchronous and free of I/O; engine calls are described
//! as [`Effect`]s and executed by the host.
pub mod commands;
mod effect;
mod msg;
pub mod projection;
mod selection;
mod state;
mod store;
mod task;
mod update;
mod view_model;
mod views;

pub use effect::Effect;
pub use msg::Msg;
pub use selection::Selection;
pub use state::AppState;
pub use store::{Applied, TaskStore};
pub use task::{ItemSnapshot, TaskEvent, TaskId, TaskRecord, TaskState};
pub use update::update;
pub use view_model::{AppViewModel, TaskRowView};
pub use views::{CacheKind, ListCache, ViewEntry, ViewSynchronizer};

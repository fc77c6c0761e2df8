use downloads_logging::dl_debug;

use crate::{commands, AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// State never changes in response to a command gesture; only a later
/// `Msg::TaskEvent` moves a task.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::TaskEvent(event) => {
            state.apply_task_event(event);
            Vec::new()
        }
        Msg::SpeedUpdated(speed) => {
            state.set_speed(speed);
            Vec::new()
        }
        Msg::ListFetched { kind, cache } => {
            state.register_list(kind, cache);
            Vec::new()
        }
        Msg::ListDiscarded { kind } => {
            state.discard_list(kind);
            Vec::new()
        }
        Msg::SelectionStarted { additive } => {
            state.begin_selection(additive);
            Vec::new()
        }
        Msg::SelectionChanged { added, removed } => {
            state.change_selection(added, removed);
            Vec::new()
        }
        Msg::ContextMenuOpened { id } => {
            state.select_for_context_menu(id);
            Vec::new()
        }
        Msg::SelectionCleared => {
            state.clear_selection();
            Vec::new()
        }
        Msg::TaskActivated { id } => commands::toggle_single(state.store(), id)
            .into_iter()
            .collect(),
        Msg::PauseSelectedClicked => commands::pause_many(state.selection().ids()),
        Msg::ResumeSelectedClicked => commands::resume_many(state.selection().ids()),
        Msg::CancelSelectedClicked => commands::cancel_many(state.selection().ids()),
        Msg::DownloadClicked {
            id,
            already_downloaded,
        } => vec![commands::start_or_resume(
            state.store(),
            id,
            already_downloaded,
        )],
        Msg::RefreshDownloadedClicked => vec![Effect::RefreshDownloaded],
    };

    if !effects.is_empty() {
        dl_debug!("update produced {} effect(s)", effects.len());
    }
    (state, effects)
}

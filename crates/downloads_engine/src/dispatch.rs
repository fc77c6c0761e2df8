use std::sync::Arc;

use downloads_core::{commands, Effect, TaskId, TaskStore};
use downloads_logging::{dl_error, dl_info};
use futures_util::future::join_all;

use crate::{CommandKind, CommandOutcome, CommandReply, EngineClient, EngineError};

/// Executes effects against the engine, one call per affected id.
///
/// Calls of one batch run concurrently and independently: a failure is logged
/// and reported in its own outcome, the rest still go through.
#[derive(Clone)]
pub struct CommandDispatcher {
    client: Arc<dyn EngineClient>,
}

impl CommandDispatcher {
    pub fn new(client: Arc<dyn EngineClient>) -> Self {
        Self { client }
    }

    /// Outcomes come back in `effects` order, whatever order the calls finished in.
    pub async fn run(&self, effects: Vec<Effect>) -> Vec<CommandOutcome> {
        join_all(effects.into_iter().map(|effect| self.run_one(effect))).await
    }

    pub async fn pause_many(&self, ids: &[TaskId]) -> Vec<CommandOutcome> {
        self.run(commands::pause_many(ids.iter().copied())).await
    }

    pub async fn resume_many(&self, ids: &[TaskId]) -> Vec<CommandOutcome> {
        self.run(commands::resume_many(ids.iter().copied())).await
    }

    pub async fn cancel_many(&self, ids: &[TaskId]) -> Vec<CommandOutcome> {
        self.run(commands::cancel_many(ids.iter().copied())).await
    }

    pub async fn toggle_single(&self, store: &TaskStore, id: TaskId) -> Option<CommandOutcome> {
        let effect = commands::toggle_single(store, id)?;
        Some(self.run_one(effect).await)
    }

    pub async fn start_or_resume(
        &self,
        store: &TaskStore,
        id: TaskId,
        already_downloaded: bool,
    ) -> CommandOutcome {
        let effect = commands::start_or_resume(store, id, already_downloaded);
        self.run_one(effect).await
    }

    async fn run_one(&self, effect: Effect) -> CommandOutcome {
        let id = effect.task_id();
        let (kind, result) = match effect {
            Effect::PauseTask { id } => {
                (CommandKind::Pause, ack(self.client.pause_task(id).await))
            }
            Effect::ResumeTask { id } => {
                (CommandKind::Resume, ack(self.client.resume_task(id).await))
            }
            Effect::CancelTask { id } => {
                (CommandKind::Cancel, ack(self.client.cancel_task(id).await))
            }
            Effect::CreateTask { id } => (CommandKind::Create, self.create(id).await),
            Effect::RefreshDownloaded => (
                CommandKind::RefreshDownloaded,
                self.client
                    .list_downloaded_items()
                    .await
                    .map(CommandReply::Downloaded),
            ),
        };

        match &result {
            Ok(_) => dl_info!("{} command for {:?} accepted", kind, id),
            Err(err) => dl_error!("{} command for {:?} failed: {}", kind, id, err),
        }
        CommandOutcome { kind, id, result }
    }

    async fn create(&self, id: TaskId) -> Result<CommandReply, EngineError> {
        let detail = self.client.fetch_item_detail(id).await?;
        self.client.create_task(detail).await?;
        Ok(CommandReply::Ack)
    }
}

fn ack(result: Result<(), EngineError>) -> Result<CommandReply, EngineError> {
    result.map(|()| CommandReply::Ack)
}

use downloads_core::TaskId;

use crate::{EngineError, ItemDetail};

/// Request/response surface of the external download engine.
#[async_trait::async_trait]
pub trait EngineClient: Send + Sync {
    async fn create_task(&self, detail: ItemDetail) -> Result<(), EngineError>;

    async fn pause_task(&self, id: TaskId) -> Result<(), EngineError>;

    async fn resume_task(&self, id: TaskId) -> Result<(), EngineError>;

    async fn cancel_task(&self, id: TaskId) -> Result<(), EngineError>;

    async fn fetch_item_detail(&self, id: TaskId) -> Result<ItemDetail, EngineError>;

    async fn list_downloaded_items(&self) -> Result<Vec<ItemDetail>, EngineError>;
}

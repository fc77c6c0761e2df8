#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, Once};
use std::time::Duration;

use downloads_core::TaskId;
use downloads_engine::{EngineClient, EngineError, ItemDetail};
use serde_json::{json, Value};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(downloads_logging::initialize_for_tests);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Create(TaskId),
    Pause(TaskId),
    Resume(TaskId),
    Cancel(TaskId),
    FetchDetail(TaskId),
    ListDownloaded,
}

/// Records every call; ids in `rejected` fail, ids in `delays` answer late.
#[derive(Default)]
pub struct FakeEngine {
    calls: Mutex<Vec<Call>>,
    rejected: Mutex<BTreeSet<TaskId>>,
    delays: Mutex<BTreeMap<TaskId, Duration>>,
    details: Mutex<BTreeMap<TaskId, ItemDetail>>,
    downloaded: Mutex<Vec<ItemDetail>>,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject(&self, id: TaskId) {
        self.rejected.lock().unwrap().insert(id);
    }

    pub fn delay(&self, id: TaskId, delay: Duration) {
        self.delays.lock().unwrap().insert(id, delay);
    }

    pub fn add_detail(&self, detail: ItemDetail) {
        self.details.lock().unwrap().insert(detail.id, detail);
    }

    pub fn add_downloaded(&self, detail: ItemDetail) {
        self.downloaded.lock().unwrap().push(detail);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    async fn control(&self, call: Call, id: TaskId) -> Result<(), EngineError> {
        self.calls.lock().unwrap().push(call);
        let delay = self.delays.lock().unwrap().get(&id).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.rejected.lock().unwrap().contains(&id) {
            return Err(EngineError::Rejected {
                message: format!("item {id} refused"),
            });
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EngineClient for FakeEngine {
    async fn create_task(&self, detail: ItemDetail) -> Result<(), EngineError> {
        self.control(Call::Create(detail.id), detail.id).await
    }

    async fn pause_task(&self, id: TaskId) -> Result<(), EngineError> {
        self.control(Call::Pause(id), id).await
    }

    async fn resume_task(&self, id: TaskId) -> Result<(), EngineError> {
        self.control(Call::Resume(id), id).await
    }

    async fn cancel_task(&self, id: TaskId) -> Result<(), EngineError> {
        self.control(Call::Cancel(id), id).await
    }

    async fn fetch_item_detail(&self, id: TaskId) -> Result<ItemDetail, EngineError> {
        self.calls.lock().unwrap().push(Call::FetchDetail(id));
        self.details
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(EngineError::NotFound { id })
    }

    async fn list_downloaded_items(&self) -> Result<Vec<ItemDetail>, EngineError> {
        self.calls.lock().unwrap().push(Call::ListDownloaded);
        Ok(self.downloaded.lock().unwrap().clone())
    }
}

pub fn detail(id: TaskId) -> ItemDetail {
    ItemDetail {
        id,
        title: format!("comic {id}"),
        cover: format!("https://covers.example/{id}.jpg"),
        image_count: 20,
        ..ItemDetail::default()
    }
}

/// A download-task event body shaped like the engine's.
pub fn task_body(id: TaskId, state: &str, downloaded: u32, total: u32) -> Value {
    json!({
        "state": state,
        "comic": {
            "id": id,
            "title": format!("comic {id}"),
            "cover": "",
            "category": "",
            "imageCount": total,
            "tags": [],
            "intro": "",
            "imgList": []
        },
        "downloadedImgCount": downloaded,
        "totalImgCount": total
    })
}

use std::fmt;

use downloads_core::{ItemSnapshot, TaskId, TaskState};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One push from the engine, as delivered by the event channel.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// Body of a download-task event.
    DownloadTask(serde_json::Value),
    /// Body of an aggregate-speed event.
    DownloadSpeed(serde_json::Value),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskEventPayload {
    pub state: TaskState,
    pub comic: Option<ComicPayload>,
    #[serde(default)]
    pub downloaded_img_count: u32,
    #[serde(default)]
    pub total_img_count: u32,
}

/// The item fields a task event carries. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComicPayload {
    pub id: Option<TaskId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub cover: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image_count: i64,
    #[serde(default)]
    pub is_downloaded: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedEventPayload {
    pub speed: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImgInfo {
    pub caption: String,
    pub url: String,
}

/// Full item record returned by the engine's read API; input to task creation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetail {
    pub id: TaskId,
    pub title: String,
    pub cover: String,
    pub category: String,
    pub image_count: i64,
    pub tags: Vec<Tag>,
    pub intro: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_downloaded: Option<bool>,
    pub img_list: Vec<ImgInfo>,
}

impl ItemDetail {
    pub fn snapshot(&self) -> ItemSnapshot {
        ItemSnapshot {
            id: self.id,
            title: self.title.clone(),
            cover: self.cover.clone(),
            category: self.category.clone(),
            image_count: self.image_count,
            is_downloaded: self.is_downloaded.unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("no download task for item {id}")]
    NotFound { id: TaskId },
    #[error("engine rejected the request: {message}")]
    Rejected { message: String },
    #[error("engine unreachable: {message}")]
    Unreachable { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Create,
    Pause,
    Resume,
    Cancel,
    RefreshDownloaded,
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandKind::Create => write!(f, "create"),
            CommandKind::Pause => write!(f, "pause"),
            CommandKind::Resume => write!(f, "resume"),
            CommandKind::Cancel => write!(f, "cancel"),
            CommandKind::RefreshDownloaded => write!(f, "refresh downloaded"),
        }
    }
}

/// Successful engine reply to one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandReply {
    Ack,
    Downloaded(Vec<ItemDetail>),
}

/// Result of one engine call issued by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub kind: CommandKind,
    pub id: Option<TaskId>,
    pub result: Result<CommandReply, EngineError>,
}

impl CommandOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

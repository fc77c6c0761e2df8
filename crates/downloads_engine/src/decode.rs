use downloads_core::{ItemSnapshot, TaskEvent};
use thiserror::Error;

use crate::{SpeedEventPayload, TaskEventPayload};

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("payload carries no item id")]
    MissingId,
}

/// Decodes a download-task event body; the task id is `comic.id`.
pub fn decode_task_event(value: serde_json::Value) -> Result<TaskEvent, DecodeError> {
    let payload: TaskEventPayload = serde_json::from_value(value)?;
    let comic = payload.comic.ok_or(DecodeError::MissingId)?;
    let item_id = comic.id.ok_or(DecodeError::MissingId)?;

    Ok(TaskEvent {
        item_id,
        state: payload.state,
        downloaded_count: payload.downloaded_img_count,
        total_count: payload.total_img_count,
        snapshot: ItemSnapshot {
            id: item_id,
            title: comic.title,
            cover: comic.cover,
            category: comic.category,
            image_count: comic.image_count,
            is_downloaded: comic.is_downloaded.unwrap_or(false),
        },
    })
}

pub fn decode_speed_event(value: serde_json::Value) -> Result<String, DecodeError> {
    let payload: SpeedEventPayload = serde_json::from_value(value)?;
    Ok(payload.speed)
}

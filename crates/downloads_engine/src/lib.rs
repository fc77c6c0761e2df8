//! Downloads engine bridge: event ingestion, command dispatch and the session
//! that drives `downloads_core` against an external download engine.
mod client;
mod decode;
mod dispatch;
mod hub;
mod ingest;
mod notify;
mod session;
mod settings;
mod types;

pub use client::EngineClient;
pub use decode::{decode_speed_event, decode_task_event, DecodeError};
pub use dispatch::CommandDispatcher;
pub use hub::{EventHub, Subscription};
pub use ingest::{EventIngestor, IngestStats};
pub use notify::{Notification, Notifications};
pub use session::SyncSession;
pub use settings::{SettingsError, SyncSettings};
pub use types::{
    CommandKind, CommandOutcome, CommandReply, ComicPayload, EngineError, EngineEvent, ImgInfo,
    ItemDetail, SpeedEventPayload, Tag, TaskEventPayload,
};

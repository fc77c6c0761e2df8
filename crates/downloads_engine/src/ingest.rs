use downloads_core::Msg;
use downloads_logging::{dl_trace, dl_warn};

use crate::decode::{decode_speed_event, decode_task_event};
use crate::{EngineEvent, EventHub, Subscription};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IngestStats {
    pub accepted: u64,
    pub dropped: u64,
}

/// Turns the engine's event stream into core messages.
///
/// Malformed events are logged and counted, never surfaced as errors.
pub struct EventIngestor {
    subscription: Subscription,
    stats: IngestStats,
}

impl EventIngestor {
    pub fn subscribe(hub: &EventHub) -> Self {
        Self {
            subscription: hub.subscribe(),
            stats: IngestStats::default(),
        }
    }

    /// Decodes every event already queued.
    pub fn drain(&mut self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(event) = self.subscription.try_recv() {
            msgs.extend(self.decode(event));
        }
        msgs
    }

    /// Waits for the next well-formed event. `None` once the hub is gone.
    pub async fn next(&mut self) -> Option<Msg> {
        loop {
            let event = self.subscription.recv().await?;
            if let Some(msg) = self.decode(event) {
                return Some(msg);
            }
        }
    }

    pub fn decode(&mut self, event: EngineEvent) -> Option<Msg> {
        let decoded = match event {
            EngineEvent::DownloadTask(body) => decode_task_event(body).map(Msg::TaskEvent),
            EngineEvent::DownloadSpeed(body) => decode_speed_event(body).map(Msg::SpeedUpdated),
        };
        match decoded {
            Ok(msg) => {
                self.stats.accepted += 1;
                dl_trace!("ingested {:?}", msg);
                Some(msg)
            }
            Err(err) => {
                self.stats.dropped += 1;
                dl_warn!("dropped malformed engine event: {}", err);
                None
            }
        }
    }

    pub fn stats(&self) -> IngestStats {
        self.stats
    }

    pub fn unsubscribe(self) -> IngestStats {
        self.subscription.unsubscribe();
        self.stats
    }
}

use std::sync::Arc;

use chrono::Utc;
use downloads_core::{
    update, AppState, AppViewModel, CacheKind, Effect, ListCache, Msg, ViewEntry,
};
use downloads_logging::{dl_debug, dl_info};

use crate::{
    CommandDispatcher, CommandOutcome, CommandReply, EngineClient, EventHub, EventIngestor,
    IngestStats, ItemDetail, Notification, Notifications, SyncSettings,
};

/// One UI session: the single owner and writer of the synchronized state.
///
/// Engine events and user gestures both enter through `&mut self` methods, so
/// each handler runs to completion before the next one touches the state.
pub struct SyncSession {
    state: AppState,
    ingestor: Option<EventIngestor>,
    dispatcher: CommandDispatcher,
    notifications: Notifications,
    settings: SyncSettings,
}

impl SyncSession {
    /// Subscribes to `hub` immediately; call `shutdown` to detach.
    pub fn new(hub: &EventHub, client: Arc<dyn EngineClient>, settings: SyncSettings) -> Self {
        Self {
            state: AppState::new(),
            ingestor: Some(EventIngestor::subscribe(hub)),
            dispatcher: CommandDispatcher::new(client),
            notifications: Notifications::with_capacity(settings.notification_capacity),
            settings,
        }
    }

    /// Initial population of the downloaded list, if enabled.
    pub async fn start(&mut self) {
        if self.settings.refresh_downloaded_on_start {
            self.handle(Msg::RefreshDownloadedClicked).await;
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn consume_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.notifications.take()
    }

    pub fn ingest_stats(&self) -> Option<IngestStats> {
        self.ingestor.as_ref().map(EventIngestor::stats)
    }

    pub fn is_subscribed(&self) -> bool {
        self.ingestor.is_some()
    }

    /// Applies every engine event queued so far; returns how many were applied.
    pub fn pump_events(&mut self) -> usize {
        let Some(ingestor) = self.ingestor.as_mut() else {
            return 0;
        };
        let msgs = ingestor.drain();
        let applied = msgs.len();
        for msg in msgs {
            self.apply(msg);
        }
        applied
    }

    /// Waits for and applies the next engine event. False once the channel is
    /// closed or the session has been shut down.
    pub async fn next_event(&mut self) -> bool {
        let Some(ingestor) = self.ingestor.as_mut() else {
            return false;
        };
        let next = ingestor.next().await;
        match next {
            Some(msg) => {
                self.apply(msg);
                true
            }
            None => false,
        }
    }

    /// Runs a gesture (or any message) through `update`, then executes the
    /// resulting engine calls. Failures end up in `notifications`.
    pub async fn handle(&mut self, msg: Msg) -> Vec<CommandOutcome> {
        let effects = self.apply(msg);
        if effects.is_empty() {
            return Vec::new();
        }
        let outcomes = self.dispatcher.run(effects).await;
        self.absorb(&outcomes);
        outcomes
    }

    /// Detaches from the event channel. Later events are never delivered.
    pub fn shutdown(&mut self) -> Option<IngestStats> {
        let stats = self.ingestor.take().map(EventIngestor::unsubscribe);
        if let Some(stats) = stats {
            dl_info!(
                "session unsubscribed accepted={} dropped={}",
                stats.accepted,
                stats.dropped
            );
        }
        stats
    }

    fn apply(&mut self, msg: Msg) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        effects
    }

    fn absorb(&mut self, outcomes: &[CommandOutcome]) {
        let now = Utc::now();
        for outcome in outcomes {
            match &outcome.result {
                Ok(CommandReply::Downloaded(items)) => {
                    dl_debug!("downloaded list refreshed with {} items", items.len());
                    self.apply(Msg::ListFetched {
                        kind: CacheKind::Downloaded,
                        cache: downloaded_cache(items),
                    });
                }
                Ok(CommandReply::Ack) => {}
                Err(_) => {
                    if let Some(notification) = Notification::from_outcome(outcome, now) {
                        self.notifications.push(notification);
                    }
                }
            }
        }
    }
}

fn downloaded_cache(items: &[ItemDetail]) -> ListCache {
    let entries = items
        .iter()
        .map(|item| ViewEntry {
            id: item.id,
            title: item.title.clone(),
            cover: item.cover.clone(),
            is_downloaded: true,
        })
        .collect();
    ListCache::single_page(entries)
}

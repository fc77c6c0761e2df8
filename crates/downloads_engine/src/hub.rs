use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use downloads_logging::dl_debug;
use tokio::sync::mpsc;

use crate::EngineEvent;

type SubscriberId = u64;

#[derive(Default)]
struct HubInner {
    next_id: SubscriberId,
    subscribers: BTreeMap<SubscriberId, mpsc::UnboundedSender<EngineEvent>>,
}

/// Push channel the engine emits into. Every subscriber sees every event, in
/// emission order.
#[derive(Clone, Default)]
pub struct EventHub {
    inner: Arc<Mutex<HubInner>>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `event` to all live subscribers and returns how many got it.
    pub fn emit(&self, event: EngineEvent) -> usize {
        let mut inner = lock(&self.inner);
        inner
            .subscribers
            .retain(|_, tx| tx.send(event.clone()).is_ok());
        inner.subscribers.len()
    }

    pub fn subscribe(&self) -> Subscription {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut inner = lock(&self.inner);
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.insert(id, tx);
        dl_debug!("event subscriber {} registered", id);
        Subscription {
            id,
            rx,
            hub: Arc::downgrade(&self.inner),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        lock(&self.inner).subscribers.len()
    }
}

/// Receiving end of one `EventHub::subscribe` call.
///
/// Holds only a weak link to the hub, so `recv` ends once every hub handle is
/// gone.
pub struct Subscription {
    id: SubscriberId,
    rx: mpsc::UnboundedReceiver<EngineEvent>,
    hub: Weak<Mutex<HubInner>>,
}

impl Subscription {
    pub fn try_recv(&mut self) -> Option<EngineEvent> {
        self.rx.try_recv().ok()
    }

    /// Waits for the next event; `None` once the hub is dropped.
    pub async fn recv(&mut self) -> Option<EngineEvent> {
        self.rx.recv().await
    }

    /// Detaches from the hub. Events emitted afterwards are not delivered.
    pub fn unsubscribe(self) {
        if let Some(inner) = self.hub.upgrade() {
            lock(&inner).subscribers.remove(&self.id);
        }
        dl_debug!("event subscriber {} removed", self.id);
    }
}

fn lock(inner: &Mutex<HubInner>) -> MutexGuard<'_, HubInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

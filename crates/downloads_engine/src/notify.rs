use std::collections::VecDeque;

use chrono::{DateTime, Utc};

use crate::CommandOutcome;

/// A point-in-time message for the user; nothing else keeps error state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub at: DateTime<Utc>,
    pub title: String,
    pub message: String,
}

impl Notification {
    /// `None` for a successful outcome.
    pub fn from_outcome(outcome: &CommandOutcome, at: DateTime<Utc>) -> Option<Self> {
        let err = outcome.result.as_ref().err()?;
        let title = match outcome.id {
            Some(id) => format!("{} failed for item {}", outcome.kind, id),
            None => format!("{} failed", outcome.kind),
        };
        Some(Self {
            at,
            title,
            message: err.to_string(),
        })
    }
}

/// Most recent notifications, oldest evicted first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notifications {
    capacity: usize,
    items: VecDeque<Notification>,
}

impl Notifications {
    /// `capacity` bounds the ring; storage grows only as notifications arrive.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            items: VecDeque::new(),
        }
    }

    pub fn push(&mut self, notification: Notification) {
        if self.capacity == 0 {
            return;
        }
        while self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(notification);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Hands the pending notifications to the UI and forgets them.
    pub fn take(&mut self) -> Vec<Notification> {
        self.items.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CommandKind, CommandReply, EngineError};

    fn failure(id: i64) -> CommandOutcome {
        CommandOutcome {
            kind: CommandKind::Cancel,
            id: Some(id),
            result: Err(EngineError::NotFound { id }),
        }
    }

    #[test]
    fn successful_outcome_yields_no_notification() {
        let outcome = CommandOutcome {
            kind: CommandKind::Pause,
            id: Some(1),
            result: Ok(CommandReply::Ack),
        };
        assert!(Notification::from_outcome(&outcome, Utc::now()).is_none());
    }

    #[test]
    fn failure_mentions_command_and_item() {
        let note = Notification::from_outcome(&failure(3), Utc::now()).unwrap();
        assert_eq!(note.title, "cancel failed for item 3");
        assert_eq!(note.message, "no download task for item 3");
    }

    #[test]
    fn ring_evicts_oldest() {
        let mut ring = Notifications::with_capacity(2);
        for id in 1..=3 {
            ring.push(Notification::from_outcome(&failure(id), Utc::now()).unwrap());
        }
        let titles: Vec<_> = ring.iter().map(|n| n.title.clone()).collect();
        assert_eq!(
            titles,
            vec!["cancel failed for item 2", "cancel failed for item 3"]
        );
        assert_eq!(ring.take().len(), 2);
        assert!(ring.is_empty());
    }

    #[test]
    fn unbounded_capacity_does_not_preallocate() {
        let mut ring = Notifications::with_capacity(usize::MAX);
        ring.push(Notification::from_outcome(&failure(1), Utc::now()).unwrap());
        assert_eq!(ring.len(), 1);
    }
}

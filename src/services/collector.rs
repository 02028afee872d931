//! In-memory analytics collector for experiment events.

use std::collections::{BTreeMap, VecDeque};
use std::sync::Mutex;

use crate::experiment::TrackedEvent;
use crate::models::{is_tracked_event, EventTally};

#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    #[error("Event name must not be blank")]
    BlankName,
    #[error("Unknown event: {0:?}")]
    UnknownEvent(String),
    #[error("Collector state poisoned")]
    Poisoned,
}

#[derive(Default)]
struct Inner {
    recent: VecDeque<TrackedEvent>,
    tallies: BTreeMap<String, EventTally>,
}

/// Keeps per-event, per-group counts and a bounded buffer of recent events.
pub struct Collector {
    capacity: usize,
    inner: Mutex<Inner>,
}

impl Collector {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            inner: Mutex::new(Inner::default()),
        }
    }

    pub fn record(&self, event: TrackedEvent) -> Result<(), CollectError> {
        if event.name().trim().is_empty() {
            return Err(CollectError::BlankName);
        }
        if !is_tracked_event(event.name()) {
            tracing::debug!(event = event.name(), "rejecting unknown event");
            return Err(CollectError::UnknownEvent(event.name().to_string()));
        }

        tracing::info!(
            event = event.name(),
            group = %event.group(),
            timestamp = %event.timestamp(),
            properties = %serde_json::Value::Object(event.properties().clone()),
            "experiment event"
        );

        let mut inner = self.inner.lock().map_err(|_| CollectError::Poisoned)?;
        inner
            .tallies
            .entry(event.name().to_string())
            .or_insert_with(|| EventTally::new(event.name()))
            .increment(event.group());

        if self.capacity == 0 {
            return Ok(());
        }
        while inner.recent.len() >= self.capacity {
            inner.recent.pop_front();
        }
        inner.recent.push_back(event);
        Ok(())
    }

    /// Tallies ordered by event name.
    pub fn summary(&self) -> Result<Vec<EventTally>, CollectError> {
        let inner = self.inner.lock().map_err(|_| CollectError::Poisoned)?;
        Ok(inner.tallies.values().cloned().collect())
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Up to `limit` most recent events, newest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<TrackedEvent>, CollectError> {
        let inner = self.inner.lock().map_err(|_| CollectError::Poisoned)?;
        Ok(inner.recent.iter().rev().take(limit).cloned().collect())
    }
}

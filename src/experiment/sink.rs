use std::sync::Mutex;

use super::TrackedEvent;

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("Failed to encode event: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Sink unavailable: {0}")]
    Unavailable(String),
}

/// One-way destination for tracked events. No response is awaited.
pub trait EventSink: Send + Sync {
    fn send(&self, event: &TrackedEvent) -> Result<(), SinkError>;
}

/// Writes each event as one JSON line to the console (browser) or stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn send(&self, event: &TrackedEvent) -> Result<(), SinkError> {
        let line = serde_json::to_string(event)?;
        leptos::logging::log!("experiment event: {line}");
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn send(&self, _event: &TrackedEvent) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Keeps every event in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<TrackedEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<TrackedEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl EventSink for MemorySink {
    fn send(&self, event: &TrackedEvent) -> Result<(), SinkError> {
        self.events
            .lock()
            .map_err(|e| SinkError::Unavailable(e.to_string()))?
            .push(event.clone());
        Ok(())
    }
}

//! Experiment assignment and event tracking.
//!
//! Every visitor is bucketed once into [`Group::A`] or [`Group::B`]. The
//! assignment lives in an [`AssignmentStore`] under [`STORAGE_KEY`] and is
//! cached by a [`Tracker`] for the rest of the session. Interaction events are
//! tagged with the group and a timestamp and handed to an [`EventSink`].
//!
//! ```rust
//! use std::sync::Arc;
//! use secure360::experiment::{MemoryStore, MemorySink, Tracker};
//!
//! let store = MemoryStore::new();
//! let sink = Arc::new(MemorySink::new());
//! let tracker = Tracker::start(&store, &mut || 0.25, sink.clone());
//!
//! tracker.record("cta_click", serde_json::json!({ "location": "hero" }));
//! assert_eq!(sink.events()[0].group(), tracker.group());
//! ```

mod event;
mod group;
mod random;
mod sink;
mod store;
mod tracker;

pub use event::{Properties, TrackedEvent, RESERVED_KEYS};
pub use group::{Group, ParseGroupError};
pub use random::{RandomSource, ThreadRandom};
pub use sink::{ConsoleSink, EventSink, MemorySink, NullSink, SinkError};
pub use store::{AssignmentStore, MemoryStore, StoreError};
#[cfg(feature = "hydrate")]
pub use store::BrowserStore;
pub use tracker::{assign_group, Tracker, STORAGE_KEY};

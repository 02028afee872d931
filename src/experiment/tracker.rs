use std::sync::Arc;

use chrono::Utc;
use leptos::logging::warn;
use serde_json::Value;

use super::{AssignmentStore, EventSink, Group, Properties, RandomSource, StoreError, TrackedEvent};

/// Storage key holding the visitor's group.
pub const STORAGE_KEY: &str = "ab-test-variant";

/// Returns the persisted group, assigning and persisting a fresh one when
/// the stored value is missing or unrecognised.
///
/// A valid stored value is returned without touching `rng`.
pub fn assign_group<S, R>(store: &S, rng: &mut R) -> Result<Group, StoreError>
where
    S: AssignmentStore + ?Sized,
    R: RandomSource + ?Sized,
{
    let mut assigned = None;
    let stored = store.update(STORAGE_KEY, &mut |current| {
        let group = current
            .and_then(|value| value.parse::<Group>().ok())
            .unwrap_or_else(|| Group::draw(&mut *rng));
        assigned = Some(group);
        group.as_str().to_string()
    })?;

    // A store that ignored `decide` still has to hand back a valid group.
    match stored.parse::<Group>() {
        Ok(group) => Ok(group),
        Err(_) => assigned.ok_or_else(|| StoreError::Write(format!("store returned {stored:?}"))),
    }
}

/// Session-scoped experiment state: the assigned group and the event sink.
///
/// The group is resolved once in [`Tracker::start`] and never re-read.
#[derive(Clone)]
pub struct Tracker {
    group: Group,
    persisted: bool,
    sink: Arc<dyn EventSink>,
}

impl Tracker {
    /// Resolves the visitor's group. Storage failures degrade to an
    /// in-memory assignment for this session only.
    pub fn start<S, R>(store: &S, rng: &mut R, sink: Arc<dyn EventSink>) -> Self
    where
        S: AssignmentStore + ?Sized,
        R: RandomSource + ?Sized,
    {
        let (group, persisted) = match assign_group(store, &mut *rng) {
            Ok(group) => (group, true),
            Err(e) => {
                warn!("experiment assignment not persisted: {e}");
                (Group::draw(&mut *rng), false)
            }
        };
        Self {
            group,
            persisted,
            sink,
        }
    }

    pub fn group(&self) -> Group {
        self.group
    }

    /// False when storage failed and the group lives only in this session.
    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    /// Records `name` with the current group and time. Fire-and-forget:
    /// invalid input and sink failures are logged, never returned.
    pub fn record(&self, name: &str, properties: Value) {
        if name.trim().is_empty() {
            warn!("dropping tracked event with a blank name");
            return;
        }
        let properties = match properties {
            Value::Object(map) => map,
            Value::Null => Properties::new(),
            other => {
                warn!("ignoring non-object properties for {name}: {other}");
                Properties::new()
            }
        };

        let event = TrackedEvent::new(name, self.group, Utc::now(), properties);
        if let Err(e) = self.sink.send(&event) {
            warn!("failed to send tracked event {name}: {e}");
        }
    }
}

impl std::fmt::Debug for Tracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracker")
            .field("group", &self.group)
            .field("persisted", &self.persisted)
            .finish_non_exhaustive()
    }
}

//! Binds the session [`Tracker`] to the component tree.

use std::sync::Arc;

use leptos::logging::warn;
use leptos::prelude::*;
use serde_json::Value;

use crate::experiment::{Group, ThreadRandom, Tracker};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExperimentError {
    #[error("Experiment accessed outside <ExperimentProvider/>")]
    NotProvided,
}

/// Handle to the session experiment, handed to whichever part of the page
/// reads the group or records events.
///
/// Empty until [`ExperimentProvider`] starts the tracker on the client.
#[derive(Debug, Clone, Copy)]
pub struct Experiment {
    tracker: RwSignal<Option<Tracker>>,
}

impl Experiment {
    pub fn new() -> Self {
        Self {
            tracker: RwSignal::new(None),
        }
    }

    /// Installs the session tracker. Later calls are ignored so the group
    /// never changes within a session.
    pub fn start(&self, tracker: Tracker) {
        if self.tracker.with_untracked(Option::is_none) {
            self.tracker.set(Some(tracker));
        }
    }

    /// Current group, `None` before the tracker has started.
    pub fn group(&self) -> Option<Group> {
        self.tracker.with(|tracker| tracker.as_ref().map(Tracker::group))
    }

    /// Records an interaction event. Never fails the caller.
    pub fn track(&self, name: &str, properties: Value) {
        self.tracker.with_untracked(|tracker| match tracker {
            Some(tracker) => tracker.record(name, properties),
            None => warn!("experiment not started, dropping {name}"),
        });
    }
}

impl Default for Experiment {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the experiment provided by [`ExperimentProvider`].
///
/// # Panics
///
/// Panics when called outside the provider: that is a wiring mistake, not a
/// runtime condition.
pub fn use_experiment() -> Experiment {
    match try_use_experiment() {
        Ok(experiment) => experiment,
        Err(e) => panic!("{e}"),
    }
}

pub fn try_use_experiment() -> Result<Experiment, ExperimentError> {
    use_context::<Experiment>().ok_or(ExperimentError::NotProvided)
}

/// Owns the session experiment and starts it once the page runs in the
/// browser.
///
/// Storage is only reachable client side, so the server renders variant
/// slots empty and the group appears right after hydration. Nothing from the
/// wrong group is ever shown.
#[component]
pub fn ExperimentProvider(children: Children) -> impl IntoView {
    let experiment = Experiment::new();
    provide_context(experiment);

    Effect::new(move |_| {
        experiment.start(client_tracker());
    });

    children()
}

#[cfg(feature = "hydrate")]
fn client_tracker() -> Tracker {
    use crate::experiment::BrowserStore;

    Tracker::start(&BrowserStore, &mut ThreadRandom, Arc::new(sink::CollectorSink))
}

#[cfg(not(feature = "hydrate"))]
fn client_tracker() -> Tracker {
    use crate::experiment::{ConsoleSink, MemoryStore};

    Tracker::start(&MemoryStore::new(), &mut ThreadRandom, Arc::new(ConsoleSink))
}

#[cfg(feature = "hydrate")]
mod sink {
    use leptos::logging::warn;

    use crate::experiment::{ConsoleSink, EventSink, SinkError, TrackedEvent};
    use crate::server_fns::collect_event;

    /// Console line plus a fire-and-forget post to the collector.
    pub struct CollectorSink;

    impl EventSink for CollectorSink {
        fn send(&self, event: &TrackedEvent) -> Result<(), SinkError> {
            ConsoleSink.send(event)?;
            let event = event.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = collect_event(event).await {
                    warn!("collector rejected event: {e}");
                }
            });
            Ok(())
        }
    }
}

/// Renders `a` or `b` for the visitor's group, nothing until it is known.
#[component]
pub fn Variant(
    experiment: Experiment,
    #[prop(into)] a: ViewFn,
    #[prop(into)] b: ViewFn,
) -> impl IntoView {
    move || match experiment.group() {
        Some(Group::A) => a.run(),
        Some(Group::B) => b.run(),
        None => ().into_any(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::experiment::{MemorySink, MemoryStore, NullSink, STORAGE_KEY};

    #[test]
    fn accessor_outside_provider_is_an_error() {
        assert_eq!(try_use_experiment().err(), Some(ExperimentError::NotProvided));
    }

    #[test]
    #[should_panic(expected = "ExperimentProvider")]
    fn use_experiment_fails_loudly() {
        use_experiment();
    }

    #[test]
    fn first_tracker_wins_for_the_session() {
        let owner = Owner::new();
        owner.with(|| {
            let experiment = Experiment::new();
            assert_eq!(experiment.group(), None);
            experiment.track("cta_click", json!({ "location": "hero" }));

            let sink = Arc::new(MemorySink::new());
            let stored = MemoryStore::with_entry(STORAGE_KEY, "B");
            experiment.start(Tracker::start(&stored, &mut || 0.1, sink.clone()));
            experiment.start(Tracker::start(
                &MemoryStore::new(),
                &mut || 0.1,
                Arc::new(NullSink),
            ));
            assert_eq!(experiment.group(), Some(Group::B));

            experiment.track("cta_click", json!({ "location": "hero" }));
            let events = sink.events();
            assert_eq!(events.len(), 1);
            assert_eq!(events[0].group(), Group::B);

            provide_context(experiment);
            assert_eq!(try_use_experiment().map(|e| e.group()), Ok(Some(Group::B)));
        });
    }

    #[cfg(feature = "ssr")]
    fn render_variant(experiment: Experiment) -> String {
        use leptos::tachys::view::RenderHtml;

        view! {
            <Variant
                experiment=experiment
                a=|| view! { <p>"copy for A"</p> }
                b=|| view! { <p>"copy for B"</p> }
            />
        }
        .to_html()
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn variant_renders_nothing_until_started() {
        let owner = Owner::new();
        owner.with(|| {
            let experiment = Experiment::new();
            let html = render_variant(experiment);
            assert!(!html.contains("copy for A"), "{html}");
            assert!(!html.contains("copy for B"), "{html}");

            let stored = MemoryStore::with_entry(STORAGE_KEY, "B");
            experiment.start(Tracker::start(&stored, &mut || 0.1, Arc::new(NullSink)));

            let html = render_variant(experiment);
            assert!(html.contains("copy for B"), "{html}");
            assert!(!html.contains("copy for A"), "{html}");
        });
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn variant_renders_group_a_copy() {
        let owner = Owner::new();
        owner.with(|| {
            let experiment = Experiment::new();
            experiment.start(Tracker::start(&MemoryStore::new(), &mut || 0.2, Arc::new(NullSink)));

            let html = render_variant(experiment);
            assert!(html.contains("copy for A"), "{html}");
            assert!(!html.contains("copy for B"), "{html}");
        });
    }
}

use leptos::prelude::*;
use leptos::server_fn::codec::Json;

use crate::experiment::TrackedEvent;
use crate::models::EventTally;

/// Receives one tracked event from a browser.
#[server(input = Json)]
pub async fn collect_event(event: TrackedEvent) -> Result<(), ServerFnError> {
    use axum::Extension;
    use crate::state::AppState;
    use leptos_axum::extract;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    state
        .collector
        .record(event)
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
pub async fn experiment_summary() -> Result<Vec<EventTally>, ServerFnError> {
    use axum::Extension;
    use crate::state::AppState;
    use leptos_axum::extract;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    state
        .collector
        .summary()
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Most recent collected events, newest first. `limit` is capped at the
/// collector's buffer size.
#[server]
pub async fn recent_events(limit: usize) -> Result<Vec<TrackedEvent>, ServerFnError> {
    use axum::Extension;
    use crate::state::AppState;
    use leptos_axum::extract;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    let limit = limit.min(state.collector.capacity());
    state
        .collector
        .recent(limit)
        .map_err(|e| ServerFnError::new(e.to_string()))
}

use leptos::prelude::*;

use crate::experiment::Group;
use crate::server_fns::{experiment_summary, recent_events};

const RECENT_LIMIT: usize = 25;

/// Per-event click counts for each group, as seen by the collector.
#[component]
pub fn ExperimentReportPage() -> impl IntoView {
    let summary = Resource::new(|| (), |_| experiment_summary());
    let recent = Resource::new(|| (), |_| recent_events(RECENT_LIMIT));

    view! {
        <div class="report-page">
            <h1>"Experiment report"</h1>
            <p class="subtitle">"Events collected since the server started"</p>

            <Suspense fallback=|| view! { <div class="loading">"Loading..."</div> }>
                {move || {
                    summary.get().map(|result| {
                        match result {
                            Ok(tallies) if tallies.is_empty() => {
                                view! { <p class="hint">"No events recorded yet"</p> }.into_any()
                            }
                            Ok(tallies) => view! {
                                <table class="report-table">
                                    <thead>
                                        <tr>
                                            <th>"Event"</th>
                                            <th>"Group A"</th>
                                            <th>"Group B"</th>
                                            <th>"Total"</th>
                                            <th>"B share"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {tallies
                                            .into_iter()
                                            .map(|tally| {
                                                let share = format!("{:.1}%", tally.share(Group::B));
                                                view! {
                                                    <tr>
                                                        <td>{tally.event.clone()}</td>
                                                        <td>{tally.group_a}</td>
                                                        <td>{tally.group_b}</td>
                                                        <td>{tally.total()}</td>
                                                        <td>{share}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            }
                            .into_any(),
                            Err(e) => view! { <p class="error">{e.to_string()}</p> }.into_any(),
                        }
                    })
                }}
            </Suspense>

            <h2>"Recent events"</h2>
            <Suspense fallback=|| view! { <div class="loading">"Loading..."</div> }>
                {move || {
                    recent.get().map(|result| {
                        match result {
                            Ok(events) if events.is_empty() => {
                                view! { <p class="hint">"Nothing collected yet"</p> }.into_any()
                            }
                            Ok(events) => view! {
                                <table class="report-table">
                                    <thead>
                                        <tr>
                                            <th>"Time (UTC)"</th>
                                            <th>"Event"</th>
                                            <th>"Group"</th>
                                            <th>"Properties"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {events
                                            .into_iter()
                                            .map(|event| {
                                                let time = event.timestamp().format("%Y-%m-%d %H:%M:%S").to_string();
                                                let properties = serde_json::Value::Object(event.properties().clone())
                                                    .to_string();
                                                view! {
                                                    <tr>
                                                        <td>{time}</td>
                                                        <td>{event.name().to_string()}</td>
                                                        <td>{event.group().as_str()}</td>
                                                        <td><code>{properties}</code></td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            }
                            .into_any(),
                            Err(e) => view! { <p class="error">{e.to_string()}</p> }.into_any(),
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

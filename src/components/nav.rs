use leptos::prelude::*;
use serde_json::json;

use crate::components::{scroll_to, Experiment};
use crate::models::Section;

#[component]
pub fn Nav(experiment: Experiment) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let go_to = move |section: Section| {
        experiment.track("nav_click", json!({ "section": section.id() }));
        scroll_to(section);
        set_menu_open.set(false);
    };

    view! {
        <nav class="main-nav">
            <div class="nav-brand">
                <a href="/">"360 Security"</a>
            </div>

            <button
                class="nav-toggle"
                aria-label="Toggle menu"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                {move || if menu_open.get() { "✕" } else { "☰" }}
            </button>

            <div class="nav-links" class:open=move || menu_open.get()>
                {Section::nav()
                    .into_iter()
                    .map(|section| {
                        view! {
                            <button class="nav-link" on:click=move |_| go_to(section)>
                                {section.label()}
                            </button>
                        }
                    })
                    .collect_view()}
                <button
                    class="btn btn-small btn-primary"
                    on:click=move |_| {
                        experiment.track("cta_click", json!({ "location": "nav_quote" }));
                        scroll_to(Section::Contact);
                    }
                >
                    "Get a quote"
                </button>
            </div>
        </nav>
    }
}

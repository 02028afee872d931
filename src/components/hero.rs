use leptos::prelude::*;
use serde_json::json;

use crate::components::{scroll_to, DemoRequest, Experiment, Variant};
use crate::models::Section;

#[component]
pub fn Hero(experiment: Experiment, demo: DemoRequest) -> impl IntoView {
    view! {
        <section class="hero">
            <Variant
                experiment=experiment
                a=|| view! {
                    <div class="hero-copy">
                        <span class="badge">"Leader in home security"</span>
                        <h1>"360° protection for your home"</h1>
                        <p class="subtitle">
                            "Latest-generation TAPO cameras with full panoramic view. "
                            "Smart monitoring, instant alerts and full control from anywhere."
                        </p>
                    </div>
                }
                b=|| view! {
                    <div class="hero-copy">
                        <span class="badge">"Guaranteed security"</span>
                        <h1>"Your family deserves the best protection"</h1>
                        <p class="subtitle">
                            "TAPO cameras with advanced AI and 360° coverage. "
                            "They detect, alert and protect around the clock."
                        </p>
                    </div>
                }
            />

            <div class="cta-buttons">
                <Variant
                    experiment=experiment
                    a=move || view! {
                        <button class="btn btn-primary" on:click=move |_| demo.open("general")>
                            "Watch live demo"
                        </button>
                    }
                    b=move || view! {
                        <button
                            class="btn btn-primary"
                            on:click=move |_| {
                                experiment.track("cta_click", json!({ "location": "hero_primary" }));
                                scroll_to(Section::Contact);
                            }
                        >
                            "Protect my home"
                        </button>
                    }
                />
                <button
                    class="btn btn-secondary"
                    on:click=move |_| {
                        experiment.track("nav_click", json!({ "section": Section::Products.id() }));
                        scroll_to(Section::Products);
                    }
                >
                    "Explore cameras"
                </button>
            </div>

            <ul class="hero-stats">
                <li><strong>"+5,000"</strong>" protected homes"</li>
                <li><strong>"4.9★"</strong>" average rating"</li>
                <li><strong>"24/7"</strong>" support"</li>
            </ul>
        </section>
    }
}

use leptos::prelude::*;
use serde_json::json;

use crate::components::Experiment;
use crate::models::{demo_video, DemoVideo};

/// Which demo video is open, if any.
#[derive(Debug, Clone, Copy)]
pub struct DemoRequest {
    current: RwSignal<Option<&'static DemoVideo>>,
    experiment: Experiment,
}

impl DemoRequest {
    pub fn new(experiment: Experiment) -> Self {
        Self {
            current: RwSignal::new(None),
            experiment,
        }
    }

    pub fn open(&self, kind: &str) {
        self.experiment
            .track("demo_click", json!({ "demo_type": kind }));
        self.current.set(Some(demo_video(kind)));
    }

    pub fn close(&self) {
        self.current.set(None);
    }

    pub fn current(&self) -> Option<&'static DemoVideo> {
        self.current.get()
    }
}

#[component]
pub fn DemoDialog(demo: DemoRequest) -> impl IntoView {
    move || {
        demo.current().map(|video| {
            view! {
                <div class="dialog-backdrop" on:click=move |_| demo.close()>
                    <div
                        class="dialog"
                        role="dialog"
                        aria-label=video.title
                        on:click=|ev| ev.stop_propagation()
                    >
                        <h3>{video.title}</h3>
                        <video src=video.url controls autoplay></video>
                        <button class="btn btn-small" on:click=move |_| demo.close()>
                            "Close"
                        </button>
                    </div>
                </div>
            }
        })
    }
}

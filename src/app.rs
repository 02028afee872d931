use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::ExperimentProvider;
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/secure360.css"/>
        <Title text="360 Security - TAPO Home Security Cameras"/>
        <Meta name="description" content="360° home protection with TAPO smart cameras, professional installation and 24/7 support"/>

        <ExperimentProvider>
            <Router>
                <Routes fallback=|| view! { <h1>"404 - Page Not Found"</h1> }>
                    <Route path=path!("/") view=LandingPage/>
                    <Route path=path!("/experiment") view=ExperimentReportPage/>
                </Routes>
            </Router>
        </ExperimentProvider>
    }
}

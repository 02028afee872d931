use leptos::prelude::*;
use serde_json::json;

use crate::components::{
    scroll_to, use_experiment, ContactSection, DemoDialog, DemoRequest, FaqSection,
    FeaturesSection, Hero, Nav, ProductsSection, TestimonialsSection,
};
use crate::models::Section;

#[component]
pub fn LandingPage() -> impl IntoView {
    let experiment = use_experiment();
    let demo = DemoRequest::new(experiment);

    view! {
        <div class="landing-page">
            <Nav experiment=experiment/>
            <main>
                <Hero experiment=experiment demo=demo/>
                <FeaturesSection/>
                <ProductsSection experiment=experiment demo=demo/>
                <TestimonialsSection/>
                <FaqSection/>

                <section class="cta-band">
                    <h2>"Ready to protect what matters most?"</h2>
                    <div class="cta-buttons">
                        <button
                            class="btn btn-primary"
                            on:click=move |_| {
                                experiment.track("cta_click", json!({ "location": "cta_band_quote" }));
                                scroll_to(Section::Contact);
                            }
                        >
                            "Get my quote"
                        </button>
                        <button class="btn btn-secondary" on:click=move |_| demo.open("navigation")>
                            "See the app in action"
                        </button>
                    </div>
                </section>

                <ContactSection experiment=experiment/>
            </main>
            <footer class="site-footer">
                <p>"© 360 Security. Authorised TAPO reseller."</p>
            </footer>
            <DemoDialog demo=demo/>
        </div>
    }
}

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos::web_sys;

use crate::models::{Section, FEATURES, TESTIMONIALS};

/// Scrolls the page to `section`. No-op outside the browser.
pub fn scroll_to(section: Section) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(section.id()))
        {
            element.scroll_into_view();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = section;
}

#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section id=Section::Features.id() class="features">
            <h2>"Security technology that works for you"</h2>
            <div class="feature-grid">
                {FEATURES
                    .iter()
                    .map(|feature| {
                        view! {
                            <div class="feature">
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    view! {
        <section id=Section::Testimonials.id() class="testimonials">
            <h2>"What our customers say"</h2>
            <div class="testimonial-grid">
                {TESTIMONIALS
                    .iter()
                    .map(|t| {
                        view! {
                            <figure class="testimonial">
                                <div class="rating" aria-label=format!("{} out of 5", t.rating)>
                                    {"★".repeat(t.rating as usize)}
                                </div>
                                <blockquote>{t.quote}</blockquote>
                                <figcaption>
                                    <strong>{t.name}</strong>
                                    <span class="role">{t.role}</span>
                                </figcaption>
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

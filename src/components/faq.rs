use leptos::prelude::*;

use crate::models::{Section, FAQ};

/// Accordion: at most one answer open at a time.
#[component]
pub fn FaqSection() -> impl IntoView {
    let (open, set_open) = signal(Option::<usize>::None);

    view! {
        <section id=Section::Faq.id() class="faq">
            <h2>"Frequently asked questions"</h2>
            <div class="faq-list">
                {FAQ
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        let is_open = move || open.get() == Some(index);
                        view! {
                            <div class="faq-item" class:open=is_open>
                                <button
                                    class="faq-question"
                                    aria-expanded=move || is_open().to_string()
                                    on:click=move |_| {
                                        set_open.update(|current| {
                                            *current = if *current == Some(index) {
                                                None
                                            } else {
                                                Some(index)
                                            };
                                        })
                                    }
                                >
                                    <span>{entry.question}</span>
                                    <span class="toggle-icon">{move || if is_open() { "−" } else { "+" }}</span>
                                </button>
                                <Show when=is_open>
                                    <p class="faq-answer">{entry.answer}</p>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

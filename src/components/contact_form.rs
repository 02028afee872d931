use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::{Experiment, Variant};
use crate::models::{Lead, Section};

#[component]
pub fn ContactSection(experiment: Experiment) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let (status, set_status) = signal(Option::<Result<(), String>>::None);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let lead = Lead {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            message: message.get_untracked(),
        };
        if !lead.is_complete() {
            set_status.set(Some(Err("Please enter your name and a valid email.".into())));
            return;
        }

        experiment.track("form_submit", lead.analytics_properties());
        for field in [name, email, phone, message] {
            field.set(String::new());
        }
        set_status.set(Some(Ok(())));
    };

    view! {
        <section id=Section::Contact.id() class="contact">
            <Variant
                experiment=experiment
                a=|| view! {
                    <div class="contact-copy">
                        <span class="badge">"Free quote"</span>
                        <h2>"Request your personalised quote"</h2>
                        <p>"Our security experts will design the right setup for your home or business."</p>
                    </div>
                }
                b=|| view! {
                    <div class="contact-copy">
                        <span class="badge">"Immediate protection"</span>
                        <h2>"Protect your home today"</h2>
                        <p>"Get a free, personalised security assessment in under 24 hours."</p>
                    </div>
                }
            />

            <form class="lead-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="name">"Full name"</label>
                    <input
                        type="text"
                        id="name"
                        name="name"
                        required
                        on:input=move |ev| name.set(event_target_value(&ev))
                        prop:value=move || name.get()
                    />
                </div>

                <div class="form-group">
                    <label for="email">"Email"</label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        required
                        placeholder="you@example.com"
                        on:input=move |ev| email.set(event_target_value(&ev))
                        prop:value=move || email.get()
                    />
                </div>

                <div class="form-group">
                    <label for="phone">"Phone (optional)"</label>
                    <input
                        type="tel"
                        id="phone"
                        name="phone"
                        on:input=move |ev| phone.set(event_target_value(&ev))
                        prop:value=move || phone.get()
                    />
                </div>

                <div class="form-group">
                    <label for="message">"Tell us about your space"</label>
                    <textarea
                        id="message"
                        name="message"
                        rows="4"
                        placeholder="How many rooms? Outdoor area? Anything specific?"
                        on:input=move |ev| message.set(event_target_value(&ev))
                        prop:value=move || message.get()
                    ></textarea>
                </div>

                <Variant
                    experiment=experiment
                    a=|| view! { <button type="submit" class="btn btn-primary">"Request a free quote"</button> }
                    b=|| view! { <button type="submit" class="btn btn-primary">"Start my assessment"</button> }
                />

                {move || status.get().map(|result| match result {
                    Ok(()) => view! {
                        <p class="success">"Thanks! An advisor will contact you within 2 hours."</p>
                    }.into_any(),
                    Err(e) => view! { <p class="error">{e}</p> }.into_any(),
                })}

                <p class="hint">"Reply within 2 hours • Installation in 48h • 3-year warranty"</p>
            </form>
        </section>
    }
}

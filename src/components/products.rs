use leptos::prelude::*;
use serde_json::json;

use crate::components::{scroll_to, DemoRequest, Experiment};
use crate::models::{Section, PRODUCTS};

#[component]
pub fn ProductsSection(experiment: Experiment, demo: DemoRequest) -> impl IntoView {
    view! {
        <section id=Section::Products.id() class="products">
            <h2>"TAPO cameras"</h2>
            <p class="subtitle">"Launch prices with professional installation included"</p>
            <div class="product-grid">
                {PRODUCTS
                    .iter()
                    .map(|product| {
                        view! {
                            <article class="product-card">
                                <span class="badge">{product.badge}</span>
                                <h3>{product.name}</h3>
                                <p class="price">
                                    <span class="current">{product.price}</span>
                                    <s class="original">{product.original_price}</s>
                                </p>
                                <ul class="highlights">
                                    {product
                                        .highlights
                                        .iter()
                                        .map(|highlight| view! { <li>{*highlight}</li> })
                                        .collect_view()}
                                </ul>
                                <div class="product-actions">
                                    <button
                                        class="btn btn-primary"
                                        on:click=move |_| {
                                            experiment
                                                .track("product_info_click", json!({ "product": product.name }));
                                            scroll_to(Section::Contact);
                                        }
                                    >
                                        "More info"
                                    </button>
                                    <button class="btn btn-secondary" on:click=move |_| demo.open(product.demo)>
                                        "Watch demo"
                                    </button>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

mod contact_form;
mod demo_dialog;
mod experiment;
mod faq;
mod hero;
mod nav;
mod products;
mod sections;

pub use contact_form::ContactSection;
pub use demo_dialog::{DemoDialog, DemoRequest};
pub use experiment::{
    try_use_experiment, use_experiment, Experiment, ExperimentError, ExperimentProvider, Variant,
};
pub use faq::FaqSection;
pub use hero::Hero;
pub use nav::Nav;
pub use products::ProductsSection;
pub use sections::{scroll_to, FeaturesSection, TestimonialsSection};

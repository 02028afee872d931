mod analytics;

pub use analytics::*;

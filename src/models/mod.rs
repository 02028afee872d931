mod catalog;
mod lead;
mod report;

pub use catalog::*;
pub use lead::Lead;
pub use report::{is_tracked_event, EventTally, TRACKED_EVENTS};

use serde::{Deserialize, Serialize};

use crate::experiment::Group;

/// Event names the landing page emits.
pub const TRACKED_EVENTS: [&str; 5] = [
    "nav_click",
    "cta_click",
    "demo_click",
    "product_info_click",
    "form_submit",
];

pub fn is_tracked_event(name: &str) -> bool {
    TRACKED_EVENTS.contains(&name)
}

/// How often one event fired in each group.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventTally {
    pub event: String,
    pub group_a: u64,
    pub group_b: u64,
}

impl EventTally {
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            ..Default::default()
        }
    }

    pub fn count(&self, group: Group) -> u64 {
        match group {
            Group::A => self.group_a,
            Group::B => self.group_b,
        }
    }

    pub fn increment(&mut self, group: Group) {
        match group {
            Group::A => self.group_a += 1,
            Group::B => self.group_b += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.group_a + self.group_b
    }

    /// Share of this event coming from `group`, in percent.
    pub fn share(&self, group: Group) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.count(group) as f64 * 100.0 / total as f64,
        }
    }
}

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Quote request from the contact form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl Lead {
    /// Name and a plausible email are required.
    pub fn is_complete(&self) -> bool {
        let email = self.email.trim();
        !self.name.trim().is_empty()
            && email
                .split_once('@')
                .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.'))
    }

    /// Event properties for a submission. Contact details stay out of
    /// analytics.
    pub fn analytics_properties(&self) -> Value {
        json!({
            "has_phone": !self.phone.trim().is_empty(),
            "has_message": !self.message.trim().is_empty(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(name: &str, email: &str) -> Lead {
        Lead {
            name: name.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    #[test]
    fn requires_name_and_email() {
        assert!(lead("Ana", "ana@example.com").is_complete());
        assert!(!lead(" ", "ana@example.com").is_complete());
        assert!(!lead("Ana", "ana").is_complete());
        assert!(!lead("Ana", "@example.com").is_complete());
    }

    #[test]
    fn analytics_properties_carry_no_contact_details() {
        let lead = Lead {
            phone: "+58 424 000 0000".into(),
            ..lead("Ana", "ana@example.com")
        };
        let props = lead.analytics_properties();

        assert_eq!(props, json!({ "has_phone": true, "has_message": false }));
        assert!(!props.to_string().contains("ana@example.com"));
    }
}

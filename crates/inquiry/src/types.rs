use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, VariantArray};

#[derive(
    Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "lowercase")]
pub enum FormKind {
    Contact,
    Appointment,
}

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct AppointmentForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub language: String,
    pub date: String,
    pub time: String,
    pub message: String,
}

/// A single form post. Every field is optional and may be blank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormSubmission {
    Contact(ContactForm),
    Appointment(AppointmentForm),
}

impl FormSubmission {
    /// Build a submission from raw field values; absent fields become empty.
    pub fn from_fields(kind: FormKind, fields: &HashMap<String, String>) -> Self {
        let field = |name: &str| fields.get(name).cloned().unwrap_or_default();

        match kind {
            FormKind::Contact => Self::Contact(ContactForm {
                name: field("name"),
                email: field("email"),
                phone: field("phone"),
                message: field("message"),
            }),
            FormKind::Appointment => Self::Appointment(AppointmentForm {
                name: field("name"),
                email: field("email"),
                phone: field("phone"),
                service: field("service"),
                language: field("language"),
                date: field("date"),
                time: field("time"),
                message: field("message"),
            }),
        }
    }

    /// Build a submission from decoded form pairs in request order. When a
    /// name repeats, the first value is kept.
    pub fn from_pairs<I>(kind: FormKind, pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut fields = HashMap::new();
        for (name, value) in pairs {
            fields.entry(name).or_insert(value);
        }

        Self::from_fields(kind, &fields)
    }

    pub fn kind(&self) -> FormKind {
        match self {
            Self::Contact(_) => FormKind::Contact,
            Self::Appointment(_) => FormKind::Appointment,
        }
    }
}

#[derive(
    Display, AsRefStr, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Success,
    Danger,
}

/// Status message shown to the visitor after a submission
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct UserOutcome {
    pub status: OutcomeStatus,
    pub message: String,
}

impl UserOutcome {
    pub fn success(kind: FormKind) -> Self {
        let message = match kind {
            FormKind::Contact => "Thank you for contacting us. We will get back to you soon.",
            FormKind::Appointment => {
                "Your appointment request has been sent. We will confirm the time with you."
            }
        };

        Self {
            status: OutcomeStatus::Success,
            message: message.to_owned(),
        }
    }

    pub fn failure(kind: FormKind) -> Self {
        let message = match kind {
            FormKind::Contact => "There was an issue sending your message. Please try again later.",
            FormKind::Appointment => {
                "There was an issue submitting your request. Please try again later."
            }
        };

        Self {
            status: OutcomeStatus::Danger,
            message: message.to_owned(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == OutcomeStatus::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_become_empty() {
        let fields = HashMap::from([("name".to_string(), "Jane".to_string())]);

        let FormSubmission::Appointment(form) =
            FormSubmission::from_fields(FormKind::Appointment, &fields)
        else {
            panic!("expected an appointment");
        };

        assert_eq!(form.name, "Jane");
        assert_eq!(
            form,
            AppointmentForm {
                name: "Jane".to_string(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let fields = HashMap::from([
            ("name".to_string(), "Jane".to_string()),
            ("service".to_string(), "vat-reporting".to_string()),
        ]);

        let submission = FormSubmission::from_fields(FormKind::Contact, &fields);

        assert_eq!(
            submission,
            FormSubmission::Contact(ContactForm {
                name: "Jane".to_string(),
                ..Default::default()
            })
        );
    }

    #[test]
    fn repeated_names_keep_the_first_value() {
        let pairs = [
            ("name".to_string(), "Jane".to_string()),
            ("message".to_string(), "Hi".to_string()),
            ("name".to_string(), "Doe".to_string()),
        ];

        let submission = FormSubmission::from_pairs(FormKind::Contact, pairs);

        assert_eq!(submission.kind(), FormKind::Contact);
        assert_eq!(
            submission,
            FormSubmission::Contact(ContactForm {
                name: "Jane".to_string(),
                message: "Hi".to_string(),
                ..Default::default()
            })
        );
    }

    #[test]
    fn outcome_statuses() {
        for kind in FormKind::VARIANTS {
            assert!(UserOutcome::success(*kind).is_success());
            assert!(!UserOutcome::failure(*kind).is_success());
            assert_eq!(UserOutcome::failure(*kind).status.as_ref(), "danger");
        }
    }
}

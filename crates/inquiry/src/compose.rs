use weba_notification::NotificationMessage;

use crate::{AppointmentForm, ContactForm, FormSubmission};

impl FormSubmission {
    /// Render the owner notification. Values are inserted verbatim.
    pub fn compose(&self) -> NotificationMessage {
        match self {
            Self::Contact(form) => contact(form),
            Self::Appointment(form) => appointment(form),
        }
    }
}

fn contact(form: &ContactForm) -> NotificationMessage {
    NotificationMessage {
        subject: format!("New contact form submission from {}", form.name),
        body: format!(
            r#"
New contact form submission:

Name: {}
Email: {}
Phone: {}

Message:
{}
"#,
            form.name, form.email, form.phone, form.message
        ),
    }
}

fn appointment(form: &AppointmentForm) -> NotificationMessage {
    NotificationMessage {
        subject: format!("New appointment request from {}", form.name),
        body: format!(
            r#"
New appointment request:

Name: {}
Email: {}
Phone: {}
Preferred Service: {}
Preferred Language: {}
Preferred Date: {}
Preferred Time: {}

Additional message:
{}
"#,
            form.name,
            form.email,
            form.phone,
            form.service,
            form.language,
            form.date,
            form.time,
            form.message
        ),
    }
}

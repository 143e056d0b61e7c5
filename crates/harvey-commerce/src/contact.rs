//! Contact form.
//!
//! Four required fields. Submissions go to a [`ContactSink`]; the default
//! sink only logs them.

use serde::{Deserialize, Serialize};

use harvey_observability::StructuredLogger;

use crate::error::CommerceError;

/// A contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    /// All fields in form order.
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "Your full name",
            ContactField::Email => "your.email@example.com",
            ContactField::Subject => "What is this about?",
            ContactField::Message => "Tell us more about your inquiry...",
        }
    }
}

/// A validated contact submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Receives contact submissions.
pub trait ContactSink {
    /// Deliver one submission.
    fn deliver(&self, submission: &ContactSubmission) -> Result<(), CommerceError>;
}

/// Sink that logs each submission and reports success.
#[derive(Debug, Clone)]
pub struct LoggingContactSink {
    logger: StructuredLogger,
}

impl LoggingContactSink {
    pub fn new(logger: StructuredLogger) -> Self {
        Self { logger }
    }
}

impl Default for LoggingContactSink {
    fn default() -> Self {
        Self::new(StructuredLogger::new("contact-form"))
    }
}

impl ContactSink for LoggingContactSink {
    fn deliver(&self, submission: &ContactSubmission) -> Result<(), CommerceError> {
        self.logger
            .info_builder("Form submitted")
            .field("name", submission.name.as_str())
            .field("email", submission.email.as_str())
            .field("subject", submission.subject.as_str())
            .field_i64("message_chars", submission.message.chars().count() as i64)
            .emit();
        Ok(())
    }
}

/// Editable form state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Check every field is filled in and the e-mail is address-shaped.
    pub fn validate(&self) -> Result<ContactSubmission, CommerceError> {
        for field in ContactField::ALL {
            if self.get(field).trim().is_empty() {
                return Err(CommerceError::MissingField(field.label()));
            }
        }

        let email = self.email.trim();
        if !is_email_shaped(email) {
            return Err(CommerceError::InvalidEmail(email.to_string()));
        }

        Ok(ContactSubmission {
            name: self.name.trim().to_string(),
            email: email.to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }

    /// Validate and deliver. Fields are cleared on success and kept on error.
    pub fn submit(&mut self, sink: &dyn ContactSink) -> Result<ContactSubmission, CommerceError> {
        let submission = self.validate()?;
        sink.deliver(&submission)?;
        self.clear();
        Ok(submission)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    fn slot(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }
}

fn is_email_shaped(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harvey_observability::{LogTarget, MemorySink};

    struct FailingSink;

    impl ContactSink for FailingSink {
        fn deliver(&self, _submission: &ContactSubmission) -> Result<(), CommerceError> {
            Err(CommerceError::SubmissionFailed("mailbox unavailable".to_string()))
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(ContactField::Name, "Ama Mensah");
        form.set(ContactField::Email, "ama@example.com");
        form.set(ContactField::Subject, "Sizing");
        form.set(ContactField::Message, "Does the evening dress run small?");
        form
    }

    #[test]
    fn test_submit_logs_and_clears() {
        let sink = MemorySink::new();
        let logger = StructuredLogger::new("contact-form").with_target(LogTarget::Memory(sink.clone()));
        let contact = LoggingContactSink::new(logger);

        let mut form = filled();
        let submission = form.submit(&contact).unwrap();

        assert_eq!(submission.name, "Ama Mensah");
        assert!(form.is_empty());

        let entries = sink.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "Form submitted");
        assert_eq!(entries[0].scope, "contact-form");
        assert_eq!(entries[0].field("email").and_then(|v| v.as_str()), Some("ama@example.com"));
    }

    #[test]
    fn test_blank_field_is_rejected() {
        let mut form = filled();
        form.set(ContactField::Subject, "   ");
        assert_eq!(
            form.submit(&LoggingContactSink::default()),
            Err(CommerceError::MissingField("Subject"))
        );
        assert_eq!(form.get(ContactField::Name), "Ama Mensah");
    }

    #[test]
    fn test_invalid_email() {
        let mut form = filled();
        form.set(ContactField::Email, "ama.example.com");
        assert!(matches!(form.validate(), Err(CommerceError::InvalidEmail(_))));
    }

    #[test]
    fn test_sink_failure_keeps_fields() {
        let mut form = filled();
        let err = form.submit(&FailingSink).unwrap_err();
        assert!(matches!(err, CommerceError::SubmissionFailed(_)));
        assert_eq!(form, filled());
    }

    #[test]
    fn test_validate_trims() {
        let mut form = filled();
        form.set(ContactField::Name, "  Kofi  ");
        assert_eq!(form.validate().unwrap().name, "Kofi");
    }
}

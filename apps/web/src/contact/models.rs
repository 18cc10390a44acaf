use serde::{Deserialize, Serialize};

use crate::contact::submit::SubmissionError;

pub const NOTIFICATION_DURATION_MS: u64 = 5000;

/// The four contact form fields exactly as the visitor typed them.
///
/// Missing fields deserialize as empty strings so a partial post re-renders the
/// form instead of failing extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// The row handed to the contact store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub name: String,
    pub email: String,
    /// Serialized as `null` when the visitor left the field blank.
    pub phone: Option<String>,
    pub message: String,
}

impl ContactForm {
    /// Checks the required fields and builds the outgoing record.
    pub fn to_record(&self) -> Result<ContactRecord, SubmissionError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(SubmissionError::MissingField(field));
            }
        }

        let phone = self.phone.trim();
        Ok(ContactRecord {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: (!phone.is_empty()).then(|| self.phone.clone()),
            message: self.message.clone(),
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationVariant {
    Success,
    Destructive,
}

/// Transient toast shown after a submission attempt.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Notification {
    pub variant: NotificationVariant,
    pub title: String,
    pub description: String,
    pub duration_ms: u64,
}

impl Notification {
    pub fn sent() -> Self {
        Self {
            variant: NotificationVariant::Success,
            title: "Message sent successfully!".to_string(),
            description: "Thank you for reaching out. I'll get back to you soon.".to_string(),
            duration_ms: NOTIFICATION_DURATION_MS,
        }
    }

    pub fn failed(description: impl Into<String>) -> Self {
        Self {
            variant: NotificationVariant::Destructive,
            title: "Failed to send message".to_string(),
            description: description.into(),
            duration_ms: NOTIFICATION_DURATION_MS,
        }
    }

    pub fn is_success(&self) -> bool {
        self.variant == NotificationVariant::Success
    }
}

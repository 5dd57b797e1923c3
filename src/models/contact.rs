use serde::{Deserialize, Serialize};

use super::submission::SubmissionStatus;
use super::validation::{FieldErrors, is_valid_email};
use crate::types::{ContactReceipt, NewsletterReceipt};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn check(&self) -> Result<(), FieldErrors<ContactField>> {
        ContactForm::from(self).validate().map(|_| ())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    errors: FieldErrors<ContactField>,
    server_error: Option<String>,
    pub status: SubmissionStatus<ContactReceipt>,
}

impl From<&ContactMessage> for ContactForm {
    fn from(message: &ContactMessage) -> Self {
        Self {
            name: message.name.clone(),
            email: message.email.clone(),
            subject: message.subject.clone(),
            message: message.message.clone(),
            ..Default::default()
        }
    }
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
        self.errors.clear(field);
    }

    pub fn error(&self, field: ContactField) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn server_error(&self) -> Option<&str> {
        self.server_error.as_deref()
    }

    pub fn validate(&self) -> Result<ContactMessage, FieldErrors<ContactField>> {
        let mut errors = FieldErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.insert(ContactField::Name, "Name is required");
        }

        let email = self.email.as_str();
        if email.trim().is_empty() {
            errors.insert(ContactField::Email, "Email is required");
        } else if !is_valid_email(email) {
            errors.insert(ContactField::Email, "Please enter a valid email address");
        }

        let message = self.message.trim();
        if message.is_empty() {
            errors.insert(ContactField::Message, "Message is required");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            subject: self.subject.trim().to_string(),
            message: message.to_string(),
        })
    }

    pub fn try_submit(&mut self) -> Option<ContactMessage> {
        if !self.status.is_idle() {
            return None;
        }

        match self.validate() {
            Ok(message) => {
                self.errors = FieldErrors::new();
                self.server_error = None;
                self.status.begin();
                Some(message)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    pub fn confirm(&mut self, receipt: ContactReceipt) {
        self.status.complete(receipt);
    }

    pub fn reject(&mut self, message: impl Into<String>) {
        self.status.reset();
        self.server_error = Some(message.into());
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Footer/home newsletter signup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsletterForm {
    pub email: String,
    error: Option<String>,
    pub status: SubmissionStatus<NewsletterReceipt>,
}

impl NewsletterForm {
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        self.error = None;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn try_submit(&mut self) -> Option<String> {
        if !self.status.is_idle() {
            return None;
        }

        if !is_valid_email(&self.email) {
            self.error = Some("Please enter a valid email address".to_string());
            return None;
        }

        self.status.begin();
        Some(self.email.clone())
    }

    /// Shows the confirmation and clears the input.
    pub fn confirm(&mut self, receipt: NewsletterReceipt) {
        if self.status.complete(receipt) {
            self.email.clear();
        }
    }

    pub fn reject(&mut self, message: impl Into<String>) {
        self.status.reset();
        self.error = Some(message.into());
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

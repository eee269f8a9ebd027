//! Contact form validation and submission phases.
//!
//! Validation is purely local; the submit path only simulates transport by
//! waiting [`SEND_DELAY_MS`] before reporting success and clearing fields.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Minimum message length, counted after trimming.
pub const MIN_MESSAGE_LEN: usize = 10;

/// Simulated transport delay before the success status appears.
pub const SEND_DELAY_MS: u32 = 800;

/// Status line shown while the simulated submit is in flight.
pub const SENDING_STATUS: &str = "Sending…";

/// Status line shown once the simulated submit completes.
pub const SENT_STATUS: &str = "Message sent — thank you! (This demo does not actually send messages.)";

/// First failing validation rule, checked in field order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactError {
    EmptyName,
    EmptyEmail,
    EmptyMessage,
    MessageTooShort,
}

impl ContactError {
    /// The single status message displayed for this rule.
    #[must_use]
    pub fn status_message(self) -> &'static str {
        match self {
            Self::EmptyName => "Please enter your name.",
            Self::EmptyEmail => "Please enter your email.",
            Self::EmptyMessage => "Please enter a message.",
            Self::MessageTooShort => "Message must be at least 10 characters.",
        }
    }
}

/// A validated, trimmed submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Validate raw field values. The first failing rule wins: empty name,
/// empty email, empty message, then message length.
pub fn validate(name: &str, email: &str, message: &str) -> Result<ContactDraft, ContactError> {
    let name = name.trim();
    let email = email.trim();
    let message = message.trim();

    if name.is_empty() {
        return Err(ContactError::EmptyName);
    }
    if email.is_empty() {
        return Err(ContactError::EmptyEmail);
    }
    if message.is_empty() {
        return Err(ContactError::EmptyMessage);
    }
    if message.chars().count() < MIN_MESSAGE_LEN {
        return Err(ContactError::MessageTooShort);
    }

    Ok(ContactDraft {
        name: name.to_owned(),
        email: email.to_owned(),
        message: message.to_owned(),
    })
}

/// Lifecycle of one submit attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Sending,
    Sent,
}

//! Contact form submission lifecycle.
//!
//! `idle -> sending -> {success, error} -> idle`. The terminal states revert
//! on a timer owned by the caller; each submission carries a generation so a
//! late timer from an earlier submission cannot reset a newer one.

use serde::Serialize;
use std::cell::RefCell;
use std::fmt;
use std::future::Future;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Sending => "sending",
            SubmissionStatus::Success => "success",
            SubmissionStatus::Error => "error",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionStatus::Success | SubmissionStatus::Error)
    }

    /// Inline message shown under the form.
    pub fn message(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "",
            SubmissionStatus::Sending => "Sending...",
            SubmissionStatus::Success => "Message sent successfully! I'll get back to you soon.",
            SubmissionStatus::Error => "Failed to send message. Please try again.",
        }
    }
}

/// Named fields handed to the relay's message template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub to_name: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("required field is empty: {0}")]
    MissingField(Field),

    #[error("email address is not valid")]
    InvalidEmail,

    #[error("a submission is already in flight")]
    InFlight,
}

impl ContactError {
    pub fn user_message(&self) -> String {
        match self {
            ContactError::MissingField(field) => format!("Please fill in your {field}."),
            ContactError::InvalidEmail => "Please enter a valid email address.".to_string(),
            ContactError::InFlight => "Your message is still being sent.".to_string(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("network error: {0}")]
    Network(String),

    #[error("relay rejected the message (HTTP {status})")]
    Rejected { status: u16 },

    #[error("could not encode request: {0}")]
    Encode(String),
}

/// The external service that delivers the message.
pub trait Relay {
    fn send(&self, params: &TemplateParams) -> impl Future<Output = Result<(), RelayError>>;
}

/// A submission accepted by [`ContactForm::begin`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub generation: u64,
    pub params: TemplateParams,
}

/// Outcome of [`submit`]; schedule `expire(generation)` after the reset delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settled {
    pub generation: u64,
    pub status: SubmissionStatus,
}

#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    fields: ContactFields,
    status: SubmissionStatus,
    generation: u64,
    recipient_name: String,
}

impl ContactForm {
    pub fn new(recipient_name: impl Into<String>) -> Self {
        Self {
            recipient_name: recipient_name.into(),
            ..Self::default()
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.get_mut(field) = value.into();
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        for field in Field::ALL {
            if self.fields.get(field).trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        if !looks_like_email(self.fields.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    /// Validates and moves to `Sending`. Rejections leave the status as is.
    pub fn begin(&mut self) -> Result<Submission, ContactError> {
        if self.status == SubmissionStatus::Sending {
            return Err(ContactError::InFlight);
        }
        self.validate()?;
        self.generation += 1;
        self.status = SubmissionStatus::Sending;
        Ok(Submission {
            generation: self.generation,
            params: TemplateParams {
                from_name: self.fields.name.trim().to_string(),
                from_email: self.fields.email.trim().to_string(),
                message: self.fields.message.clone(),
                to_name: self.recipient_name.clone(),
            },
        })
    }

    /// Records the relay outcome. Success clears the fields; failure keeps
    /// them so the visitor can resubmit.
    pub fn settle(&mut self, generation: u64, outcome: Result<(), RelayError>) -> SubmissionStatus {
        if generation != self.generation || self.status != SubmissionStatus::Sending {
            log::warn!("[contact] ignoring stale outcome for submission {generation}");
            return self.status;
        }
        self.status = match outcome {
            Ok(()) => {
                self.fields = ContactFields::default();
                SubmissionStatus::Success
            }
            Err(_) => SubmissionStatus::Error,
        };
        self.status
    }

    /// Reverts a terminal status to `Idle`. Returns true if it did.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation == self.generation && self.status.is_terminal() {
            self.status = SubmissionStatus::Idle;
            true
        } else {
            false
        }
    }
}

/// Minimal shape check: one `@` with text on both sides and no whitespace.
pub fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !s.chars().any(char::is_whitespace)
}

/// Runs one submission against `relay`. `notify` is called after every status
/// change so the view can re-render. No `RefCell` borrow is held across the
/// relay call.
pub async fn submit<R, N>(
    form: &RefCell<ContactForm>,
    relay: &R,
    notify: N,
) -> Result<Settled, ContactError>
where
    R: Relay,
    N: Fn(&ContactForm),
{
    let submission = form.borrow_mut().begin()?;
    notify(&form.borrow());

    let outcome = relay.send(&submission.params).await;
    if let Err(e) = &outcome {
        log::error!("[contact] email sending failed: {e}");
    } else {
        log::info!("[contact] message {} delivered", submission.generation);
    }

    let status = form.borrow_mut().settle(submission.generation, outcome);
    notify(&form.borrow());
    Ok(Settled {
        generation: submission.generation,
        status,
    })
}

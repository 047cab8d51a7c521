//! Error types for contact form submission.

use thiserror::Error;

/// Reasons a submission can be refused or fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SubmitError {
    /// The form did not pass validation.
    #[error("form has {0} invalid field(s)")]
    Invalid(usize),

    /// A submission is already in flight.
    #[error("a submission is already in progress")]
    AlreadyPending,

    /// Completion was reported with no submission in flight.
    #[error("no submission is in progress")]
    NotPending,

    /// The delivery backend rejected or lost the message.
    #[error("delivery failed: {0}")]
    Delivery(String),
}

impl SubmitError {
    /// Returns a message suitable for display next to the form.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Invalid(_) => "Please correct the highlighted fields.",
            Self::AlreadyPending => "Your message is already being sent.",
            Self::NotPending | Self::Delivery(_) => {
                "Your message could not be sent. Please try again."
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SubmitError>;

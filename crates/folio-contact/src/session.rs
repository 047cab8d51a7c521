//! Contact form session: field edits, validation errors and the
//! submission lifecycle for one page visit.

use tracing::{info, warn};

use crate::error::{Result, SubmitError};
use crate::form::{ContactForm, FormField};
use crate::submit::Submitter;
use crate::validate::{FieldErrors, validate};

/// Where the current submission stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// Nothing sent yet, or the form was edited since the last outcome.
    #[default]
    Idle,
    /// A submission is in flight.
    Pending,
    /// The last submission was delivered; the form was cleared unless it
    /// was edited while the submission was in flight.
    Succeeded,
    /// The last submission failed; the form kept its values.
    Failed(String),
}

impl SubmissionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactSession {
    form: ContactForm,
    errors: FieldErrors,
    state: SubmissionState,
    /// Payload of the submission in flight.
    in_flight: Option<ContactForm>,
}

impl ContactSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form(form: ContactForm) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    /// Update a field. Any error on that field is cleared; other errors stay.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
        self.errors.remove(field);
        if matches!(
            self.state,
            SubmissionState::Succeeded | SubmissionState::Failed(_)
        ) {
            self.state = SubmissionState::Idle;
        }
    }

    /// Validate the whole form and replace the stored errors.
    ///
    /// Returns true if the form can be submitted.
    pub fn validate(&mut self) -> bool {
        self.errors = validate(&self.form);
        self.errors.is_empty()
    }

    /// Start a submission and return the payload to deliver.
    pub fn begin_submission(&mut self) -> Result<ContactForm> {
        if self.state.is_pending() {
            warn!("submission already in progress");
            return Err(SubmitError::AlreadyPending);
        }
        if !self.validate() {
            return Err(SubmitError::Invalid(self.errors.len()));
        }
        self.state = SubmissionState::Pending;
        self.in_flight = Some(self.form.clone());
        Ok(self.form.clone())
    }

    /// Record the outcome of the in-flight submission.
    pub fn finish_submission(&mut self, outcome: Result<()>) -> Result<()> {
        if !self.state.is_pending() {
            warn!("submission outcome reported with nothing in flight");
            return Err(SubmitError::NotPending);
        }
        let sent = self.in_flight.take();
        match outcome {
            Ok(()) => {
                info!("contact message delivered");
                if sent.as_ref() == Some(&self.form) {
                    self.form = ContactForm::default();
                }
                self.errors.clear();
                self.state = SubmissionState::Succeeded;
                Ok(())
            }
            Err(error) => {
                warn!(%error, "contact message failed");
                self.state = SubmissionState::Failed(error.to_string());
                Err(error)
            }
        }
    }

    /// Validate, deliver through `submitter` and record the outcome.
    pub async fn submit<S: Submitter>(&mut self, submitter: &S) -> Result<()> {
        let form = self.begin_submission()?;
        let outcome = submitter.submit(&form).await;
        self.finish_submission(outcome)
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: FormField) -> Option<&'static str> {
        self.errors.get(field)
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_pending()
    }
}

//! Contact form: field validation, the edit/submit session and message
//! delivery.

pub mod error;
pub mod form;
pub mod session;
pub mod submit;
pub mod validate;

pub use error::{Result, SubmitError};
pub use form::{ContactForm, FormField};
pub use session::{ContactSession, SubmissionState};
pub use submit::{DEFAULT_SUBMIT_DELAY, SUCCESS_MESSAGE, SimulatedSubmitter, Submitter};
pub use validate::{
    FieldErrors, FieldIssue, INVALID_EMAIL_MESSAGE, check_field, is_valid_email, validate,
};

//! Contact form validation.
//!
//! Each field is checked on its own; there are no cross-field rules. The
//! result maps each invalid field to one message. A field that is absent from
//! the map is valid.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::form::{ContactForm, FormField};

/// local-part "@" domain "." tld, no whitespace and no second "@".
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email";

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldIssue {
    /// Trimmed value is empty.
    Required(FormField),
    /// Value does not look like an email address.
    InvalidEmail,
}

impl FieldIssue {
    pub fn field(&self) -> FormField {
        match self {
            FieldIssue::Required(field) => *field,
            FieldIssue::InvalidEmail => FormField::Email,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            FieldIssue::Required(field) => field.required_message(),
            FieldIssue::InvalidEmail => INVALID_EMAIL_MESSAGE,
        }
    }
}

/// Field → issue map for the fields that are currently invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    issues: BTreeMap<FormField, FieldIssue>,
}

impl FieldErrors {
    pub fn insert(&mut self, issue: FieldIssue) {
        self.issues.insert(issue.field(), issue);
    }

    pub fn remove(&mut self, field: FormField) -> Option<FieldIssue> {
        self.issues.remove(&field)
    }

    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.issues.get(&field).map(FieldIssue::message)
    }

    pub fn issue(&self, field: FormField) -> Option<FieldIssue> {
        self.issues.get(&field).copied()
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.issues.contains_key(&field)
    }

    /// (field, message) pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &'static str)> + '_ {
        self.issues
            .iter()
            .map(|(field, issue)| (*field, issue.message()))
    }

    pub fn clear(&mut self) {
        self.issues.clear();
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Shape check for an email address. The value is not trimmed.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Check one field.
pub fn check_field(form: &ContactForm, field: FormField) -> Option<FieldIssue> {
    let value = form.get(field);
    if value.trim().is_empty() {
        return Some(FieldIssue::Required(field));
    }
    if field == FormField::Email && !is_valid_email(value) {
        return Some(FieldIssue::InvalidEmail);
    }
    None
}

/// Validate every field. An empty result means the form can be submitted.
pub fn validate(form: &ContactForm) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in FormField::ALL {
        if let Some(issue) = check_field(form, field) {
            errors.insert(issue);
        }
    }
    debug!(invalid = errors.len(), "validated contact form");
    errors
}

//! Tests for contact form validation.

use folio_contact::{ContactForm, FieldIssue, FormField, check_field, validate};

#[test]
fn reports_name_and_email_only() {
    let form = ContactForm::new("", "bad", "x", "y");
    let errors = validate(&form);
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get(FormField::Name), Some("Name is required"));
    assert_eq!(
        errors.get(FormField::Email),
        Some("Please enter a valid email")
    );
    assert!(!errors.contains(FormField::Subject));
    assert!(!errors.contains(FormField::Message));
}

#[test]
fn valid_form_has_no_errors() {
    let form = ContactForm::new(
        "Jane Doe",
        "jane@example.com",
        "New store",
        "Let's talk about a migration.",
    );
    assert!(validate(&form).is_empty());
}

#[test]
fn blank_form_requires_every_field() {
    let errors = validate(&ContactForm::default());
    let messages: Vec<(FormField, &str)> = errors.iter().collect();
    assert_eq!(
        messages,
        [
            (FormField::Name, "Name is required"),
            (FormField::Email, "Email is required"),
            (FormField::Subject, "Subject is required"),
            (FormField::Message, "Message is required"),
        ]
    );
}

#[test]
fn whitespace_only_counts_as_empty() {
    let form = ContactForm::new("   ", "\t", "\n", " ");
    let errors = validate(&form);
    assert_eq!(errors.len(), 4);
    assert_eq!(
        errors.issue(FormField::Email),
        Some(FieldIssue::Required(FormField::Email))
    );
}

#[test]
fn email_gets_exactly_one_error() {
    let empty = ContactForm::new("a", "", "b", "c");
    assert_eq!(
        check_field(&empty, FormField::Email),
        Some(FieldIssue::Required(FormField::Email))
    );
    let malformed = ContactForm::new("a", "jane@example", "b", "c");
    assert_eq!(
        check_field(&malformed, FormField::Email),
        Some(FieldIssue::InvalidEmail)
    );
}

#[test]
fn errors_serialize_by_field_name() {
    let errors = validate(&ContactForm::new("", "jane@example.com", "s", "m"));
    let json = serde_json::to_value(&errors).expect("serialize errors");
    assert!(json["issues"]["name"].is_object());
    assert!(json["issues"].get("email").is_none());
}

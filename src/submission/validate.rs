//! Completeness and format checks for a submission.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::schema::{FieldInput, Form, FormId};

use super::types::Submission;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email pattern")
});

// `[0-9]` rather than `\d`: only ASCII digits are accepted.
static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}$").expect("phone pattern")
});

/// Why a single value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIssue {
    Missing,
    InvalidEmail,
    InvalidPhone,
}

impl FieldIssue {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Missing => "is required",
            Self::InvalidEmail => "is not a valid email address",
            Self::InvalidPhone => "is not a valid phone number",
        }
    }
}

/// First reason a submission failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Form '{form_id}' not found")]
    FormNotFound { form_id: FormId },

    #[error("Field '{label}' {}", .issue.describe())]
    Field { label: String, issue: FieldIssue },
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE.is_match(value)
}

/// Check one value against its field input. Every input type is required.
pub fn check_value(input: &FieldInput, value: &str) -> Result<(), FieldIssue> {
    if value.is_empty() {
        return Err(FieldIssue::Missing);
    }
    match input {
        FieldInput::Email if !is_valid_email(value) => Err(FieldIssue::InvalidEmail),
        FieldInput::Phone if !is_valid_phone(value) => Err(FieldIssue::InvalidPhone),
        _ => Ok(()),
    }
}

/// Validate the record for `form` field by field, stopping at the first
/// failure. A missing record is treated as all values empty.
pub fn validate_submission(form: &Form, submission: Option<&Submission>) -> Result<(), ValidationError> {
    for field in &form.fields {
        let value = submission.map(|s| s.value(&field.label)).unwrap_or("");
        check_value(&field.input, value).map_err(|issue| ValidationError::Field {
            label: field.label.clone(),
            issue,
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Field;

    #[test]
    fn email_examples() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("First.Last+tag@Mail.Example.ORG"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@b.c"));
        assert!(!is_valid_email("ä@b.co"));
    }

    #[test]
    fn phone_examples() {
        assert!(is_valid_phone("(555) 123-4567"));
        assert!(is_valid_phone("555-123-4567"));
        assert!(is_valid_phone("555.123.4567"));
        assert!(is_valid_phone("5551234567"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("555-123-45678"));
        assert!(!is_valid_phone("٥٥٥-١٢٣-٤٥٦٧"));
    }

    #[test]
    fn empty_value_fails_for_every_type() {
        let inputs = [
            FieldInput::Text,
            FieldInput::Textarea,
            FieldInput::Email,
            FieldInput::Phone,
            FieldInput::Radio { options: vec!["a".into()] },
            FieldInput::Select { options: vec!["a".into()] },
            FieldInput::Other { type_name: "date".into() },
        ];
        for input in &inputs {
            assert_eq!(check_value(input, ""), Err(FieldIssue::Missing), "{:?}", input);
        }
    }

    #[test]
    fn unrecognised_type_only_needs_a_value() {
        let input = FieldInput::Other { type_name: "date".into() };
        assert_eq!(check_value(&input, "not a date"), Ok(()));
    }

    #[test]
    fn stops_at_first_failing_field() {
        let form = Form::new(
            FormId::from("f1"),
            "Contact",
            vec![Field::email("Email"), Field::text("Name")],
        );
        let mut submission = Submission::new(form.id.clone());
        submission.data.insert("Email".into(), "nope".into());

        let err = validate_submission(&form, Some(&submission)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Field {
                label: "Email".into(),
                issue: FieldIssue::InvalidEmail,
            }
        );
        assert_eq!(err.to_string(), "Field 'Email' is not a valid email address");
    }

    #[test]
    fn form_without_fields_is_vacuously_valid() {
        let form = Form::new(FormId::from("f1"), "Empty", vec![]);
        assert!(validate_submission(&form, None).is_ok());
    }
}

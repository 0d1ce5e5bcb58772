//! Submission records and their validation.

mod store;
mod types;
mod validate;

pub use store::SubmissionStore;
pub use types::Submission;
pub use validate::{
    check_value, is_valid_email, is_valid_phone, validate_submission, FieldIssue, ValidationError,
};

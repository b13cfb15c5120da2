//! Whole-form validation for the submit gate.

use crate::phone::PhoneNumber;
use crate::validation::email::{email_field_message, is_email_valid, NOT_GMAIL};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Inline message shown under an incomplete phone number.
pub const PHONE_INVALID: &str = "Digite um número válido com 11 dígitos";

/// Why a field blocks submission.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("WhatsApp number has {digits} digits, expected 11")]
    PhoneInvalid { digits: usize },

    #[error("E-mail rejected: {message}")]
    EmailInvalid { message: &'static str },
}

impl FieldError {
    /// Text to render next to the offending field.
    pub fn message(&self) -> &'static str {
        match self {
            Self::PhoneInvalid { .. } => PHONE_INVALID,
            Self::EmailInvalid { message } => *message,
        }
    }
}

pub fn is_phone_valid(phone: &PhoneNumber) -> bool {
    phone.is_complete()
}

fn check_phone(phone: &PhoneNumber) -> Validation<(), NonEmptyVec<FieldError>> {
    if is_phone_valid(phone) {
        Validation::success(())
    } else {
        Validation::fail(FieldError::PhoneInvalid {
            digits: phone.digit_count(),
        })
    }
}

fn check_email(email: &str) -> Validation<(), NonEmptyVec<FieldError>> {
    if is_email_valid(email) {
        Validation::success(())
    } else {
        // The live diagnostic can be silent for addresses the strict rule
        // still refuses; fall back to the domain message then.
        let message = email_field_message(email).unwrap_or(NOT_GMAIL);
        Validation::fail(FieldError::EmailInvalid { message })
    }
}

/// Validate both fields, accumulating every failure.
///
/// ```rust
/// use bodyup_landing::phone::PhoneNumber;
/// use bodyup_landing::validation::validate_form;
///
/// let phone = PhoneNumber::parse("11987654321").unwrap();
/// assert!(validate_form(&phone, "a@gmail.com").is_success());
/// assert!(validate_form(&PhoneNumber::new(), "a@gmail.com").is_failure());
/// ```
pub fn validate_form(phone: &PhoneNumber, email: &str) -> Validation<(), NonEmptyVec<FieldError>> {
    Validation::all_vec(vec![check_phone(phone), check_email(email)]).map(|_| ())
}

/// True iff the phone has eleven digits and the email is a Gmail address.
pub fn can_submit(phone: &PhoneNumber, email: &str) -> bool {
    is_phone_valid(phone) && is_email_valid(email)
}

/// Flatten a validation result into the list of failing fields.
pub fn field_errors(result: Validation<(), NonEmptyVec<FieldError>>) -> Vec<FieldError> {
    match result {
        Validation::Success(()) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}

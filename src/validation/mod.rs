//! Field validation for the signup form.
//!
//! All functions here are pure. Submission gating uses the strict checks in
//! [`form`]; inline feedback for the email field uses the ordered
//! diagnostics in [`email`]. The two are allowed to disagree.

pub mod email;
pub mod form;

pub use email::{email_field_message, is_email_valid};
pub use form::{can_submit, field_errors, is_phone_valid, validate_form, FieldError, PHONE_INVALID};

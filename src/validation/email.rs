//! Gmail address checks.
//!
//! Two views of the same field: a strict predicate that gates submission,
//! and a live diagnostic that explains the first thing wrong with what the
//! user has typed so far.

use once_cell::sync::Lazy;
use regex::Regex;

pub const MISSING_AT: &str = "O e-mail deve conter @";
pub const MISSING_DOMAIN: &str = "O e-mail deve conter um domínio (.com, .br, etc)";
pub const MALFORMED: &str = "E-mail inválido";
pub const NOT_GMAIL: &str = "Apenas e-mails do Gmail são aceitos";

/// Placeholder shown in the empty field.
pub const PLACEHOLDER: &str = "seu.email@gmail.com";

static GMAIL_ADDRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[^\s@]+@gmail\.com$").expect("gmail address regex should compile")
});

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email shape regex should compile")
});

/// True iff `email` is `local@gmail.com`, domain compared case-insensitively.
///
/// ```rust
/// use bodyup_landing::validation::is_email_valid;
///
/// assert!(is_email_valid("user@gmail.com"));
/// assert!(is_email_valid("USER@GMAIL.COM"));
/// assert!(!is_email_valid("user@hotmail.com"));
/// assert!(!is_email_valid("user@@gmail.com"));
/// assert!(!is_email_valid("usergmail.com"));
/// ```
pub fn is_email_valid(email: &str) -> bool {
    GMAIL_ADDRESS.is_match(email)
}

/// First inline diagnostic for the email field, if any.
///
/// Rules are checked in a fixed order and only the first failure is
/// reported. An empty field has no message.
///
/// ```rust
/// use bodyup_landing::validation::{email_field_message, email::MISSING_AT};
///
/// assert_eq!(email_field_message(""), None);
/// assert_eq!(email_field_message("abc"), Some(MISSING_AT));
/// assert_eq!(email_field_message("a@gmail.com"), None);
/// ```
pub fn email_field_message(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        return None;
    }
    if !email.contains('@') {
        return Some(MISSING_AT);
    }
    if !email.contains('.') {
        return Some(MISSING_DOMAIN);
    }
    if !EMAIL_SHAPE.is_match(email) {
        return Some(MALFORMED);
    }
    if !email.to_lowercase().contains("@gmail.com") {
        return Some(NOT_GMAIL);
    }
    None
}

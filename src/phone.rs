//! WhatsApp number masking.
//!
//! The field only ever stores the masked rendering of up to eleven digits:
//! a two digit area code, a five digit prefix and a four digit line,
//! `(DD) DDDDD-DDDD`. Groups appear progressively as digits are typed.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Maximum number of digits a phone number may hold.
pub const MAX_DIGITS: usize = 11;

/// Placeholder shown in the empty field.
pub const PLACEHOLDER: &str = "(99) 99999-9999";

/// Extract the ASCII digits of `raw`, in order.
pub fn digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Count the ASCII digits in `raw`.
pub fn digit_count(raw: &str) -> usize {
    raw.chars().filter(char::is_ascii_digit).count()
}

/// Render arbitrary text as a masked phone number.
///
/// Non-digits are dropped and only the first eleven digits are kept.
///
/// ```rust
/// use bodyup_landing::phone::format_whatsapp;
///
/// assert_eq!(format_whatsapp(""), "");
/// assert_eq!(format_whatsapp("1"), "(1");
/// assert_eq!(format_whatsapp("119"), "(11) 9");
/// assert_eq!(format_whatsapp("11987654321"), "(11) 98765-4321");
/// assert_eq!(format_whatsapp("+55 (11) 9"), "(55) 119");
/// ```
pub fn format_whatsapp(raw: &str) -> String {
    let digits: Vec<char> = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_DIGITS)
        .collect();

    let mut formatted = String::with_capacity(PLACEHOLDER.len());
    for (i, digit) in digits.iter().enumerate() {
        match i {
            0 => formatted.push('('),
            2 => formatted.push_str(") "),
            7 => formatted.push('-'),
            _ => {}
        }
        formatted.push(*digit);
    }
    formatted
}

/// A WhatsApp number as held by the signup form.
///
/// Only the masked string is stored; it is always `format_whatsapp` of its
/// own digits. Deserialization goes through [`PhoneNumber::parse`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber {
    masked: String,
}

impl PhoneNumber {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from arbitrary text, rejecting input with too many digits.
    pub fn parse(raw: &str) -> Option<Self> {
        if digit_count(raw) > MAX_DIGITS {
            return None;
        }
        Some(Self {
            masked: format_whatsapp(raw),
        })
    }

    /// Replace the value with the field's new raw text.
    ///
    /// A keystroke or paste that would leave more than eleven digits is
    /// discarded wholesale and the current value is kept. Returns the digit
    /// count of the rejected input in that case.
    pub fn apply_input(&mut self, raw: &str) -> Result<(), usize> {
        let count = digit_count(raw);
        if count > MAX_DIGITS {
            return Err(count);
        }
        self.masked = format_whatsapp(raw);
        Ok(())
    }

    pub fn masked(&self) -> &str {
        &self.masked
    }

    pub fn digits(&self) -> String {
        digits(&self.masked)
    }

    pub fn digit_count(&self) -> usize {
        digit_count(&self.masked)
    }

    /// True iff the number has exactly eleven digits.
    pub fn is_complete(&self) -> bool {
        self.digit_count() == MAX_DIGITS
    }

    pub fn is_empty(&self) -> bool {
        self.masked.is_empty()
    }

    pub fn clear(&mut self) {
        self.masked.clear();
    }
}

/// Text that cannot be held by a [`PhoneNumber`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("Phone number has {0} digits, expected at most 11")]
pub struct TooManyDigits(pub usize);

impl TryFrom<String> for PhoneNumber {
    type Error = TooManyDigits;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw).ok_or_else(|| TooManyDigits(digit_count(&raw)))
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.masked
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked)
    }
}

//! Form input validation.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. both fields present (neither empty)
//! 2. username is ASCII-only
//! 3. password is ASCII-only
//!
//! The presence check dominates: a form with an empty username and a
//! non-ASCII password reports the missing field, not the bad characters.

use signon_model::FormInput;

use crate::error::{Field, ValidationError};

/// Returns `true` if `value` contains any character outside the ASCII
/// range (code points above U+007F).
fn has_unicode_chars(value: &str) -> bool {
    value.chars().any(|c| !c.is_ascii())
}

/// Validates a login form before authentication.
///
/// `Ok(())` means the input is well-formed; it says nothing about
/// whether the credentials are correct.
pub fn validate(input: &FormInput) -> Result<(), ValidationError> {
    if input.username.is_empty() || input.password.is_empty() {
        return Err(ValidationError::EmptyField);
    }
    if has_unicode_chars(&input.username) {
        return Err(ValidationError::UnicodeCharacters {
            field: Field::Username,
        });
    }
    if has_unicode_chars(&input.password) {
        return Err(ValidationError::UnicodeCharacters {
            field: Field::Password,
        });
    }
    Ok(())
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::error;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email regex is valid")
});

/// Checks that `email` looks like an email address
///
/// # Examples
/// ```
/// use bassa_client::model::utils::validate_format;
/// assert!(validate_format("user@example.com").is_ok());
/// assert!(validate_format("not-an-email").is_err());
/// ```
pub fn validate_format(email: &str) -> Result<(), AppError> {
    if EMAIL_REGEX.is_match(email) {
        Ok(())
    } else {
        error!("Invalid email address: {}", email);
        Err(AppError::InvalidFormat(format!("invalid email address: {email}")))
    }
}

/// Fails with `InvalidInput` naming the first empty field
///
/// Only the empty string is rejected; whitespace is passed through as given.
///
/// # Arguments
/// * `fields` - `(name, value)` pairs, checked in order
pub fn require_non_empty(fields: &[(&str, &str)]) -> Result<(), AppError> {
    match fields.iter().find(|(_, value)| value.is_empty()) {
        Some((name, _)) => {
            error!("Required field is empty: {}", name);
            Err(AppError::InvalidInput(format!("{name} must not be empty")))
        }
        None => Ok(()),
    }
}

/// Fails with `InvalidInput` when a numeric parameter is zero
pub fn require_positive(name: &str, value: u32) -> Result<(), AppError> {
    if value == 0 {
        error!("Required field is zero: {}", name);
        return Err(AppError::InvalidInput(format!("{name} must be greater than zero")));
    }
    Ok(())
}

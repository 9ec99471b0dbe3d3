//! Boundary validation for user- and prompt-facing input.
//!
//! Every rule is enforced here, before anything touches storage. All
//! functions return [`CoreError::Validation`] with a human-readable message
//! that is safe to surface to clients.

use validator::ValidateEmail;

use crate::error::CoreError;

/// Minimum length of a user's display name.
pub const MIN_NAME_LEN: usize = 2;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Minimum length of a prompt title.
pub const MIN_TITLE_LEN: usize = 2;

/// Minimum length of a prompt's text payload.
pub const MIN_TEXT_LEN: usize = 5;

/// Validate a user's display name (length >= 2 after trimming).
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().chars().count() < MIN_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Name must be at least {MIN_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate that a string is email-shaped.
///
/// Delegates to the `validator` crate's HTML5-style check, tightened to
/// require a dotted domain (`a@b` is not a deliverable address here).
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    let domain_has_dot = email
        .rsplit_once('@')
        .is_some_and(|(_, domain)| domain.contains('.'));

    if !email.validate_email() || !domain_has_dot {
        return Err(CoreError::Validation("A valid email is required".into()));
    }
    Ok(())
}

/// Validate a registration password (length >= 6).
pub fn validate_password(password: &str) -> Result<(), CoreError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a prompt title (length >= 2 after trimming).
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().chars().count() < MIN_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Title must be at least {MIN_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a prompt's text payload (length >= 5 after trimming).
pub fn validate_prompt_text(text: &str) -> Result<(), CoreError> {
    if text.trim().chars().count() < MIN_TEXT_LEN {
        return Err(CoreError::Validation(format!(
            "Prompt text must be at least {MIN_TEXT_LEN} characters"
        )));
    }
    Ok(())
}

/// Normalize an email for storage and lookup: trim and lowercase.
///
/// Uniqueness is enforced on the normalized form, so `A@b.com` and
/// `a@b.com` are the same account.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

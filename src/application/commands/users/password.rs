use crate::application::error::{ApplicationError, ApplicationResult};

pub(super) const MIN_PASSWORD_LENGTH: usize = 12;

/// Reject passwords shorter than `MIN_PASSWORD_LENGTH` or lacking any of the
/// required character classes. The error names what is missing.
pub(super) fn validate_password(password: &str) -> ApplicationResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ApplicationError::validation(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    let classes: [(&str, fn(char) -> bool); 4] = [
        ("an uppercase letter", char::is_uppercase),
        ("a lowercase letter", char::is_lowercase),
        ("a digit", |c| c.is_ascii_digit()),
        ("a special character", |c| !c.is_alphanumeric()),
    ];

    let missing: Vec<&str> = classes
        .iter()
        .filter(|(_, test)| !password.chars().any(*test))
        .map(|(label, _)| *label)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ApplicationError::validation(format!(
            "password must contain {}",
            missing.join(", ")
        )))
    }
}

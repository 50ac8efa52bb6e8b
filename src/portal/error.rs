use thiserror::Error;

/// Shortest password accepted at registration, counted in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Input rejected by a login or registration form.
///
/// The display string is what the form shows under its heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
}

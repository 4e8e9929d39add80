use thiserror::Error;

/// Field-level problems detected before a request is issued.
///
/// The `Display` text of each variant is the exact message shown next to the form.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please fill in all required fields")]
    MissingRequiredFields,
    #[error("Username must be at least 3 characters")]
    UsernameTooShort,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please select an image first")]
    NoFileSelected,
    #[error("Invalid file type. Please select a JPG, PNG, GIF, or WEBP image.")]
    UnsupportedFileType,
    #[error("File size exceeds 10MB limit")]
    FileTooLarge,
    #[error("Please enter a valid user ID")]
    InvalidUserId,
}

//! Local form validation.
//!
//! Every check here runs before a request is issued; a form that fails validation never
//! reaches the network.

use crate::error::ValidationError;

/// Largest accepted upload (10 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// MIME types accepted for analysis
pub const ALLOWED_IMAGE_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;

/// Raw login form input
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Raw registration form input
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Login input after validation
#[derive(Clone, Debug, PartialEq)]
pub struct ValidLogin {
    pub username: String,
    pub password: String,
}

/// Registration input after validation
#[derive(Clone, Debug, PartialEq)]
pub struct ValidRegistration {
    pub username: String,
    pub email: Option<String>,
    pub password: String,
}

/// Validates login input.
///
/// The username is trimmed; the password is taken as typed.
pub fn validate_login(form: &LoginForm) -> Result<ValidLogin, ValidationError> {
    let username = form.username.trim();

    if username.is_empty() || form.password.is_empty() {
        return Err(ValidationError::MissingFields);
    }

    check_credentials(username, &form.password)?;

    Ok(ValidLogin {
        username: username.to_string(),
        password: form.password.clone(),
    })
}

/// Validates registration input.
///
/// # Logic
/// - username, password and confirmation are required
/// - username at least 3 characters after trimming, password at least 6
/// - confirmation must equal the password
/// - email is optional, but must look like an address when given
pub fn validate_register(form: &RegisterForm) -> Result<ValidRegistration, ValidationError> {
    let username = form.username.trim();

    if username.is_empty() || form.password.is_empty() || form.confirm_password.is_empty() {
        return Err(ValidationError::MissingRequiredFields);
    }

    check_credentials(username, &form.password)?;

    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }

    let email = validate_email(&form.email)?;

    Ok(ValidRegistration {
        username: username.to_string(),
        email,
        password: form.password.clone(),
    })
}

/// Validates an optional email field; blank input means no email.
pub fn validate_email(email: &str) -> Result<Option<String>, ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Ok(None);
    }

    let plausible = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        }
        None => false,
    };

    if !plausible || email.contains(char::is_whitespace) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(Some(email.to_string()))
}

/// Validates a picked file's type and size.
pub fn validate_image_file(content_type: &str, size: u64) -> Result<(), ValidationError> {
    let content_type = content_type.trim().to_ascii_lowercase();

    if !ALLOWED_IMAGE_TYPES.contains(&content_type.as_str()) {
        return Err(ValidationError::UnsupportedFileType);
    }

    if size > MAX_UPLOAD_BYTES {
        return Err(ValidationError::FileTooLarge);
    }

    Ok(())
}

/// Parses the admin images search box.
///
/// Blank input clears the filter; anything else must be a positive user id.
pub fn parse_user_filter(input: &str) -> Result<Option<i64>, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    match input.parse::<i64>() {
        Ok(id) if id > 0 => Ok(Some(id)),
        _ => Err(ValidationError::InvalidUserId),
    }
}

fn check_credentials(username: &str, password: &str) -> Result<(), ValidationError> {
    if username.chars().count() < MIN_USERNAME_LEN {
        return Err(ValidationError::UsernameTooShort);
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }

    Ok(())
}

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ApiError;
use crate::handlers::auth::LoginRequest;
use crate::models::Role;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// A submission that passed every field check, normalized for storage:
/// name trimmed, email trimmed and lower-cased, password untouched.
#[derive(Clone, Debug)]
pub struct ValidatedLogin {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub login_time: Option<String>,
}

/// Run the field checks in order; the first failing check decides the
/// reported message. An empty string counts as a missing field.
pub fn validate_submission(req: &LoginRequest) -> Result<ValidatedLogin, ApiError> {
    let name = req.name.as_deref().unwrap_or("");
    let email = req.email.as_deref().unwrap_or("");
    let password = req.password.as_deref().unwrap_or("");
    let role = req.role.as_deref().unwrap_or("");

    if name.is_empty() || email.is_empty() || password.is_empty() || role.is_empty() {
        return Err(ApiError::Validation(
            "All fields (name, email, password, role) are required".into(),
        ));
    }

    let name = name.trim();
    if name.chars().count() < 2 {
        return Err(ApiError::Validation(
            "Name must be at least 2 characters long".into(),
        ));
    }

    let email = email.trim();
    if !EMAIL_RE.is_match(email) {
        return Err(ApiError::Validation(
            "Please provide a valid email address".into(),
        ));
    }

    if password.chars().count() < 6 {
        return Err(ApiError::Validation(
            "Password must be at least 6 characters long".into(),
        ));
    }

    let role = Role::from_str(role)
        .ok_or_else(|| ApiError::Validation("Invalid role selected".into()))?;

    Ok(ValidatedLogin {
        name: name.to_string(),
        email: email.to_lowercase(),
        password: password.to_string(),
        role,
        login_time: req.login_time.clone().filter(|t| !t.is_empty()),
    })
}

//! Required-field checks for the sign-in, registration and password forms.
//!
//! Credentials are never verified; these checks only decide whether a form
//! may be submitted and which inline messages to show.

use crate::error::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Minimum length accepted by the change-password dialog.
pub const MIN_PASSWORD_LEN: usize = 6;

pub(crate) fn require(fields: &mut HashMap<String, String>, name: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        fields.insert(name.to_string(), message.to_string());
    }
}

/// Parse a `YYYY-MM-DD` date input, flagging the field when it is missing
/// or malformed.
pub(crate) fn parse_date(
    fields: &mut HashMap<String, String>,
    name: &str,
    value: &str,
    missing: &str,
) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        fields.insert(name.to_string(), missing.to_string());
        return None;
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            fields.insert(name.to_string(), "Enter a date as YYYY-MM-DD".to_string());
            None
        }
    }
}

/// Trimmed value, `None` when blank.
pub(crate) fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

pub(crate) fn finish(fields: HashMap<String, String>) -> Result<(), AppError> {
    if fields.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation("Validation failed", fields))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut fields = HashMap::new();
        require(&mut fields, "email", &self.email, "Email is required");
        require(&mut fields, "password", &self.password, "Password is required");
        finish(fields)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    /// Optional; collected but not stored in the session.
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut fields = HashMap::new();
        require(&mut fields, "full_name", &self.full_name, "Full name is required");
        require(&mut fields, "email", &self.email, "Email is required");
        require(&mut fields, "password", &self.password, "Password is required");
        require(
            &mut fields,
            "confirm_password",
            &self.confirm_password,
            "Please confirm your password",
        );
        if !fields.contains_key("confirm_password") && self.password != self.confirm_password {
            fields.insert(
                "confirm_password".to_string(),
                "Passwords do not match".to_string(),
            );
        }
        finish(fields)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PasswordChange {
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChange {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut fields = HashMap::new();
        if self.new_password.chars().count() < MIN_PASSWORD_LEN {
            fields.insert(
                "new_password".to_string(),
                format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
            );
        }
        if self.new_password != self.confirm_password {
            fields.insert(
                "confirm_password".to_string(),
                "Passwords do not match".to_string(),
            );
        }
        finish(fields)
    }
}

/// Profile edits written back to the session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileEdit {
    pub full_name: String,
    pub email: String,
}

impl ProfileEdit {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut fields = HashMap::new();
        require(&mut fields, "full_name", &self.full_name, "Full name is required");
        require(&mut fields, "email", &self.email, "Email is required");
        finish(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppErrorKind;

    fn register_form() -> RegisterForm {
        RegisterForm {
            full_name: "Asha Kumar".into(),
            email: "asha@example.org".into(),
            phone: String::new(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
        }
    }

    #[test]
    fn login_accepts_any_credentials() {
        let form = LoginForm {
            email: "x@y".into(),
            password: "p".into(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn login_requires_both_fields() {
        let err = LoginForm::default().validate().unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field("email"), Some("Email is required"));
        assert_eq!(err.field("password"), Some("Password is required"));
    }

    #[test]
    fn whitespace_only_is_empty() {
        let form = LoginForm {
            email: "   ".into(),
            password: "p".into(),
        };
        let err = form.validate().unwrap_err();
        assert!(err.field("email").is_some());
        assert!(err.field("password").is_none());
    }

    #[test]
    fn register_phone_is_optional() {
        assert!(register_form().validate().is_ok());
    }

    #[test]
    fn register_password_mismatch() {
        let form = RegisterForm {
            confirm_password: "secret2".into(),
            ..register_form()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err.field("confirm_password"), Some("Passwords do not match"));
        assert_eq!(err.field_errors.len(), 1);
    }

    #[test]
    fn register_missing_confirmation_is_not_reported_as_mismatch() {
        let form = RegisterForm {
            confirm_password: String::new(),
            ..register_form()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err.field("confirm_password"), Some("Please confirm your password"));
    }

    #[test]
    fn password_change_too_short() {
        let change = PasswordChange {
            new_password: "abc".into(),
            confirm_password: "abc".into(),
        };
        let err = change.validate().unwrap_err();
        assert!(err.field("new_password").is_some());
        assert!(err.field("confirm_password").is_none());
    }

    #[test]
    fn password_change_exactly_min_len() {
        let change = PasswordChange {
            new_password: "abcdef".into(),
            confirm_password: "abcdef".into(),
        };
        assert!(change.validate().is_ok());
    }

    #[test]
    fn password_change_mismatch() {
        let change = PasswordChange {
            new_password: "abcdefg".into(),
            confirm_password: "abcdefh".into(),
        };
        let err = change.validate().unwrap_err();
        assert_eq!(err.field("confirm_password"), Some("Passwords do not match"));
    }

    #[test]
    fn profile_edit_requires_name_and_email() {
        let err = ProfileEdit::default().validate().unwrap_err();
        assert_eq!(err.field_errors.len(), 2);
    }
}

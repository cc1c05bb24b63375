//! Signup and login form checks, run before the store is touched.
//!
//! Checks stop at the first failing field, in form order: name, email,
//! password.

use pocket_config::ValidationConfig;

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern compiles")
});

/// A field-level problem with submitted form input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please enter your name")]
    MissingName,

    #[error("Name must be at most {max} characters")]
    NameTooLong { max: usize },

    #[error("Please enter your email")]
    MissingEmail,

    #[error("Please enter a valid email")]
    InvalidEmail,

    #[error("Please enter a password")]
    MissingPassword,

    /// Login form wording for an empty password
    #[error("Please enter your password")]
    MissingLoginPassword,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
}

impl FormError {
    /// Form field the error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingName | Self::NameTooLong { .. } => "name",
            Self::MissingEmail | Self::InvalidEmail => "email",
            Self::MissingPassword | Self::MissingLoginPassword | Self::PasswordTooShort { .. } => {
                "password"
            }
        }
    }
}

pub struct FormValidator {
    config: ValidationConfig,
}

impl FormValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn validate_signup(&self, name: &str, email: &str, password: &str) -> Result<(), FormError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }
        if name.chars().count() > self.config.max_name_length {
            return Err(FormError::NameTooLong {
                max: self.config.max_name_length,
            });
        }

        Self::validate_email(email)?;
        self.validate_password(password, FormError::MissingPassword)
    }

    pub fn validate_login(&self, email: &str, password: &str) -> Result<(), FormError> {
        Self::validate_email(email)?;
        self.validate_password(password, FormError::MissingLoginPassword)
    }

    fn validate_email(email: &str) -> Result<(), FormError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(FormError::MissingEmail);
        }
        if !EMAIL_PATTERN.is_match(&email.to_lowercase()) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    /// Length is checked on the password as typed, before any trimming.
    fn validate_password(&self, password: &str, missing: FormError) -> Result<(), FormError> {
        if password.is_empty() {
            return Err(missing);
        }
        if password.chars().count() < self.config.min_password_length {
            return Err(FormError::PasswordTooShort {
                min: self.config.min_password_length,
            });
        }
        Ok(())
    }
}

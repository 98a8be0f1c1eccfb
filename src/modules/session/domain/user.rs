use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};

/// Registration form input
#[derive(Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Every field must be filled in
    pub fn validate(&self) -> AppResult<()> {
        let missing: Vec<&str> = [
            ("name", &self.name),
            ("email", &self.email),
            ("password", &self.password),
        ]
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| *field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::ValidationError(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )))
        }
    }
}

/// Stored identity, without credentials
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_are_reported() {
        let err = NewUser::new("", "a@b.c", " ").validate().unwrap_err();
        match err {
            AppError::ValidationError(msg) => {
                assert!(msg.contains("name"));
                assert!(msg.contains("password"));
                assert!(!msg.contains("email"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_debug_hides_password() {
        let user = NewUser::new("Ada", "ada@example.com", "hunter2");
        assert!(!format!("{:?}", user).contains("hunter2"));
    }
}

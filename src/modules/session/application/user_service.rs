use std::sync::Arc;

use super::credentials::{hash_password, verify_password};
use crate::modules::session::domain::{keys, NewUser, SessionStore, UserProfile};
use crate::shared::errors::{AppError, AppResult};

/// Single-user registration and login on top of a [`SessionStore`]
///
/// Registering again replaces the stored user.
pub struct UserService {
    store: Arc<dyn SessionStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Store a new user; the password is kept only as an Argon2id hash
    pub fn register(&self, user: NewUser) -> AppResult<UserProfile> {
        user.validate()?;

        let password_hash = hash_password(&user.password)?;
        let email = user.email.trim().to_string();
        let name = user.name.trim().to_string();

        self.store.set(keys::NAME, &name)?;
        self.store.set(keys::EMAIL, &email)?;
        self.store.set(keys::PASSWORD, &password_hash)?;
        self.store.set(keys::LOGGED_IN, "false")?;

        log::info!("Registered user '{}'", email);
        Ok(UserProfile { name, email })
    }

    /// Check credentials against the stored user and mark the session logged in
    pub fn authenticate(&self, email: &str, password: &str) -> AppResult<bool> {
        let (Some(stored_email), Some(stored_hash)) =
            (self.store.get(keys::EMAIL)?, self.store.get(keys::PASSWORD)?)
        else {
            log::debug!("Login attempt with no registered user");
            return Ok(false);
        };

        // Password is checked even when the email differs
        let password_ok = verify_password(password, &stored_hash).map_err(|e| {
            AppError::StorageError(format!("Stored credential is unreadable: {}", e))
        })?;
        let authenticated = password_ok && stored_email == email.trim();

        if authenticated {
            self.store.set(keys::LOGGED_IN, "true")?;
            log::info!("User '{}' logged in", stored_email);
        } else {
            log::warn!("Rejected login attempt");
        }

        Ok(authenticated)
    }

    /// Like [`authenticate`](Self::authenticate), but a rejection is an error
    pub fn login(&self, email: &str, password: &str) -> AppResult<UserProfile> {
        if !self.authenticate(email, password)? {
            return Err(AppError::Unauthorized("Invalid email or password".to_string()));
        }
        self.current_user()?
            .ok_or_else(|| AppError::NotFound("Registered user disappeared".to_string()))
    }

    pub fn logout(&self) -> AppResult<()> {
        self.store.set(keys::LOGGED_IN, "false")
    }

    pub fn is_registered(&self) -> AppResult<bool> {
        Ok(self.store.get(keys::NAME)?.is_some()
            && self.store.get(keys::EMAIL)?.is_some()
            && self.store.get(keys::PASSWORD)?.is_some())
    }

    pub fn is_logged_in(&self) -> AppResult<bool> {
        Ok(self.store.get(keys::LOGGED_IN)?.as_deref() == Some("true"))
    }

    pub fn current_user(&self) -> AppResult<Option<UserProfile>> {
        match (self.store.get(keys::NAME)?, self.store.get(keys::EMAIL)?) {
            (Some(name), Some(email)) => Ok(Some(UserProfile { name, email })),
            _ => Ok(None),
        }
    }
}

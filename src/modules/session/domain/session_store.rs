use crate::shared::errors::AppResult;

/// Well-known keys the login feature keeps in the session store
pub mod keys {
    pub const NAME: &str = "Name";
    pub const EMAIL: &str = "Email";
    pub const PASSWORD: &str = "Password";
    pub const LOGGED_IN: &str = "isLoggedIn";
}

/// Plain string key-value persistence boundary
///
/// Mirrors browser local storage: flat keys, string values, last write wins.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    fn remove(&self, key: &str) -> AppResult<()>;
}

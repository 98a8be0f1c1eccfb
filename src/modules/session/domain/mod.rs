pub mod session_store;
pub mod user;

pub use session_store::{keys, SessionStore};
pub use user::{NewUser, UserProfile};

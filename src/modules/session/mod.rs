pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::UserService;
pub use domain::{NewUser, SessionStore, UserProfile};
pub use infrastructure::InMemorySessionStore;

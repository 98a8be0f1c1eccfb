use movie_browser_lib::modules::session::{
    domain::keys, InMemorySessionStore, NewUser, SessionStore, UserService,
};
use movie_browser_lib::shared::errors::AppError;
use std::sync::Arc;

#[test]
fn test_register_login_logout_round() {
    let store = Arc::new(InMemorySessionStore::new());
    let service = UserService::new(store.clone());

    assert!(!service.is_registered().unwrap());

    let profile = service
        .register(NewUser::new("  Grace  ", "grace@example.com", "cobol-1959"))
        .unwrap();
    assert_eq!(profile.name, "Grace");

    assert_eq!(store.get(keys::NAME).unwrap().as_deref(), Some("Grace"));
    assert_eq!(
        store.get(keys::EMAIL).unwrap().as_deref(),
        Some("grace@example.com")
    );
    assert_ne!(
        store.get(keys::PASSWORD).unwrap().as_deref(),
        Some("cobol-1959")
    );

    assert!(service.authenticate("grace@example.com", "cobol-1959").unwrap());
    assert_eq!(store.get(keys::LOGGED_IN).unwrap().as_deref(), Some("true"));

    service.logout().unwrap();
    assert_eq!(store.get(keys::LOGGED_IN).unwrap().as_deref(), Some("false"));
}

#[test]
fn test_tampered_hash_is_a_storage_error() {
    let store = Arc::new(InMemorySessionStore::new());
    let service = UserService::new(store.clone());
    service
        .register(NewUser::new("Grace", "grace@example.com", "cobol-1959"))
        .unwrap();

    store.set(keys::PASSWORD, "cobol-1959").unwrap();

    let err = service
        .authenticate("grace@example.com", "cobol-1959")
        .unwrap_err();
    assert!(matches!(err, AppError::StorageError(_)));
    assert!(!service.is_logged_in().unwrap());
}

#[test]
fn test_missing_fields_are_listed() {
    let service = UserService::new(Arc::new(InMemorySessionStore::new()));

    match service.register(NewUser::new("", "", "pw")) {
        Err(AppError::ValidationError(message)) => {
            assert!(message.contains("name"));
            assert!(message.contains("email"));
            assert!(!message.contains("password"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

use std::sync::{Arc, Barrier};
use std::thread;

use rax_credstore::protocol::{Response, parse_command};
use rax_credstore::utils::logging::setup_logging;
use rax_credstore::{Account, CredentialStore, RegisterError, RequestHandler, VerifyError};

// Helper to build a store seeded the way a default deployment is
fn bootstrap_store() -> CredentialStore {
    setup_logging();
    CredentialStore::with_bootstrap(Account::new("admin", "password123"))
}

// Helper to run one request through the adapter
fn send(handler: &RequestHandler, path: &str, body: &str) -> Response {
    handler.handle(parse_command(path), body.as_bytes())
}

#[test]
fn test_register_then_verify_many() {
    let store = bootstrap_store();
    for i in 0..50 {
        let username = format!("user{i}");
        let password = format!("secret-{i}");
        assert!(store.register(&username, &password).is_ok());
        assert!(store.verify(&username, &password).is_ok());
    }
    assert_eq!(store.len(), 51);
}

#[test]
fn test_wrong_secret_rejected() {
    let store = bootstrap_store();
    store.register("dave", "correct horse").unwrap();
    for attempt in ["", "correct", "correct horse ", "Correct horse", "battery staple"] {
        assert_eq!(
            store.verify("dave", attempt),
            Err(VerifyError::InvalidCredentials)
        );
    }
}

#[test]
fn test_unknown_identifier_rejected() {
    let store = bootstrap_store();
    for password in ["", "password123", "anything"] {
        assert_eq!(
            store.verify("nobody", password),
            Err(VerifyError::InvalidCredentials)
        );
    }
}

#[test]
fn test_bootstrap_scenario() {
    let store = bootstrap_store();
    assert!(store.verify("admin", "password123").is_ok());
    assert_eq!(
        store.verify("admin", "wrong"),
        Err(VerifyError::InvalidCredentials)
    );
    assert_eq!(
        store.register("admin", "anything"),
        Err(RegisterError::DuplicateIdentifier("admin".into()))
    );
}

#[test]
fn test_concurrent_register_same_identifier_threads() {
    const CALLERS: usize = 16;

    let store = Arc::new(bootstrap_store());
    let barrier = Arc::new(Barrier::new(CALLERS));

    let handles: Vec<_> = (0..CALLERS)
        .map(|i| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                store.register("racer", &format!("pw-{i}"))
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let created = results.iter().filter(|r| r.is_ok()).count();
    let duplicates = results
        .iter()
        .filter(|r| matches!(r, Err(RegisterError::DuplicateIdentifier(u)) if u == "racer"))
        .count();

    assert_eq!(created, 1);
    assert_eq!(duplicates, CALLERS - 1);
    assert_eq!(store.len(), 2);
    assert!(store.contains("racer"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_signup_same_identifier_tasks() {
    const CALLERS: usize = 32;

    let handler = RequestHandler::new(Arc::new(bootstrap_store()));

    let tasks: Vec<_> = (0..CALLERS)
        .map(|_| {
            let handler = handler.clone();
            tokio::spawn(async move {
                send(
                    &handler,
                    "/signup",
                    r#"{"username":"eve","password":"pw"}"#,
                )
            })
        })
        .collect();

    let mut statuses = Vec::with_capacity(CALLERS);
    for task in tasks {
        statuses.push(task.await.unwrap().status);
    }

    assert_eq!(statuses.iter().filter(|&&s| s == 201).count(), 1);
    assert_eq!(statuses.iter().filter(|&&s| s == 400).count(), CALLERS - 1);
    assert_eq!(handler.store().len(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_distinct_registrations() {
    let store = Arc::new(CredentialStore::new());

    let tasks: Vec<_> = (0..64)
        .map(|i| {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.register(&format!("user{i}"), "pw") })
        })
        .collect();

    for task in tasks {
        assert!(task.await.unwrap().is_ok());
    }
    assert_eq!(store.len(), 64);
}

#[test]
fn test_request_flow() {
    let handler = RequestHandler::new(Arc::new(bootstrap_store()));

    let response = send(&handler, "/signup", r#"{"username":"frank","password":"f123"}"#);
    assert_eq!(response.status, 201);
    assert_eq!(
        response.to_json().unwrap(),
        r#"{"status":"success","message":"User created successfully"}"#
    );

    let response = send(&handler, "/signup", r#"{"username":"frank","password":"other"}"#);
    assert_eq!(response.status, 400);
    assert_eq!(response.body.message, "Username already exists");

    let response = send(&handler, "/login", r#"{"username":"frank","password":"f123"}"#);
    assert_eq!(response.status, 200);
    assert_eq!(response.body.message, "Login successful");

    let response = send(&handler, "/login", r#"{"username":"frank","password":"other"}"#);
    assert_eq!(response.status, 401);
    assert_eq!(
        response.to_json().unwrap(),
        r#"{"status":"error","message":"Invalid credentials"}"#
    );

    let response = send(&handler, "/signup", r#"{"username":"","password":""}"#);
    assert_eq!(response.status, 400);
    assert_eq!(response.body.message, "Missing username or password");

    let response = send(&handler, "/signup", "garbage");
    assert_eq!(response.status, 400);

    let response = send(&handler, "/reset", "{}");
    assert_eq!(response.status, 404);

    assert_eq!(handler.store().len(), 2);
}

#[test]
fn test_stores_are_isolated() {
    let first = bootstrap_store();
    let second = CredentialStore::new();
    first.register("grace", "pw").unwrap();
    assert!(!second.contains("grace"));
    assert!(second.verify("admin", "password123").is_err());
}

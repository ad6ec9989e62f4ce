use account_service::domain::account::errors::AccountError;
use account_service::domain::account::models::AccountId;
use account_service::domain::account::models::Login;
use account_service::domain::account::ports::AccountRepository;
use account_service::outbound::repositories::SqliteAccountRepository;
use chrono::Utc;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Open a fresh in-memory database with migrations applied
async fn test_pool() -> SqlitePool {
    // A single long-lived connection keeps the in-memory database alive
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

fn login(raw: &str) -> Login {
    Login::new(raw.to_string()).expect("Failed to construct login")
}

#[tokio::test]
async fn test_create_assigns_sequential_ids() {
    let repository = SqliteAccountRepository::new(test_pool().await);

    let first = repository
        .create(&login("nicola"), "hash-one")
        .await
        .expect("Failed to create account");
    let second = repository
        .create(&login("aurora"), "hash-two")
        .await
        .expect("Failed to create account");

    assert_eq!(first.id, AccountId(1));
    assert_eq!(second.id, AccountId(2));
}

#[tokio::test]
async fn test_create_and_find_by_login() {
    let repository = SqliteAccountRepository::new(test_pool().await);

    let created = repository
        .create(&login("nicola"), "$argon2id$v=19$m=19456,t=2,p=1$abc$def")
        .await
        .expect("Failed to create account");

    let found = repository
        .find_by_login("nicola")
        .await
        .expect("Failed to query account")
        .expect("Account not found");

    assert_eq!(found.id, created.id);
    assert_eq!(found.login.as_str(), "nicola");
    assert_eq!(found.password_hash, created.password_hash);

    // The stored timestamp must survive the round trip as a recent instant
    let age = Utc::now() - found.created_at;
    assert!(age.num_seconds() >= 0 && age.num_seconds() < 60);
}

#[tokio::test]
async fn test_find_by_login_missing() {
    let repository = SqliteAccountRepository::new(test_pool().await);

    let found = repository
        .find_by_login("nobody")
        .await
        .expect("Failed to query account");

    assert!(found.is_none());
}

#[tokio::test]
async fn test_find_by_id() {
    let repository = SqliteAccountRepository::new(test_pool().await);

    let created = repository
        .create(&login("nicola"), "hash-one")
        .await
        .expect("Failed to create account");

    let found = repository
        .find_by_id(created.id)
        .await
        .expect("Failed to query account")
        .expect("Account not found");
    assert_eq!(found.login.as_str(), "nicola");

    let missing = repository
        .find_by_id(AccountId(42))
        .await
        .expect("Failed to query account");
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_create_duplicate_login() {
    let repository = SqliteAccountRepository::new(test_pool().await);

    repository
        .create(&login("nicola"), "hash-one")
        .await
        .expect("Failed to create account");

    let duplicate = repository.create(&login("nicola"), "hash-two").await;

    match duplicate {
        Err(AccountError::AlreadyExists(taken)) => assert_eq!(taken, "nicola"),
        other => panic!("Expected AlreadyExists, got {:?}", other),
    }
}

#[tokio::test]
async fn test_concurrent_create_single_winner() {
    let repository = SqliteAccountRepository::new(test_pool().await);
    let contested = login("nicola");

    let first = repository.create(&contested, "hash-one");
    let second = repository.create(&contested, "hash-two");
    let (first, second) = tokio::join!(first, second);

    // Exactly one insert wins; the other loses to the unique constraint
    let successes = [&first, &second].iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);

    let failure = if first.is_err() { first } else { second };
    assert!(matches!(failure, Err(AccountError::AlreadyExists(_))));
}

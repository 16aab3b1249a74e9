mod common;

use common::{empty_store, seeded_store};
use watchlist::{commands, models::LoginForm};

fn output(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
}

fn credentials(username: &str, password: &str) -> LoginForm {
    LoginForm { username: username.to_string(), password: password.to_string() }
}

#[tokio::test]
async fn test_forge_command() {
    let store = seeded_store().await;
    let mut out = Vec::new();

    commands::forge(&store, &mut out).await.unwrap();

    assert!(output(out).contains("Done."));
    let count = store.count_movies().await.unwrap();
    assert_eq!(count, 1 + commands::SAMPLE_MOVIES.len() as u64);
    assert_eq!(store.count_users().await.unwrap(), 1);
    assert_eq!(store.owner().await.unwrap().unwrap().name, "Test");
}

#[tokio::test]
async fn test_forge_creates_owner_on_empty_database() {
    let store = empty_store().await;

    commands::forge(&store, &mut Vec::<u8>::new()).await.unwrap();
    commands::forge(&store, &mut Vec::<u8>::new()).await.unwrap();

    let owner = store.owner().await.unwrap().unwrap();
    assert_eq!(owner.name, commands::OWNER_NAME);
    assert!(owner.password_hash.is_none());
    assert_eq!(store.count_users().await.unwrap(), 1);
    assert_eq!(store.count_movies().await.unwrap(), 2 * commands::SAMPLE_MOVIES.len() as u64);
}

#[tokio::test]
async fn test_initdb_command() {
    let store = seeded_store().await;
    let mut out = Vec::new();

    commands::initdb(&store, false, &mut out).await.unwrap();

    assert!(output(out).contains("Initialized database."));
    assert_eq!(store.count_movies().await.unwrap(), 1);
}

#[tokio::test]
async fn test_initdb_drop_clears_data() {
    let store = seeded_store().await;
    let mut out = Vec::new();

    commands::initdb(&store, true, &mut out).await.unwrap();

    assert!(output(out).contains("Initialized database."));
    assert_eq!(store.count_movies().await.unwrap(), 0);
    assert_eq!(store.count_users().await.unwrap(), 0);
}

#[tokio::test]
async fn test_admin_command() {
    let store = empty_store().await;
    let mut out = Vec::new();

    commands::admin(&store, "max", "123", &mut out).await.unwrap();

    let out = output(out);
    assert!(out.contains("Creating user..."));
    assert!(out.contains("Done."));
    assert_eq!(store.count_users().await.unwrap(), 1);
    let user = store.owner().await.unwrap().unwrap();
    assert_eq!(user.username, "max");
    assert_eq!(user.name, commands::ADMIN_NAME);
    assert!(store.authenticate(&credentials("max", "123")).await.is_ok());
}

#[tokio::test]
async fn test_admin_command_update() {
    let store = seeded_store().await;
    let mut out = Vec::new();

    commands::admin(&store, "parzivaal", "456", &mut out).await.unwrap();

    let out = output(out);
    assert!(out.contains("Updating user..."));
    assert!(out.contains("Done."));
    assert_eq!(store.count_users().await.unwrap(), 1);
    let user = store.owner().await.unwrap().unwrap();
    assert_eq!(user.username, "parzivaal");
    assert_eq!(user.name, "Test");
    assert!(store.authenticate(&credentials("parzivaal", "456")).await.is_ok());
    assert!(store.authenticate(&credentials("test", "123")).await.is_err());
}

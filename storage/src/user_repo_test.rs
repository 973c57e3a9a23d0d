//! Unit tests for UserRepository.
//!
//! Covers create/duplicate handling, lookup, updates, and participant queries.

use crate::db::Database;
use crate::error::StorageError;
use crate::models::UserRecord;

async fn memory_db() -> Database {
    Database::connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database")
}

#[tokio::test]
async fn test_create_and_find() {
    let db = memory_db().await;
    let repo = db.users();

    let user = UserRecord::new(1001, Some("alice".to_string()), Some("Alice A".to_string()));
    repo.create(&user).await.expect("Failed to create user");

    let found = repo
        .find_by_user_id(1001)
        .await
        .expect("Failed to query user")
        .expect("User not found");

    assert_eq!(found.user_id, 1001);
    assert_eq!(found.username.as_deref(), Some("alice"));
    assert_eq!(found.full_name.as_deref(), Some("Alice A"));
    assert!(!found.is_subscribed);
    assert!(!found.is_participated);
    assert!(found.id > 0);
}

#[tokio::test]
async fn test_find_missing_user() {
    let db = memory_db().await;
    let repo = db.users();

    let found = repo.find_by_user_id(42).await.expect("Failed to query");
    assert!(found.is_none());
}

#[tokio::test]
async fn test_duplicate_user_id_rejected() {
    let db = memory_db().await;
    let repo = db.users();

    let user = UserRecord::new(1001, None, None);
    repo.create(&user).await.expect("Failed to create user");

    let err = repo.create(&user).await.expect_err("Duplicate must fail");
    assert!(matches!(err, StorageError::DuplicateUser(1001)));
}

#[tokio::test]
async fn test_update_persists_participation_flag() {
    let db = memory_db().await;
    let repo = db.users();

    let mut user = UserRecord::new(1001, Some("alice".to_string()), None);
    repo.create(&user).await.expect("Failed to create user");

    user.is_participated = true;
    repo.update(&user).await.expect("Failed to update user");

    let found = repo
        .find_by_user_id(1001)
        .await
        .expect("Failed to query user")
        .expect("User not found");
    assert!(found.is_participated);
}

#[tokio::test]
async fn test_participant_count_and_listing() {
    let db = memory_db().await;
    let repo = db.users();

    for user_id in [1001, 1002, 1003] {
        let mut user = UserRecord::new(user_id, None, None);
        user.is_participated = user_id != 1003;
        repo.create(&user).await.expect("Failed to create user");
    }

    let count = repo.count_participants().await.expect("Failed to count");
    assert_eq!(count, 2);

    let participants = repo.list_participants().await.expect("Failed to list");
    let ids: Vec<i64> = participants.iter().map(|u| u.user_id).collect();
    assert_eq!(ids, vec![1001, 1002]);
}

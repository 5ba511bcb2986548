//! Persistence gateway tests against the in-memory stores.

use task_categories::models::category::{CategoryFilter, NewCategory};
use task_categories::models::user::NewUser;
use task_categories::store::{CategoryStore, MemoryCategoryStore, MemoryUserStore, UserStore};

#[tokio::test]
async fn test_create_assigns_ids_and_timestamps() {
    let store = MemoryCategoryStore::new();

    let first = store.create(NewCategory::build("Work", 1)).await.expect("create");
    let second = store.create(NewCategory::build("Home", 1)).await.expect("create");

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(first.title, "Work");
    assert_eq!(first.user_id, 1);
    assert_eq!(first.created_at, first.updated_at);
}

#[tokio::test]
async fn test_find_all_filters_by_owner() {
    let store = MemoryCategoryStore::new();
    store.create(NewCategory::build("A1", 1)).await.expect("create");
    store.create(NewCategory::build("B1", 2)).await.expect("create");
    store.create(NewCategory::build("A2", 1)).await.expect("create");

    let all = store.find_all(CategoryFilter::all()).await.expect("list");
    assert_eq!(all.len(), 3);

    let mine = store.find_all(CategoryFilter::owned_by(1)).await.expect("list");
    let titles: Vec<&str> = mine.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["A1", "A2"]);

    let nobody = store.find_all(CategoryFilter::owned_by(99)).await.expect("list");
    assert!(nobody.is_empty());
}

#[tokio::test]
async fn test_update_title_touches_updated_at() {
    let store = MemoryCategoryStore::new();
    let created = store.create(NewCategory::build("Work", 1)).await.expect("create");

    let updated = store
        .update_title(created.id, "Office")
        .await
        .expect("update")
        .expect("row exists");
    assert_eq!(updated.title, "Office");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    let missing = store.update_title(404, "Nothing").await.expect("update");
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_delete_returns_snapshot_and_never_reuses_ids() {
    let store = MemoryCategoryStore::new();
    let created = store.create(NewCategory::build("Work", 1)).await.expect("create");

    let removed = store.delete(created.id).await.expect("delete").expect("row existed");
    assert_eq!(removed, created);
    assert!(store.find_by_id(created.id).await.expect("query").is_none());
    assert!(store.delete(created.id).await.expect("delete").is_none());

    let next = store.create(NewCategory::build("Again", 1)).await.expect("create");
    assert_ne!(next.id, created.id);
}

#[tokio::test]
async fn test_user_store_rejects_duplicate_usernames() {
    let store = MemoryUserStore::new();
    let new_user = || NewUser {
        username: "alice".to_string(),
        password_hash: "hash".to_string(),
    };

    let alice = store.create(new_user()).await.expect("create");
    assert!(store.create(new_user()).await.is_err());

    let found = store
        .find_by_username("alice")
        .await
        .expect("query")
        .expect("exists");
    assert_eq!(found.id, alice.id);
    assert!(store.find_by_username("bob").await.expect("query").is_none());
    assert_eq!(store.count().await.expect("count"), 1);
}

//! Post store CRUD integration tests

use app_lib::app::{
    post_create, post_delete, post_get, post_list, post_update, PostCreateReq, PostUpdateReq,
};
use app_lib::infra::db::init_test_db;

fn make_post_req(title: &str, author: &str) -> PostCreateReq {
    PostCreateReq {
        title: title.to_string(),
        content: format!("{} body", title),
        author: author.to_string(),
    }
}

// ══════════════════════════════════════════════════════════
//  post_create
// ══════════════════════════════════════════════════════════

#[test]
fn create_then_get_returns_inserted_fields() {
    let pool = init_test_db();
    let created = post_create(
        &pool,
        PostCreateReq {
            title: "First".to_string(),
            content: "Some long content".to_string(),
            author: "Alice".to_string(),
        },
    )
    .unwrap();

    let fetched = post_get(&pool, created.id).unwrap().unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.title, "First");
    assert_eq!(fetched.content, "Some long content");
    assert_eq!(fetched.author, "Alice");
    assert_eq!(fetched.created_at, created.created_at);
}

#[test]
fn create_assigns_fresh_unique_ids() {
    let pool = init_test_db();
    let a = post_create(&pool, make_post_req("A", "Alice")).unwrap();
    let b = post_create(&pool, make_post_req("B", "Bob")).unwrap();
    assert_ne!(a.id, b.id);

    // Ids of deleted rows are not reissued (AUTOINCREMENT).
    post_delete(&pool, b.id).unwrap();
    let c = post_create(&pool, make_post_req("C", "Carol")).unwrap();
    assert!(c.id > b.id);
}

#[test]
fn create_sets_parseable_timestamp() {
    let pool = init_test_db();
    let created = post_create(&pool, make_post_req("Stamped", "Alice")).unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(&created.created_at).is_ok());
}

#[test]
fn create_accepts_empty_strings() {
    // Emptiness is enforced by the shell, not here.
    let pool = init_test_db();
    let created = post_create(
        &pool,
        PostCreateReq {
            title: String::new(),
            content: String::new(),
            author: String::new(),
        },
    )
    .unwrap();
    let fetched = post_get(&pool, created.id).unwrap().unwrap();
    assert_eq!(fetched.title, "");
}

// ══════════════════════════════════════════════════════════
//  post_list
// ══════════════════════════════════════════════════════════

#[test]
fn list_empty_store() {
    let pool = init_test_db();
    assert!(post_list(&pool).unwrap().is_empty());
}

#[test]
fn list_orders_newest_first() {
    let pool = init_test_db();
    for i in 0..5 {
        post_create(&pool, make_post_req(&format!("P{}", i), "Alice")).unwrap();
    }

    let posts = post_list(&pool).unwrap();
    assert_eq!(posts.len(), 5);
    for pair in posts.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
        assert!(pair[0].id > pair[1].id);
    }
    assert_eq!(posts[0].title, "P4");
    assert_eq!(posts[4].title, "P0");
}

// ══════════════════════════════════════════════════════════
//  post_get
// ══════════════════════════════════════════════════════════

#[test]
fn get_missing_id_returns_none() {
    let pool = init_test_db();
    assert!(post_get(&pool, 42).unwrap().is_none());
}

// ══════════════════════════════════════════════════════════
//  post_update
// ══════════════════════════════════════════════════════════

#[test]
fn update_changes_title_and_content_only() {
    let pool = init_test_db();
    let created = post_create(&pool, make_post_req("Before", "Alice")).unwrap();

    post_update(
        &pool,
        PostUpdateReq {
            id: created.id,
            title: "After".to_string(),
            content: "New content".to_string(),
        },
    )
    .unwrap();

    let fetched = post_get(&pool, created.id).unwrap().unwrap();
    assert_eq!(fetched.title, "After");
    assert_eq!(fetched.content, "New content");
    assert_eq!(fetched.author, "Alice");
    assert_eq!(fetched.created_at, created.created_at);
    assert_eq!(fetched.id, created.id);
}

#[test]
fn update_missing_id_is_silent_noop() {
    let pool = init_test_db();
    let created = post_create(&pool, make_post_req("Keep", "Alice")).unwrap();

    post_update(
        &pool,
        PostUpdateReq {
            id: created.id + 1000,
            title: "Ghost".to_string(),
            content: "Ghost body".to_string(),
        },
    )
    .unwrap();

    // Existing row untouched.
    let fetched = post_get(&pool, created.id).unwrap().unwrap();
    assert_eq!(fetched.title, "Keep");
    assert_eq!(post_list(&pool).unwrap().len(), 1);
}

// ══════════════════════════════════════════════════════════
//  post_delete
// ══════════════════════════════════════════════════════════

#[test]
fn delete_removes_row() {
    let pool = init_test_db();
    let created = post_create(&pool, make_post_req("Doomed", "Alice")).unwrap();

    post_delete(&pool, created.id).unwrap();

    assert!(post_get(&pool, created.id).unwrap().is_none());
    assert!(post_list(&pool)
        .unwrap()
        .iter()
        .all(|p| p.id != created.id));
}

#[test]
fn delete_missing_id_is_silent_noop() {
    let pool = init_test_db();
    let created = post_create(&pool, make_post_req("Keep", "Alice")).unwrap();

    post_delete(&pool, created.id + 1000).unwrap();

    assert_eq!(post_list(&pool).unwrap().len(), 1);
}

// ══════════════════════════════════════════════════════════
//  End-to-end scenario
// ══════════════════════════════════════════════════════════

#[test]
fn create_list_delete_scenario() {
    let pool = init_test_db();

    let hello = post_create(
        &pool,
        PostCreateReq {
            title: "Hello".to_string(),
            content: "World body".to_string(),
            author: "Alice".to_string(),
        },
    )
    .unwrap();

    let posts = post_list(&pool).unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "Hello");
    assert_eq!(posts[0].author, "Alice");

    post_create(
        &pool,
        PostCreateReq {
            title: "Second".to_string(),
            content: "Body2".to_string(),
            author: "Bob".to_string(),
        },
    )
    .unwrap();

    let posts = post_list(&pool).unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].title, "Second"); // newer first

    post_delete(&pool, hello.id).unwrap();

    let posts = post_list(&pool).unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "Second");
}

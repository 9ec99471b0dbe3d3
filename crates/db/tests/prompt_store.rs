//! Integration tests for the prompt repository against a real database:
//! owner scoping, filtered listing, the public feed cap and ordering, and
//! the atomic like/unlike invariant.

use promptvault_db::models::prompt::{
    CreatePrompt, LikeOutcome, PromptFilters, PublicSort, UpdatePrompt,
};
use promptvault_db::models::user::CreateUser;
use promptvault_db::repositories::{PromptRepo, UserRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_user(pool: &PgPool, email: &str) -> i64 {
    let input = CreateUser {
        name: "Test User".to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$not-a-real-hash".to_string(),
        role: "member".to_string(),
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
        .id
}

fn new_prompt(owner_id: i64, title: &str) -> CreatePrompt {
    CreatePrompt {
        owner_id,
        title: title.to_string(),
        description: None,
        text: "Hello world prompt".to_string(),
        tags: vec![],
        category: None,
        folder: None,
    }
}

// ---------------------------------------------------------------------------
// CRUD and ownership
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_create_and_find_owned(pool: PgPool) {
    let owner = seed_user(&pool, "owner@test.com").await;

    let created = PromptRepo::create(&pool, &new_prompt(owner, "Greeting"))
        .await
        .expect("create should succeed");
    assert_eq!(created.owner_id, owner);
    assert_eq!(created.likes, 0);
    assert!(created.liked_by.is_empty());
    assert!(!created.is_public);

    let found = PromptRepo::find_owned(&pool, owner, created.id)
        .await
        .expect("find should succeed");
    assert_eq!(found.expect("prompt should exist").id, created.id);
}

#[sqlx::test]
async fn test_find_owned_hides_other_users_prompts(pool: PgPool) {
    let alice = seed_user(&pool, "alice@test.com").await;
    let bob = seed_user(&pool, "bob@test.com").await;

    let prompt = PromptRepo::create(&pool, &new_prompt(alice, "Private"))
        .await
        .expect("create should succeed");

    // Bob cannot see, update, or delete Alice's prompt.
    let found = PromptRepo::find_owned(&pool, bob, prompt.id)
        .await
        .expect("find should succeed");
    assert!(found.is_none(), "other users' prompts must look missing");

    let updated = PromptRepo::update_owned(
        &pool,
        bob,
        prompt.id,
        &UpdatePrompt {
            title: Some("Stolen".to_string()),
            ..Default::default()
        },
    )
    .await
    .expect("update should succeed");
    assert!(updated.is_none());

    let deleted = PromptRepo::delete_owned(&pool, bob, prompt.id)
        .await
        .expect("delete should succeed");
    assert!(!deleted);
}

#[sqlx::test]
async fn test_update_applies_partial_fields(pool: PgPool) {
    let owner = seed_user(&pool, "owner@test.com").await;
    let prompt = PromptRepo::create(&pool, &new_prompt(owner, "Original"))
        .await
        .expect("create should succeed");

    let updated = PromptRepo::update_owned(
        &pool,
        owner,
        prompt.id,
        &UpdatePrompt {
            title: Some("Renamed".to_string()),
            tags: Some(vec!["sql".to_string()]),
            ..Default::default()
        },
    )
    .await
    .expect("update should succeed")
    .expect("prompt should exist");

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.tags, vec!["sql".to_string()]);
    // Untouched fields keep their values.
    assert_eq!(updated.text, "Hello world prompt");
}

#[sqlx::test]
async fn test_delete_is_idempotent_in_effect(pool: PgPool) {
    let owner = seed_user(&pool, "owner@test.com").await;
    let prompt = PromptRepo::create(&pool, &new_prompt(owner, "Doomed"))
        .await
        .expect("create should succeed");

    assert!(PromptRepo::delete_owned(&pool, owner, prompt.id)
        .await
        .expect("delete should succeed"));
    // The second delete reports the same "gone" outcome.
    assert!(!PromptRepo::delete_owned(&pool, owner, prompt.id)
        .await
        .expect("delete should succeed"));
}

// ---------------------------------------------------------------------------
// Filtered listing
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_list_owned_exact_match_filters(pool: PgPool) {
    let owner = seed_user(&pool, "owner@test.com").await;

    let mut tagged = new_prompt(owner, "Tagged");
    tagged.tags = vec!["react".to_string()];
    tagged.folder = Some("work".to_string());
    PromptRepo::create(&pool, &tagged)
        .await
        .expect("create should succeed");

    let mut other = new_prompt(owner, "Other");
    other.category = Some("ops".to_string());
    PromptRepo::create(&pool, &other)
        .await
        .expect("create should succeed");

    let by_tag = PromptRepo::list_owned(
        &pool,
        owner,
        &PromptFilters {
            tag: Some("react".to_string()),
            ..Default::default()
        },
    )
    .await
    .expect("list should succeed");
    assert_eq!(by_tag.len(), 1);
    assert_eq!(by_tag[0].title, "Tagged");

    let by_folder = PromptRepo::list_owned(
        &pool,
        owner,
        &PromptFilters {
            folder: Some("work".to_string()),
            ..Default::default()
        },
    )
    .await
    .expect("list should succeed");
    assert_eq!(by_folder.len(), 1);

    let by_category = PromptRepo::list_owned(
        &pool,
        owner,
        &PromptFilters {
            category: Some("ops".to_string()),
            ..Default::default()
        },
    )
    .await
    .expect("list should succeed");
    assert_eq!(by_category.len(), 1);
    assert_eq!(by_category[0].title, "Other");

    let all = PromptRepo::list_owned(&pool, owner, &PromptFilters::default())
        .await
        .expect("list should succeed");
    assert_eq!(all.len(), 2);
}

#[sqlx::test]
async fn test_list_owned_full_text_search(pool: PgPool) {
    let owner = seed_user(&pool, "owner@test.com").await;

    let mut rust_prompt = new_prompt(owner, "Borrow checker");
    rust_prompt.text = "Explain ownership and borrowing in Rust".to_string();
    PromptRepo::create(&pool, &rust_prompt)
        .await
        .expect("create should succeed");

    PromptRepo::create(&pool, &new_prompt(owner, "Greeting"))
        .await
        .expect("create should succeed");

    let hits = PromptRepo::list_owned(
        &pool,
        owner,
        &PromptFilters {
            q: Some("borrowing".to_string()),
            ..Default::default()
        },
    )
    .await
    .expect("list should succeed");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Borrow checker");
}

// ---------------------------------------------------------------------------
// Public feed
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_list_public_never_leaks_private_prompts(pool: PgPool) {
    let owner = seed_user(&pool, "owner@test.com").await;

    let public = PromptRepo::create(&pool, &new_prompt(owner, "Shared"))
        .await
        .expect("create should succeed");
    PromptRepo::set_visibility(&pool, owner, public.id, true)
        .await
        .expect("publish should succeed");

    PromptRepo::create(&pool, &new_prompt(owner, "Secret"))
        .await
        .expect("create should succeed");

    let feed = PromptRepo::list_public(&pool, None, None, PublicSort::Trending)
        .await
        .expect("list should succeed");
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].title, "Shared");

    // The same holds with filters applied.
    let searched = PromptRepo::list_public(&pool, Some("Secret"), None, PublicSort::New)
        .await
        .expect("list should succeed");
    assert!(searched.is_empty());
}

#[sqlx::test]
async fn test_list_public_trending_orders_by_likes(pool: PgPool) {
    let owner = seed_user(&pool, "owner@test.com").await;
    let fan = seed_user(&pool, "fan@test.com").await;

    let quiet = PromptRepo::create(&pool, &new_prompt(owner, "Quiet"))
        .await
        .expect("create should succeed");
    PromptRepo::set_visibility(&pool, owner, quiet.id, true)
        .await
        .expect("publish should succeed");

    let hot = PromptRepo::create(&pool, &new_prompt(owner, "Hot"))
        .await
        .expect("create should succeed");
    PromptRepo::set_visibility(&pool, owner, hot.id, true)
        .await
        .expect("publish should succeed");
    PromptRepo::like(&pool, hot.id, fan)
        .await
        .expect("like should succeed");

    let feed = PromptRepo::list_public(&pool, None, None, PublicSort::Trending)
        .await
        .expect("list should succeed");
    assert_eq!(feed[0].title, "Hot");
    assert_eq!(feed[1].title, "Quiet");
}

// ---------------------------------------------------------------------------
// Likes
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_like_unlike_keeps_count_in_sync(pool: PgPool) {
    let owner = seed_user(&pool, "owner@test.com").await;
    let fan = seed_user(&pool, "fan@test.com").await;

    let prompt = PromptRepo::create(&pool, &new_prompt(owner, "Likeable"))
        .await
        .expect("create should succeed");
    PromptRepo::set_visibility(&pool, owner, prompt.id, true)
        .await
        .expect("publish should succeed");

    let outcome = PromptRepo::like(&pool, prompt.id, fan)
        .await
        .expect("like should succeed");
    assert_eq!(outcome, LikeOutcome::Liked(1));

    // Second like from the same user is rejected.
    let outcome = PromptRepo::like(&pool, prompt.id, fan)
        .await
        .expect("like should succeed");
    assert_eq!(outcome, LikeOutcome::AlreadyLiked);

    let row = PromptRepo::find_owned(&pool, owner, prompt.id)
        .await
        .expect("find should succeed")
        .expect("prompt should exist");
    assert_eq!(row.likes, 1);
    assert_eq!(row.liked_by, vec![fan]);

    // Unlike drops the count back to zero.
    let likes = PromptRepo::unlike(&pool, prompt.id, fan)
        .await
        .expect("unlike should succeed");
    assert_eq!(likes, Some(0));

    // Unliking again is a no-op, not an error.
    let likes = PromptRepo::unlike(&pool, prompt.id, fan)
        .await
        .expect("unlike should succeed");
    assert_eq!(likes, Some(0));
}

#[sqlx::test]
async fn test_like_private_prompt_looks_missing(pool: PgPool) {
    let owner = seed_user(&pool, "owner@test.com").await;
    let fan = seed_user(&pool, "fan@test.com").await;

    let prompt = PromptRepo::create(&pool, &new_prompt(owner, "Private"))
        .await
        .expect("create should succeed");

    let outcome = PromptRepo::like(&pool, prompt.id, fan)
        .await
        .expect("like should succeed");
    assert_eq!(outcome, LikeOutcome::NotFound);

    let likes = PromptRepo::unlike(&pool, prompt.id, fan)
        .await
        .expect("unlike should succeed");
    assert_eq!(likes, None);
}

/// N distinct users liking concurrently: every like lands, none is lost.
#[sqlx::test]
async fn test_concurrent_likes_lose_nothing(pool: PgPool) {
    let owner = seed_user(&pool, "owner@test.com").await;
    let prompt = PromptRepo::create(&pool, &new_prompt(owner, "Popular"))
        .await
        .expect("create should succeed");
    PromptRepo::set_visibility(&pool, owner, prompt.id, true)
        .await
        .expect("publish should succeed");

    let mut fans = Vec::new();
    for i in 0..8 {
        fans.push(seed_user(&pool, &format!("fan{i}@test.com")).await);
    }

    let mut handles = Vec::new();
    for fan in fans {
        let pool = pool.clone();
        let id = prompt.id;
        handles.push(tokio::spawn(async move {
            PromptRepo::like(&pool, id, fan).await
        }));
    }
    for handle in handles {
        let outcome = handle
            .await
            .expect("task should not panic")
            .expect("like should succeed");
        assert!(
            matches!(outcome, LikeOutcome::Liked(_)),
            "every distinct user's like must be recorded, got {outcome:?}"
        );
    }

    let row = PromptRepo::find_owned(&pool, owner, prompt.id)
        .await
        .expect("find should succeed")
        .expect("prompt should exist");
    assert_eq!(row.likes, 8);
    assert_eq!(row.liked_by.len(), 8);
}

//! Integration tests for the category and location repositories
//!
//! These run against an in-memory SQLite database; no external services are
//! required.

use std::time::Duration;

use campass::database::{DatabaseConfig, DatabaseManager};
use campass::error::StoreError;
use campass::models::{Category, Location};

async fn setup() -> DatabaseManager {
    let config = DatabaseConfig {
        database_url: "sqlite::memory:".to_string(),
        max_connections: 1,
        connection_timeout: Duration::from_secs(5),
    };
    let db = DatabaseManager::new(config)
        .await
        .expect("Failed to connect to database");
    db.run_migrations().await.expect("Failed to run migrations");
    db
}

#[tokio::test]
async fn save_assigns_id_and_round_trips() {
    let db = setup().await;
    let repo = db.category_repository();

    let saved = repo
        .save(&Category::new("Library", "Study and research facilities"))
        .await
        .expect("save should succeed");

    let id = saved.id.expect("saved category should carry an id");
    let found = repo.find_by_id(id).await.expect("find_by_id should succeed");
    assert_eq!(found, Some(saved));
}

#[tokio::test]
async fn save_with_id_updates_existing_row() {
    let db = setup().await;
    let repo = db.category_repository();

    let mut saved = repo
        .save(&Category::new("Dining", "Food and dining facilities"))
        .await
        .expect("save should succeed");

    saved.description = Some("All campus food outlets".to_string());
    repo.save(&saved).await.expect("update should succeed");

    let found = repo
        .find_by_id(saved.id.unwrap())
        .await
        .expect("find_by_id should succeed")
        .expect("category should still exist");
    assert_eq!(
        found.description.as_deref(),
        Some("All campus food outlets")
    );
    assert_eq!(repo.count().await.unwrap(), 1, "update must not insert");
}

#[tokio::test]
async fn find_by_id_returns_none_for_unknown_id() {
    let db = setup().await;
    let repo = db.category_repository();

    let found = repo.find_by_id(999).await.expect("lookup should not error");
    assert_eq!(found, None);
}

#[tokio::test]
async fn duplicate_category_name_is_a_constraint_violation() {
    let db = setup().await;
    let repo = db.category_repository();

    repo.save(&Category::new("Library", "Study and research facilities"))
        .await
        .expect("first save should succeed");

    let err = repo
        .save(&Category::new("Library", "A second library grouping"))
        .await
        .expect_err("duplicate name should fail");
    assert!(matches!(err, StoreError::Constraint(_)), "got: {err:?}");
}

#[tokio::test]
async fn oversized_description_is_a_constraint_violation() {
    let db = setup().await;
    let repo = db.category_repository();

    let err = repo
        .save(&Category::new("Oversized", "x".repeat(1001)))
        .await
        .expect_err("description longer than 1000 chars should fail");
    assert!(err.is_constraint_violation(), "got: {err:?}");
}

#[tokio::test]
async fn location_save_embeds_its_category() {
    let db = setup().await;
    let categories = db.category_repository();
    let locations = db.location_repository();

    let library = categories
        .save(&Category::new("Library", "Study and research facilities"))
        .await
        .unwrap();

    let saved = locations
        .save(&Location::new(
            "Central Library",
            "Main campus library with extensive collection",
            library.clone(),
            40.7125,
            -74.0061,
        ))
        .await
        .expect("location save should succeed");

    let found = locations
        .find_by_id(saved.id.unwrap())
        .await
        .unwrap()
        .expect("location should exist");
    assert_eq!(found.category, library);
    assert_eq!(found.name, "Central Library");
}

#[tokio::test]
async fn location_with_unsaved_category_fails() {
    let db = setup().await;
    let locations = db.location_repository();

    let unsaved = Category::new("Library", "Study and research facilities");
    let err = locations
        .save(&Location::new(
            "Central Library",
            "Main campus library",
            unsaved,
            40.7125,
            -74.0061,
        ))
        .await
        .expect_err("category without an id should be rejected");
    assert!(err.is_constraint_violation(), "got: {err:?}");
}

#[tokio::test]
async fn location_with_dangling_category_reference_fails() {
    let db = setup().await;
    let locations = db.location_repository();

    let dangling = Category {
        id: Some(999),
        name: "Ghost".to_string(),
        description: None,
    };
    let err = locations
        .save(&Location::new(
            "Nowhere Hall",
            "Points at a category that was never persisted",
            dangling,
            40.0,
            -74.0,
        ))
        .await
        .expect_err("foreign key violation expected");
    assert!(err.is_constraint_violation(), "got: {err:?}");
}

#[tokio::test]
async fn find_by_category_id_returns_exactly_that_subset() {
    let db = setup().await;
    let categories = db.category_repository();
    let locations = db.location_repository();

    let academic = categories
        .save(&Category::new("Academic Buildings", "Teaching buildings"))
        .await
        .unwrap();
    let dining = categories
        .save(&Category::new("Dining", "Food and dining facilities"))
        .await
        .unwrap();

    locations
        .save(&Location::new(
            "Engineering Building",
            "Engineering departments",
            academic.clone(),
            40.7128,
            -74.0060,
        ))
        .await
        .unwrap();
    locations
        .save(&Location::new(
            "Science Hall",
            "Labs",
            academic.clone(),
            40.7130,
            -74.0058,
        ))
        .await
        .unwrap();
    locations
        .save(&Location::new(
            "Main Cafeteria",
            "Dining hall",
            dining,
            40.7132,
            -74.0056,
        ))
        .await
        .unwrap();

    let academic_id = academic.id.unwrap();
    let by_category = locations.find_by_category_id(academic_id).await.unwrap();
    let all = locations.find_all().await.unwrap();

    let expected: Vec<_> = all
        .iter()
        .filter(|l| l.category.id == Some(academic_id))
        .cloned()
        .collect();
    assert_eq!(by_category.len(), 2);
    for location in &expected {
        assert!(by_category.contains(location));
    }
}

#[tokio::test]
async fn find_by_category_id_with_unknown_category_is_empty() {
    let db = setup().await;
    let locations = db.location_repository();

    let found = locations
        .find_by_category_id(999)
        .await
        .expect("unknown category must not be an error");
    assert!(found.is_empty());
}

#[tokio::test]
async fn delete_exists_and_count_follow_the_collection() {
    let db = setup().await;
    let repo = db.category_repository();

    let a = repo
        .save(&Category::new("Dining", "Food and dining facilities"))
        .await
        .unwrap();
    let b = repo
        .save(&Category::new("Library", "Study and research facilities"))
        .await
        .unwrap();

    assert_eq!(repo.count().await.unwrap(), 2);
    assert!(repo.exists_by_id(a.id.unwrap()).await.unwrap());

    assert!(repo.delete_by_id(a.id.unwrap()).await.unwrap());
    assert!(!repo.exists_by_id(a.id.unwrap()).await.unwrap());
    assert!(
        !repo.delete_by_id(a.id.unwrap()).await.unwrap(),
        "second delete affects nothing"
    );

    assert!(repo.delete(&b).await.unwrap());
    assert_eq!(repo.count().await.unwrap(), 0);

    // delete of an unsaved record is a no-op
    assert!(!repo
        .delete(&Category::new("Unsaved", "never persisted"))
        .await
        .unwrap());
}

#[tokio::test]
async fn deleting_a_referenced_category_is_a_constraint_violation() {
    let db = setup().await;
    let categories = db.category_repository();
    let locations = db.location_repository();

    let sports = categories
        .save(&Category::new("Sports & Recreation", "Athletics"))
        .await
        .unwrap();
    locations
        .save(&Location::new(
            "Stadium",
            "Football and track stadium",
            sports.clone(),
            40.7135,
            -74.0054,
        ))
        .await
        .unwrap();

    let err = categories
        .delete_by_id(sports.id.unwrap())
        .await
        .expect_err("referenced category must not be deletable");
    assert!(err.is_constraint_violation(), "got: {err:?}");

    // Deleting the locations first clears the reference
    assert_eq!(locations.delete_all().await.unwrap(), 1);
    assert!(categories.delete_by_id(sports.id.unwrap()).await.unwrap());
}

use chrono::{TimeZone, Utc};
use rusqlite::Connection;

use pantrypal::config::Config;
use pantrypal::query::{DifficultyFilter, SortOption};
use pantrypal::recipe::{Difficulty, Recipe};
use pantrypal::store::sqlite::SqliteStore;
use pantrypal::store::{RecipeStore, SAVED_RECIPES_KEY};

fn saved_recipe() -> Recipe {
    Recipe {
        id: 2,
        title: "Chicken Pasta".to_string(),
        description: "A delicious pasta dish with chicken and rice.".to_string(),
        ingredients: vec!["1 cup chicken".to_string(), "8 oz pasta".to_string()],
        instructions: "1: Boil water.\n2: Cook pasta.".to_string(),
        cooking_time: "25 minutes".to_string(),
        difficulty: Difficulty::Medium,
        saved_at: Some(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()),
    }
}

#[tokio::test]
async fn saved_list_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pantrypal.db");
    let path = path.to_str().unwrap();

    SqliteStore::new(path)
        .unwrap()
        .persist(&[saved_recipe()])
        .await
        .unwrap();

    let loaded = SqliteStore::new(path).unwrap().load().await.unwrap();
    assert_eq!(loaded, vec![saved_recipe()]);
}

#[tokio::test]
async fn stored_value_uses_the_shared_json_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pantrypal.db");
    let path = path.to_str().unwrap();

    SqliteStore::new(path)
        .unwrap()
        .persist(&[saved_recipe()])
        .await
        .unwrap();

    let conn = Connection::open(path).unwrap();
    let raw: String = conn
        .query_row(
            "SELECT value FROM storage WHERE key = ?1",
            [SAVED_RECIPES_KEY],
            |row| row.get(0),
        )
        .unwrap();
    assert!(raw.starts_with('['));
    assert!(raw.contains("\"cookingTime\":\"25 minutes\""));
    assert!(raw.contains("\"difficulty\":\"Medium\""));
    assert!(raw.contains("\"savedAt\":\"2025-06-01T12:00:00Z\""));
}

#[tokio::test]
async fn list_written_elsewhere_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pantrypal.db");
    let path = path.to_str().unwrap();
    let store = SqliteStore::new(path).unwrap();

    let conn = Connection::open(path).unwrap();
    conn.execute(
        "INSERT INTO storage (key, value) VALUES (?1, ?2)",
        [
            SAVED_RECIPES_KEY,
            r#"[{"id":1,"title":"Rice Soup","description":"d","ingredients":["rice"],
                "instructions":"1: Cook.","cookingTime":"30 minutes","difficulty":"Easy",
                "savedAt":"2024-01-15T10:30:00.000Z"}]"#,
        ],
    )
    .unwrap();

    let loaded = store.load().await.unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].title, "Rice Soup");
    assert_eq!(loaded[0].difficulty, Difficulty::Easy);
    assert!(loaded[0].saved_at.is_some());
}

#[tokio::test]
async fn persisting_an_empty_list_clears_it() {
    let store = SqliteStore::in_memory().unwrap();
    store.persist(&[saved_recipe()]).await.unwrap();
    store.persist(&[]).await.unwrap();
    assert!(store.load().await.unwrap().is_empty());
}

#[test]
fn preferences_share_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pantrypal.db");
    let path = path.to_str().unwrap();

    let _store = SqliteStore::new(path).unwrap();
    let config = Config::open(path).unwrap();
    config.set_filter(DifficultyFilter::Easy).unwrap();
    config.set_sort(SortOption::Alphabetical).unwrap();
    drop(config);

    let prefs = Config::open(path).unwrap().preferences().unwrap();
    assert_eq!(prefs.filter, DifficultyFilter::Easy);
    assert_eq!(prefs.sort, SortOption::Alphabetical);
}

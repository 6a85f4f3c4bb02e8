//! Integration tests running sessions against the on-disk store.

mod common;

use std::path::PathBuf;
use std::sync::Arc;

use ecoquest_core::repository::BlobStore;
use ecoquest_progress::application::persistence::STORAGE_KEY;
use ecoquest_store::file_blob_store::FileBlobStore;

fn scratch_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("ecoquest-cli-{name}-{}", std::process::id()))
}

#[tokio::test]
async fn test_progress_survives_restart() {
    // Arrange
    let dir = scratch_dir("restart");
    let clock = common::fixed_clock();

    // Act: first run completes one quest, second run only looks.
    let first = common::build_state(clock, Arc::new(FileBlobStore::new(&dir)));
    common::run_script(first, "1\ndone\nquit\n").await;
    let second = common::build_state(clock, Arc::new(FileBlobStore::new(&dir)));
    let output = common::run_script(second, "quit\n").await;

    // Assert
    assert!(output.contains("Streak: 1 day(s)"));
    assert!(output.contains("Today: 1 / 3"));
    assert!(output.contains("(quest 2/3)"));

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}

#[tokio::test]
async fn test_next_day_restart_resets_daily_count() {
    let dir = scratch_dir("nextday");
    let clock = common::fixed_clock();

    let first = common::build_state(clock, Arc::new(FileBlobStore::new(&dir)));
    common::run_script(first, "1\ndone\n1\ndone\n1\ndone\nquit\n").await;
    let second = common::build_state(clock.plus_days(1), Arc::new(FileBlobStore::new(&dir)));
    let output = common::run_script(second, "1\ndone\nquit\n").await;

    assert!(output.contains("Today: 0 / 3"));
    assert!(output.contains("Streak: 2 day(s)"));

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}

#[tokio::test]
async fn test_corrupted_file_starts_fresh() {
    // Arrange
    let dir = scratch_dir("corrupt");
    let store = FileBlobStore::new(&dir);
    store.put(STORAGE_KEY, "{\"streak\": \"lots\"").await.unwrap();
    let state = common::build_state(common::fixed_clock(), Arc::new(store.clone()));

    // Act
    let output = common::run_script(state, "quit\n").await;

    // Assert
    assert!(output.contains("Streak: 0 day(s)"));
    assert!(output.contains("TODAY'S STORY"));
    let raw = store.get(STORAGE_KEY).await.unwrap().unwrap();
    assert_eq!(raw, "{\"streak\": \"lots\"");

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}

#[tokio::test]
async fn test_stored_blob_uses_documented_shape() {
    let dir = scratch_dir("shape");
    let state = common::build_state(common::fixed_clock(), Arc::new(FileBlobStore::new(&dir)));

    common::run_script(state, "1\ndone\nquit\n").await;

    let raw = tokio::fs::read_to_string(dir.join("eco_quest_user_state.json"))
        .await
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["lastCompletedDate"], "2026-10-19");
    assert_eq!(value["dailyCompletions"], 1);
    assert_eq!(value["streak"], 1);
    assert_eq!(value["history"][0]["tag"], "outdoor");

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}

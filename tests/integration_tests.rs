//! Integration tests for rulelens
//!
//! These tests verify end-to-end functionality against real files in
//! temporary directories: dataset loading and derivation, selection
//! persistence round trips, and load-failure reporting.

use rulelens::config::{AppConfig, load_config_from, save_config_to};
use rulelens::core::source::{self, SourceError};
use std::path::PathBuf;
use tempfile::TempDir;

const SAMPLE: &str = r#"{
    "RULE_TARGET_APP_LISTS": {
        "CM_CodeDepot_AppName": ["CodeDepot", "OPT Portal"],
        "CM_OPT_AppName": ["OPT Portal", "UHC Console"]
    },
    "RULES_PACKAGE_LIST": {
        "CodeDepot_Rules_PackageName": ["CM_CodeDepot_Rules_v12"],
        "OPT Portal_Rules_PackageName": "CM_OPT_Rules_v7"
    },
    "RULES_PACKAGE_DESCRIPTION": {
        "CodeDepot_Rules_PackageDescription": "Rules for the CodeDepot app",
        "OPT Portal_Rules_PackageDescription": ["Rules for the OPT portal"]
    }
}"#;

fn write_dataset(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("sample.json");
    std::fs::write(&path, contents).expect("write dataset");
    path
}

#[tokio::test]
async fn test_load_and_derive_app_list() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(&dir, SAMPLE);

    let dataset = source::load_dataset(&path).await.unwrap();

    assert_eq!(
        dataset.app_names(),
        vec!["CodeDepot", "OPT Portal", "UHC Console"]
    );
}

#[tokio::test]
async fn test_lookup_fields_for_selection() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(&dir, SAMPLE);

    let dataset = source::load_dataset(&path).await.unwrap();

    let code_depot = dataset.details("CodeDepot");
    assert_eq!(
        code_depot.package_name.as_deref(),
        Some("CM_CodeDepot_Rules_v12")
    );
    assert_eq!(
        code_depot.description.as_deref(),
        Some("Rules for the CodeDepot app")
    );

    // No package entries for this app: both fields absent, no error.
    let uhc = dataset.details("UHC Console");
    assert_eq!(uhc.package_name, None);
    assert_eq!(uhc.description, None);
}

#[tokio::test]
async fn test_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let err = source::load_dataset(&path).await.unwrap_err();

    assert!(matches!(err, SourceError::NotFound { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[tokio::test]
async fn test_malformed_json_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(&dir, "{broken");

    let err = source::load_dataset(&path).await.unwrap_err();

    assert!(matches!(err, SourceError::Malformed { .. }));
    assert!(err.to_string().contains("sample.json"));
}

#[tokio::test]
async fn test_selection_round_trip() {
    let dir = TempDir::new().unwrap();
    let data_path = write_dataset(&dir, SAMPLE);

    let config = AppConfig {
        selected_app: Some("OPT Portal".to_string()),
    };
    save_config_to(dir.path(), &config).await.unwrap();

    // A fresh load restores the same selection with identical fields.
    let restored = load_config_from(dir.path()).await;
    assert_eq!(restored.selected_app.as_deref(), Some("OPT Portal"));

    let dataset = source::load_dataset(&data_path).await.unwrap();
    let selection = dataset
        .restorable_selection(restored.selected_app.as_deref())
        .unwrap();
    assert_eq!(
        dataset.details(selection).package_name.as_deref(),
        Some("CM_OPT_Rules_v7")
    );
}

#[tokio::test]
async fn test_clear_removes_selection() {
    let dir = TempDir::new().unwrap();

    save_config_to(
        dir.path(),
        &AppConfig {
            selected_app: Some("CodeDepot".to_string()),
        },
    )
    .await
    .unwrap();
    save_config_to(dir.path(), &AppConfig { selected_app: None })
        .await
        .unwrap();

    let restored = load_config_from(dir.path()).await;
    assert_eq!(restored.selected_app, None);

    // The cleared config stores no key at all, unlike an empty selection.
    let raw = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(!raw.contains("selectedApp"));
}

#[tokio::test]
async fn test_empty_selection_persists_distinctly() {
    let dir = TempDir::new().unwrap();

    save_config_to(
        dir.path(),
        &AppConfig {
            selected_app: Some(String::new()),
        },
    )
    .await
    .unwrap();

    let restored = load_config_from(dir.path()).await;
    assert_eq!(restored.selected_app.as_deref(), Some(""));

    // Empty and absent selections both restore as "no selection".
    let dir2 = TempDir::new().unwrap();
    let data_path = write_dataset(&dir2, SAMPLE);
    let dataset = source::load_dataset(&data_path).await.unwrap();
    assert_eq!(
        dataset.restorable_selection(restored.selected_app.as_deref()),
        None
    );
}

#[tokio::test]
async fn test_selection_absent_from_new_dataset_restores_empty() {
    let dir = TempDir::new().unwrap();
    let data_path = write_dataset(&dir, SAMPLE);

    save_config_to(
        dir.path(),
        &AppConfig {
            selected_app: Some("Removed App".to_string()),
        },
    )
    .await
    .unwrap();

    let restored = load_config_from(dir.path()).await;
    let dataset = source::load_dataset(&data_path).await.unwrap();

    assert_eq!(
        dataset.restorable_selection(restored.selected_app.as_deref()),
        None
    );
}

#[tokio::test]
async fn test_unreadable_config_behaves_like_absent() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{broken").unwrap();

    let restored = load_config_from(dir.path()).await;

    assert_eq!(restored.selected_app, None);
}

#[tokio::test]
async fn test_reload_sees_fresh_dataset() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(&dir, SAMPLE);

    let first = source::load_dataset(&path).await.unwrap();
    assert!(first.contains_app("CodeDepot"));

    std::fs::write(
        &path,
        r#"{"RULE_TARGET_APP_LISTS": {"only": ["Billing Hub"]}}"#,
    )
    .unwrap();

    // No caching between loads: the rewrite is visible immediately.
    let second = source::load_dataset(&path).await.unwrap();
    assert_eq!(second.app_names(), vec!["Billing Hub"]);
    assert!(!second.contains_app("CodeDepot"));
}

//! Integration tests for artifact writing.

use blogscan_analysis::{BatchAnalysisResult, RankedWord};
use blogscan_suite::{ArtifactStore, CheckOutcome, ReportDocument};
use chrono::{TimeZone, Utc};
use std::fs;
use tempfile::TempDir;

#[tokio::test]
async fn test_creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("nested").join("reports");
    let store = ArtifactStore::new(&out, Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap());

    let path = store.write_report("Word Frequency Analysis Report\n").await.unwrap();

    assert!(out.is_dir());
    assert_eq!(
        path.file_name().unwrap(),
        "word-frequency-report-20260102T030405Z.txt"
    );
    assert_eq!(fs::read_to_string(path).unwrap(), "Word Frequency Analysis Report\n");
}

#[tokio::test]
async fn test_json_sidecar_is_pretty_camel_case() {
    let temp = TempDir::new().unwrap();
    let at = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();
    let store = ArtifactStore::new(temp.path(), at);

    let top = vec![RankedWord::new("rust", 4)];
    let analysis = BatchAnalysisResult::default();
    let checks = vec![CheckOutcome::pass("listing: page title", "\"Blog\"")];

    let path = store
        .write_json(&ReportDocument {
            generated_at: at,
            base_url: "https://blog.example",
            top_words: &top,
            analysis: &analysis,
            checks: &checks,
        })
        .await
        .unwrap();

    assert_eq!(path, store.json_path());
    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains('\n'), "sidecar should be pretty-printed");

    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["baseUrl"], "https://blog.example");
    assert_eq!(json["topWords"][0]["word"], "rust");
    assert_eq!(json["topWords"][0]["count"], 4);
    assert_eq!(json["analysis"]["totalArticles"], 0);
    assert_eq!(json["checks"][0]["name"], "listing: page title");
}

#[tokio::test]
async fn test_screenshots_go_to_subdirectory() {
    let temp = TempDir::new().unwrap();
    let store = ArtifactStore::new(temp.path(), Utc::now());

    let png = [0x89, b'P', b'N', b'G'];
    let path = store.save_screenshot("article 2", &png).await.unwrap();

    assert_eq!(path.parent().unwrap(), temp.path().join("screenshots"));
    assert!(
        path.file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("article-2-")
    );
    assert_eq!(fs::read(path).unwrap(), png);
}

#[tokio::test]
async fn test_unwritable_dir_reports_path() {
    let temp = TempDir::new().unwrap();
    // A file where the output directory should be
    let blocker = temp.path().join("reports");
    fs::write(&blocker, "not a directory").unwrap();

    let store = ArtifactStore::new(&blocker, Utc::now());
    let err = store.write_report("report").await.unwrap_err();
    assert!(matches!(
        err,
        blogscan_suite::SuiteError::ArtifactWrite { .. }
    ));
}

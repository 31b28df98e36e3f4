use async_trait::async_trait;

use crate::kernel::error::{Error, Result};
use crate::update::{ReleaseSource, UpdateStatus, check_for_updates, compare_versions, extract_version};

// --- Mock Setup ---

enum MockSource {
    Tag(&'static str),
    Empty,
    Broken,
}

#[async_trait]
impl ReleaseSource for MockSource {
    async fn latest_version(&self) -> Result<Option<String>> {
        match self {
            MockSource::Tag(tag) => Ok(Some(tag.to_string())),
            MockSource::Empty => Ok(None),
            MockSource::Broken => Err(Error::Update {
                message: "connection refused".to_string(),
                source: None,
            }),
        }
    }
}

// --- Tests ---

#[test]
fn test_compare_semver() {
    assert_eq!(
        compare_versions("1.7.3", "v1.8.0"),
        UpdateStatus::Available {
            current: "1.7.3".to_string(),
            latest: "v1.8.0".to_string()
        }
    );
    assert_eq!(compare_versions("1.8.0", "1.8.0"), UpdateStatus::UpToDate);
    assert_eq!(compare_versions("V1.8.0", "v1.8.0"), UpdateStatus::UpToDate);
    // A newer local build is not an update
    assert_eq!(compare_versions("2.0.0", "1.9.9"), UpdateStatus::UpToDate);
    assert_eq!(compare_versions("1.10.0", "1.9.0"), UpdateStatus::UpToDate);
}

#[test]
fn test_compare_falls_back_to_inequality() {
    assert_eq!(compare_versions("1.7", "1.7"), UpdateStatus::UpToDate);
    assert!(matches!(compare_versions("1.7", "1.7b"), UpdateStatus::Available { .. }));
}

#[test]
fn test_extract_version() {
    assert_eq!(
        extract_version(r#"{"tag_name": "1.7.3-b1", "name": "Release"}"#).as_deref(),
        Some("1.7.3-b1")
    );
    assert_eq!(extract_version(r#"{"name": "no tag"}"#), None);
    assert_eq!(extract_version(r#"{"tag_name": 7}"#), None);
    assert_eq!(extract_version("<html>rate limited</html>"), None);
}

#[tokio::test]
async fn test_check_reports_available_update() {
    let status = check_for_updates(&MockSource::Tag("9.9.9"), "0.1.0", "https://example.invalid").await;
    assert_eq!(
        status,
        UpdateStatus::Available {
            current: "0.1.0".to_string(),
            latest: "9.9.9".to_string()
        }
    );
}

#[tokio::test]
async fn test_check_up_to_date() {
    let status = check_for_updates(&MockSource::Tag("0.1.0"), "0.1.0", "https://example.invalid").await;
    assert_eq!(status, UpdateStatus::UpToDate);
}

#[tokio::test]
async fn test_check_failures_are_unknown() {
    assert_eq!(
        check_for_updates(&MockSource::Broken, "0.1.0", "https://example.invalid").await,
        UpdateStatus::Unknown
    );
    assert_eq!(
        check_for_updates(&MockSource::Empty, "0.1.0", "https://example.invalid").await,
        UpdateStatus::Unknown
    );
}

//! # Update Checker
//!
//! Looks up the latest published release and tells the operator when it
//! differs from the running version. Failures are logged and reported as
//! [`UpdateStatus::Unknown`]; they never propagate into the registry.
use std::time::Duration;

use async_trait::async_trait;
use semver::Version;

use crate::config::UpdateSettings;
use crate::kernel::error::Result;

/// Where the latest release tag comes from
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Latest release tag, `None` when the source has none
    async fn latest_version(&self) -> Result<Option<String>>;
}

/// GitHub "latest release" endpoint
pub struct GithubReleases {
    client: reqwest::Client,
    api_url: String,
}

impl GithubReleases {
    pub fn new(api_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("vault/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }
}

#[async_trait]
impl ReleaseSource for GithubReleases {
    async fn latest_version(&self) -> Result<Option<String>> {
        let body = self
            .client
            .get(&self.api_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(extract_version(&body))
    }
}

/// Pull `tag_name` out of a release JSON document
pub fn extract_version(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("tag_name")
        .and_then(|tag| tag.as_str())
        .map(str::to_string)
}

/// Result of comparing the running version with the latest release
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
    UpToDate,
    Available { current: String, latest: String },
    /// The latest release could not be determined
    Unknown,
}

fn parse_tag(tag: &str) -> Option<Version> {
    Version::parse(tag.trim().trim_start_matches(['v', 'V'])).ok()
}

/// Compare versions; semver when both parse, plain inequality otherwise
pub fn compare_versions(current: &str, latest: &str) -> UpdateStatus {
    let newer = match (parse_tag(current), parse_tag(latest)) {
        (Some(current), Some(latest)) => latest > current,
        _ => current.trim() != latest.trim(),
    };
    if newer {
        UpdateStatus::Available {
            current: current.to_string(),
            latest: latest.to_string(),
        }
    } else {
        UpdateStatus::UpToDate
    }
}

/// Query `source` and log the outcome
pub async fn check_for_updates(source: &dyn ReleaseSource, current: &str, download_url: &str) -> UpdateStatus {
    let status = match source.latest_version().await {
        Ok(Some(latest)) => compare_versions(current, &latest),
        Ok(None) => UpdateStatus::Unknown,
        Err(e) => {
            log::debug!("Release lookup failed: {}", e);
            UpdateStatus::Unknown
        }
    };

    match &status {
        UpdateStatus::Available { current, latest } => {
            log::warn!("A new version is available. (Current: {}, Latest: {})", current, latest);
            log::warn!("Download it at: {}", download_url);
        }
        UpdateStatus::Unknown => log::warn!("Failed to fetch the latest release version."),
        UpdateStatus::UpToDate => log::info!("Vault {} is up to date.", current),
    }
    status
}

/// Build the configured source and run [`check_for_updates`]
pub async fn run_update_check(settings: &UpdateSettings, current: &str) -> UpdateStatus {
    match GithubReleases::new(settings.api_url.clone()) {
        Ok(source) => check_for_updates(&source, current, &settings.download_url).await,
        Err(e) => {
            log::warn!("Could not set up the update checker: {}", e);
            UpdateStatus::Unknown
        }
    }
}

// Test module declaration
#[cfg(test)]
mod tests;

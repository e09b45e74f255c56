//! Submission intake for new directory entries.
//!
//! Accepted submissions are forwarded to an external store (a spreadsheet
//! webhook, or a local file when no webhook is configured). They never
//! enter the live catalog; inclusion requires a republish of the seed.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Errors from storing a submission.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("missing required fields: name, description, category")]
    MissingFields,

    #[error("submission webhook returned status {0}")]
    WebhookStatus(u16),

    #[error("failed to reach submission webhook: {0}")]
    WebhookTransport(String),

    #[error("failed to write submission file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Incoming submission payload. Only name, description, and category are
/// required; everything else is defaulted the way the intake always has.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmissionRequest {
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub repository_url: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub open_source: bool,
    #[serde(default = "default_engagement")]
    pub engagement_level: String,
    #[serde(default)]
    pub key_indicators: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub launch_approx: String,
    #[serde(default)]
    pub submitter_twitter: String,
    #[serde(default)]
    pub submitter_email: String,
}

fn default_status() -> String {
    "Live".to_string()
}

fn default_engagement() -> String {
    "Emerging".to_string()
}

impl SubmissionRequest {
    /// Required-field check; blank strings count as missing.
    pub fn validate(&self) -> Result<(), SubmitError> {
        if self.name.trim().is_empty()
            || self.description.trim().is_empty()
            || self.category.trim().is_empty()
        {
            return Err(SubmitError::MissingFields);
        }
        Ok(())
    }

    /// Stamp the request with a generated id and receipt time.
    pub fn into_stored(self) -> StoredSubmission {
        StoredSubmission {
            id: generate_id(),
            submitted_at: Utc::now(),
            request: self,
        }
    }
}

/// A validated submission as handed to the sink.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSubmission {
    pub id: String,
    pub submitted_at: DateTime<Utc>,
    #[serde(flatten)]
    pub request: SubmissionRequest,
}

/// Ids keep the historical `sub_<unix-millis>_<suffix>` shape so existing
/// spreadsheet rows stay sortable by receipt time.
fn generate_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("sub_{}_{}", Utc::now().timestamp_millis(), &suffix[..9])
}

/// Destination for accepted submissions.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn store(&self, submission: &StoredSubmission) -> Result<(), SubmitError>;

    /// Human-readable description of where submissions land.
    fn describe(&self) -> String;
}

/// Forwards submissions to the configured spreadsheet webhook.
pub struct WebhookSink {
    client: reqwest::Client,
    webhook_url: String,
}

impl WebhookSink {
    pub fn new(webhook_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            webhook_url,
        }
    }
}

#[async_trait]
impl SubmissionSink for WebhookSink {
    async fn store(&self, submission: &StoredSubmission) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(&self.webhook_url)
            .json(submission)
            .send()
            .await
            .map_err(|e| SubmitError::WebhookTransport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "submission webhook rejected payload");
            return Err(SubmitError::WebhookStatus(status.as_u16()));
        }

        info!(id = %submission.id, "submission forwarded to webhook");
        Ok(())
    }

    fn describe(&self) -> String {
        "spreadsheet webhook".to_string()
    }
}

/// Appends submissions to a local file, one JSON object per line.
/// Fallback when no webhook is configured.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SubmissionSink for FileSink {
    async fn store(&self, submission: &StoredSubmission) -> Result<(), SubmitError> {
        let io_err = |source| SubmitError::FileWrite {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }

        // Serialization of an owned struct cannot fail here
        let mut line = serde_json::to_string(submission).map_err(|e| SubmitError::FileWrite {
            path: self.path.clone(),
            source: std::io::Error::other(e),
        })?;
        line.push('\n');

        // Append-only: earlier lines are never rewritten
        let mut file = tokio::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .await
            .map_err(io_err)?;
        file.write_all(line.as_bytes()).await.map_err(io_err)?;
        // tokio files buffer writes; flush before drop or the line may be lost
        file.flush().await.map_err(io_err)?;

        info!(id = %submission.id, path = %self.path.display(), "submission appended to file");
        Ok(())
    }

    fn describe(&self) -> String {
        format!("local file {}", self.path.display())
    }
}

/// Pick the sink once at startup: webhook when configured, file otherwise.
pub fn sink_from_config(
    webhook_url: Option<&str>,
    fallback_path: PathBuf,
) -> Arc<dyn SubmissionSink> {
    match webhook_url {
        Some(url) if !url.trim().is_empty() => Arc::new(WebhookSink::new(url.to_string())),
        _ => Arc::new(FileSink::new(fallback_path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn request(name: &str) -> SubmissionRequest {
        SubmissionRequest {
            name: name.to_string(),
            description: "A new agent directory entry".to_string(),
            category: "Marketplace".to_string(),
            url: None,
            repository_url: None,
            status: default_status(),
            open_source: false,
            engagement_level: default_engagement(),
            key_indicators: String::new(),
            features: vec!["Escrow".to_string()],
            launch_approx: "March 2026".to_string(),
            submitter_twitter: String::new(),
            submitter_email: String::new(),
        }
    }

    #[test]
    fn test_validate_requires_core_fields() {
        assert!(request("Moltroad").validate().is_ok());

        let mut missing_name = request("");
        missing_name.name = "   ".to_string();
        assert!(matches!(
            missing_name.validate(),
            Err(SubmitError::MissingFields)
        ));

        let mut missing_category = request("Moltroad");
        missing_category.category = String::new();
        assert!(missing_category.validate().is_err());
    }

    #[test]
    fn test_defaults_applied_on_deserialize() {
        let req: SubmissionRequest = serde_json::from_str(
            r#"{"name":"X","description":"d","category":"Gaming"}"#,
        )
        .unwrap();
        assert_eq!(req.status, "Live");
        assert_eq!(req.engagement_level, "Emerging");
        assert!(!req.open_source);
        assert!(req.features.is_empty());
    }

    #[test]
    fn test_generated_id_shape() {
        let stored = request("Moltroad").into_stored();
        assert!(stored.id.starts_with("sub_"));
        let parts: Vec<&str> = stored.id.splitn(3, '_').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 9);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = generate_id();
        let b = generate_id();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_file_sink_appends_json_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("submissions.jsonl");
        let sink = FileSink::new(path.clone());

        sink.store(&request("First").into_stored()).await.unwrap();
        sink.store(&request("Second").into_stored()).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: StoredSubmission = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first.request.name, "First");
        let second: StoredSubmission = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second.request.name, "Second");
    }

    #[tokio::test]
    async fn test_file_sink_preserves_existing_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("submissions.jsonl");
        let mut earlier = serde_json::to_string(&request("Earlier").into_stored()).unwrap();
        earlier.push('\n');
        std::fs::write(&path, &earlier).unwrap();

        let sink = FileSink::new(path.clone());
        sink.store(&request("Later").into_stored()).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: StoredSubmission = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first.request.name, "Earlier");
        let second: StoredSubmission = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second.request.name, "Later");
    }

    #[tokio::test]
    async fn test_file_sink_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/state/submissions.jsonl");
        let sink = FileSink::new(path.clone());
        sink.store(&request("Nested").into_stored()).await.unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_sink_selection() {
        let fallback = PathBuf::from("/tmp/subs.jsonl");
        let sink = sink_from_config(Some("https://hooks.example/abc"), fallback.clone());
        assert_eq!(sink.describe(), "spreadsheet webhook");

        let sink = sink_from_config(None, fallback.clone());
        assert!(sink.describe().contains("subs.jsonl"));

        // Blank url falls back to the file sink
        let sink = sink_from_config(Some("  "), fallback);
        assert!(sink.describe().contains("local file"));
    }

    #[test]
    fn test_stored_submission_flattens_request() {
        let stored = request("Flat").into_stored();
        let value = serde_json::to_value(&stored).unwrap();
        assert_eq!(value["name"], "Flat");
        assert!(value["id"].as_str().unwrap().starts_with("sub_"));
        assert!(value.get("request").is_none());
    }
}

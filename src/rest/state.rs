//! API state management for the REST server.

use std::sync::Arc;

use anyhow::Result;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::submit::{sink_from_config, SubmissionSink};

/// Shared state for the REST API
#[derive(Clone)]
pub struct ApiState {
    /// Immutable record set loaded at startup
    pub catalog: Arc<Catalog>,
    /// Application configuration
    pub config: Arc<Config>,
    /// Destination for accepted submissions
    pub sink: Arc<dyn SubmissionSink>,
}

impl ApiState {
    /// Build state from config: load the seed (configured path or the
    /// embedded dataset) and pick the submission sink.
    pub fn from_config(config: Config) -> Result<Self> {
        let catalog = match config.seed_path() {
            Some(path) => Catalog::from_path(&path)?,
            None => Catalog::builtin()?,
        };
        tracing::info!(records = catalog.len(), "catalog loaded");

        let sink = sink_from_config(
            config.submissions.webhook_url.as_deref(),
            config.submissions_fallback_path(),
        );

        Ok(Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
            sink,
        })
    }

    /// State with an explicit catalog and sink, used by tests.
    pub fn new(config: Config, catalog: Catalog, sink: Arc<dyn SubmissionSink>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
            sink,
        }
    }

    pub fn webhook_configured(&self) -> bool {
        self.config
            .submissions
            .webhook_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }
}

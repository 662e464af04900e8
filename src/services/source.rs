use crate::config::SourceSettings;
use crate::models::{Job, Worker};
use reqwest::header::ACCEPT;
use reqwest::{redirect, Client};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when fetching the source collections
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    Api(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// HTTP client for the upstream job and worker collections
///
/// Each fetch returns the full collection. Redirects are followed and
/// logged hop by hop.
pub struct SourceClient {
    jobs_url: String,
    workers_url: String,
    client: Client,
}

impl SourceClient {
    /// Create a new source client
    pub fn new(settings: &SourceSettings) -> Result<Self, SourceError> {
        let max_redirects = settings.max_redirects;
        let policy = redirect::Policy::custom(move |attempt| {
            if attempt.previous().len() > max_redirects {
                return attempt.error(format!("more than {} redirects", max_redirects));
            }
            tracing::info!(
                "Following {} redirect to {}",
                attempt.status(),
                attempt.url()
            );
            attempt.follow()
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .redirect(policy)
            .build()?;

        Ok(Self {
            jobs_url: settings.jobs_url.clone(),
            workers_url: settings.workers_url.clone(),
            client,
        })
    }

    /// Fetch the full job collection
    pub async fn fetch_jobs(&self) -> Result<Vec<Job>, SourceError> {
        self.fetch_collection(&self.jobs_url, "jobs").await
    }

    /// Fetch the full worker collection
    pub async fn fetch_workers(&self) -> Result<Vec<Worker>, SourceError> {
        self.fetch_collection(&self.workers_url, "workers").await
    }

    async fn fetch_collection<T>(&self, url: &str, collection: &str) -> Result<Vec<T>, SourceError>
    where
        T: DeserializeOwned,
    {
        tracing::debug!("Fetching {} from: {}", collection, url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SourceError::Api(format!(
                "Failed to fetch {}: {}",
                collection,
                response.status()
            )));
        }

        let body = response.text().await?;
        let items: Vec<T> = serde_json::from_str(&body).map_err(|e| {
            SourceError::InvalidResponse(format!("Failed to parse {}: {}", collection, e))
        })?;

        tracing::debug!("Fetched {} {}", items.len(), collection);

        Ok(items)
    }
}

use std::fmt;
use std::path::{Path, PathBuf};

use crate::types::Dataset;

/// Where the dataset document lives.
#[derive(Debug, Clone)]
pub enum DatasetSource {
    File(PathBuf),
    Url(String),
}

impl DatasetSource {
    /// Anything with an http(s) scheme is remote, the rest is a path.
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            DatasetSource::Url(raw.to_string())
        } else {
            DatasetSource::File(PathBuf::from(raw))
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::File(path) => write!(f, "{}", path.display()),
            DatasetSource::Url(url) => write!(f, "{url}"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("dataset fetch failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("dataset fetch returned HTTP {status}")]
    Http { status: u16 },
    #[error("dataset is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read and parse the dataset from a file.
pub async fn load_from_file(path: &Path) -> Result<Dataset, LoadError> {
    tracing::info!("Loading dataset from file: {}", path.display());
    let json = tokio::fs::read_to_string(path).await?;
    let dataset = Dataset::from_json(&json)?;
    tracing::info!("Loaded {} dataset rows", dataset.len());
    Ok(dataset)
}

/// Fetch and parse the dataset over HTTP.
pub async fn fetch_from_url(url: &str) -> Result<Dataset, LoadError> {
    tracing::info!("Fetching dataset from {}", url);
    let response = reqwest::get(url).await?;
    if !response.status().is_success() {
        return Err(LoadError::Http {
            status: response.status().as_u16(),
        });
    }
    let json = response.text().await?;
    let dataset = Dataset::from_json(&json)?;
    tracing::info!("Loaded {} dataset rows", dataset.len());
    Ok(dataset)
}

/// Load from either kind of source.
pub async fn load(source: &DatasetSource) -> Result<Dataset, LoadError> {
    match source {
        DatasetSource::File(path) => load_from_file(path).await,
        DatasetSource::Url(url) => fetch_from_url(url).await,
    }
}

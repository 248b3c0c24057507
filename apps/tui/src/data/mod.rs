// Data module for heatmap
// Loads the monthly variance payload and normalizes it into a Dataset

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{Dataset, RawDataset};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("record for {year} has month {month}, expected 1-12")]
    InvalidMonth { year: i32, month: i64 },

    #[error("dataset has no monthly records")]
    EmptyDataset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Remote(String),
    File(PathBuf),
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Load and normalize the dataset. One attempt, no retry.
pub async fn load(source: &DataSource, hue_range: [f64; 2]) -> Result<Dataset, LoadError> {
    info!(source = %source, "loading dataset");

    let raw = match source {
        DataSource::Remote(url) => fetch(url).await?,
        DataSource::File(path) => read_file(path).await?,
    };

    let dataset = Dataset::normalize(raw, hue_range)?;
    info!(
        records = dataset.len(),
        base_temperature = dataset.base_temperature,
        "dataset loaded"
    );
    Ok(dataset)
}

/// Parse and normalize a payload already in memory.
pub fn parse_dataset(json: &str, hue_range: [f64; 2]) -> Result<Dataset, LoadError> {
    let raw: RawDataset = serde_json::from_str(json)?;
    Dataset::normalize(raw, hue_range)
}

async fn fetch(url: &str) -> Result<RawDataset, LoadError> {
    let http_error = |source: reqwest::Error| LoadError::Http {
        url: url.to_string(),
        source,
    };

    let response = reqwest::get(url).await.map_err(http_error)?;
    let status = response.status();
    debug!(url, status = status.as_u16(), "dataset response");

    if !status.is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    // The raw GitHub host serves text/plain, so decode the body ourselves.
    let body = response.text().await.map_err(http_error)?;
    Ok(serde_json::from_str(&body)?)
}

async fn read_file(path: &Path) -> Result<RawDataset, LoadError> {
    let body = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(serde_json::from_str(&body)?)
}

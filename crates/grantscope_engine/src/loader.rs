use std::path::{Path, PathBuf};
use std::time::Duration;

use grantscope_core::Record;
use guide_logging::guide_warn;
use thiserror::Error;

use crate::wire::RawRecord;

/// Standard part files of the published data layout, loaded in order.
pub const DEFAULT_PARTS: [&str; 4] = [
    "grants_part1.json",
    "grants_part2.json",
    "grants_part3.json",
    "grants_part4.json",
];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("http client setup failed: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },
    #[error("request for {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("http status {status} for {url}")]
    HttpStatus { url: String, status: u16 },
    #[error("payload {origin} is not a JSON array: {detail}")]
    Payload { origin: String, detail: String },
}

/// A one-shot source of the complete record collection. The collection is
/// delivered atomically before the first filter computation; partial or
/// streaming loads are out of scope.
#[async_trait::async_trait]
pub trait RecordSource: Send + Sync {
    async fn load(&self) -> Result<Vec<Record>, LoadError>;
}

/// Reads record parts from JSON files on disk and concatenates them in
/// order.
#[derive(Debug, Clone)]
pub struct FileRecordSource {
    paths: Vec<PathBuf>,
}

impl FileRecordSource {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    /// The standard four-part layout under `data_dir`.
    pub fn standard_parts(data_dir: &Path) -> Self {
        Self::new(DEFAULT_PARTS.iter().map(|part| data_dir.join(part)).collect())
    }
}

#[async_trait::async_trait]
impl RecordSource for FileRecordSource {
    async fn load(&self) -> Result<Vec<Record>, LoadError> {
        let mut all = Vec::new();
        for path in &self.paths {
            let origin = path.display().to_string();
            let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
                path: origin.clone(),
                source,
            })?;
            all.extend(decode_batch(&text, &origin)?);
        }
        Ok(all)
    }
}

/// Fetches the same part layout over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRecordSource {
    urls: Vec<String>,
}

impl HttpRecordSource {
    pub fn new(urls: Vec<String>) -> Self {
        Self { urls }
    }

    fn build_client(&self) -> Result<reqwest::Client, LoadError> {
        reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|source| LoadError::Client { source })
    }
}

#[async_trait::async_trait]
impl RecordSource for HttpRecordSource {
    async fn load(&self) -> Result<Vec<Record>, LoadError> {
        let client = self.build_client()?;
        let mut all = Vec::new();
        for url in &self.urls {
            let response = client
                .get(url)
                .send()
                .await
                .map_err(|source| LoadError::Http {
                    url: url.clone(),
                    source,
                })?;
            let status = response.status();
            if !status.is_success() {
                return Err(LoadError::HttpStatus {
                    url: url.clone(),
                    status: status.as_u16(),
                });
            }
            let text = response.text().await.map_err(|source| LoadError::Http {
                url: url.clone(),
                source,
            })?;
            all.extend(decode_batch(&text, url)?);
        }
        Ok(all)
    }
}

/// Decodes one JSON part. The payload must be a top-level array; individual
/// elements that fail to decode are skipped with a warning rather than
/// rejecting the whole batch.
pub fn decode_batch(text: &str, origin: &str) -> Result<Vec<Record>, LoadError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|err| LoadError::Payload {
            origin: origin.to_string(),
            detail: err.to_string(),
        })?;
    let serde_json::Value::Array(items) = value else {
        return Err(LoadError::Payload {
            origin: origin.to_string(),
            detail: "expected a top-level array".to_string(),
        });
    };

    let total = items.len();
    let mut records = Vec::with_capacity(total);
    let mut skipped = 0usize;
    for item in items {
        match serde_json::from_value::<RawRecord>(item) {
            Ok(raw) => records.push(raw.into_record()),
            Err(err) => {
                skipped += 1;
                guide_warn!("Skipping malformed record in {}: {}", origin, err);
            }
        }
    }
    if skipped > 0 {
        guide_warn!("{} of {} records in {} were malformed", skipped, total, origin);
    }
    Ok(records)
}

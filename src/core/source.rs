//! Dataset loading
//!
//! The dataset is a standalone JSON file on disk. Every load re-reads the
//! file; no parsed dataset is cached between loads, so a reload always sees
//! the freshest contents.

use crate::core::dataset::RuleDataset;
use std::path::{Path, PathBuf};

/// Default dataset location, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/sample.json";

/// Error type for dataset loading. Messages carry the path so the UI status
/// line can point at the offending file.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to load {}: file not found", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to load {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Loads and parses the dataset at `path`.
///
/// # Async
/// Uses `tokio::fs` for non-blocking file I/O.
pub async fn load_dataset(path: &Path) -> Result<RuleDataset, SourceError> {
    let exists = tokio::fs::try_exists(path)
        .await
        .map_err(|source| SourceError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
    if !exists {
        return Err(SourceError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SourceError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

    let dataset = RuleDataset::parse(&text).map_err(|source| SourceError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        "Loaded dataset from {} ({} apps)",
        path.display(),
        dataset.app_names().len()
    );

    Ok(dataset)
}

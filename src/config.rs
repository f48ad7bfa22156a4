use crate::utils::get_data_dir;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration persisted across runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Last selected app. `Some("")` records a placeholder re-selection;
    /// `None` means cleared or never set. Both restore as no selection, but
    /// they are stored distinctly: a cleared selection has no key on disk.
    #[serde(
        rename = "selectedApp",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub selected_app: Option<String>,
}

/// Saves the app config to disk using an atomic write pattern.
/// 1. Writes to a temporary file.
/// 2. Sets restrictive permissions (0o600).
/// 3. Atomically renames to the target path.
///
/// # Async
/// Uses `tokio::fs` for non-blocking I/O to avoid blocking the event loop.
pub async fn save_config(config: &AppConfig) -> std::io::Result<()> {
    if let Some(dir) = get_data_dir() {
        save_config_to(&dir, config).await?;
    }
    Ok(())
}

/// Saves the app config into an explicit directory. See [`save_config`].
pub async fn save_config_to(dir: &Path, config: &AppConfig) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(config)?;

    let temp_path = dir.join("config.json.tmp");
    let path = dir.join("config.json");

    // Create file with restrictive permissions from the start to prevent
    // race condition where file is briefly world-readable
    #[cfg(unix)]
    {
        use tokio::fs::OpenOptions;
        use tokio::io::AsyncWriteExt;

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .mode(0o600)
            .open(&temp_path)
            .await?;

        file.write_all(json.as_bytes()).await?;
        file.sync_all().await?;
    }

    #[cfg(not(unix))]
    {
        use tokio::io::AsyncWriteExt;

        let mut file = tokio::fs::File::create(&temp_path).await?;
        file.write_all(json.as_bytes()).await?;
        file.sync_all().await?;
    }

    // Atomic rename
    tokio::fs::rename(temp_path, path).await
}

/// Loads the app config from disk, or returns default if not found.
/// Read failures are swallowed: a broken or unreadable config behaves like
/// an absent one.
///
/// # Async
/// Uses `tokio::fs` for non-blocking I/O to avoid blocking the event loop.
pub async fn load_config() -> AppConfig {
    if let Some(dir) = get_data_dir() {
        return load_config_from(&dir).await;
    }
    AppConfig::default()
}

/// Loads the app config from an explicit directory. See [`load_config`].
pub async fn load_config_from(dir: &Path) -> AppConfig {
    let path = dir.join("config.json");
    if let Ok(json) = tokio::fs::read_to_string(&path).await
        && let Ok(config) = serde_json::from_str::<AppConfig>(&json)
    {
        return config;
    }
    AppConfig::default()
}

use crate::core::export::ExportFormat;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{LazyLock, Mutex, PoisonError};

const CONFIG_FILE: &str = "config.json";

/// Persisted user preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Last format chosen on the export page
    #[serde(default)]
    pub export_format: ExportFormat,
    /// `tracing` filter directive, overridden by `--log-level`
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            export_format: ExportFormat::default(),
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE)
}

/// Generation handed to each `save_config` call, in call order
static SAVE_GENERATION: AtomicU64 = AtomicU64::new(0);

/// Newest generation written per config path
static WRITTEN_GENERATIONS: LazyLock<Mutex<HashMap<PathBuf, u64>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Saves the app config to disk using an atomic write pattern.
/// 1. Writes to a uniquely named temporary file (0o600 on Unix).
/// 2. Atomically renames it over the target path.
///
/// Calls are ordered when made, not when their futures run: if saves overlap,
/// the one requested last wins and older ones are skipped.
///
/// # Async
/// The blocking write runs on tokio's blocking pool, off the event loop.
pub fn save_config(
    data_dir: PathBuf,
    config: AppConfig,
) -> impl Future<Output = std::io::Result<()>> + Send + 'static {
    let generation = SAVE_GENERATION.fetch_add(1, Ordering::SeqCst) + 1;
    async move {
        tokio::task::spawn_blocking(move || write_config(&data_dir, &config, generation))
            .await
            .map_err(std::io::Error::other)?
    }
}

fn write_config(data_dir: &Path, config: &AppConfig, generation: u64) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    let path = config_path(data_dir);

    let mut written = WRITTEN_GENERATIONS
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if written.get(&path).is_some_and(|&newest| newest > generation) {
        tracing::debug!("Skipping stale config save (generation {generation})");
        return Ok(());
    }

    std::fs::create_dir_all(data_dir)?;
    let mut temp = tempfile::Builder::new()
        .prefix(CONFIG_FILE)
        .suffix(".tmp")
        .tempfile_in(data_dir)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o600))?;
    }

    temp.write_all(json.as_bytes())?;
    temp.as_file().sync_all()?;

    temp.persist(&path).map_err(|e| {
        if e.error.kind() == std::io::ErrorKind::StorageFull {
            std::io::Error::new(
                std::io::ErrorKind::StorageFull,
                "Disk full: cannot save configuration. Free up space and try again.",
            )
        } else {
            e.error
        }
    })?;
    written.insert(path, generation);
    Ok(())
}

/// Loads the app config, or returns defaults if missing or unreadable.
///
/// Synchronous: only called once during startup, before the GUI runtime exists.
pub fn load_config(data_dir: &Path) -> AppConfig {
    let path = config_path(data_dir);
    match std::fs::read_to_string(&path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
            tracing::warn!("Ignoring invalid {}: {e}", path.display());
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

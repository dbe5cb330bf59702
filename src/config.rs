use anyhow::{Context, Result};
use std::path::PathBuf;

/// Runtime configuration, resolved once at startup and passed down
/// explicitly. `default_account` and `currency` are display defaults only;
/// the store never enforces them.
#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) db_path: PathBuf,
    pub(crate) default_account: String,
    pub(crate) currency: String,
}

impl Config {
    pub(crate) fn load() -> Result<Self> {
        Ok(Self {
            db_path: resolve_db_path()?,
            default_account: "TFSA".to_string(),
            currency: "CAD".to_string(),
        })
    }
}

/// `FOLIOTUI_DB` overrides the platform data directory. This is the only
/// environment variable the program reads.
fn resolve_db_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("FOLIOTUI_DB") {
        let path = PathBuf::from(path);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create data directory: {}", parent.display())
                })?;
            }
        }
        return Ok(path);
    }

    let proj_dirs = directories::ProjectDirs::from("com", "foliotui", "FolioTUI")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join("portfolio.db"))
}
